//! Pure shaping of server rows into chart series, kept out of the canvas
//! components so it can be unit tested without a browser.

use shared::CategoryBreakdownRow;

/// One slice of the expense-breakdown pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: (u8, u8, u8),
}

const FALLBACK_SLICE_COLOR: (u8, u8, u8) = (255, 107, 53);

/// Upper bound for a value axis: 10% headroom over the largest value, and
/// never zero so an all-zero dataset still yields a drawable range.
pub fn value_ceiling<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let max = values.into_iter().fold(0.0f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

/// Parse a `#RRGGBB` colour token. Category colours come from the server as
/// hex strings chosen in the category form.
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Turn breakdown rows into pie slices, labelled with the server-computed
/// percentage. Rows with a non-positive total would render as invisible or
/// inverted slices and are skipped.
pub fn breakdown_slices(rows: &[CategoryBreakdownRow]) -> Vec<PieSlice> {
    rows.iter()
        .filter(|row| row.total > 0.0)
        .map(|row| PieSlice {
            label: format!("{} ({:.1}%)", row.category, row.percentage),
            value: row.total,
            color: parse_hex_color(&row.color).unwrap_or(FALLBACK_SLICE_COLOR),
        })
        .collect()
}

/// Label for an x axis tick at position `x`, given the row labels. Chart
/// coordinates are continuous, so the position is rounded to the nearest row.
pub fn axis_label(labels: &[String], x: f64) -> String {
    if labels.is_empty() {
        return String::new();
    }
    let index = x.round();
    if index < 0.0 || index >= labels.len() as f64 {
        return String::new();
    }
    labels[index as usize].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(category: &str, total: f64, color: &str, percentage: f64) -> CategoryBreakdownRow {
        CategoryBreakdownRow {
            category: category.into(),
            total,
            color: color.into(),
            percentage,
        }
    }

    #[test]
    fn ceiling_adds_headroom() {
        let ceiling = value_ceiling([100.0, 300.0, 200.0]);
        assert!((ceiling - 330.0).abs() < 1e-9);
    }

    #[test]
    fn ceiling_of_empty_or_zero_data_is_positive() {
        assert_eq!(value_ceiling([]), 1.0);
        assert_eq!(value_ceiling([0.0, 0.0]), 1.0);
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex_color("#2ECC71"), Some((0x2E, 0xCC, 0x71)));
        assert_eq!(parse_hex_color("#ffffff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("2ECC71"), None);
        assert_eq!(parse_hex_color("#2ECC7"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    #[test]
    fn slices_carry_percentage_labels_and_colors() {
        let rows = vec![
            row("Comida", 300.0, "#E74C3C", 60.0),
            row("Transporte", 200.0, "#3498DB", 40.0),
        ];
        let slices = breakdown_slices(&rows);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "Comida (60.0%)");
        assert_eq!(slices[0].color, (0xE7, 0x4C, 0x3C));
        assert_eq!(slices[1].value, 200.0);
    }

    #[test]
    fn non_positive_totals_are_skipped() {
        let rows = vec![row("Vacía", 0.0, "#3498DB", 0.0), row("Comida", 10.0, "#E74C3C", 100.0)];
        let slices = breakdown_slices(&rows);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].value, 10.0);
    }

    #[test]
    fn bad_color_token_falls_back() {
        let rows = vec![row("Comida", 10.0, "rojo", 100.0)];
        assert_eq!(breakdown_slices(&rows)[0].color, FALLBACK_SLICE_COLOR);
    }

    #[test]
    fn axis_labels_round_to_nearest_row() {
        let labels = vec!["Ene".to_string(), "Feb".to_string(), "Mar".to_string()];
        assert_eq!(axis_label(&labels, 0.0), "Ene");
        assert_eq!(axis_label(&labels, 1.4), "Feb");
        assert_eq!(axis_label(&labels, 1.6), "Mar");
        assert_eq!(axis_label(&labels, 2.0), "Mar");
        assert_eq!(axis_label(&labels, 5.0), "");
        assert_eq!(axis_label(&[], 0.0), "");
    }
}
