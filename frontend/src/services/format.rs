//! Locale formatting for amounts and dates, Colombian-peso style: whole
//! pesos, `.` as the thousands separator, short Spanish month names.

use shared::{Transaction, TransactionKind};

const MONTHS_SHORT: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Format an amount as currency, rounded to whole pesos: `$1.234.567`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let absolute = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-${absolute}")
    } else {
        format!("${absolute}")
    }
}

/// Currency with an explicit sign taken from the transaction kind, as shown
/// in list rows: `+$500` for income, `-$500` for expense.
pub fn format_transaction_amount(tx: &Transaction) -> String {
    let prefix = match tx.kind {
        TransactionKind::Income => "+",
        TransactionKind::Expense => "-",
    };
    format!("{}{}", prefix, format_currency(tx.amount.abs()))
}

/// Format an ISO-8601 date (`2024-01-05`) for display (`5 ene 2024`).
/// Anything that does not parse is shown verbatim rather than dropped.
pub fn format_date(iso: &str) -> String {
    let mut parts = iso.splitn(3, '-');
    let (year, month, day) = match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return iso.to_string(),
    };
    let month_index: usize = match month.parse::<usize>() {
        Ok(m) if (1..=12).contains(&m) => m - 1,
        _ => return iso.to_string(),
    };
    let day: u32 = match day.parse() {
        Ok(d) => d,
        Err(_) => return iso.to_string(),
    };
    format!("{} {} {}", day, MONTHS_SHORT[month_index], year)
}

/// Today's date as `YYYY-MM-DD`, used to pre-fill the transaction form.
pub fn today() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_with_dots() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(950.0), "$950");
        assert_eq!(format_currency(1234.0), "$1.234");
        assert_eq!(format_currency(1234567.0), "$1.234.567");
    }

    #[test]
    fn currency_rounds_to_whole_pesos() {
        assert_eq!(format_currency(1234.49), "$1.234");
        assert_eq!(format_currency(1234.5), "$1.235");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_currency(-1234.0), "-$1.234");
    }

    #[test]
    fn transaction_amount_is_signed_by_kind() {
        let mut tx = Transaction {
            id: 1,
            description: "Mercado".into(),
            amount: 1500.0,
            kind: TransactionKind::Expense,
            date: "2024-01-05".into(),
            category_id: 1,
            category_name: None,
            category_color: None,
        };
        assert_eq!(format_transaction_amount(&tx), "-$1.500");

        tx.kind = TransactionKind::Income;
        assert_eq!(format_transaction_amount(&tx), "+$1.500");
    }

    #[test]
    fn dates_render_with_short_spanish_months() {
        assert_eq!(format_date("2024-01-05"), "5 ene 2024");
        assert_eq!(format_date("2023-12-31"), "31 dic 2023");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        assert_eq!(format_date("next tuesday"), "next tuesday");
        assert_eq!(format_date("2024-13-01"), "2024-13-01");
        assert_eq!(format_date("2024-01"), "2024-01");
    }
}

// `today()` reads the browser clock, so it can only run under wasm.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn today_is_an_iso_date() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert_eq!(&today[4..5], "-");
        assert_eq!(&today[7..8], "-");
        assert!(today[..4].parse::<u32>().is_ok());
        assert!((1..=12).contains(&today[5..7].parse::<u32>().unwrap()));
        assert!((1..=31).contains(&today[8..10].parse::<u32>().unwrap()));
    }
}
