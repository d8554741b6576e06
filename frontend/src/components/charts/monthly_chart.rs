use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::MonthlySummaryRow;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::{AXIS_COLOR, CANVAS_HEIGHT, CANVAS_WIDTH, EXPENSE_COLOR, INCOME_COLOR, LABEL_COLOR};
use crate::domain::charts::{axis_label, value_ceiling};
use crate::services::format::format_currency;

#[derive(Properties, PartialEq)]
pub struct MonthlyChartProps {
    pub rows: Vec<MonthlySummaryRow>,
}

/// Grouped bar chart of income vs. expenses per calendar month.
///
/// Every draw starts by filling the whole drawing area, so redrawing
/// replaces the previous rendering instead of stacking on top of it.
pub struct MonthlyChart {
    canvas_ref: NodeRef,
}

impl Component for MonthlyChart {
    type Message = ();
    type Properties = MonthlyChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().rows != old_props.rows {
            self.draw(&ctx.props().rows);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(&ctx.props().rows);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-container">
                <h3 class="chart-title">{"Resumen Mensual"}</h3>
                {if ctx.props().rows.is_empty() {
                    html! { <p class="empty-placeholder">{"No hay datos para mostrar"}</p> }
                } else {
                    html! {
                        <canvas
                            ref={self.canvas_ref.clone()}
                            width={CANVAS_WIDTH.to_string()}
                            height={CANVAS_HEIGHT.to_string()}
                        ></canvas>
                    }
                }}
            </div>
        }
    }
}

impl MonthlyChart {
    fn draw(&self, rows: &[MonthlySummaryRow]) {
        if rows.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let labels: Vec<String> = rows.iter().map(|r| r.month.clone()).collect();
        let y_max = value_ceiling(rows.iter().flat_map(|r| [r.income, r.expenses]));

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(30)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5f64..rows.len() as f64 - 0.5, 0f64..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(rows.len())
            .x_label_formatter(&|x| axis_label(&labels, *x))
            .y_label_formatter(&|v| format_currency(*v))
            .label_style(("sans-serif", 12, &LABEL_COLOR))
            .axis_style(&AXIS_COLOR)
            .draw()
            .is_err()
        {
            return;
        }

        for (i, row) in rows.iter().enumerate() {
            let x = i as f64;
            let bars = [
                ((x - 0.35, x - 0.05), row.income, INCOME_COLOR),
                ((x + 0.05, x + 0.35), row.expenses, EXPENSE_COLOR),
            ];
            for ((left, right), value, color) in bars {
                if chart
                    .draw_series(std::iter::once(Rectangle::new(
                        [(left, 0.0), (right, value)],
                        color.filled(),
                    )))
                    .is_err()
                {
                    return;
                }
            }
        }

        let _ = root.present();
    }
}
