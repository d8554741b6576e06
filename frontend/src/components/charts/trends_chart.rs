use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::TrendRow;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::{AXIS_COLOR, CANVAS_HEIGHT, CANVAS_WIDTH, EXPENSE_COLOR, INCOME_COLOR, LABEL_COLOR};
use crate::domain::charts::{axis_label, value_ceiling};
use crate::services::format::format_currency;

#[derive(Properties, PartialEq)]
pub struct TrendsChartProps {
    pub rows: Vec<TrendRow>,
}

/// Line chart of income vs. expenses over the recent periods.
pub struct TrendsChart {
    canvas_ref: NodeRef,
}

impl Component for TrendsChart {
    type Message = ();
    type Properties = TrendsChartProps;

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
                <h3 class="chart-title">{"Tendencias"}</h3>
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

impl TrendsChart {
    fn draw(&self, rows: &[TrendRow]) {
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

        let labels: Vec<String> = rows.iter().map(|r| r.period.clone()).collect();
        let y_max = value_ceiling(rows.iter().flat_map(|r| [r.income, r.expenses]));
        let x_max = (rows.len() as f64 - 1.0).max(1.0);

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(30)
            .y_label_area_size(70)
            .build_cartesian_2d(0f64..x_max, 0f64..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
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

        let series = [
            ("Ingresos", INCOME_COLOR, rows.iter().map(|r| r.income).collect::<Vec<_>>()),
            ("Gastos", EXPENSE_COLOR, rows.iter().map(|r| r.expenses).collect::<Vec<_>>()),
        ];

        for (name, color, values) in series {
            let points: Vec<(f64, f64)> = values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect();
            let result = chart
                .draw_series(LineSeries::new(points, color.stroke_width(3)))
                .map(|line| {
                    line.label(name)
                        .legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
                        });
                });
            if result.is_err() {
                return;
            }
        }

        let _ = chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(&AXIS_COLOR)
            .label_font(("sans-serif", 13, &LABEL_COLOR))
            .draw();

        let _ = root.present();
    }
}
