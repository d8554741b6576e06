use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::CategoryBreakdownRow;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use super::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::domain::charts::breakdown_slices;

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub rows: Vec<CategoryBreakdownRow>,
}

/// Pie chart of expenses by category, coloured with each category's own
/// colour token and labelled with the server-computed percentage.
pub struct CategoryChart {
    canvas_ref: NodeRef,
}

impl Component for CategoryChart {
    type Message = ();
    type Properties = CategoryChartProps;

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
                <h3 class="chart-title">{"Gastos por Categoría"}</h3>
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

impl CategoryChart {
    fn draw(&self, rows: &[CategoryBreakdownRow]) {
        let slices = breakdown_slices(rows);
        if slices.is_empty() {
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

        let sizes: Vec<f64> = slices.iter().map(|s| s.value).collect();
        let colors: Vec<RGBColor> = slices
            .iter()
            .map(|s| RGBColor(s.color.0, s.color.1, s.color.2))
            .collect();
        let labels: Vec<String> = slices.iter().map(|s| s.label.clone()).collect();

        let center = (CANVAS_WIDTH as i32 / 2, CANVAS_HEIGHT as i32 / 2);
        let radius = (CANVAS_HEIGHT as f64 / 2.0) - 40.0;

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style(("sans-serif", 14).into_font());

        let _ = root.draw(&pie);
        let _ = root.present();
    }
}
