use shared::{CategoryBreakdownRow, TrendRow};
use yew::prelude::*;

use super::charts::{CategoryChart, TrendsChart};

#[derive(Properties, PartialEq)]
pub struct StatisticsViewProps {
    pub breakdown: Vec<CategoryBreakdownRow>,
    pub trends: Vec<TrendRow>,
}

/// The statistics section: expense breakdown and income/expense trends.
#[function_component(StatisticsView)]
pub fn statistics_view(props: &StatisticsViewProps) -> Html {
    html! {
        <section class="statistics-section">
            <div class="section-header">
                <h2>{"Estadísticas"}</h2>
            </div>
            <div class="statistics-charts">
                <CategoryChart rows={props.breakdown.clone()} />
                <TrendsChart rows={props.trends.clone()} />
            </div>
        </section>
    }
}
