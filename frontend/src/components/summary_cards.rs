use shared::DashboardSummary;
use yew::prelude::*;

use crate::services::format::format_currency;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: Option<DashboardSummary>,
}

/// The four figures at the top of the dashboard. Until the first load
/// completes the cards show a dash instead of a misleading zero.
#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let value = |pick: fn(&DashboardSummary) -> f64| -> String {
        props
            .summary
            .as_ref()
            .map(|s| format_currency(pick(s)))
            .unwrap_or_else(|| "—".to_string())
    };

    html! {
        <div class="summary-cards">
            <div class="card">
                <span class="card-label">{"Balance Total"}</span>
                <span class="card-value">{value(|s| s.balance_total)}</span>
            </div>
            <div class="card card-income">
                <span class="card-label">{"Ingresos del Mes"}</span>
                <span class="card-value">{value(|s| s.month_income)}</span>
            </div>
            <div class="card card-expense">
                <span class="card-label">{"Gastos del Mes"}</span>
                <span class="card-value">{value(|s| s.month_expenses)}</span>
            </div>
            <div class="card">
                <span class="card-label">{"Balance del Mes"}</span>
                <span class="card-value">{value(|s| s.month_balance)}</span>
            </div>
        </div>
    }
}
