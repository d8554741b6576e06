use shared::{DashboardSummary, MonthlySummaryRow, TransactionKind};
use yew::prelude::*;

use super::charts::MonthlyChart;
use super::recent_transactions::RecentTransactions;
use super::summary_cards::SummaryCards;

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub summary: Option<DashboardSummary>,
    pub monthly: Vec<MonthlySummaryRow>,
    pub on_add: Callback<TransactionKind>,
}

/// The overview section: summary cards, monthly chart and latest movements.
#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let recent = props
        .summary
        .as_ref()
        .map(|s| s.recent_transactions.clone())
        .unwrap_or_default();

    let add_income = {
        let on_add = props.on_add.clone();
        Callback::from(move |_| on_add.emit(TransactionKind::Income))
    };
    let add_expense = {
        let on_add = props.on_add.clone();
        Callback::from(move |_| on_add.emit(TransactionKind::Expense))
    };

    html! {
        <section class="dashboard-section">
            <div class="section-header">
                <h2>{"Dashboard"}</h2>
                <div class="section-actions">
                    <button class="btn btn-income" onclick={add_income}>{"+ Ingreso"}</button>
                    <button class="btn btn-expense" onclick={add_expense}>{"+ Gasto"}</button>
                </div>
            </div>
            <SummaryCards summary={props.summary.clone()} />
            <div class="dashboard-body">
                <MonthlyChart rows={props.monthly.clone()} />
                <div class="recent-panel">
                    <h3>{"Transacciones Recientes"}</h3>
                    <RecentTransactions transactions={recent} />
                </div>
            </div>
        </section>
    }
}
