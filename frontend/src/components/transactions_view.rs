use shared::{Category, Transaction, TransactionKind};
use yew::prelude::*;

use super::filter_bar::FilterBar;
use super::transaction_table::TransactionTable;
use crate::domain::filter::TransactionFilter;

#[derive(Properties, PartialEq)]
pub struct TransactionsViewProps {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub busy: bool,
    pub on_add: Callback<TransactionKind>,
    pub on_delete: Callback<i64>,
}

/// The transactions section: filter controls plus the full table. The filter
/// is applied client-side to the cached snapshot; the cache itself is only
/// replaced by loads.
#[function_component(TransactionsView)]
pub fn transactions_view(props: &TransactionsViewProps) -> Html {
    let filter = use_state(TransactionFilter::default);

    let on_filter_change = {
        let filter = filter.clone();
        Callback::from(move |next: TransactionFilter| filter.set(next))
    };

    let visible = filter.apply(&props.transactions);

    let add_income = {
        let on_add = props.on_add.clone();
        Callback::from(move |_| on_add.emit(TransactionKind::Income))
    };
    let add_expense = {
        let on_add = props.on_add.clone();
        Callback::from(move |_| on_add.emit(TransactionKind::Expense))
    };

    html! {
        <section class="transactions-section">
            <div class="section-header">
                <h2>{"Transacciones"}</h2>
                <div class="section-actions">
                    <button class="btn btn-income" onclick={add_income}>{"+ Ingreso"}</button>
                    <button class="btn btn-expense" onclick={add_expense}>{"+ Gasto"}</button>
                </div>
            </div>
            <FilterBar categories={props.categories.clone()} on_change={on_filter_change} />
            <TransactionTable
                transactions={visible}
                on_delete={props.on_delete.clone()}
                busy={props.busy}
            />
        </section>
    }
}
