use shared::{Transaction, TransactionKind};
use yew::prelude::*;

use crate::services::format::{format_date, format_transaction_amount};

#[derive(Properties, PartialEq)]
pub struct RecentTransactionsProps {
    pub transactions: Vec<Transaction>,
}

/// The short list of latest movements on the dashboard.
#[function_component(RecentTransactions)]
pub fn recent_transactions(props: &RecentTransactionsProps) -> Html {
    if props.transactions.is_empty() {
        return html! {
            <p class="empty-placeholder">{"No hay transacciones recientes"}</p>
        };
    }

    html! {
        <div class="recent-transactions">
            {for props.transactions.iter().map(|tx| {
                let amount_class = match tx.kind {
                    TransactionKind::Income => "transaction-amount income",
                    TransactionKind::Expense => "transaction-amount expense",
                };
                html! {
                    <div class="transaction-item" key={tx.id}>
                        <div class="transaction-info">
                            <span class="transaction-description">{&tx.description}</span>
                            <span class="transaction-category">
                                {tx.category_name.clone().unwrap_or_default()}
                            </span>
                            <span class="transaction-date">{format_date(&tx.date)}</span>
                        </div>
                        <span class={amount_class}>{format_transaction_amount(tx)}</span>
                    </div>
                }
            })}
        </div>
    }
}
