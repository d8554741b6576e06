use shared::{Transaction, TransactionKind};
use yew::prelude::*;

use crate::services::format::{format_date, format_transaction_amount};

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    /// Already filtered by the caller.
    pub transactions: Vec<Transaction>,
    pub on_delete: Callback<i64>,
    pub busy: bool,
}

/// The full transaction table. An empty snapshot renders a fixed placeholder
/// row, never an empty body.
#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <div class="table-container">
            <table class="transactions-table">
                <thead>
                    <tr>
                        <th>{"Fecha"}</th>
                        <th>{"Descripción"}</th>
                        <th>{"Categoría"}</th>
                        <th>{"Tipo"}</th>
                        <th>{"Monto"}</th>
                        <th>{"Acciones"}</th>
                    </tr>
                </thead>
                <tbody>
                    {if props.transactions.is_empty() {
                        html! {
                            <tr>
                                <td colspan="6" class="empty-placeholder">{"No hay transacciones"}</td>
                            </tr>
                        }
                    } else {
                        html! {
                            <>
                            {for props.transactions.iter().map(|tx| {
                                let (badge_class, amount_class) = match tx.kind {
                                    TransactionKind::Income => ("badge badge-income", "transaction-amount income"),
                                    TransactionKind::Expense => ("badge badge-expense", "transaction-amount expense"),
                                };
                                let swatch_style = format!(
                                    "background-color: {}",
                                    tx.category_color.clone().unwrap_or_default()
                                );
                                let onclick = {
                                    let on_delete = props.on_delete.clone();
                                    let id = tx.id;
                                    Callback::from(move |_| on_delete.emit(id))
                                };
                                html! {
                                    <tr key={tx.id}>
                                        <td>{format_date(&tx.date)}</td>
                                        <td>{&tx.description}</td>
                                        <td>
                                            <span class="category-cell">
                                                <span class="category-color" style={swatch_style}></span>
                                                {tx.category_name.clone().unwrap_or_default()}
                                            </span>
                                        </td>
                                        <td><span class={badge_class}>{tx.kind.label()}</span></td>
                                        <td class={amount_class}>{format_transaction_amount(tx)}</td>
                                        <td>
                                            <button
                                                class="btn btn-danger btn-sm"
                                                disabled={props.busy}
                                                {onclick}
                                            >
                                                {"Eliminar"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                            </>
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
