use shared::{Category, NewTransaction, TransactionKind};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::format::today;

#[derive(Properties, PartialEq)]
pub struct TransactionModalProps {
    /// Preset by whichever button opened the modal.
    pub kind: TransactionKind,
    /// The full category cache; the dropdown shows only the matching kind.
    pub categories: Vec<Category>,
    pub busy: bool,
    pub on_save: Callback<NewTransaction>,
    pub on_cancel: Callback<()>,
}

/// Form for a new income or expense. Field state lives here and is dropped
/// with the component, so closing the modal resets the form. Validation is
/// the server's job; unparseable input is submitted as-is and rejected there.
#[function_component(TransactionModal)]
pub fn transaction_modal(props: &TransactionModalProps) -> Html {
    let description = use_state(String::new);
    let amount = use_state(String::new);
    let category_id = use_state(String::new);
    let date = use_state(today);

    let categories: Vec<&Category> = props
        .categories
        .iter()
        .filter(|c| c.kind == props.kind)
        .collect();

    let title = match props.kind {
        TransactionKind::Income => "Agregar Ingreso",
        TransactionKind::Expense => "Agregar Gasto",
    };

    let on_description = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };
    let on_amount = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };
    let on_category = {
        let category_id = category_id.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category_id.set(select.value());
        })
    };
    let on_date = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let onsubmit = {
        let description = description.clone();
        let amount = amount.clone();
        let category_id = category_id.clone();
        let date = date.clone();
        let kind = props.kind;
        // The select starts on the first option without firing a change
        // event, so an untouched dropdown means the first category.
        let default_category = categories.first().map(|c| c.id).unwrap_or_default();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let selected = category_id.parse::<i64>().unwrap_or(default_category);
            on_save.emit(NewTransaction {
                description: (*description).clone(),
                amount: amount.trim().parse().unwrap_or(0.0),
                category_id: selected,
                date: (*date).clone(),
                kind,
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>{title}</h2>
                <form {onsubmit}>
                    <div class="form-group">
                        <label for="transaction-description">{"Descripción"}</label>
                        <input
                            type="text"
                            id="transaction-description"
                            value={(*description).clone()}
                            onchange={on_description}
                            disabled={props.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="transaction-amount">{"Monto"}</label>
                        <input
                            type="number"
                            id="transaction-amount"
                            step="0.01"
                            min="0.01"
                            value={(*amount).clone()}
                            onchange={on_amount}
                            disabled={props.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="transaction-category">{"Categoría"}</label>
                        <select
                            id="transaction-category"
                            onchange={on_category}
                            disabled={props.busy}
                        >
                            {for categories.iter().map(|category| {
                                html! {
                                    <option value={category.id.to_string()} key={category.id}>
                                        {&category.name}
                                    </option>
                                }
                            })}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="transaction-date">{"Fecha"}</label>
                        <input
                            type="date"
                            id="transaction-date"
                            value={(*date).clone()}
                            onchange={on_date}
                            disabled={props.busy}
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn" onclick={on_cancel} disabled={props.busy}>
                            {"Cancelar"}
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={props.busy}>
                            {if props.busy { "Guardando..." } else { "Guardar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
