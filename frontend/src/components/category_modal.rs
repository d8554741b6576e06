use shared::{NewCategory, TransactionKind};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const DEFAULT_COLOR: &str = "#FF6B35";

#[derive(Properties, PartialEq)]
pub struct CategoryModalProps {
    pub busy: bool,
    pub on_save: Callback<NewCategory>,
    pub on_cancel: Callback<()>,
}

/// Form for a new category: name, kind and colour.
#[function_component(CategoryModal)]
pub fn category_modal(props: &CategoryModalProps) -> Html {
    let name = use_state(String::new);
    let kind = use_state(|| TransactionKind::Expense);
    let color = use_state(|| DEFAULT_COLOR.to_string());

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_kind = {
        let kind = kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(parsed) = TransactionKind::from_wire(&select.value()) {
                kind.set(parsed);
            }
        })
    };
    let on_color = {
        let color = color.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            color.set(input.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let kind = kind.clone();
        let color = color.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(NewCategory {
                name: (*name).clone(),
                kind: *kind,
                color: (*color).clone(),
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
                <h2>{"Nueva Categoría"}</h2>
                <form {onsubmit}>
                    <div class="form-group">
                        <label for="category-name">{"Nombre"}</label>
                        <input
                            type="text"
                            id="category-name"
                            value={(*name).clone()}
                            onchange={on_name}
                            disabled={props.busy}
                        />
                    </div>
                    <div class="form-group">
                        <label for="category-kind">{"Tipo"}</label>
                        <select id="category-kind" onchange={on_kind} disabled={props.busy}>
                            <option value="gasto" selected={*kind == TransactionKind::Expense}>
                                {"Gasto"}
                            </option>
                            <option value="ingreso" selected={*kind == TransactionKind::Income}>
                                {"Ingreso"}
                            </option>
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="category-color">{"Color"}</label>
                        <input
                            type="color"
                            id="category-color"
                            value={(*color).clone()}
                            onchange={on_color}
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
