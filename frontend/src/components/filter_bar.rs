use shared::{Category, TransactionKind};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::domain::filter::TransactionFilter;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub categories: Vec<Category>,
    pub on_change: Callback<TransactionFilter>,
}

fn build_filter(kind: &str, category_id: &str, date_from: &str, date_to: &str) -> TransactionFilter {
    TransactionFilter {
        kind: TransactionKind::from_wire(kind),
        category_id: category_id.parse().ok(),
        date_from: (!date_from.is_empty()).then(|| date_from.to_string()),
        date_to: (!date_to.is_empty()).then(|| date_to.to_string()),
    }
}

/// The four filter controls above the transaction table. Criteria are read
/// live from the controls; every change re-emits the assembled filter.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let kind = use_state(String::new);
    let category_id = use_state(String::new);
    let date_from = use_state(String::new);
    let date_to = use_state(String::new);

    // `set` on a state handle only lands on the next render, so each handler
    // assembles the filter from its own fresh control value plus the stored
    // values of the other three.
    let on_kind_change = {
        let kind = kind.clone();
        let category_id = category_id.clone();
        let date_from = date_from.clone();
        let date_to = date_to.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            on_change.emit(build_filter(&value, &*category_id, &*date_from, &*date_to));
            kind.set(value);
        })
    };
    let on_category_change = {
        let kind = kind.clone();
        let category_id = category_id.clone();
        let date_from = date_from.clone();
        let date_to = date_to.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            on_change.emit(build_filter(&*kind, &value, &*date_from, &*date_to));
            category_id.set(value);
        })
    };
    let on_date_from_change = {
        let kind = kind.clone();
        let category_id = category_id.clone();
        let date_from = date_from.clone();
        let date_to = date_to.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            on_change.emit(build_filter(&*kind, &*category_id, &value, &*date_to));
            date_from.set(value);
        })
    };
    let on_date_to_change = {
        let kind = kind.clone();
        let category_id = category_id.clone();
        let date_from = date_from.clone();
        let date_to = date_to.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            on_change.emit(build_filter(&*kind, &*category_id, &*date_from, &value));
            date_to.set(value);
        })
    };

    html! {
        <div class="filter-bar">
            <label>
                {"Tipo"}
                <select onchange={on_kind_change} value={(*kind).clone()}>
                    <option value="" selected={kind.is_empty()}>{"Todos los tipos"}</option>
                    <option value="ingreso">{"Ingresos"}</option>
                    <option value="gasto">{"Gastos"}</option>
                </select>
            </label>
            <label>
                {"Categoría"}
                <select onchange={on_category_change} value={(*category_id).clone()}>
                    <option value="" selected={category_id.is_empty()}>{"Todas las categorías"}</option>
                    {for props.categories.iter().map(|category| {
                        html! {
                            <option value={category.id.to_string()} key={category.id}>
                                {format!("{} ({})", category.name, category.kind)}
                            </option>
                        }
                    })}
                </select>
            </label>
            <label>
                {"Desde"}
                <input type="date" onchange={on_date_from_change} value={(*date_from).clone()} />
            </label>
            <label>
                {"Hasta"}
                <input type="date" onchange={on_date_to_change} value={(*date_to).clone()} />
            </label>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_controls_build_an_unconstrained_filter() {
        let filter = build_filter("", "", "", "");
        assert!(filter.is_empty());
    }

    #[test]
    fn control_values_map_onto_filter_fields() {
        let filter = build_filter("gasto", "3", "2024-01-01", "2024-06-30");
        assert_eq!(filter.kind, Some(TransactionKind::Expense));
        assert_eq!(filter.category_id, Some(3));
        assert_eq!(filter.date_from.as_deref(), Some("2024-01-01"));
        assert_eq!(filter.date_to.as_deref(), Some("2024-06-30"));
    }

    #[test]
    fn malformed_category_selection_imposes_no_constraint() {
        let filter = build_filter("", "todas", "", "");
        assert_eq!(filter.category_id, None);
    }
}
