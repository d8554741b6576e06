use shared::{Category, TransactionKind};
use yew::prelude::*;

use super::category_list::CategoryList;

#[derive(Properties, PartialEq)]
pub struct CategoriesViewProps {
    pub categories: Vec<Category>,
    pub busy: bool,
    pub on_add: Callback<()>,
    pub on_delete: Callback<i64>,
}

/// The category management section: one panel per kind.
#[function_component(CategoriesView)]
pub fn categories_view(props: &CategoriesViewProps) -> Html {
    let split = |kind: TransactionKind| -> Vec<Category> {
        props
            .categories
            .iter()
            .filter(|c| c.kind == kind)
            .cloned()
            .collect()
    };

    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_| on_add.emit(()))
    };

    html! {
        <section class="categories-section">
            <div class="section-header">
                <h2>{"Categorías"}</h2>
                <div class="section-actions">
                    <button class="btn btn-primary" onclick={on_add}>{"Nueva Categoría"}</button>
                </div>
            </div>
            <div class="category-panels">
                <CategoryList
                    title="Categorías de Gastos"
                    categories={split(TransactionKind::Expense)}
                    on_delete={props.on_delete.clone()}
                    busy={props.busy}
                />
                <CategoryList
                    title="Categorías de Ingresos"
                    categories={split(TransactionKind::Income)}
                    on_delete={props.on_delete.clone()}
                    busy={props.busy}
                />
            </div>
        </section>
    }
}
