use shared::Category;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryListProps {
    pub title: AttrValue,
    pub categories: Vec<Category>,
    pub on_delete: Callback<i64>,
    pub busy: bool,
}

/// One of the two category panels (income or expense).
#[function_component(CategoryList)]
pub fn category_list(props: &CategoryListProps) -> Html {
    html! {
        <div class="category-panel">
            <h3>{&props.title}</h3>
            {if props.categories.is_empty() {
                html! { <p class="empty-placeholder">{"No hay categorías"}</p> }
            } else {
                html! {
                    <div class="category-items">
                        {for props.categories.iter().map(|category| {
                            let swatch_style = format!("background-color: {}", category.color);
                            let onclick = {
                                let on_delete = props.on_delete.clone();
                                let id = category.id;
                                Callback::from(move |_| on_delete.emit(id))
                            };
                            html! {
                                <div class="category-item" key={category.id}>
                                    <span class="category-color" style={swatch_style}></span>
                                    <span class="category-name">{&category.name}</span>
                                    <button
                                        class="btn btn-danger btn-sm"
                                        disabled={props.busy}
                                        {onclick}
                                    >
                                        {"Eliminar"}
                                    </button>
                                </div>
                            }
                        })}
                    </div>
                }
            }}
        </div>
    }
}
