use std::rc::Rc;

use shared::{NewCategory, NewTransaction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::toast::Notice;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// The four user actions and their shared busy flag. Each action runs
/// idle → pending → success or failed; `busy` is true while pending and the
/// triggering controls are disabled with it, so a double submit is ignored.
pub struct ActionHandles {
    pub busy: bool,
    pub create_transaction: Callback<NewTransaction>,
    pub delete_transaction: Callback<i64>,
    pub create_category: Callback<NewCategory>,
    pub delete_category: Callback<i64>,
}

/// The only place that sequences multi-step side effects: gateway call,
/// cache invalidation (full reload), re-render of the affected views, and a
/// transient notification. On failure nothing is reloaded; the previous
/// snapshot and every rendered view stay as they were.
#[hook]
pub fn use_actions(
    api: Rc<ApiClient>,
    notify: Callback<Notice>,
    transactions_changed: Callback<()>,
    categories_changed: Callback<()>,
    close_modals: Callback<()>,
) -> ActionHandles {
    let busy = use_state(|| false);

    let create_transaction = {
        let api = api.clone();
        let busy = busy.clone();
        let notify = notify.clone();
        let transactions_changed = transactions_changed.clone();
        let close_modals = close_modals.clone();
        Callback::from(move |request: NewTransaction| {
            if *busy {
                return;
            }
            let api = api.clone();
            let busy = busy.clone();
            let notify = notify.clone();
            let transactions_changed = transactions_changed.clone();
            let close_modals = close_modals.clone();
            spawn_local(async move {
                busy.set(true);
                match api.create_transaction(&request).await {
                    Ok(_) => {
                        close_modals.emit(());
                        transactions_changed.emit(());
                        notify.emit(Notice::success("Transacción guardada correctamente"));
                    }
                    Err(err) => {
                        Logger::error_with_component(
                            "actions",
                            &format!("create transaction failed: {err}"),
                        );
                        notify.emit(Notice::error("Error al guardar la transacción"));
                    }
                }
                busy.set(false);
            });
        })
    };

    let delete_transaction = {
        let api = api.clone();
        let busy = busy.clone();
        let notify = notify.clone();
        let transactions_changed = transactions_changed.clone();
        Callback::from(move |id: i64| {
            if *busy {
                return;
            }
            if !confirm("¿Estás seguro de que quieres eliminar esta transacción?") {
                return;
            }
            let api = api.clone();
            let busy = busy.clone();
            let notify = notify.clone();
            let transactions_changed = transactions_changed.clone();
            spawn_local(async move {
                busy.set(true);
                match api.delete_transaction(id).await {
                    Ok(()) => {
                        transactions_changed.emit(());
                        notify.emit(Notice::success("Transacción eliminada correctamente"));
                    }
                    Err(err) => {
                        Logger::error_with_component(
                            "actions",
                            &format!("delete transaction {id} failed: {err}"),
                        );
                        notify.emit(Notice::error("Error al eliminar la transacción"));
                    }
                }
                busy.set(false);
            });
        })
    };

    let create_category = {
        let api = api.clone();
        let busy = busy.clone();
        let notify = notify.clone();
        let categories_changed = categories_changed.clone();
        let close_modals = close_modals.clone();
        Callback::from(move |request: NewCategory| {
            if *busy {
                return;
            }
            let api = api.clone();
            let busy = busy.clone();
            let notify = notify.clone();
            let categories_changed = categories_changed.clone();
            let close_modals = close_modals.clone();
            spawn_local(async move {
                busy.set(true);
                match api.create_category(&request).await {
                    Ok(_) => {
                        close_modals.emit(());
                        categories_changed.emit(());
                        notify.emit(Notice::success("Categoría guardada correctamente"));
                    }
                    Err(err) => {
                        Logger::error_with_component(
                            "actions",
                            &format!("create category failed: {err}"),
                        );
                        notify.emit(Notice::error("Error al guardar la categoría"));
                    }
                }
                busy.set(false);
            });
        })
    };

    let delete_category = {
        let api = api.clone();
        let busy = busy.clone();
        let notify = notify.clone();
        let categories_changed = categories_changed.clone();
        Callback::from(move |id: i64| {
            if *busy {
                return;
            }
            if !confirm("¿Estás seguro de que quieres eliminar esta categoría?") {
                return;
            }
            let api = api.clone();
            let busy = busy.clone();
            let notify = notify.clone();
            let categories_changed = categories_changed.clone();
            spawn_local(async move {
                busy.set(true);
                match api.delete_category(id).await {
                    Ok(()) => {
                        categories_changed.emit(());
                        notify.emit(Notice::success("Categoría eliminada correctamente"));
                    }
                    Err(err) => {
                        Logger::error_with_component(
                            "actions",
                            &format!("delete category {id} failed: {err}"),
                        );
                        notify.emit(Notice::error("Error al eliminar la categoría"));
                    }
                }
                busy.set(false);
            });
        })
    };

    ActionHandles {
        busy: *busy,
        create_transaction,
        delete_transaction,
        create_category,
        delete_category,
    }
}

/// Blocking yes/no prompt; declining performs no network call at all.
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
