use std::rc::Rc;

use shared::TransactionKind;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::toast::Notice;
use crate::services::api::{ApiClient, LoadError};
use crate::services::logging::Logger;
use crate::state::{AppState, Section, StateAction};

/// Navigation plus the reload entry points the action coordinator uses after
/// a successful mutation.
pub struct SectionHandles {
    pub activate: Callback<Section>,
    /// Re-fetch whatever transaction-derived data the active section shows.
    pub transactions_changed: Callback<()>,
    /// Re-fetch the category cache (category panels, dropdowns, filters).
    pub categories_changed: Callback<()>,
}

/// Owns the per-section load sequences. Each navigation triggers exactly one
/// load sequence; results are tagged with the generation they started under
/// so the reducer can drop whatever arrives late.
#[hook]
pub fn use_sections(
    state: UseReducerHandle<AppState>,
    api: Rc<ApiClient>,
    notify: Callback<Notice>,
) -> SectionHandles {
    // Fresh page load: the category cache is fetched once up front, since the
    // modal and filter dropdowns need it in every section.
    {
        let state = state.clone();
        let api = api.clone();
        let notify = notify.clone();
        use_effect_with((), move |_| {
            let generation = state.generation;
            spawn_local(async move {
                report(
                    load_categories(&api, &state, generation).await,
                    &notify,
                    "Error al cargar las categorías",
                );
            });
            || ()
        });
    }

    // Loads run from here, after the reducer has applied `Navigate`, so the
    // sequence observes the generation the stale check will compare against.
    // Dispatches that pile up between renders collapse into one load at the
    // settled generation. The first run covers the default section.
    {
        let state = state.clone();
        let api = api.clone();
        let notify = notify.clone();
        use_effect_with((state.section, state.generation), move |deps| {
            let (section, generation) = *deps;
            spawn_local(async move {
                load_section(section, &api, &state, generation, &notify).await;
            });
            || ()
        });
    }

    let activate = {
        let state = state.clone();
        Callback::from(move |section: Section| {
            Logger::debug_with_component("sections", &format!("activating {:?}", section));
            state.dispatch(StateAction::Navigate(section));
        })
    };

    let transactions_changed = {
        let state = state.clone();
        let api = api.clone();
        let notify = notify.clone();
        Callback::from(move |_| {
            let section = state.section;
            let generation = state.generation;
            let state = state.clone();
            let api = api.clone();
            let notify = notify.clone();
            spawn_local(async move {
                load_section(section, &api, &state, generation, &notify).await;
            });
        })
    };

    let categories_changed = {
        let state = state.clone();
        Callback::from(move |_| {
            let generation = state.generation;
            let state = state.clone();
            let api = api.clone();
            let notify = notify.clone();
            spawn_local(async move {
                report(
                    load_categories(&api, &state, generation).await,
                    &notify,
                    "Error al cargar las categorías",
                );
            });
        })
    };

    SectionHandles {
        activate,
        transactions_changed,
        categories_changed,
    }
}

async fn load_section(
    section: Section,
    api: &ApiClient,
    state: &UseReducerHandle<AppState>,
    generation: u64,
    notify: &Callback<Notice>,
) {
    match section {
        Section::Dashboard => report(
            load_dashboard(api, state, generation).await,
            notify,
            "Error al cargar el dashboard",
        ),
        Section::Transactions => report(
            load_transactions(api, state, generation).await,
            notify,
            "Error al cargar las transacciones",
        ),
        Section::Statistics => report(
            load_statistics(api, state, generation).await,
            notify,
            "Error al cargar las estadísticas",
        ),
        Section::Categories => report(
            load_categories(api, state, generation).await,
            notify,
            "Error al cargar las categorías",
        ),
    }
}

fn report(result: Result<(), LoadError>, notify: &Callback<Notice>, message: &str) {
    if let Err(err) = result {
        Logger::error_with_component("sections", &err.to_string());
        notify.emit(Notice::error(message));
    }
}

async fn load_dashboard(
    api: &ApiClient,
    state: &UseReducerHandle<AppState>,
    generation: u64,
) -> Result<(), LoadError> {
    let summary = api
        .fetch_dashboard()
        .await
        .map_err(|e| LoadError::new("dashboard summary", e))?;
    let monthly = api
        .fetch_monthly_summary()
        .await
        .map_err(|e| LoadError::new("monthly summary", e))?;
    state.dispatch(StateAction::DashboardLoaded {
        generation,
        summary,
        monthly,
    });
    Ok(())
}

/// The transactions section also needs the category cache, for the filter
/// dropdown.
async fn load_transactions(
    api: &ApiClient,
    state: &UseReducerHandle<AppState>,
    generation: u64,
) -> Result<(), LoadError> {
    let transactions = api
        .fetch_transactions()
        .await
        .map_err(|e| LoadError::new("transactions", e))?;
    state.dispatch(StateAction::TransactionsLoaded {
        generation,
        transactions,
    });
    load_categories(api, state, generation).await
}

async fn load_statistics(
    api: &ApiClient,
    state: &UseReducerHandle<AppState>,
    generation: u64,
) -> Result<(), LoadError> {
    let breakdown = api
        .fetch_category_breakdown(TransactionKind::Expense)
        .await
        .map_err(|e| LoadError::new("category breakdown", e))?;
    let trends = api
        .fetch_trends()
        .await
        .map_err(|e| LoadError::new("trends", e))?;
    state.dispatch(StateAction::StatisticsLoaded {
        generation,
        breakdown,
        trends,
    });
    Ok(())
}

async fn load_categories(
    api: &ApiClient,
    state: &UseReducerHandle<AppState>,
    generation: u64,
) -> Result<(), LoadError> {
    let categories = api
        .fetch_categories()
        .await
        .map_err(|e| LoadError::new("categories", e))?;
    state.dispatch(StateAction::CategoriesLoaded {
        generation,
        categories,
    });
    Ok(())
}
