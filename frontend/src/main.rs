mod components;
mod domain;
mod hooks;
mod services;
mod state;

use std::rc::Rc;

use shared::TransactionKind;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use components::categories_view::CategoriesView;
use components::category_modal::CategoryModal;
use components::dashboard_view::DashboardView;
use components::statistics_view::StatisticsView;
use components::toast::{Notice, NoticeSequence, Toast};
use components::transaction_modal::TransactionModal;
use components::transactions_view::TransactionsView;
use hooks::{use_actions, use_sections};
use services::api::ApiClient;
use state::{AppState, Section};

const NOTICE_MILLIS: u32 = 5_000;

#[function_component(App)]
fn app() -> Html {
    let state = use_reducer(AppState::default);
    let api: Rc<ApiClient> = use_memo((), |_| ApiClient::new());

    // Transient notification, cleared a few seconds after it appears. Each
    // notice advances the sequence; a timer only clears while its own number
    // is still the latest, so a timer from an earlier notice cannot dismiss
    // the one currently showing.
    let notice = use_state(|| None::<Notice>);
    let notice_seq: Rc<NoticeSequence> = use_memo((), |_| NoticeSequence::default());
    let notify = {
        let notice = notice.clone();
        let notice_seq = notice_seq.clone();
        Callback::from(move |n: Notice| {
            let seq = notice_seq.advance();
            notice.set(Some(n));
            let notice = notice.clone();
            let notice_seq = notice_seq.clone();
            spawn_local(async move {
                gloo::timers::future::TimeoutFuture::new(NOTICE_MILLIS).await;
                if notice_seq.is_current(seq) {
                    notice.set(None);
                }
            });
        })
    };

    // Modal state: which transaction kind the form was opened for, if any.
    let transaction_modal = use_state(|| None::<TransactionKind>);
    let category_modal = use_state(|| false);
    let close_modals = {
        let transaction_modal = transaction_modal.clone();
        let category_modal = category_modal.clone();
        Callback::from(move |_| {
            transaction_modal.set(None);
            category_modal.set(false);
        })
    };

    let sections = use_sections(state.clone(), api.clone(), notify.clone());
    let actions = use_actions(
        api.clone(),
        notify.clone(),
        sections.transactions_changed.clone(),
        sections.categories_changed.clone(),
        close_modals.clone(),
    );

    let open_transaction_modal = {
        let transaction_modal = transaction_modal.clone();
        Callback::from(move |kind: TransactionKind| transaction_modal.set(Some(kind)))
    };
    let open_category_modal = {
        let category_modal = category_modal.clone();
        Callback::from(move |_| category_modal.set(true))
    };

    let body = match state.section {
        Section::Dashboard => html! {
            <DashboardView
                summary={state.dashboard.clone()}
                monthly={state.monthly_summary.clone()}
                on_add={open_transaction_modal.clone()}
            />
        },
        Section::Transactions => html! {
            <TransactionsView
                transactions={state.transactions.clone()}
                categories={state.categories.clone()}
                busy={actions.busy}
                on_add={open_transaction_modal.clone()}
                on_delete={actions.delete_transaction.clone()}
            />
        },
        Section::Statistics => html! {
            <StatisticsView
                breakdown={state.category_breakdown.clone()}
                trends={state.trends.clone()}
            />
        },
        Section::Categories => html! {
            <CategoriesView
                categories={state.categories.clone()}
                busy={actions.busy}
                on_add={open_category_modal}
                on_delete={actions.delete_category.clone()}
            />
        },
    };

    html! {
        <>
            <header class="header">
                <h1>{"Control de Finanzas"}</h1>
                <nav class="nav">
                    {for Section::ALL.iter().map(|section| {
                        let class = if *section == state.section {
                            "nav-link active"
                        } else {
                            "nav-link"
                        };
                        let onclick = {
                            let activate = sections.activate.clone();
                            let section = *section;
                            Callback::from(move |_| activate.emit(section))
                        };
                        html! {
                            <button {class} {onclick} key={section.title()}>
                                {section.title()}
                            </button>
                        }
                    })}
                </nav>
            </header>

            <main class="main">
                {body}
            </main>

            {if let Some(kind) = *transaction_modal {
                html! {
                    <TransactionModal
                        {kind}
                        categories={state.categories.clone()}
                        busy={actions.busy}
                        on_save={actions.create_transaction.clone()}
                        on_cancel={close_modals.clone()}
                    />
                }
            } else {
                html! {}
            }}

            {if *category_modal {
                html! {
                    <CategoryModal
                        busy={actions.busy}
                        on_save={actions.create_category.clone()}
                        on_cancel={close_modals.clone()}
                    />
                }
            } else {
                html! {}
            }}

            <Toast notice={(*notice).clone()} />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
