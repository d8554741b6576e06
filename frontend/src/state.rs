use std::rc::Rc;

use shared::{Category, CategoryBreakdownRow, DashboardSummary, MonthlySummaryRow, Transaction, TrendRow};
use yew::Reducible;

/// The mutually exclusive top-level views of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Transactions,
    Statistics,
    Categories,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Dashboard,
        Section::Transactions,
        Section::Statistics,
        Section::Categories,
    ];

    /// Label shown in the navigation bar.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Transactions => "Transacciones",
            Section::Statistics => "Estadísticas",
            Section::Categories => "Categorías",
        }
    }
}

/// The single client-side snapshot of server data.
///
/// Every view renders from this one value, so all views observe the same
/// consistent snapshot. Caches are only ever replaced wholesale with the
/// result of a successful fetch; a failed load dispatches nothing and the
/// previous snapshot stays visible.
///
/// `generation` is bumped on every navigation. Loads capture the generation
/// they were spawned under and the reducer drops results that arrive after
/// the user has moved on, so a slow fetch for an abandoned section can never
/// overwrite the active one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub section: Section,
    pub generation: u64,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub dashboard: Option<DashboardSummary>,
    pub monthly_summary: Vec<MonthlySummaryRow>,
    pub category_breakdown: Vec<CategoryBreakdownRow>,
    pub trends: Vec<TrendRow>,
}

impl AppState {
    fn is_stale(&self, generation: u64) -> bool {
        generation != self.generation
    }
}

/// State transitions. The `*Loaded` variants carry the generation the load
/// was started under.
pub enum StateAction {
    Navigate(Section),
    CategoriesLoaded {
        generation: u64,
        categories: Vec<Category>,
    },
    TransactionsLoaded {
        generation: u64,
        transactions: Vec<Transaction>,
    },
    DashboardLoaded {
        generation: u64,
        summary: DashboardSummary,
        monthly: Vec<MonthlySummaryRow>,
    },
    StatisticsLoaded {
        generation: u64,
        breakdown: Vec<CategoryBreakdownRow>,
        trends: Vec<TrendRow>,
    },
}

impl Reducible for AppState {
    type Action = StateAction;

    fn reduce(self: Rc<Self>, action: StateAction) -> Rc<Self> {
        match action {
            StateAction::Navigate(section) => Rc::new(AppState {
                section,
                generation: self.generation + 1,
                ..(*self).clone()
            }),
            StateAction::CategoriesLoaded {
                generation,
                categories,
            } => {
                if self.is_stale(generation) {
                    return self;
                }
                Rc::new(AppState {
                    categories,
                    ..(*self).clone()
                })
            }
            StateAction::TransactionsLoaded {
                generation,
                transactions,
            } => {
                if self.is_stale(generation) {
                    return self;
                }
                Rc::new(AppState {
                    transactions,
                    ..(*self).clone()
                })
            }
            StateAction::DashboardLoaded {
                generation,
                summary,
                monthly,
            } => {
                if self.is_stale(generation) {
                    return self;
                }
                Rc::new(AppState {
                    dashboard: Some(summary),
                    monthly_summary: monthly,
                    ..(*self).clone()
                })
            }
            StateAction::StatisticsLoaded {
                generation,
                breakdown,
                trends,
            } => {
                if self.is_stale(generation) {
                    return self;
                }
                Rc::new(AppState {
                    category_breakdown: breakdown,
                    trends,
                    ..(*self).clone()
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::TransactionKind;

    fn transaction(id: i64) -> Transaction {
        Transaction {
            id,
            description: format!("tx {id}"),
            amount: 10.0,
            kind: TransactionKind::Expense,
            date: "2024-01-05".into(),
            category_id: 1,
            category_name: None,
            category_color: None,
        }
    }

    #[test]
    fn navigate_switches_section_and_bumps_generation() {
        let state = Rc::new(AppState::default());
        let next = state.reduce(StateAction::Navigate(Section::Statistics));
        assert_eq!(next.section, Section::Statistics);
        assert_eq!(next.generation, 1);
    }

    #[test]
    fn load_replaces_the_whole_cache() {
        let state = Rc::new(AppState {
            transactions: vec![transaction(1)],
            ..AppState::default()
        });
        let next = state.reduce(StateAction::TransactionsLoaded {
            generation: 0,
            transactions: vec![transaction(2), transaction(3)],
        });
        let ids: Vec<i64> = next.transactions.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn stale_load_result_is_dropped() {
        let state = Rc::new(AppState {
            transactions: vec![transaction(1)],
            ..AppState::default()
        });
        // User navigates while the load is still in flight.
        let state = state.reduce(StateAction::Navigate(Section::Dashboard));
        let next = state.clone().reduce(StateAction::TransactionsLoaded {
            generation: 0,
            transactions: vec![transaction(9)],
        });
        assert!(Rc::ptr_eq(&state, &next));
        assert_eq!(next.transactions[0].id, 1);
    }

    #[test]
    fn stacked_navigations_accept_only_loads_at_the_settled_generation() {
        let state = Rc::new(AppState::default());
        // Two clicks land before any load starts.
        let state = state.reduce(StateAction::Navigate(Section::Transactions));
        let state = state.reduce(StateAction::Navigate(Section::Statistics));
        assert_eq!(state.generation, 2);

        // A load spawned against the intermediate generation is dropped.
        let after_stale = state.clone().reduce(StateAction::TransactionsLoaded {
            generation: 1,
            transactions: vec![transaction(7)],
        });
        assert!(Rc::ptr_eq(&state, &after_stale));

        // A load observing the settled generation lands.
        let after_current = state.reduce(StateAction::StatisticsLoaded {
            generation: 2,
            breakdown: vec![],
            trends: vec![TrendRow {
                period: "2024-02".into(),
                income: 10.0,
                expenses: 5.0,
            }],
        });
        assert_eq!(after_current.trends.len(), 1);
    }

    #[test]
    fn navigation_preserves_existing_caches() {
        let state = Rc::new(AppState {
            categories: vec![Category {
                id: 4,
                name: "Comida".into(),
                kind: TransactionKind::Expense,
                color: "#E74C3C".into(),
            }],
            ..AppState::default()
        });
        let next = state.reduce(StateAction::Navigate(Section::Categories));
        assert_eq!(next.categories.len(), 1);
    }

    #[test]
    fn dashboard_load_fills_summary_and_chart_rows() {
        let state = Rc::new(AppState::default());
        let next = state.reduce(StateAction::DashboardLoaded {
            generation: 0,
            summary: DashboardSummary {
                balance_total: 100.0,
                month_income: 60.0,
                month_expenses: 40.0,
                month_balance: 20.0,
                recent_transactions: vec![transaction(5)],
            },
            monthly: vec![MonthlySummaryRow {
                month: "Enero".into(),
                income: 60.0,
                expenses: 40.0,
            }],
        });
        assert_eq!(next.dashboard.as_ref().unwrap().balance_total, 100.0);
        assert_eq!(next.monthly_summary.len(), 1);
    }
}
