pub mod categories_view;
pub mod category_list;
pub mod category_modal;
pub mod charts;
pub mod dashboard_view;
pub mod filter_bar;
pub mod recent_transactions;
pub mod statistics_view;
pub mod summary_cards;
pub mod toast;
pub mod transaction_modal;
pub mod transaction_table;
pub mod transactions_view;
