pub mod calendar;
pub mod chat_widget;
pub mod day_detail_modal;
pub mod expense_chart;
pub mod expense_table;
pub mod header;
pub mod key_metrics;
pub mod notifications_panel;
pub mod progress_bar;
pub mod recent_transactions;
pub mod side_menu;
pub mod tip_banner;
pub mod transaction_detail;
