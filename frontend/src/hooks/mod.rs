pub mod use_calendar;
pub mod use_chat;
pub mod use_dashboard;
pub mod use_notifications;
pub mod use_periodic_refresh;
