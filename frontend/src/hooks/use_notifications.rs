use finance_domain::NotificationService;
use shared::Notification;
use yew::prelude::*;

use crate::services::{date_utils, BrowserStore, Logger};

#[derive(Clone, PartialEq, Default)]
pub struct NotificationsState {
    pub notifications: Vec<Notification>,
    pub unread_count: usize,
}

impl NotificationsState {
    fn load() -> Self {
        let notifications = NotificationService::new().list(&BrowserStore::local());
        let unread_count = notifications.iter().filter(|n| !n.read).count();
        Self {
            notifications,
            unread_count,
        }
    }
}

pub struct UseNotificationsResult {
    pub state: NotificationsState,
    pub actions: NotificationActions,
}

#[derive(Clone, PartialEq)]
pub struct NotificationActions {
    /// (title, message)
    pub add: Callback<(String, String)>,
    pub mark_read: Callback<u64>,
    pub mark_all_read: Callback<()>,
    pub clear_all: Callback<()>,
    /// Reload after another hook wrote to the notification list
    pub refresh: Callback<()>,
}

/// Notification list persisted in `localStorage`. Every action writes through
/// the domain service and then reloads the list from storage.
#[hook]
pub fn use_notifications() -> UseNotificationsResult {
    let state = use_state(NotificationsState::load);

    let refresh = {
        let state = state.clone();
        use_callback((), move |_, _| state.set(NotificationsState::load()))
    };

    let add = {
        let state = state.clone();
        use_callback((), move |(title, message): (String, String), _| {
            let store = BrowserStore::local();
            if let Err(e) = NotificationService::new().add(&store, &title, &message, date_utils::now_utc()) {
                Logger::error_with_component("notifications-hook", &format!("Failed to add notification: {}", e));
            }
            state.set(NotificationsState::load());
        })
    };

    let mark_read = {
        let state = state.clone();
        use_callback((), move |id: u64, _| {
            match NotificationService::new().mark_read(&BrowserStore::local(), id) {
                Ok(true) => {}
                Ok(false) => Logger::warn_with_component("notifications-hook", &format!("No notification with id {}", id)),
                Err(e) => Logger::error_with_component("notifications-hook", &format!("Failed to mark {} read: {}", id, e)),
            }
            state.set(NotificationsState::load());
        })
    };

    let mark_all_read = {
        let state = state.clone();
        use_callback((), move |_, _| {
            if let Err(e) = NotificationService::new().mark_all_read(&BrowserStore::local()) {
                Logger::error_with_component("notifications-hook", &format!("Failed to mark all read: {}", e));
            }
            state.set(NotificationsState::load());
        })
    };

    let clear_all = {
        let state = state.clone();
        use_callback((), move |_, _| {
            if let Err(e) = NotificationService::new().clear_all(&BrowserStore::local()) {
                Logger::error_with_component("notifications-hook", &format!("Failed to clear notifications: {}", e));
            }
            state.set(NotificationsState::load());
        })
    };

    UseNotificationsResult {
        state: (*state).clone(),
        actions: NotificationActions {
            add,
            mark_read,
            mark_all_read,
            clear_all,
            refresh,
        },
    }
}
