//! Local notification list, stored newest first.

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use shared::Notification;

use crate::storage::{get_json, keys, set_json, KeyValueStore};

#[derive(Debug, Clone, Default)]
pub struct NotificationService;

impl NotificationService {
    pub fn new() -> Self {
        Self
    }

    pub fn list<S: KeyValueStore + ?Sized>(&self, store: &S) -> Vec<Notification> {
        get_json(store, keys::NOTIFICATIONS)
    }

    /// Prepend an unread notification stamped with `now`.
    ///
    /// Ids start from the epoch milliseconds of `now` and are bumped past the
    /// largest existing id, so several notifications created in the same
    /// millisecond stay distinct.
    pub fn add<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        title: &str,
        message: &str,
        now: DateTime<Utc>,
    ) -> Result<Notification> {
        let mut notifications = self.list(store);

        let now_ms = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let next_free = notifications.iter().map(|n| n.id + 1).max().unwrap_or(0);

        let notification = Notification {
            id: now_ms.max(next_free),
            title: title.to_string(),
            message: message.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            read: false,
        };
        notifications.insert(0, notification.clone());
        set_json(store, keys::NOTIFICATIONS, &notifications)?;

        debug!("Added notification {}: {}", notification.id, notification.title);
        Ok(notification)
    }

    pub fn unread_count<S: KeyValueStore + ?Sized>(&self, store: &S) -> usize {
        self.list(store).iter().filter(|n| !n.read).count()
    }

    /// Returns false when no notification has that id
    pub fn mark_read<S: KeyValueStore + ?Sized>(&self, store: &S, id: u64) -> Result<bool> {
        let mut notifications = self.list(store);
        let Some(notification) = notifications.iter_mut().find(|n| n.id == id) else {
            return Ok(false);
        };
        notification.read = true;
        set_json(store, keys::NOTIFICATIONS, &notifications)?;
        Ok(true)
    }

    pub fn mark_all_read<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<()> {
        let mut notifications = self.list(store);
        for notification in notifications.iter_mut() {
            notification.read = true;
        }
        set_json(store, keys::NOTIFICATIONS, &notifications)?;
        Ok(())
    }

    pub fn clear_all<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<()> {
        set_json(store, keys::NOTIFICATIONS, &Vec::<Notification>::new())?;
        Ok(())
    }
}

/// Local display time for a stored timestamp, e.g. "Jun 13, 2025 09:30"
pub fn format_timestamp(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(parsed) => parsed.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 13, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_add_prepends_with_unique_ids() {
        let store = MemoryStore::new();
        let service = NotificationService::new();

        let first = service.add(&store, "First", "one", now()).unwrap();
        let second = service.add(&store, "Second", "two", now()).unwrap();
        let third = service.add(&store, "Third", "three", now()).unwrap();

        let list = service.list(&store);
        assert_eq!(
            list.iter().map(|n| n.title.as_str()).collect::<Vec<_>>(),
            vec!["Third", "Second", "First"]
        );
        assert_eq!(first.id, now().timestamp_millis() as u64);
        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);
        assert_eq!(first.timestamp, "2025-06-13T09:30:00.000Z");
        assert_eq!(service.unread_count(&store), 3);
    }

    #[test]
    fn test_mark_read_and_clear() {
        let store = MemoryStore::new();
        let service = NotificationService::new();
        let n = service.add(&store, "Budget", "msg", now()).unwrap();
        service.add(&store, "Savings", "msg", now()).unwrap();

        assert!(service.mark_read(&store, n.id).unwrap());
        assert!(!service.mark_read(&store, 42).unwrap());
        assert_eq!(service.unread_count(&store), 1);

        service.mark_all_read(&store).unwrap();
        assert_eq!(service.unread_count(&store), 0);

        service.clear_all(&store).unwrap();
        assert!(service.list(&store).is_empty());
    }

    #[test]
    fn test_corrupt_list_is_treated_as_empty() {
        let store = MemoryStore::new();
        store.set_raw(keys::NOTIFICATIONS, "oops").unwrap();
        let service = NotificationService::new();
        assert_eq!(service.unread_count(&store), 0);

        service.add(&store, "Fresh", "start", now()).unwrap();
        assert_eq!(service.list(&store).len(), 1);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2025-06-13T09:30:00.000Z"), "Jun 13, 2025 09:30");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
