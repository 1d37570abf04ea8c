//! Storage layer: the [`KeyValueStore`] abstraction, JSON helpers and the
//! persisted key names shared by every page.

pub mod memory;
pub mod traits;

pub use memory::MemoryStore;
pub use traits::*;

/// Persisted key names. These are part of the on-disk format and must stay
/// stable so data written by one page is readable by another.
pub mod keys {
    pub const TRANSACTIONS: &str = "transactions";
    pub const PROFILE: &str = "profileData";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const USERNAME: &str = "username";
    pub const OPT_OUT: &str = "financialTrackingOptOut";
    pub const MONTHLY_BUDGET: &str = "monthlyBudget";
    pub const SAVINGS_GOAL: &str = "savingsGoal";
    pub const SPENT_AMOUNT: &str = "spentAmount";
    pub const SAVED_AMOUNT: &str = "savedAmount";
    pub const LAST_UPDATE: &str = "lastUpdate";

    /// Session-scoped: set by the landing page, consumed by the calendar
    pub const COMING_FROM_LANDING: &str = "comingFromLanding";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        count: u32,
    }

    #[test]
    fn test_get_json_defaults_when_missing() {
        let store = MemoryStore::new();
        let value: Vec<u32> = get_json(&store, "missing");
        assert!(value.is_empty());
    }

    #[test]
    fn test_get_json_defaults_on_parse_failure() {
        let store = MemoryStore::new();
        store.set_raw("broken", "{not json").unwrap();
        let value: Sample = get_json(&store, "broken");
        assert_eq!(value, Sample::default());
        assert!(get_json_opt::<Sample, _>(&store, "broken").is_none());
    }

    #[test]
    fn test_set_then_get_json() {
        let store = MemoryStore::new();
        set_json(&store, "sample", &Sample { count: 3 }).unwrap();
        let value: Sample = get_json(&store, "sample");
        assert_eq!(value.count, 3);
        assert_eq!(store.get_raw("sample").unwrap().as_deref(), Some(r#"{"count":3}"#));
    }

    #[test]
    fn test_flags() {
        let store = MemoryStore::new();
        assert!(!get_flag(&store, keys::OPT_OUT));

        set_flag(&store, keys::OPT_OUT, true).unwrap();
        assert!(get_flag(&store, keys::OPT_OUT));
        assert_eq!(store.get_raw(keys::OPT_OUT).unwrap().as_deref(), Some("true"));

        set_flag(&store, keys::OPT_OUT, false).unwrap();
        assert!(!get_flag(&store, keys::OPT_OUT));
        assert!(store.get_raw(keys::OPT_OUT).unwrap().is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set_raw("a", "1").unwrap();
        assert_eq!(other.get_raw("a").unwrap().as_deref(), Some("1"));
        assert_eq!(other.len(), 1);
    }
}
