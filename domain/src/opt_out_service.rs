//! Financial tracking opt-out.

use anyhow::Result;
use log::info;
use shared::{Profile, Transaction};

use crate::storage::{get_flag, get_json_opt, keys, set_flag, set_json, KeyValueStore};

pub const OPTED_OUT_MESSAGE: &str =
    "You have successfully opted out of financial tracking. All tracking values have been set to zero.";
pub const OPTED_IN_MESSAGE: &str =
    "Financial tracking has been re-enabled. Your dashboard will now show your financial data again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStatus {
    Active,
    Disabled,
}

impl TrackingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TrackingStatus::Active => "Active",
            TrackingStatus::Disabled => "Disabled",
        }
    }

    pub fn is_active(&self) -> bool {
        *self == TrackingStatus::Active
    }
}

#[derive(Debug, Clone, Default)]
pub struct OptOutService;

impl OptOutService {
    pub fn new() -> Self {
        Self
    }

    pub fn is_opted_out<S: KeyValueStore + ?Sized>(&self, store: &S) -> bool {
        get_flag(store, keys::OPT_OUT)
    }

    pub fn status<S: KeyValueStore + ?Sized>(&self, store: &S) -> TrackingStatus {
        if self.is_opted_out(store) {
            TrackingStatus::Disabled
        } else {
            TrackingStatus::Active
        }
    }

    /// Set the flag and zero every expense of the cached profile, if any.
    pub fn opt_out<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<()> {
        set_flag(store, keys::OPT_OUT, true)?;

        match get_json_opt::<Profile, _>(store, keys::PROFILE) {
            Some(profile) => {
                set_json(store, keys::PROFILE, &profile.zeroed())?;
                info!("Opted out of tracking, zeroed {} expense categories", profile.expenses.len());
            }
            None => info!("Opted out of tracking, no cached profile to zero"),
        }
        Ok(())
    }

    /// Recent history as the dashboard may show it. Nothing is shown while
    /// tracking is disabled.
    pub fn visible_history(&self, opted_out: bool, transactions: Vec<Transaction>) -> Vec<Transaction> {
        if opted_out {
            Vec::new()
        } else {
            transactions
        }
    }

    /// Clear the flag and drop the cached profile so the next load fetches a
    /// fresh one. Zeroed values are not restored.
    pub fn opt_in<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<()> {
        set_flag(store, keys::OPT_OUT, false)?;
        store.remove(keys::PROFILE)?;
        info!("Opted back in to tracking");
        Ok(())
    }
}
