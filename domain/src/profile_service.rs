//! Profile loading with fallbacks, plus the deterministic and random
//! profiles that stand in for a real account backend.

use anyhow::Result;
use log::{info, warn};
use rand::Rng;
use shared::Profile;
use std::collections::BTreeMap;

use crate::formatting::PROFILE_CATEGORIES;
use crate::storage::{get_json_opt, keys, set_json, KeyValueStore};

/// Profile used whenever neither the remote source nor the cache has one
pub fn fallback_profile() -> Profile {
    let expenses = [
        ("groceries", 8000.0),
        ("transport", 3000.0),
        ("eating_out", 4000.0),
        ("entertainment", 2000.0),
        ("utilities", 5000.0),
        ("healthcare", 2000.0),
        ("education", 3000.0),
        ("miscellaneous", 1000.0),
    ]
    .into_iter()
    .map(|(category, amount)| (category.to_string(), amount))
    .collect::<BTreeMap<_, _>>();

    let income = 40000.0;
    let spent: f64 = expenses.values().sum();
    Profile {
        username: String::new(),
        income,
        savings_goal: 10000.0,
        expenses,
        disposable_income: Some(income - spent),
    }
}

/// Randomized profile in whole currency units.
///
/// Income in `[30000, 100000)`; expenses take 50-80% of income split across
/// every profile category; the savings goal is 10-30% of income.
pub fn random_profile<R: Rng + ?Sized>(rng: &mut R) -> Profile {
    let income = rng.gen_range(30_000..100_000) as f64;
    let spend_budget = (income * rng.gen_range(0.5..0.8)).floor();

    let weights: Vec<f64> = PROFILE_CATEGORIES.iter().map(|_| rng.gen_range(1.0..10.0)).collect();
    let weight_sum: f64 = weights.iter().sum();

    let expenses = PROFILE_CATEGORIES
        .iter()
        .zip(&weights)
        .map(|(category, weight)| (category.to_string(), (spend_budget * weight / weight_sum).floor()))
        .collect::<BTreeMap<_, _>>();

    let spent: f64 = expenses.values().sum();
    let savings_goal = (income * rng.gen_range(0.1..0.3)).round();

    Profile {
        username: String::new(),
        income,
        savings_goal,
        expenses,
        disposable_income: Some(income - spent),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    Remote,
    Cache,
    Fallback,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileService;

impl ProfileService {
    pub fn new() -> Self {
        Self
    }

    pub fn load_cached<S: KeyValueStore + ?Sized>(&self, store: &S) -> Option<Profile> {
        get_json_opt(store, keys::PROFILE)
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S, profile: &Profile) -> Result<()> {
        set_json(store, keys::PROFILE, profile)?;
        Ok(())
    }

    /// Pick the profile to display: a freshly fetched one (cached for next
    /// time), else the cached one, else the fallback.
    pub fn resolve<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        fetched: Option<Profile>,
    ) -> (Profile, ProfileSource) {
        if let Some(mut profile) = fetched {
            if profile.username.is_empty() {
                if let Some(cached) = self.load_cached(store) {
                    profile.username = cached.username;
                }
            }
            if let Err(e) = self.save(store, &profile) {
                warn!("Could not cache fetched profile: {}", e);
            }
            return (profile, ProfileSource::Remote);
        }

        if let Some(cached) = self.load_cached(store) {
            return (cached, ProfileSource::Cache);
        }

        info!("No profile available, using fallback profile");
        (fallback_profile(), ProfileSource::Fallback)
    }

    /// Stored username (kept as plain text), or the one in the cached profile
    pub fn username<S: KeyValueStore + ?Sized>(&self, store: &S) -> Option<String> {
        store
            .get_raw(keys::USERNAME)
            .ok()
            .flatten()
            .filter(|name| !name.is_empty())
            .or_else(|| self.load_cached(store).map(|p| p.username).filter(|n| !n.is_empty()))
    }
}
