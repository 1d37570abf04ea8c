//! Transaction generation and month regeneration.
//!
//! There is no real transaction source: the calendar is filled with random
//! transactions drawn from a fixed category/title catalogue. Regenerating a
//! month replaces only that month's transactions.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use rand::seq::SliceRandom;
use rand::Rng;
use shared::{AppConfig, Transaction, ViewportClass};

use crate::calendar::{CalendarService, CalendarState};
use crate::storage::{get_flag, get_json, keys, set_flag, set_json, KeyValueStore};

/// Categories the generator draws from, with their fixed title lists
pub const TRANSACTION_CATALOGUE: &[(&str, &[&str])] = &[
    ("Groceries", &["Supermarket", "Local Market", "Organic Store", "Grocery Delivery"]),
    ("Rent", &["Monthly Rent", "Rent Payment"]),
    ("Utilities", &["Electricity Bill", "Water Bill", "Gas Bill", "Internet Bill"]),
    ("Entertainment", &["Movie Tickets", "Concert Tickets", "Game Purchase", "Streaming Service"]),
    ("Eating_Out", &["Restaurant Dinner", "Lunch with Friends", "Coffee Shop", "Fast Food"]),
    ("Transport", &["Fuel", "Public Transport", "Cab Ride", "Car Maintenance"]),
    ("Shopping", &["Clothing Purchase", "Electronics", "Home Goods", "Online Shopping"]),
    ("Health", &["Doctor Visit", "Pharmacy", "Health Insurance", "Gym Membership"]),
    ("Education", &["Course Fee", "Books", "Online Course", "School Supplies"]),
    ("Salary", &["Monthly Salary", "Paycheck"]),
    ("Income", &["Freelance Work", "Side Gig", "Consulting Fee", "Rental Income"]),
    ("Investment", &["Stock Purchase", "Mutual Fund Investment", "Cryptocurrency"]),
    ("Clothing", &["New Shirt", "Jeans", "Shoes", "Accessories"]),
    ("Subscriptions", &["Netflix", "Spotify", "Amazon Prime", "Magazine Subscription"]),
    ("Fitness", &["Gym Membership", "Fitness Equipment", "Sports Gear"]),
    ("Travel", &["Flight Tickets", "Hotel Booking", "Vacation Expenses"]),
];

/// Categories whose generated amounts are income
pub const INCOME_CATEGORIES: &[&str] = &["Salary", "Income", "Investment"];

// Amount ranges in cents, upper bound exclusive
const INCOME_CENTS: std::ops::Range<i64> = 1_000_000..5_000_000;
const EXPENSE_CENTS: std::ops::Range<i64> = -500_000..-10_000;

pub fn is_income_category(category: &str) -> bool {
    INCOME_CATEGORIES.contains(&category)
}

/// Outcome of regenerating a month
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMonth {
    pub state: CalendarState,
    pub generated: usize,
    pub replaced: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TransactionService {
    config: AppConfig,
    calendar: CalendarService,
}

impl TransactionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            calendar: CalendarService::new(),
        }
    }

    /// Draw a batch of random transactions dated inside `state`'s month.
    ///
    /// Ids are `base_id, base_id + 1, ...` so a batch created from the current
    /// epoch milliseconds stays unique.
    pub fn generate_for_month<R: Rng + ?Sized>(
        &self,
        state: CalendarState,
        viewport: ViewportClass,
        rng: &mut R,
        base_id: u64,
    ) -> Vec<Transaction> {
        let count = rng.gen_range(self.config.generated_count_range(viewport));
        let days_in_month = self.calendar.days_in_month(state.month, state.year);

        (0..count)
            .filter_map(|i| {
                let day = rng.gen_range(1..=days_in_month);
                let date = NaiveDate::from_ymd_opt(state.year, state.month, day)?;
                let (category, titles) = TRANSACTION_CATALOGUE.choose(rng)?;
                let title = titles.choose(rng).copied().unwrap_or("Payment");

                Some(Transaction {
                    id: base_id + i as u64,
                    title: title.to_string(),
                    amount: random_amount(category, rng),
                    date,
                    category: category.to_string(),
                    description: None,
                })
            })
            .collect()
    }

    /// Replace the stored transactions of one month with a fresh random batch.
    ///
    /// Transactions of every other month are kept untouched.
    pub fn regenerate_month<S, R>(
        &self,
        store: &S,
        state: CalendarState,
        viewport: ViewportClass,
        rng: &mut R,
        base_id: u64,
    ) -> Result<GeneratedMonth>
    where
        S: KeyValueStore + ?Sized,
        R: Rng + ?Sized,
    {
        let existing: Vec<Transaction> = get_json(store, keys::TRANSACTIONS);
        let before = existing.len();

        let mut transactions: Vec<Transaction> = existing
            .into_iter()
            .filter(|t| !t.falls_in(state.month, state.year))
            .collect();
        let replaced = before - transactions.len();

        let generated = self.generate_for_month(state, viewport, rng, base_id);
        let count = generated.len();
        transactions.extend(generated);

        set_json(store, keys::TRANSACTIONS, &transactions)?;

        info!(
            "Generated {} transactions for {}, replacing {}",
            count,
            self.calendar.title(state),
            replaced
        );

        Ok(GeneratedMonth {
            state,
            generated: count,
            replaced,
        })
    }

    pub fn load_transactions<S: KeyValueStore + ?Sized>(&self, store: &S) -> Vec<Transaction> {
        get_json(store, keys::TRANSACTIONS)
    }

    /// Decide whether the calendar should generate on load: nothing stored
    /// yet, or the user just arrived from the landing page. The session flag
    /// is consumed.
    pub fn should_generate_on_load<L, S>(&self, local: &L, session: &S) -> bool
    where
        L: KeyValueStore + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        let empty = self.load_transactions(local).is_empty();
        let from_landing = get_flag(session, keys::COMING_FROM_LANDING);

        if from_landing {
            if let Err(e) = set_flag(session, keys::COMING_FROM_LANDING, false) {
                log::warn!("Could not clear landing flag: {}", e);
            }
        }

        empty || from_landing
    }

    /// Recent-history payload used when no remote source answers: a fresh
    /// batch for `today`'s month, never dated after `today`, newest first.
    pub fn sample_recent_transactions<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        limit: usize,
        rng: &mut R,
        base_id: u64,
    ) -> Vec<Transaction> {
        let state = CalendarState::containing(today);
        let mut batch: Vec<Transaction> = self
            .generate_for_month(state, ViewportClass::Wide, rng, base_id)
            .into_iter()
            .filter(|t| t.date <= today)
            .collect();

        batch.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        batch.truncate(limit);
        batch
    }

    /// Notification text announcing a regenerated month
    pub fn generated_message(&self, outcome: &GeneratedMonth) -> (String, String) {
        (
            "Transactions Generated".to_string(),
            format!(
                "{} new transactions have been added to your calendar for {}.",
                outcome.generated,
                self.calendar.month_name(outcome.state.month)
            ),
        )
    }
}

fn random_amount<R: Rng + ?Sized>(category: &str, rng: &mut R) -> f64 {
    let cents = if is_income_category(category) {
        rng.gen_range(INCOME_CENTS)
    } else {
        rng.gen_range(EXPENSE_CENTS)
    };
    cents as f64 / 100.0
}
