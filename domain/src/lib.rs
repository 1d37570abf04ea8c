//! # Finance Domain
//!
//! UI-agnostic logic behind the personal finance dashboard. Everything here
//! works against the [`storage::KeyValueStore`] abstraction, so the same
//! services run in the browser (backed by `localStorage`), in the mock API
//! and in unit tests (backed by [`storage::MemoryStore`]).
//!
//! Randomness and the current time are always passed in by the caller.

use shared::AppConfig;

pub mod breakdown;
pub mod calendar;
pub mod chat_service;
pub mod formatting;
pub mod notification_service;
pub mod nudge_service;
pub mod opt_out_service;
pub mod profile_service;
pub mod signup;
pub mod storage;
pub mod summary;
pub mod tips;
pub mod transaction_service;

pub use calendar::{CalendarService, CalendarState};
pub use notification_service::NotificationService;
pub use nudge_service::{Nudge, NudgeService};
pub use opt_out_service::{OptOutService, TrackingStatus};
pub use profile_service::{fallback_profile, ProfileService, ProfileSource};
pub use signup::{SignupError, SignupService};
pub use summary::{FinancialSummary, KeyMetrics};
pub use transaction_service::TransactionService;

/// Every domain service, configured from one [`AppConfig`]
#[derive(Debug, Clone)]
pub struct Services {
    pub config: AppConfig,
    pub calendar: CalendarService,
    pub transactions: TransactionService,
    pub profiles: ProfileService,
    pub notifications: NotificationService,
    pub nudges: NudgeService,
    pub opt_out: OptOutService,
    pub signup: SignupService,
}

impl Services {
    pub fn new(config: AppConfig) -> Self {
        Self {
            calendar: CalendarService::new(),
            transactions: TransactionService::with_config(config.clone()),
            profiles: ProfileService::new(),
            notifications: NotificationService::new(),
            nudges: NudgeService::new(&config.currency_symbol),
            opt_out: OptOutService::new(),
            signup: SignupService::new(),
            config,
        }
    }

    /// Summary of a profile using the configured budget ratio
    pub fn summarize(&self, profile: &shared::Profile, opted_out: bool) -> FinancialSummary {
        FinancialSummary::with_budget_ratio(profile, opted_out, self.config.monthly_budget_ratio)
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
