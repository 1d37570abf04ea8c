//! Advisory nudges derived from the financial summary.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use shared::{Notification, Profile};

use crate::formatting::{format_category_name, format_currency};
use crate::notification_service::NotificationService;
use crate::storage::KeyValueStore;
use crate::summary::FinancialSummary;

/// A single category above this share of income triggers a nudge
pub const CATEGORY_INCOME_SHARE_LIMIT: f64 = 0.30;
/// Spending above this share of the monthly budget triggers a nudge
pub const BUDGET_WARNING_SHARE: f64 = 0.90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NudgeKind {
    /// Spending crossed a hard limit
    Alert,
    /// Savings are falling behind
    SavingsGoal,
    /// Spending mix could be better
    Insight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nudge {
    pub kind: NudgeKind,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct NudgeService {
    currency_symbol: String,
}

impl Default for NudgeService {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
        }
    }
}

impl NudgeService {
    pub fn new(currency_symbol: &str) -> Self {
        Self {
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Nudges for the current figures, alerts first.
    ///
    /// Opted-out summaries never produce nudges.
    pub fn generate(&self, profile: &Profile, summary: &FinancialSummary) -> Vec<Nudge> {
        if summary.opted_out {
            return Vec::new();
        }

        let mut nudges = Vec::new();

        if summary.wants_total > summary.needs_total {
            nudges.push(Nudge {
                kind: NudgeKind::Insight,
                title: "Wants exceed needs".to_string(),
                message: format!(
                    "You're spending {} on wants versus {} on needs. Consider trimming discretionary expenses.",
                    self.money(summary.wants_total),
                    self.money(summary.needs_total)
                ),
            });
        }

        if summary.current_savings < summary.savings_goal / 2.0 {
            nudges.push(Nudge {
                kind: NudgeKind::SavingsGoal,
                title: "Savings below target".to_string(),
                message: format!(
                    "You've saved {} so far, less than half of your {} goal.",
                    self.money(summary.current_savings),
                    self.money(summary.savings_goal)
                ),
            });
        }

        if summary.monthly_budget > 0.0
            && summary.total_expenses > summary.monthly_budget * BUDGET_WARNING_SHARE
        {
            nudges.push(Nudge {
                kind: NudgeKind::Alert,
                title: "Budget almost used".to_string(),
                message: format!(
                    "You've spent {} of your {} monthly budget ({:.0}%).",
                    self.money(summary.total_expenses),
                    self.money(summary.monthly_budget),
                    summary.budget_used_pct
                ),
            });
        }

        let limit = profile.income * CATEGORY_INCOME_SHARE_LIMIT;
        for (category, amount) in &profile.expenses {
            if *amount > limit {
                nudges.push(Nudge {
                    kind: NudgeKind::Alert,
                    title: format!("High {} spending", format_category_name(category)),
                    message: format!(
                        "{} takes {} which is more than 30% of your income.",
                        format_category_name(category),
                        self.money(*amount)
                    ),
                });
            }
        }

        nudges.sort_by_key(|n| n.kind);
        nudges
    }

    /// Append nudges as notifications, skipping any that already sit unread
    /// in the list. Returns the notifications actually added.
    pub fn notify<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        nudges: &[Nudge],
        now: DateTime<Utc>,
    ) -> Result<Vec<Notification>> {
        let notifications = NotificationService::new();
        let existing = notifications.list(store);

        let mut added = Vec::new();
        for nudge in nudges {
            let duplicate = existing
                .iter()
                .any(|n| !n.read && n.title == nudge.title && n.message == nudge.message);
            if duplicate {
                continue;
            }
            added.push(notifications.add(store, &nudge.title, &nudge.message, now)?);
        }

        if !added.is_empty() {
            info!("Added {} nudge notifications", added.len());
        }
        Ok(added)
    }

    fn money(&self, amount: f64) -> String {
        format_currency(amount, &self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile_service::fallback_profile;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn profile(income: f64, goal: f64, expenses: &[(&str, f64)]) -> Profile {
        Profile {
            username: String::new(),
            income,
            savings_goal: goal,
            expenses: expenses
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
            disposable_income: None,
        }
    }

    fn nudges_for(p: &Profile) -> Vec<Nudge> {
        NudgeService::default().generate(p, &FinancialSummary::from_profile(p, false))
    }

    #[test]
    fn test_example_profile_only_hits_budget_rule() {
        let nudges = nudges_for(&fallback_profile());
        assert_eq!(nudges.len(), 1);
        assert_eq!(nudges[0].title, "Budget almost used");
        assert_eq!(nudges[0].kind, NudgeKind::Alert);
    }

    #[test]
    fn test_healthy_profile_has_no_nudges() {
        let p = profile(100000.0, 10000.0, &[("groceries", 20000.0), ("entertainment", 5000.0)]);
        assert!(nudges_for(&p).is_empty());
    }

    #[test]
    fn test_all_rules_fire_sorted_by_kind() {
        let p = profile(10000.0, 8000.0, &[("groceries", 1000.0), ("entertainment", 8000.0)]);
        let nudges = nudges_for(&p);

        let titles: Vec<&str> = nudges.iter().map(|n| n.title.as_str()).collect();
        assert!(titles.contains(&"Wants exceed needs"));
        assert!(titles.contains(&"Savings below target"));
        assert!(titles.contains(&"Budget almost used"));
        assert!(titles.contains(&"High Entertainment spending"));
        assert!(nudges.windows(2).all(|w| w[0].kind <= w[1].kind));
    }

    #[test]
    fn test_opted_out_produces_no_nudges() {
        let p = profile(10000.0, 8000.0, &[("entertainment", 9000.0)]);
        let summary = FinancialSummary::from_profile(&p, true);
        assert!(NudgeService::default().generate(&p, &summary).is_empty());
    }

    #[test]
    fn test_notify_skips_unread_duplicates() {
        let store = MemoryStore::new();
        let service = NudgeService::default();
        let now = Utc.with_ymd_and_hms(2025, 6, 13, 9, 30, 0).unwrap();
        let nudges = nudges_for(&fallback_profile());

        assert_eq!(service.notify(&store, &nudges, now).unwrap().len(), 1);
        assert!(service.notify(&store, &nudges, now).unwrap().is_empty());

        let list = NotificationService::new().list(&store);
        NotificationService::new().mark_read(&store, list[0].id).unwrap();
        assert_eq!(service.notify(&store, &nudges, now).unwrap().len(), 1);
    }
}
