//! # Financial Summary
//!
//! Derives every dashboard and stats figure from a [`Profile`]: totals, the
//! needs/wants split, the monthly budget and savings progress. Figures are
//! always finite; empty expense maps and zero goals produce zeros rather than
//! NaN or infinity.

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use shared::Profile;

use crate::formatting::bar_width;
use crate::storage::{keys, set_json, KeyValueStore};

/// Expense categories counted as needs; everything else is a want
pub const NEEDS_CATEGORIES: &[&str] = &["groceries", "utilities", "transport", "healthcare", "education"];

/// Share of income available as the monthly spending budget
pub const DEFAULT_BUDGET_RATIO: f64 = 0.7;

pub fn total_expenses(profile: &Profile) -> f64 {
    profile.expenses.values().sum()
}

pub fn needs_total(profile: &Profile) -> f64 {
    NEEDS_CATEGORIES
        .iter()
        .filter_map(|category| profile.expenses.get(*category))
        .sum()
}

/// Guarded `part / whole * 100`
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 || !whole.is_finite() || !part.is_finite() {
        0.0
    } else {
        part / whole * 100.0
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub income: f64,
    pub total_expenses: f64,
    pub needs_total: f64,
    pub wants_total: f64,
    /// Whole percent; `needs_pct + wants_pct == 100` whenever there are expenses
    pub needs_pct: f64,
    pub wants_pct: f64,
    pub monthly_budget: f64,
    pub current_savings: f64,
    pub savings_goal: f64,
    /// Clamped to `[0, 100]`
    pub savings_goal_pct: f64,
    /// Unclamped; may exceed 100 when over budget
    pub budget_used_pct: f64,
    pub opted_out: bool,
}

impl FinancialSummary {
    pub fn from_profile(profile: &Profile, opted_out: bool) -> Self {
        Self::with_budget_ratio(profile, opted_out, DEFAULT_BUDGET_RATIO)
    }

    /// Opted-out users see every expense figure as zero
    pub fn with_budget_ratio(profile: &Profile, opted_out: bool, budget_ratio: f64) -> Self {
        let zeroed;
        let profile = if opted_out {
            zeroed = profile.zeroed();
            &zeroed
        } else {
            profile
        };

        let total = total_expenses(profile);
        let needs = needs_total(profile);
        let wants = total - needs;

        let (needs_pct, wants_pct) = if total == 0.0 {
            (0.0, 0.0)
        } else {
            let needs_pct = percentage(needs, total).round();
            (needs_pct, 100.0 - needs_pct)
        };

        let monthly_budget = round_to(profile.income * budget_ratio, 2);
        let current_savings = profile.income - total;
        let savings_goal_pct = bar_width(percentage(current_savings, profile.savings_goal));

        let summary = Self {
            income: profile.income,
            total_expenses: total,
            needs_total: needs,
            wants_total: wants,
            needs_pct,
            wants_pct,
            monthly_budget,
            current_savings,
            savings_goal: profile.savings_goal,
            savings_goal_pct,
            budget_used_pct: percentage(total, monthly_budget),
            opted_out,
        };
        debug!("Computed financial summary: {:?}", summary);
        summary
    }

    pub fn budget_bar_width(&self) -> f64 {
        bar_width(self.budget_used_pct)
    }

    /// Amount of the monthly budget still unspent, never negative
    pub fn budget_remaining(&self) -> f64 {
        (self.monthly_budget - self.total_expenses).max(0.0)
    }

    pub fn key_metrics(&self) -> KeyMetrics {
        KeyMetrics::from_summary(self)
    }

    /// Write the headline figures and the update timestamp to storage
    pub fn persist<S: KeyValueStore + ?Sized>(&self, store: &S, now: DateTime<Utc>) -> Result<()> {
        set_json(store, keys::MONTHLY_BUDGET, &self.monthly_budget)?;
        set_json(store, keys::SAVINGS_GOAL, &self.savings_goal)?;
        set_json(store, keys::SPENT_AMOUNT, &self.total_expenses)?;
        set_json(store, keys::SAVED_AMOUNT, &self.current_savings)?;
        store.set_raw(keys::LAST_UPDATE, &now.to_rfc3339_opts(SecondsFormat::Millis, true))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricStatus {
    OnTrack,
    ReviewNeeded,
    BelowTarget,
    OverBudget,
}

impl MetricStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MetricStatus::OnTrack => "On Track",
            MetricStatus::ReviewNeeded => "Review Needed",
            MetricStatus::BelowTarget => "Below Target",
            MetricStatus::OverBudget => "Over Budget",
        }
    }

    pub fn is_ok(&self) -> bool {
        *self == MetricStatus::OnTrack
    }
}

/// Stats page headline metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    /// e.g. "75:25"
    pub needs_wants_ratio: String,
    pub needs_wants_status: MetricStatus,
    /// Percent of income saved, one decimal
    pub savings_rate: f64,
    pub savings_status: MetricStatus,
    /// Percent of the monthly budget spent, one decimal
    pub budget_utilization: f64,
    pub budget_status: MetricStatus,
    /// Percent of the savings goal reached, one decimal, unclamped
    pub savings_progress: f64,
    pub goal_remaining: f64,
}

impl KeyMetrics {
    pub fn from_summary(summary: &FinancialSummary) -> Self {
        let savings_rate = round_to(percentage(summary.current_savings, summary.income), 1);
        let budget_utilization = round_to(summary.budget_used_pct, 1);

        Self {
            needs_wants_ratio: format!("{:.0}:{:.0}", summary.needs_pct, summary.wants_pct),
            needs_wants_status: if summary.needs_pct <= 50.0 {
                MetricStatus::OnTrack
            } else {
                MetricStatus::ReviewNeeded
            },
            savings_rate,
            savings_status: if savings_rate >= 20.0 {
                MetricStatus::OnTrack
            } else {
                MetricStatus::BelowTarget
            },
            budget_utilization,
            budget_status: if budget_utilization <= 100.0 {
                MetricStatus::OnTrack
            } else {
                MetricStatus::OverBudget
            },
            savings_progress: round_to(percentage(summary.current_savings, summary.savings_goal), 1),
            goal_remaining: summary.savings_goal - summary.current_savings,
        }
    }

    pub fn goal_achieved(&self) -> bool {
        self.goal_remaining <= 0.0
    }

    /// "₹3,000 remaining" or "Goal Achieved!"
    pub fn goal_remaining_text(&self, currency_symbol: &str) -> String {
        if self.goal_achieved() {
            "Goal Achieved!".to_string()
        } else {
            format!(
                "{} remaining",
                crate::formatting::format_currency(self.goal_remaining, currency_symbol)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile_service::fallback_profile;
    use crate::storage::{get_json, MemoryStore};
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn profile(income: f64, goal: f64, expenses: &[(&str, f64)]) -> Profile {
        Profile {
            username: "test".to_string(),
            income,
            savings_goal: goal,
            expenses: expenses
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
            disposable_income: None,
        }
    }

    #[test]
    fn test_example_profile_figures() {
        let summary = FinancialSummary::from_profile(&fallback_profile(), false);

        assert_eq!(summary.total_expenses, 28000.0);
        assert_eq!(summary.needs_total, 21000.0);
        assert_eq!(summary.wants_total, 7000.0);
        assert_eq!(summary.needs_pct, 75.0);
        assert_eq!(summary.wants_pct, 25.0);
        assert_eq!(summary.monthly_budget, 28000.0);
        assert_eq!(summary.current_savings, 12000.0);
        assert_eq!(summary.savings_goal_pct, 100.0);
        assert_eq!(summary.budget_used_pct, 100.0);
    }

    #[test]
    fn test_needs_and_wants_always_sum_to_100() {
        let cases = [
            profile(10000.0, 1000.0, &[("groceries", 1.0), ("entertainment", 2.0)]),
            profile(10000.0, 1000.0, &[("groceries", 1.0), ("entertainment", 1.0)]),
            profile(10000.0, 1000.0, &[("education", 333.0), ("pets", 667.0)]),
            profile(10000.0, 1000.0, &[("miscellaneous", 50.0)]),
        ];
        for p in cases {
            let summary = FinancialSummary::from_profile(&p, false);
            assert_eq!(summary.needs_pct + summary.wants_pct, 100.0, "{:?}", p.expenses);
        }
    }

    #[test]
    fn test_empty_expenses_produce_zeros() {
        let summary = FinancialSummary::from_profile(&profile(0.0, 0.0, &[]), false);
        assert_eq!(summary.needs_pct, 0.0);
        assert_eq!(summary.wants_pct, 0.0);
        assert_eq!(summary.budget_used_pct, 0.0);
        assert_eq!(summary.savings_goal_pct, 0.0);

        let metrics = summary.key_metrics();
        assert_eq!(metrics.needs_wants_ratio, "0:0");
        assert_eq!(metrics.savings_rate, 0.0);
        assert!(metrics.savings_progress.is_finite());
    }

    #[test]
    fn test_savings_goal_pct_is_clamped() {
        let overspent = profile(1000.0, 500.0, &[("groceries", 2000.0)]);
        assert_eq!(FinancialSummary::from_profile(&overspent, false).savings_goal_pct, 0.0);

        let halfway = profile(1000.0, 500.0, &[("groceries", 750.0)]);
        assert_eq!(FinancialSummary::from_profile(&halfway, false).savings_goal_pct, 50.0);
    }

    #[test]
    fn test_opted_out_zeroes_expense_figures() {
        let summary = FinancialSummary::from_profile(&fallback_profile(), true);
        assert!(summary.opted_out);
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.needs_total, 0.0);
        assert_eq!(summary.wants_total, 0.0);
        assert_eq!(summary.budget_used_pct, 0.0);
        assert_eq!(summary.current_savings, 40000.0);
    }

    #[test]
    fn test_key_metrics_for_example_profile() {
        let metrics = FinancialSummary::from_profile(&fallback_profile(), false).key_metrics();
        assert_eq!(metrics.needs_wants_ratio, "75:25");
        assert_eq!(metrics.needs_wants_status, MetricStatus::ReviewNeeded);
        assert_eq!(metrics.savings_rate, 30.0);
        assert_eq!(metrics.savings_status, MetricStatus::OnTrack);
        assert_eq!(metrics.budget_utilization, 100.0);
        assert_eq!(metrics.budget_status, MetricStatus::OnTrack);
        assert_eq!(metrics.savings_progress, 120.0);
        assert_eq!(metrics.goal_remaining_text("₹"), "Goal Achieved!");
    }

    #[test]
    fn test_goal_remaining_text() {
        let p = profile(10000.0, 5000.0, &[("groceries", 8500.0)]);
        let metrics = FinancialSummary::from_profile(&p, false).key_metrics();
        assert_eq!(metrics.goal_remaining_text("₹"), "₹3,500 remaining");
        assert_eq!(metrics.budget_status, MetricStatus::OverBudget);
        assert_eq!(metrics.savings_status, MetricStatus::BelowTarget);
    }

    #[test]
    fn test_persist_writes_summary_keys() {
        let store = MemoryStore::new();
        let summary = FinancialSummary::from_profile(&fallback_profile(), false);
        let now = Utc.with_ymd_and_hms(2025, 6, 13, 9, 30, 0).unwrap();

        summary.persist(&store, now).unwrap();

        assert_eq!(get_json::<f64, _>(&store, keys::MONTHLY_BUDGET), 28000.0);
        assert_eq!(get_json::<f64, _>(&store, keys::SAVINGS_GOAL), 10000.0);
        assert_eq!(get_json::<f64, _>(&store, keys::SPENT_AMOUNT), 28000.0);
        assert_eq!(get_json::<f64, _>(&store, keys::SAVED_AMOUNT), 12000.0);
        assert_eq!(
            store.get_raw(keys::LAST_UPDATE).unwrap().as_deref(),
            Some("2025-06-13T09:30:00.000Z")
        );
    }
}
