//! Per-category breakdown: chart series and the stats table rows with
//! their assigned budgets.

use serde::{Deserialize, Serialize};
use shared::Profile;

use crate::formatting::{category_color, category_emoji, format_category_name, DEFAULT_CATEGORY_COLOR};
use crate::summary::{percentage, total_expenses};

pub const TRACKING_DISABLED_LABEL: &str = "Tracking disabled";

/// Share of income assigned to a category; unknown categories get 5%
pub fn budget_percentage(category: &str) -> f64 {
    match category {
        "groceries" => 0.15,
        "transport" => 0.10,
        "eating_out" => 0.10,
        "entertainment" => 0.05,
        "utilities" => 0.10,
        "healthcare" => 0.10,
        "education" => 0.10,
        "miscellaneous" => 0.05,
        _ => 0.05,
    }
}

pub fn assigned_budget(category: &str, income: f64) -> f64 {
    income * budget_percentage(category)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    UnderBudget,
    NearLimit,
    OverBudget,
}

impl BudgetStatus {
    /// Usage up to 80% of the assigned budget is under, up to 100% near the limit.
    /// A zero budget is only "under" when nothing was spent.
    pub fn for_usage(amount: f64, budget: f64) -> Self {
        if budget <= 0.0 {
            return if amount <= 0.0 {
                BudgetStatus::UnderBudget
            } else {
                BudgetStatus::OverBudget
            };
        }

        let ratio = amount / budget;
        if ratio <= 0.8 {
            BudgetStatus::UnderBudget
        } else if ratio <= 1.0 {
            BudgetStatus::NearLimit
        } else {
            BudgetStatus::OverBudget
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetStatus::UnderBudget => "Under Budget",
            BudgetStatus::NearLimit => "Near Limit",
            BudgetStatus::OverBudget => "Over Budget",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            BudgetStatus::UnderBudget => "✓",
            BudgetStatus::NearLimit => "⚠️",
            BudgetStatus::OverBudget => "❌",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BudgetStatus::UnderBudget => "status-under",
            BudgetStatus::NearLimit => "status-near",
            BudgetStatus::OverBudget => "status-over",
        }
    }
}

/// One row of the stats expense table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub label: String,
    pub emoji: &'static str,
    pub color: &'static str,
    pub amount: f64,
    /// Percent of total expenses, 0 when there are none
    pub pct_of_total: f64,
    pub budget: f64,
    pub status: BudgetStatus,
}

/// Rows in expense-map order. Opted-out users get no rows.
pub fn category_rows(profile: &Profile, opted_out: bool) -> Vec<CategoryRow> {
    if opted_out {
        return Vec::new();
    }

    let total = total_expenses(profile);
    profile
        .expenses
        .iter()
        .map(|(category, amount)| {
            let budget = assigned_budget(category, profile.income);
            CategoryRow {
                category: category.clone(),
                label: format_category_name(category),
                emoji: category_emoji(category),
                color: category_color(category),
                amount: *amount,
                pct_of_total: percentage(*amount, total),
                budget,
                status: BudgetStatus::for_usage(*amount, budget),
            }
        })
        .collect()
}

/// Series for the expense chart
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

impl ChartData {
    pub fn from_profile(profile: &Profile, opted_out: bool) -> Self {
        if opted_out {
            return Self::disabled();
        }

        let mut data = Self::default();
        for (category, amount) in &profile.expenses {
            data.labels.push(format_category_name(category));
            data.values.push(*amount);
            data.colors.push(category_color(category).to_string());
        }
        data
    }

    /// Placeholder shown while tracking is switched off
    pub fn disabled() -> Self {
        Self {
            labels: vec![TRACKING_DISABLED_LABEL.to_string()],
            values: vec![0.0],
            colors: vec![DEFAULT_CATEGORY_COLOR.to_string()],
        }
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn is_disabled(&self) -> bool {
        self.labels.len() == 1 && self.labels[0] == TRACKING_DISABLED_LABEL
    }

    /// Items sorted by value, largest first
    pub fn ranked(&self) -> Vec<(&str, f64, &str)> {
        let mut items: Vec<(&str, f64, &str)> = self
            .labels
            .iter()
            .zip(&self.values)
            .zip(&self.colors)
            .map(|((label, value), color)| (label.as_str(), *value, color.as_str()))
            .collect();
        items.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile_service::fallback_profile;

    #[test]
    fn test_budget_status_thresholds() {
        assert_eq!(BudgetStatus::for_usage(80.0, 100.0), BudgetStatus::UnderBudget);
        assert_eq!(BudgetStatus::for_usage(80.01, 100.0), BudgetStatus::NearLimit);
        assert_eq!(BudgetStatus::for_usage(100.0, 100.0), BudgetStatus::NearLimit);
        assert_eq!(BudgetStatus::for_usage(100.5, 100.0), BudgetStatus::OverBudget);
        assert_eq!(BudgetStatus::for_usage(0.0, 0.0), BudgetStatus::UnderBudget);
        assert_eq!(BudgetStatus::for_usage(1.0, 0.0), BudgetStatus::OverBudget);
    }

    #[test]
    fn test_assigned_budget() {
        assert_eq!(assigned_budget("groceries", 40000.0), 6000.0);
        assert_eq!(assigned_budget("pets", 40000.0), 2000.0);
    }

    #[test]
    fn test_category_rows_for_example_profile() {
        let rows = category_rows(&fallback_profile(), false);
        assert_eq!(rows.len(), 8);

        let groceries = rows.iter().find(|r| r.category == "groceries").unwrap();
        assert_eq!(groceries.label, "Groceries");
        assert_eq!(groceries.budget, 6000.0);
        assert_eq!(groceries.status, BudgetStatus::OverBudget);

        let eating_out = rows.iter().find(|r| r.category == "eating_out").unwrap();
        assert_eq!(eating_out.label, "Eating Out");
        assert_eq!(eating_out.status, BudgetStatus::NearLimit);

        let misc = rows.iter().find(|r| r.category == "miscellaneous").unwrap();
        assert_eq!(misc.status, BudgetStatus::UnderBudget);

        let pct_sum: f64 = rows.iter().map(|r| r.pct_of_total).sum();
        assert!((pct_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_rows_empty_when_opted_out() {
        assert!(category_rows(&fallback_profile(), true).is_empty());
    }

    #[test]
    fn test_chart_data() {
        let chart = ChartData::from_profile(&fallback_profile(), false);
        assert_eq!(chart.labels.len(), 8);
        assert_eq!(chart.total(), 28000.0);
        assert!(!chart.is_disabled());
        assert_eq!(chart.ranked()[0], ("Groceries", 8000.0, "#FF6384"));

        let disabled = ChartData::from_profile(&fallback_profile(), true);
        assert!(disabled.is_disabled());
        assert_eq!(disabled.total(), 0.0);
    }
}
