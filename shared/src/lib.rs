use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// A single dated money movement shown on the calendar.
///
/// Sign convention: negative amounts are expenses, positive amounts are income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub title: String,
    /// Signed amount (negative for expense, positive for income)
    #[serde(deserialize_with = "flexible_amount")]
    pub amount: f64,
    /// Calendar date in YYYY-MM-DD format
    pub date: NaiveDate,
    /// Category name as generated, e.g. "Eating_Out"
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::of(self.amount)
    }

    pub fn is_expense(&self) -> bool {
        self.kind() == TransactionKind::Expense
    }

    /// True when the transaction falls in the given month (1-12) of the given year
    pub fn falls_in(&self, month: u32, year: i32) -> bool {
        self.date.month() == month && self.date.year() == year
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// Whether an amount is money in or money out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn of(amount: f64) -> Self {
        if amount < 0.0 {
            TransactionKind::Expense
        } else {
            TransactionKind::Income
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// Transaction as returned by the recent-transactions endpoint.
///
/// The remote payload reports expenses as positive amounts; use
/// [`RemoteTransaction::into_transaction`] to convert to the canonical sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteTransaction {
    pub id: u64,
    pub title: String,
    #[serde(deserialize_with = "flexible_amount")]
    pub amount: f64,
    pub date: NaiveDate,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RemoteTransaction {
    pub fn into_transaction(self) -> Transaction {
        Transaction {
            id: self.id,
            title: self.title,
            amount: -self.amount,
            date: self.date,
            category: self.category,
            description: self.description,
        }
    }

    pub fn from_transaction(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id,
            title: transaction.title.clone(),
            amount: -transaction.amount,
            date: transaction.date,
            category: transaction.category.clone(),
            description: transaction.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTransactionsResponse {
    pub transactions: Vec<RemoteTransaction>,
}

/// Income, savings goal and monthly spend per expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub username: String,
    pub income: f64,
    pub savings_goal: f64,
    /// Category key (snake_case, e.g. "eating_out") to monthly amount
    pub expenses: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disposable_income: Option<f64>,
}

impl Profile {
    /// Copy of this profile with every expense set to zero
    pub fn zeroed(&self) -> Self {
        let mut profile = self.clone();
        for amount in profile.expenses.values_mut() {
            *amount = 0.0;
        }
        profile
    }
}

/// Entry in the local notification list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    /// RFC 3339 timestamp
    pub timestamp: String,
    #[serde(default)]
    pub read: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: ChatSender,
    pub text: String,
}

/// Log line forwarded from the browser to the mock API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

/// Type of calendar cell for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Trailing day of the previous month shown before day 1
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Leading day of the next month completing the last week row
    PaddingAfter,
}

/// One cell of the month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarCell {
    /// Day number printed in the cell (previous/next month numbers for padding)
    pub day: u32,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    /// Every transaction of this day, in stored order
    pub transactions: Vec<Transaction>,
    /// How many of `transactions` are shown inline
    pub visible_count: usize,
}

impl CalendarCell {
    pub fn padding(day: u32, day_type: CalendarDayType) -> Self {
        Self {
            day,
            day_type,
            is_today: false,
            transactions: Vec::new(),
            visible_count: 0,
        }
    }

    pub fn visible(&self) -> &[Transaction] {
        &self.transactions[..self.visible_count.min(self.transactions.len())]
    }

    /// Number of transactions hidden behind the "+ N more" marker
    pub fn overflow(&self) -> usize {
        self.transactions.len().saturating_sub(self.visible_count)
    }

    pub fn is_month_day(&self) -> bool {
        self.day_type == CalendarDayType::MonthDay
    }
}

/// A month grid with its transactions bucketed per day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub days_in_month: u32,
    pub cells: Vec<CalendarCell>,
}

impl CalendarMonth {
    pub fn leading_cells(&self) -> usize {
        self.count_of(CalendarDayType::PaddingBefore)
    }

    pub fn trailing_cells(&self) -> usize {
        self.count_of(CalendarDayType::PaddingAfter)
    }

    pub fn month_day(&self, day: u32) -> Option<&CalendarCell> {
        self.cells
            .iter()
            .find(|cell| cell.is_month_day() && cell.day == day)
    }

    fn count_of(&self, day_type: CalendarDayType) -> usize {
        self.cells.iter().filter(|cell| cell.day_type == day_type).count()
    }
}

/// Coarse device class used for per-cell limits and generator counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width_px: f64, breakpoint_px: f64) -> Self {
        if width_px <= breakpoint_px {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

/// Tunables for the dashboard, calendar and mock integrations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Skip network calls and use mock payloads directly
    pub use_mock_api: bool,
    pub mobile_breakpoint_px: f64,
    pub max_visible_narrow: usize,
    pub max_visible_wide: usize,
    pub generated_count_narrow: (usize, usize),
    pub generated_count_wide: (usize, usize),
    pub chat_reply_delay_ms: u32,
    /// Quiet period after the last window resize before the calendar redraws
    pub resize_debounce_ms: u32,
    pub render_interval_ms: u32,
    pub data_refresh_interval_ms: u32,
    pub tip_rotation_ms: u32,
    pub recent_transactions_limit: u32,
    pub monthly_budget_ratio: f64,
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            use_mock_api: false,
            mobile_breakpoint_px: 768.0,
            max_visible_narrow: 4,
            max_visible_wide: 8,
            generated_count_narrow: (10, 20),
            generated_count_wide: (15, 30),
            chat_reply_delay_ms: 800,
            resize_debounce_ms: 250,
            render_interval_ms: 10_000,
            data_refresh_interval_ms: 300_000,
            tip_rotation_ms: 5_000,
            recent_transactions_limit: 10,
            monthly_budget_ratio: 0.7,
            currency_symbol: "₹".to_string(),
        }
    }
}

impl AppConfig {
    pub fn viewport_for(&self, width_px: f64) -> ViewportClass {
        ViewportClass::from_width(width_px, self.mobile_breakpoint_px)
    }

    pub fn max_visible(&self, viewport: ViewportClass) -> usize {
        match viewport {
            ViewportClass::Narrow => self.max_visible_narrow,
            ViewportClass::Wide => self.max_visible_wide,
        }
    }

    pub fn generated_count_range(&self, viewport: ViewportClass) -> RangeInclusive<usize> {
        let (min, max) = match viewport {
            ViewportClass::Narrow => self.generated_count_narrow,
            ViewportClass::Wide => self.generated_count_wide,
        };
        min..=max.max(min)
    }
}

/// Accepts `12.5` as well as `"12.50"`; older pages stored amounts as strings.
fn flexible_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(value) => Ok(value),
        RawAmount::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid amount '{}': {}", text, e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(date: &str, amount: f64) -> Transaction {
        Transaction {
            id: 1,
            title: "Supermarket".to_string(),
            amount,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category: "Groceries".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_transaction_accepts_string_amount() {
        let json = r#"{"id":1717000000000,"title":"Fuel","amount":"-250.50","date":"2025-06-03","category":"Transport"}"#;
        let parsed: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.amount, -250.5);
        assert_eq!(parsed.day(), 3);
        assert!(parsed.is_expense());
        assert!(parsed.description.is_none());
    }

    #[test]
    fn test_transaction_rejects_garbage_amount() {
        let json = r#"{"id":1,"title":"Fuel","amount":"lots","date":"2025-06-03","category":"Transport"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_transaction_serializes_amount_as_number() {
        let value = serde_json::to_value(transaction("2025-06-03", -12.25)).unwrap();
        assert_eq!(value["amount"], serde_json::json!(-12.25));
        assert_eq!(value["date"], serde_json::json!("2025-06-03"));
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_transaction_kind() {
        assert_eq!(TransactionKind::of(-0.01), TransactionKind::Expense);
        assert_eq!(TransactionKind::of(0.0), TransactionKind::Income);
        assert_eq!(TransactionKind::of(100.0).css_class(), "income");
    }

    #[test]
    fn test_falls_in() {
        let tx = transaction("2024-02-29", -10.0);
        assert!(tx.falls_in(2, 2024));
        assert!(!tx.falls_in(2, 2025));
        assert!(!tx.falls_in(3, 2024));
    }

    #[test]
    fn test_remote_transaction_flips_sign() {
        let remote = RemoteTransaction {
            id: 7,
            title: "Netflix".to_string(),
            amount: 499.0,
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            category: "Subscriptions".to_string(),
            description: None,
        };
        let canonical = remote.clone().into_transaction();
        assert_eq!(canonical.amount, -499.0);
        assert!(canonical.is_expense());
        assert_eq!(RemoteTransaction::from_transaction(&canonical), remote);
    }

    #[test]
    fn test_profile_zeroed_keeps_income_and_keys() {
        let mut expenses = BTreeMap::new();
        expenses.insert("groceries".to_string(), 8000.0);
        expenses.insert("eating_out".to_string(), 4000.0);
        let profile = Profile {
            username: "asha".to_string(),
            income: 40000.0,
            savings_goal: 10000.0,
            expenses,
            disposable_income: None,
        };

        let zeroed = profile.zeroed();
        assert_eq!(zeroed.income, 40000.0);
        assert_eq!(zeroed.expenses.len(), 2);
        assert!(zeroed.expenses.values().all(|v| *v == 0.0));
    }

    #[test]
    fn test_profile_without_username_parses() {
        let json = r#"{"income":50000,"expenses":{"groceries":5000},"savings_goal":10000,"disposable_income":27000}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.username, "");
        assert_eq!(profile.disposable_income, Some(27000.0));
    }

    #[test]
    fn test_calendar_cell_overflow() {
        let mut cell = CalendarCell::padding(5, CalendarDayType::MonthDay);
        cell.transactions = (0..11).map(|_| transaction("2025-06-05", -1.0)).collect();
        cell.visible_count = 8;
        assert_eq!(cell.visible().len(), 8);
        assert_eq!(cell.overflow(), 3);
    }

    #[test]
    fn test_viewport_and_config() {
        let config = AppConfig::default();
        assert_eq!(config.viewport_for(768.0), ViewportClass::Narrow);
        assert_eq!(config.viewport_for(1024.0), ViewportClass::Wide);
        assert_eq!(config.max_visible(ViewportClass::Narrow), 4);
        assert_eq!(config.max_visible(ViewportClass::Wide), 8);
        assert_eq!(config.generated_count_range(ViewportClass::Wide), 15..=30);
        assert_eq!(config.generated_count_range(ViewportClass::Narrow), 10..=20);
    }

    #[test]
    fn test_breakpoint_is_inclusive_for_narrow() {
        let config = AppConfig::default();
        assert_eq!(config.max_visible(config.viewport_for(768.0)), 4);
        assert_eq!(config.max_visible(config.viewport_for(769.0)), 8);
        // Unknown width (0) counts as a phone
        assert_eq!(config.viewport_for(0.0), ViewportClass::Narrow);
    }

    #[test]
    fn test_padding_cells_are_not_month_days() {
        assert!(!CalendarCell::padding(30, CalendarDayType::PaddingBefore).is_month_day());
        assert!(!CalendarCell::padding(1, CalendarDayType::PaddingAfter).is_month_day());
        assert!(CalendarCell::padding(1, CalendarDayType::MonthDay).is_month_day());
    }

    #[test]
    fn test_chat_sender_serializes_lowercase() {
        let message = ChatMessage {
            sender: ChatSender::Bot,
            text: "hi".to_string(),
        };
        let value = serde_json::to_value(message).unwrap();
        assert_eq!(value["sender"], serde_json::json!("bot"));
    }
}
