//! Calendar domain logic for the finance dashboard.
//!
//! Month grid geometry (leading and trailing padding cells, day counts) and
//! the bucketing of transactions into day cells with a per-cell visible
//! limit. Rendering code only walks the resulting [`CalendarMonth`].

use chrono::{Datelike, NaiveDate};
use log::debug;
use shared::{CalendarCell, CalendarDayType, CalendarMonth, Transaction};
use std::collections::HashMap;

/// Month currently displayed by the calendar page.
///
/// Passed explicitly to rendering; only changed by previous/next navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    pub month: u32,
    pub year: i32,
}

impl CalendarState {
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.month(), date.year())
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self::new(12, self.year - 1)
        } else {
            Self::new(self.month - 1, self.year)
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(1, self.year + 1)
        } else {
            Self::new(self.month + 1, self.year)
        }
    }
}

/// Calendar service that handles all calendar-related computations
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Build the full grid for a month.
    ///
    /// `transactions` may contain any months; only those dated inside the
    /// requested month are placed. `today` marks the matching cell.
    pub fn build_month(
        &self,
        state: CalendarState,
        transactions: &[Transaction],
        max_visible: usize,
        today: Option<NaiveDate>,
    ) -> CalendarMonth {
        let CalendarState { month, year } = state;
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);
        let previous = state.previous();
        let days_in_prev_month = self.days_in_month(previous.month, previous.year);

        let transactions_by_day = self.group_transactions_by_day(state, transactions);

        let total_cells = self.grid_cell_count(first_day, days_in_month);
        let mut cells = Vec::with_capacity(total_cells as usize);

        for i in 0..first_day {
            cells.push(CalendarCell::padding(
                days_in_prev_month - first_day + i + 1,
                CalendarDayType::PaddingBefore,
            ));
        }

        for day in 1..=days_in_month {
            let day_transactions = transactions_by_day.get(&day).cloned().unwrap_or_default();
            let visible_count = day_transactions.len().min(max_visible);
            let is_today = today
                .map(|t| t.year() == year && t.month() == month && t.day() == day)
                .unwrap_or(false);

            cells.push(CalendarCell {
                day,
                day_type: CalendarDayType::MonthDay,
                is_today,
                transactions: day_transactions,
                visible_count,
            });
        }

        let remaining = total_cells - first_day - days_in_month;
        for day in 1..=remaining {
            cells.push(CalendarCell::padding(day, CalendarDayType::PaddingAfter));
        }

        debug!(
            "Built calendar {}/{}: {} leading, {} days, {} trailing, {} transactions",
            month,
            year,
            first_day,
            days_in_month,
            remaining,
            transactions_by_day.values().map(Vec::len).sum::<usize>()
        );

        CalendarMonth {
            month,
            year,
            first_day_of_week: first_day,
            days_in_month,
            cells,
        }
    }

    /// Smallest multiple of 7 that holds the leading padding and every day
    pub fn grid_cell_count(&self, first_day: u32, days_in_month: u32) -> u32 {
        (first_day + days_in_month).div_ceil(7) * 7
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> u32 {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January", 2 => "February", 3 => "March", 4 => "April",
            5 => "May", 6 => "June", 7 => "July", 8 => "August",
            9 => "September", 10 => "October", 11 => "November", 12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Heading shown above the grid, e.g. "June 2025"
    pub fn title(&self, state: CalendarState) -> String {
        format!("{} {}", self.month_name(state.month), state.year)
    }

    /// Heading of the per-day detail view
    pub fn day_detail_title(&self, state: CalendarState, day: u32) -> String {
        format!("Transactions for {} {}, {}", self.month_name(state.month), day, state.year)
    }

    pub fn format_date_for_display(&self, date: NaiveDate) -> String {
        format!("{} {}, {}", self.month_name(date.month()), date.day(), date.year())
    }

    /// Long date of the single-transaction view, e.g. "13 June 2025"
    pub fn format_long_date(&self, date: NaiveDate) -> String {
        format!("{} {} {}", date.day(), self.month_name(date.month()), date.year())
    }

    /// Group the month's transactions by day-of-month, preserving stored order
    fn group_transactions_by_day(
        &self,
        state: CalendarState,
        transactions: &[Transaction],
    ) -> HashMap<u32, Vec<Transaction>> {
        let mut transactions_by_day: HashMap<u32, Vec<Transaction>> = HashMap::new();

        for transaction in transactions
            .iter()
            .filter(|t| t.falls_in(state.month, state.year))
        {
            transactions_by_day
                .entry(transaction.day())
                .or_default()
                .push(transaction.clone());
        }

        transactions_by_day
    }
}

/// Signed display amount, e.g. `-₹250.50` or `+₹12000.00`
pub fn format_signed_amount(amount: f64, currency_symbol: &str) -> String {
    let sign = if amount < 0.0 { '-' } else { '+' };
    format!("{}{}{:.2}", sign, currency_symbol, amount.abs())
}

/// Text of a transaction chip inside a day cell
pub fn chip_label(transaction: &Transaction, currency_symbol: &str) -> String {
    format!(
        "{} ({})",
        transaction.title,
        format_signed_amount(transaction.amount, currency_symbol)
    )
}

/// Marker under a day's chips, `None` when every transaction is shown
pub fn overflow_label(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("+ {} more", hidden))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_transaction(id: u64, date: &str, amount: f64) -> Transaction {
        Transaction {
            id,
            title: format!("Test {}", id),
            amount,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category: "Groceries".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_days_in_month() {
        let service = CalendarService::new();

        assert_eq!(service.days_in_month(1, 2025), 31);
        assert_eq!(service.days_in_month(4, 2025), 30);
        assert_eq!(service.days_in_month(2, 2025), 28);
        assert_eq!(service.days_in_month(2, 2024), 29);
        assert_eq!(service.days_in_month(2, 1900), 28);
        assert_eq!(service.days_in_month(2, 2000), 29);
    }

    #[test]
    fn test_first_day_of_month() {
        let service = CalendarService::new();

        // June 1st 2025 was a Sunday, September 1st 2025 a Monday
        assert_eq!(service.first_day_of_month(6, 2025), 0);
        assert_eq!(service.first_day_of_month(9, 2025), 1);
        // February 1st 2025 was a Saturday
        assert_eq!(service.first_day_of_month(2, 2025), 6);
    }

    #[test]
    fn test_navigation_wraps_years() {
        let june = CalendarState::new(6, 2025);
        assert_eq!(june.previous(), CalendarState::new(5, 2025));
        assert_eq!(june.next(), CalendarState::new(7, 2025));
        assert_eq!(CalendarState::new(1, 2025).previous(), CalendarState::new(12, 2024));
        assert_eq!(CalendarState::new(12, 2025).next(), CalendarState::new(1, 2026));
    }

    #[test]
    fn test_grid_is_whole_weeks_for_every_month() {
        let service = CalendarService::new();

        for year in [1999, 2000, 2023, 2024, 2025, 2100] {
            for month in 1..=12 {
                let grid = service.build_month(CalendarState::new(month, year), &[], 8, None);
                let first = service.first_day_of_month(month, year) as usize;

                assert_eq!(grid.cells.len() % 7, 0, "{}/{}", month, year);
                assert_eq!(grid.leading_cells(), first, "{}/{}", month, year);
                assert_eq!(
                    grid.leading_cells() + grid.days_in_month as usize + grid.trailing_cells(),
                    grid.cells.len()
                );
                assert!(grid.trailing_cells() < 7);
            }
        }
    }

    #[test]
    fn test_padding_day_numbers() {
        let service = CalendarService::new();

        // February 2025 starts on Saturday: 6 days of January 26..31 lead
        let grid = service.build_month(CalendarState::new(2, 2025), &[], 8, None);
        let leading: Vec<u32> = grid.cells.iter().take(6).map(|c| c.day).collect();
        assert_eq!(leading, vec![26, 27, 28, 29, 30, 31]);

        // 6 + 28 = 34 cells, padded to 35 with March 1st
        assert_eq!(grid.cells.len(), 35);
        let last = grid.cells.last().unwrap();
        assert_eq!(last.day, 1);
        assert_eq!(last.day_type, CalendarDayType::PaddingAfter);
    }

    #[test]
    fn test_leading_padding_wraps_to_december() {
        let service = CalendarService::new();

        // January 2025 starts on Wednesday: Dec 29, 30, 31 lead
        let grid = service.build_month(CalendarState::new(1, 2025), &[], 8, None);
        let leading: Vec<u32> = grid
            .cells
            .iter()
            .filter(|c| c.day_type == CalendarDayType::PaddingBefore)
            .map(|c| c.day)
            .collect();
        assert_eq!(leading, vec![29, 30, 31]);
    }

    #[test]
    fn test_transactions_bucketed_by_day_and_month() {
        let service = CalendarService::new();
        let transactions = vec![
            create_test_transaction(1, "2025-06-01", 10.0),
            create_test_transaction(2, "2025-06-01", -5.0),
            create_test_transaction(3, "2025-06-15", -5.0),
            create_test_transaction(4, "2025-05-30", 20.0),
            create_test_transaction(5, "2024-06-15", 20.0),
        ];

        let grid = service.build_month(CalendarState::new(6, 2025), &transactions, 8, None);

        let day_1 = grid.month_day(1).unwrap();
        assert_eq!(day_1.transactions.len(), 2);
        assert_eq!(day_1.transactions[0].id, 1);
        assert_eq!(grid.month_day(15).unwrap().transactions.len(), 1);
        assert!(grid.month_day(30).unwrap().transactions.is_empty());

        let placed: usize = grid.cells.iter().map(|c| c.transactions.len()).sum();
        assert_eq!(placed, 3);
    }

    #[test]
    fn test_busy_day_shows_eight_plus_overflow_on_wide_viewport() {
        let service = CalendarService::new();
        let mut transactions: Vec<Transaction> = (0..11)
            .map(|i| create_test_transaction(i, "2025-06-10", -100.0))
            .collect();
        transactions.extend((11..15).map(|i| create_test_transaction(i, "2025-06-20", -100.0)));

        let grid = service.build_month(CalendarState::new(6, 2025), &transactions, 8, None);

        let busy = grid.month_day(10).unwrap();
        assert_eq!(busy.visible().len(), 8);
        assert_eq!(busy.overflow(), 3);

        let quiet = grid.month_day(20).unwrap();
        assert_eq!(quiet.visible().len(), 4);
        assert_eq!(quiet.overflow(), 0);
    }

    #[test]
    fn test_narrow_viewport_shows_four() {
        let service = CalendarService::new();
        let transactions: Vec<Transaction> = (0..6)
            .map(|i| create_test_transaction(i, "2025-06-10", -100.0))
            .collect();

        let grid = service.build_month(CalendarState::new(6, 2025), &transactions, 4, None);
        let cell = grid.month_day(10).unwrap();
        assert_eq!(cell.visible().len(), 4);
        assert_eq!(cell.overflow(), 2);
    }

    #[test]
    fn test_today_marker() {
        let service = CalendarService::new();
        let today = NaiveDate::from_ymd_opt(2025, 6, 19);

        let grid = service.build_month(CalendarState::new(6, 2025), &[], 8, today);
        let marked: Vec<u32> = grid.cells.iter().filter(|c| c.is_today).map(|c| c.day).collect();
        assert_eq!(marked, vec![19]);

        let other = service.build_month(CalendarState::new(7, 2025), &[], 8, today);
        assert!(other.cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_titles_and_formatting() {
        let service = CalendarService::new();
        let state = CalendarState::new(6, 2025);

        assert_eq!(service.title(state), "June 2025");
        assert_eq!(service.day_detail_title(state, 13), "Transactions for June 13, 2025");
        assert_eq!(service.month_name(13), "Invalid Month");
        assert_eq!(
            service.format_date_for_display(NaiveDate::from_ymd_opt(2025, 6, 13).unwrap()),
            "June 13, 2025"
        );
    }

    #[test]
    fn test_long_date() {
        let service = CalendarService::new();
        assert_eq!(
            service.format_long_date(NaiveDate::from_ymd_opt(2025, 6, 13).unwrap()),
            "13 June 2025"
        );
        assert_eq!(
            service.format_long_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
            "1 February 2024"
        );
    }

    #[test]
    fn test_overflow_label() {
        assert_eq!(overflow_label(0), None);
        assert_eq!(overflow_label(3).as_deref(), Some("+ 3 more"));

        // Eleven on one day with room for eight
        let service = CalendarService::new();
        let transactions: Vec<Transaction> = (0..11)
            .map(|i| create_test_transaction(i, "2025-06-10", -100.0))
            .collect();
        let grid = service.build_month(CalendarState::new(6, 2025), &transactions, 8, None);
        let busy = grid.month_day(10).unwrap();
        assert_eq!(overflow_label(busy.overflow()).as_deref(), Some("+ 3 more"));
        assert_eq!(overflow_label(grid.month_day(11).unwrap().overflow()), None);
    }

    #[test]
    fn test_signed_amounts() {
        assert_eq!(format_signed_amount(-250.5, "₹"), "-₹250.50");
        assert_eq!(format_signed_amount(12000.0, "₹"), "+₹12000.00");

        let tx = create_test_transaction(1, "2025-06-01", -99.999);
        assert_eq!(chip_label(&tx, "₹"), "Test 1 (-₹100.00)");
    }
}
