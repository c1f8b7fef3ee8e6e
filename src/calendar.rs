// Calendar helpers - month windows for sample data

use chrono::{Datelike, NaiveDate};

/// Inclusive `[first, last]` day range of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthWindow {
    /// Window of the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let next_month = if start.month() == 12 {
            NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
        };
        let end = next_month
            .and_then(|d| d.pred_opt())
            .unwrap_or(NaiveDate::MAX);

        MonthWindow { start, end }
    }

    /// The given day of this month, if the month has it.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        self.start.with_day(day)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_mid_month() {
        let window = MonthWindow::containing(ymd(2026, 10, 15));
        assert_eq!(window.start, ymd(2026, 10, 1));
        assert_eq!(window.end, ymd(2026, 10, 31));
    }

    #[test]
    fn test_december_rolls_year() {
        let window = MonthWindow::containing(ymd(2025, 12, 31));
        assert_eq!(window.start, ymd(2025, 12, 1));
        assert_eq!(window.end, ymd(2025, 12, 31));
    }

    #[test]
    fn test_february_leap_year() {
        assert_eq!(MonthWindow::containing(ymd(2024, 2, 10)).end, ymd(2024, 2, 29));
        assert_eq!(MonthWindow::containing(ymd(2026, 2, 10)).end, ymd(2026, 2, 28));
    }

    #[test]
    fn test_day_lookup() {
        let window = MonthWindow::containing(ymd(2026, 2, 1));
        assert_eq!(window.day(20), Some(ymd(2026, 2, 20)));
        assert_eq!(window.day(30), None);
        assert!(window.contains(ymd(2026, 2, 28)));
        assert!(!window.contains(ymd(2026, 3, 1)));
    }
}
