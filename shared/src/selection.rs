//! Period selection and filtering for the reports page.

use crate::{month_index, Period, PeriodKey};

/// Maximum number of periods that can be selected for one report
pub const MAX_SELECTED_PERIODS: usize = 12;

/// Ordered set of selected periods, unique by [`PeriodKey`], capped at
/// [`MAX_SELECTED_PERIODS`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    periods: Vec<Period>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.periods.len() >= MAX_SELECTED_PERIODS
    }

    pub fn contains(&self, period: &Period) -> bool {
        self.periods.iter().any(|p| p.same_period(period))
    }

    /// Whether the control for `period` should be enabled
    pub fn can_select(&self, period: &Period) -> bool {
        self.contains(period) || !self.is_full()
    }

    /// Adds `period` when `selected` is true and there is room, removes it
    /// otherwise. Returns whether the set changed.
    pub fn toggle(&mut self, period: Period, selected: bool) -> bool {
        if selected {
            if self.is_full() || self.contains(&period) {
                return false;
            }
            self.periods.push(period);
            true
        } else {
            let before = self.periods.len();
            self.periods.retain(|p| !p.same_period(&period));
            self.periods.len() != before
        }
    }

    pub fn keys(&self) -> Vec<PeriodKey> {
        self.periods.iter().map(Period::key).collect()
    }
}

/// Year and month-range filter applied to the available period list.
///
/// The month range only applies when both bounds are set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodFilter {
    pub year: Option<i32>,
    pub from_month: Option<String>,
    pub to_month: Option<String>,
}

impl PeriodFilter {
    pub fn is_active(&self) -> bool {
        self.year.is_some() || self.from_month.is_some() || self.to_month.is_some()
    }

    fn month_range(&self) -> Option<(usize, usize)> {
        let from = month_index(self.from_month.as_deref()?)?;
        let to = month_index(self.to_month.as_deref()?)?;
        Some((from, to))
    }

    pub fn matches(&self, period: &Period) -> bool {
        let matches_year = self.year.map_or(true, |year| period.year == year);
        let matches_month = match self.month_range() {
            Some((from, to)) => {
                month_index(&period.month).map_or(false, |index| index >= from && index <= to)
            }
            None => true,
        };
        matches_year && matches_month
    }

    pub fn apply<'a>(&self, available: &'a [Period]) -> Vec<&'a Period> {
        available.iter().filter(|p| self.matches(p)).collect()
    }
}

/// Distinct years of the available periods, most recent first
pub fn available_years(periods: &[Period]) -> Vec<i32> {
    let mut years: Vec<i32> = periods.iter().map(|p| p.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
