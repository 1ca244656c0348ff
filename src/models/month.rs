//! Calendar month model.
//!
//! Distributions and breakdowns are always ordered January to December.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A calendar month, serialized by its three-letter label (e.g. `"Jan"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    /// January.
    Jan,
    /// February.
    Feb,
    /// March.
    Mar,
    /// April.
    Apr,
    /// May.
    May,
    /// June.
    Jun,
    /// July.
    Jul,
    /// August.
    Aug,
    /// September.
    Sep,
    /// October.
    Oct,
    /// November.
    Nov,
    /// December.
    Dec,
}

/// Number of months in a year.
pub const MONTHS_IN_YEAR: usize = 12;

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; MONTHS_IN_YEAR] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Returns the zero-based position of the month in the year.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the three-letter label for the month.
    ///
    /// # Example
    ///
    /// ```
    /// use ni_engine::models::Month;
    ///
    /// assert_eq!(Month::Sep.label(), "Sep");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
