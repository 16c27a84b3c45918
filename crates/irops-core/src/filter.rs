//! Dashboard filter state.
//!
//! A [`FilterState`] is an immutable snapshot of the UI filter selections
//! (hub, status, time range), taken once per page render. Label parsing is
//! total: unknown labels fall back to documented defaults instead of failing,
//! so a stale or mistyped selection can never break a render.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Hub codes offered by the dashboard filter.
pub const HUBS: [&str; 8] = ["ATL", "DTW", "MSP", "SLC", "SEA", "LAX", "JFK", "BOS"];

/// The time window a query covers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum TimeRange {
    #[strum(serialize = "Next 2 hours")]
    Next2Hours,
    #[strum(serialize = "Next 6 hours")]
    Next6Hours,
    #[strum(serialize = "Today")]
    Today,
    #[strum(serialize = "Tomorrow")]
    Tomorrow,
    #[strum(serialize = "Last 7 days")]
    Last7Days,
}

impl TimeRange {
    /// Parses a UI label. Unknown labels fall back to `Today`.
    pub fn from_label(label: &str) -> Self {
        Self::from_str(label.trim()).unwrap_or(Self::Today)
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::Today
    }
}

/// The flight-status dimension of the filter.
///
/// Each concrete variant maps to a fixed set of warehouse status codes; the
/// UI label is one human word, the warehouse may use several codes for it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum StatusFilter {
    #[strum(serialize = "All Statuses")]
    All,
    #[strum(serialize = "On Time")]
    OnTime,
    #[strum(serialize = "Delayed")]
    Delayed,
    #[strum(serialize = "Cancelled")]
    Cancelled,
    #[strum(serialize = "Boarding")]
    Boarding,
    #[strum(serialize = "In Progress")]
    InProgress,
}

impl StatusFilter {
    /// Parses a UI label. Unknown labels fall back to `All`.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Self::All;
        }
        Self::from_str(trimmed).unwrap_or(Self::All)
    }

    /// The warehouse status codes selected by this filter.
    ///
    /// `All` selects everything and therefore contributes no predicate.
    pub fn codes(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::All => None,
            Self::OnTime => Some(&["ON_TIME", "SCHEDULED"]),
            Self::Delayed => Some(&["DELAYED"]),
            Self::Cancelled => Some(&["CANCELLED"]),
            Self::Boarding => Some(&["BOARDING"]),
            Self::InProgress => Some(&["IN_FLIGHT"]),
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

/// The hub dimension of the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HubFilter {
    /// No hub restriction.
    All,
    /// Restrict to a single hub code (e.g. `ATL`).
    Only(String),
}

impl HubFilter {
    /// Parses a UI label. `"All Hubs"` (or a bare `"all"`) means no
    /// restriction; any other label is taken as a hub code.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed.eq_ignore_ascii_case("all hubs") {
            Self::All
        } else {
            Self::Only(trimmed.to_ascii_uppercase())
        }
    }
}

impl fmt::Display for HubFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All Hubs"),
            Self::Only(hub) => write!(f, "{hub}"),
        }
    }
}

impl Default for HubFilter {
    fn default() -> Self {
        Self::All
    }
}

/// Immutable snapshot of the UI filter selections for one page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterState {
    pub hub: HubFilter,
    pub status: StatusFilter,
    pub time_range: TimeRange,
}

impl FilterState {
    /// Builds a snapshot from raw UI labels, applying the documented
    /// defaults for anything unrecognized.
    pub fn from_labels(hub: &str, status: &str, time_range: &str) -> Self {
        Self {
            hub: HubFilter::from_label(hub),
            status: StatusFilter::from_label(status),
            time_range: TimeRange::from_label(time_range),
        }
    }
}
