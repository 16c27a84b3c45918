//! Structured query predicates and the parameter binder.
//!
//! Filter selections never reach statement text directly. The translator
//! emits a structured clause list, and [`QueryPredicate::render`] turns that
//! list into placeholder SQL plus an ordered bind list. Time windows are an
//! exception by construction: they are fixed fragments chosen from a table
//! keyed by [`TimeRange`], carrying no values at all.

use crate::filter::{FilterState, HubFilter, TimeRange};
use serde::{Deserialize, Serialize};

/// A textual statement with positional `?` placeholders and the values
/// bound to them, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub text: String,
    pub binds: Vec<String>,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            binds: Vec::new(),
        }
    }
}

/// One WHERE-clause fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// A fixed time-window fragment from the [`TimeRange`] table.
    /// Contains no interpolated values.
    Window(&'static str),
    /// `column = ?` with a single bound value.
    Eq {
        column: &'static str,
        value: String,
    },
    /// `column IN (?, ...)` with one bound value per element.
    /// A single element renders as equality.
    In {
        column: &'static str,
        values: Vec<String>,
    },
}

/// Which filter dimensions a query site applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub time: bool,
    pub hub: bool,
    pub status: bool,
}

impl Dimensions {
    pub const NONE: Self = Self {
        time: false,
        hub: false,
        status: false,
    };
    pub const TIME: Self = Self {
        time: true,
        hub: false,
        status: false,
    };
    pub const HUB: Self = Self {
        time: false,
        hub: true,
        status: false,
    };
    pub const ALL: Self = Self {
        time: true,
        hub: true,
        status: true,
    };
}

/// An ordered conjunction of clauses, consumed once per statement build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryPredicate {
    clauses: Vec<Clause>,
}

impl QueryPredicate {
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Renders the conjunction into placeholder SQL and the ordered bind
    /// list. An empty predicate renders as an empty string.
    pub fn render(&self) -> (String, Vec<String>) {
        let mut fragments = Vec::with_capacity(self.clauses.len());
        let mut binds = Vec::new();

        for clause in &self.clauses {
            match clause {
                Clause::Window(fragment) => fragments.push((*fragment).to_string()),
                Clause::Eq { column, value } => {
                    fragments.push(format!("{column} = ?"));
                    binds.push(value.clone());
                }
                Clause::In { column, values } => {
                    if values.len() == 1 {
                        fragments.push(format!("{column} = ?"));
                    } else {
                        let placeholders = vec!["?"; values.len()].join(", ");
                        fragments.push(format!("{column} IN ({placeholders})"));
                    }
                    binds.extend(values.iter().cloned());
                }
            }
        }

        (fragments.join(" AND "), binds)
    }
}

/// The fixed time-window fragment for a range.
pub fn window_fragment(range: TimeRange) -> &'static str {
    match range {
        TimeRange::Next2Hours => {
            "FLIGHT_DATE = CURRENT_DATE() AND SCHEDULED_DEPARTURE_UTC BETWEEN \
             CURRENT_TIMESTAMP() AND TIMESTAMPADD('hour', 2, CURRENT_TIMESTAMP())"
        }
        TimeRange::Next6Hours => {
            "FLIGHT_DATE = CURRENT_DATE() AND SCHEDULED_DEPARTURE_UTC BETWEEN \
             CURRENT_TIMESTAMP() AND TIMESTAMPADD('hour', 6, CURRENT_TIMESTAMP())"
        }
        TimeRange::Today => "FLIGHT_DATE = CURRENT_DATE()",
        TimeRange::Tomorrow => "FLIGHT_DATE = DATEADD('day', 1, CURRENT_DATE())",
        TimeRange::Last7Days => {
            "FLIGHT_DATE BETWEEN DATEADD('day', -7, CURRENT_DATE()) AND CURRENT_DATE()"
        }
    }
}

/// Maps filter selections to predicate clauses for one query site.
///
/// Total over the filter enums: every time range maps to a window fragment,
/// and the `All` sentinels contribute nothing. `hub_column` names the column
/// the hub restriction applies to at this site.
pub fn translate(
    filter: &FilterState,
    dimensions: Dimensions,
    hub_column: &'static str,
) -> QueryPredicate {
    let mut clauses = Vec::new();

    if dimensions.time {
        clauses.push(Clause::Window(window_fragment(filter.time_range)));
    }

    if dimensions.hub {
        if let HubFilter::Only(hub) = &filter.hub {
            clauses.push(Clause::Eq {
                column: hub_column,
                value: hub.clone(),
            });
        }
    }

    if dimensions.status {
        if let Some(codes) = filter.status.codes() {
            clauses.push(Clause::In {
                column: "STATUS",
                values: codes.iter().map(|c| c.to_string()).collect(),
            });
        }
    }

    QueryPredicate { clauses }
}
