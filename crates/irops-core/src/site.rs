//! The catalog of dashboard query sites.
//!
//! Each site owns its statement shape, result schema, and the filter
//! dimensions it honors. Everything downstream (execution, fallback,
//! shaping) is keyed by [`QuerySite`], so adding a site means extending
//! the match arms here and nothing else.

use crate::filter::{FilterState, TimeRange};
use crate::predicate::{translate, window_fragment, Dimensions, Statement};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

const FLIGHTS_TABLE: &str = "PHANTOM_IROPS.STAGING.STG_FLIGHTS";
const HUB_STATUS_TABLE: &str = "PHANTOM_IROPS.ANALYTICS.HUB_STATUS";

/// A dashboard query site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
pub enum QuerySite {
    FlightBoard,
    OpsSummary,
    OtpTrend,
    DelayCauses,
    CancellationsByHub,
    HubStatus,
}

impl QuerySite {
    /// Every site, in dashboard order.
    pub fn all() -> Vec<QuerySite> {
        use strum::IntoEnumIterator;
        QuerySite::iter().collect()
    }

    /// The column names a result table for this site must carry, in order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            QuerySite::FlightBoard => &[
                "FLIGHT_NUMBER",
                "ORIGIN",
                "DESTINATION",
                "DEPARTURE_TIME",
                "STATUS",
                "DELAY_MINUTES",
                "TAIL_NUMBER",
                "CAPTAIN",
                "HEALTH_SCORE",
            ],
            QuerySite::OpsSummary => &[
                "TOTAL_FLIGHTS",
                "DELAYED_FLIGHTS",
                "CANCELLED_FLIGHTS",
                "ON_TIME_FLIGHTS",
                "IN_PROGRESS_FLIGHTS",
                "TOTAL_PASSENGERS_AFFECTED",
                "AVG_DELAY_MINUTES",
            ],
            QuerySite::OtpTrend => &["DATE_LABEL", "OTP", "TARGET"],
            QuerySite::DelayCauses => &["CAUSE", "DELAY_COUNT"],
            QuerySite::CancellationsByHub => &["HUB", "CANCELLATIONS"],
            QuerySite::HubStatus => &[
                "HUB",
                "CONDITION_CODE",
                "FLIGHTS",
                "OTP_PCT",
                "AVAILABLE_CREW",
                "AVAILABLE_AIRCRAFT",
                "WEATHER",
            ],
        }
    }

    /// Which filter dimensions this site applies.
    pub fn dimensions(self) -> Dimensions {
        match self {
            QuerySite::FlightBoard => Dimensions::ALL,
            QuerySite::OpsSummary | QuerySite::DelayCauses | QuerySite::CancellationsByHub => {
                Dimensions::TIME
            }
            // The trend chart is pinned to a trailing week regardless of the
            // selected range.
            QuerySite::OtpTrend => Dimensions::NONE,
            QuerySite::HubStatus => Dimensions::HUB,
        }
    }

    /// The column the hub restriction applies to at this site.
    pub fn hub_column(self) -> &'static str {
        match self {
            QuerySite::HubStatus => "HUB",
            _ => "ORIGIN",
        }
    }

    /// Builds the parameterized statement for this site under `filter`.
    pub fn statement(self, filter: &FilterState) -> Statement {
        let predicate = translate(filter, self.dimensions(), self.hub_column());
        let (mut where_sql, binds) = predicate.render();

        let text = match self {
            QuerySite::FlightBoard => format!(
                "SELECT FLIGHT_NUMBER, ORIGIN, DESTINATION, \
                 TO_CHAR(SCHEDULED_DEPARTURE_UTC, 'HH24:MI') AS DEPARTURE_TIME, \
                 STATUS, DEPARTURE_DELAY_MINUTES AS DELAY_MINUTES, \
                 TAIL_NUMBER, CAPTAIN, HEALTH_SCORE \
                 FROM {FLIGHTS_TABLE} \
                 WHERE {where_sql} \
                 ORDER BY SCHEDULED_DEPARTURE_UTC"
            ),
            // Arrivals more than 15 minutes late count against the delayed
            // totals even though their status is no longer DELAYED.
            QuerySite::OpsSummary => format!(
                "SELECT COUNT(*) AS TOTAL_FLIGHTS, \
                 COUNT(CASE WHEN STATUS = 'DELAYED' OR (STATUS = 'ARRIVED' AND \
                 DEPARTURE_DELAY_MINUTES > 15) THEN 1 END) AS DELAYED_FLIGHTS, \
                 COUNT(CASE WHEN STATUS = 'CANCELLED' THEN 1 END) AS CANCELLED_FLIGHTS, \
                 COUNT(CASE WHEN STATUS IN ('ON_TIME', 'SCHEDULED') OR (STATUS = 'ARRIVED' AND \
                 (DEPARTURE_DELAY_MINUTES IS NULL OR DEPARTURE_DELAY_MINUTES <= 15)) THEN 1 END) \
                 AS ON_TIME_FLIGHTS, \
                 COUNT(CASE WHEN STATUS = 'IN_FLIGHT' THEN 1 END) AS IN_PROGRESS_FLIGHTS, \
                 SUM(CASE WHEN STATUS IN ('DELAYED', 'CANCELLED') OR (STATUS = 'ARRIVED' AND \
                 DEPARTURE_DELAY_MINUTES > 15) THEN PASSENGERS_BOOKED ELSE 0 END) \
                 AS TOTAL_PASSENGERS_AFFECTED, \
                 AVG(CASE WHEN DEPARTURE_DELAY_MINUTES > 0 THEN DEPARTURE_DELAY_MINUTES END) \
                 AS AVG_DELAY_MINUTES \
                 FROM {FLIGHTS_TABLE} \
                 WHERE {where_sql}"
            ),
            // Cancellations drop out of the OTP denominator entirely.
            QuerySite::OtpTrend => {
                let window = window_fragment(TimeRange::Last7Days);
                format!(
                    "SELECT TO_CHAR(FLIGHT_DATE, 'MM/DD') AS DATE_LABEL, \
                     ROUND(100.0 * COUNT(CASE WHEN STATUS IN ('ON_TIME', 'SCHEDULED') OR \
                     (STATUS = 'ARRIVED' AND (DEPARTURE_DELAY_MINUTES IS NULL OR \
                     DEPARTURE_DELAY_MINUTES <= 15)) THEN 1 END) / \
                     NULLIF(COUNT(CASE WHEN STATUS NOT IN ('CANCELLED') THEN 1 END), 0), 1) \
                     AS OTP, \
                     85 AS TARGET \
                     FROM {FLIGHTS_TABLE} \
                     WHERE {window} \
                     GROUP BY FLIGHT_DATE \
                     ORDER BY FLIGHT_DATE"
                )
            }
            QuerySite::DelayCauses => {
                where_sql.push_str(" AND DELAY_CAUSE IS NOT NULL");
                format!(
                    "SELECT DELAY_CAUSE AS CAUSE, COUNT(*) AS DELAY_COUNT \
                     FROM {FLIGHTS_TABLE} \
                     WHERE {where_sql} \
                     GROUP BY DELAY_CAUSE \
                     ORDER BY DELAY_COUNT DESC"
                )
            }
            QuerySite::CancellationsByHub => {
                where_sql.push_str(" AND STATUS = 'CANCELLED'");
                format!(
                    "SELECT ORIGIN AS HUB, COUNT(*) AS CANCELLATIONS \
                     FROM {FLIGHTS_TABLE} \
                     WHERE {where_sql} \
                     GROUP BY ORIGIN \
                     ORDER BY CANCELLATIONS DESC \
                     LIMIT 5"
                )
            }
            QuerySite::HubStatus => {
                let base = format!(
                    "SELECT HUB, CONDITION_CODE, FLIGHTS, OTP_PCT, \
                     AVAILABLE_CREW, AVAILABLE_AIRCRAFT, WEATHER \
                     FROM {HUB_STATUS_TABLE}"
                );
                if where_sql.is_empty() {
                    format!("{base} ORDER BY FLIGHTS DESC")
                } else {
                    format!("{base} WHERE {where_sql} ORDER BY FLIGHTS DESC")
                }
            }
        };

        Statement { text, binds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_board_orders_by_departure_and_binds_filters() {
        let filter = FilterState::from_labels("ATL", "Delayed", "Today");
        let statement = QuerySite::FlightBoard.statement(&filter);

        assert!(statement.text.contains("FROM PHANTOM_IROPS.STAGING.STG_FLIGHTS"));
        assert!(statement.text.contains("ORDER BY SCHEDULED_DEPARTURE_UTC"));
        assert!(statement.text.contains("ORIGIN = ?"));
        assert_eq!(statement.binds, vec!["ATL".to_string(), "DELAYED".to_string()]);
    }

    #[test]
    fn summary_ignores_hub_and_status_selections() {
        let filter = FilterState::from_labels("ATL", "Delayed", "Today");
        let statement = QuerySite::OpsSummary.statement(&filter);

        assert!(statement.binds.is_empty());
        assert!(!statement.text.contains("ORIGIN = ?"));
        assert!(statement.text.contains("AVG_DELAY_MINUTES"));
    }

    #[test]
    fn trend_is_pinned_to_a_trailing_week() {
        let today = FilterState::from_labels("All Hubs", "All Statuses", "Today");
        let tomorrow = FilterState::from_labels("All Hubs", "All Statuses", "Tomorrow");

        let a = QuerySite::OtpTrend.statement(&today);
        let b = QuerySite::OtpTrend.statement(&tomorrow);

        assert_eq!(a, b);
        assert!(a.text.contains("DATEADD('day', -7, CURRENT_DATE())"));
    }

    #[test]
    fn delay_causes_excludes_null_causes() {
        let statement = QuerySite::DelayCauses.statement(&FilterState::default());
        assert!(statement.text.contains("DELAY_CAUSE IS NOT NULL"));
        assert!(statement.text.contains("GROUP BY DELAY_CAUSE"));
    }

    #[test]
    fn cancellations_pin_status_and_cap_rows() {
        let filter = FilterState::from_labels("All Hubs", "Delayed", "Today");
        let statement = QuerySite::CancellationsByHub.statement(&filter);

        assert!(statement.text.contains("STATUS = 'CANCELLED'"));
        assert!(statement.text.contains("LIMIT 5"));
        assert!(statement.binds.is_empty());
    }

    #[test]
    fn hub_status_restricts_on_hub_column() {
        let all = QuerySite::HubStatus.statement(&FilterState::default());
        assert!(!all.text.contains("WHERE"));
        assert!(all.text.contains("ORDER BY FLIGHTS DESC"));

        let filter = FilterState::from_labels("DTW", "All Statuses", "Today");
        let one = QuerySite::HubStatus.statement(&filter);
        assert!(one.text.contains("WHERE HUB = ?"));
        assert_eq!(one.binds, vec!["DTW".to_string()]);
    }

    #[test]
    fn every_site_names_its_result_columns() {
        for site in QuerySite::all() {
            assert!(!site.columns().is_empty(), "{site} has no columns");
        }
    }
}
