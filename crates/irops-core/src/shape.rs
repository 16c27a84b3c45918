//! Shapes raw result tables into presentation tables.
//!
//! Shaping is pure and source-agnostic: the same input table yields the
//! same presentation whether it came from the warehouse or from the
//! built-in fallback data.

use crate::error::{IropsError, Result};
use crate::site::QuerySite;
use crate::table::{Cell, PresentationTable, ResultTable};

/// Shapes `table` for display at `site`.
///
/// Fails with a shape error when a column the site requires is missing.
pub fn shape(table: &ResultTable, site: QuerySite) -> Result<PresentationTable> {
    match site {
        QuerySite::FlightBoard => shape_flight_board(table),
        QuerySite::OpsSummary => shape_ops_summary(table),
        QuerySite::OtpTrend => shape_named(
            table,
            &["Date", "OTP %", "Target"],
            &["DATE_LABEL", "OTP", "TARGET"],
        ),
        QuerySite::DelayCauses => {
            shape_named(table, &["Cause", "Count"], &["CAUSE", "DELAY_COUNT"])
        }
        QuerySite::CancellationsByHub => {
            shape_named(table, &["Hub", "Cancellations"], &["HUB", "CANCELLATIONS"])
        }
        QuerySite::HubStatus => shape_hub_status(table),
    }
}

fn shape_flight_board(table: &ResultTable) -> Result<PresentationTable> {
    let flight = require(table, "FLIGHT_NUMBER")?;
    let origin = require(table, "ORIGIN")?;
    let destination = require(table, "DESTINATION")?;
    let departure = require(table, "DEPARTURE_TIME")?;
    let status = require(table, "STATUS")?;
    let delay = require(table, "DELAY_MINUTES")?;
    let tail = require(table, "TAIL_NUMBER")?;
    let captain = require(table, "CAPTAIN")?;
    let health = require(table, "HEALTH_SCORE")?;

    let mut out = PresentationTable::new(vec![
        "Flight",
        "Route",
        "Departure",
        "Status",
        "Aircraft",
        "Captain",
        "Health Score",
    ]);

    for row in table.rows() {
        let code = row[status].render();
        let cancelled = code == "CANCELLED";

        out.push_row(vec![
            row[flight].render(),
            format!("{} → {}", row[origin].render(), row[destination].render()),
            row[departure].render(),
            flight_status_label(&code, row[delay].as_i64()),
            row[tail].render(),
            if row[captain].is_null() {
                "—".to_string()
            } else {
                row[captain].render()
            },
            if cancelled {
                "0".to_string()
            } else {
                row[health].render()
            },
        ]);
    }

    Ok(out)
}

fn shape_ops_summary(table: &ResultTable) -> Result<PresentationTable> {
    shape_named(
        table,
        &[
            "Total Flights",
            "Delayed",
            "Cancelled",
            "On Time",
            "In Progress",
            "Passengers Affected",
            "Avg Delay (min)",
        ],
        &[
            "TOTAL_FLIGHTS",
            "DELAYED_FLIGHTS",
            "CANCELLED_FLIGHTS",
            "ON_TIME_FLIGHTS",
            "IN_PROGRESS_FLIGHTS",
            "TOTAL_PASSENGERS_AFFECTED",
            "AVG_DELAY_MINUTES",
        ],
    )
}

fn shape_hub_status(table: &ResultTable) -> Result<PresentationTable> {
    let hub = require(table, "HUB")?;
    let condition = require(table, "CONDITION_CODE")?;
    let flights = require(table, "FLIGHTS")?;
    let otp = require(table, "OTP_PCT")?;
    let crew = require(table, "AVAILABLE_CREW")?;
    let aircraft = require(table, "AVAILABLE_AIRCRAFT")?;
    let weather = require(table, "WEATHER")?;

    let mut out = PresentationTable::new(vec![
        "Hub",
        "Status",
        "Flights",
        "OTP %",
        "Available Crew",
        "Available Aircraft",
        "Weather",
    ]);

    for row in table.rows() {
        out.push_row(vec![
            row[hub].render(),
            condition_label(&row[condition].render()),
            row[flights].render(),
            row[otp].render(),
            row[crew].render(),
            row[aircraft].render(),
            row[weather].render(),
        ]);
    }

    Ok(out)
}

/// Renders the named source columns one-for-one under the given headers.
fn shape_named(
    table: &ResultTable,
    headers: &[&'static str],
    columns: &[&str],
) -> Result<PresentationTable> {
    let indices = columns
        .iter()
        .map(|name| require(table, name))
        .collect::<Result<Vec<_>>>()?;

    let mut out = PresentationTable::new(headers.to_vec());
    for row in table.rows() {
        out.push_row(indices.iter().map(|&i| row[i].render()).collect());
    }
    Ok(out)
}

fn require(table: &ResultTable, name: &str) -> Result<usize> {
    table
        .column_index(name)
        .ok_or_else(|| IropsError::shape(format!("result is missing column {name}")))
}

fn flight_status_label(code: &str, delay_minutes: Option<i64>) -> String {
    match code {
        "ON_TIME" | "SCHEDULED" => "🟢 On Time".to_string(),
        "BOARDING" => "🟢 Boarding".to_string(),
        "IN_FLIGHT" => "🟢 In Flight".to_string(),
        "ARRIVED" => "🟢 Arrived".to_string(),
        "DELAYED" => match delay_minutes {
            Some(minutes) => format!("🟡 Delayed ({minutes} min)"),
            None => "🟡 Delayed".to_string(),
        },
        "CANCELLED" => "🔴 Cancelled".to_string(),
        other => other.to_string(),
    }
}

fn condition_label(code: &str) -> String {
    match code {
        "NORMAL" => "🟢 Normal".to_string(),
        "WEATHER_WATCH" => "🟡 Weather Watch".to_string(),
        "ATC_DELAYS" => "🟡 ATC Delays".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::fallback_table;

    #[test]
    fn delayed_flights_show_their_delay() {
        let table = fallback_table(QuerySite::FlightBoard);
        let shaped = shape(table, QuerySite::FlightBoard).unwrap();

        let delayed = &shaped.rows()[1];
        assert_eq!(delayed[0], "PH2567");
        assert_eq!(delayed[1], "DTW → LAX");
        assert_eq!(delayed[3], "🟡 Delayed (23 min)");
    }

    #[test]
    fn cancelled_flights_zero_health_and_dash_captain() {
        let table = fallback_table(QuerySite::FlightBoard);
        let shaped = shape(table, QuerySite::FlightBoard).unwrap();

        let cancelled = &shaped.rows()[3];
        assert_eq!(cancelled[3], "🔴 Cancelled");
        assert_eq!(cancelled[5], "—");
        assert_eq!(cancelled[6], "0");
    }

    #[test]
    fn hub_conditions_carry_traffic_lights() {
        let table = fallback_table(QuerySite::HubStatus);
        let shaped = shape(table, QuerySite::HubStatus).unwrap();

        assert_eq!(shaped.rows()[0][1], "🟢 Normal");
        assert_eq!(shaped.rows()[2][1], "🟡 Weather Watch");
        assert_eq!(shaped.rows()[6][1], "🟡 ATC Delays");
    }

    #[test]
    fn unknown_codes_pass_through_verbatim() {
        assert_eq!(flight_status_label("DIVERTED", None), "DIVERTED");
        assert_eq!(condition_label("CLOSED"), "CLOSED");
    }

    #[test]
    fn shaping_is_source_agnostic() {
        let table = fallback_table(QuerySite::DelayCauses);
        let copy = table.clone();

        let a = shape(table, QuerySite::DelayCauses).unwrap();
        let b = shape(&copy, QuerySite::DelayCauses).unwrap();
        assert_eq!(a.rows(), b.rows());
        assert_eq!(a.rows()[0], vec!["Weather".to_string(), "45".to_string()]);
    }

    #[test]
    fn missing_columns_are_shape_errors() {
        let table = ResultTable::new(vec!["SOMETHING_ELSE".to_string()]);
        let err = shape(&table, QuerySite::DelayCauses).unwrap_err();
        assert!(matches!(err, IropsError::Shape(_)));
    }

    #[test]
    fn summary_renders_average_delay_with_one_decimal() {
        let table = fallback_table(QuerySite::OpsSummary);
        let shaped = shape(table, QuerySite::OpsSummary).unwrap();
        assert_eq!(shaped.rows()[0][6], "34.0");
    }
}
