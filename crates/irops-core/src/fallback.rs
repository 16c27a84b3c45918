//! Built-in demo tables served when the warehouse is unreachable.
//!
//! Each table is schema-compatible with the live result for its site, so
//! the shaper never needs to know which source produced a table.

use crate::site::QuerySite;
use crate::table::{Cell, ResultTable};
use once_cell::sync::Lazy;

fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

fn int(v: i64) -> Cell {
    Cell::Int(v)
}

fn float(v: f64) -> Cell {
    Cell::Float(v)
}

static FLIGHT_BOARD: Lazy<ResultTable> = Lazy::new(|| {
    ResultTable::from_rows(
        QuerySite::FlightBoard.columns(),
        vec![
            vec![
                text("PH1234"),
                text("ATL"),
                text("JFK"),
                text("14:30"),
                text("ON_TIME"),
                Cell::Null,
                text("N3102PH"),
                text("J. Smith"),
                int(95),
            ],
            vec![
                text("PH2567"),
                text("DTW"),
                text("LAX"),
                text("14:45"),
                text("DELAYED"),
                int(23),
                text("N9145PH"),
                text("M. Johnson"),
                int(72),
            ],
            vec![
                text("PH3890"),
                text("MSP"),
                text("SEA"),
                text("15:00"),
                text("ON_TIME"),
                Cell::Null,
                text("N3210PH"),
                text("R. Davis"),
                int(88),
            ],
            vec![
                text("PH4123"),
                text("SLC"),
                text("DEN"),
                text("15:15"),
                text("CANCELLED"),
                Cell::Null,
                text("N2156PH"),
                Cell::Null,
                int(0),
            ],
            vec![
                text("PH5678"),
                text("JFK"),
                text("MIA"),
                text("15:30"),
                text("DELAYED"),
                int(45),
                text("N5723PH"),
                text("K. Wilson"),
                int(65),
            ],
            vec![
                text("PH6901"),
                text("ATL"),
                text("ORD"),
                text("15:45"),
                text("BOARDING"),
                Cell::Null,
                text("N3108PH"),
                text("A. Brown"),
                int(91),
            ],
            vec![
                text("PH7234"),
                text("LAX"),
                text("SEA"),
                text("16:00"),
                text("ON_TIME"),
                Cell::Null,
                text("N4521PH"),
                text("T. Lee"),
                int(89),
            ],
            vec![
                text("PH8567"),
                text("BOS"),
                text("JFK"),
                text("16:15"),
                text("ON_TIME"),
                Cell::Null,
                text("N6234PH"),
                text("S. Park"),
                int(94),
            ],
        ],
    )
});

static OPS_SUMMARY: Lazy<ResultTable> = Lazy::new(|| {
    ResultTable::from_rows(
        QuerySite::OpsSummary.columns(),
        vec![vec![
            int(1423),
            int(156),
            int(34),
            int(1172),
            int(61),
            int(18200),
            float(34.0),
        ]],
    )
});

static OTP_TREND: Lazy<ResultTable> = Lazy::new(|| {
    let otp = [84.2, 82.1, 79.8, 81.5, 83.2, 85.6, 82.4];
    let rows = otp
        .iter()
        .enumerate()
        .map(|(i, pct)| vec![text(&format!("07/{}", 14 + i)), float(*pct), int(85)])
        .collect();
    ResultTable::from_rows(QuerySite::OtpTrend.columns(), rows)
});

static DELAY_CAUSES: Lazy<ResultTable> = Lazy::new(|| {
    ResultTable::from_rows(
        QuerySite::DelayCauses.columns(),
        vec![
            vec![text("Weather"), int(45)],
            vec![text("Crew"), int(32)],
            vec![text("Mechanical"), int(28)],
            vec![text("ATC"), int(21)],
            vec![text("Ground Ops"), int(14)],
        ],
    )
});

static CANCELLATIONS_BY_HUB: Lazy<ResultTable> = Lazy::new(|| {
    ResultTable::from_rows(
        QuerySite::CancellationsByHub.columns(),
        vec![
            vec![text("ATL"), int(12)],
            vec![text("DTW"), int(8)],
            vec![text("JFK"), int(6)],
            vec![text("MSP"), int(5)],
            vec![text("LAX"), int(3)],
        ],
    )
});

static HUB_STATUS: Lazy<ResultTable> = Lazy::new(|| {
    ResultTable::from_rows(
        QuerySite::HubStatus.columns(),
        vec![
            vec![
                text("ATL"),
                text("NORMAL"),
                int(342),
                float(84.0),
                int(245),
                int(89),
                text("Thunderstorms"),
            ],
            vec![
                text("DTW"),
                text("NORMAL"),
                int(156),
                float(82.0),
                int(112),
                int(45),
                text("Clear"),
            ],
            vec![
                text("MSP"),
                text("WEATHER_WATCH"),
                int(134),
                float(71.0),
                int(98),
                int(38),
                text("Snow"),
            ],
            vec![
                text("SLC"),
                text("NORMAL"),
                int(98),
                float(88.0),
                int(67),
                int(28),
                text("Clear"),
            ],
            vec![
                text("SEA"),
                text("NORMAL"),
                int(112),
                float(86.0),
                int(78),
                int(32),
                text("Fog"),
            ],
            vec![
                text("LAX"),
                text("NORMAL"),
                int(187),
                float(83.0),
                int(134),
                int(52),
                text("Clear"),
            ],
            vec![
                text("JFK"),
                text("ATC_DELAYS"),
                int(203),
                float(74.0),
                int(156),
                int(58),
                text("Rain"),
            ],
            vec![
                text("BOS"),
                text("NORMAL"),
                int(89),
                float(87.0),
                int(67),
                int(24),
                text("Clear"),
            ],
        ],
    )
});

/// The built-in table for a site. Never empty.
pub fn fallback_table(site: QuerySite) -> &'static ResultTable {
    match site {
        QuerySite::FlightBoard => &FLIGHT_BOARD,
        QuerySite::OpsSummary => &OPS_SUMMARY,
        QuerySite::OtpTrend => &OTP_TREND,
        QuerySite::DelayCauses => &DELAY_CAUSES,
        QuerySite::CancellationsByHub => &CANCELLATIONS_BY_HUB,
        QuerySite::HubStatus => &HUB_STATUS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_fallback_matches_its_site_schema() {
        for site in QuerySite::all() {
            let table = fallback_table(site);
            assert_eq!(table.columns(), site.columns(), "{site}");
            assert!(!table.is_empty(), "{site} fallback is empty");
        }
    }

    #[test]
    fn flight_board_carries_the_demo_roster() {
        let table = fallback_table(QuerySite::FlightBoard);
        assert_eq!(table.len(), 8);
        assert_eq!(
            table.cell(0, "FLIGHT_NUMBER").and_then(Cell::as_str),
            Some("PH1234")
        );
        assert_eq!(table.cell(1, "DELAY_MINUTES").and_then(Cell::as_i64), Some(23));
        assert!(table
            .cell(3, "CAPTAIN")
            .map(Cell::is_null)
            .unwrap_or(false));
    }

    #[test]
    fn summary_is_a_single_row() {
        let table = fallback_table(QuerySite::OpsSummary);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.cell(0, "TOTAL_FLIGHTS").and_then(Cell::as_i64),
            Some(1423)
        );
    }

    #[test]
    fn trend_covers_seven_days() {
        let table = fallback_table(QuerySite::OtpTrend);
        assert_eq!(table.len(), 7);
        assert_eq!(
            table.cell(0, "DATE_LABEL").and_then(Cell::as_str),
            Some("07/14")
        );
        assert_eq!(
            table.cell(6, "DATE_LABEL").and_then(Cell::as_str),
            Some("07/20")
        );
    }
}
