//! Instrument domain — candles and book snapshots.

#[cfg(feature = "http")]
pub mod client;
pub mod endpoints;
pub mod wire;

use crate::domain::wire_enum;

wire_enum! {
    /// Candlestick granularity, from 5 seconds to a month.
    CandlestickGranularity ["S5, S10, S15, S30, M1, M2, M4, M5, M10, M15, M30, H1, H2, H3, H4, H6, H8, H12, D, W, M"] {
        S5 => "S5",
        S10 => "S10",
        S15 => "S15",
        S30 => "S30",
        M1 => "M1",
        M2 => "M2",
        M4 => "M4",
        M5 => "M5",
        M10 => "M10",
        M15 => "M15",
        M30 => "M30",
        H1 => "H1",
        H2 => "H2",
        H3 => "H3",
        H4 => "H4",
        H6 => "H6",
        H8 => "H8",
        H12 => "H12",
        D => "D",
        W => "W",
        Month => "M",
    }
}

impl CandlestickGranularity {
    /// Duration of one candle in seconds (calendar-approximate for D/W/M).
    pub fn seconds(&self) -> u64 {
        match self {
            Self::S5 => 5,
            Self::S10 => 10,
            Self::S15 => 15,
            Self::S30 => 30,
            Self::M1 => 60,
            Self::M2 => 120,
            Self::M4 => 240,
            Self::M5 => 300,
            Self::M10 => 600,
            Self::M15 => 900,
            Self::M30 => 1800,
            Self::H1 => 3600,
            Self::H2 => 7200,
            Self::H3 => 10800,
            Self::H4 => 14400,
            Self::H6 => 21600,
            Self::H8 => 28800,
            Self::H12 => 43200,
            Self::D => 86400,
            Self::W => 604800,
            Self::Month => 2592000,
        }
    }
}

wire_enum! {
    /// Day of week used to align weekly candles.
    WeeklyAlignment ["Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday"] {
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
        Sunday => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_granularity_closed_set() {
        assert_eq!(
            CandlestickGranularity::from_str("H4").unwrap(),
            CandlestickGranularity::H4
        );
        assert_eq!(
            CandlestickGranularity::from_str("M").unwrap(),
            CandlestickGranularity::Month
        );
        assert!(CandlestickGranularity::from_str("H5").is_err());
        assert_eq!(CandlestickGranularity::ALL.len(), 21);
    }

    #[test]
    fn test_granularity_seconds_monotonic() {
        let mut last = 0;
        for g in CandlestickGranularity::ALL {
            assert!(g.seconds() > last, "{g} should be coarser than the previous");
            last = g.seconds();
        }
    }

    #[test]
    fn test_weekly_alignment_wire_spelling() {
        assert_eq!(WeeklyAlignment::Friday.as_str(), "Friday");
        assert!(WeeklyAlignment::from_str("friday").is_err());
    }
}
