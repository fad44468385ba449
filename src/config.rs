use std::env;
use std::fmt::Debug;
use std::ops::RangeInclusive;
use std::str::FromStr;
use tracing::warn;

/// Pending bookings may be held for at most 30 days.
pub const PENDING_BOOKING_TTL_RANGE: RangeInclusive<i64> = 1..=30 * 24 * 3600;
/// Sessions live between an hour and a year.
pub const SESSION_TTL_HOURS_RANGE: RangeInclusive<i64> = 1..=365 * 24;
pub const SWEEP_INTERVAL_RANGE: RangeInclusive<u64> = 1..=24 * 3600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OccupancyMode {
    Random,
    Booked,
}

impl FromStr for OccupancyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(OccupancyMode::Random),
            "booked" => Ok(OccupancyMode::Booked),
            other => Err(format!("unknown occupancy mode: {}", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub occupancy_mode: OccupancyMode,
    pub occupancy_ratio: f64,
    pub pending_booking_ttl_secs: i64,
    pub sweep_interval_secs: u64,
    pub session_ttl_hours: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            occupancy_mode: OccupancyMode::Random,
            occupancy_ratio: 0.3,
            pending_booking_ttl_secs: 900,
            sweep_interval_secs: 30,
            session_ttl_hours: 24,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparseable or out-of-range
    /// values fall back to the default with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            occupancy_mode: parse_or(&lookup, "OCCUPANCY_MODE", defaults.occupancy_mode),
            occupancy_ratio: bounded(
                "OCCUPANCY_RATIO",
                parse_or(&lookup, "OCCUPANCY_RATIO", defaults.occupancy_ratio),
                &(0.0..=1.0),
                defaults.occupancy_ratio,
            ),
            pending_booking_ttl_secs: bounded(
                "PENDING_BOOKING_TTL_SECS",
                parse_or(&lookup, "PENDING_BOOKING_TTL_SECS", defaults.pending_booking_ttl_secs),
                &PENDING_BOOKING_TTL_RANGE,
                defaults.pending_booking_ttl_secs,
            ),
            sweep_interval_secs: bounded(
                "SWEEP_INTERVAL_SECS",
                parse_or(&lookup, "SWEEP_INTERVAL_SECS", defaults.sweep_interval_secs),
                &SWEEP_INTERVAL_RANGE,
                defaults.sweep_interval_secs,
            ),
            session_ttl_hours: bounded(
                "SESSION_TTL_HOURS",
                parse_or(&lookup, "SESSION_TTL_HOURS", defaults.session_ttl_hours),
                &SESSION_TTL_HOURS_RANGE,
                defaults.session_ttl_hours,
            ),
        }
    }
}

fn parse_or<T: FromStr + Copy + Debug>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{}={:?} is invalid, using default {:?}", key, raw, default);
            default
        }),
        None => default,
    }
}

fn bounded<T: PartialOrd + Copy + Debug>(key: &str, value: T, range: &RangeInclusive<T>, default: T) -> T {
    if range.contains(&value) {
        value
    } else {
        warn!("{}={:?} outside {:?}, using default {:?}", key, value, range, default);
        default
    }
}
