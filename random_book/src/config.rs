// config.rs - Defaults and the parsing of the parameter form

use std::time::Duration;

use crate::alphabet::Alphabet;
use crate::error::{BookError, Result};

// Startup defaults
pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 10;
pub const DEFAULT_INTERVAL_SECS: f64 = 0.6;
pub const MIN_TICK: Duration = Duration::from_millis(10);   // Floor for any re-arm
pub const MAX_DIMENSION: usize = 200;                         // Per side, rows and cols

pub const BASE_ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
pub const DEFAULT_EXTRA: &str = " ;";                         // Space and semicolon

pub const WINDOW_SIZE: [f32; 2] = [720.0, 520.0];

/// Raw contents of the four parameter fields, exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormInput {
    pub rows: String,
    pub cols: String,
    pub interval: String,
    pub extra: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS.to_string(),
            cols: DEFAULT_COLS.to_string(),
            interval: DEFAULT_INTERVAL_SECS.to_string(),
            extra: DEFAULT_EXTRA.to_string(),
        }
    }
}

/// Validated parameters used to (re)build the grid and arm the timer.
#[derive(Clone, Debug, PartialEq)]
pub struct BookConfig {
    pub rows: usize,
    pub cols: usize,
    pub interval: Duration,
    pub alphabet: Alphabet,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            interval: tick_duration(DEFAULT_INTERVAL_SECS),
            alphabet: Alphabet::with_extra(DEFAULT_EXTRA),
        }
    }
}

impl BookConfig {
    /// Strict parse used by Start: every numeric field must be positive.
    pub fn from_form(form: &FormInput) -> Result<Self> {
        let rows = parse_dimension("rows", &form.rows)?;
        let cols = parse_dimension("cols", &form.cols)?;
        let interval = parse_interval(&form.interval)?;

        Ok(Self {
            rows,
            cols,
            interval,
            alphabet: Alphabet::with_extra(&form.extra),
        })
    }

    /// Lenient parse used by Generate now: numbers are required but values
    /// below one are clamped to one, and the interval is not consulted.
    pub fn from_form_clamped(form: &FormInput) -> Result<Self> {
        let rows = parse_clamped_dimension("rows", &form.rows)?;
        let cols = parse_clamped_dimension("cols", &form.cols)?;

        Ok(Self {
            rows,
            cols,
            interval: interval_or_default(&form.interval),
            alphabet: Alphabet::with_extra(&form.extra),
        })
    }
}

/// What a running tick needs. Built leniently; bad input never stops the loop.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSettings {
    pub interval: Duration,
    pub alphabet: Alphabet,
}

impl TickSettings {
    pub fn from_form(form: &FormInput) -> Self {
        Self {
            interval: interval_or_default(&form.interval),
            alphabet: Alphabet::with_extra(&form.extra),
        }
    }
}

fn parse_count(field: &'static str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| BookError::InvalidDimension {
            field,
            value: raw.to_string(),
        })
}

/// A side length in `1..=MAX_DIMENSION`.
pub fn parse_dimension(field: &'static str, raw: &str) -> Result<usize> {
    let n = parse_count(field, raw)?;
    if n <= 0 {
        return Err(BookError::InvalidDimension {
            field,
            value: raw.to_string(),
        });
    }
    cap_dimension(field, raw, n)
}

fn parse_clamped_dimension(field: &'static str, raw: &str) -> Result<usize> {
    let n = parse_count(field, raw)?;
    cap_dimension(field, raw, n.max(1))
}

fn cap_dimension(field: &'static str, raw: &str, n: i64) -> Result<usize> {
    match usize::try_from(n) {
        Ok(n) if n <= MAX_DIMENSION => Ok(n),
        _ => Err(BookError::InvalidDimension {
            field,
            value: raw.to_string(),
        }),
    }
}

fn parse_seconds(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs > 0.0)
}

pub fn parse_interval(raw: &str) -> Result<Duration> {
    parse_seconds(raw)
        .map(tick_duration)
        .ok_or_else(|| BookError::InvalidInterval {
            value: raw.to_string(),
        })
}

/// Interval in effect for the next re-arm: unparsable or non-positive input
/// silently becomes the default.
pub fn interval_or_default(raw: &str) -> Duration {
    tick_duration(parse_seconds(raw).unwrap_or(DEFAULT_INTERVAL_SECS))
}

/// Whole milliseconds, never below `MIN_TICK`.
pub fn tick_duration(secs: f64) -> Duration {
    let ms = (secs * 1000.0) as u64;
    Duration::from_millis(ms).max(MIN_TICK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(rows: &str, cols: &str, interval: &str) -> FormInput {
        FormInput {
            rows: rows.into(),
            cols: cols.into(),
            interval: interval.into(),
            ..FormInput::default()
        }
    }

    #[test]
    fn default_form_parses_to_default_config() {
        let config = BookConfig::from_form(&FormInput::default()).unwrap();
        assert_eq!(config, BookConfig::default());
        assert_eq!(config.interval, Duration::from_millis(600));
    }

    #[test]
    fn zero_and_negative_dimensions_are_rejected() {
        for bad in ["0", "-3"] {
            let err = BookConfig::from_form(&form(bad, "5", "1")).unwrap_err();
            assert!(matches!(err, BookError::InvalidDimension { field: "rows", .. }));

            let err = BookConfig::from_form(&form("5", bad, "1")).unwrap_err();
            assert!(matches!(err, BookError::InvalidDimension { field: "cols", .. }));
        }
    }

    #[test]
    fn dimensions_above_the_cap_are_rejected() {
        let config = BookConfig::from_form(&form("200", "200", "1")).unwrap();
        assert_eq!((config.rows, config.cols), (MAX_DIMENSION, MAX_DIMENSION));

        let err = BookConfig::from_form(&form("201", "5", "1")).unwrap_err();
        assert!(matches!(err, BookError::InvalidDimension { field: "rows", .. }));

        let huge = "4294967296";
        let err = BookConfig::from_form(&form(huge, huge, "1")).unwrap_err();
        assert!(matches!(err, BookError::InvalidDimension { field: "rows", .. }));

        let err = BookConfig::from_form_clamped(&form("3", huge, "1")).unwrap_err();
        assert!(matches!(err, BookError::InvalidDimension { field: "cols", .. }));
    }

    #[test]
    fn non_numeric_dimensions_are_rejected() {
        assert!(BookConfig::from_form(&form("ten", "5", "1")).is_err());
        assert!(BookConfig::from_form(&form("2.5", "5", "1")).is_err());
        assert!(BookConfig::from_form(&form("", "5", "1")).is_err());
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let config = BookConfig::from_form(&form(" 3 ", "4\t", " 0.25")).unwrap();
        assert_eq!((config.rows, config.cols), (3, 4));
        assert_eq!(config.interval, Duration::from_millis(250));
    }

    #[test]
    fn bad_intervals_are_rejected_on_start() {
        for bad in ["0", "-1", "abc", "NaN", "inf", ""] {
            let err = BookConfig::from_form(&form("2", "2", bad)).unwrap_err();
            assert!(matches!(err, BookError::InvalidInterval { .. }), "{bad}");
        }
    }

    #[test]
    fn clamped_parse_raises_small_dimensions_to_one() {
        let config = BookConfig::from_form_clamped(&form("0", "-7", "nonsense")).unwrap();
        assert_eq!((config.rows, config.cols), (1, 1));
        assert_eq!(config.interval, Duration::from_millis(600));
        assert!(BookConfig::from_form_clamped(&form("x", "1", "1")).is_err());
    }

    #[test]
    fn lenient_interval_falls_back_to_default() {
        let default = Duration::from_millis(600);
        assert_eq!(interval_or_default("0"), default);
        assert_eq!(interval_or_default("-2.5"), default);
        assert_eq!(interval_or_default("fast"), default);
        assert_eq!(interval_or_default("1.5"), Duration::from_millis(1500));
    }

    #[test]
    fn tiny_intervals_hit_the_floor() {
        assert_eq!(tick_duration(0.001), MIN_TICK);
        assert_eq!(interval_or_default("0.0001"), MIN_TICK);
        assert_eq!(tick_duration(0.011), Duration::from_millis(11));
    }

    #[test]
    fn tick_settings_pick_up_extra_characters() {
        let mut input = FormInput::default();
        input.extra = "!".into();
        let settings = TickSettings::from_form(&input);
        assert!(settings.alphabet.contains('!'));
        assert!(!settings.alphabet.contains(';'));
    }
}
