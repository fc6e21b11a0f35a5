//! Instants, intervals and sample time tags.

use core::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::error::ValueError;

/// Rendered in place of a missing interval start.
pub const MIN_INSTANT: &str = "0000-00-00T00:00:00Z";

/// Rendered in place of a missing interval end.
pub const MAX_INSTANT: &str = "9999-12-31T24:00:00Z";

/// A point in time.
///
/// Date-times are converted to UTC and rendered in RFC 3339 form with a `Z`
/// suffix. ISO 8601 strings are validated and then kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instant {
    /// A UTC date-time.
    DateTime(DateTime<Utc>),
    /// A validated ISO 8601 string.
    Iso(String),
}

impl Instant {
    /// Validates an ISO 8601 instant.
    ///
    /// Accepts RFC 3339 date-times, date-times without an offset, plain
    /// dates, and the open-interval sentinels.
    ///
    /// # Errors
    ///
    /// [`ValueError::Invalid`] if `text` is not an ISO 8601 instant.
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        let valid = text == MIN_INSTANT
            || text == MAX_INSTANT
            || DateTime::parse_from_rfc3339(text).is_ok()
            || NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
            || NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok();
        if valid {
            Ok(Instant::Iso(text.to_owned()))
        } else {
            Err(ValueError::Invalid(format!(
                "`{text}` is not an ISO 8601 instant"
            )))
        }
    }

    /// The rendered form.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Instant::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            Instant::Iso(text) => text.clone(),
        }
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(dt: DateTime<Tz>) -> Self {
        Instant::DateTime(dt.with_timezone(&Utc))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A time interval; either bound may be open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeInterval {
    /// Start, or open.
    pub start: Option<Instant>,
    /// End, or open.
    pub end: Option<Instant>,
}

impl TimeInterval {
    /// An interval between two instants.
    #[must_use]
    pub fn new(start: impl Into<Instant>, end: impl Into<Instant>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    /// The interval covering all time.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Parses `start/end`.
    ///
    /// # Errors
    ///
    /// [`ValueError::Invalid`] without exactly one `/` separator or with an
    /// invalid bound.
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        let (start, end) = text.split_once('/').ok_or_else(|| {
            ValueError::Invalid(format!("`{text}` is not an ISO 8601 interval"))
        })?;
        if end.contains('/') {
            return Err(ValueError::Invalid(format!(
                "`{text}` is not an ISO 8601 interval"
            )));
        }
        Ok(Self {
            start: Some(Instant::parse(start)?),
            end: Some(Instant::parse(end)?),
        })
    }

    /// The rendered `start/end` form.
    #[must_use]
    pub fn render(&self) -> String {
        let start = self
            .start
            .as_ref()
            .map_or_else(|| MIN_INSTANT.to_owned(), Instant::render);
        let end = self
            .end
            .as_ref()
            .map_or_else(|| MAX_INSTANT.to_owned(), Instant::render);
        format!("{start}/{end}")
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// The time of one sample.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeTag {
    /// An absolute instant.
    At(Instant),
    /// Seconds since the property's epoch.
    Seconds(f64),
}

impl From<Instant> for TimeTag {
    fn from(instant: Instant) -> Self {
        TimeTag::At(instant)
    }
}

impl From<f64> for TimeTag {
    fn from(seconds: f64) -> Self {
        TimeTag::Seconds(seconds)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn date_times_render_in_utc() {
        let dt = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2019, 6, 11, 13, 0, 0)
            .unwrap();
        assert_eq!(Instant::from(dt).render(), "2019-06-11T12:00:00Z");
    }

    #[test]
    fn fractional_seconds_are_kept() {
        let dt = Utc.with_ymd_and_hms(2012, 3, 15, 10, 0, 0).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(Instant::from(dt).render(), "2012-03-15T10:00:00.250Z");
    }

    #[test]
    fn iso_strings_are_kept_verbatim() {
        let text = "2019-06-11T12:26:58.000000Z";
        assert_eq!(Instant::parse(text).unwrap().render(), text);
        assert!(Instant::parse("2019-01-01").is_ok());
        assert!(Instant::parse("2019/01/01").is_err());
    }

    #[test]
    fn open_bounds_use_sentinels() {
        assert_eq!(
            TimeInterval::unbounded().render(),
            "0000-00-00T00:00:00Z/9999-12-31T24:00:00Z"
        );
    }

    #[test]
    fn intervals_parse_both_bounds() {
        let interval =
            TimeInterval::parse("2012-03-15T10:00:00Z/2012-03-16T10:00:00Z").unwrap();
        assert_eq!(
            interval.to_string(),
            "2012-03-15T10:00:00Z/2012-03-16T10:00:00Z"
        );
        assert!(TimeInterval::parse("2012-03-15T10:00:00Z").is_err());
    }
}
