//! Calendar and Julian day conversions.
//!
//! Forward conversion uses the Fliegel–Van Flandern day-number formula in integer
//! arithmetic; the inverse follows Meeus, "Astronomical Algorithms", chapter 7.
//! Dates are proleptic Gregorian unless [`CalendarReckoning::Historical`] is
//! requested.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::error::check_julian_day;
use crate::math::floor;
use crate::types::CalendarDate;
use crate::validate::validate;
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// Julian day of the J2000.0 epoch (2000-01-01 12:00:00 UTC).
pub const J2000: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Minutes per day.
pub(crate) const MINUTES_PER_DAY: f64 = 1_440.0;

/// Julian day of 1970-01-01 00:00:00 UTC.
#[cfg(feature = "chrono")]
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

#[cfg(feature = "chrono")]
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// First day number of the Gregorian calendar (1582-10-15).
const GREGORIAN_REFORM_JDN: f64 = 2_299_161.0;

/// How [`from_julian_day_with`] interprets day numbers before the Gregorian reform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalendarReckoning {
    /// Gregorian rules for every date. Exact inverse of [`to_julian_day`].
    #[default]
    ProlepticGregorian,
    /// Julian calendar before 1582-10-15, Gregorian from then on.
    Historical,
}

/// A continuous day count from noon UTC, 1 January 4713 BC (proleptic Julian).
///
/// The integer part counts days, the fraction is the offset from the preceding noon.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct JulianDay(f64);

impl JulianDay {
    /// The J2000.0 epoch.
    pub const J2000: Self = Self(J2000);

    /// Wraps a raw Julian day value without validation.
    #[must_use]
    pub const fn from_value(jd: f64) -> Self {
        Self(jd)
    }

    /// Creates a Julian day from a validated calendar date and fractional UTC hour.
    ///
    /// # Errors
    /// Returns `InvalidDate` for impossible dates, years outside -1000..=3000 or
    /// an hour outside [0, 24).
    ///
    /// # Example
    /// ```
    /// # use solar_calendar::time::JulianDay;
    /// let jd = JulianDay::from_calendar(2000, 1, 1, 12.0).unwrap();
    /// assert_eq!(jd, JulianDay::J2000);
    /// assert!(JulianDay::from_calendar(2023, 2, 30, 12.0).is_err());
    /// ```
    pub fn from_calendar(year: i32, month: u32, day: u32, hour: f64) -> Result<Self> {
        validate(year, month, day, hour)?;
        Ok(to_julian_day(year, month, day, hour))
    }

    /// Creates a Julian day from a timezone-aware chrono `DateTime`.
    ///
    /// The instant is converted to UTC first.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the UTC date lies outside the supported years.
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Result<Self> {
        let utc = datetime.with_timezone(&chrono::Utc);
        let seconds = f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9;
        let hour = f64::from(utc.hour()) + f64::from(utc.minute()) / 60.0 + seconds / 3600.0;
        Self::from_calendar(utc.year(), utc.month(), utc.day(), hour)
    }

    /// Creates a Julian day from a Julian century relative to J2000.0.
    #[must_use]
    pub fn from_julian_century(t: f64) -> Self {
        Self(julian_day_from_century(t))
    }

    /// Gets the raw Julian day value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Julian centuries since J2000.0.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        julian_century(self.0)
    }

    /// Converts back to a proleptic Gregorian calendar date.
    ///
    /// # Errors
    /// Returns `InvalidJulianDay` for non-finite values or values before JD 0.
    pub fn to_calendar(&self) -> Result<CalendarDate> {
        from_julian_day(*self)
    }

    /// Converts back to a calendar date using the given reckoning.
    ///
    /// # Errors
    /// Returns `InvalidJulianDay` for non-finite values or values before JD 0.
    pub fn to_calendar_with(&self, reckoning: CalendarReckoning) -> Result<CalendarDate> {
        from_julian_day_with(*self, reckoning)
    }

    /// Day of week, 0 = Sunday through 6 = Saturday.
    #[must_use]
    pub fn day_of_week(&self) -> u32 {
        day_of_week(self.0)
    }

    /// 0h UTC of the calendar day containing this instant.
    #[must_use]
    pub fn start_of_day(&self) -> Self {
        Self(floor(self.0 + 0.5) - 0.5)
    }

    /// Shifts the instant by a (possibly fractional, possibly negative) number of days.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }

    /// Converts to a chrono UTC timestamp with millisecond resolution.
    ///
    /// Returns `None` if the instant is not representable by chrono.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let millis = floor((self.0 - UNIX_EPOCH_JD) * MILLIS_PER_DAY + 0.5);
        if !millis.is_finite() {
            return None;
        }
        chrono::DateTime::from_timestamp_millis(millis as i64)
    }
}

impl From<JulianDay> for f64 {
    fn from(jd: JulianDay) -> Self {
        jd.0
    }
}

/// Converts a calendar date and fractional UTC hour to a Julian day.
///
/// No validation happens here; use [`JulianDay::from_calendar`] for untrusted input.
///
/// # Example
/// ```
/// # use solar_calendar::time::to_julian_day;
/// assert_eq!(to_julian_day(1970, 1, 1, 0.0).value(), 2_440_587.5);
/// ```
#[must_use]
pub fn to_julian_day(year: i32, month: u32, day: u32, hour: f64) -> JulianDay {
    let jdn = julian_day_number(year, month, day);
    JulianDay(jdn as f64 + hour / 24.0 - 0.5)
}

/// Integer day number of the Gregorian date at noon.
fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let year = i64::from(year);
    let month = i64::from(month);
    let day = i64::from(day);

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Converts a Julian day to a proleptic Gregorian date with fractional UTC hour.
///
/// # Errors
/// Returns `InvalidJulianDay` for non-finite values or values before JD 0.
pub fn from_julian_day(jd: JulianDay) -> Result<CalendarDate> {
    from_julian_day_with(jd, CalendarReckoning::ProlepticGregorian)
}

/// Converts a Julian day to a calendar date using the given reckoning.
///
/// The returned hour is always in [0, 24); a fraction that rounds up to a full
/// day rolls over to 0h of the next date.
///
/// # Errors
/// Returns `InvalidJulianDay` for non-finite values or values before JD 0.
///
/// # Example
/// ```
/// # use solar_calendar::time::{from_julian_day_with, CalendarReckoning, JulianDay};
/// let jd = JulianDay::from_value(2_299_159.5);
/// let date = from_julian_day_with(jd, CalendarReckoning::Historical).unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (1582, 10, 4));
/// ```
#[allow(clippy::cast_sign_loss)]
pub fn from_julian_day_with(jd: JulianDay, reckoning: CalendarReckoning) -> Result<CalendarDate> {
    check_julian_day(jd.0)?;

    let shifted = jd.0 + 0.5;
    let mut z = floor(shifted);
    let mut hour = (shifted - z) * 24.0;
    if hour >= 24.0 {
        z += 1.0;
        hour = 0.0;
    }

    let a = if reckoning == CalendarReckoning::Historical && z < GREGORIAN_REFORM_JDN {
        z
    } else {
        let alpha = floor((z - 1_867_216.25) / 36_524.25);
        z + 1.0 + alpha - floor(alpha / 4.0)
    };

    let b = a + 1524.0;
    let c = floor((b - 122.1) / 365.25);
    let d = floor(365.25 * c);
    let e = floor((b - d) / 30.6001);

    let day = b - d - floor(30.6001 * e);
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    Ok(CalendarDate::from_parts(
        year as i32,
        month as u32,
        day as u32,
        hour,
    ))
}

/// Day of week for a Julian day, 0 = Sunday through 6 = Saturday.
///
/// # Example
/// ```
/// # use solar_calendar::time::day_of_week;
/// assert_eq!(day_of_week(2_451_545.0), 6); // 2000-01-01 was a Saturday
/// ```
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn day_of_week(jd: f64) -> u32 {
    (floor(jd + 1.5) as i64).rem_euclid(7) as u32
}

/// Gregorian leap year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the month, or `None` for a month outside 1..=12.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Ordinal day within the year, 1-based, or `None` if the date does not exist.
///
/// # Example
/// ```
/// # use solar_calendar::time::day_of_year;
/// assert_eq!(day_of_year(2024, 3, 1), Some(61));
/// assert_eq!(day_of_year(2023, 2, 29), None);
/// ```
#[must_use]
pub const fn day_of_year(year: i32, month: u32, day: u32) -> Option<u32> {
    let Some(max) = days_in_month(year, month) else {
        return None;
    };
    if day == 0 || day > max {
        return None;
    }

    let k = if is_leap_year(year) { 1 } else { 2 };
    Some(275 * month / 9 + day - 30 - k * ((month + 9) / 12))
}

/// Julian centuries since J2000.0: `T = (JD - 2451545) / 36525`.
#[must_use]
pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Inverse of [`julian_century`].
#[must_use]
pub fn julian_day_from_century(t: f64) -> f64 {
    t * DAYS_PER_CENTURY + J2000
}
