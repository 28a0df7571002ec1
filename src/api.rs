//! Flat entry points with plain numeric arguments.
//!
//! These mirror the operations a transport layer exposes: every function takes
//! and returns primitives or crate types, validates its input and logs the call
//! at `debug` level.

use crate::error::check_coordinates;
use crate::sunrise::{self, sun_events};
use crate::time::{self, CalendarReckoning, JulianDay};
use crate::types::{CalendarDate, Horizon, SunEvent, SunriseResult};
use crate::validate::validate;
use crate::Result;
use log::debug;

/// Converts a calendar date and fractional UTC hour to a Julian day.
///
/// # Errors
/// Returns `InvalidDate` for impossible dates, unsupported years or hours outside [0, 24).
///
/// # Example
/// ```
/// # use solar_calendar::api::convert;
/// assert_eq!(convert(2000, 1, 1, 12.0).unwrap().value(), 2_451_545.0);
/// assert!(convert(2023, 2, 30, 12.0).is_err());
/// ```
pub fn convert(year: i32, month: u32, day: u32, hour: f64) -> Result<JulianDay> {
    let result = JulianDay::from_calendar(year, month, day, hour);
    debug!("convert {year}-{month:02}-{day:02} {hour}h -> {result:?}");
    result
}

/// Julian centuries since J2000.0 for a Julian day.
#[must_use]
pub fn time_julian_century(jd: f64) -> f64 {
    time::julian_century(jd)
}

/// Julian day for a Julian century since J2000.0.
#[must_use]
pub fn julian_day_from_julian_century(t: f64) -> f64 {
    time::julian_day_from_century(t)
}

/// Calendar date (year, month, day) of a Julian day.
///
/// Days before 1582-10-15 are read in the Julian calendar, so JD 2299159.5 is
/// 1582-10-04 and the following day is 1582-10-15.
///
/// # Errors
/// Returns `InvalidJulianDay` for non-finite values or values before JD 0.
pub fn day_from_julian_day(jd: f64) -> Result<(i32, u32, u32)> {
    let date = JulianDay::from_value(jd).to_calendar_with(CalendarReckoning::Historical)?;
    debug!("day_from_julian_day {jd} -> {date}");
    Ok((date.year(), date.month(), date.day()))
}

/// Day of week of a Julian day, 0 = Sunday through 6 = Saturday.
#[must_use]
pub fn day_of_week(jd: f64) -> u32 {
    time::day_of_week(jd)
}

/// Sunrise for the UTC day `(year, month, day)` at a longitude given in degrees west.
///
/// The full date and hour are validated; the hour does not otherwise affect the
/// result. The returned date carries the fractional UTC hour of sunrise and may
/// be the previous or next calendar day.
///
/// # Errors
/// Returns `InvalidDate`, `InvalidLatitude`, `InvalidLongitude`, or
/// `NoSunriseOrSunset` during polar day or night.
///
/// # Example
/// ```
/// # use solar_calendar::api::get_sunrise;
/// // London, March equinox
/// let sunrise = get_sunrise(0.1278, 51.5074, 2024, 3, 20, 12.0).unwrap();
/// assert_eq!((sunrise.year(), sunrise.month(), sunrise.day()), (2024, 3, 20));
/// assert!((sunrise.hour() - 6.04).abs() < 0.01);
/// ```
pub fn get_sunrise(
    longitude: f64,
    latitude: f64,
    year: i32,
    month: u32,
    day: u32,
    hour: f64,
) -> Result<CalendarDate> {
    validate(year, month, day, hour)?;
    check_coordinates(latitude, longitude)?;

    let day_start = time::to_julian_day(year, month, day, 0.0);
    let result = sunrise::sunrise(day_start, latitude, longitude, Horizon::SunriseSunset)
        .and_then(|event| event.to_calendar());
    debug!(
        "get_sunrise lat={latitude} lon={longitude} {year}-{month:02}-{day:02} -> {result:?}"
    );
    result
}

/// Sunrise, solar noon and sunset for the UTC day `(year, month, day)`.
///
/// Polar conditions come back as [`SunriseResult::AllDay`] or [`SunriseResult::AllNight`].
///
/// # Errors
/// Returns `InvalidDate`, `InvalidLatitude` or `InvalidLongitude` for bad input.
pub fn get_sun_times(
    longitude: f64,
    latitude: f64,
    year: i32,
    month: u32,
    day: u32,
    hour: f64,
    horizon: Horizon,
) -> Result<SunriseResult<SunEvent>> {
    validate(year, month, day, hour)?;

    let day_start = time::to_julian_day(year, month, day, 0.0);
    let result = sun_events(day_start, latitude, longitude, horizon);
    debug!(
        "get_sun_times lat={latitude} lon={longitude} {year}-{month:02}-{day:02} {horizon:?} -> {result:?}"
    );
    result
}
