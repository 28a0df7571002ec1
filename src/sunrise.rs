//! Sunrise, solar noon and sunset times.
//!
//! Each event is solved in exactly two passes: the first samples the sun at 0h UTC
//! of the requested day, the second re-samples at the instant the first pass
//! produced. Longitudes are positive west of Greenwich, as in the NOAA solar
//! calculator.
//!
//! # Example
//! ```
//! use solar_calendar::{sunrise, time::JulianDay, Horizon, SunriseResult};
//!
//! let day = JulianDay::from_calendar(2023, 6, 21, 0.0).unwrap();
//! let events = sunrise::sun_events(day, 37.7749, 122.4194, Horizon::SunriseSunset).unwrap();
//!
//! if let SunriseResult::RegularDay { sunrise, transit, sunset } = events {
//!     assert!(sunrise.utc_minutes() < transit.utc_minutes());
//!     assert!(transit.utc_minutes() < sunset.utc_minutes());
//! }
//! ```

use crate::error::{check_coordinates, check_julian_day, check_longitude};
use crate::math::{acos, cos, degrees_to_radians, radians_to_degrees, tan};
use crate::solar::{self, SolarPositionSample};
use crate::time::{JulianDay, MINUTES_PER_DAY};
use crate::types::{Horizon, PolarCondition, SunEvent, SunEventKind, SunriseResult};
use crate::{Error, Result};
use log::{debug, trace};

/// Upper bound on the days [`find_event`] inspects.
pub const MAX_SEARCH_DAYS: u32 = 366;

/// Minutes after 0h UTC of local noon at longitude 0 with no equation of time.
const NOON_MINUTES: f64 = 720.0;

/// Minutes of time per degree of longitude.
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Direction in which [`find_event`] scans for the nearest day with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    /// The requested day, then later days.
    Forward,
    /// The requested day, then earlier days.
    Backward,
}

/// Hour angle of sunrise in radians (positive).
///
/// # Errors
/// Returns `NoSunriseOrSunset` when the sun never crosses the zenith angle at
/// this latitude and declination, `NumericDomain` for a non-finite argument.
pub fn hour_angle_sunrise(latitude: f64, declination: f64, zenith: f64) -> Result<f64> {
    hour_angle(latitude, declination, zenith, SunEventKind::Sunrise)
}

/// Hour angle of sunset in radians (negative).
///
/// # Errors
/// See [`hour_angle_sunrise`].
pub fn hour_angle_sunset(latitude: f64, declination: f64, zenith: f64) -> Result<f64> {
    Ok(-hour_angle(latitude, declination, zenith, SunEventKind::Sunset)?)
}

fn hour_angle(latitude: f64, declination: f64, zenith: f64, event: SunEventKind) -> Result<f64> {
    let phi = degrees_to_radians(latitude);
    let delta = degrees_to_radians(declination);

    let argument =
        cos(degrees_to_radians(zenith)) / (cos(phi) * cos(delta)) - tan(phi) * tan(delta);

    if !argument.is_finite() {
        return Err(Error::numeric_domain("hour angle argument is not finite"));
    }
    if argument > 1.0 {
        return Err(Error::no_sunrise_or_sunset(event, PolarCondition::PolarNight));
    }
    if argument < -1.0 {
        return Err(Error::no_sunrise_or_sunset(event, PolarCondition::PolarDay));
    }

    Ok(acos(argument))
}

/// Solar noon pass: minutes after 0h UTC using the sun at century `t`.
fn noon_minutes(t: f64, longitude: f64) -> f64 {
    NOON_MINUTES + MINUTES_PER_DEGREE * longitude - solar::equation_of_time(t)
}

/// One pass: minutes after 0h UTC of the event using the sun at century `t`.
fn event_minutes(
    t: f64,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    kind: SunEventKind,
) -> Result<f64> {
    let sun = SolarPositionSample::at(t);
    let hour_angle = match kind {
        SunEventKind::SolarNoon => 0.0,
        SunEventKind::Sunrise => hour_angle_sunrise(latitude, sun.declination(), zenith)?,
        SunEventKind::Sunset => hour_angle_sunset(latitude, sun.declination(), zenith)?,
    };

    let delta = longitude - radians_to_degrees(hour_angle);
    Ok(NOON_MINUTES + MINUTES_PER_DEGREE * delta - sun.equation_of_time())
}

/// Runs both passes for the day starting at `day_start`.
fn solve(
    day_start: JulianDay,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    kind: SunEventKind,
) -> Result<f64> {
    let first = event_minutes(day_start.julian_century(), latitude, longitude, zenith, kind)?;
    trace!("{kind} pass 0: {first:.6} min after 0h UTC");

    let refined_at = day_start.add_days(first / MINUTES_PER_DAY);
    let second = event_minutes(refined_at.julian_century(), latitude, longitude, zenith, kind)?;
    trace!("{kind} pass 1: {second:.6} min after 0h UTC");

    Ok(second)
}

fn solve_event(
    day_start: JulianDay,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
    kind: SunEventKind,
) -> Result<SunEvent> {
    let minutes = solve(day_start, latitude, longitude, horizon.zenith_angle(), kind)?;
    Ok(SunEvent::new(kind, day_start, minutes))
}

/// Solar noon in minutes after 0h UTC of the day starting at century `t`.
#[must_use]
pub fn solar_noon_utc(t: f64, longitude: f64) -> f64 {
    let first = noon_minutes(t, longitude);
    trace!("solar noon pass 0: {first:.6} min after 0h UTC");

    let refined_at = JulianDay::from_julian_century(t).add_days(first / MINUTES_PER_DAY);
    let second = noon_minutes(refined_at.julian_century(), longitude);
    trace!("solar noon pass 1: {second:.6} min after 0h UTC");

    second
}

/// Sunrise in minutes after 0h UTC of the day starting at century `t`.
///
/// # Errors
/// Returns `NoSunriseOrSunset` during polar day or night.
pub fn sunrise_utc(t: f64, latitude: f64, longitude: f64, horizon: Horizon) -> Result<f64> {
    let day_start = JulianDay::from_julian_century(t);
    solve(
        day_start,
        latitude,
        longitude,
        horizon.zenith_angle(),
        SunEventKind::Sunrise,
    )
}

/// Sunset in minutes after 0h UTC of the day starting at century `t`.
///
/// # Errors
/// Returns `NoSunriseOrSunset` during polar day or night.
pub fn sunset_utc(t: f64, latitude: f64, longitude: f64, horizon: Horizon) -> Result<f64> {
    let day_start = JulianDay::from_julian_century(t);
    solve(
        day_start,
        latitude,
        longitude,
        horizon.zenith_angle(),
        SunEventKind::Sunset,
    )
}

/// Solar noon on the UTC day containing `jd`.
///
/// # Errors
/// Returns `InvalidLongitude` or `InvalidJulianDay` for bad input.
pub fn solar_noon(jd: JulianDay, longitude: f64) -> Result<SunEvent> {
    check_longitude(longitude)?;
    check_julian_day(jd.value())?;
    solve_event(
        jd.start_of_day(),
        0.0,
        longitude,
        Horizon::SunriseSunset,
        SunEventKind::SolarNoon,
    )
}

/// Sunrise on the UTC day containing `jd`.
///
/// # Errors
/// Returns `NoSunriseOrSunset` during polar day or night, coordinate or Julian
/// day errors for bad input.
pub fn sunrise(jd: JulianDay, latitude: f64, longitude: f64, horizon: Horizon) -> Result<SunEvent> {
    check_coordinates(latitude, longitude)?;
    check_julian_day(jd.value())?;
    solve_event(
        jd.start_of_day(),
        latitude,
        longitude,
        horizon,
        SunEventKind::Sunrise,
    )
}

/// Sunset on the UTC day containing `jd`.
///
/// # Errors
/// Returns `NoSunriseOrSunset` during polar day or night, coordinate or Julian
/// day errors for bad input.
pub fn sunset(jd: JulianDay, latitude: f64, longitude: f64, horizon: Horizon) -> Result<SunEvent> {
    check_coordinates(latitude, longitude)?;
    check_julian_day(jd.value())?;
    solve_event(
        jd.start_of_day(),
        latitude,
        longitude,
        horizon,
        SunEventKind::Sunset,
    )
}

/// Sunrise, solar noon and sunset for the UTC day containing `jd`.
///
/// Polar conditions are reported as [`SunriseResult::AllDay`] or
/// [`SunriseResult::AllNight`] rather than as errors.
///
/// # Errors
/// Returns coordinate or Julian day errors for bad input.
pub fn sun_events(
    jd: JulianDay,
    latitude: f64,
    longitude: f64,
    horizon: Horizon,
) -> Result<SunriseResult<SunEvent>> {
    check_coordinates(latitude, longitude)?;
    check_julian_day(jd.value())?;

    let day_start = jd.start_of_day();
    let transit = solve_event(
        day_start,
        latitude,
        longitude,
        horizon,
        SunEventKind::SolarNoon,
    )?;
    let sunrise = solve_event(
        day_start,
        latitude,
        longitude,
        horizon,
        SunEventKind::Sunrise,
    );
    let sunset = solve_event(day_start, latitude, longitude, horizon, SunEventKind::Sunset);

    match (sunrise, sunset) {
        (Ok(sunrise), Ok(sunset)) => Ok(SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        }),
        (Err(err), _) | (Ok(_), Err(err)) => match err {
            Error::NoSunriseOrSunset {
                condition: PolarCondition::PolarDay,
                ..
            } => Ok(SunriseResult::AllDay { transit }),
            Error::NoSunriseOrSunset {
                condition: PolarCondition::PolarNight,
                ..
            } => Ok(SunriseResult::AllNight { transit }),
            other => Err(other),
        },
    }
}

/// Finds the nearest day, starting with the one containing `jd`, on which `kind` occurs.
///
/// Scans at most [`MAX_SEARCH_DAYS`] days beyond the start day. Useful at polar
/// latitudes to find when the sun next rises or last set.
///
/// # Errors
/// Returns `NoSunriseOrSunset` if no day in the window has the event, or
/// coordinate or Julian day errors for bad input.
///
/// # Example
/// ```
/// use solar_calendar::{sunrise::{self, SearchDirection}, time::JulianDay, Horizon, SunEventKind};
///
/// // Tromsø, polar night
/// let day = JulianDay::from_calendar(2024, 12, 21, 0.0).unwrap();
/// let event = sunrise::find_event(
///     day, 69.6492, -18.9553,
///     SunEventKind::Sunrise, SearchDirection::Forward, Horizon::SunriseSunset,
/// ).unwrap();
/// let date = event.to_calendar().unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2025, 1, 15));
/// ```
pub fn find_event(
    jd: JulianDay,
    latitude: f64,
    longitude: f64,
    kind: SunEventKind,
    direction: SearchDirection,
    horizon: Horizon,
) -> Result<SunEvent> {
    check_coordinates(latitude, longitude)?;
    check_julian_day(jd.value())?;

    let start = jd.start_of_day();
    let step = match direction {
        SearchDirection::Forward => 1.0,
        SearchDirection::Backward => -1.0,
    };

    let mut condition = PolarCondition::PolarNight;
    for offset in 0..=MAX_SEARCH_DAYS {
        let day_start = start.add_days(step * f64::from(offset));
        match solve_event(day_start, latitude, longitude, horizon, kind) {
            Ok(event) => {
                debug!("found {kind} {offset} day(s) {direction:?} of JD {}", start.value());
                return Ok(event);
            }
            Err(Error::NoSunriseOrSunset { condition: c, .. }) => condition = c,
            Err(err) => return Err(err),
        }
    }

    Err(Error::no_sunrise_or_sunset(kind, condition))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTES_EPSILON: f64 = 1e-4;

    fn day(year: i32, month: u32, day: u32) -> JulianDay {
        JulianDay::from_calendar(year, month, day, 0.0).unwrap()
    }

    fn assert_minutes(event: &SunEvent, expected: f64) {
        assert!(
            (event.utc_minutes() - expected).abs() < MINUTES_EPSILON,
            "{:?}: expected {expected}, got {}",
            event.kind(),
            event.utc_minutes()
        );
    }

    #[test]
    fn test_hour_angle() {
        let equator = hour_angle_sunrise(0.0, 0.0, 90.833).unwrap();
        assert!((equator - 1.585_334_919_464_009).abs() < 1e-12);
        assert_eq!(hour_angle_sunset(0.0, 0.0, 90.833).unwrap(), -equator);
    }

    #[test]
    fn test_hour_angle_polar_conditions() {
        assert_eq!(
            hour_angle_sunrise(75.0, -23.44, 90.833),
            Err(Error::no_sunrise_or_sunset(
                SunEventKind::Sunrise,
                PolarCondition::PolarNight
            ))
        );
        assert_eq!(
            hour_angle_sunset(75.0, 23.44, 90.833),
            Err(Error::no_sunrise_or_sunset(
                SunEventKind::Sunset,
                PolarCondition::PolarDay
            ))
        );
        assert!(matches!(
            hour_angle_sunrise(45.0, f64::NAN, 90.833),
            Err(Error::NumericDomain { .. })
        ));
    }

    #[test]
    fn test_san_francisco_summer_solstice() {
        let jd = day(2023, 6, 21);
        let sunrise = sunrise(jd, 37.7749, 122.4194, Horizon::SunriseSunset).unwrap();
        let noon = solar_noon(jd, 122.4194).unwrap();
        let sunset = sunset(jd, 37.7749, 122.4194, Horizon::SunriseSunset).unwrap();

        assert_minutes(&sunrise, 768.017_123);
        assert_minutes(&noon, 1211.509_610);
        assert_minutes(&sunset, 1654.998_437);

        // Sunset falls on the next UTC day.
        let date = sunset.to_calendar().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2023, 6, 22));
        assert!((date.hour() - 3.583_307).abs() < 1e-5);
    }

    #[test]
    fn test_equator_at_j2000() {
        let jd = day(2000, 1, 1);
        let events = sun_events(jd, 0.0, 0.0, Horizon::SunriseSunset).unwrap();
        assert_minutes(events.sunrise().unwrap(), 359.561_479);
        assert_minutes(events.transit(), 723.302_265);
        assert_minutes(events.sunset().unwrap(), 1087.041_658);
    }

    #[test]
    fn test_any_instant_of_the_day_gives_same_result() {
        let midnight = sunrise(day(2024, 3, 20), 51.5074, 0.1278, Horizon::SunriseSunset).unwrap();
        let afternoon = sunrise(
            JulianDay::from_calendar(2024, 3, 20, 17.25).unwrap(),
            51.5074,
            0.1278,
            Horizon::SunriseSunset,
        )
        .unwrap();
        assert_eq!(midnight, afternoon);
        assert_minutes(&midnight, 362.275_255);
    }

    #[test]
    fn test_sydney_sunrise_on_previous_utc_day() {
        let event = sunrise(day(2024, 12, 21), -33.8688, -151.2093, Horizon::SunriseSunset).unwrap();
        assert_minutes(&event, -319.121_060);

        let date = event.to_calendar().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 12, 20));
        assert!((date.hour() - 18.681_316).abs() < 1e-5);
    }

    #[test]
    fn test_civil_twilight_starts_before_sunrise() {
        let jd = day(2023, 6, 21);
        let dawn = sunrise(jd, 37.7749, 122.4194, Horizon::CivilTwilight).unwrap();
        assert_minutes(&dawn, 736.665_963);
        let sunrise = sunrise(jd, 37.7749, 122.4194, Horizon::SunriseSunset).unwrap();
        assert!(dawn.utc_minutes() < sunrise.utc_minutes());
    }

    #[test]
    fn test_polar_night() {
        let jd = day(2024, 12, 21);
        assert_eq!(
            sunrise(jd, 69.6492, -18.9553, Horizon::SunriseSunset),
            Err(Error::no_sunrise_or_sunset(
                SunEventKind::Sunrise,
                PolarCondition::PolarNight
            ))
        );

        let events = sun_events(jd, 69.6492, -18.9553, Horizon::SunriseSunset).unwrap();
        assert!(events.is_polar_night());
        assert_minutes(events.transit(), 642.474_005);
    }

    #[test]
    fn test_polar_day() {
        let events = sun_events(day(2024, 6, 21), 69.6492, -18.9553, Horizon::SunriseSunset).unwrap();
        assert!(events.is_polar_day());
        assert_eq!(events.sunrise(), None);
    }

    #[test]
    fn test_century_functions_match_event_functions() {
        let jd = day(2023, 6, 21);
        let t = jd.julian_century();

        let noon = solar_noon(jd, 122.4194).unwrap();
        assert!((solar_noon_utc(t, 122.4194) - noon.utc_minutes()).abs() < 1e-6);

        let rise = sunrise_utc(t, 37.7749, 122.4194, Horizon::SunriseSunset).unwrap();
        assert!((rise - 768.017_123).abs() < MINUTES_EPSILON);

        let set = sunset_utc(t, 37.7749, 122.4194, Horizon::SunriseSunset).unwrap();
        assert!((set - 1654.998_437).abs() < MINUTES_EPSILON);
    }

    #[test]
    fn test_solar_noon_longitude_is_positive_west() {
        let jd = day(2024, 3, 20);
        let t = jd.julian_century();

        // 720 + 4·longitude − eot, refined once at the first-pass instant.
        let first = 720.0 + 4.0 * 30.0 - solar::equation_of_time(t);
        let refined = jd.add_days(first / 1440.0).julian_century();
        let expected = 720.0 + 4.0 * 30.0 - solar::equation_of_time(refined);

        let noon = solar_noon_utc(t, 30.0);
        assert!((noon - expected).abs() < 1e-9);
        assert!((noon - 847.264_406).abs() < MINUTES_EPSILON);

        // 30° west is two hours behind Greenwich.
        let greenwich = solar_noon_utc(t, 0.0);
        assert!((greenwich - 727.289_166).abs() < MINUTES_EPSILON);
        assert!((noon - greenwich - 120.0).abs() < 0.01);
    }

    #[test]
    fn test_sunrise_formula_uses_longitude_minus_hour_angle() {
        let jd = day(2024, 3, 20);
        let t = jd.julian_century();
        let sun = SolarPositionSample::at(t);
        let hour_angle = hour_angle_sunrise(40.0, sun.declination(), 90.833).unwrap();
        let first =
            720.0 + 4.0 * (75.0 - radians_to_degrees(hour_angle)) - sun.equation_of_time();

        let sun = SolarPositionSample::at(jd.add_days(first / 1440.0).julian_century());
        let hour_angle = hour_angle_sunrise(40.0, sun.declination(), 90.833).unwrap();
        let expected =
            720.0 + 4.0 * (75.0 - radians_to_degrees(hour_angle)) - sun.equation_of_time();

        let rise = sunrise_utc(t, 40.0, 75.0, Horizon::SunriseSunset).unwrap();
        assert!((rise - expected).abs() < 1e-9);
    }

    #[test]
    fn test_find_event_forward_and_backward() {
        let jd = day(2024, 12, 21);
        let next = find_event(
            jd,
            69.6492,
            -18.9553,
            SunEventKind::Sunrise,
            SearchDirection::Forward,
            Horizon::SunriseSunset,
        )
        .unwrap();
        let date = next.to_calendar().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 1, 15));
        assert!((date.hour() - 10.409_396).abs() < 1e-4);

        let previous = find_event(
            jd,
            69.6492,
            -18.9553,
            SunEventKind::Sunrise,
            SearchDirection::Backward,
            Horizon::SunriseSunset,
        )
        .unwrap();
        let date = previous.to_calendar().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 11, 26));
        assert!((date.hour() - 10.095_592).abs() < 1e-4);
    }

    #[test]
    fn test_find_event_returns_same_day_when_available() {
        let jd = day(2023, 6, 21);
        let found = find_event(
            jd,
            37.7749,
            122.4194,
            SunEventKind::Sunset,
            SearchDirection::Backward,
            Horizon::SunriseSunset,
        )
        .unwrap();
        assert_eq!(
            found,
            sunset(jd, 37.7749, 122.4194, Horizon::SunriseSunset).unwrap()
        );
    }

    #[test]
    fn test_find_event_exhausts_window_at_pole() {
        // The sun never dips 18° below the horizon at the north pole.
        let result = find_event(
            day(2024, 1, 1),
            90.0,
            0.0,
            SunEventKind::Sunset,
            SearchDirection::Forward,
            Horizon::AstronomicalTwilight,
        );
        assert!(matches!(
            result,
            Err(Error::NoSunriseOrSunset {
                event: SunEventKind::Sunset,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_input() {
        let jd = day(2024, 1, 1);
        assert_eq!(
            sunrise(jd, 91.0, 0.0, Horizon::SunriseSunset),
            Err(Error::invalid_latitude(91.0))
        );
        assert_eq!(
            sunset(jd, 0.0, 181.0, Horizon::SunriseSunset),
            Err(Error::invalid_longitude(181.0))
        );
        assert_eq!(
            solar_noon(JulianDay::from_value(-1.0), 0.0),
            Err(Error::invalid_julian_day(-1.0))
        );
    }
}
