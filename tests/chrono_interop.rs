//! `chrono` conversions for Julian days and sun events.
#![cfg(feature = "chrono")]

use chrono::{DateTime, FixedOffset, TimeZone, Timelike, Utc};
use solar_calendar::{sunrise, Horizon, JulianDay, SunriseResult};

#[test]
fn test_datetime_round_trip() {
    let datetime = Utc.with_ymd_and_hms(2023, 6, 21, 17, 30, 0).unwrap();
    let jd = JulianDay::from_datetime(&datetime).unwrap();
    assert!((jd.value() - 2_460_117.229_166_666_5).abs() < 1e-8);
    assert_eq!(jd.to_datetime(), Some(datetime));
}

#[test]
fn test_timezone_is_normalized_to_utc() {
    let local = "2024-12-21T05:00:00+11:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let utc = Utc.with_ymd_and_hms(2024, 12, 20, 18, 0, 0).unwrap();

    assert_eq!(
        JulianDay::from_datetime(&local).unwrap(),
        JulianDay::from_datetime(&utc).unwrap()
    );
}

#[test]
fn test_datetime_outside_supported_years_is_rejected() {
    let far_future = Utc.with_ymd_and_hms(3001, 1, 1, 0, 0, 0).unwrap();
    assert!(JulianDay::from_datetime(&far_future).is_err());
}

#[test]
fn test_sun_events_as_datetimes() {
    // Sun events for the UTC day containing a local timestamp.
    let local = "2023-06-21T09:00:00-07:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let jd = JulianDay::from_datetime(&local).unwrap();

    let SunriseResult::RegularDay {
        sunrise,
        transit,
        sunset,
    } = sunrise::sun_events(jd, 37.7749, 122.4194, Horizon::SunriseSunset).unwrap()
    else {
        panic!("expected a regular day");
    };

    let sunrise = sunrise.to_datetime().unwrap();
    let transit = transit.to_datetime().unwrap();
    let sunset = sunset.to_datetime().unwrap();

    assert!(sunrise < transit && transit < sunset);
    assert_eq!((sunrise.hour(), sunrise.minute()), (12, 48));
    assert_eq!((transit.hour(), transit.minute()), (20, 11));
    assert_eq!(sunset.date_naive().to_string(), "2023-06-22");
    assert_eq!((sunset.hour(), sunset.minute()), (3, 34));
}
