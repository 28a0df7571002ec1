//! Events that fall on the neighbouring UTC day.

use solar_calendar::{api, sunrise, Horizon, JulianDay, SunEventKind};

#[test]
fn test_sydney_sunrise_is_previous_utc_day() {
    // Sydney sunrise at 05:41 AEDT on 2024-12-21 is 18:41 UTC on 2024-12-20.
    let date = api::get_sunrise(-151.2093, -33.8688, 2024, 12, 21, 0.0).unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2024, 12, 20));
    assert!((date.hour() - 18.681_316).abs() < 1e-5);
}

#[test]
fn test_san_francisco_sunset_is_next_utc_day() {
    let jd = JulianDay::from_calendar(2023, 6, 21, 0.0).unwrap();
    let sunset = sunrise::sunset(jd, 37.7749, 122.4194, Horizon::SunriseSunset).unwrap();

    assert!(sunset.utc_minutes() > 1440.0);
    let (offset, minutes) = sunset.day_and_minutes();
    assert_eq!(offset, 1);
    assert!((minutes - 214.998_437).abs() < 1e-4);

    let date = sunset.to_calendar().unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2023, 6, 22));
    assert!((date.hour() - 3.583_307).abs() < 1e-5);
}

#[test]
fn test_absolute_instant_matches_minutes() {
    let jd = JulianDay::from_calendar(2024, 12, 21, 0.0).unwrap();
    let event = sunrise::sunrise(jd, -33.8688, -151.2093, Horizon::SunriseSunset).unwrap();

    let expected = jd.value() + event.utc_minutes() / 1440.0;
    assert!((event.julian_day().value() - expected).abs() < 1e-12);
    assert_eq!(event.kind(), SunEventKind::Sunrise);
}

#[test]
fn test_hour_always_in_range_around_the_globe() {
    let months = [1, 3, 6, 9, 12];
    for longitude in (-180..=180).step_by(15) {
        for latitude in (-60..=60).step_by(20) {
            for month in months {
                let result = api::get_sunrise(
                    f64::from(longitude),
                    f64::from(latitude),
                    2024,
                    month,
                    15,
                    12.0,
                );
                let date = result.unwrap();
                assert!(
                    (0.0..24.0).contains(&date.hour()),
                    "lon={longitude} lat={latitude} month={month}: {date}"
                );
                // Sunrise lands on the requested day or one of its neighbours.
                assert_eq!(date.month(), month);
                assert!((14..=16).contains(&date.day()));
            }
        }
    }
}

#[test]
fn test_sunrise_precedes_noon_precedes_sunset() {
    for (latitude, longitude) in [
        (37.7749, 122.4194),
        (51.5074, 0.1278),
        (-33.8688, -151.2093),
        (-0.1807, 78.4678),
        (64.1466, 21.9426),
    ] {
        for month in 1..=12 {
            let times = api::get_sun_times(
                longitude,
                latitude,
                2024,
                month,
                1,
                0.0,
                Horizon::SunriseSunset,
            )
            .unwrap();
            let rise = times.sunrise().unwrap().utc_minutes();
            let noon = times.transit().utc_minutes();
            let set = times.sunset().unwrap().utc_minutes();
            assert!(rise < noon && noon < set, "{latitude},{longitude} {month}: {rise} {noon} {set}");
        }
    }
}
