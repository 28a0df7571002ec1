//! Sunrise, solar noon and sunset report for a handful of cities, with twilight
//! and the next sunrise for locations in polar night.

use chrono::{DateTime, Utc};
use solar_calendar::sunrise::{self, SearchDirection};
use solar_calendar::{Horizon, JulianDay, SunEvent, SunEventKind, SunriseResult};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Tromsø, Norway (Arctic)",
            latitude: 69.6492,
            longitude: -18.9553,
        },
        City {
            name: "London, United Kingdom",
            latitude: 51.5074,
            longitude: 0.1278,
        },
        City {
            name: "Quito, Ecuador",
            latitude: -0.1807,
            longitude: 78.4678,
        },
        City {
            name: "Sydney, Australia",
            latitude: -33.8688,
            longitude: -151.2093,
        },
    ];

    let date = "2024-12-21T00:00:00Z".parse::<DateTime<Utc>>()?;
    let day = JulianDay::from_datetime(&date)?;

    for city in &cities {
        println!("=== {} ===", city.name);
        println!(
            "Coordinates: {:.4}°N, {:.4}°W",
            city.latitude, city.longitude
        );
        println!("Date: {} (JD {:.1})", date.date_naive(), day.value());
        println!();

        for (label, horizon) in [
            ("Sunrise/Sunset", Horizon::SunriseSunset),
            ("Civil Twilight", Horizon::CivilTwilight),
            ("Nautical Twilight", Horizon::NauticalTwilight),
            ("Astronomical Twilight", Horizon::AstronomicalTwilight),
        ] {
            let result = sunrise::sun_events(day, city.latitude, city.longitude, horizon)?;
            print_result(label, &result);
        }

        let events = sunrise::sun_events(
            day,
            city.latitude,
            city.longitude,
            Horizon::SunriseSunset,
        )?;
        if events.is_polar_night() {
            let next = sunrise::find_event(
                day,
                city.latitude,
                city.longitude,
                SunEventKind::Sunrise,
                SearchDirection::Forward,
                Horizon::SunriseSunset,
            )?;
            println!("  Next sunrise: {}", format_event(&next));
        }
        println!();
    }

    Ok(())
}

fn print_result(label: &str, result: &SunriseResult<SunEvent>) {
    match result {
        SunriseResult::RegularDay {
            sunrise,
            transit,
            sunset,
        } => {
            println!("{label}:");
            println!("  Start: {}", format_event(sunrise));
            println!("  Noon:  {}", format_event(transit));
            println!("  End:   {}", format_event(sunset));
        }
        SunriseResult::AllDay { transit } => {
            println!("{label}: sun stays above (noon {})", format_event(transit));
        }
        SunriseResult::AllNight { transit } => {
            println!("{label}: sun stays below (noon {})", format_event(transit));
        }
    }
}

fn format_event(event: &SunEvent) -> String {
    event.to_datetime().map_or_else(
        || format!("{:.1} min", event.utc_minutes()),
        |datetime| datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}
