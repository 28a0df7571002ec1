//! # Solar Calendar
//!
//! Gregorian calendar / Julian day conversion and low-precision sunrise, solar noon
//! and sunset times.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The crate has two halves:
//! - **Calendar**: dates (proleptic Gregorian, years -1000 to 3000) to Julian days and
//!   back, Julian centuries, day of week and day of year
//! - **Sun**: the NOAA low-precision solar series and a two-pass sunrise/sunset solver,
//!   accurate to about a minute for non-polar latitudes
//!
//! All computations are pure functions. Output times are always UTC.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): `DateTime` conversions for Julian days and sun events
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! ```toml
//! # Default: std + chrono
//! solar-calendar = "0.1"
//!
//! # Minimal no_std (pure numeric API)
//! solar-calendar = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Julian days
//! ```rust
//! use solar_calendar::{api, time::JulianDay};
//!
//! let jd = api::convert(2023, 6, 21, 17.5).unwrap();
//! assert_eq!(api::day_from_julian_day(jd.value()).unwrap(), (2023, 6, 21));
//! assert_eq!(JulianDay::J2000.day_of_week(), 6); // Saturday
//! ```
//!
//! ### Sunrise
//! ```rust
//! use solar_calendar::api;
//!
//! // San Francisco, 122.4194° west
//! let sunrise = api::get_sunrise(122.4194, 37.7749, 2023, 6, 21, 0.0).unwrap();
//! println!("Sunrise: {sunrise}");
//! ```
//!
//! ### Polar locations
//! ```rust
//! use solar_calendar::{sunrise, time::JulianDay, Horizon, SunriseResult};
//!
//! // Tromsø in December
//! let day = JulianDay::from_calendar(2024, 12, 21, 0.0).unwrap();
//! match sunrise::sun_events(day, 69.6492, -18.9553, Horizon::SunriseSunset).unwrap() {
//!     SunriseResult::AllNight { transit } => println!("Polar night, noon at {:?}", transit.to_calendar()),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! ## Conventions
//!
//! - **Longitude**: degrees west of Greenwich, -180 to +180 (east is negative)
//! - **Latitude**: degrees north, -90 to +90
//! - **Years**: astronomical numbering, year 0 = 1 BC
//!
//! ## References
//!
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd ed. Willmann-Bell.
//! - Fliegel, H. F.; Van Flandern, T. C. (1968). A machine algorithm for processing
//!   calendar dates. Communications of the ACM, 11(10), 657.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of known Julian day values in tests
)]

// Public API exports
pub use crate::error::{DateViolation, Error, Result};
pub use crate::time::{CalendarReckoning, JulianDay};
pub use crate::types::{
    CalendarDate, Horizon, PolarCondition, SunEvent, SunEventKind, SunriseResult,
};

// Core modules
pub mod error;
pub mod types;

// Algorithm modules
pub mod solar;
pub mod sunrise;

// Internal modules
mod math;

// Public modules
pub mod api;
pub mod time;
pub mod validate;
