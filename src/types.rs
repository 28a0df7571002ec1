//! Core data types: calendar dates, sun events and horizon definitions.

use crate::math::floor;
use crate::time::{self, JulianDay};
use crate::validate::validate;
use crate::{Error, Result};
use core::fmt;

/// A proleptic Gregorian calendar date with a fractional UTC hour.
///
/// Years use astronomical numbering: year 0 is 1 BC, year -1 is 2 BC, and so on.
///
/// # Example
/// ```
/// # use solar_calendar::CalendarDate;
/// let date = CalendarDate::new(2024, 2, 29, 6.5).unwrap();
/// assert!((date.julian_day().value() - 2_460_369.770_833).abs() < 1e-6);
/// assert!(CalendarDate::new(2023, 2, 29, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
    hour: f64,
}

impl CalendarDate {
    /// Creates a validated calendar date.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the date is impossible, the year lies outside
    /// -1000..=3000 or the hour is outside [0, 24).
    pub fn new(year: i32, month: u32, day: u32, hour: f64) -> Result<Self> {
        validate(year, month, day, hour)?;
        Ok(Self::from_parts(year, month, day, hour))
    }

    /// Builds a date from components already known to be consistent.
    pub(crate) const fn from_parts(year: i32, month: u32, day: u32, hour: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Astronomical year (0 = 1 BC).
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1 to 12.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, 1 to 31.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Fractional hour of day in UTC, [0, 24).
    #[must_use]
    pub const fn hour(&self) -> f64 {
        self.hour
    }

    /// Julian day of this instant.
    #[must_use]
    pub fn julian_day(&self) -> JulianDay {
        time::to_julian_day(self.year, self.month, self.day, self.hour)
    }

    /// Ordinal day within the year, 1-based.
    ///
    /// `None` for a Julian-calendar leap day that has no Gregorian counterpart,
    /// such as 1500-02-29 from [`CalendarReckoning::Historical`](crate::CalendarReckoning::Historical).
    #[must_use]
    pub const fn day_of_year(&self) -> Option<u32> {
        time::day_of_year(self.year, self.month, self.day)
    }

    /// Day of week, 0 = Sunday through 6 = Saturday.
    #[must_use]
    pub fn day_of_week(&self) -> u32 {
        self.julian_day().day_of_week()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:09.6}h UTC",
            self.year, self.month, self.day, self.hour
        )
    }
}

/// The solar events the solver computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SunEventKind {
    /// Sun crosses the local meridian.
    SolarNoon,
    /// Upper limb of the sun appears on the horizon.
    Sunrise,
    /// Upper limb of the sun disappears below the horizon.
    Sunset,
}

impl fmt::Display for SunEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SolarNoon => "solar noon",
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
        })
    }
}

/// Why a sunrise or sunset does not exist on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    /// The sun stays above the horizon all day (midnight sun).
    PolarDay,
    /// The sun stays below the horizon all day.
    PolarNight,
}

impl fmt::Display for PolarCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PolarDay => "polar day (sun stays above the horizon)",
            Self::PolarNight => "polar night (sun stays below the horizon)",
        })
    }
}

/// A computed solar event.
///
/// `utc_minutes` counts minutes from 0h UTC of the day the event was requested
/// for. It can be negative (the event happens on the previous UTC day) or
/// 1440 and more (the following UTC day); `julian_day` is always the absolute
/// instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunEvent {
    kind: SunEventKind,
    utc_minutes: f64,
    julian_day: JulianDay,
}

impl SunEvent {
    pub(crate) fn new(kind: SunEventKind, day_start: JulianDay, utc_minutes: f64) -> Self {
        Self {
            kind,
            utc_minutes,
            julian_day: day_start.add_days(utc_minutes / time::MINUTES_PER_DAY),
        }
    }

    /// Which event this is.
    #[must_use]
    pub const fn kind(&self) -> SunEventKind {
        self.kind
    }

    /// Minutes after 0h UTC of the requested day (may lie outside [0, 1440)).
    #[must_use]
    pub const fn utc_minutes(&self) -> f64 {
        self.utc_minutes
    }

    /// Absolute instant of the event.
    #[must_use]
    pub const fn julian_day(&self) -> JulianDay {
        self.julian_day
    }

    /// Splits the raw minutes into a whole-day offset and minutes in [0, 1440).
    ///
    /// # Example
    /// ```
    /// # use solar_calendar::{sunrise, time::JulianDay, Horizon};
    /// let day = JulianDay::from_calendar(2024, 12, 21, 0.0).unwrap();
    /// // Sydney: sunrise happens on the previous UTC day.
    /// let event = sunrise::sunrise(day, -33.8688, -151.2093, Horizon::SunriseSunset).unwrap();
    /// let (offset, minutes) = event.day_and_minutes();
    /// assert_eq!(offset, -1);
    /// assert!((0.0..1440.0).contains(&minutes));
    /// ```
    #[must_use]
    pub fn day_and_minutes(&self) -> (i32, f64) {
        let minutes = self.utc_minutes;
        if !minutes.is_finite() {
            return (0, minutes);
        }

        let mut offset = floor(minutes / time::MINUTES_PER_DAY);
        let mut in_day = minutes - offset * time::MINUTES_PER_DAY;

        if in_day < 0.0 {
            in_day += time::MINUTES_PER_DAY;
            offset -= 1.0;
        } else if in_day >= time::MINUTES_PER_DAY {
            in_day -= time::MINUTES_PER_DAY;
            offset += 1.0;
        }

        (offset as i32, in_day)
    }

    /// Calendar date and fractional UTC hour of the event.
    ///
    /// # Errors
    /// Returns `InvalidJulianDay` only for events before JD 0.
    pub fn to_calendar(&self) -> Result<CalendarDate> {
        self.julian_day.to_calendar()
    }

    /// The event as a chrono UTC timestamp, millisecond resolution.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_datetime(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.julian_day.to_datetime()
    }
}

/// Predefined horizons for rise/set calculations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Horizon {
    /// Standard sunrise/sunset: zenith 90.833° (refraction plus solar radius).
    #[default]
    SunriseSunset,
    /// Civil twilight (sun 6° below the horizon).
    CivilTwilight,
    /// Nautical twilight (sun 12° below the horizon).
    NauticalTwilight,
    /// Astronomical twilight (sun 18° below the horizon).
    AstronomicalTwilight,
    /// Custom elevation angle in degrees.
    Custom(f64),
}

impl Horizon {
    /// Zenith angle of the sun's centre at the event, in degrees.
    #[must_use]
    pub fn zenith_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => 90.833,
            Self::CivilTwilight => 96.0,
            Self::NauticalTwilight => 102.0,
            Self::AstronomicalTwilight => 108.0,
            Self::Custom(elevation) => 90.0 - elevation,
        }
    }

    /// Elevation angle of the sun's centre at the event, in degrees.
    #[must_use]
    pub fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => -0.833,
            Self::CivilTwilight => -6.0,
            Self::NauticalTwilight => -12.0,
            Self::AstronomicalTwilight => -18.0,
            Self::Custom(elevation) => *elevation,
        }
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `NumericDomain` if elevation is not within -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&elevation_degrees) {
            return Err(Error::numeric_domain(
                "horizon elevation must be between -90° and +90°",
            ));
        }
        Ok(Self::Custom(elevation_degrees))
    }
}

/// Rise, transit and set for one day, or the polar condition that replaces them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SunriseResult<T> {
    /// Regular day with distinct sunrise, transit (noon), and sunset times
    RegularDay {
        /// Time of sunrise
        sunrise: T,
        /// Time of solar transit (solar noon)
        transit: T,
        /// Time of sunset
        sunset: T,
    },
    /// Polar day - sun remains above the horizon all day
    AllDay {
        /// Time of solar transit
        transit: T,
    },
    /// Polar night - sun remains below the horizon all day
    AllNight {
        /// Time of solar transit (sun highest, though still below horizon)
        transit: T,
    },
}

impl<T> SunriseResult<T> {
    /// Gets the transit time (solar noon) for any sunrise result.
    pub const fn transit(&self) -> &T {
        match self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Checks if this represents a regular day with sunrise and sunset.
    pub const fn is_regular_day(&self) -> bool {
        matches!(self, Self::RegularDay { .. })
    }

    /// Checks if this represents a polar day (sun never sets).
    pub const fn is_polar_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }

    /// Checks if this represents a polar night (sun never rises).
    pub const fn is_polar_night(&self) -> bool {
        matches!(self, Self::AllNight { .. })
    }

    /// Gets sunrise time if this is a regular day.
    pub const fn sunrise(&self) -> Option<&T> {
        if let Self::RegularDay { sunrise, .. } = self {
            Some(sunrise)
        } else {
            None
        }
    }

    /// Gets sunset time if this is a regular day.
    pub const fn sunset(&self) -> Option<&T> {
        if let Self::RegularDay { sunset, .. } = self {
            Some(sunset)
        } else {
            None
        }
    }
}
