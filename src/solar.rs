//! Low-precision solar position series (NOAA / Meeus, chapter 25).
//!
//! Every function takes the Julian century `t` relative to J2000.0 and returns
//! degrees unless noted otherwise. Accuracy is roughly 0.01° in declination and
//! a few seconds in the equation of time for years -1000 to 3000.

#![allow(clippy::unreadable_literal)]

use crate::math::{
    asin, atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial,
    radians_to_degrees, sin, tan,
};

const MEAN_LONGITUDE: [f64; 3] = [280.46646, 36000.76983, 0.0003032];
const MEAN_ANOMALY: [f64; 3] = [357.52911, 35999.05029, -0.0001537];
const ECCENTRICITY: [f64; 3] = [0.016708634, -0.000042037, -0.0000001267];
const CENTER_SIN_M: [f64; 3] = [1.914602, -0.004817, -0.000014];
const CENTER_SIN_2M: [f64; 2] = [0.019993, -0.000101];
const CENTER_SIN_3M: f64 = 0.000289;
/// Longitude of the ascending node of the Moon's orbit.
const OMEGA: [f64; 2] = [125.04, -1934.136];
/// Arc seconds of the mean obliquity beyond 23°26'.
const OBLIQUITY_SECONDS: [f64; 4] = [21.448, -46.8150, -0.00059, 0.001813];
/// Semi-major axis of Earth's orbit in AU.
const SEMI_MAJOR_AXIS: f64 = 1.000001018;

/// Geometric mean longitude of the sun, normalized to [0, 360).
#[must_use]
pub fn mean_longitude(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(&MEAN_LONGITUDE, t))
}

/// Mean anomaly of the sun (not normalized).
#[must_use]
pub fn mean_anomaly(t: f64) -> f64 {
    polynomial(&MEAN_ANOMALY, t)
}

/// Eccentricity of Earth's orbit (unitless).
#[must_use]
pub fn eccentricity(t: f64) -> f64 {
    polynomial(&ECCENTRICITY, t)
}

/// Equation of center of the sun.
#[must_use]
pub fn equation_of_center(t: f64) -> f64 {
    center(t, mean_anomaly(t))
}

/// True longitude of the sun.
#[must_use]
pub fn true_longitude(t: f64) -> f64 {
    mean_longitude(t) + equation_of_center(t)
}

/// True anomaly of the sun.
#[must_use]
pub fn true_anomaly(t: f64) -> f64 {
    mean_anomaly(t) + equation_of_center(t)
}

/// Sun-Earth distance in astronomical units.
#[must_use]
pub fn radius_vector(t: f64) -> f64 {
    radius(eccentricity(t), true_anomaly(t))
}

/// Apparent longitude of the sun, corrected for nutation and aberration.
#[must_use]
pub fn apparent_longitude(t: f64) -> f64 {
    apparent(true_longitude(t), omega(t))
}

/// Mean obliquity of the ecliptic.
#[must_use]
pub fn mean_obliquity(t: f64) -> f64 {
    let seconds = polynomial(&OBLIQUITY_SECONDS, t);
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Obliquity of the ecliptic corrected for nutation.
#[must_use]
pub fn obliquity_correction(t: f64) -> f64 {
    corrected_obliquity(mean_obliquity(t), omega(t))
}

/// Apparent right ascension of the sun, in (-180, 180].
#[must_use]
pub fn right_ascension(t: f64) -> f64 {
    ascension(obliquity_correction(t), apparent_longitude(t))
}

/// Apparent declination of the sun.
#[must_use]
pub fn declination(t: f64) -> f64 {
    declination_from(obliquity_correction(t), apparent_longitude(t))
}

/// Equation of time in minutes (apparent minus mean solar time).
#[must_use]
pub fn equation_of_time(t: f64) -> f64 {
    time_equation(
        obliquity_correction(t),
        mean_longitude(t),
        eccentricity(t),
        mean_anomaly(t),
    )
}

fn omega(t: f64) -> f64 {
    polynomial(&OMEGA, t)
}

fn center(t: f64, mean_anomaly: f64) -> f64 {
    let m = degrees_to_radians(mean_anomaly);
    sin(m) * polynomial(&CENTER_SIN_M, t)
        + sin(2.0 * m) * polynomial(&CENTER_SIN_2M, t)
        + sin(3.0 * m) * CENTER_SIN_3M
}

fn radius(eccentricity: f64, true_anomaly: f64) -> f64 {
    let e = eccentricity;
    SEMI_MAJOR_AXIS * (1.0 - e * e) / (1.0 + e * cos(degrees_to_radians(true_anomaly)))
}

fn apparent(true_longitude: f64, omega: f64) -> f64 {
    true_longitude - 0.00569 - 0.00478 * sin(degrees_to_radians(omega))
}

fn corrected_obliquity(mean_obliquity: f64, omega: f64) -> f64 {
    mean_obliquity + 0.00256 * cos(degrees_to_radians(omega))
}

fn ascension(obliquity: f64, apparent_longitude: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity);
    let lambda = degrees_to_radians(apparent_longitude);
    radians_to_degrees(atan2(cos(epsilon) * sin(lambda), cos(lambda)))
}

fn declination_from(obliquity: f64, apparent_longitude: f64) -> f64 {
    let epsilon = degrees_to_radians(obliquity);
    let lambda = degrees_to_radians(apparent_longitude);
    radians_to_degrees(asin(sin(epsilon) * sin(lambda)))
}

fn time_equation(obliquity: f64, mean_longitude: f64, eccentricity: f64, mean_anomaly: f64) -> f64 {
    let y = tan(degrees_to_radians(obliquity) / 2.0);
    let y = y * y;
    let l0 = degrees_to_radians(mean_longitude);
    let e = eccentricity;
    let m = degrees_to_radians(mean_anomaly);

    let equation = y * sin(2.0 * l0) - 2.0 * e * sin(m) + 4.0 * e * y * sin(m) * cos(2.0 * l0)
        - 0.5 * y * y * sin(4.0 * l0)
        - 1.25 * e * e * sin(2.0 * m);

    4.0 * radians_to_degrees(equation)
}

/// All solar series evaluated once at a single Julian century.
///
/// Values are bit-identical to the corresponding free functions.
///
/// # Example
/// ```
/// # use solar_calendar::solar::{self, SolarPositionSample};
/// let sample = SolarPositionSample::at(0.0);
/// assert_eq!(sample.declination(), solar::declination(0.0));
/// assert!((sample.equation_of_time() + 3.30).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPositionSample {
    julian_century: f64,
    mean_longitude: f64,
    mean_anomaly: f64,
    eccentricity: f64,
    equation_of_center: f64,
    true_longitude: f64,
    true_anomaly: f64,
    radius_vector: f64,
    apparent_longitude: f64,
    mean_obliquity: f64,
    obliquity_correction: f64,
    right_ascension: f64,
    declination: f64,
    equation_of_time: f64,
}

impl SolarPositionSample {
    /// Evaluates the series at Julian century `t`.
    #[must_use]
    pub fn at(t: f64) -> Self {
        let mean_longitude = mean_longitude(t);
        let mean_anomaly = mean_anomaly(t);
        let eccentricity = eccentricity(t);
        let equation_of_center = center(t, mean_anomaly);
        let true_longitude = mean_longitude + equation_of_center;
        let true_anomaly = mean_anomaly + equation_of_center;
        let omega = omega(t);
        let apparent_longitude = apparent(true_longitude, omega);
        let mean_obliquity = mean_obliquity(t);
        let obliquity_correction = corrected_obliquity(mean_obliquity, omega);

        Self {
            julian_century: t,
            mean_longitude,
            mean_anomaly,
            eccentricity,
            equation_of_center,
            true_longitude,
            true_anomaly,
            radius_vector: radius(eccentricity, true_anomaly),
            apparent_longitude,
            mean_obliquity,
            obliquity_correction,
            right_ascension: ascension(obliquity_correction, apparent_longitude),
            declination: declination_from(obliquity_correction, apparent_longitude),
            equation_of_time: time_equation(
                obliquity_correction,
                mean_longitude,
                eccentricity,
                mean_anomaly,
            ),
        }
    }

    /// Julian century the sample was taken at.
    #[must_use]
    pub const fn julian_century(&self) -> f64 {
        self.julian_century
    }

    /// Geometric mean longitude in degrees, [0, 360).
    #[must_use]
    pub const fn mean_longitude(&self) -> f64 {
        self.mean_longitude
    }

    /// Mean anomaly in degrees.
    #[must_use]
    pub const fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Orbital eccentricity.
    #[must_use]
    pub const fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Equation of center in degrees.
    #[must_use]
    pub const fn equation_of_center(&self) -> f64 {
        self.equation_of_center
    }

    /// True longitude in degrees.
    #[must_use]
    pub const fn true_longitude(&self) -> f64 {
        self.true_longitude
    }

    /// True anomaly in degrees.
    #[must_use]
    pub const fn true_anomaly(&self) -> f64 {
        self.true_anomaly
    }

    /// Sun-Earth distance in AU.
    #[must_use]
    pub const fn radius_vector(&self) -> f64 {
        self.radius_vector
    }

    /// Apparent longitude in degrees.
    #[must_use]
    pub const fn apparent_longitude(&self) -> f64 {
        self.apparent_longitude
    }

    /// Mean obliquity of the ecliptic in degrees.
    #[must_use]
    pub const fn mean_obliquity(&self) -> f64 {
        self.mean_obliquity
    }

    /// Corrected obliquity of the ecliptic in degrees.
    #[must_use]
    pub const fn obliquity_correction(&self) -> f64 {
        self.obliquity_correction
    }

    /// Right ascension in degrees, (-180, 180].
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Equation of time in minutes.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }
}
