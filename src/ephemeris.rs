use crate::angles::{cos_deg, deg_to_rad, normalize_angle, rad_to_deg, sin_deg, MINUTES_PER_DEGREE};

/// Low-precision solar coordinates for one instant, in degrees unless noted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEphemeris {
    pub julian_century: f64,
    /// Geometric mean longitude L0, normalized to [0, 360).
    pub mean_longitude: f64,
    pub mean_anomaly: f64,
    pub eccentricity: f64,
    pub equation_of_center: f64,
    pub true_longitude: f64,
    /// Longitude of the Moon's ascending node.
    pub ascending_node: f64,
    /// Apparent longitude λ, corrected for nutation and aberration.
    pub apparent_longitude: f64,
    pub mean_obliquity: f64,
    /// Obliquity ε corrected for nutation.
    pub obliquity: f64,
    /// Apparent minus mean solar time, in minutes.
    pub equation_of_time: f64,
}

impl SolarEphemeris {
    pub fn declination(&self) -> f64 {
        solar_declination(self.apparent_longitude, self.obliquity)
    }
}

pub fn mean_longitude(t: f64) -> f64 {
    normalize_angle(280.46646 + t * (36000.76983 + 0.0003032 * t))
}

pub fn mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

pub fn orbital_eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

pub fn equation_of_center(t: f64, m: f64) -> f64 {
    (1.914602 - t * (0.004817 + 0.000014 * t)) * sin_deg(m)
        + (0.019993 - 0.000101 * t) * sin_deg(2.0 * m)
        + 0.000289 * sin_deg(3.0 * m)
}

pub fn mean_obliquity(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.815 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

/// Four-term equation of time in minutes.
pub fn equation_of_time(obliquity: f64, eccentricity: f64, m: f64, l0: f64) -> f64 {
    let y = deg_to_rad(obliquity / 2.0).tan().powi(2);
    let (l0, m) = (deg_to_rad(l0), deg_to_rad(m));
    let e = eccentricity;
    let radians = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    MINUTES_PER_DEGREE * rad_to_deg(radians)
}

/// Sun's ephemeris at `t` Julian centuries from J2000.0.
pub fn solar_ephemeris(t: f64) -> SolarEphemeris {
    let l0 = mean_longitude(t);
    let m = mean_anomaly(t);
    let e = orbital_eccentricity(t);
    let c = equation_of_center(t, m);
    let true_longitude = l0 + c;
    let omega = 125.04 - 1934.136 * t;
    let apparent_longitude = true_longitude - 0.00569 - 0.00478 * sin_deg(omega);
    let eps0 = mean_obliquity(t);
    let eps = eps0 + 0.00256 * cos_deg(omega);

    SolarEphemeris {
        julian_century: t,
        mean_longitude: l0,
        mean_anomaly: m,
        eccentricity: e,
        equation_of_center: c,
        true_longitude,
        ascending_node: omega,
        apparent_longitude,
        mean_obliquity: eps0,
        obliquity: eps,
        equation_of_time: equation_of_time(eps, e, m, l0),
    }
}

pub fn solar_declination(apparent_longitude: f64, obliquity: f64) -> f64 {
    rad_to_deg((sin_deg(obliquity) * sin_deg(apparent_longitude)).asin())
}
