pub const MINUTES_PER_DEGREE: f64 = 4.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn sin_deg(deg: f64) -> f64 {
    deg_to_rad(deg).sin()
}

pub fn cos_deg(deg: f64) -> f64 {
    deg_to_rad(deg).cos()
}
