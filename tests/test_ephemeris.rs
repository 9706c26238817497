use sun_times::ephemeris::*;
use sun_times::julian::{julian_century, julian_day};

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn ephemeris_for(year: i32, month: u32, day: u32) -> SolarEphemeris {
    solar_ephemeris(julian_century(julian_day(year, month, day)))
}

// ── Reference values ──

#[test]
fn test_ephemeris_2024_new_year() {
    let eph = ephemeris_for(2024, 1, 1);
    assert_approx!(eph.julian_century, 0.23998631074606433, 1e-12);
    assert_approx!(eph.equation_of_time, -3.0930154961607985, 1e-9);
    assert_approx!(eph.apparent_longitude, 280.0422193642106, 1e-9);
    assert_approx!(eph.obliquity, 23.438562266874566, 1e-9);
    assert_approx!(eph.declination(), -23.058546975616956, 1e-9);
}

#[test]
fn test_ephemeris_march_equinox() {
    let eph = ephemeris_for(2024, 3, 20);
    assert_approx!(eph.equation_of_time, -7.438989178945034, 1e-9);
    assert_approx!(eph.apparent_longitude, 359.8728335183157, 1e-9);
    assert_approx!(eph.declination(), -0.05058246753221339, 1e-9);
}

#[test]
fn test_ephemeris_june_solstice() {
    let eph = ephemeris_for(2024, 6, 21);
    assert_approx!(eph.equation_of_time, -1.8162165525671223, 1e-9);
    assert_approx!(eph.declination(), 23.4385549487431, 1e-9);
}

#[test]
fn test_ephemeris_november_eot_peak() {
    let eph = ephemeris_for(2024, 11, 3);
    assert_approx!(eph.equation_of_time, 16.490990692411604, 1e-9);
    assert_approx!(eph.declination(), -15.146142089473022, 1e-9);
}

#[test]
fn test_ephemeris_j2000() {
    let eph = ephemeris_for(2000, 1, 1);
    assert_approx!(eph.equation_of_time, -3.0641164025259173, 1e-9);
    assert_approx!(eph.apparent_longitude, 279.8629338168482, 1e-9);
    assert_approx!(eph.obliquity, 23.437820501382195, 1e-9);
}

// ── Components ──

#[test]
fn test_mean_longitude_normalized() {
    for t in [-1.0, -0.5, 0.0, 0.24, 0.5, 1.0] {
        let l0 = mean_longitude(t);
        assert!((0.0..360.0).contains(&l0), "T={}: {}", t, l0);
    }
    assert_approx!(mean_longitude(0.0), 280.46646, 1e-12);
}

#[test]
fn test_mean_obliquity_at_epoch() {
    assert_approx!(mean_obliquity(0.0), 23.0 + 26.0 / 60.0 + 21.448 / 3600.0, 1e-12);
}

#[test]
fn test_eccentricity_decreases() {
    assert_approx!(orbital_eccentricity(0.0), 0.016708634, 1e-15);
    assert!(orbital_eccentricity(1.0) < orbital_eccentricity(0.0));
}

#[test]
fn test_equation_of_center_bounded() {
    for m in (0..360).step_by(5) {
        let c = equation_of_center(0.24, m as f64);
        assert!(c.abs() < 1.95, "M={}: {}", m, c);
    }
}

#[test]
fn test_true_longitude_is_mean_plus_center() {
    let eph = ephemeris_for(2024, 8, 1);
    assert_approx!(eph.true_longitude, eph.mean_longitude + eph.equation_of_center, 1e-12);
}

// ── Declination ──

#[test]
fn test_declination_zero_at_equinox_longitudes() {
    assert_approx!(solar_declination(0.0, 23.44), 0.0, 1e-12);
    assert_approx!(solar_declination(180.0, 23.44), 0.0, 1e-9);
}

#[test]
fn test_declination_equals_obliquity_at_solstice_longitudes() {
    assert_approx!(solar_declination(90.0, 23.44), 23.44, 1e-9);
    assert_approx!(solar_declination(270.0, 23.44), -23.44, 1e-9);
}

#[test]
fn test_declination_bounded_through_year() {
    let mut date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for _ in 0..366 {
        let jd = sun_times::julian::julian_day_for(date);
        let eph = solar_ephemeris(julian_century(jd));
        let decl = eph.declination();
        assert!(decl.abs() <= 23.45, "{}: {}", date, decl);
        assert!(eph.equation_of_time.abs() < 17.0, "{}: {}", date, eph.equation_of_time);
        date = date.succ_opt().unwrap();
    }
}
