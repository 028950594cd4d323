//! Low-precision apparent solar longitude.

use super::time::centuries_since_j2000;

/// Longitude of the Moon's ascending node, used for nutation, in radians.
pub(crate) fn node_longitude_rad(t: f64) -> f64 {
    (125.04 - 1934.136 * t).to_radians()
}

/// Apparent geocentric ecliptic longitude of the Sun in degrees, [0, 360).
///
/// Mean longitude plus equation of centre, corrected for aberration
/// (-20.5") and nutation in longitude.
pub(crate) fn apparent_longitude_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);

    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_longitude = l0 + c;
    let apparent = true_longitude - 0.005_69 - 0.004_78 * node_longitude_rad(t).sin();

    apparent.rem_euclid(360.0)
}
