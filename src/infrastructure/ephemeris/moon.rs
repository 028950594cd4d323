//! Apparent lunar longitude from the principal periodic terms.

use super::sun::node_longitude_rad;
use super::time::centuries_since_j2000;

/// Longitude terms: multiples of (D, M, M', F) and the sine coefficient in
/// 1e-6 degrees. Terms involving M are scaled by the eccentricity factor E.
const LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 34] = [
    (0, 0, 1, 0, 6_288_774.0),
    (2, 0, -1, 0, 1_274_027.0),
    (2, 0, 0, 0, 658_314.0),
    (0, 0, 2, 0, 213_618.0),
    (0, 1, 0, 0, -185_116.0),
    (0, 0, 0, 2, -114_332.0),
    (2, 0, -2, 0, 58_793.0),
    (2, -1, -1, 0, 57_066.0),
    (2, 0, 1, 0, 53_322.0),
    (2, -1, 0, 0, 45_758.0),
    (0, 1, -1, 0, -40_923.0),
    (1, 0, 0, 0, -34_720.0),
    (0, 1, 1, 0, -30_383.0),
    (2, 0, 0, -2, 15_327.0),
    (0, 0, 1, 2, -12_528.0),
    (0, 0, 1, -2, 10_980.0),
    (4, 0, -1, 0, 10_675.0),
    (0, 0, 3, 0, 10_034.0),
    (4, 0, -2, 0, 8_548.0),
    (2, 1, -1, 0, -7_888.0),
    (2, 1, 0, 0, -6_766.0),
    (1, 0, -1, 0, -5_163.0),
    (1, 1, 0, 0, 4_987.0),
    (2, -1, 1, 0, 4_036.0),
    (2, 0, 2, 0, 3_994.0),
    (4, 0, 0, 0, 3_861.0),
    (2, 0, -3, 0, 3_665.0),
    (0, 1, -2, 0, -2_689.0),
    (2, 0, -1, 2, -2_602.0),
    (2, -1, -2, 0, 2_390.0),
    (1, 0, 1, 0, -2_348.0),
    (2, -2, 0, 0, 2_236.0),
    (0, 1, 2, 0, -2_120.0),
    (0, 2, 0, 0, -2_069.0),
];

/// Apparent geocentric ecliptic longitude of the Moon in degrees, [0, 360).
pub(crate) fn apparent_longitude_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude and fundamental arguments, degrees
    let l_prime = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let m_prime = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let (d, m, m_prime, f) = (
        d.to_radians(),
        m.to_radians(),
        m_prime.to_radians(),
        f.to_radians(),
    );

    let mut sigma_l: f64 = LONGITUDE_TERMS
        .iter()
        .map(|&(cd, cm, cmp, cf, coeff)| {
            let arg = f64::from(cd) * d
                + f64::from(cm) * m
                + f64::from(cmp) * m_prime
                + f64::from(cf) * f;
            let scale = match cm.abs() {
                1 => e,
                2 => e * e,
                _ => 1.0,
            };
            coeff * scale * arg.sin()
        })
        .sum();

    // Venus, Jupiter and flattening terms
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let l_prime_rad = l_prime.to_radians();
    sigma_l += 3_958.0 * a1.sin() + 1_962.0 * (l_prime_rad - f).sin() + 318.0 * a2.sin();

    let geometric = l_prime + sigma_l / 1_000_000.0;
    let nutation = -0.004_78 * node_longitude_rad(t).sin();

    (geometric + nutation).rem_euclid(360.0)
}
