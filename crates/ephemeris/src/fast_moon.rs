//! Low-precision analytic Moon: geocentric apparent ecliptic coordinates of date.
//!
//! Sixty periodic terms each in longitude, distance and latitude (Meeus, ch. 47). Positions are
//! good to about ten arcseconds, enough for rise/set to the minute.

use almanac_core::angles::{normalize_deg, normalize_rad};
use almanac_core::constants::{DEG_TO_RAD, KM_PER_AU};
use almanac_core::poly::polynomial_sum;
use almanac_core::{Jt, SphericalVector, Vector};
use almanac_frames::{ObliquityElements, ObliquityModel};

use crate::CoordinateSource;
use crate::fast_sun::nutation_in_longitude;

/// Multiples of (D, M, M′, F) with the longitude (1e-6 deg) and distance (m) amplitudes.
const LONGITUDE_DISTANCE_TERMS: [(i8, i8, i8, i8, f64, f64); 60] = [
    (0, 0, 1, 0, 6288774.0, -20905355.0),
    (2, 0, -1, 0, 1274027.0, -3699111.0),
    (2, 0, 0, 0, 658314.0, -2955968.0),
    (0, 0, 2, 0, 213618.0, -569925.0),
    (0, 1, 0, 0, -185116.0, 48888.0),
    (0, 0, 0, 2, -114332.0, -3149.0),
    (2, 0, -2, 0, 58793.0, 246158.0),
    (2, -1, -1, 0, 57066.0, -152138.0),
    (2, 0, 1, 0, 53322.0, -170733.0),
    (2, -1, 0, 0, 45758.0, -204586.0),
    (0, 1, -1, 0, -40923.0, -129620.0),
    (1, 0, 0, 0, -34720.0, 108743.0),
    (0, 1, 1, 0, -30383.0, 104755.0),
    (2, 0, 0, -2, 15327.0, 10321.0),
    (0, 0, 1, 2, -12528.0, 0.0),
    (0, 0, 1, -2, 10980.0, 79661.0),
    (4, 0, -1, 0, 10675.0, -34782.0),
    (0, 0, 3, 0, 10034.0, -23210.0),
    (4, 0, -2, 0, 8548.0, -21636.0),
    (2, 1, -1, 0, -7888.0, 24208.0),
    (2, 1, 0, 0, -6766.0, 30824.0),
    (1, 0, -1, 0, -5163.0, -8379.0),
    (1, 1, 0, 0, 4987.0, -16675.0),
    (2, -1, 1, 0, 4036.0, -12831.0),
    (2, 0, 2, 0, 3994.0, -10445.0),
    (4, 0, 0, 0, 3861.0, -11650.0),
    (2, 0, -3, 0, 3665.0, 14403.0),
    (0, 1, -2, 0, -2689.0, -7003.0),
    (2, 0, -1, 2, -2602.0, 0.0),
    (2, -1, -2, 0, 2390.0, 10056.0),
    (1, 0, 1, 0, -2348.0, 6322.0),
    (2, -2, 0, 0, 2236.0, -9884.0),
    (0, 1, 2, 0, -2120.0, 5751.0),
    (0, 2, 0, 0, -2069.0, 0.0),
    (2, -2, -1, 0, 2048.0, -4950.0),
    (2, 0, 1, -2, -1773.0, 4130.0),
    (2, 0, 0, 2, -1595.0, 0.0),
    (4, -1, -1, 0, 1215.0, -3958.0),
    (0, 0, 2, 2, -1110.0, 0.0),
    (3, 0, -1, 0, -892.0, 3258.0),
    (2, 1, 1, 0, -810.0, 2616.0),
    (4, -1, -2, 0, 759.0, -1897.0),
    (0, 2, -1, 0, -713.0, -2117.0),
    (2, 2, -1, 0, -700.0, 2354.0),
    (2, 1, -2, 0, 691.0, 0.0),
    (2, -1, 0, -2, 596.0, 0.0),
    (4, 0, 1, 0, 549.0, -1423.0),
    (0, 0, 4, 0, 537.0, -1117.0),
    (4, -1, 0, 0, 520.0, -1571.0),
    (1, 0, -2, 0, -487.0, -1739.0),
    (2, 1, 0, -2, -399.0, 0.0),
    (0, 0, 2, -2, -381.0, -4421.0),
    (1, 1, 1, 0, 351.0, 0.0),
    (3, 0, -2, 0, -340.0, 0.0),
    (4, 0, -3, 0, 330.0, 0.0),
    (2, -1, 2, 0, 327.0, 0.0),
    (0, 2, 1, 0, -323.0, 1165.0),
    (1, 1, -1, 0, 299.0, 0.0),
    (2, 0, 3, 0, 294.0, 0.0),
    (2, 0, -1, -2, 0.0, 8752.0),
];

/// Multiples of (D, M, M′, F) with the latitude amplitude (1e-6 deg).
const LATITUDE_TERMS: [(i8, i8, i8, i8, f64); 60] = [
    (0, 0, 0, 1, 5128122.0),
    (0, 0, 1, 1, 280602.0),
    (0, 0, 1, -1, 277693.0),
    (2, 0, 0, -1, 173237.0),
    (2, 0, -1, 1, 55413.0),
    (2, 0, -1, -1, 46271.0),
    (2, 0, 0, 1, 32573.0),
    (0, 0, 2, 1, 17198.0),
    (2, 0, 1, -1, 9266.0),
    (0, 0, 2, -1, 8822.0),
    (2, -1, 0, -1, 8216.0),
    (2, 0, -2, -1, 4324.0),
    (2, 0, 1, 1, 4200.0),
    (2, 1, 0, -1, -3359.0),
    (2, -1, -1, 1, 2463.0),
    (2, -1, 0, 1, 2211.0),
    (2, -1, -1, -1, 2065.0),
    (0, 1, -1, -1, -1870.0),
    (4, 0, -1, -1, 1828.0),
    (0, 1, 0, 1, -1794.0),
    (0, 0, 0, 3, -1749.0),
    (0, 1, -1, 1, -1565.0),
    (1, 0, 0, 1, -1491.0),
    (0, 1, 1, 1, -1475.0),
    (0, 1, 1, -1, -1410.0),
    (0, 1, 0, -1, -1344.0),
    (1, 0, 0, -1, -1335.0),
    (0, 0, 3, 1, 1107.0),
    (4, 0, 0, -1, 1021.0),
    (4, 0, -1, 1, 833.0),
    (0, 0, 1, -3, 777.0),
    (4, 0, -2, 1, 671.0),
    (2, 0, 0, -3, 607.0),
    (2, 0, 2, -1, 596.0),
    (2, -1, 1, -1, 491.0),
    (2, 0, -2, 1, -451.0),
    (0, 0, 3, -1, 439.0),
    (2, 0, 2, 1, 422.0),
    (2, 0, -3, -1, 421.0),
    (2, 1, -1, 1, -366.0),
    (2, 1, 0, 1, -351.0),
    (4, 0, 0, 1, 331.0),
    (2, -1, 1, 1, 315.0),
    (2, -2, 0, -1, 302.0),
    (0, 0, 1, 3, -283.0),
    (2, 1, 1, -1, -229.0),
    (1, 1, 0, -1, 223.0),
    (1, 1, 0, 1, 223.0),
    (0, 1, -2, -1, -220.0),
    (2, 1, -1, -1, -220.0),
    (1, 0, 1, 1, -185.0),
    (2, -1, -2, -1, 181.0),
    (0, 1, 2, 1, -177.0),
    (4, 0, -2, -1, 176.0),
    (4, -1, -1, -1, 166.0),
    (1, 0, 1, -1, -164.0),
    (4, 0, 1, -1, 132.0),
    (1, 0, -1, -1, -119.0),
    (4, -1, 0, -1, 115.0),
    (2, -2, 0, 1, 107.0),
];

/// Mean distance of the Moon, metres.
const MEAN_DISTANCE_M: f64 = 385_000_560.0;

/// Fundamental arguments in degrees.
#[derive(Debug, Clone, Copy)]
struct Arguments {
    /// Mean longitude L′.
    longitude: f64,
    /// Mean elongation D.
    elongation: f64,
    /// Solar mean anomaly M.
    solar_anomaly: f64,
    /// Lunar mean anomaly M′.
    lunar_anomaly: f64,
    /// Argument of latitude F.
    node: f64,
    /// Decrease of Earth's orbital eccentricity.
    e: f64,
}

impl Arguments {
    fn new(t: Jt) -> Self {
        Self {
            longitude: normalize_deg(polynomial_sum(
                &[218.3164477, 481267.88123421, -0.0015786, 1.0 / 538_841.0, -1.0 / 65_194_000.0],
                t,
            )),
            elongation: normalize_deg(polynomial_sum(
                &[297.8501921, 445267.1114034, -0.0018819, 1.0 / 545_868.0, -1.0 / 113_065_000.0],
                t,
            )),
            solar_anomaly: normalize_deg(
                357.5291092 + 35999.0502909 * t - 0.0001536 * t * t + t * t * t / 24_490_000.0,
            ),
            lunar_anomaly: normalize_deg(polynomial_sum(
                &[134.9633964, 477198.8675055, 0.0087414, 1.0 / 69_699.0, -1.0 / 14_712_000.0],
                t,
            )),
            node: normalize_deg(polynomial_sum(
                &[93.2720950, 483202.0175233, -0.0036539, -1.0 / 3_526_000.0, 1.0 / 863_310_000.0],
                t,
            )),
            e: 1.0 - 0.002516 * t - 0.0000074 * t * t,
        }
    }

    /// Argument of a term in radians, with the eccentricity factor for its multiple of M.
    fn term(&self, d: i8, m: i8, mp: i8, f: i8) -> (f64, f64) {
        let angle = f64::from(d) * self.elongation
            + f64::from(m) * self.solar_anomaly
            + f64::from(mp) * self.lunar_anomaly
            + f64::from(f) * self.node;
        let factor = match m.abs() {
            1 => self.e,
            2 => self.e * self.e,
            _ => 1.0,
        };
        (angle * DEG_TO_RAD, factor)
    }
}

/// Apparent geocentric ecliptic position of the Moon at `jt`: `(λ, β, r)` with `r` in AU.
pub fn moon_position(jt: Jt) -> SphericalVector {
    let args = Arguments::new(jt);

    let (sum_l, sum_r) = LONGITUDE_DISTANCE_TERMS.iter().fold(
        (0.0, 0.0),
        |(l, r), &(d, m, mp, f, sin_amp, cos_amp)| {
            let (angle, factor) = args.term(d, m, mp, f);
            (
                l + sin_amp * factor * angle.sin(),
                r + cos_amp * factor * angle.cos(),
            )
        },
    );
    let sum_b: f64 = LATITUDE_TERMS
        .iter()
        .map(|&(d, m, mp, f, amp)| {
            let (angle, factor) = args.term(d, m, mp, f);
            amp * factor * angle.sin()
        })
        .sum();

    let venus = ((119.75 + 131.849 * jt) * DEG_TO_RAD).sin();
    let jupiter = ((53.09 + 479264.29 * jt) * DEG_TO_RAD).sin();
    let flattening = ((args.longitude - args.node) * DEG_TO_RAD).sin();
    let a3 = ((313.45 + 481266.484 * jt) * DEG_TO_RAD).sin();

    let longitude = args.longitude
        + (sum_l + 3958.0 * venus + 318.0 * jupiter + 1962.0 * flattening) * 1e-6;
    let latitude = (sum_b + 175.0 * venus + 1962.0 * flattening + 382.0 * a3) * 1e-6;
    let distance = (MEAN_DISTANCE_M + sum_r) / 1000.0 / KM_PER_AU;

    SphericalVector::new(
        normalize_rad(longitude * DEG_TO_RAD + nutation_in_longitude(jt)),
        latitude * DEG_TO_RAD,
        distance,
    )
}

/// Provider of the apparent geocentric ecliptic Moon.
pub fn geocentric_ecliptic_apparent() -> CoordinateSource {
    crate::coordinate_source(|jt| Ok(Vector::Spherical(moon_position(jt))))
}

/// Provider of the apparent geocentric equatorial Moon, rotated by the mean obliquity of `model`.
pub fn geocentric_equatorial_apparent(model: ObliquityModel) -> CoordinateSource {
    crate::coordinate_source(move |jt| {
        let ecliptic = Vector::Spherical(moon_position(jt));
        Ok(ObliquityElements::new(model, jt).rotate_ecliptic_vector(ecliptic))
    })
}
