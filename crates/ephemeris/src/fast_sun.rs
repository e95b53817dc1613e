//! Low-precision analytic Sun: geocentric apparent ecliptic longitude and distance.
//!
//! Good to a few arcseconds over the modern era; suitable for quick rise/set tables and as an
//! independent check on the full reduction.

use almanac_core::angles::{normalize_deg, normalize_rad};
use almanac_core::constants::DEG_TO_RAD;
use almanac_core::{Jt, SphericalVector, Vector};
use almanac_frames::{ObliquityElements, ObliquityModel};

use crate::CoordinateSource;
use crate::kepler::{Planet, mean_elements};

/// Periodic terms of the mean longitude: amplitude (1e-7 rad scale), phase (deg), rate (deg/century).
const LONGITUDE_TERMS: [(f64, f64, f64); 49] = [
    (403406.0, 270.54861, 0.9287892),
    (195207.0, 340.19128, 35999.1376958),
    (119433.0, 63.91854, 35999.4089666),
    (112392.0, 331.2622, 35998.7287385),
    (3891.0, 317.843, 71998.20261),
    (2819.0, 86.631, 71998.4403),
    (1721.0, 240.052, 36000.35726),
    (660.0, 310.26, 71997.4812),
    (350.0, 247.23, 32964.4678),
    (334.0, 260.87, -19.441),
    (314.0, 297.82, 445267.1117),
    (268.0, 343.14, 45036.884),
    (242.0, 166.79, 3.1008),
    (234.0, 81.53, 22518.4434),
    (158.0, 3.5, -19.9739),
    (132.0, 132.75, 65928.9345),
    (129.0, 182.95, 9038.0293),
    (114.0, 162.03, 3034.7684),
    (99.0, 29.8, 33718.148),
    (93.0, 266.4, 3034.448),
    (86.0, 249.2, -2280.773),
    (78.0, 157.6, 29929.992),
    (72.0, 257.8, 31556.493),
    (68.0, 185.1, 149.588),
    (64.0, 69.9, 9037.75),
    (46.0, 8.0, 107997.405),
    (38.0, 197.1, -4444.176),
    (37.0, 250.4, 151.771),
    (32.0, 65.3, 67555.316),
    (29.0, 162.7, 31556.08),
    (28.0, 341.5, -4561.54),
    (27.0, 291.6, 107996.706),
    (27.0, 98.5, 1221.655),
    (25.0, 146.7, 62894.167),
    (24.0, 110.0, 31437.369),
    (21.0, 5.2, 14578.298),
    (21.0, 342.6, -31931.757),
    (20.0, 230.9, 34777.243),
    (18.0, 256.1, 1221.999),
    (17.0, 45.3, 62894.511),
    (14.0, 242.9, -4442.039),
    (13.0, 115.2, 107997.909),
    (13.0, 151.8, 119.066),
    (13.0, 285.3, 16859.071),
    (12.0, 53.3, -4.578),
    (10.0, 126.6, 26895.292),
    (10.0, 205.7, -39.127),
    (10.0, 85.9, 12297.536),
    (10.0, 146.1, 90073.778),
];

/// Two leading nutation terms in longitude, radians.
pub(crate) fn nutation_in_longitude(jt: Jt) -> f64 {
    let node = normalize_deg(124.90 - 1934.134 * jt + 0.002063 * jt * jt) * DEG_TO_RAD;
    let sun = normalize_deg(201.11 + 72001.5377 * jt + 0.00057 * jt * jt) * DEG_TO_RAD;
    (-0.004778 * node.sin() - 0.0003667 * sun.sin()) * DEG_TO_RAD
}

fn annual_aberration(jt: Jt) -> f64 {
    normalize_deg(0.0000974 * ((177.63 + 35999.01848 * jt) * DEG_TO_RAD).cos() - 0.005575)
        * DEG_TO_RAD
}

/// Apparent geocentric ecliptic position of the Sun at `jt`: `(λ, 0, r)` with `r` in AU.
pub fn sun_position(jt: Jt) -> SphericalVector {
    let periodic: f64 = LONGITUDE_TERMS
        .iter()
        .map(|&(amplitude, phase, rate)| amplitude * ((phase + rate * jt) * DEG_TO_RAD).sin())
        .sum();
    let longitude =
        normalize_deg(282.7771834 + 36000.76952744 * jt + 0.000005729577951308232 * periodic)
            * DEG_TO_RAD;

    let anomaly = normalize_deg(
        357.5291092 + 35999.0502909 * jt - 0.0001536 * jt * jt + jt * jt * jt / 24_490_000.0,
    ) * DEG_TO_RAD;
    let center = (1.9146 - 0.004817 * jt - 0.000014 * jt * jt) * anomaly.sin()
        + (0.019993 - 0.000101 * jt) * (2.0 * anomaly).sin()
        + 0.00029 * (3.0 * anomaly).sin();

    let e = mean_elements(Planet::Earth, jt).eccentricity;
    let true_anomaly = anomaly + center * DEG_TO_RAD;
    let distance = 1.000001018 * (1.0 - e * e) / (1.0 + e * true_anomaly.cos());

    SphericalVector::new(
        normalize_rad(longitude + nutation_in_longitude(jt) + annual_aberration(jt)),
        0.0,
        distance,
    )
}

/// Provider of the apparent geocentric ecliptic Sun. Rotate by the true obliquity of date to
/// get equatorial coordinates.
pub fn geocentric_ecliptic_apparent() -> CoordinateSource {
    crate::coordinate_source(|jt| Ok(Vector::Spherical(sun_position(jt))))
}

/// Provider of the apparent geocentric equatorial Sun, rotated by the mean obliquity of `model`.
pub fn geocentric_equatorial_apparent(model: ObliquityModel) -> CoordinateSource {
    crate::coordinate_source(move |jt| {
        let ecliptic = Vector::Spherical(sun_position(jt));
        Ok(ObliquityElements::new(model, jt).rotate_ecliptic_vector(ecliptic))
    })
}
