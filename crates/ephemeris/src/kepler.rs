//! Mean orbital elements of the major planets (Simon et al. 1994, J2000 ecliptic) and the
//! resulting heliocentric positions.

use std::fmt;
use std::str::FromStr;

use almanac_core::angles::normalize_rad;
use almanac_core::constants::{DEG_TO_RAD, TWO_PI};
use almanac_core::poly::polynomial_sum;
use almanac_core::{Jt, Matrix, RectangularVector, Vector};
use log::warn;

use crate::CoordinateSource;

/// Planets with a mean-element theory. `Earth` is the Earth–Moon barycentre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    fn series(self) -> &'static ElementSeries {
        match self {
            Planet::Mercury => &MERCURY,
            Planet::Venus => &VENUS,
            Planet::Earth => &EARTH,
            Planet::Mars => &MARS,
            Planet::Jupiter => &JUPITER,
            Planet::Saturn => &SATURN,
            Planet::Uranus => &URANUS,
            Planet::Neptune => &NEPTUNE,
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Planet::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown planet `{s}`"))
    }
}

/// Angle polynomial: epoch value in degrees plus rates in arcseconds per millennium^k.
struct AngleSeries {
    epoch_deg: f64,
    rates_arcsec: &'static [f64],
}

impl AngleSeries {
    fn radians(&self, t: f64) -> f64 {
        (self.epoch_deg + t * polynomial_sum(self.rates_arcsec, t) / 3600.0) * DEG_TO_RAD
    }
}

struct ElementSeries {
    semi_major_axis: &'static [f64],
    eccentricity: &'static [f64],
    inclination: AngleSeries,
    mean_longitude: AngleSeries,
    perihelion_longitude: AngleSeries,
    ascending_node: AngleSeries,
}

/// Osculating-style elements at one instant. Angles in radians, axis in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    /// L
    pub mean_longitude: f64,
    /// ϖ
    pub perihelion_longitude: f64,
    /// Ω
    pub ascending_node: f64,
}

/// Evaluate the mean elements of `planet` at `jt`. The series run in Julian millennia.
pub fn mean_elements(planet: Planet, jt: Jt) -> OrbitalElements {
    let s = planet.series();
    let t = jt / 10.0;
    OrbitalElements {
        semi_major_axis: polynomial_sum(s.semi_major_axis, t),
        eccentricity: polynomial_sum(s.eccentricity, t),
        inclination: s.inclination.radians(t),
        mean_longitude: s.mean_longitude.radians(t),
        perihelion_longitude: s.perihelion_longitude.radians(t),
        ascending_node: s.ascending_node.radians(t),
    }
}

impl OrbitalElements {
    pub fn mean_anomaly(&self) -> f64 {
        normalize_rad(self.mean_longitude - self.perihelion_longitude)
    }

    /// ω = ϖ − Ω
    pub fn argument_of_perihelion(&self) -> f64 {
        self.perihelion_longitude - self.ascending_node
    }

    /// Heliocentric position in the reference ecliptic, AU.
    pub fn position(&self) -> RectangularVector {
        let e = self.eccentricity;
        let anomaly = solve_kepler(self.mean_anomaly(), e);
        let (sin_e, cos_e) = anomaly.sin_cos();
        let in_plane = RectangularVector::new(
            self.semi_major_axis * (cos_e - e),
            self.semi_major_axis * (1.0 - e * e).sqrt() * sin_e,
            0.0,
        );
        Matrix::rotate_z(-self.ascending_node)
            * Matrix::rotate_x(-self.inclination)
            * Matrix::rotate_z(-self.argument_of_perihelion())
            * in_plane
    }
}

const KEPLER_MAX_ITERATIONS: usize = 15;
const KEPLER_TOLERANCE: f64 = 1e-14;

/// Eccentric anomaly for mean anomaly `m` (elliptic orbits) by Newton iteration.
pub fn solve_kepler(m: f64, e: f64) -> f64 {
    let m = normalize_rad(m);
    let mut anomaly = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let f = anomaly - e * anomaly.sin() - m;
        anomaly -= f / (1.0 - e * anomaly.cos());
        if f.abs() < KEPLER_TOLERANCE {
            return anomaly.rem_euclid(TWO_PI);
        }
    }
    warn!("Kepler equation did not converge for M={m}, e={e}");
    anomaly.rem_euclid(TWO_PI)
}

/// Heliocentric ecliptic J2000 position of `planet` at `jt`, AU.
pub fn heliocentric_position(planet: Planet, jt: Jt) -> RectangularVector {
    mean_elements(planet, jt).position()
}

/// Coordinate provider backed by the mean elements.
pub fn simon_j2000(planet: Planet) -> CoordinateSource {
    crate::coordinate_source(move |jt| Ok(Vector::Rectangular(heliocentric_position(planet, jt))))
}

const MERCURY: ElementSeries = ElementSeries {
    semi_major_axis: &[0.3870983098],
    eccentricity: &[0.2056317526, 0.0002040653, -28349e-10, -1805e-10, 23e-10, -2e-10],
    inclination: AngleSeries {
        epoch_deg: 7.00498625,
        rates_arcsec: &[-214.25629, 0.28977, 0.15421, -0.00169, -0.00002],
    },
    mean_longitude: AngleSeries {
        epoch_deg: 252.25090552 - 0.047 / 3600.0,
        rates_arcsec: &[5381016286.88982, -1.92789, 0.00639],
    },
    perihelion_longitude: AngleSeries {
        epoch_deg: 77.45611904,
        rates_arcsec: &[5719.1159, -4.83016, -0.02464, -0.00016, 0.00004],
    },
    ascending_node: AngleSeries {
        epoch_deg: 48.33089304,
        rates_arcsec: &[-4515.21727, -31.79892, -0.71933, 0.01242],
    },
};

const VENUS: ElementSeries = ElementSeries {
    semi_major_axis: &[0.7233298200],
    eccentricity: &[0.0067719164, -0.0004776521, 98127e-10, 4639e-10, 123e-10, -3e-10],
    inclination: AngleSeries {
        epoch_deg: 3.39466189,
        rates_arcsec: &[-30.84437, -11.67836, 0.03338, 0.00269, 0.00004],
    },
    mean_longitude: AngleSeries {
        epoch_deg: 181.97980085,
        rates_arcsec: &[2106641364.33548, 0.59381, -0.00627],
    },
    perihelion_longitude: AngleSeries {
        epoch_deg: 131.56370300,
        rates_arcsec: &[175.48640, -498.48184, -20.50042, -0.72432, 0.00224],
    },
    ascending_node: AngleSeries {
        epoch_deg: 76.67992019,
        rates_arcsec: &[-10008.48154, -51.32614, -0.5891, -0.004665],
    },
};

const EARTH: ElementSeries = ElementSeries {
    semi_major_axis: &[1.0000010178],
    eccentricity: &[0.0167086342, -0.0004203654, -0.0000126734, 1444e-10, -2e-10, 3e-10],
    inclination: AngleSeries {
        epoch_deg: 0.0,
        rates_arcsec: &[469.97289, -3.35053, -0.12374, 0.00027, -0.00001, 0.00001],
    },
    mean_longitude: AngleSeries {
        epoch_deg: 100.46645683,
        rates_arcsec: &[1295977422.83429, -2.04411, -0.00523],
    },
    perihelion_longitude: AngleSeries {
        epoch_deg: 102.93734808,
        rates_arcsec: &[11612.35290, 53.27577, -0.14095, 0.11440, 0.00478],
    },
    ascending_node: AngleSeries {
        epoch_deg: 174.87317577,
        rates_arcsec: &[-8679.27034, 15.34191, 0.00532, -0.03734, -0.00073, 0.00004],
    },
};

const MARS: ElementSeries = ElementSeries {
    semi_major_axis: &[1.5236793419, 3e-10],
    eccentricity: &[0.0934006477, 0.0009048438, -80641e-10, -2519e-10, 124e-10, -10e-10],
    inclination: AngleSeries {
        epoch_deg: 1.84972648,
        rates_arcsec: &[-293.31722, -8.11830, -0.10326, -0.00153, 0.00048],
    },
    mean_longitude: AngleSeries {
        epoch_deg: 355.43299958,
        rates_arcsec: &[689050774.93988, 0.94264, -0.01043],
    },
    perihelion_longitude: AngleSeries {
        epoch_deg: 336.06023395,
        rates_arcsec: &[15980.45908, -62.32800, 1.86464, -0.04603, -0.00164],
    },
    ascending_node: AngleSeries {
        epoch_deg: 49.55809321,
        rates_arcsec: &[-10620.90088, -230.57416, -7.06942, -0.6892, -0.05829],
    },
};

const JUPITER: ElementSeries = ElementSeries {
    semi_major_axis: &[5.2026032092, 19132e-10, -39e-10, -60e-10, -10e-10, 1e-10],
    eccentricity: &[
        0.0484979255,
        0.0016322542,
        -0.0000471366,
        -20063e-10,
        1018e-10,
        -21e-10,
        1e-10,
    ],
    inclination: AngleSeries {
        epoch_deg: 1.30326698,
        rates_arcsec: &[-71.55890, 11.95297, 0.340909, -0.02710, -0.00124, 0.00003],
    },
    mean_longitude: AngleSeries {
        epoch_deg: 34.35151874,
        rates_arcsec: &[109256603.77991, -30.60378, 0.05706, 0.04667, 0.00591, -0.00034],
    },
    perihelion_longitude: AngleSeries {
        epoch_deg: 14.33120687,
        rates_arcsec: &[7758.75163, 259.95938, -16.14731, 0.74704, -0.02087, -0.00016],
    },
    ascending_node: AngleSeries {
        epoch_deg: 100.46440702,
        rates_arcsec: &[6362.03561, 326.52178, -26.18091, -2.10322, 0.04453, 0.01154],
    },
};

const SATURN: ElementSeries = ElementSeries {
    semi_major_axis: &[9.5549091915, -0.0000213896, 444e-10, 670e-10, 110e-10, -7e-10, -1e-10],
    eccentricity: &[
        0.0555481426,
        -0.0034664062,
        -0.0000643639,
        33956e-10,
        -219e-10,
        -3e-10,
        6e-10,
    ],
    inclination: AngleSeries {
        epoch_deg: 2.48887878,
        rates_arcsec: &[91.85195, -17.66225, 0.06105, 0.02638, -0.00152, -0.00012],
    },
    mean_longitude: AngleSeries {
        epoch_deg: 50.07744430,
        rates_arcsec: &[43996098.55732, 75.61614, -0.16618, -0.11484, -0.01452, 0.00083],
    },
    perihelion_longitude: AngleSeries {
        epoch_deg: 93.05723748,
        rates_arcsec: &[20395.49439, 190.25952, 17.68303, 1.23148, 0.10310, 0.00702],
    },
    ascending_node: AngleSeries {
        epoch_deg: 113.66550252,
        rates_arcsec: &[-9240.19942, -66.23743, 1.72778, 0.2699, 0.03610, -0.00248],
    },
};

const URANUS: ElementSeries = ElementSeries {
    semi_major_axis: &[19.2184460618, -3716e-10, 979e-10],
    eccentricity: &[0.0463812221, -0.0002729293, 0.0000078913, 2447e-10, -171e-10],
    inclination: AngleSeries {
        epoch_deg: 0.77319689,
        rates_arcsec: &[-60.72723, 1.25759, 0.05808, 0.00031],
    },
    mean_longitude: AngleSeries {
        epoch_deg: 314.05500511,
        rates_arcsec: &[15424811.93933, -1.75083, 0.02156],
    },
    perihelion_longitude: AngleSeries {
        epoch_deg: 173.00529106,
        rates_arcsec: &[3215.56238, -34.09288, 1.48909, 0.066],
    },
    ascending_node: AngleSeries {
        epoch_deg: 74.00595701,
        rates_arcsec: &[2669.15033, 145.93964, 0.42917, -0.0912],
    },
};

const NEPTUNE: ElementSeries = ElementSeries {
    semi_major_axis: &[30.1103868694, -16635e-10, 686e-10],
    eccentricity: &[0.0094557470, 0.0000603263, 0.0, -483e-10],
    inclination: AngleSeries {
        epoch_deg: 1.76995259,
        rates_arcsec: &[8.12333, 0.08135, -0.00046],
    },
    mean_longitude: AngleSeries {
        epoch_deg: 304.34866548,
        rates_arcsec: &[7865503.20744, 0.21103, -0.00895],
    },
    perihelion_longitude: AngleSeries {
        epoch_deg: 48.12027554,
        rates_arcsec: &[1050.71912, 27.39717],
    },
    ascending_node: AngleSeries {
        epoch_deg: 131.78405702,
        rates_arcsec: &[-221.94322, -0.78728, -0.28070, 0.00049],
    },
};
