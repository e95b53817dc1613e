/// IAU 1980 series: Delaunay multipliers `[l, l', F, D, Ω]`, then `Δψ`, `Δψ·T/10`, `Δε`, `Δε·T/10`
/// in units of 0.0001″. The two leading Ω terms are applied separately.
pub(crate) const IAU1980_TERMS: [[i32; 9]; 105] = [
    [0, 0, 0, 0, 2, 2062, 2, -895, 5],
    [-2, 0, 2, 0, 1, 46, 0, -24, 0],
    [2, 0, -2, 0, 0, 11, 0, 0, 0],
    [-2, 0, 2, 0, 2, -3, 0, 1, 0],
    [1, -1, 0, -1, 0, -3, 0, 0, 0],
    [0, -2, 2, -2, 1, -2, 0, 1, 0],
    [2, 0, -2, 0, 1, 1, 0, 0, 0],
    [0, 0, 2, -2, 2, -13187, -16, 5736, -31],
    [0, 1, 0, 0, 0, 1426, -34, 54, -1],
    [0, 1, 2, -2, 2, -517, 12, 224, -6],
    [0, -1, 2, -2, 2, 217, -5, -95, 3],
    [0, 0, 2, -2, 1, 129, 1, -70, 0],
    [2, 0, 0, -2, 0, 48, 0, 1, 0],
    [0, 0, 2, -2, 0, -22, 0, 0, 0],
    [0, 2, 0, 0, 0, 17, -1, 0, 0],
    [0, 1, 0, 0, 1, -15, 0, 9, 0],
    [0, 2, 2, -2, 2, -16, 1, 7, 0],
    [0, -1, 0, 0, 1, -12, 0, 6, 0],
    [-2, 0, 0, 2, 1, -6, 0, 3, 0],
    [0, -1, 2, -2, 1, -5, 0, 3, 0],
    [2, 0, 0, -2, 1, 4, 0, -2, 0],
    [0, 1, 2, -2, 1, 4, 0, -2, 0],
    [1, 0, 0, -1, 0, -4, 0, 0, 0],
    [2, 1, 0, -2, 0, 1, 0, 0, 0],
    [0, 0, -2, 2, 1, 1, 0, 0, 0],
    [0, 1, -2, 2, 0, -1, 0, 0, 0],
    [0, 1, 0, 0, 2, 1, 0, 0, 0],
    [-1, 0, 0, 1, 1, 1, 0, 0, 0],
    [0, 1, 2, -2, 0, -1, 0, 0, 0],
    [0, 0, 2, 0, 2, -2274, -2, 977, -5],
    [1, 0, 0, 0, 0, 712, 1, -7, 0],
    [0, 0, 2, 0, 1, -386, -4, 200, 0],
    [1, 0, 2, 0, 2, -301, 0, 129, -1],
    [1, 0, 0, -2, 0, -158, 0, -1, 0],
    [-1, 0, 2, 0, 2, 123, 0, -53, 0],
    [0, 0, 0, 2, 0, 63, 0, -2, 0],
    [1, 0, 0, 0, 1, 63, 1, -33, 0],
    [-1, 0, 0, 0, 1, -58, -1, 32, 0],
    [-1, 0, 2, 2, 2, -59, 0, 26, 0],
    [1, 0, 2, 0, 1, -51, 0, 27, 0],
    [0, 0, 2, 2, 2, -38, 0, 16, 0],
    [2, 0, 0, 0, 0, 29, 0, -1, 0],
    [1, 0, 2, -2, 2, 29, 0, -12, 0],
    [2, 0, 2, 0, 2, -31, 0, 13, 0],
    [0, 0, 2, 0, 0, 26, 0, -1, 0],
    [-1, 0, 2, 0, 1, 21, 0, -10, 0],
    [-1, 0, 0, 2, 1, 16, 0, -8, 0],
    [1, 0, 0, -2, 1, -13, 0, 7, 0],
    [-1, 0, 2, 2, 1, -10, 0, 5, 0],
    [1, 1, 0, -2, 0, -7, 0, 0, 0],
    [0, 1, 2, 0, 2, 7, 0, -3, 0],
    [0, -1, 2, 0, 2, -7, 0, 3, 0],
    [1, 0, 2, 2, 2, -8, 0, 3, 0],
    [1, 0, 0, 2, 0, 6, 0, 0, 0],
    [2, 0, 2, -2, 2, 6, 0, -3, 0],
    [0, 0, 0, 2, 1, -6, 0, 3, 0],
    [0, 0, 2, 2, 1, -7, 0, 3, 0],
    [1, 0, 2, -2, 1, 6, 0, -3, 0],
    [0, 0, 0, -2, 1, -5, 0, 3, 0],
    [1, -1, 0, 0, 0, 5, 0, 0, 0],
    [2, 0, 2, 0, 1, -5, 0, 3, 0],
    [0, 1, 0, -2, 0, -4, 0, 0, 0],
    [1, 0, -2, 0, 0, 4, 0, 0, 0],
    [0, 0, 0, 1, 0, -4, 0, 0, 0],
    [1, 1, 0, 0, 0, -3, 0, 0, 0],
    [1, 0, 2, 0, 0, 3, 0, 0, 0],
    [1, -1, 2, 0, 2, -3, 0, 1, 0],
    [-1, -1, 2, 2, 2, -3, 0, 1, 0],
    [-2, 0, 0, 0, 1, -2, 0, 1, 0],
    [3, 0, 2, 0, 2, -3, 0, 1, 0],
    [0, -1, 2, 2, 2, -3, 0, 1, 0],
    [1, 1, 2, 0, 2, 2, 0, -1, 0],
    [-1, 0, 2, -2, 1, -2, 0, 1, 0],
    [2, 0, 0, 0, 1, 2, 0, -1, 0],
    [1, 0, 0, 0, 2, -2, 0, 1, 0],
    [3, 0, 0, 0, 0, 2, 0, 0, 0],
    [0, 0, 2, 1, 2, 2, 0, -1, 0],
    [-1, 0, 0, 0, 2, 1, 0, -1, 0],
    [1, 0, 0, -4, 0, -1, 0, 0, 0],
    [-2, 0, 2, 2, 2, 1, 0, -1, 0],
    [-1, 0, 2, 4, 2, -2, 0, 1, 0],
    [2, 0, 0, -4, 0, -1, 0, 0, 0],
    [1, 1, 2, -2, 2, 1, 0, -1, 0],
    [1, 0, 2, 2, 1, -1, 0, 1, 0],
    [-2, 0, 2, 4, 2, -1, 0, 1, 0],
    [-1, 0, 4, 0, 2, 1, 0, 0, 0],
    [1, -1, 0, -2, 0, 1, 0, 0, 0],
    [2, 0, 2, -2, 1, 1, 0, -1, 0],
    [2, 0, 2, 2, 2, -1, 0, 0, 0],
    [1, 0, 0, 2, 1, -1, 0, 0, 0],
    [0, 0, 4, -2, 2, 1, 0, 0, 0],
    [3, 0, 2, -2, 2, 1, 0, 0, 0],
    [1, 0, 2, -2, 0, -1, 0, 0, 0],
    [0, 1, 2, 0, 1, 1, 0, 0, 0],
    [-1, -1, 0, 2, 1, 1, 0, 0, 0],
    [0, 0, -2, 0, 1, -1, 0, 0, 0],
    [0, 0, 2, -1, 2, -1, 0, 0, 0],
    [0, 1, 0, 2, 0, -1, 0, 0, 0],
    [1, 0, -2, -2, 0, -1, 0, 0, 0],
    [0, -1, 2, 0, 1, -1, 0, 0, 0],
    [1, 1, 0, -2, 1, -1, 0, 0, 0],
    [1, 0, -2, 2, 0, -1, 0, 0, 0],
    [2, 0, 0, 2, 0, 1, 0, 0, 0],
    [0, 0, 2, 4, 2, -1, 0, 0, 0],
    [0, 1, 0, 1, 0, 1, 0, 0, 0],
];

/// Leading luni-solar terms of the IAU 2000B series: Delaunay multipliers `[l, l', F, D, Ω]`,
/// then `Δψ sin`, `Δψ sin·T`, `Δψ cos`, `Δε cos`, `Δε cos·T`, `Δε sin` in units of 0.1 µas.
pub(crate) const IAU2000_TERMS: [([i8; 5], [f64; 6]); 40] = [
    ([0, 0, 0, 0, 1], [-172064161.0, -174666.0, 33386.0, 92052331.0, 9086.0, 15377.0]),
    ([0, 0, 2, -2, 2], [-13170906.0, -1675.0, -13696.0, 5730336.0, -3015.0, -4587.0]),
    ([0, 0, 2, 0, 2], [-2276413.0, -234.0, 2796.0, 978459.0, -485.0, 1374.0]),
    ([0, 0, 0, 0, 2], [2074554.0, 207.0, -698.0, -897492.0, 470.0, -291.0]),
    ([0, 1, 0, 0, 0], [1475877.0, -3633.0, 11817.0, 73871.0, -184.0, -1924.0]),
    ([0, 1, 2, -2, 2], [-516821.0, 1226.0, -524.0, 224386.0, -677.0, -174.0]),
    ([1, 0, 0, 0, 0], [711159.0, 73.0, -872.0, -6750.0, 0.0, 358.0]),
    ([0, 0, 2, 0, 1], [-387298.0, -367.0, 380.0, 200728.0, 18.0, 318.0]),
    ([1, 0, 2, 0, 2], [-301461.0, -36.0, 816.0, 129025.0, -63.0, 367.0]),
    ([0, -1, 2, -2, 2], [215829.0, -494.0, 111.0, -95929.0, 299.0, 132.0]),
    ([0, 0, 2, -2, 1], [128227.0, 137.0, 181.0, -68982.0, -9.0, 39.0]),
    ([-1, 0, 2, 0, 2], [123457.0, 11.0, 19.0, -53311.0, 32.0, -4.0]),
    ([-1, 0, 0, 2, 0], [156994.0, 10.0, -168.0, -1235.0, 0.0, 82.0]),
    ([1, 0, 0, 0, 1], [63110.0, 63.0, 27.0, -33228.0, 0.0, -9.0]),
    ([-1, 0, 0, 0, 1], [-57976.0, -63.0, -189.0, 31429.0, 0.0, -75.0]),
    ([-1, 0, 2, 2, 2], [-59641.0, -11.0, 149.0, 25543.0, -11.0, 66.0]),
    ([1, 0, 2, 0, 1], [-51613.0, -42.0, 129.0, 26366.0, 0.0, 78.0]),
    ([-2, 0, 2, 0, 1], [45893.0, 50.0, 31.0, -24236.0, -10.0, 20.0]),
    ([0, 0, 0, 2, 0], [63384.0, 11.0, -150.0, -1220.0, 0.0, 29.0]),
    ([0, 0, 2, 2, 2], [-38571.0, -1.0, 158.0, 16452.0, -11.0, 68.0]),
    ([0, -2, 2, -2, 2], [32481.0, 0.0, 0.0, -13870.0, 0.0, 0.0]),
    ([-2, 0, 0, 2, 0], [-47722.0, 0.0, -18.0, 477.0, 0.0, -25.0]),
    ([2, 0, 2, 0, 2], [-31046.0, -1.0, 131.0, 13238.0, -11.0, 59.0]),
    ([1, 0, 2, -2, 2], [28593.0, 0.0, -1.0, -12338.0, 10.0, -3.0]),
    ([-1, 0, 2, 0, 1], [20441.0, 21.0, 10.0, -10758.0, 0.0, -3.0]),
    ([2, 0, 0, 0, 0], [29243.0, 0.0, -74.0, -609.0, 0.0, 13.0]),
    ([0, 0, 2, 0, 0], [25887.0, 0.0, -66.0, -550.0, 0.0, 11.0]),
    ([0, 1, 0, 0, 1], [-14053.0, -25.0, 79.0, 8551.0, -2.0, -45.0]),
    ([-1, 0, 0, 2, 1], [15164.0, 10.0, 11.0, -8001.0, 0.0, -1.0]),
    ([0, 2, 2, -2, 2], [-15794.0, 72.0, -16.0, 6850.0, -42.0, -5.0]),
    ([0, 0, -2, 2, 0], [21783.0, 0.0, 13.0, -167.0, 0.0, 13.0]),
    ([1, 0, 0, -2, 1], [-12873.0, -10.0, -37.0, 6953.0, 0.0, -14.0]),
    ([0, -1, 0, 0, 1], [-12654.0, 11.0, 63.0, 6415.0, 0.0, 26.0]),
    ([-1, 0, 2, 2, 1], [-10204.0, 0.0, 25.0, 5222.0, 0.0, 15.0]),
    ([0, 2, 0, 0, 0], [16707.0, -85.0, -10.0, 168.0, -1.0, 10.0]),
    ([1, 0, 2, 2, 2], [-7691.0, 0.0, 44.0, 3268.0, 0.0, 19.0]),
    ([-2, 0, 2, 0, 0], [-11024.0, 0.0, -14.0, 104.0, 0.0, 2.0]),
    ([0, 1, 2, 0, 2], [7566.0, -21.0, -11.0, -3250.0, 0.0, -5.0]),
    ([0, 0, 2, 2, 1], [-6637.0, -11.0, 25.0, 3353.0, 0.0, 14.0]),
    ([0, -1, 2, 0, 2], [-7141.0, 21.0, 8.0, 3070.0, 0.0, 4.0]),
];

/// Vondrák et al. (2011) equatorial precession: polynomial part of `ψ_A`, `ω_A`, `χ_A` (″).
pub(crate) const VONDRAK_PRECESSION_POLY: [[f64; 4]; 3] = [
    [8473.343527, 5042.7980307, -0.00740913, 289e-9],
    [84283.175915, -0.4436568, 0.00000146, 151e-9],
    [-19.657270, 0.0790159, 0.00001472, -61e-9],
];

/// Periodic part of `ψ_A` and `ω_A`: period (centuries), `ψ cos`, `ω cos`, `ψ sin`, `ω sin`.
pub(crate) const VONDRAK_PRECESSION_XY: [[f64; 5]; 14] = [
    [402.90, -22206.325946, 1267.727824, -3243.236469, -8571.476251],
    [256.75, 12236.649447, 1702.324248, -3969.723769, 5309.796459],
    [292.00, -1589.008343, -2970.553839, 7099.207893, -610.393953],
    [537.22, 2482.103195, 693.790312, -1903.696711, 923.201931],
    [241.45, 150.322920, -14.724451, 146.435014, 3.759055],
    [375.22, -13.632066, -516.649401, 1300.630106, -40.691114],
    [157.87, 389.437420, -356.794454, 1727.498039, 80.437484],
    [274.20, 2031.433792, -129.552058, 299.854055, 807.300668],
    [203.00, 363.748303, 256.129314, -1217.125982, 83.712326],
    [440.00, -896.747562, 190.266114, -471.367487, -368.654854],
    [170.72, -926.995700, 95.103991, -441.682145, -191.881064],
    [713.37, 37.070667, -332.907067, -86.169171, -4.263770],
    [313.00, -597.682468, 131.337633, -308.320429, -270.353691],
    [128.38, 66.282812, 82.731919, -422.815629, 11.602861],
];

/// Periodic part of `χ_A`: period (centuries), cos, sin.
pub(crate) const VONDRAK_PRECESSION_Z: [[f64; 3]; 14] = [
    [402.90, -13765.924050, -2206.967126],
    [256.75, 13511.858383, -4186.752711],
    [292.00, -1455.229106, 6737.949677],
    [537.22, 1054.394467, -856.922846],
    [375.22, -112.300144, 957.149088],
    [157.87, 202.769908, 1709.440735],
    [274.20, 1936.050095, 154.425505],
    [202.00, 327.517465, -1049.071786],
    [440.00, -655.484214, -243.520976],
    [170.72, -891.898637, -406.539008],
    [315.00, -494.780332, -301.504189],
    [136.32, 585.492621, 41.348740],
    [128.38, -333.322021, -446.656435],
    [490.00, 110.512834, 142.525186],
];

/// Vondrák et al. (2011) mean obliquity: polynomial (″).
pub(crate) const VONDRAK_OBLIQUITY_POLY: [f64; 4] = [84028.206305, 0.3624445, -0.00004039, -110e-9];

/// Periodic part of the Vondrák obliquity: period (centuries), cos, sin.
pub(crate) const VONDRAK_OBLIQUITY_PERIODIC: [[f64; 3]; 10] = [
    [409.90, 753.872780, -1704.720302],
    [396.15, -247.805823, -862.308358],
    [537.22, 379.471484, 447.832178],
    [402.90, -53.880558, -889.571909],
    [417.15, -90.109153, 190.402846],
    [288.92, -353.600190, -56.564991],
    [4043.00, -63.115353, -296.222622],
    [306.00, -28.248187, -75.859952],
    [277.00, 17.703387, 67.473503],
    [203.00, 38.911307, 3.014055],
];

/// Ecliptic precession series, highest power first, argument in millennia:
/// `p_A` rate (″), node longitude `W` (rad), inclination `z` (rad).
pub(crate) struct EclipticPrecessionSeries {
    pub p: &'static [f64],
    pub node: &'static [f64],
    pub inclination: &'static [f64],
}

const NODE_WILLIAMS: [f64; 11] = [
    6.6402e-16, -2.69151e-15, -1.547021e-12, 7.521313e-12, 1.9e-10, -3.54e-9, -1.8103e-7, 1.26e-7,
    7.436169e-5, -0.04207794833, 3.052115282424,
];
const INCLINATION_WILLIAMS: [f64; 11] = [
    1.2147e-16, 7.3759e-17, -8.26287e-14, 2.503410e-13, 2.4650839e-11, -5.4000441e-11,
    1.32115526e-9, -6.012e-7, -1.62442e-5, 0.00227850649, 0.0,
];
const NODE_LASKAR: [f64; 11] = [
    6.6402e-16, -2.69151e-15, -1.547021e-12, 7.521313e-12, 6.3190131e-10, -3.48388152e-9,
    -1.813065896e-7, 2.75036225e-8, 7.4394531426e-5, -0.042078604317, 3.052112654975,
];
const INCLINATION_LASKAR: [f64; 11] = [
    1.2147e-16, 7.3759e-17, -8.26287e-14, 2.503410e-13, 2.4650839e-11, -5.4000441e-11,
    1.32115526e-9, -5.998737027e-7, -1.6242797091e-5, 0.002278495537, 0.0,
];

pub(crate) const WILLIAMS_1994: EclipticPrecessionSeries = EclipticPrecessionSeries {
    p: &[-8.66e-10, -4.759e-8, 2.424e-7, 1.3095e-5, 1.7451e-4, -1.8055e-3, -0.235316, 0.076, 110.5407, 50287.70000],
    node: &NODE_WILLIAMS,
    inclination: &INCLINATION_WILLIAMS,
};

pub(crate) const JPL_DE4XX: EclipticPrecessionSeries = EclipticPrecessionSeries {
    p: &[-8.66e-10, -4.759e-8, 2.424e-7, 1.3095e-5, 1.7451e-4, -1.8055e-3, -0.235316, 0.076, 110.5414, 50287.91959],
    node: &NODE_WILLIAMS,
    inclination: &INCLINATION_WILLIAMS,
};

pub(crate) const SIMON_1994: EclipticPrecessionSeries = EclipticPrecessionSeries {
    p: &[-8.66e-10, -4.759e-8, 2.424e-7, 1.3095e-5, 1.7451e-4, -1.8055e-3, -0.235316, 0.07732, 111.2022, 50288.200],
    node: &[
        6.6402e-16, -2.69151e-15, -1.547021e-12, 7.521313e-12, 1.9e-10, -3.54e-9, -1.8103e-7, 2.579e-8,
        7.4379679e-5, -0.0420782900, 3.0521126906,
    ],
    inclination: &[
        1.2147e-16, 7.3759e-17, -8.26287e-14, 2.503410e-13, 2.4650839e-11, -5.4000441e-11,
        1.32115526e-9, -5.99908e-7, -1.624383e-5, 0.002278492868, 0.0,
    ],
};

pub(crate) const LASKAR_1986: EclipticPrecessionSeries = EclipticPrecessionSeries {
    p: &[-8.66e-10, -4.759e-8, 2.424e-7, 1.3095e-5, 1.7451e-4, -1.8055e-3, -0.235316, 0.07732, 111.1971, 50290.966],
    node: &NODE_LASKAR,
    inclination: &INCLINATION_LASKAR,
};

pub(crate) const IAU_1976: EclipticPrecessionSeries = EclipticPrecessionSeries {
    p: &[0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.006, 111.113, 50290.966],
    node: &NODE_LASKAR,
    inclination: &INCLINATION_LASKAR,
};
