//! Fixed three-dimensional vectors in rectangular and spherical form, and 3×3 rotation matrices.
//!
//! Arithmetic is always carried out in rectangular form. Spherical operands are converted on the
//! way in and results come back rectangular; callers reconvert with [`convert`] when they need
//! angles.

use std::ops::{Add, Index, Mul, Neg, Sub};

use crate::constants::TWO_PI;

/// Cartesian `(x, y, z)` vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectangularVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Spherical vector: longitude `phi` in `[0, 2π)`, latitude `theta` in `[-π/2, π/2]`, radius `r`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphericalVector {
    pub phi: f64,
    pub theta: f64,
    pub r: f64,
}

/// A vector in either representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vector {
    Rectangular(RectangularVector),
    Spherical(SphericalVector),
}

/// Conversion target for [`convert`]. Implemented for both concrete representations only.
pub trait FromVector: Sized {
    fn from_vector(vector: Vector) -> Self;
}

/// Convert any vector to the requested representation. Already-matching vectors pass through.
pub fn convert<T: FromVector>(vector: impl Into<Vector>) -> T {
    T::from_vector(vector.into())
}

impl RectangularVector {
    pub const ZERO: RectangularVector = RectangularVector { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn dot(&self, other: &RectangularVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &RectangularVector) -> RectangularVector {
        RectangularVector::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Spherical form. The zero vector maps to `phi = 0, theta = 0, r = 0`.
    pub fn to_spherical(self) -> SphericalVector {
        let rho_sq = self.x * self.x + self.y * self.y;
        let r = (rho_sq + self.z * self.z).sqrt();
        let phi = if self.x == 0.0 && self.y == 0.0 {
            0.0
        } else {
            let phi = self.y.atan2(self.x);
            if phi < 0.0 { phi + TWO_PI } else { phi }
        };
        let rho = rho_sq.sqrt();
        let theta = if self.z == 0.0 && rho == 0.0 {
            0.0
        } else {
            self.z.atan2(rho)
        };
        SphericalVector { phi, theta, r }
    }
}

impl SphericalVector {
    pub const fn new(phi: f64, theta: f64, r: f64) -> Self {
        Self { phi, theta, r }
    }

    /// Unit-radius direction.
    pub const fn direction(phi: f64, theta: f64) -> Self {
        Self { phi, theta, r: 1.0 }
    }

    pub fn to_rectangular(self) -> RectangularVector {
        let cos_theta = self.theta.cos();
        RectangularVector::new(
            self.r * cos_theta * self.phi.cos(),
            self.r * cos_theta * self.phi.sin(),
            self.r * self.theta.sin(),
        )
    }

    /// Same direction with `phi` in `[0, 2π)` and a non-negative radius.
    pub fn normalized(self) -> SphericalVector {
        self.to_rectangular().to_spherical()
    }
}

impl Vector {
    pub fn to_rectangular(self) -> RectangularVector {
        match self {
            Vector::Rectangular(v) => v,
            Vector::Spherical(v) => v.to_rectangular(),
        }
    }

    pub fn to_spherical(self) -> SphericalVector {
        match self {
            Vector::Rectangular(v) => v.to_spherical(),
            Vector::Spherical(v) => v,
        }
    }

    pub fn norm(&self) -> f64 {
        match self {
            Vector::Rectangular(v) => v.norm(),
            Vector::Spherical(v) => v.r.abs(),
        }
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.to_rectangular().dot(&other.to_rectangular())
    }

    pub fn cross(&self, other: &Vector) -> Vector {
        Vector::Rectangular(self.to_rectangular().cross(&other.to_rectangular()))
    }
}

impl Default for Vector {
    fn default() -> Self {
        Vector::Rectangular(RectangularVector::ZERO)
    }
}

impl From<RectangularVector> for Vector {
    fn from(v: RectangularVector) -> Self {
        Vector::Rectangular(v)
    }
}

impl From<SphericalVector> for Vector {
    fn from(v: SphericalVector) -> Self {
        Vector::Spherical(v)
    }
}

impl FromVector for RectangularVector {
    fn from_vector(vector: Vector) -> Self {
        vector.to_rectangular()
    }
}

impl FromVector for SphericalVector {
    fn from_vector(vector: Vector) -> Self {
        vector.to_spherical()
    }
}

impl Add for RectangularVector {
    type Output = RectangularVector;

    fn add(self, rhs: RectangularVector) -> RectangularVector {
        RectangularVector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for RectangularVector {
    type Output = RectangularVector;

    fn sub(self, rhs: RectangularVector) -> RectangularVector {
        RectangularVector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for RectangularVector {
    type Output = RectangularVector;

    fn neg(self) -> RectangularVector {
        RectangularVector::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for RectangularVector {
    type Output = RectangularVector;

    fn mul(self, rhs: f64) -> RectangularVector {
        RectangularVector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::Rectangular(self.to_rectangular() + rhs.to_rectangular())
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::Rectangular(self.to_rectangular() - rhs.to_rectangular())
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        match self {
            Vector::Rectangular(v) => Vector::Rectangular(v * rhs),
            Vector::Spherical(v) => Vector::Rectangular(v.to_rectangular() * rhs),
        }
    }
}

/// Row-major 3×3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix(pub [[f64; 3]; 3]);

impl Matrix {
    pub const IDENTITY: Matrix = Matrix([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Frame rotation about the x axis.
    pub fn rotate_x(angle: f64) -> Matrix {
        let (s, c) = angle.sin_cos();
        Matrix([[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]])
    }

    /// Frame rotation about the y axis.
    pub fn rotate_y(angle: f64) -> Matrix {
        let (s, c) = angle.sin_cos();
        Matrix([[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]])
    }

    /// Frame rotation about the z axis.
    pub fn rotate_z(angle: f64) -> Matrix {
        let (s, c) = angle.sin_cos();
        Matrix([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn transpose(&self) -> Matrix {
        let m = &self.0;
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = m[j][i];
            }
        }
        Matrix(out)
    }

    /// Largest absolute element-wise difference from `other`.
    pub fn max_abs_diff(&self, other: &Matrix) -> f64 {
        let mut max = 0.0_f64;
        for i in 0..3 {
            for j in 0..3 {
                max = max.max((self.0[i][j] - other.0[i][j]).abs());
            }
        }
        max
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix::IDENTITY
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.0[row][col]
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.0[i][k] * rhs.0[k][j]).sum();
            }
        }
        Matrix(out)
    }
}

impl Mul<RectangularVector> for Matrix {
    type Output = RectangularVector;

    fn mul(self, v: RectangularVector) -> RectangularVector {
        let m = &self.0;
        RectangularVector::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }
}

impl Mul<SphericalVector> for Matrix {
    type Output = RectangularVector;

    fn mul(self, v: SphericalVector) -> RectangularVector {
        self * v.to_rectangular()
    }
}

impl Mul<Vector> for Matrix {
    type Output = Vector;

    fn mul(self, v: Vector) -> Vector {
        Vector::Rectangular(self * v.to_rectangular())
    }
}

/// Row vector times matrix, i.e. `Mᵀ·v`.
impl Mul<Matrix> for RectangularVector {
    type Output = RectangularVector;

    fn mul(self, m: Matrix) -> RectangularVector {
        m.transpose() * self
    }
}

impl Mul<Matrix> for Vector {
    type Output = Vector;

    fn mul(self, m: Matrix) -> Vector {
        Vector::Rectangular(self.to_rectangular() * m)
    }
}

