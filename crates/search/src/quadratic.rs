//! Three-point quadratic interpolation and root finding.

/// Point in the normalized sample frame, `x ∈ [-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Roots of the parabola through `(-1, y₋)`, `(0, y₀)`, `(1, y₊)` that fall inside `[-1, 1]`.
///
/// `extremum` is `None` when the three samples are collinear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadraticResult {
    None {
        extremum: Option<Point>,
    },
    Root {
        extremum: Option<Point>,
        root: f64,
    },
    Roots {
        extremum: Point,
        root1: f64,
        root2: f64,
    },
}

impl QuadraticResult {
    pub fn extremum(&self) -> Option<Point> {
        match *self {
            QuadraticResult::None { extremum } | QuadraticResult::Root { extremum, .. } => extremum,
            QuadraticResult::Roots { extremum, .. } => Some(extremum),
        }
    }
}

/// Fit `y = a·x² + b·x + c` through three equally spaced samples and report the roots in range.
///
/// With a single root in range the left candidate is replaced by the right one when it lies
/// below −1. Two roots are returned in ascending order.
pub fn find_quadratic_roots(y_minus: f64, y0: f64, y_plus: f64) -> QuadraticResult {
    let a = 0.5 * (y_plus + y_minus) - y0;
    let b = 0.5 * (y_plus - y_minus);
    let c = y0;

    if a == 0.0 {
        if b == 0.0 {
            return QuadraticResult::None { extremum: None };
        }
        let root = -c / b;
        return if root.abs() <= 1.0 {
            QuadraticResult::Root {
                extremum: None,
                root,
            }
        } else {
            QuadraticResult::None { extremum: None }
        };
    }

    let xe = -b / (2.0 * a);
    let extremum = Point {
        x: xe,
        y: (a * xe + b) * xe + c,
    };
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return QuadraticResult::None {
            extremum: Some(extremum),
        };
    }

    let dx = 0.5 * discriminant.sqrt() / a.abs();
    let mut root1 = xe - dx;
    let root2 = xe + dx;
    let count = [root1, root2].iter().filter(|r| r.abs() <= 1.0).count();
    if root1 < -1.0 {
        root1 = root2;
    }
    match count {
        0 => QuadraticResult::None {
            extremum: Some(extremum),
        },
        1 => QuadraticResult::Root {
            extremum: Some(extremum),
            root: root1,
        },
        _ => QuadraticResult::Roots {
            extremum,
            root1,
            root2,
        },
    }
}
