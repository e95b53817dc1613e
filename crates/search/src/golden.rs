//! Golden-section search for the extremum of a unimodal function.

use log::{trace, warn};

use crate::SearchError;

/// `(1 + √5) / 2`.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Best estimate reached by a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    /// Midpoint of the final bracket.
    pub x: f64,
    /// Whether the bracket shrank below the requested precision.
    pub converged: bool,
    pub steps: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Goal {
    Max,
    Min,
}

/// Bracket `[a, b]`, target precision, and step budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenSectionSearch {
    pub a: f64,
    pub b: f64,
    pub precision: f64,
    pub max_steps: usize,
}

impl GoldenSectionSearch {
    pub fn new(a: f64, b: f64, precision: f64, max_steps: usize) -> Self {
        Self {
            a,
            b,
            precision,
            max_steps,
        }
    }

    /// Locate the maximum of `f`. The two interior evaluations of each step run in parallel.
    pub fn find_max<F, E>(&self, f: F) -> Result<Extremum, E>
    where
        F: Fn(f64) -> Result<f64, E> + Sync,
        E: From<SearchError> + Send,
    {
        self.search(Goal::Max, &f)
    }

    /// Locate the minimum of `f`.
    pub fn find_min<F, E>(&self, f: F) -> Result<Extremum, E>
    where
        F: Fn(f64) -> Result<f64, E> + Sync,
        E: From<SearchError> + Send,
    {
        self.search(Goal::Min, &f)
    }

    fn validate(&self) -> Result<(), SearchError> {
        if !(self.a.is_finite() && self.b.is_finite()) || self.a >= self.b {
            return Err(SearchError::InvalidInterval {
                a: self.a,
                b: self.b,
            });
        }
        if !(self.precision.is_finite() && self.precision > 0.0) {
            return Err(SearchError::InvalidPrecision(self.precision));
        }
        Ok(())
    }

    fn search<F, E>(&self, goal: Goal, f: &F) -> Result<Extremum, E>
    where
        F: Fn(f64) -> Result<f64, E> + Sync,
        E: From<SearchError> + Send,
    {
        self.validate()?;
        let (mut a, mut b) = (self.a, self.b);
        let mut steps = 0;
        loop {
            steps += 1;
            let d = (b - a) / GOLDEN_RATIO;
            let x1 = b - d;
            let x2 = a + d;
            let (y1, y2) = rayon::join(|| f(x1), || f(x2));
            let (y1, y2) = (y1?, y2?);
            let keep_upper = match goal {
                Goal::Max => y1 <= y2,
                Goal::Min => y1 >= y2,
            };
            if keep_upper {
                a = x1;
            } else {
                b = x2;
            }
            trace!("golden step {steps}: [{a}, {b}]");
            if (a - b).abs() <= self.precision || steps >= self.max_steps {
                break;
            }
        }

        let converged = (a - b).abs() <= self.precision;
        if !converged {
            warn!(
                "golden-section {goal:?} search stopped after {steps} steps with bracket width {}",
                (b - a).abs()
            );
        }
        Ok(Extremum {
            x: (a + b) / 2.0,
            converged,
            steps,
        })
    }
}
