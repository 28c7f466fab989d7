//! Piecewise-linear interpolation and trapezoidal quadrature on plain `f64` grids.

use thiserror::Error;

/// Errors that can occur while building a [`LinearInterpolant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterpError {
    /// Fewer than two points were supplied.
    #[error("at least two points are required, got {count}")]
    TooFewPoints { count: usize },

    /// The abscissae and ordinates have different lengths.
    #[error("length mismatch: {xs} abscissae, {ys} ordinates")]
    LengthMismatch { xs: usize, ys: usize },

    /// The abscissae are not strictly ascending (or contain NaN).
    #[error("abscissae must be strictly ascending (violated at index {index})")]
    NotAscending { index: usize },
}

/// Piecewise-linear interpolant with linear extrapolation past either end.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearInterpolant {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl LinearInterpolant {
    /// Builds an interpolant through `(xs[i], ys[i])`.
    ///
    /// # Errors
    ///
    /// Returns an [`InterpError`] if fewer than two points are given, the
    /// slices differ in length, or `xs` is not strictly ascending.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(InterpError::TooFewPoints { count: xs.len() });
        }
        if let Some(index) = xs.windows(2).position(|w| !(w[1] > w[0])) {
            return Err(InterpError::NotAscending { index: index + 1 });
        }
        Ok(Self { xs, ys })
    }

    /// Evaluates the interpolant at `x`.
    ///
    /// Outside the sampled range the first or last segment is extended.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        let last = self.xs.len() - 1;
        // Index of the segment [xs[i], xs[i + 1]] used for x.
        let i = match self.xs.partition_point(|&xi| xi <= x) {
            0 => 0,
            p if p > last => last - 1,
            p => p - 1,
        };
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }

    /// The sampled abscissae.
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }
}

/// Returns `n` evenly spaced values from `start` to `end`, both included.
///
/// Returns `[start]` when `n == 1` and an empty vector when `n == 0`.
#[must_use]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Integrates `ys` over `xs` with the trapezoidal rule.
///
/// Extra trailing values in the longer slice are ignored.
#[must_use]
pub fn trapezoid(xs: &[f64], ys: &[f64]) -> f64 {
    xs.windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| 0.5 * (y[0] + y[1]) * (x[1] - x[0]))
        .sum()
}
