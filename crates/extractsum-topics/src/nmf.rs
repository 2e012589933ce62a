//! Non-negative matrix factorization by multiplicative updates.
//!
//! Minimizes ||A - WH||_F with the Lee-Seung update rules. Each update
//! keeps W and H non-negative and never increases the objective, so the
//! recorded error trace is non-increasing up to rounding.

use extractsum_core::errors::DataError;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Guards the update denominators against division by zero.
const EPSILON: f64 = 1e-10;

/// Factorization settings for one model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NmfParams {
    /// Requested topic count; capped at min(rows, cols).
    pub components: usize,
    pub max_iter: usize,
    /// Stop once an iteration improves the error by less than this
    /// fraction of the initial error.
    pub tolerance: f64,
    pub seed: u64,
}

#[derive(Debug, Clone)]
pub struct Factorization {
    pub w: Array2<f64>,
    pub h: Array2<f64>,
    /// Frobenius error after each iteration.
    pub error_trace: Vec<f64>,
    pub iterations: usize,
}

impl Factorization {
    pub fn components(&self) -> usize {
        self.h.nrows()
    }

    pub fn final_error(&self) -> Option<f64> {
        self.error_trace.last().copied()
    }
}

/// Factorize the non-negative matrix `a` into W (rows x K) and H (K x cols).
///
/// `model` names the matrix in errors and logs. Deterministic for a fixed seed.
pub fn factorize(a: &Array2<f64>, params: &NmfParams, model: &str) -> Result<Factorization, DataError> {
    let (rows, cols) = a.dim();
    if rows == 0 || cols == 0 {
        return Err(DataError::EmptyMatrix {
            model: model.to_string(),
            rows,
            cols,
        });
    }
    if params.components == 0 {
        return Err(DataError::FactorizationFailed {
            model: model.to_string(),
            reason: "requested zero components".to_string(),
        });
    }
    if a.iter().any(|v| *v < 0.0 || !v.is_finite()) {
        return Err(DataError::FactorizationFailed {
            model: model.to_string(),
            reason: "input has negative or non-finite entries".to_string(),
        });
    }

    let k = params.components.min(rows).min(cols);
    let mean = a.mean().unwrap_or(0.0);
    let scale = (mean / k as f64).sqrt();

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut w = Array2::from_shape_fn((rows, k), |_| rng.gen::<f64>() * scale);
    let mut h = Array2::from_shape_fn((k, cols), |_| rng.gen::<f64>() * scale);

    let initial_error = frobenius_error(a, &w, &h);
    let mut error_trace = Vec::with_capacity(params.max_iter.min(1024));
    let mut previous = initial_error;

    for iteration in 0..params.max_iter {
        // H <- H * (W^T A) / (W^T W H)
        let wt = w.t();
        let numer = wt.dot(a);
        let denom = wt.dot(&w).dot(&h) + EPSILON;
        h *= &(numer / denom);

        // W <- W * (A H^T) / (W H H^T)
        let ht = h.t();
        let numer = a.dot(&ht);
        let denom = w.dot(&h.dot(&ht)) + EPSILON;
        w *= &(numer / denom);

        let error = frobenius_error(a, &w, &h);
        error_trace.push(error);

        if initial_error <= EPSILON || (previous - error) / initial_error < params.tolerance {
            debug!(model, iteration, error, "factorization converged");
            break;
        }
        previous = error;
    }

    let iterations = error_trace.len();
    Ok(Factorization {
        w,
        h,
        error_trace,
        iterations,
    })
}

/// ||A - WH||_F
pub fn frobenius_error(a: &Array2<f64>, w: &Array2<f64>, h: &Array2<f64>) -> f64 {
    let residual = a - &w.dot(h);
    residual.iter().map(|v| v * v).sum::<f64>().sqrt()
}
