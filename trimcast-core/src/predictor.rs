//! Ordinary least-squares weight loss predictor
//!
//! target = β0 + β1·Age + β2·Exercise + β3·Water + β4·Sleep + β5·Calories
//!
//! Fit:
//!   1. Eigendecompose the Gram matrix of the centered features to get its rank.
//!   2. Full rank: `linfa_linear::LinearRegression` with intercept.
//!   3. Rank deficient (constant or collinear columns): minimum-norm solution
//!      β = Σ vₖ·(vₖᵀXᵀy)/λₖ over eigenpairs with λₖ above the cutoff, and
//!      β0 = ȳ - Σ βj·x̄j.
//!
//! The model is refit from the full dataset on every call; nothing is cached.

use linfa::traits::Fit;
use linfa_linalg::eigh::Eigh;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2, Axis};

use crate::dataset::Dataset;
use crate::error::{Result, TrimcastError};
use crate::models::{UserQuery, FEATURE_COLUMNS, TARGET_COLUMN};

/// Number of parameters including the intercept.
const PARAMETERS: usize = FEATURE_COLUMNS.len() + 1;

/// Eigenvalues below this fraction of the largest count as zero.
const RANK_TOLERANCE: f64 = 1e-12;

/// Fitted coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    pub intercept: f64,
    /// Slopes in `FEATURE_COLUMNS` order.
    pub coefficients: [f64; 5],
}

impl LinearModel {
    /// Fit on every row of `dataset`.
    pub fn fit(dataset: &Dataset) -> Result<Self> {
        let (x, y) = design_matrix(dataset)?;
        let model = fit_least_squares(x, y)?;
        tracing::debug!(
            "Fitted OLS model: intercept={} coefficients={:?}",
            model.intercept,
            model.coefficients
        );
        Ok(model)
    }

    pub fn predict(&self, query: &UserQuery) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(query.features())
                .map(|(b, x)| b * x)
                .sum::<f64>()
    }
}

/// Refit on `dataset` and evaluate the model on `query`.
pub fn fit_and_predict(dataset: &Dataset, query: &UserQuery) -> Result<f64> {
    let model = LinearModel::fit(dataset)?;
    Ok(model.predict(query))
}

/// Extract the feature matrix and target vector, rejecting any cell that is
/// missing, non-numeric or non-finite.
fn design_matrix(dataset: &Dataset) -> Result<(Array2<f64>, Array1<f64>)> {
    let rows = dataset.len();
    if rows < PARAMETERS {
        return Err(TrimcastError::Training(format!(
            "need at least {} rows to fit {} parameters, dataset has {}",
            PARAMETERS, PARAMETERS, rows
        )));
    }

    let feature_idx: Vec<usize> = FEATURE_COLUMNS
        .iter()
        .map(|name| column(dataset, name))
        .collect::<Result<_>>()?;
    let target_idx = column(dataset, TARGET_COLUMN)?;

    let mut x = Array2::<f64>::zeros((rows, FEATURE_COLUMNS.len()));
    let mut y = Array1::<f64>::zeros(rows);

    for row in 0..rows {
        for (j, (&idx, name)) in feature_idx.iter().zip(FEATURE_COLUMNS).enumerate() {
            x[[row, j]] = numeric_cell(dataset, row, idx, name)?;
        }
        y[row] = numeric_cell(dataset, row, target_idx, TARGET_COLUMN)?;
    }

    Ok((x, y))
}

fn column(dataset: &Dataset, name: &str) -> Result<usize> {
    dataset.column_index(name).ok_or_else(|| TrimcastError::Schema {
        missing: vec![name.to_string()],
    })
}

fn numeric_cell(dataset: &Dataset, row: usize, column: usize, name: &str) -> Result<f64> {
    let raw = dataset.cell(row, column).unwrap_or("").trim();
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TrimcastError::Training(format!(
            "row {}: column {} has non-numeric value {:?}",
            row + 1,
            name,
            raw
        ))),
    }
}

fn fit_least_squares(x: Array2<f64>, y: Array1<f64>) -> Result<LinearModel> {
    let x_mean = x
        .mean_axis(Axis(0))
        .ok_or_else(|| TrimcastError::Training("empty dataset".to_string()))?;
    let y_mean = y.mean().unwrap_or(0.0);
    let x_centered = &x - &x_mean;
    let y_centered = &y - y_mean;

    let gram = x_centered.t().dot(&x_centered);
    let (eigenvalues, eigenvectors) = gram
        .eigh()
        .map_err(|e| TrimcastError::Training(format!("eigendecomposition failed: {}", e)))?;
    let largest = eigenvalues.iter().cloned().fold(0.0, f64::max);
    let cutoff = largest * RANK_TOLERANCE;
    let full_rank = largest > 0.0 && eigenvalues.iter().all(|&l| l > cutoff);

    let (intercept, params) = if full_rank {
        let fitted = LinearRegression::new()
            .fit(&linfa::Dataset::new(x, y))
            .map_err(|e| TrimcastError::Training(e.to_string()))?;
        (fitted.intercept(), fitted.params().to_owned())
    } else {
        tracing::warn!("Feature columns are linearly dependent, using the minimum-norm fit");
        let rhs = x_centered.t().dot(&y_centered);
        let mut beta = Array1::<f64>::zeros(FEATURE_COLUMNS.len());
        for (k, &lambda) in eigenvalues.iter().enumerate() {
            if lambda > cutoff {
                let v = eigenvectors.column(k);
                beta.scaled_add(v.dot(&rhs) / lambda, &v);
            }
        }
        (y_mean - x_mean.dot(&beta), beta)
    };

    if !intercept.is_finite() || params.iter().any(|b| !b.is_finite()) {
        return Err(TrimcastError::Training(
            "least-squares solution is not finite".to_string(),
        ));
    }

    let mut coefficients = [0.0f64; 5];
    for (c, p) in coefficients.iter_mut().zip(params.iter()) {
        *c = *p;
    }

    Ok(LinearModel {
        intercept,
        coefficients,
    })
}
