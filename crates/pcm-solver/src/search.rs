//! Eutectic point search.
//!
//! The liquidus curves are sampled on the mole-fraction grid and the first
//! sign change of `T_AB − T_BA` is taken as the eutectic bracket. Optionally
//! the root is then refined by bisection inside that bracket.

use pcm_core::numeric::{ensure_finite, ensure_open_unit};
use pcm_core::units::{self, Temperature};
use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::error::{SolverError, SolverResult};
use crate::liquidus::{LiquidusCurves, LiquidusPair};

/// Bisection refinement inside the grid bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefineConfig {
    /// Off by default so results match the plain grid search
    pub enabled: bool,
    /// Maximum bisection iterations
    pub max_iters: usize,
    /// Stop once the bracket is narrower than this
    pub x_abs_tol: f64,
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_iters: 60,
            x_abs_tol: 1e-12,
        }
    }
}

impl RefineConfig {
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.max_iters == 0 {
            return Err("refine max_iters must be at least 1");
        }
        if !self.x_abs_tol.is_finite() || self.x_abs_tol <= 0.0 {
            return Err("refine x_abs_tol must be positive and finite");
        }
        Ok(())
    }
}

/// Eutectic composition and temperature of a binary pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EutecticPoint {
    /// Eutectic temperature `TE` [K].
    pub temperature_k: f64,
    /// Mole fraction of A at the eutectic, `xE`.
    pub mole_fraction_a: f64,
    /// Grid index `j` of the bracketing pair.
    pub bracket_index: usize,
    /// Sampled abscissae `[x_j, x_{j+1}]` enclosing the crossing.
    pub bracket: [f64; 2],
    /// Whether bisection refined the grid value.
    pub refined: bool,
}

impl EutecticPoint {
    pub fn temperature(&self) -> Temperature {
        units::k(self.temperature_k)
    }

    pub fn temperature_c(&self) -> f64 {
        units::kelvin_to_celsius(self.temperature_k)
    }
}

/// First index `j` where `T_AB − T_BA` is exactly zero or changes sign
/// between `j` and `j + 1`.
pub fn find_bracket(curves: &LiquidusCurves) -> Option<usize> {
    let n = curves.len();
    (0..n).find(|&j| {
        let d0 = curves.difference(j);
        d0 == 0.0 || (j + 1 < n && d0 * curves.difference(j + 1) < 0.0)
    })
}

/// Sample both liquidus curves and locate the eutectic point.
///
/// Without refinement `TE` is the mean of the two curves at `x_j` and `xE`
/// is [`reported_mole_fraction`](crate::grid::GridConfig::reported_mole_fraction)
/// of `j`: `j · step` on a grid starting at
/// [`REFERENCE_START`](crate::grid::REFERENCE_START), `x_j` otherwise. With refinement `TE` is
/// taken at the bisection root and `xE` is shifted by `root − x_j` from the
/// grid value.
///
/// On a reference grid a crossing in the very first bracket reports
/// `xE = 0` and fails the open-interval check unless refinement is on.
pub fn search_eutectic(
    pair: &LiquidusPair<'_>,
    config: &SolverConfig,
) -> SolverResult<(EutecticPoint, LiquidusCurves)> {
    let grid = &config.grid;
    let curves = pair.sample(grid)?;
    tracing::debug!(
        samples = curves.len(),
        start = grid.start,
        step = grid.step,
        "sampled liquidus curves"
    );

    let j = find_bracket(&curves).ok_or(SolverError::NoIntersectionFound {
        start: grid.start,
        end: grid.end,
        samples: curves.len(),
    })?;

    let x_j = curves.mole_fraction_a[j];
    let x_next = curves
        .mole_fraction_a
        .get(j + 1)
        .copied()
        .unwrap_or(x_j + grid.step);
    let exact_hit = curves.difference(j) == 0.0;

    let reported_j = grid.reported_mole_fraction(j);
    let (mole_fraction_a, temperature_k, refined) = if config.refine.enabled && !exact_hit {
        let root = bisect(pair, [x_j, x_next], curves.difference(j), config)?;
        let t = 0.5 * (pair.temperature_ab(root) + pair.temperature_ba(root));
        // Same convention as the grid value, so the two differ by at most one step.
        (reported_j + (root - x_j), t, true)
    } else {
        let t = 0.5 * (curves.temperature_ab[j] + curves.temperature_ba[j]);
        (reported_j, t, false)
    };

    let mole_fraction_a = ensure_open_unit(mole_fraction_a, "eutectic mole fraction")?;
    let temperature_k = ensure_finite(temperature_k, "eutectic temperature")?;

    let point = EutecticPoint {
        temperature_k,
        mole_fraction_a,
        bracket_index: j,
        bracket: [x_j, x_next],
        refined,
    };
    tracing::info!(
        te_k = point.temperature_k,
        x_e = point.mole_fraction_a,
        index = j,
        refined,
        "eutectic point found"
    );

    Ok((point, curves))
}

/// Bisection on `T_AB − T_BA` inside a sign-changing bracket.
fn bisect(
    pair: &LiquidusPair<'_>,
    bracket: [f64; 2],
    left_residual: f64,
    config: &SolverConfig,
) -> SolverResult<f64> {
    let [mut left, mut right] = bracket;
    let mut left_residual = left_residual;

    for _ in 0..config.refine.max_iters {
        if right - left <= config.refine.x_abs_tol {
            break;
        }

        let mid = 0.5 * (left + right);
        let mid_residual = pair.difference(mid);
        if !mid_residual.is_finite() {
            return Err(SolverError::DomainError {
                what: format!("non-finite liquidus difference at x_A = {mid}"),
            });
        }
        if mid_residual == 0.0 {
            return Ok(mid);
        }

        if left_residual.signum() == mid_residual.signum() {
            left = mid;
            left_residual = mid_residual;
        } else {
            right = mid;
        }
    }

    if right - left > config.refine.x_abs_tol {
        tracing::warn!(
            width = right - left,
            max_iters = config.refine.max_iters,
            "bisection stopped before reaching x_abs_tol"
        );
    }

    Ok(0.5 * (left + right))
}
