//! Ideal-solution liquidus curves of a binary mixture.

use pcm_props::ComponentProperties;
use serde::Serialize;

use crate::error::{SolverError, SolverResult};
use crate::grid::GridConfig;

/// Freezing-point depression of a pure component at mole fraction `x` in the melt:
/// `T = T_fus·ΔH_fus / (ΔH_fus − R·T_fus·ln(x))`.
pub fn liquidus_temperature(
    fusion_temperature_k: f64,
    heat_of_fusion_j_mol: f64,
    x: f64,
    r: f64,
) -> f64 {
    fusion_temperature_k * heat_of_fusion_j_mol
        / (heat_of_fusion_j_mol - r * fusion_temperature_k * x.ln())
}

/// The two liquidus curves of an (A, B) pair, as functions of `x_A`.
#[derive(Debug, Clone, Copy)]
pub struct LiquidusPair<'a> {
    a: &'a ComponentProperties,
    b: &'a ComponentProperties,
    gas_constant: f64,
}

impl<'a> LiquidusPair<'a> {
    pub fn new(a: &'a ComponentProperties, b: &'a ComponentProperties, gas_constant: f64) -> Self {
        Self { a, b, gas_constant }
    }

    /// Liquidus of A, depressed by dissolved B (`T_BA`).
    pub fn temperature_ba(&self, x_a: f64) -> f64 {
        liquidus_temperature(
            self.a.fusion_temperature_k(),
            self.a.heat_of_fusion_j_mol(),
            x_a,
            self.gas_constant,
        )
    }

    /// Liquidus of B, depressed by dissolved A (`T_AB`).
    pub fn temperature_ab(&self, x_a: f64) -> f64 {
        liquidus_temperature(
            self.b.fusion_temperature_k(),
            self.b.heat_of_fusion_j_mol(),
            1.0 - x_a,
            self.gas_constant,
        )
    }

    /// `T_AB − T_BA`; changes sign at the eutectic composition.
    pub fn difference(&self, x_a: f64) -> f64 {
        self.temperature_ab(x_a) - self.temperature_ba(x_a)
    }

    /// Evaluate both curves on every grid sample.
    ///
    /// Fails with [`SolverError::DomainError`] on any non-finite value.
    pub fn sample(&self, grid: &GridConfig) -> SolverResult<LiquidusCurves> {
        let mole_fraction_a = grid.points();
        let mut temperature_ba = Vec::with_capacity(mole_fraction_a.len());
        let mut temperature_ab = Vec::with_capacity(mole_fraction_a.len());

        for &x in &mole_fraction_a {
            let t_ba = self.temperature_ba(x);
            let t_ab = self.temperature_ab(x);
            if !t_ba.is_finite() || !t_ab.is_finite() {
                return Err(SolverError::DomainError {
                    what: format!("non-finite liquidus temperature at x_A = {x}"),
                });
            }
            temperature_ba.push(t_ba);
            temperature_ab.push(t_ab);
        }

        Ok(LiquidusCurves {
            mole_fraction_a,
            temperature_ba,
            temperature_ab,
        })
    }
}

/// Sampled liquidus curves, kept for plotting and bracketing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LiquidusCurves {
    pub mole_fraction_a: Vec<f64>,
    /// Liquidus of A [K].
    pub temperature_ba: Vec<f64>,
    /// Liquidus of B [K].
    pub temperature_ab: Vec<f64>,
}

impl LiquidusCurves {
    pub fn len(&self) -> usize {
        self.mole_fraction_a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mole_fraction_a.is_empty()
    }

    /// `T_AB − T_BA` at sample `index`.
    pub fn difference(&self, index: usize) -> f64 {
        self.temperature_ab[index] - self.temperature_ba[index]
    }

    /// Lowest temperature over both curves.
    pub fn min_temperature(&self) -> Option<f64> {
        self.temperature_ab
            .iter()
            .chain(&self.temperature_ba)
            .copied()
            .reduce(f64::min)
    }
}
