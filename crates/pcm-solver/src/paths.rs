//! Seven-leg thermodynamic path from the pure solids to the eutectic liquid.
//!
//! Starting from `xE` mol of solid A and `1 − xE` mol of solid B at `TE`:
//!
//! 1. heat solid B from `TE` to `T_fus,B`
//! 2. melt B
//! 3. heat solid A from `TE` to `T_fus,A`
//! 4. melt A
//! 5. bring liquid A from `T_fus,A` to `T_fus,B`
//! 6. mix the two liquids ideally
//! 7. bring the liquid mixture from `T_fus,B` back to `TE`
//!
//! Entropy legs integrate `cp/T`; enthalpy legs integrate `cp` and have no
//! mixing term.

use pcm_core::numeric::{ensure_open_unit, ensure_positive};
use pcm_props::{ComponentProperties, HeatCapacity, LiquidBlend};
use serde::Serialize;

use crate::config::SolverConfig;
use crate::error::SolverResult;
use crate::quadrature::integrate;

pub const LEG_COUNT: usize = 7;

const ENTROPY_LABELS: [&str; LEG_COUNT] = ["ΔS1", "ΔS2", "ΔS3", "ΔS4", "ΔS5", "ΔS6", "ΔS7"];
const ENTHALPY_LABELS: [&str; LEG_COUNT] = ["ΔH1", "ΔH2", "ΔH3", "ΔH4", "ΔH5", "ΔH6", "ΔH7"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PathQuantity {
    Entropy,
    Enthalpy,
}

impl PathQuantity {
    pub fn labels(self) -> &'static [&'static str; LEG_COUNT] {
        match self {
            PathQuantity::Entropy => &ENTROPY_LABELS,
            PathQuantity::Enthalpy => &ENTHALPY_LABELS,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            PathQuantity::Entropy => "J/(mol·K)",
            PathQuantity::Enthalpy => "J/mol",
        }
    }
}

/// Per-leg contributions and their sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathBreakdown {
    pub quantity: PathQuantity,
    pub legs: [f64; LEG_COUNT],
    pub total: f64,
}

impl PathBreakdown {
    pub fn from_legs(quantity: PathQuantity, legs: [f64; LEG_COUNT]) -> Self {
        Self {
            quantity,
            legs,
            total: legs.iter().sum(),
        }
    }

    /// `(label, value)` pairs in leg order.
    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.quantity
            .labels()
            .iter()
            .copied()
            .zip(self.legs.iter().copied())
    }
}

/// The path for one (A, B) pair at a fixed eutectic point.
#[derive(Debug, Clone, Copy)]
pub struct MixingPath<'a> {
    a: &'a ComponentProperties,
    b: &'a ComponentProperties,
    x_e: f64,
    t_e: f64,
    config: &'a SolverConfig,
}

impl<'a> MixingPath<'a> {
    /// Fails with a domain error unless `x_e` is in (0, 1) and `t_e` is a
    /// positive temperature.
    pub fn new(
        a: &'a ComponentProperties,
        b: &'a ComponentProperties,
        x_e: f64,
        t_e: f64,
        config: &'a SolverConfig,
    ) -> SolverResult<Self> {
        let x_e = ensure_open_unit(x_e, "eutectic mole fraction")?;
        let t_e = ensure_positive(t_e, "eutectic temperature")?;
        Ok(Self {
            a,
            b,
            x_e,
            t_e,
            config,
        })
    }

    pub fn entropy(&self) -> SolverResult<PathBreakdown> {
        let (x, y) = (self.x_e, 1.0 - self.x_e);
        let (t_a, t_b) = (self.a.fusion_temperature_k(), self.b.fusion_temperature_k());
        let blend = LiquidBlend::new(self.a.cp_liquid(), self.b.cp_liquid(), x);
        let r = self.config.gas_constant;

        let legs = [
            y * self.integral(|t| self.b.cp_solid().cp_over_t(t), self.t_e, t_b)?,
            y * self.b.heat_of_fusion_j_mol() / t_b,
            x * self.integral(|t| self.a.cp_solid().cp_over_t(t), self.t_e, t_a)?,
            x * self.a.heat_of_fusion_j_mol() / t_a,
            x * self.integral(|t| self.a.cp_liquid().cp_over_t(t), t_a, t_b)?,
            -r * (x * x.ln() + y * y.ln()),
            self.integral(|t| blend.cp_over_t(t), t_b, self.t_e)?,
        ];

        let breakdown = PathBreakdown::from_legs(PathQuantity::Entropy, legs);
        tracing::debug!(total = breakdown.total, "entropy of mixing");
        Ok(breakdown)
    }

    pub fn enthalpy(&self) -> SolverResult<PathBreakdown> {
        let (x, y) = (self.x_e, 1.0 - self.x_e);
        let (t_a, t_b) = (self.a.fusion_temperature_k(), self.b.fusion_temperature_k());
        let blend = LiquidBlend::new(self.a.cp_liquid(), self.b.cp_liquid(), x);

        let legs = [
            y * self.integral(|t| self.b.cp_solid().cp(t), self.t_e, t_b)?,
            y * self.b.heat_of_fusion_j_mol(),
            x * self.integral(|t| self.a.cp_solid().cp(t), self.t_e, t_a)?,
            x * self.a.heat_of_fusion_j_mol(),
            x * self.integral(|t| self.a.cp_liquid().cp(t), t_a, t_b)?,
            0.0,
            self.integral(|t| blend.cp(t), t_b, self.t_e)?,
        ];

        let breakdown = PathBreakdown::from_legs(PathQuantity::Enthalpy, legs);
        tracing::debug!(total = breakdown.total, "enthalpy of mixing");
        Ok(breakdown)
    }

    fn integral<F>(&self, f: F, from: f64, to: f64) -> SolverResult<f64>
    where
        F: Fn(f64) -> f64,
    {
        let result = integrate(f, from, to, &self.config.quadrature)?;
        tracing::trace!(
            from,
            to,
            value = result.value,
            subdivisions = result.subdivisions,
            "path integral"
        );
        Ok(result.value)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn mixing_entropy_non_negative(x in 1e-6f64..(1.0 - 1e-6)) {
            let a = ComponentProperties::from_positional(
                "A",
                [100.0, 76.85, 200.0, 150.0, 0.5, 0.0, 200.0, 0.3, 0.0, 0.0],
            )
            .unwrap();
            let b = ComponentProperties::from_positional(
                "B",
                [100.0, 46.85, 180.0, 150.0, 0.5, 0.0, 200.0, 0.3, 0.0, 0.0],
            )
            .unwrap();
            let config = SolverConfig::default();
            let path = MixingPath::new(&a, &b, x, 300.0, &config).unwrap();
            let s = path.entropy().unwrap();
            prop_assert!(s.legs[5] >= 0.0);
        }
    }
}
