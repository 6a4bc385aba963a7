//! Heat-capacity polynomials.
//!
//! Coefficients are molar: `cp` is returned in J/(mol·K) for `T` in kelvin.

use pcm_core::numeric::ensure_finite;
use pcm_core::CoreResult;
use serde::{Deserialize, Serialize};

/// Temperature-dependent molar heat capacity.
pub trait HeatCapacity {
    /// Heat capacity [J/(mol·K)] at `t` [K].
    fn cp(&self, t: f64) -> f64;

    /// `cp(T) / T`, the integrand of an entropy change.
    fn cp_over_t(&self, t: f64) -> f64 {
        self.cp(t) / t
    }
}

/// Solid phase: `cp(T) = a + bT + cT²`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidHeatCapacity {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl SolidHeatCapacity {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub(crate) fn validate(&self) -> CoreResult<()> {
        ensure_finite(self.a, "cp_solid_a")?;
        ensure_finite(self.b, "cp_solid_b")?;
        ensure_finite(self.c, "cp_solid_c")?;
        Ok(())
    }
}

impl HeatCapacity for SolidHeatCapacity {
    fn cp(&self, t: f64) -> f64 {
        self.a + self.b * t + self.c * t * t
    }
}

/// Liquid phase: `cp(T) = a + bT + cT² + dT³`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquidHeatCapacity {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl LiquidHeatCapacity {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    pub(crate) fn validate(&self) -> CoreResult<()> {
        ensure_finite(self.a, "cp_liquid_a")?;
        ensure_finite(self.b, "cp_liquid_b")?;
        ensure_finite(self.c, "cp_liquid_c")?;
        ensure_finite(self.d, "cp_liquid_d")?;
        Ok(())
    }
}

impl HeatCapacity for LiquidHeatCapacity {
    fn cp(&self, t: f64) -> f64 {
        self.a + self.b * t + self.c * t * t + self.d * t * t * t
    }
}

/// Ideal liquid mixture: `x·cp_first(T) + (1 − x)·cp_second(T)`.
#[derive(Debug, Clone, Copy)]
pub struct LiquidBlend<'a> {
    first: &'a LiquidHeatCapacity,
    second: &'a LiquidHeatCapacity,
    x_first: f64,
}

impl<'a> LiquidBlend<'a> {
    /// Blend weighted by the mole fraction `x_first` of the first liquid.
    pub fn new(first: &'a LiquidHeatCapacity, second: &'a LiquidHeatCapacity, x_first: f64) -> Self {
        Self {
            first,
            second,
            x_first,
        }
    }
}

impl HeatCapacity for LiquidBlend<'_> {
    fn cp(&self, t: f64) -> f64 {
        self.x_first * self.first.cp(t) + (1.0 - self.x_first) * self.second.cp(t)
    }
}
