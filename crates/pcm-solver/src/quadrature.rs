//! Adaptive Gauss–Kronrod quadrature.
//!
//! Each segment is integrated with the 15-point Kronrod rule; the embedded
//! 7-point Gauss rule gives the error estimate. The segment with the largest
//! error is bisected until the summed error meets the tolerance.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kronrod abscissae on [-1, 1], outermost first; the last entry is the centre.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_5,
    0.0,
];

/// Kronrod weights matching `XGK`.
const WGK: [f64; 8] = [
    0.022_935_322_010_529_22,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_18,
    0.140_653_259_715_525_92,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_4,
    0.204_432_940_075_298_9,
    0.209_482_141_084_727_83,
];

/// Gauss weights for `XGK[1]`, `XGK[3]`, `XGK[5]` and the centre.
const WG: [f64; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_7,
    0.381_830_050_505_118_9,
    0.417_959_183_673_469_4,
];

/// Quadrature configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuadratureConfig {
    /// Absolute tolerance on the summed error estimate
    pub abs_tol: f64,
    /// Relative tolerance on the summed error estimate
    pub rel_tol: f64,
    /// Maximum number of segments
    pub max_subdivisions: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1.49e-8,
            rel_tol: 1.49e-8,
            max_subdivisions: 50,
        }
    }
}

impl QuadratureConfig {
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !(self.abs_tol.is_finite() && self.rel_tol.is_finite()) {
            return Err("quadrature tolerances must be finite");
        }
        if self.abs_tol < 0.0 || self.rel_tol < 0.0 {
            return Err("quadrature tolerances must be non-negative");
        }
        if self.abs_tol == 0.0 && self.rel_tol == 0.0 {
            return Err("at least one quadrature tolerance must be positive");
        }
        if self.max_subdivisions == 0 {
            return Err("max_subdivisions must be at least 1");
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuadratureError {
    #[error("non-finite integration bound {value}")]
    NonFiniteBound { value: f64 },

    #[error("integrand is non-finite ({value}) at T = {t}")]
    NonFiniteIntegrand { t: f64, value: f64 },

    #[error("no convergence after {subdivisions} subdivisions, error estimate {abs_error:e}")]
    DidNotConverge { subdivisions: usize, abs_error: f64 },
}

/// Integration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integral {
    /// Signed integral from the lower to the upper argument
    pub value: f64,
    /// Summed error estimate
    pub abs_error: f64,
    /// Number of segments used
    pub subdivisions: usize,
    /// Number of integrand evaluations
    pub evaluations: usize,
}

impl Integral {
    const ZERO: Integral = Integral {
        value: 0.0,
        abs_error: 0.0,
        subdivisions: 0,
        evaluations: 0,
    };
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    lo: f64,
    hi: f64,
    value: f64,
    error: f64,
}

/// Integrate `f` from `a` to `b`.
///
/// Reversed bounds flip the sign; equal bounds give exactly zero without
/// evaluating `f`.
pub fn integrate<F>(
    f: F,
    a: f64,
    b: f64,
    config: &QuadratureConfig,
) -> Result<Integral, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    for value in [a, b] {
        if !value.is_finite() {
            return Err(QuadratureError::NonFiniteBound { value });
        }
    }

    if a == b {
        return Ok(Integral::ZERO);
    }

    let (lo, hi, sign) = if a < b { (a, b, 1.0) } else { (b, a, -1.0) };

    let mut segments = vec![kronrod_15(&f, lo, hi)?];
    let mut evaluations = 15;

    loop {
        let value: f64 = segments.iter().map(|s| s.value).sum();
        let error: f64 = segments.iter().map(|s| s.error).sum();
        let tolerance = config.abs_tol.max(config.rel_tol * value.abs());

        if error <= tolerance {
            return Ok(Integral {
                value: sign * value,
                abs_error: error,
                subdivisions: segments.len(),
                evaluations,
            });
        }

        if segments.len() >= config.max_subdivisions {
            return Err(QuadratureError::DidNotConverge {
                subdivisions: segments.len(),
                abs_error: error,
            });
        }

        let worst = segments
            .iter()
            .enumerate()
            .max_by(|(_, x), (_, y)| x.error.total_cmp(&y.error))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let segment = segments.swap_remove(worst);
        let mid = 0.5 * (segment.lo + segment.hi);

        // Segment too narrow to split any further in floating point.
        if mid <= segment.lo || mid >= segment.hi {
            return Err(QuadratureError::DidNotConverge {
                subdivisions: segments.len() + 1,
                abs_error: error,
            });
        }

        segments.push(kronrod_15(&f, segment.lo, mid)?);
        segments.push(kronrod_15(&f, mid, segment.hi)?);
        evaluations += 30;

        tracing::trace!(segments = segments.len(), error, "quadrature bisected segment");
    }
}

fn kronrod_15<F>(f: &F, lo: f64, hi: f64) -> Result<Segment, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    let centre = 0.5 * (lo + hi);
    let half = 0.5 * (hi - lo);

    let eval = |t: f64| -> Result<f64, QuadratureError> {
        let value = f(t);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(QuadratureError::NonFiniteIntegrand { t, value })
        }
    };

    let f_centre = eval(centre)?;
    let mut kronrod = WGK[7] * f_centre;
    let mut gauss = WG[3] * f_centre;

    for j in 0..7 {
        let dx = half * XGK[j];
        let pair = eval(centre - dx)? + eval(centre + dx)?;
        kronrod += WGK[j] * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    Ok(Segment {
        lo,
        hi,
        value: kronrod * half,
        error: ((kronrod - gauss) * half).abs(),
    })
}
