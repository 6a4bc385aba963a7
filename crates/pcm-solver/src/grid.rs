//! Mole-fraction sampling grid.

use serde::{Deserialize, Serialize};

/// Grid start of the reference tables. Only on a grid starting here is the
/// eutectic composition reported as `j · step`.
pub const REFERENCE_START: f64 = 0.0005;

/// Uniform grid `x_i = start + i·step` over `[start, end)`.
///
/// Both bounds must lie strictly inside (0, 1) so that `ln(x)` and
/// `ln(1 − x)` stay finite at every sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: REFERENCE_START,
            end: 0.9995,
            step: 1e-4,
        }
    }
}

impl GridConfig {
    /// Number of samples strictly below `end`.
    pub fn sample_count(&self) -> usize {
        let span = (self.end - self.start) / self.step;
        // Absorb round-off so that an exact multiple does not gain a sample at `end`.
        (span - 1e-9).ceil().max(0.0) as usize
    }

    pub fn point(&self, index: usize) -> f64 {
        self.start + index as f64 * self.step
    }

    pub fn points(&self) -> Vec<f64> {
        (0..self.sample_count()).map(|i| self.point(i)).collect()
    }

    /// Whether compositions are reported by index (`j · step`) rather than
    /// by sampled abscissa. True only for grids starting at [`REFERENCE_START`].
    pub fn reports_by_index(&self) -> bool {
        self.start == REFERENCE_START
    }

    /// Reported composition for bracket `index`: `index · step` on a
    /// reference grid, the sampled abscissa otherwise.
    pub fn reported_mole_fraction(&self, index: usize) -> f64 {
        if self.reports_by_index() {
            index as f64 * self.step
        } else {
            self.point(index)
        }
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !(self.start.is_finite() && self.end.is_finite() && self.step.is_finite()) {
            return Err("grid bounds and step must be finite");
        }
        if self.start <= 0.0 || self.end >= 1.0 {
            return Err("grid must lie strictly inside (0, 1)");
        }
        if self.start >= self.end {
            return Err("grid start must be below grid end");
        }
        if self.step <= 0.0 {
            return Err("grid step must be positive");
        }
        if self.sample_count() < 2 {
            return Err("grid must contain at least two samples");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcm_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn default_grid_layout() {
        let grid = GridConfig::default();
        assert_eq!(grid.sample_count(), 9990);

        let points = grid.points();
        let tol = Tolerances::default();
        assert!(nearly_equal(points[0], 0.0005, tol));
        assert!(nearly_equal(points[9989], 0.9994, tol));
        assert!(*points.last().unwrap() < grid.end);
        assert!(grid.validate().is_ok());
    }

    #[test]
    fn reported_mole_fraction_follows_grid_start() {
        let reference = GridConfig::default();
        assert!(reference.reports_by_index());
        assert_eq!(reference.reported_mole_fraction(3336), 3336.0 * 1e-4);

        let coarse_reference = GridConfig {
            step: 0.01,
            ..GridConfig::default()
        };
        assert!(coarse_reference.reports_by_index());
        assert_eq!(coarse_reference.reported_mole_fraction(5), 5.0 * 0.01);

        let shifted = GridConfig {
            start: 0.3,
            end: 0.9,
            step: 1e-3,
        };
        assert!(!shifted.reports_by_index());
        assert_eq!(shifted.reported_mole_fraction(34), shifted.point(34));
    }

    #[test]
    fn uneven_span_rounds_up() {
        let grid = GridConfig {
            start: 0.1,
            end: 0.35,
            step: 0.1,
        };
        // 0.1, 0.2, 0.3
        assert_eq!(grid.sample_count(), 3);
    }

    #[test]
    fn validate_rejects_bad_grids() {
        let touching_zero = GridConfig {
            start: 0.0,
            ..GridConfig::default()
        };
        assert!(touching_zero.validate().is_err());

        let touching_one = GridConfig {
            end: 1.0,
            ..GridConfig::default()
        };
        assert!(touching_one.validate().is_err());

        let reversed = GridConfig {
            start: 0.6,
            end: 0.4,
            step: 0.01,
        };
        assert!(reversed.validate().is_err());

        let zero_step = GridConfig {
            step: 0.0,
            ..GridConfig::default()
        };
        assert!(zero_step.validate().is_err());

        let single = GridConfig {
            start: 0.4,
            end: 0.45,
            step: 0.1,
        };
        assert!(single.validate().is_err());
    }
}
