//! Solver context for one binary pairing.

use pcm_props::ComponentProperties;

use crate::config::SolverConfig;
use crate::error::{SolverError, SolverResult};
use crate::liquidus::{LiquidusCurves, LiquidusPair};
use crate::paths::{MixingPath, PathBreakdown};
use crate::search::{EutecticPoint, search_eutectic};

/// A binary mixture of two borrowed components.
///
/// The eutectic point and the sampled curves are computed once by
/// [`solve_eutectic_point`](Self::solve_eutectic_point) and cached; entropy
/// and enthalpy are derived from the cached point.
#[derive(Debug, Clone)]
pub struct EutecticMixture<'a> {
    a: &'a ComponentProperties,
    b: &'a ComponentProperties,
    config: SolverConfig,
    solved: Option<(EutecticPoint, LiquidusCurves)>,
}

impl<'a> EutecticMixture<'a> {
    /// Mixture with the default solver configuration.
    pub fn new(a: &'a ComponentProperties, b: &'a ComponentProperties) -> Self {
        Self {
            a,
            b,
            config: SolverConfig::default(),
            solved: None,
        }
    }

    pub fn with_config(
        a: &'a ComponentProperties,
        b: &'a ComponentProperties,
        config: SolverConfig,
    ) -> SolverResult<Self> {
        config.validate()?;
        Ok(Self {
            a,
            b,
            config,
            solved: None,
        })
    }

    pub fn component_a(&self) -> &'a ComponentProperties {
        self.a
    }

    pub fn component_b(&self) -> &'a ComponentProperties {
        self.b
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Locate the eutectic point, or return the cached one.
    pub fn solve_eutectic_point(&mut self) -> SolverResult<EutecticPoint> {
        if let Some((point, _)) = &self.solved {
            return Ok(*point);
        }

        tracing::debug!(a = self.a.name(), b = self.b.name(), "solving eutectic point");
        let pair = LiquidusPair::new(self.a, self.b, self.config.gas_constant);
        let (point, curves) = search_eutectic(&pair, &self.config)?;
        self.solved = Some((point, curves));
        Ok(point)
    }

    pub fn eutectic_point(&self) -> Option<EutecticPoint> {
        self.solved.as_ref().map(|(point, _)| *point)
    }

    pub fn liquidus_curves(&self) -> Option<&LiquidusCurves> {
        self.solved.as_ref().map(|(_, curves)| curves)
    }

    pub fn compute_entropy(&self) -> SolverResult<PathBreakdown> {
        self.path("entropy requires a solved eutectic point")?
            .entropy()
    }

    pub fn compute_enthalpy(&self) -> SolverResult<PathBreakdown> {
        self.path("enthalpy requires a solved eutectic point")?
            .enthalpy()
    }

    fn path(&self, what: &'static str) -> SolverResult<MixingPath<'_>> {
        let point = self
            .eutectic_point()
            .ok_or(SolverError::StateNotReady { what })?;
        MixingPath::new(
            self.a,
            self.b,
            point.mole_fraction_a,
            point.temperature_k,
            &self.config,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(name: &str, t_fus_c: f64, dh_j_g: f64) -> ComponentProperties {
        ComponentProperties::from_positional(
            name,
            [100.0, t_fus_c, dh_j_g, 150.0, 0.5, 0.0, 200.0, 0.3, 0.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn paths_require_solved_point() {
        let a = component("A", 76.85, 200.0);
        let b = component("B", 46.85, 180.0);
        let mixture = EutecticMixture::new(&a, &b);

        assert!(mixture.eutectic_point().is_none());
        assert!(mixture.liquidus_curves().is_none());
        assert!(matches!(
            mixture.compute_entropy(),
            Err(SolverError::StateNotReady { .. })
        ));
        assert!(matches!(
            mixture.compute_enthalpy(),
            Err(SolverError::StateNotReady { .. })
        ));
    }

    #[test]
    fn solve_caches_point_and_curves() {
        let a = component("A", 76.85, 200.0);
        let b = component("B", 46.85, 180.0);
        let mut mixture = EutecticMixture::new(&a, &b);

        let first = mixture.solve_eutectic_point().unwrap();
        let second = mixture.solve_eutectic_point().unwrap();
        assert_eq!(first, second);
        assert_eq!(mixture.eutectic_point(), Some(first));
        assert_eq!(mixture.liquidus_curves().map(LiquidusCurves::len), Some(9990));
        assert_eq!(mixture.component_a().name(), "A");
        assert_eq!(mixture.component_b().name(), "B");
    }

    #[test]
    fn with_config_validates() {
        let a = component("A", 76.85, 200.0);
        let b = component("B", 46.85, 180.0);
        let mut config = SolverConfig::default();
        config.grid.step = -1.0;

        assert!(matches!(
            EutecticMixture::with_config(&a, &b, config),
            Err(SolverError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn failed_solve_leaves_state_unset() {
        let a = component("A", 76.85, 200.0);
        let b = component("B", 46.85, 180.0);
        let mut config = SolverConfig::default();
        config.grid.end = 0.01;
        let mut mixture = EutecticMixture::with_config(&a, &b, config).unwrap();

        assert!(matches!(
            mixture.solve_eutectic_point(),
            Err(SolverError::NoIntersectionFound { .. })
        ));
        assert!(mixture.eutectic_point().is_none());
        assert!(mixture.compute_entropy().is_err());
    }
}
