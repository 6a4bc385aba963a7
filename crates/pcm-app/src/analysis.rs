//! Pair analysis: from catalog names to a full mixture report.

use pcm_props::{ComponentCatalog, ComponentProperties};
use pcm_solver::{EutecticMixture, EutecticPoint, LiquidusCurves, PathBreakdown, SolverConfig};
use serde::Serialize;

use crate::error::AppResult;

/// Summary of one component for reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentSummary {
    pub name: String,
    pub molar_mass_g_mol: f64,
    pub fusion_temperature_k: f64,
    pub fusion_temperature_c: f64,
    pub heat_of_fusion_j_mol: f64,
}

impl From<&ComponentProperties> for ComponentSummary {
    fn from(props: &ComponentProperties) -> Self {
        Self {
            name: props.name().to_string(),
            molar_mass_g_mol: props.molar_mass_g_mol(),
            fusion_temperature_k: props.fusion_temperature_k(),
            fusion_temperature_c: pcm_core::units::kelvin_to_celsius(props.fusion_temperature_k()),
            heat_of_fusion_j_mol: props.heat_of_fusion_j_mol(),
        }
    }
}

/// Everything computed for one (A, B) pair.
///
/// The sampled curves are left out of JSON/YAML output; use
/// [`liquidus_csv`](crate::export::liquidus_csv) for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixtureReport {
    pub component_a: ComponentSummary,
    pub component_b: ComponentSummary,
    pub config: SolverConfig,
    pub eutectic: EutecticPoint,
    pub entropy: PathBreakdown,
    pub enthalpy: PathBreakdown,
    /// Lowest sampled liquidus temperature [K]; the floor of the eutectic
    /// marker when the curves are plotted.
    pub liquidus_min_temperature_k: Option<f64>,
    #[serde(skip)]
    pub curves: LiquidusCurves,
}

/// Look up both components in `catalog`, solve the pair, and compute the
/// entropy and enthalpy of mixing.
pub fn analyze_pair(
    catalog: &ComponentCatalog,
    name_a: &str,
    name_b: &str,
    config: SolverConfig,
) -> AppResult<MixtureReport> {
    let a = catalog.properties(name_a)?;
    let b = catalog.properties(name_b)?;
    analyze_components(&a, &b, config)
}

/// Same as [`analyze_pair`] for components already in hand.
pub fn analyze_components(
    a: &ComponentProperties,
    b: &ComponentProperties,
    config: SolverConfig,
) -> AppResult<MixtureReport> {
    tracing::info!(a = a.name(), b = b.name(), "analyzing pair");

    let mut mixture = EutecticMixture::with_config(a, b, config)?;
    let eutectic = mixture.solve_eutectic_point()?;
    let entropy = mixture.compute_entropy()?;
    let enthalpy = mixture.compute_enthalpy()?;
    let curves = mixture.liquidus_curves().cloned().unwrap_or_default();

    Ok(MixtureReport {
        component_a: a.into(),
        component_b: b.into(),
        config,
        eutectic,
        entropy,
        enthalpy,
        liquidus_min_temperature_k: curves.min_temperature(),
        curves,
    })
}
