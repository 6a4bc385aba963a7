//! Pure-substance property records.

use pcm_core::numeric::{ensure_finite, ensure_positive};
use pcm_core::units::{self, MolarEnergy, Temperature};
use serde::{Deserialize, Serialize};

use crate::error::{PropsError, PropsResult};
use crate::heat_capacity::{LiquidHeatCapacity, SolidHeatCapacity};

/// One row of the substance table, as delivered by the data source.
///
/// Field names on the wire follow the tabular source (`pcm`, `T_fus`, `Del_H`, ...).
/// Units are the table's: g/mol, °C, J/g, and molar heat-capacity coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    #[serde(rename = "pcm")]
    pub name: String,
    pub molar_mass: f64,
    #[serde(rename = "T_fus")]
    pub fusion_temperature_c: f64,
    #[serde(rename = "Del_H")]
    pub specific_heat_of_fusion: f64,
    pub cp_solid_a: f64,
    pub cp_solid_b: f64,
    pub cp_solid_c: f64,
    pub cp_liquid_a: f64,
    pub cp_liquid_b: f64,
    pub cp_liquid_c: f64,
    pub cp_liquid_d: f64,
}

impl ComponentRecord {
    /// Build a record from the positional layout
    /// `[molar_mass, T_fus, Del_H, cp_solid_a..c, cp_liquid_a..d]`.
    pub fn from_positional(name: impl Into<String>, values: [f64; 10]) -> Self {
        let [
            molar_mass,
            fusion_temperature_c,
            specific_heat_of_fusion,
            cp_solid_a,
            cp_solid_b,
            cp_solid_c,
            cp_liquid_a,
            cp_liquid_b,
            cp_liquid_c,
            cp_liquid_d,
        ] = values;

        Self {
            name: name.into(),
            molar_mass,
            fusion_temperature_c,
            specific_heat_of_fusion,
            cp_solid_a,
            cp_solid_b,
            cp_solid_c,
            cp_liquid_a,
            cp_liquid_b,
            cp_liquid_c,
            cp_liquid_d,
        }
    }
}

/// Validated thermodynamic properties of one phase-change material.
///
/// Temperatures are held in kelvin and the heat of fusion per mole.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentProperties {
    name: String,
    molar_mass_g_mol: f64,
    fusion_temperature_k: f64,
    heat_of_fusion_j_mol: f64,
    cp_solid: SolidHeatCapacity,
    cp_liquid: LiquidHeatCapacity,
}

impl ComponentProperties {
    /// Convert a raw record: °C → K and J/g → J/mol.
    ///
    /// Rejects an empty name, non-finite fields, and non-positive molar mass,
    /// fusion temperature or heat of fusion.
    pub fn from_record(record: ComponentRecord) -> PropsResult<Self> {
        let name = record.name.trim().to_string();
        if name.is_empty() {
            return Err(PropsError::InvalidComponentData {
                name: record.name,
                reason: "name must not be empty".to_string(),
            });
        }
        let invalid = |e| PropsError::invalid_component(&name, e);

        let molar_mass_g_mol = ensure_positive(record.molar_mass, "molar mass").map_err(invalid)?;
        let fusion_c =
            ensure_finite(record.fusion_temperature_c, "fusion temperature").map_err(invalid)?;
        let fusion_temperature_k =
            ensure_positive(units::celsius_to_kelvin(fusion_c), "fusion temperature [K]")
                .map_err(invalid)?;
        let specific = ensure_finite(record.specific_heat_of_fusion, "specific heat of fusion")
            .map_err(invalid)?;
        let heat_of_fusion_j_mol =
            ensure_positive(specific * molar_mass_g_mol, "heat of fusion").map_err(invalid)?;

        let cp_solid =
            SolidHeatCapacity::new(record.cp_solid_a, record.cp_solid_b, record.cp_solid_c);
        cp_solid.validate().map_err(invalid)?;
        let cp_liquid = LiquidHeatCapacity::new(
            record.cp_liquid_a,
            record.cp_liquid_b,
            record.cp_liquid_c,
            record.cp_liquid_d,
        );
        cp_liquid.validate().map_err(invalid)?;

        Ok(Self {
            name,
            molar_mass_g_mol,
            fusion_temperature_k,
            heat_of_fusion_j_mol,
            cp_solid,
            cp_liquid,
        })
    }

    /// Shorthand for [`ComponentRecord::from_positional`] followed by [`Self::from_record`].
    pub fn from_positional(name: &str, values: [f64; 10]) -> PropsResult<Self> {
        Self::from_record(ComponentRecord::from_positional(name, values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Molar mass [g/mol].
    pub fn molar_mass_g_mol(&self) -> f64 {
        self.molar_mass_g_mol
    }

    /// Fusion temperature [K].
    pub fn fusion_temperature_k(&self) -> f64 {
        self.fusion_temperature_k
    }

    /// Molar heat of fusion [J/mol].
    pub fn heat_of_fusion_j_mol(&self) -> f64 {
        self.heat_of_fusion_j_mol
    }

    /// Entropy of fusion `ΔH_fus / T_fus` [J/(mol·K)].
    pub fn fusion_entropy_j_mol_k(&self) -> f64 {
        self.heat_of_fusion_j_mol / self.fusion_temperature_k
    }

    pub fn fusion_temperature(&self) -> Temperature {
        units::k(self.fusion_temperature_k)
    }

    pub fn heat_of_fusion(&self) -> MolarEnergy {
        units::j_per_mol(self.heat_of_fusion_j_mol)
    }

    pub fn cp_solid(&self) -> &SolidHeatCapacity {
        &self.cp_solid
    }

    pub fn cp_liquid(&self) -> &LiquidHeatCapacity {
        &self.cp_liquid
    }
}

impl TryFrom<ComponentRecord> for ComponentProperties {
    type Error = PropsError;

    fn try_from(record: ComponentRecord) -> Result<Self, Self::Error> {
        Self::from_record(record)
    }
}
