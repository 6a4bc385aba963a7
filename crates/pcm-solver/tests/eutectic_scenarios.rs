//! End-to-end eutectic scenarios on synthetic component pairs.

use pcm_core::numeric::{Tolerances, nearly_equal};
use pcm_core::units::constants::GAS_CONSTANT;
use pcm_props::ComponentProperties;
use pcm_solver::liquidus::liquidus_temperature;
use pcm_solver::{EutecticMixture, GridConfig, LEG_COUNT, SolverConfig, SolverError};

/// 350 K / 320 K pair with 20 000 / 18 000 J/mol heats of fusion.
fn scenario_pair() -> (ComponentProperties, ComponentProperties) {
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
    (a, b)
}

#[test]
fn scenario_point_is_depressed_and_interior() {
    let (a, b) = scenario_pair();
    let mut mixture = EutecticMixture::new(&a, &b);
    let point = mixture.solve_eutectic_point().unwrap();

    assert!(point.mole_fraction_a > 0.0 && point.mole_fraction_a < 1.0);
    assert!(point.temperature_k < a.fusion_temperature_k().min(b.fusion_temperature_k()));
    assert!(point.temperature_k > 250.0);

    // Only one sign change on the whole grid.
    let curves = mixture.liquidus_curves().unwrap();
    let changes = (0..curves.len() - 1)
        .filter(|&i| curves.difference(i) * curves.difference(i + 1) < 0.0)
        .count();
    assert_eq!(changes, 1);
    assert_eq!(curves.len(), 9990);
}

#[test]
fn scenario_totals_are_sums_of_seven_legs() {
    let (a, b) = scenario_pair();
    let mut mixture = EutecticMixture::new(&a, &b);
    mixture.solve_eutectic_point().unwrap();

    let entropy = mixture.compute_entropy().unwrap();
    let enthalpy = mixture.compute_enthalpy().unwrap();
    let tol = Tolerances::default();

    assert_eq!(entropy.legs.len(), LEG_COUNT);
    assert!(nearly_equal(entropy.total, entropy.legs.iter().sum(), tol));
    assert!(nearly_equal(enthalpy.total, enthalpy.legs.iter().sum(), tol));
    assert!(entropy.legs[5] >= 0.0);
    assert_eq!(enthalpy.legs[5], 0.0);
    // Leg 7 cools the liquid from T_fus,B down to TE.
    assert!(entropy.legs[6] < 0.0);
    assert!(enthalpy.legs[6] < 0.0);
}

#[test]
fn repeated_path_computation_is_identical() {
    let (a, b) = scenario_pair();
    let mut mixture = EutecticMixture::new(&a, &b);
    mixture.solve_eutectic_point().unwrap();

    assert_eq!(
        mixture.compute_entropy().unwrap(),
        mixture.compute_entropy().unwrap()
    );
    assert_eq!(
        mixture.compute_enthalpy().unwrap(),
        mixture.compute_enthalpy().unwrap()
    );
}

#[test]
fn swapping_components_mirrors_the_point() {
    let (a, b) = scenario_pair();
    let forward = EutecticMixture::new(&a, &b).solve_eutectic_point().unwrap();
    let backward = EutecticMixture::new(&b, &a).solve_eutectic_point().unwrap();

    // Grid resolution plus the fixed offset of `start` on each side.
    let x_tol = Tolerances {
        abs: 2e-3,
        rel: 0.0,
    };
    let t_tol = Tolerances {
        abs: 0.1,
        rel: 0.0,
    };
    assert!(nearly_equal(
        backward.mole_fraction_a,
        1.0 - forward.mole_fraction_a,
        x_tol
    ));
    assert!(nearly_equal(backward.temperature_k, forward.temperature_k, t_tol));
}

#[test]
fn identical_components_cross_at_half() {
    let (a, _) = scenario_pair();
    let twin = a.clone();
    let point = EutecticMixture::new(&a, &twin)
        .solve_eutectic_point()
        .unwrap();

    assert!((point.mole_fraction_a - 0.5).abs() < 2e-3);
    let expected = liquidus_temperature(
        a.fusion_temperature_k(),
        a.heat_of_fusion_j_mol(),
        0.5,
        GAS_CONSTANT,
    );
    assert!((point.temperature_k - expected).abs() < 0.1);
}

#[test]
fn narrow_grid_has_no_intersection() {
    let (a, b) = scenario_pair();
    let config = SolverConfig {
        grid: GridConfig {
            start: 0.0005,
            end: 0.01,
            step: 1e-4,
        },
        ..SolverConfig::default()
    };
    let mut mixture = EutecticMixture::with_config(&a, &b, config).unwrap();

    match mixture.solve_eutectic_point() {
        Err(SolverError::NoIntersectionFound { samples, .. }) => assert_eq!(samples, 95),
        other => panic!("expected NoIntersectionFound, got {other:?}"),
    }
}

#[test]
fn refined_point_lies_in_coarse_bracket() {
    let (a, b) = scenario_pair();
    let coarse = EutecticMixture::new(&a, &b).solve_eutectic_point().unwrap();

    let mut config = SolverConfig::default();
    config.refine.enabled = true;
    let refined = EutecticMixture::with_config(&a, &b, config)
        .unwrap()
        .solve_eutectic_point()
        .unwrap();

    assert!(refined.refined);
    assert_eq!(refined.bracket_index, coarse.bracket_index);
    assert_eq!(refined.bracket, coarse.bracket);
    let shift = (refined.mole_fraction_a - coarse.mole_fraction_a).abs();
    assert!(shift <= config.grid.step + 1e-12);
    assert!((refined.temperature_k - coarse.temperature_k).abs() < 0.1);
}

#[test]
fn shifted_grid_paths_use_the_reported_composition() {
    let (a, b) = scenario_pair();
    let config = SolverConfig {
        grid: GridConfig {
            start: 0.3,
            end: 0.9,
            step: 1e-3,
        },
        ..SolverConfig::default()
    };
    let mut shifted = EutecticMixture::with_config(&a, &b, config).unwrap();
    let point = shifted.solve_eutectic_point().unwrap();
    let mut reference = EutecticMixture::new(&a, &b);
    let reference_point = reference.solve_eutectic_point().unwrap();

    assert_eq!(point.mole_fraction_a, point.bracket[0]);
    assert!((point.mole_fraction_a - reference_point.mole_fraction_a).abs() < 2e-3);
    assert!((point.temperature_k - reference_point.temperature_k).abs() < 0.5);

    // Ideal mixing leg depends only on xE.
    let x = point.mole_fraction_a;
    let mixing = -GAS_CONSTANT * (x * x.ln() + (1.0 - x) * (1.0 - x).ln());
    let entropy = shifted.compute_entropy().unwrap();
    assert!(nearly_equal(entropy.legs[5], mixing, Tolerances::default()));

    let reference_entropy = reference.compute_entropy().unwrap();
    let drift = (entropy.total - reference_entropy.total).abs();
    assert!(drift < 0.05 * reference_entropy.total.abs());
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn component(name: &str, t_fus_k: f64, dh_j_mol: f64) -> ComponentProperties {
        ComponentProperties::from_positional(
            name,
            [
                1.0,
                t_fus_k - 273.15,
                dh_j_mol,
                120.0,
                0.6,
                0.0,
                250.0,
                0.2,
                0.0,
                0.0,
            ],
        )
        .unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn eutectic_lies_below_both_melting_points(
            t_a in 300.0f64..400.0,
            dt in 5.0f64..40.0,
            h_a in 15_000.0f64..40_000.0,
            h_b in 15_000.0f64..40_000.0,
        ) {
            let a = component("A", t_a, h_a);
            let b = component("B", t_a - dt, h_b);
            let mut mixture = EutecticMixture::new(&a, &b);
            let point = mixture.solve_eutectic_point().unwrap();

            prop_assert!(point.mole_fraction_a > 0.0 && point.mole_fraction_a < 1.0);
            prop_assert!(point.temperature_k < a.fusion_temperature_k().min(b.fusion_temperature_k()));

            let entropy = mixture.compute_entropy().unwrap();
            prop_assert!(entropy.legs[5] >= 0.0);
        }
    }
}
