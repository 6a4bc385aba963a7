//! Loads the bundled data tables.

use std::path::PathBuf;

use pcm_props::{ComponentCatalog, ReferenceTable};

fn data_file(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("data");
    path.push(name);
    path
}

#[test]
fn bundled_catalog_loads_and_validates() {
    let catalog = ComponentCatalog::load_csv(&data_file("pcm_catalog.csv")).unwrap();
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.names()[0], "Capric acid");

    for name in catalog.names() {
        let props = catalog.properties(name).unwrap();
        assert!(props.fusion_temperature_k() > 273.15);
        assert!(props.heat_of_fusion_j_mol() > 0.0);
    }

    let lauric = catalog.properties("  LAURIC ACID ").unwrap();
    assert!((lauric.fusion_temperature_k() - 316.95).abs() < 1e-9);
    assert!((lauric.heat_of_fusion_j_mol() - 178.0 * 200.32).abs() < 1e-6);
}

#[test]
fn bundled_reference_ranks_by_distance() {
    let table = ReferenceTable::load_csv(&data_file("eutectic_reference.csv")).unwrap();
    assert_eq!(table.len(), 10);

    let top = table.recommend(35.0, 8);
    assert_eq!(top.len(), 8);
    assert_eq!(top[0].pair, "Lauric acid + Palmitic acid");
    assert_eq!(top[1].pair, "Lauric acid + Myristic acid");
    for pair in top.windows(2) {
        assert!(pair[0].distance_c <= pair[1].distance_c);
    }
}

#[test]
fn missing_file_is_io_error() {
    let err = ComponentCatalog::load_csv(&data_file("does_not_exist.csv")).unwrap_err();
    assert!(matches!(err, pcm_props::PropsError::Io { .. }));
}
