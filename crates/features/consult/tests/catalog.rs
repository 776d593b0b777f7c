mod fixtures;

use articula_consult::{Catalog, ConsultError, LoadReport};
use articula_kernel::domain::constants::{DEFAULT_COLOR, DEFAULT_ICON};
use std::io::Write;

#[test]
fn dropped_records_never_surface() {
    let catalog = fixtures::catalog();

    assert_eq!(catalog.report(), LoadReport { total: 7, kept: 5, dropped: 2 });
    assert_eq!(catalog.regions(), vec!["Zona Este", "Zona Centro"]);
    assert!(catalog.departments("Zona Sur").is_empty());
    assert!(catalog.departments("Zona Norte").is_empty());
}

#[test]
fn trimmed_values_merge_with_their_neighbours() {
    let catalog = fixtures::catalog();
    assert_eq!(catalog.departments("Zona Este"), vec!["Maipú", "Junín"]);
}

#[test]
fn resolve_returns_every_destination_in_order() {
    let catalog = fixtures::catalog();

    let results = catalog.resolve("Zona Este", "Maipú", "Escuela N°1", "Informática");
    let institutes: Vec<_> = results.iter().map(|r| r.institute.as_str()).collect();
    assert_eq!(institutes, vec!["IES 9-012", "IES 9-015"]);

    assert_eq!(results[1].website, None, "N/D website means no link");
    assert_eq!(results[1].display_color, DEFAULT_COLOR);
    assert_eq!(results[1].icon_key, DEFAULT_ICON);
}

#[test]
fn resolve_is_exact_and_case_sensitive() {
    let catalog = fixtures::catalog();
    assert!(catalog.resolve("zona este", "Maipú", "Escuela N°1", "Electrónica").is_empty());
    assert!(catalog.resolve("Zona Este", "Maipú", "Escuela N°1", "Electronica").is_empty());
    assert_eq!(catalog.resolve("Zona Este", "Maipú", "Escuela N°1", "Electrónica").len(), 1);
}

#[test]
fn non_json_text_is_a_json_error() {
    let err = Catalog::from_json_str("region,departamento\nZona Este,Maipú").expect_err("csv");
    assert!(matches!(err, ConsultError::Json { .. }));
    assert!(err.is_data_error());
}

#[test]
fn wrong_top_level_shape_is_a_data_error() {
    let err = Catalog::from_json_str(r#"{"records": []}"#).expect_err("object");
    assert!(matches!(err, ConsultError::Data { .. }));

    let empty = Catalog::from_json_str("null").expect("null is an empty dataset");
    assert!(empty.is_empty());
}

#[test]
fn loads_from_path() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "{}", fixtures::dataset())?;

    let catalog = Catalog::from_path(file.path())?;
    assert_eq!(catalog.len(), 5);
    Ok(())
}

#[test]
fn missing_file_is_an_io_error_with_context() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("articulaciones.json");

    let err = Catalog::from_path(&missing).expect_err("missing file");
    assert!(matches!(err, ConsultError::Io { .. }));
    assert!(err.to_string().contains("articulaciones.json"));
}
