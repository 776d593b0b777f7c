use articula_consult::{Catalog, Wizard, WizardState};
use proptest::prelude::*;
use serde_json::{Value, json};

#[derive(Debug, Clone)]
struct Row {
    region: &'static str,
    department: &'static str,
    school: &'static str,
    orientation: &'static str,
    institute: &'static str,
    valid: bool,
}

impl Row {
    fn to_json(&self) -> Value {
        let program = if self.valid { "Tecnicatura" } else { "N/D" };
        json!({
            "region": self.region,
            "departamento": self.department,
            "escuela": self.school,
            "orientacion": self.orientation,
            "resultado": { "ies": self.institute, "tecnicatura": program }
        })
    }

    fn tuple(&self) -> (&str, &str, &str, &str) {
        (self.region, self.department, self.school, self.orientation)
    }
}

fn row() -> impl Strategy<Value = Row> {
    (
        prop::sample::select(vec!["Zona Este", "Zona Sur", "Zona Norte", "Valle de Uco"]),
        prop::sample::select(vec!["Maipú", "Junín", "Tunuyán"]),
        prop::sample::select(vec!["Escuela N°1", "Escuela N°2"]),
        prop::sample::select(vec!["Electrónica", "Informática", "Enología"]),
        prop::sample::select(vec!["IES 9-012", "IES 9-015", "IES 9-018"]),
        prop::bool::weighted(0.7),
    )
        .prop_map(|(region, department, school, orientation, institute, valid)| Row {
            region,
            department,
            school,
            orientation,
            institute,
            valid,
        })
}

fn catalog_of(rows: &[Row]) -> Catalog {
    let raw = Value::Array(rows.iter().map(Row::to_json).collect());
    Catalog::build(&raw).expect("generated datasets are arrays")
}

proptest! {
    #[test]
    fn regions_are_backed_by_valid_records(rows in prop::collection::vec(row(), 0..40)) {
        let catalog = catalog_of(&rows);

        for region in catalog.regions() {
            prop_assert!(rows.iter().any(|r| r.valid && r.region == region));
        }
        for row in rows.iter().filter(|r| r.valid) {
            prop_assert!(catalog.regions().contains(&row.region));
        }
    }

    #[test]
    fn no_orphan_options(rows in prop::collection::vec(row(), 0..40)) {
        let catalog = catalog_of(&rows);

        for region in catalog.regions() {
            for department in catalog.departments(region) {
                prop_assert!(rows.iter().any(|r| r.valid && r.region == region && r.department == department));
                for school in catalog.schools(region, department) {
                    prop_assert!(!catalog.orientations(region, department, school).is_empty());
                }
            }
        }
    }

    #[test]
    fn resolve_multiplicity_matches_valid_records(rows in prop::collection::vec(row(), 1..40), pick in any::<prop::sample::Index>()) {
        let catalog = catalog_of(&rows);
        let target = rows[pick.index(rows.len())].tuple();

        let expected: Vec<&str> = rows
            .iter()
            .filter(|r| r.valid && r.tuple() == target)
            .map(|r| r.institute)
            .collect();
        let resolved: Vec<&str> = catalog
            .resolve(target.0, target.1, target.2, target.3)
            .iter()
            .map(|r| r.institute.as_str())
            .collect();

        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn walking_any_path_then_back_restores_a_fresh_state(rows in prop::collection::vec(row(), 1..40)) {
        let catalog = catalog_of(&rows);
        let mut wizard = Wizard::new(&catalog);

        let mut depth = 0;
        while let Some(first) = wizard.candidates().first().copied() {
            wizard.select(first).expect("candidate is always accepted");
            depth += 1;
        }
        prop_assert!(depth == 0 || depth == 4);

        for _ in 0..depth {
            wizard.back().expect("back is valid past the first step");
        }
        prop_assert_eq!(wizard.state(), &WizardState::default());
    }
}
