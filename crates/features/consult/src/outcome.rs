use articula_kernel::domain::articulation::ArticulationResult;

/// How a finished consultation should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// No destination published yet for this orientation.
    NotYetAvailable,
    Single(&'a ArticulationResult),
    /// Several destinations, in catalog order. None is preferred over the others.
    Multiple(&'a [ArticulationResult]),
}

impl<'a> Outcome<'a> {
    #[must_use]
    pub fn classify(results: &'a [ArticulationResult]) -> Self {
        match results {
            [] => Self::NotYetAvailable,
            [single] => Self::Single(single),
            many => Self::Multiple(many),
        }
    }

    /// Every destination covered by this outcome.
    #[must_use]
    pub fn results(&self) -> &'a [ArticulationResult] {
        match *self {
            Self::NotYetAvailable => &[],
            Self::Single(result) => std::slice::from_ref(result),
            Self::Multiple(results) => results,
        }
    }

    /// Stable snake-case name, used by machine-readable output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotYetAvailable => "not_yet_available",
            Self::Single(_) => "single",
            Self::Multiple(_) => "multiple",
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        !matches!(self, Self::NotYetAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(institute: &str) -> ArticulationResult {
        ArticulationResult {
            institute: institute.to_owned(),
            program: "Tecnicatura en Electrónica".to_owned(),
            address: String::new(),
            website: None,
            display_color: "text-blue-500".to_owned(),
            highlight_effect: String::new(),
            icon_key: "Cpu".to_owned(),
        }
    }

    #[test]
    fn classifies_by_count() {
        assert_eq!(Outcome::classify(&[]), Outcome::NotYetAvailable);

        let one = [result("IES 9-012")];
        assert_eq!(Outcome::classify(&one), Outcome::Single(&one[0]));

        let two = [result("IES 9-012"), result("IES 9-015")];
        let outcome = Outcome::classify(&two);
        assert!(matches!(outcome, Outcome::Multiple(r) if r.len() == 2));
        assert_eq!(outcome.results()[1].institute, "IES 9-015");
    }

    #[test]
    fn results_view_is_consistent() {
        let one = [result("IES 9-012")];
        assert_eq!(Outcome::classify(&one).results(), &one);
        assert!(Outcome::classify(&[]).results().is_empty());
        assert!(!Outcome::classify(&[]).is_available());
        assert_eq!(Outcome::classify(&one).kind(), "single");
    }
}
