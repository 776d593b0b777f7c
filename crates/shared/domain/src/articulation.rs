use serde::{Deserialize, Serialize};

/// One valid path from a technical-school orientation to a higher-education program.
///
/// Instances only exist after normalization: every text field is trimmed, non-empty
/// and never the "not defined" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticulationRecord {
    pub region: String,
    pub department: String,
    pub school: String,
    pub orientation: String,
    pub result: ArticulationResult,
}

impl ArticulationRecord {
    /// Exact, case-sensitive match on the four selection fields.
    #[must_use]
    pub fn matches(&self, region: &str, department: &str, school: &str, orientation: &str) -> bool {
        self.region == region
            && self.department == department
            && self.school == school
            && self.orientation == orientation
    }
}

/// The destination program an orientation articulates into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticulationResult {
    /// Receiving institution.
    pub institute: String,
    /// Program or degree offered there.
    pub program: String,
    /// Free-text location, possibly empty.
    pub address: String,
    /// External link; `None` means no link is offered.
    pub website: Option<String>,
    /// Presentation-only color tag.
    pub display_color: String,
    /// Presentation-only emphasis tag.
    pub highlight_effect: String,
    /// Symbolic icon name, resolved by the presentation layer.
    pub icon_key: String,
}
