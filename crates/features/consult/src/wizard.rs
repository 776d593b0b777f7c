//! # Consult Wizard
//!
//! Finite-step controller over a borrowed [`Catalog`]:
//!
//! ```text
//! Region -> Department -> School -> Orientation -> Result
//! ```
//!
//! Each forward transition only accepts a value from the current candidate list. Rejected
//! input never mutates the state, so a front end can simply re-prompt. Going back abandons
//! the selection of the step being returned to along with everything deeper.

use crate::catalog::Catalog;
use crate::error::ConsultError;
use crate::outcome::Outcome;
use articula_kernel::domain::articulation::ArticulationResult;
use articula_kernel::domain::step::Step;
use serde::Serialize;
use tracing::{debug, warn};

/// Everything one consultation has selected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WizardState {
    pub step: Step,
    pub region: Option<String>,
    pub department: Option<String>,
    pub school: Option<String>,
    pub orientation: Option<String>,
    /// Populated only once `step` is [`Step::Result`]; may be empty.
    pub results: Vec<ArticulationResult>,
}

impl WizardState {
    /// Drops the selection owned by `step` and every deeper one, including results.
    fn clear_from(&mut self, step: Step) {
        for level in Step::ALL.into_iter().filter(|level| *level >= step) {
            match level {
                Step::Region => self.region = None,
                Step::Department => self.department = None,
                Step::School => self.school = None,
                Step::Orientation => self.orientation = None,
                Step::Result => self.results.clear(),
            }
        }
    }
}

/// One consultation session.
#[derive(Debug, Clone)]
pub struct Wizard<'c> {
    catalog: &'c Catalog,
    state: WizardState,
}

impl<'c> Wizard<'c> {
    #[must_use]
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog, state: WizardState::default() }
    }

    #[must_use]
    pub const fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    #[must_use]
    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    #[must_use]
    pub const fn step(&self) -> Step {
        self.state.step
    }

    /// Options valid for the current step, recomputed from the catalog on every call.
    ///
    /// Empty at [`Step::Result`].
    #[must_use]
    pub fn candidates(&self) -> Vec<&'c str> {
        let catalog = self.catalog;
        let WizardState { region, department, school, .. } = &self.state;

        match (self.state.step, region, department, school) {
            (Step::Region, ..) => catalog.regions(),
            (Step::Department, Some(r), ..) => catalog.departments(r),
            (Step::School, Some(r), Some(d), _) => catalog.schools(r, d),
            (Step::Orientation, Some(r), Some(d), Some(s)) => catalog.orientations(r, d, s),
            _ => Vec::new(),
        }
    }

    /// # Errors
    /// [`ConsultError::InvalidSelection`] outside [`Step::Region`] or for an unknown region.
    pub fn select_region(&mut self, value: &str) -> Result<Step, ConsultError> {
        let value = self.accept(Step::Region, value)?;
        self.state.clear_from(Step::Region);
        self.state.region = Some(value);
        Ok(self.advance())
    }

    /// # Errors
    /// [`ConsultError::InvalidSelection`] outside [`Step::Department`] or for a department
    /// not offered in the selected region.
    pub fn select_department(&mut self, value: &str) -> Result<Step, ConsultError> {
        let value = self.accept(Step::Department, value)?;
        self.state.clear_from(Step::Department);
        self.state.department = Some(value);
        Ok(self.advance())
    }

    /// # Errors
    /// [`ConsultError::InvalidSelection`] outside [`Step::School`] or for an unknown school.
    pub fn select_school(&mut self, value: &str) -> Result<Step, ConsultError> {
        let value = self.accept(Step::School, value)?;
        self.state.clear_from(Step::School);
        self.state.school = Some(value);
        Ok(self.advance())
    }

    /// Selects the orientation and resolves the destinations.
    ///
    /// Reaching [`Step::Result`] with no destinations is a valid outcome, see
    /// [`Outcome::NotYetAvailable`].
    ///
    /// # Errors
    /// [`ConsultError::InvalidSelection`] outside [`Step::Orientation`] or for an orientation
    /// the selected school does not offer.
    pub fn select_orientation(&mut self, value: &str) -> Result<Step, ConsultError> {
        let value = self.accept(Step::Orientation, value)?;

        let (Some(region), Some(department), Some(school)) =
            (&self.state.region, &self.state.department, &self.state.school)
        else {
            return Err("Orientation step reached without earlier selections".into());
        };
        let results: Vec<ArticulationResult> = self
            .catalog
            .resolve(region, department, school, &value)
            .into_iter()
            .cloned()
            .collect();

        debug!(orientation = %value, results = results.len(), "Articulation resolved");
        self.state.orientation = Some(value);
        self.state.results = results;
        Ok(self.advance())
    }

    /// Applies `value` to whichever field the current step asks for.
    ///
    /// # Errors
    /// [`ConsultError::InvalidSelection`] at [`Step::Result`] or when `value` is not a
    /// candidate.
    pub fn select(&mut self, value: &str) -> Result<Step, ConsultError> {
        match self.state.step {
            Step::Region => self.select_region(value),
            Step::Department => self.select_department(value),
            Step::School => self.select_school(value),
            Step::Orientation => self.select_orientation(value),
            Step::Result => Err(rejected(Step::Result, "nothing left to select")),
        }
    }

    /// Returns to the previous step, clearing its selection and everything deeper.
    ///
    /// # Errors
    /// [`ConsultError::InvalidSelection`] at [`Step::Region`].
    pub fn back(&mut self) -> Result<Step, ConsultError> {
        let current = self.state.step;
        let Some(previous) = current.previous() else {
            return Err(rejected(current, "already at the first step"));
        };

        self.state.clear_from(previous);
        self.state.step = previous;
        debug!(from = %current, to = %previous, "Wizard stepped back");
        Ok(previous)
    }

    /// Forgets every selection.
    pub fn reset(&mut self) {
        self.state = WizardState::default();
        debug!("Wizard reset");
    }

    /// Classification of the resolved destinations; `None` before [`Step::Result`].
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome<'_>> {
        self.state.step.is_terminal().then(|| Outcome::classify(&self.state.results))
    }

    fn accept(&self, expected: Step, value: &str) -> Result<String, ConsultError> {
        let step = self.state.step;
        if step != expected {
            return Err(rejected(step, format!("cannot select a {expected} at the {step} step")));
        }
        if !self.candidates().contains(&value) {
            return Err(rejected(step, format!("'{value}' is not an available {step}")));
        }
        debug!(%step, value, "Selection accepted");
        Ok(value.to_owned())
    }

    fn advance(&mut self) -> Step {
        if let Some(next) = self.state.step.next() {
            self.state.step = next;
        }
        self.state.step
    }
}

fn rejected(step: Step, message: impl Into<std::borrow::Cow<'static, str>>) -> ConsultError {
    let message = message.into();
    warn!(%step, %message, "Selection rejected");
    ConsultError::InvalidSelection { message, context: None }
}
