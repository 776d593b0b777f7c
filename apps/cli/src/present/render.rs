use super::icon::Icon;
use super::theme::Theme;
use articula::domain::articulation::ArticulationResult;
use articula::domain::step::Step;
use articula::features::consult::Outcome;
use std::io::{self, Write};

const AVAILABLE_TITLE: &str = "¡Tus estudios ya cuentan!";
const UNAVAILABLE_TITLE: &str = "Próximamente disponible";
const UNAVAILABLE_HINT: &str = "Consultá en tu escuela para más información.";
const LINK_MARKER: &str = "↗";

/// Question shown for each selection step.
#[must_use]
pub const fn prompt(step: Step) -> Option<&'static str> {
    match step {
        Step::Region => Some("Seleccioná tu Región"),
        Step::Department => Some("Seleccioná tu Departamento"),
        Step::School => Some("Seleccioná tu Escuela Técnica"),
        Step::Orientation => Some("Seleccioná tu Orientación"),
        Step::Result => None,
    }
}

/// Writes wizard screens and query output with a fixed theme.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    #[must_use]
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Five markers; completed steps carry a check and the current one a dot.
    pub fn progress(&self, out: &mut impl Write, current: Step) -> io::Result<()> {
        let markers: Vec<String> = Step::ALL
            .iter()
            .map(|step| {
                let label = step.index() + 1;
                if *step < current {
                    self.theme.success(&format!("✓{label}"))
                } else if *step == current {
                    self.theme.accent(&format!("●{label}"))
                } else {
                    self.theme.muted(&format!("○{label}"))
                }
            })
            .collect();
        writeln!(out, "{}", markers.join(&self.theme.muted(" ─ ")))
    }

    pub fn prompt(&self, out: &mut impl Write, step: Step) -> io::Result<()> {
        match prompt(step) {
            Some(text) => writeln!(out, "{}", self.theme.accent(text)),
            None => Ok(()),
        }
    }

    /// Numbered option list for interactive selection.
    pub fn options(&self, out: &mut impl Write, options: &[&str]) -> io::Result<()> {
        if options.is_empty() {
            return writeln!(out, "  {}", self.theme.muted("No hay opciones disponibles."));
        }
        for (i, option) in options.iter().enumerate() {
            writeln!(out, "  {} {option}", self.theme.muted(&format!("{:>2})", i + 1)))?;
        }
        Ok(())
    }

    /// Bare list, one item per line, for query commands.
    pub fn list(&self, out: &mut impl Write, items: &[&str]) -> io::Result<()> {
        for item in items {
            writeln!(out, "{item}")?;
        }
        Ok(())
    }

    pub fn outcome(&self, out: &mut impl Write, orientation: &str, outcome: &Outcome<'_>) -> io::Result<()> {
        if !outcome.is_available() {
            writeln!(out, "{}", self.theme.warning(UNAVAILABLE_TITLE))?;
            return writeln!(out, "{UNAVAILABLE_HINT}");
        }

        writeln!(out, "{}", self.theme.success(AVAILABLE_TITLE))?;
        writeln!(out, "{}", self.theme.accent(orientation))?;
        for result in outcome.results() {
            self.card(out, result)?;
        }
        Ok(())
    }

    pub fn notice(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        writeln!(out, "{}", self.theme.warning(message))
    }

    pub fn hint(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        writeln!(out, "{}", self.theme.muted(message))
    }

    fn card(&self, out: &mut impl Write, result: &ArticulationResult) -> io::Result<()> {
        let icon = Icon::from_key(&result.icon_key).glyph();
        writeln!(out)?;
        writeln!(out, "  {}", self.theme.accent(&result.institute))?;
        writeln!(out, "  {} {}", self.theme.tag(&result.display_color, icon), result.program)?;
        if !result.address.is_empty() {
            writeln!(out, "  {}", self.theme.muted(&result.address))?;
        }
        if let Some(website) = &result.website {
            writeln!(out, "  {LINK_MARKER} {website}")?;
        }
        Ok(())
    }
}
