//! Terminal theme, resolved once at startup and handed to the renderer.
//!
//! Result colors arrive as utility-class tags such as `text-green-500`. Only the hue is
//! meaningful in a terminal; it maps onto the eight ANSI colors, bright variants on dark
//! backgrounds.

use articula::domain::config::ThemePreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    mode: Mode,
    color: bool,
}

impl Theme {
    /// Resolves the preference against the environment (`NO_COLOR`, `COLORFGBG`).
    #[must_use]
    pub fn resolve(preference: ThemePreference, color: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let colorfgbg = std::env::var("COLORFGBG").ok();
        Self::from_parts(preference, color && !no_color, colorfgbg.as_deref())
    }

    fn from_parts(preference: ThemePreference, color: bool, colorfgbg: Option<&str>) -> Self {
        let mode = match preference {
            ThemePreference::Light => Mode::Light,
            ThemePreference::Dark => Mode::Dark,
            ThemePreference::Auto => detect(colorfgbg),
        };
        Self { mode, color }
    }

    /// Plain output, no escape sequences.
    #[must_use]
    pub const fn plain() -> Self {
        Self { mode: Mode::Dark, color: false }
    }

    /// Colors `text` with the hue of a utility tag (`text-blue-500`).
    #[must_use]
    pub fn tag(&self, tag: &str, text: &str) -> String {
        self.paint(hue(tag), false, text)
    }

    #[must_use]
    pub fn accent(&self, text: &str) -> String {
        self.paint(Hue::Blue, true, text)
    }

    #[must_use]
    pub fn success(&self, text: &str) -> String {
        self.paint(Hue::Green, true, text)
    }

    #[must_use]
    pub fn warning(&self, text: &str) -> String {
        self.paint(Hue::Yellow, true, text)
    }

    #[must_use]
    pub fn muted(&self, text: &str) -> String {
        if !self.color {
            return text.to_owned();
        }
        format!("\x1b[2m{text}\x1b[0m")
    }

    fn paint(&self, hue: Hue, bold: bool, text: &str) -> String {
        if !self.color {
            return text.to_owned();
        }
        let base = match self.mode {
            Mode::Light => 30,
            Mode::Dark => 90,
        };
        let code = base + hue as u8;
        if bold { format!("\x1b[1;{code}m{text}\x1b[0m") } else { format!("\x1b[{code}m{text}\x1b[0m") }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hue {
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
}

fn hue(tag: &str) -> Hue {
    let name = tag.split(['-', ':']).find(|part| !matches!(*part, "text" | "hover" | "bg"));
    match name.unwrap_or_default() {
        "red" | "rose" => Hue::Red,
        "green" | "emerald" | "lime" | "teal" => Hue::Green,
        "yellow" | "amber" | "orange" => Hue::Yellow,
        "purple" | "violet" | "fuchsia" | "pink" => Hue::Magenta,
        "cyan" | "sky" => Hue::Cyan,
        _ => Hue::Blue,
    }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); backgrounds 0-6 and 8 are dark.
fn detect(colorfgbg: Option<&str>) -> Mode {
    let background = colorfgbg.and_then(|v| v.rsplit(';').next()).and_then(|bg| bg.parse::<u8>().ok());
    match background {
        Some(7 | 9..=15) => Mode::Light,
        _ => Mode::Dark,
    }
}
