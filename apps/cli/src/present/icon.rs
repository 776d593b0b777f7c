use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Closed set of program icons understood by the renderer.
///
/// Dataset keys outside this table render as [`Icon::Star`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, EnumIter, IntoStaticStr)]
pub enum Icon {
    Pickaxe,
    Hammer,
    Bolt,
    Sun,
    HeartPulse,
    Wine,
    Bot,
    Brain,
    Code,
    Shield,
    Cpu,
    #[default]
    Star,
}

impl Icon {
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Pickaxe => "⛏",
            Self::Hammer => "🔨",
            Self::Bolt => "⚡",
            Self::Sun => "☀",
            Self::HeartPulse => "♥",
            Self::Wine => "🍷",
            Self::Bot => "🤖",
            Self::Brain => "🧠",
            Self::Code => "</>",
            Self::Shield => "🛡",
            Self::Cpu => "▣",
            Self::Star => "★",
        }
    }
}
