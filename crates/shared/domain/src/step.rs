use serde::{Deserialize, Serialize};
use std::fmt;

/// The five steps of the consult wizard, in order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[default]
    Region,
    Department,
    School,
    Orientation,
    Result,
}

impl Step {
    pub const ALL: [Self; 5] =
        [Self::Region, Self::Department, Self::School, Self::Orientation, Self::Result];

    /// Zero-based position, `Result` is 4.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Region => None,
            Self::Department => Some(Self::Region),
            Self::School => Some(Self::Department),
            Self::Orientation => Some(Self::School),
            Self::Result => Some(Self::Orientation),
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Region => Some(Self::Department),
            Self::Department => Some(Self::School),
            Self::School => Some(Self::Orientation),
            Self::Orientation => Some(Self::Result),
            Self::Result => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Result)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Region => "region",
            Self::Department => "department",
            Self::School => "school",
            Self::Orientation => "orientation",
            Self::Result => "result",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_walk_forward_and_back() {
        let mut step = Step::Region;
        let mut visited = vec![step];
        while let Some(next) = step.next() {
            step = next;
            visited.push(step);
        }
        assert_eq!(visited, Step::ALL);
        assert!(step.is_terminal());

        while let Some(prev) = step.previous() {
            step = prev;
        }
        assert_eq!(step, Step::Region);
    }

    #[test]
    fn index_matches_position() {
        for (i, step) in Step::ALL.iter().enumerate() {
            assert_eq!(usize::from(step.index()), i);
        }
    }
}
