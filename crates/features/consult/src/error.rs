use std::borrow::Cow;

/// A specialized [`ConsultError`] enum of this crate.
#[articula_derive::articula_error]
pub enum ConsultError {
    /// The dataset is not a sequence of record-like entries.
    #[error("Invalid dataset{}: {message}", format_context(.context))]
    Data { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The dataset text is not JSON at all.
    #[error("Dataset is not valid JSON{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Dataset could not be read{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Caller contract violation: value outside the candidate list, or a transition
    /// that is not valid for the current step.
    #[error("Invalid selection{}: {message}", format_context(.context))]
    InvalidSelection { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal consult error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ConsultError {
    /// Whether the error means the dataset itself is unusable.
    #[must_use]
    pub const fn is_data_error(&self) -> bool {
        matches!(self, Self::Data { .. } | Self::Json { .. } | Self::Io { .. })
    }
}
