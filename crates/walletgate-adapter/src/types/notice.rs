/*
[INPUT]:  Flow outcomes (server messages, local validation failures)
[OUTPUT]: Display-ready notices with a success/error tone
[POS]:    Data layer - transient UI state
[UPDATE]: When adding notice tones or display metadata
*/

/// Visual tone of a notice, the analogue of the result area's color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// A display-ready message produced by a flow handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub tone: Tone,
}

impl Notice {
    /// Create a success-toned notice
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
        }
    }

    /// Create an error-toned notice
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
        }
    }

    /// Check if the notice carries a success tone
    pub fn is_success(&self) -> bool {
        self.tone == Tone::Success
    }
}
