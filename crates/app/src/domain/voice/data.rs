//! Voice Data

/// A voice query: free text plus language and speaker hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceQuery {
    pub text: String,
    pub language: String,
    pub speaker: String,
}

/// The selected canned answer. The language echoes the request even when the
/// lookup fell back to the default language.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceAnswer {
    pub text: String,
    pub audio_url: String,
    pub language: String,
    /// Seconds spent serving the query, including the simulated delay.
    pub processing_time: f64,
}
