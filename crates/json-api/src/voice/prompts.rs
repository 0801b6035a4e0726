//! Demo Prompts Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::voice::responses::DEMO_PROMPTS;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DemoPromptResponse {
    /// The prompt text
    pub text: String,

    /// Response category the prompt is expected to select
    pub expected_type: String,

    /// Languages the prompt has canned responses in
    pub languages: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DemoPromptsResponse {
    /// The static demo prompt list
    pub prompts: Vec<DemoPromptResponse>,
}

/// Demo Prompts Handler
///
/// Returns the static demo prompt list.
#[endpoint(tags("voice"), summary = "Demo Prompts")]
pub(crate) async fn handler() -> Json<DemoPromptsResponse> {
    Json(DemoPromptsResponse {
        prompts: DEMO_PROMPTS
            .iter()
            .map(|prompt| DemoPromptResponse {
                text: prompt.text.to_string(),
                expected_type: prompt.expected_type.as_str().to_string(),
                languages: prompt
                    .languages
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            })
            .collect(),
    })
}
