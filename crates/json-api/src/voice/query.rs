//! Voice Query Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::voice::{data::VoiceQuery, responses::DEFAULT_LANGUAGE};

use crate::{extensions::*, state::State};

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_speaker() -> String {
    "default".to_string()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VoiceQueryRequest {
    /// The spoken or typed question
    pub text: String,

    /// Response language code
    #[serde(default = "default_language")]
    pub language: String,

    /// Voice used for audio synthesis
    #[serde(default = "default_speaker")]
    pub speaker: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VoiceQueryResponse {
    /// The answer text
    pub text: String,

    /// URL of the pre-generated audio clip
    pub audio_url: String,

    /// Language the answer is in
    pub language: String,

    /// Measured processing time in seconds
    pub processing_time: f64,
}

/// Voice Query Handler
///
/// Classifies the question and returns the canned answer for its language.
#[endpoint(tags("voice"), summary = "Voice Query")]
pub(crate) async fn handler(
    body: JsonBody<VoiceQueryRequest>,
    depot: &mut Depot,
) -> Result<Json<VoiceQueryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = body.into_inner();

    let answer = state
        .app
        .voice
        .answer(VoiceQuery {
            text: request.text,
            language: request.language,
            speaker: request.speaker,
        })
        .await;

    Ok(Json(VoiceQueryResponse {
        text: answer.text,
        audio_url: answer.audio_url,
        language: answer.language,
        processing_time: answer.processing_time,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use trustbase_app::domain::voice::{MockVoiceService, data::VoiceAnswer};

    use crate::test_helpers::voice_service;

    use super::*;

    fn make_service(voice: MockVoiceService) -> Service {
        voice_service(voice, Router::with_path("voice/query").post(handler))
    }

    #[tokio::test]
    async fn test_query_returns_canned_answer() -> TestResult {
        let mut voice = MockVoiceService::new();

        voice
            .expect_answer()
            .once()
            .withf(|query| {
                query.text == "Why did First Bank access my data?" && query.language == "en-ng"
            })
            .return_once(|query| VoiceAnswer {
                text: "First Bank accessed your transaction history.".to_string(),
                audio_url: "demo_audio/explain_access_en.mp3".to_string(),
                language: query.language,
                processing_time: 1.2,
            });

        let response: VoiceQueryResponse = TestClient::post("http://example.com/voice/query")
            .json(&VoiceQueryRequest {
                text: "Why did First Bank access my data?".to_string(),
                language: "en-ng".to_string(),
                speaker: "default".to_string(),
            })
            .send(&make_service(voice))
            .await
            .take_json()
            .await?;

        assert_eq!(response.audio_url, "demo_audio/explain_access_en.mp3");
        assert_eq!(response.language, "en-ng");

        Ok(())
    }

    #[tokio::test]
    async fn test_query_defaults_language_and_speaker() -> TestResult {
        let mut voice = MockVoiceService::new();

        voice
            .expect_answer()
            .once()
            .withf(|query| query.language == "en-ng" && query.speaker == "default")
            .return_once(|query| VoiceAnswer {
                text: "Answer".to_string(),
                audio_url: "demo_audio/default_en.mp3".to_string(),
                language: query.language,
                processing_time: 0.9,
            });

        let res = TestClient::post("http://example.com/voice/query")
            .json(&serde_json::json!({ "text": "Hello" }))
            .send(&make_service(voice))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
