//! Supported Languages Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use trustbase_app::domain::voice::responses::{DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LanguageResponse {
    /// Language code (en-ng, ig, yo, ha)
    pub code: String,

    /// English language name
    pub name: String,

    /// Name in the language itself
    pub native_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LanguagesResponse {
    /// Languages the voice assistant ships responses for
    pub languages: Vec<LanguageResponse>,

    /// Code of the fallback language
    pub default: String,
}

/// Supported Languages Handler
///
/// Returns the static supported-language list.
#[endpoint(tags("voice"), summary = "Supported Languages")]
pub(crate) async fn handler() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: SUPPORTED_LANGUAGES
            .iter()
            .map(|language| LanguageResponse {
                code: language.code.to_string(),
                name: language.name.to_string(),
                native_name: language.native_name.to_string(),
            })
            .collect(),
        default: DEFAULT_LANGUAGE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_languages_lists_all_four_with_default() -> TestResult {
        let router = Router::new().push(Router::with_path("voice/languages").get(handler));

        let response: LanguagesResponse = TestClient::get("http://example.com/voice/languages")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(response.languages.len(), 4);
        assert_eq!(response.default, "en-ng");
        assert!(response.languages.iter().any(|language| language.code == "yo"));

        Ok(())
    }
}
