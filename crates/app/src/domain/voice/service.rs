//! Voice service.

use std::{ops::RangeInclusive, time::Instant};

use async_trait::async_trait;
use mockall::automock;
use rand::Rng;
use tokio::time::{Duration, sleep};
use tracing::debug;

use crate::domain::voice::{
    classify,
    data::{VoiceAnswer, VoiceQuery},
    responses,
};

/// Delay range of the simulated inference call, in seconds.
const DEFAULT_DELAY_SECONDS: RangeInclusive<f64> = 0.8..=2.0;

/// Canned-response selector with a simulated inference delay.
///
/// Selection itself is pure; the delay is an await point so concurrent
/// requests keep making progress while one query "thinks".
#[derive(Debug, Clone)]
pub struct CannedVoiceService {
    delay: Option<RangeInclusive<f64>>,
}

impl Default for CannedVoiceService {
    fn default() -> Self {
        Self::new()
    }
}

impl CannedVoiceService {
    #[must_use]
    pub fn new() -> Self {
        Self {
            delay: Some(DEFAULT_DELAY_SECONDS),
        }
    }

    /// Selector without the simulated delay, for tests.
    #[must_use]
    pub fn without_delay() -> Self {
        Self { delay: None }
    }
}

#[async_trait]
impl VoiceService for CannedVoiceService {
    async fn answer(&self, query: VoiceQuery) -> VoiceAnswer {
        let started = Instant::now();

        if let Some(delay) = &self.delay {
            let seconds = rand::thread_rng().gen_range(delay.clone());

            sleep(Duration::from_secs_f64(seconds)).await;
        }

        let category = classify::classify(&query.text);
        let response = responses::canned_response(&query.language, category);

        debug!(category = %category, language = %query.language, "voice query answered");

        VoiceAnswer {
            text: response.text.to_string(),
            audio_url: format!("demo_audio/{}", response.audio_file),
            language: query.language,
            processing_time: started.elapsed().as_secs_f64(),
        }
    }
}

#[automock]
#[async_trait]
pub trait VoiceService: Send + Sync {
    /// Classify the query text and return the canned response for its
    /// language, simulating inference latency.
    async fn answer(&self, query: VoiceQuery) -> VoiceAnswer;
}
