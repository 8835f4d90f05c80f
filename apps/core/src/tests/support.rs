//! Shared helpers for the test suite.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::client::{AnalysisClient, Sleeper};
use crate::config::ClientConfig;

/// Sleeper that records requested delays instead of waiting them out.
pub struct RecordingSleeper {
    delays: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            delays: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

/// Client pointed at `base_url` with a short per-attempt timeout and a
/// recording sleeper, so retry behavior is observable without real waits.
pub fn test_client(base_url: &str) -> (AnalysisClient, Arc<RecordingSleeper>) {
    let mut config = ClientConfig::with_base_url(base_url).unwrap();
    config.request_timeout = Duration::from_secs(5);
    let sleeper = RecordingSleeper::new();
    let client = AnalysisClient::new(config)
        .unwrap()
        .with_sleeper(sleeper.clone());
    (client, sleeper)
}

/// A text comfortably above both detection minimums.
pub fn long_text() -> String {
    "the quick brown fox jumps over the lazy dog again and again ".repeat(6)
}
