//! Scripted remote translation provider recording every call.

use std::sync::Mutex;

use async_trait::async_trait;
use flashcards::domain::ports::{RemoteTranslationError, RemoteTranslationSource};

/// Answers with a fixed translation, or fails when none is configured.
#[derive(Debug, Default)]
pub struct StubRemote {
    answer: Mutex<Option<String>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl StubRemote {
    pub fn set_answer(&self, answer: Option<&str>) {
        *self.answer.lock().expect("answer lock") = answer.map(str::to_owned);
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().expect("calls lock").clone()
    }
}

#[async_trait]
impl RemoteTranslationSource for StubRemote {
    async fn fetch_translation(
        &self,
        word: &str,
        language_pair: &str,
    ) -> Result<String, RemoteTranslationError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((word.to_owned(), language_pair.to_owned()));
        self.answer
            .lock()
            .expect("answer lock")
            .clone()
            .ok_or_else(|| RemoteTranslationError::transport("provider unavailable"))
    }
}
