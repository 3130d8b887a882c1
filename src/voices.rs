//! Voice catalog discovery.
//!
//! Platform engines populate their voice list lazily, so the catalog is
//! eventually consistent: hosts call [`VoiceCatalog::refresh`] once up
//! front and again whenever the platform signals a change, and subscribers
//! observe the latest snapshot through a watch channel.

use crate::settings::SpeechSettings;
use crate::speech::{SpeechEngine, Voice};
use anyhow::Result;
use log::debug;
use std::sync::Arc;
use tokio::sync::watch;

pub(crate) fn filtered(voices: Vec<Voice>, prefix: &str) -> Vec<Voice> {
    voices
        .into_iter()
        .filter(|v| v.lang.starts_with(prefix))
        .collect()
}

pub struct VoiceCatalog {
    engine: Arc<dyn SpeechEngine>,
    settings: SpeechSettings,
    tx: watch::Sender<Vec<Voice>>,
}

impl VoiceCatalog {
    pub fn new(engine: Arc<dyn SpeechEngine>, settings: SpeechSettings) -> Self {
        let (tx, _) = watch::channel(Vec::new());
        Self {
            engine,
            settings,
            tx,
        }
    }

    /// Re-query the engine and publish the filtered snapshot.
    ///
    /// Safe to call repeatedly; an empty result is normal while the
    /// platform is still enumerating and is not an error.
    pub async fn refresh(&self) -> Result<Vec<Voice>> {
        let voices = filtered(self.engine.list_voices().await?, &self.settings.voice_filter);
        debug!("voice catalog refreshed: {} voices", voices.len());
        self.tx.send_replace(voices.clone());
        Ok(voices)
    }

    /// Subscription point for catalog changes. Consumers de-duplicate by
    /// reading whatever snapshot is current when notified.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Voice>> {
        self.tx.subscribe()
    }

    /// Latest published snapshot, without touching the engine.
    pub fn snapshot(&self) -> Vec<Voice> {
        self.tx.borrow().clone()
    }

    /// Default pick for a fresh session: the first voice of the configured
    /// language family, falling back to the first voice in the list.
    pub fn default_voice(&self, voices: &[Voice]) -> Option<Voice> {
        let family = self.settings.language_family();
        voices
            .iter()
            .find(|v| v.lang.starts_with(family))
            .or_else(|| voices.first())
            .cloned()
    }
}
