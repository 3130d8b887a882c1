//! Thin wrapper over the speech engine enforcing the playback contract:
//! cancel-before-speak, pinned utterance locale, voice compatibility.

use crate::settings::SpeechSettings;
use crate::speech::{SpeechEngine, Utterance, Voice};
use crate::voices::filtered;
use anyhow::Result;
use log::debug;
use std::sync::Arc;

pub struct Speaker {
    engine: Arc<dyn SpeechEngine>,
    settings: SpeechSettings,
}

impl Speaker {
    pub fn new(engine: Arc<dyn SpeechEngine>, settings: SpeechSettings) -> Self {
        Self { engine, settings }
    }

    /// Submit `text` for readout, replacing whatever utterance is active.
    ///
    /// The utterance locale is always the configured one. `voice` only
    /// takes effect when its tag belongs to the same language family;
    /// otherwise the engine's default voice for that locale speaks.
    pub async fn speak(&self, text: &str, rate: f32, voice: Option<&Voice>) -> Result<()> {
        // At most one utterance is ever active, engine-wide.
        self.engine.cancel().await?;

        let voice = voice
            .filter(|v| v.lang.starts_with(self.settings.language_family()))
            .cloned();
        debug!(
            "speaking {} chars (rate {}, voice {:?})",
            text.len(),
            rate,
            voice.as_ref().map(|v| v.name.as_str())
        );

        self.engine
            .speak(Utterance {
                text: text.to_string(),
                locale: self.settings.locale.clone(),
                rate,
                voice,
            })
            .await
    }

    pub async fn pause(&self) -> Result<()> {
        self.engine.pause().await
    }

    pub async fn resume(&self) -> Result<()> {
        self.engine.resume().await
    }

    /// Cancel everything queued or speaking. Safe to call when idle.
    pub async fn stop(&self) -> Result<()> {
        self.engine.cancel().await
    }

    /// Latest snapshot of selectable voices, filtered to the configured
    /// language prefix. May be empty while the platform is enumerating.
    pub async fn voices(&self) -> Result<Vec<Voice>> {
        Ok(filtered(
            self.engine.list_voices().await?,
            &self.settings.voice_filter,
        ))
    }

    pub fn settings(&self) -> &SpeechSettings {
        &self.settings
    }
}
