//! Backend over the operating system's speech service (Speech Dispatcher,
//! AVSpeechSynthesizer, WinRT speech) via the `tts` crate.
//!
//! Known limitation: the portable service has no pause primitive, so
//! `pause`/`resume` degrade to logged no-ops and readout continues until
//! stopped. Hosts that need true pause supply their own engine.

use crate::speech::{SpeechEngine, Utterance, Voice};
use anyhow::{Context, Result};
use log::{debug, warn};
use std::sync::Mutex;
use tts::Tts;

pub struct SystemSpeech {
    tts: Mutex<Tts>,
}

impl SystemSpeech {
    /// Connect to the platform speech service. Hosts may ignore the error
    /// and run without readout when no service is installed.
    pub fn new() -> Result<Self> {
        let tts = Tts::default().context("platform speech service unavailable")?;
        Ok(Self {
            tts: Mutex::new(tts),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tts> {
        self.tts.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Map a relative rate multiplier onto the backend's native range:
    /// 1.0 is the native normal rate, the bounds land on native min/max.
    fn scaled_rate(tts: &Tts, rate: f32) -> f32 {
        let normal = tts.normal_rate();
        if rate >= 1.0 {
            normal + (tts.max_rate() - normal) * (rate - 1.0).min(1.0)
        } else {
            normal - (normal - tts.min_rate()) * ((1.0 - rate) / 0.5).min(1.0)
        }
    }
}

#[async_trait::async_trait]
impl SpeechEngine for SystemSpeech {
    async fn speak(&self, utterance: Utterance) -> Result<()> {
        let mut tts = self.lock();

        if let Some(ref wanted) = utterance.voice {
            match tts.voices() {
                Ok(voices) => {
                    if let Some(v) = voices.iter().find(|v| v.name() == wanted.name) {
                        if let Err(e) = tts.set_voice(v) {
                            warn!("failed to select voice {}: {}", wanted.name, e);
                        }
                    }
                }
                Err(e) => warn!("voice enumeration failed: {}", e),
            }
        }

        let scaled = Self::scaled_rate(&tts, utterance.rate);
        if let Err(e) = tts.set_rate(scaled) {
            warn!("failed to set rate {}: {}", utterance.rate, e);
        }

        // interrupt=true drops anything already queued.
        tts.speak(utterance.text.as_str(), true)?;
        Ok(())
    }

    async fn pause(&self) -> Result<()> {
        debug!("pause requested but not supported by the platform backend");
        Ok(())
    }

    async fn resume(&self) -> Result<()> {
        debug!("resume requested but not supported by the platform backend");
        Ok(())
    }

    async fn cancel(&self) -> Result<()> {
        self.lock().stop()?;
        Ok(())
    }

    async fn list_voices(&self) -> Result<Vec<Voice>> {
        Ok(self
            .lock()
            .voices()?
            .into_iter()
            .map(|v| Voice {
                name: v.name(),
                lang: v.language().to_string(),
            })
            .collect())
    }
}
