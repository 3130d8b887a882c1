//! Tunables for the spoken-readout pipeline.

use serde::{Deserialize, Serialize};

/// Speech configuration carried by the host application's settings store.
/// Every field falls back to the reference defaults when absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpeechSettings {
    /// Locale applied to every utterance, independent of which voice is
    /// selected.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Voices whose language tag does not start with this prefix are
    /// hidden from selection.
    #[serde(default = "default_voice_filter")]
    pub voice_filter: String,
    #[serde(default = "default_rate")]
    pub default_rate: f32,
    #[serde(default = "default_min_rate")]
    pub min_rate: f32,
    #[serde(default = "default_max_rate")]
    pub max_rate: f32,
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_voice_filter() -> String {
    "en-".to_string()
}

fn default_rate() -> f32 {
    1.0
}

fn default_min_rate() -> f32 {
    0.5
}

fn default_max_rate() -> f32 {
    2.0
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            voice_filter: default_voice_filter(),
            default_rate: default_rate(),
            min_rate: default_min_rate(),
            max_rate: default_max_rate(),
        }
    }
}

impl SpeechSettings {
    /// Language family of the pinned locale, e.g. "en" for "en-US".
    pub fn language_family(&self) -> &str {
        self.locale
            .split(['-', '_'])
            .next()
            .unwrap_or(self.locale.as_str())
    }

    /// Clamp a requested readout rate to the supported range.
    pub fn clamp_rate(&self, rate: f32) -> f32 {
        rate.clamp(self.min_rate, self.max_rate)
    }
}
