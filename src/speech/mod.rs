//! Capability boundary to the platform speech engine.

pub mod synth;
#[cfg(feature = "system-speech")]
pub mod system;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A named, language-tagged synthetic speaker offered by the engine.
///
/// Voices are sourced from the host environment; names are unique within
/// one engine session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub name: String,
    pub lang: String,
}

/// One discrete speech request submitted to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// Spoken-language tag, fixed by configuration regardless of voice.
    pub locale: String,
    pub rate: f32,
    pub voice: Option<Voice>,
}

/// The five operations every speech backend must offer. The platform's
/// utterance queue is process-wide; callers that need the at-most-one-active
/// guarantee go through [`synth::Speaker`], which cancels before speaking.
#[async_trait::async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Queue an utterance for playback.
    async fn speak(&self, utterance: Utterance) -> Result<()>;
    async fn pause(&self) -> Result<()>;
    async fn resume(&self) -> Result<()>;
    /// Drop all pending and active utterances. Idempotent; never an error
    /// when nothing is speaking.
    async fn cancel(&self) -> Result<()>;
    /// Currently known voices. May be empty while the platform is still
    /// enumerating.
    async fn list_voices(&self) -> Result<Vec<Voice>>;
}
