//! Training-module catalog presentation with spoken lesson readout.
//!
//! The crate is the logic core behind a lesson-browsing UI: a read-only
//! catalog of modules and lessons ([`catalog`]), plain-text composition of
//! what a lesson sounds like ([`composer`]), a playback state machine over
//! a pluggable speech engine ([`managers::playback`], [`speech`]), lazy
//! voice discovery ([`voices`]), and single-shot quiz interaction
//! ([`managers::quiz`]). [`session::LessonSession`] ties them together for
//! the lifetime of one open lesson.
//!
//! The UI layer itself (rendering, transport buttons, modal widgets) lives
//! in the host application; so does any real speech backend unless the
//! `system-speech` feature is enabled, which bridges to the operating
//! system's speech service.

pub mod catalog;
pub mod composer;
pub mod managers;
pub mod session;
pub mod settings;
pub mod speech;
pub mod voices;

pub use catalog::{Catalog, Lesson, Module, Quiz};
pub use managers::playback::{PlayState, PlaybackController};
pub use managers::quiz::{QuizAnswerState, QuizFeedback};
pub use session::LessonSession;
pub use settings::SpeechSettings;
pub use speech::synth::Speaker;
#[cfg(feature = "system-speech")]
pub use speech::system::SystemSpeech;
pub use speech::{SpeechEngine, Utterance, Voice};
pub use voices::VoiceCatalog;
