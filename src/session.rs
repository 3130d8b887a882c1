//! One open lesson: the lifetime that bounds playback and quiz state.
//!
//! Mirrors the modal lifecycle of the host UI. `open` swaps the lesson in
//! (stopping whatever was speaking), `close` forces everything back to
//! defaults. Transport, rate, voice, and quiz calls in between operate on
//! the currently open lesson only.

use crate::catalog::Lesson;
use crate::composer;
use crate::managers::playback::{PlayState, PlaybackController};
use crate::managers::quiz::{QuizAnswerState, QuizFeedback};
use crate::settings::SpeechSettings;
use crate::speech::synth::Speaker;
use crate::speech::{SpeechEngine, Voice};
use crate::voices::VoiceCatalog;
use anyhow::Result;
use log::debug;
use std::sync::Arc;
use tokio::sync::watch;

pub struct LessonSession {
    playback: PlaybackController,
    voices: VoiceCatalog,
    quiz: QuizAnswerState,
    lesson: Option<Lesson>,
}

impl LessonSession {
    pub fn new(engine: Arc<dyn SpeechEngine>, settings: SpeechSettings) -> Self {
        let speaker = Speaker::new(engine.clone(), settings.clone());
        Self {
            playback: PlaybackController::new(speaker),
            voices: VoiceCatalog::new(engine, settings),
            quiz: QuizAnswerState::default(),
            lesson: None,
        }
    }

    /// Open a lesson, replacing any previous one. Always stops in-flight
    /// speech before the new lesson can be played.
    pub async fn open(&mut self, lesson: Lesson) -> Result<()> {
        self.playback.stop().await?;
        self.quiz.reset();
        debug!("lesson opened: {}", lesson.id);
        self.lesson = Some(lesson);
        Ok(())
    }

    /// Forced teardown: stop speech, restore rate/voice defaults, clear the
    /// quiz answer, drop the lesson. Always safe.
    pub async fn close(&mut self) -> Result<()> {
        self.playback.reset().await?;
        self.quiz.reset();
        if let Some(lesson) = self.lesson.take() {
            debug!("lesson closed: {}", lesson.id);
        }
        Ok(())
    }

    pub fn lesson(&self) -> Option<&Lesson> {
        self.lesson.as_ref()
    }

    /// Read the open lesson aloud from the beginning. No-op when no lesson
    /// is open.
    pub async fn play(&self) -> Result<()> {
        let Some(lesson) = self.lesson.as_ref() else {
            debug!("play requested with no lesson open");
            return Ok(());
        };
        self.playback.play(&composer::compose(lesson)).await
    }

    /// Single-button transport: idle starts readout, playing pauses,
    /// paused resumes.
    pub async fn toggle(&self) -> Result<()> {
        match self.playback.play_state() {
            PlayState::Idle => self.play().await,
            PlayState::Playing => self.playback.pause().await,
            PlayState::Paused => self.playback.resume().await,
        }
    }

    pub async fn pause(&self) -> Result<()> {
        self.playback.pause().await
    }

    pub async fn resume(&self) -> Result<()> {
        self.playback.resume().await
    }

    pub async fn stop(&self) -> Result<()> {
        self.playback.stop().await
    }

    pub fn play_state(&self) -> PlayState {
        self.playback.play_state()
    }

    pub fn set_rate(&self, rate: f32) -> f32 {
        self.playback.set_rate(rate)
    }

    pub fn rate(&self) -> f32 {
        self.playback.rate()
    }

    pub fn select_voice(&self, voice: Option<Voice>) {
        self.playback.select_voice(voice)
    }

    pub fn selected_voice(&self) -> Option<Voice> {
        self.playback.selected_voice()
    }

    /// Re-query the voice catalog; on the first non-empty load with nothing
    /// selected yet, the default-selection policy picks a voice.
    pub async fn refresh_voices(&self) -> Result<Vec<Voice>> {
        let voices = self.voices.refresh().await?;
        if !voices.is_empty() && self.playback.selected_voice().is_none() {
            if let Some(default) = self.voices.default_voice(&voices) {
                debug!("auto-selected voice {}", default.name);
                self.playback.select_voice(Some(default));
            }
        }
        Ok(voices)
    }

    pub fn subscribe_voices(&self) -> watch::Receiver<Vec<Voice>> {
        self.voices.subscribe()
    }

    /// Record a quiz answer for the open lesson. Inert when the lesson has
    /// no quiz; the first answer locks in.
    pub fn select_answer(&mut self, index: usize) {
        if self
            .lesson
            .as_ref()
            .and_then(|l| l.quiz.as_ref())
            .is_some()
        {
            self.quiz.select(index);
        }
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.quiz.selected()
    }

    pub fn quiz_feedback(&self) -> Option<QuizFeedback> {
        let quiz = self.lesson.as_ref()?.quiz.as_ref()?;
        self.quiz.feedback(quiz)
    }
}
