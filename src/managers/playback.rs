//! Playback state machine for spoken lesson readout.
//!
//! Owns the transient per-session controls (rate, selected voice, play
//! state) and funnels every engine command through the [`Speaker`] so the
//! at-most-one-active-utterance discipline holds no matter how the UI
//! drives it.

use crate::speech::synth::Speaker;
use crate::speech::Voice;
use anyhow::Result;
use log::{debug, info};
use std::sync::{Mutex, MutexGuard};

/// Transport position of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Idle,
    Playing,
    Paused,
}

#[derive(Debug, Clone)]
struct ControlState {
    rate: f32,
    voice: Option<Voice>,
    play: PlayState,
}

pub struct PlaybackController {
    speaker: Speaker,
    state: Mutex<ControlState>,
}

impl PlaybackController {
    pub fn new(speaker: Speaker) -> Self {
        let rate = speaker.settings().default_rate;
        Self {
            speaker,
            state: Mutex::new(ControlState {
                rate,
                voice: None,
                play: PlayState::Idle,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ControlState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn play_state(&self) -> PlayState {
        self.lock().play
    }

    pub fn rate(&self) -> f32 {
        self.lock().rate
    }

    pub fn selected_voice(&self) -> Option<Voice> {
        self.lock().voice.clone()
    }

    /// Clamp and store the readout rate. Out-of-range values never reach
    /// the engine. Returns the value actually stored.
    pub fn set_rate(&self, rate: f32) -> f32 {
        let clamped = self.speaker.settings().clamp_rate(rate);
        if clamped != rate {
            debug!("rate {} clamped to {}", rate, clamped);
        }
        self.lock().rate = clamped;
        clamped
    }

    pub fn select_voice(&self, voice: Option<Voice>) {
        self.lock().voice = voice;
    }

    /// Start reading `text` from the beginning with the current controls.
    pub async fn play(&self, text: &str) -> Result<()> {
        let (rate, voice) = {
            let state = self.lock();
            (state.rate, state.voice.clone())
        };
        self.speaker.speak(text, rate, voice.as_ref()).await?;
        self.lock().play = PlayState::Playing;
        info!("playback started (rate {})", rate);
        Ok(())
    }

    /// Pause the active utterance. No-op unless currently playing.
    pub async fn pause(&self) -> Result<()> {
        if self.play_state() != PlayState::Playing {
            return Ok(());
        }
        self.speaker.pause().await?;
        self.lock().play = PlayState::Paused;
        Ok(())
    }

    /// Resume a paused utterance. No-op unless currently paused.
    pub async fn resume(&self) -> Result<()> {
        if self.play_state() != PlayState::Paused {
            return Ok(());
        }
        self.speaker.resume().await?;
        self.lock().play = PlayState::Playing;
        Ok(())
    }

    /// Cancel any in-flight speech. Safe from any state, including idle.
    pub async fn stop(&self) -> Result<()> {
        self.speaker.stop().await?;
        self.lock().play = PlayState::Idle;
        Ok(())
    }

    /// Session teardown: stop speech and restore control defaults.
    pub async fn reset(&self) -> Result<()> {
        self.stop().await?;
        let default_rate = self.speaker.settings().default_rate;
        let mut state = self.lock();
        state.rate = default_rate;
        state.voice = None;
        info!("playback controls reset");
        Ok(())
    }

    pub fn speaker(&self) -> &Speaker {
        &self.speaker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SpeechSettings;
    use crate::speech::testing::{voice, Command, ScriptedEngine};
    use std::sync::Arc;

    fn controller() -> (Arc<ScriptedEngine>, PlaybackController) {
        let engine = Arc::new(ScriptedEngine::default());
        let speaker = Speaker::new(engine.clone(), SpeechSettings::default());
        (engine, PlaybackController::new(speaker))
    }

    #[tokio::test]
    async fn test_play_transitions_to_playing() {
        let (engine, controller) = controller();
        controller.play("hello").await.unwrap();

        assert_eq!(controller.play_state(), PlayState::Playing);
        assert_eq!(engine.active(), Some("hello".to_string()));
    }

    #[tokio::test]
    async fn test_rate_clamped_at_input_boundary() {
        let (engine, controller) = controller();

        assert_eq!(controller.set_rate(2.5), 2.0);
        controller.play("fast").await.unwrap();
        assert_eq!(engine.spoken()[0].rate, 2.0);

        assert_eq!(controller.set_rate(0.1), 0.5);
        controller.play("slow").await.unwrap();
        assert_eq!(engine.spoken()[1].rate, 0.5);
    }

    #[tokio::test]
    async fn test_pause_is_noop_when_idle() {
        let (engine, controller) = controller();
        controller.pause().await.unwrap();

        assert_eq!(controller.play_state(), PlayState::Idle);
        assert!(engine.commands().is_empty());
    }

    #[tokio::test]
    async fn test_pause_resume_cycle() {
        let (engine, controller) = controller();
        controller.play("hello").await.unwrap();

        controller.pause().await.unwrap();
        assert_eq!(controller.play_state(), PlayState::Paused);

        // Pausing twice stays paused without another engine command.
        controller.pause().await.unwrap();
        assert_eq!(
            engine
                .commands()
                .iter()
                .filter(|c| matches!(c, Command::Pause))
                .count(),
            1
        );

        controller.resume().await.unwrap();
        assert_eq!(controller.play_state(), PlayState::Playing);
        assert!(engine.commands().contains(&Command::Resume));
    }

    #[tokio::test]
    async fn test_resume_is_noop_unless_paused() {
        let (engine, controller) = controller();
        controller.resume().await.unwrap();
        assert!(engine.commands().is_empty());

        controller.play("hello").await.unwrap();
        controller.resume().await.unwrap();
        assert!(!engine.commands().contains(&Command::Resume));
    }

    #[tokio::test]
    async fn test_stop_is_safe_from_any_state() {
        let (engine, controller) = controller();

        controller.stop().await.unwrap();
        assert_eq!(controller.play_state(), PlayState::Idle);

        controller.play("hello").await.unwrap();
        controller.pause().await.unwrap();
        controller.stop().await.unwrap();

        assert_eq!(controller.play_state(), PlayState::Idle);
        assert_eq!(engine.active(), None);
    }

    #[tokio::test]
    async fn test_reset_restores_control_defaults() {
        let (engine, controller) = controller();
        controller.set_rate(1.7);
        controller.select_voice(Some(voice("Daniel", "en-GB")));
        controller.play("hello").await.unwrap();

        controller.reset().await.unwrap();

        assert_eq!(controller.play_state(), PlayState::Idle);
        assert_eq!(controller.rate(), 1.0);
        assert_eq!(controller.selected_voice(), None);
        assert_eq!(engine.active(), None);
    }
}
