// System audio mute control

//! Audio mute control
//!
//! This module toggles the system output mute through the command-line
//! tool of the configured audio stack (`pactl`, `wpctl` or `amixer`).

use crate::types::Mixer;
use anyhow::{Context, Result};
use tokio::process::Command;

/// Something that can mute and unmute system audio
#[allow(async_fn_in_trait)]
pub trait AudioControl {
    /// Set the output mute state
    async fn set_muted(&self, muted: bool) -> Result<()>;
}

/// Audio control backed by a mixer command
pub struct CommandMixer {
    mixer: Mixer,
}

impl CommandMixer {
    /// Create a controller for the given backend
    pub fn new(mixer: Mixer) -> Self {
        Self { mixer }
    }

    /// Backend in use
    pub fn mixer(&self) -> Mixer {
        self.mixer
    }
}

/// Program and arguments that set the mute state for a backend
fn mute_command(mixer: Mixer, muted: bool) -> (&'static str, Vec<&'static str>) {
    match mixer {
        Mixer::Pactl => (
            "pactl",
            vec!["set-sink-mute", "@DEFAULT_SINK@", if muted { "1" } else { "0" }],
        ),
        Mixer::Wpctl => (
            "wpctl",
            vec!["set-mute", "@DEFAULT_AUDIO_SINK@", if muted { "1" } else { "0" }],
        ),
        Mixer::Amixer => (
            "amixer",
            vec!["-q", "set", "Master", if muted { "mute" } else { "unmute" }],
        ),
    }
}

impl AudioControl for CommandMixer {
    async fn set_muted(&self, muted: bool) -> Result<()> {
        let (program, args) = mute_command(self.mixer, muted);
        log::debug!("Running {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(&args)
            .output()
            .await
            .with_context(|| format!("Failed to execute {}", program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("{} failed ({}): {}", program, output.status, stderr.trim());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pactl_command() {
        assert_eq!(
            mute_command(Mixer::Pactl, true),
            ("pactl", vec!["set-sink-mute", "@DEFAULT_SINK@", "1"])
        );
        assert_eq!(
            mute_command(Mixer::Pactl, false),
            ("pactl", vec!["set-sink-mute", "@DEFAULT_SINK@", "0"])
        );
    }

    #[test]
    fn test_wpctl_command() {
        assert_eq!(
            mute_command(Mixer::Wpctl, true),
            ("wpctl", vec!["set-mute", "@DEFAULT_AUDIO_SINK@", "1"])
        );
    }

    #[test]
    fn test_amixer_command() {
        assert_eq!(
            mute_command(Mixer::Amixer, true),
            ("amixer", vec!["-q", "set", "Master", "mute"])
        );
        assert_eq!(
            mute_command(Mixer::Amixer, false),
            ("amixer", vec!["-q", "set", "Master", "unmute"])
        );
    }

    #[test]
    fn test_command_mixer_backend() {
        assert_eq!(CommandMixer::new(Mixer::Wpctl).mixer(), Mixer::Wpctl);
    }
}
