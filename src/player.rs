//! Audio file playback
//!
//! Decodes one file, plays it on the default output device, and polls the
//! sink's busy flag on a fixed tick until the queue drains.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::ui;

/// Errors from loading or playing an audio file
#[derive(Debug, Error)]
pub enum PlayerError {
    /// The file does not exist (checked before any device is opened)
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The file exists but cannot be decoded
    #[error("cannot play {}: {source}", .path.display())]
    Unsupported {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    /// No usable output device
    #[error("audio device unavailable: {0}")]
    Device(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Summary of one completed playback
#[derive(Debug, Clone, Copy)]
pub struct PlaybackReport {
    /// Wall-clock time spent playing
    pub elapsed: Duration,
}

/// Clamp a volume setting into the sink's accepted range
pub fn clamp_volume(volume: f32) -> f32 {
    volume.clamp(0.0, 1.0)
}

/// Play `path` to completion on the default output device
pub fn play_file(
    path: &Path,
    volume: f32,
    poll_interval: Duration,
) -> Result<PlaybackReport, PlayerError> {
    if !path.is_file() {
        return Err(PlayerError::FileNotFound(path.to_path_buf()));
    }

    let (_stream, handle) = rodio::OutputStream::try_default()
        .map_err(|e| PlayerError::Device(e.to_string()))?;
    let sink = rodio::Sink::try_new(&handle)
        .map_err(|e| PlayerError::Device(e.to_string()))?;
    sink.set_volume(clamp_volume(volume));

    let file = File::open(path)?;
    let source = rodio::Decoder::new(BufReader::new(file)).map_err(|source| {
        PlayerError::Unsupported {
            path: path.to_path_buf(),
            source,
        }
    })?;
    sink.append(source);
    info!("playing {}", path.display());

    let started = Instant::now();

    // Busy-wait on the sink until the queue drains
    while !sink.empty() {
        std::thread::sleep(poll_interval);
    }

    let elapsed = started.elapsed();
    debug!("playback finished after {:.1}s", elapsed.as_secs_f64());
    Ok(PlaybackReport { elapsed })
}

/// Play a file with a progress spinner
pub fn run(config: &Config, path: &Path, volume: Option<f32>) -> anyhow::Result<()> {
    let volume = volume.unwrap_or(config.playback.volume);
    let poll_interval = Duration::from_millis(config.playback.poll_interval_ms);

    let spinner = ui::playback_spinner();
    spinner.set_message(format!("Playing {}", path.display()));
    let report = play_file(path, volume, poll_interval);
    spinner.finish_and_clear();

    let report = report?;
    ui::print_success(&format!("Done in {:.1}s", report.elapsed.as_secs_f64()));
    Ok(())
}
