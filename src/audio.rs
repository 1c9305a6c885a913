//! Background music. Playback never fails the show: any problem with the
//! device, the file or the build falls back to a simulated mode that only
//! prints a notice.

use crate::error::Result;
use crate::palette::Tint;
use crate::ui::{Console, Style};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(not(feature = "audio"), allow(dead_code))]
pub enum AudioError {
    #[error("audio support was not compiled in (build with `--features audio`)")]
    Unsupported,
    #[error("no audio output device: {0}")]
    Device(String),
    #[error("cannot read {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("music thread stopped before playback began")]
    Thread,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Playing,
    Simulated,
}

/// Find the asset as given, or next to the executable for bundled builds.
pub fn resolve_asset(name: &Path) -> Option<PathBuf> {
    if name.exists() {
        return Some(name.to_path_buf());
    }
    let exe = std::env::current_exe().ok()?;
    let beside = exe.parent()?.join(name.file_name()?);
    beside.exists().then_some(beside)
}

pub struct MusicPlayer {
    muted: bool,
    backend: Option<backend::Backend>,
}

impl MusicPlayer {
    pub fn new(muted: bool) -> Self {
        Self {
            muted,
            backend: None,
        }
    }

    /// Start looping `name`. Errors returned here are console write errors
    /// only; audio problems degrade to [`Playback::Simulated`].
    pub fn play<W: Write>(&mut self, console: &mut Console<W>, name: &Path) -> Result<Playback> {
        self.stop_backend();

        if self.muted {
            log::info!("music muted from the command line");
            console.line("❌ Music muted with --mute.", Style::tint(Tint::Red))?;
            return self.simulate(console);
        }

        let Some(path) = resolve_asset(name) else {
            log::warn!("music file {} not found", name.display());
            console.line(
                &format!("❌ Music file '{}' not found.", name.display()),
                Style::tint(Tint::Red),
            )?;
            return self.simulate(console);
        };

        match backend::Backend::start(&path) {
            Ok(backend) => {
                log::info!("playing {}", path.display());
                self.backend = Some(backend);
                let shown = name.file_name().map_or_else(|| name.display().to_string(), |f| f.to_string_lossy().into_owned());
                console.line(&format!("🎵 Successfully playing: {shown}"), Style::tint(Tint::BrightGreen))?;
                Ok(Playback::Playing)
            }
            Err(err) => {
                log::warn!("falling back to simulated music: {err}");
                console.line(&format!("❌ {err}"), Style::tint(Tint::Red))?;
                self.simulate(console)
            }
        }
    }

    fn simulate<W: Write>(&mut self, console: &mut Console<W>) -> Result<Playback> {
        console.line(
            "🎵 ♪♫♪ Music simulation mode - No actual audio playing ♪♫♪",
            Style::tint(Tint::BrightMagenta),
        )?;
        Ok(Playback::Simulated)
    }

    /// Stop playback and say so. Safe to call at any time, any number of
    /// times, with or without music playing.
    pub fn stop<W: Write>(&mut self, console: &mut Console<W>) -> Result<()> {
        self.stop_backend();
        console.line("🎵 Music stopped", Style::tint(Tint::Dim))
    }

    fn stop_backend(&mut self) {
        if let Some(backend) = self.backend.take() {
            backend.stop();
        }
    }
}

impl Drop for MusicPlayer {
    fn drop(&mut self) {
        self.stop_backend();
    }
}

#[cfg(feature = "audio")]
mod backend {
    use super::AudioError;
    use rodio::{Decoder, OutputStream, Sink, Source};
    use std::fs::File;
    use std::io::BufReader;
    use std::path::Path;
    use std::sync::mpsc;
    use std::thread::JoinHandle;

    const VOLUME: f32 = 0.7;

    /// A thread owning the output stream; it plays until told to stop.
    pub struct Backend {
        stop_tx: mpsc::Sender<()>,
        handle: JoinHandle<()>,
    }

    impl Backend {
        pub fn start(path: &Path) -> Result<Self, AudioError> {
            let (ready_tx, ready_rx) = mpsc::channel::<Result<(), AudioError>>();
            let (stop_tx, stop_rx) = mpsc::channel::<()>();
            let path = path.to_path_buf();

            let handle = std::thread::Builder::new()
                .name("music".into())
                .spawn(move || match open(&path) {
                    Ok((_stream, sink)) => {
                        let _ = ready_tx.send(Ok(()));
                        // sender dropped counts as a stop too
                        let _ = stop_rx.recv();
                        sink.stop();
                    }
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                    }
                })
                .map_err(|_| AudioError::Thread)?;

            match ready_rx.recv() {
                Ok(Ok(())) => Ok(Self { stop_tx, handle }),
                Ok(Err(err)) => {
                    let _ = handle.join();
                    Err(err)
                }
                Err(_) => {
                    let _ = handle.join();
                    Err(AudioError::Thread)
                }
            }
        }

        pub fn stop(self) {
            let _ = self.stop_tx.send(());
            let _ = self.handle.join();
        }
    }

    fn open(path: &Path) -> Result<(OutputStream, Sink), AudioError> {
        let (stream, handle) = OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;
        let file = File::open(path).map_err(|source| AudioError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| AudioError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let sink = Sink::try_new(&handle).map_err(|e| AudioError::Device(e.to_string()))?;
        sink.set_volume(VOLUME);
        sink.append(source.repeat_infinite());
        Ok((stream, sink))
    }
}

#[cfg(not(feature = "audio"))]
mod backend {
    use super::AudioError;
    use std::path::Path;

    #[allow(dead_code)]
    pub struct Backend;

    impl Backend {
        pub fn start(_path: &Path) -> Result<Self, AudioError> {
            Err(AudioError::Unsupported)
        }

        pub fn stop(self) {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{strip_ansi, test_console};

    #[test]
    fn missing_file_degrades_to_simulation() {
        let mut console = test_console("");
        let mut player = MusicPlayer::new(false);
        let playback = player
            .play(&mut console, Path::new("definitely-not-here-4711.mp3"))
            .unwrap();
        assert_eq!(playback, Playback::Simulated);

        let text = strip_ansi(&console.into_output());
        assert!(text.contains("❌ Music file 'definitely-not-here-4711.mp3' not found."));
        assert!(text.contains("Music simulation mode"));
    }

    #[test]
    fn muted_player_simulates_without_touching_files() {
        let mut console = test_console("");
        let mut player = MusicPlayer::new(true);
        let playback = player.play(&mut console, Path::new("music.mp3")).unwrap();
        assert_eq!(playback, Playback::Simulated);
        let text = strip_ansi(&console.into_output());
        assert!(!text.contains("not found"));
        let muted = text.find("❌ Music muted with --mute.").unwrap();
        let simulated = text.find("Music simulation mode").unwrap();
        assert!(muted < simulated);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut console = test_console("");
        let mut player = MusicPlayer::new(true);
        player.play(&mut console, Path::new("music.mp3")).unwrap();
        player.stop(&mut console).unwrap();
        player.stop(&mut console).unwrap();
        assert!(player.backend.is_none());
        let text = strip_ansi(&console.into_output());
        assert_eq!(text.matches("🎵 Music stopped").count(), 2);
    }

    #[test]
    fn stop_before_play_still_reports() {
        let mut console = test_console("");
        let mut player = MusicPlayer::new(false);
        player.stop(&mut console).unwrap();
        assert_eq!(strip_ansi(&console.into_output()), "🎵 Music stopped\n");
    }

    #[test]
    fn resolve_prefers_given_path() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        assert_eq!(resolve_asset(&manifest), Some(manifest.clone()));
        assert_eq!(resolve_asset(Path::new("no-such-asset-xyz.mp3")), None);
    }

    #[cfg(not(feature = "audio"))]
    #[test]
    fn existing_file_without_audio_support_simulates() {
        let mut console = test_console("");
        let mut player = MusicPlayer::new(false);
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let playback = player.play(&mut console, &manifest).unwrap();
        assert_eq!(playback, Playback::Simulated);
        let text = strip_ansi(&console.into_output());
        assert!(text.contains("audio support was not compiled in"));
    }
}
