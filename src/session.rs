//! One sitting of the show, from the boot skit to the replay prompt.

use crate::audio::MusicPlayer;
use crate::config::Config;
use crate::error::{Result, ShowError};
use crate::fireworks::AnimationDirector;
use crate::pacing::Pacer;
use crate::palette::Tint;
use crate::rng;
use crate::scenes::skit::{self, Verdict};
use crate::scenes::{art, finale, letter, loading};
use crate::ui::{Console, Style};
use indicatif::ProgressDrawTarget;
use std::io::Write;
use std::time::Duration;

const AFTERGLOW: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Declined,
    Intruder,
    Interrupted,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Intruder => 1,
            Outcome::Completed | Outcome::Declined | Outcome::Interrupted => 0,
        }
    }
}

pub struct Session<W, P> {
    console: Console<W>,
    pacer: P,
    player: MusicPlayer,
    rng: fastrand::Rng,
    config: Config,
    progress_target: fn() -> ProgressDrawTarget,
}

impl<W: Write, P: Pacer> Session<W, P> {
    pub fn new(console: Console<W>, pacer: P, config: Config) -> Self {
        Self {
            console,
            pacer,
            player: MusicPlayer::new(config.mute),
            rng: rng::seeded(config.seed),
            config,
            progress_target: ProgressDrawTarget::stdout,
        }
    }

    /// Where the loading spinner draws.
    pub fn with_progress_target(mut self, target: fn() -> ProgressDrawTarget) -> Self {
        self.progress_target = target;
        self
    }

    /// Run the show. Music is stopped on every way out; Ctrl+C ends the
    /// show politely instead of failing it.
    pub fn run(&mut self) -> Result<Outcome> {
        let outcome = match self.play() {
            Err(ShowError::Interrupted) => {
                log::info!("interrupted, cleaning up");
                self.farewell().map(|()| Outcome::Interrupted)
            }
            other => other,
        };
        let stopped = self.player.stop(&mut self.console);
        let outcome = outcome?;
        stopped?;
        Ok(outcome)
    }

    fn play(&mut self) -> Result<Outcome> {
        skit::banner(&mut self.console, &mut self.pacer)?;

        loop {
            skit::boot_scripts(&mut self.console, &mut self.pacer)?;
            match skit::verification_quiz(&mut self.console, &mut self.pacer)? {
                Verdict::Granted => {}
                Verdict::Declined => return Ok(Outcome::Declined),
                Verdict::Intruder => {
                    skit::intruder_screen(&mut self.console, &mut self.pacer)?;
                    return Ok(Outcome::Intruder);
                }
            }

            loading::loading_screen(&mut self.console, &mut self.pacer, (self.progress_target)())?;
            self.player.play(&mut self.console, &self.config.music)?;
            self.fireworks()?;

            art::ascii_art(&mut self.console)?;
            art::decryption_prompt(&mut self.console)?;
            letter::scroll_letter(
                &mut self.console,
                &mut self.pacer,
                letter::LETTER,
                self.config.letter_delay,
            )?;
            finale::finale(&mut self.console, &mut self.pacer)?;

            if !finale::replay_prompt(&mut self.console)? {
                return Ok(Outcome::Completed);
            }
            log::info!("replaying the show");
            self.player.stop(&mut self.console)?;
        }
    }

    fn fireworks(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.hide_cursor()?;

        let mut director = AnimationDirector::new(self.rng.fork());
        let shown = director.run(&mut self.console, &mut self.pacer);
        self.console.show_cursor()?;
        shown?;

        self.console.clear()?;
        self.pacer.pause(AFTERGLOW)
    }

    fn farewell(&mut self) -> Result<()> {
        self.console.blank()?;
        self.console.blank()?;
        self.console
            .line("🎈 Thanks for celebrating! 🎈", Style::tint(Tint::BrightYellow))
    }

    #[cfg(test)]
    fn into_console(self) -> Console<W> {
        self.console
    }
}
