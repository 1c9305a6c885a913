use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "celebrate")]
#[command(about = "A birthday greeting for the terminal: fireworks, ASCII art and a letter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Music file looped during the show
    #[arg(long, value_name = "FILE", default_value = "music.mp3")]
    pub music: PathBuf,

    /// Run without sound
    #[arg(long)]
    pub mute: bool,

    /// Seed for the firework randomness, to replay an identical show
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Pause between letter paragraphs, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 0.5, value_parser = parse_seconds)]
    pub letter_delay: f64,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_seconds(raw: &str) -> Result<f64, String> {
    let secs: f64 = raw.parse().map_err(|_| format!("`{raw}` is not a number"))?;
    if secs.is_finite() && secs >= 0.0 {
        Ok(secs)
    } else {
        Err(format!("`{raw}` must be zero or more seconds"))
    }
}

/// Settings the show runs with.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub music: PathBuf,
    pub mute: bool,
    pub seed: Option<u64>,
    pub letter_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            music: PathBuf::from("music.mp3"),
            mute: false,
            seed: None,
            letter_delay: crate::scenes::letter::DEFAULT_DELAY,
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => log::LevelFilter::Error,
            (false, 0) => log::LevelFilter::Warn,
            (false, 1) => log::LevelFilter::Info,
            (false, 2) => log::LevelFilter::Debug,
            (false, _) => log::LevelFilter::Trace,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            music: self.music.clone(),
            mute: self.mute,
            seed: self.seed,
            letter_delay: Duration::from_secs_f64(self.letter_delay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_config_default() {
        let cli = Cli::try_parse_from(["celebrate"]).unwrap();
        assert_eq!(cli.config(), Config::default());
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn flags_flow_into_config() {
        let cli = Cli::try_parse_from([
            "celebrate",
            "--music",
            "song.ogg",
            "--mute",
            "--seed",
            "42",
            "--letter-delay",
            "1.5",
            "-vv",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.music, PathBuf::from("song.ogg"));
        assert!(config.mute);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.letter_delay, Duration::from_millis(1500));
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn quiet_wins_over_default_level() {
        let cli = Cli::try_parse_from(["celebrate", "-q"]).unwrap();
        assert_eq!(cli.log_level(), log::LevelFilter::Error);
    }

    #[test]
    fn negative_delay_rejected() {
        assert!(Cli::try_parse_from(["celebrate", "--letter-delay", "-1"]).is_err());
        assert!(Cli::try_parse_from(["celebrate", "--letter-delay", "soon"]).is_err());
    }
}
