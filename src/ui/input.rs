use crate::error::Result;
use crate::pacing::StopFlag;
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

// How long a prompt waits between looks at the stop flag
const POLL: Duration = Duration::from_millis(25);

/// Lines read on a background thread, so a prompt can give up on Ctrl+C
/// without waiting for Enter.
pub struct LineReader {
    lines: Receiver<io::Result<String>>,
}

impl LineReader {
    pub fn spawn<R>(mut input: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, lines) = mpsc::channel();
        let spawned = std::thread::Builder::new().name("stdin".into()).spawn(move || {
            loop {
                let mut buf = String::new();
                match input.read_line(&mut buf) {
                    // end of input: dropping the sender tells the prompt
                    Ok(0) => break,
                    Ok(_) => {
                        if tx.send(Ok(buf)).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        let _ = tx.send(Err(err));
                        break;
                    }
                }
            }
        });
        if let Err(err) = spawned {
            // no reader thread means no input; prompts see end of input
            log::warn!("could not start the input reader: {err}");
        }
        Self { lines }
    }

    /// Next line with surrounding whitespace trimmed, `None` at end of input.
    /// Returns `Interrupted` as soon as `stop` is raised.
    pub fn next_line(&self, stop: &StopFlag) -> Result<Option<String>> {
        loop {
            stop.check()?;
            match self.lines.recv_timeout(POLL) {
                Ok(line) => return Ok(Some(line?.trim().to_string())),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return Ok(None),
            }
        }
    }
}

/// Input that holds its single line back for `delay`, like a user who
/// never presses Enter.
#[cfg(test)]
pub fn stalled(delay: Duration) -> io::BufReader<Stalled> {
    io::BufReader::new(Stalled { delay, sent: false })
}

#[cfg(test)]
pub struct Stalled {
    delay: Duration,
    sent: bool,
}

#[cfg(test)]
impl io::Read for Stalled {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.sent {
            return Ok(0);
        }
        std::thread::sleep(self.delay);
        self.sent = true;
        buf[0] = b'\n';
        Ok(1)
    }
}
