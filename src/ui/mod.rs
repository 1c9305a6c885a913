//! Terminal output and line-based prompts.
//!
//! A [`Console`] is an explicit rendering context: every scene and the
//! firework director receive it by reference instead of reaching for a
//! process-wide handle.

pub mod input;
pub mod panel;

use crate::error::Result;
use crate::fireworks::compositor::{Cell, WIDTH};
use crate::fireworks::{Frame, FrameSink};
use crate::pacing::StopFlag;
use crate::palette::Tint;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use input::LineReader;
use panel::Panel;
use std::io::{self, BufRead, BufReader, BufWriter, Stdout, Write};
use unicode_width::UnicodeWidthStr;

const FALLBACK_WIDTH: usize = 120;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub tint: Tint,
    pub bold: bool,
}

impl Style {
    pub const fn plain() -> Self {
        Self {
            tint: Tint::Default,
            bold: false,
        }
    }

    pub const fn tint(tint: Tint) -> Self {
        Self { tint, bold: false }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    fn is_plain(&self) -> bool {
        self.tint == Tint::Default && !self.bold
    }
}

/// A run of text in a single style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Pad `text` on both sides to `width` display columns.
pub fn center(text: &str, width: usize) -> String {
    let slack = width.saturating_sub(text.width());
    let left = slack / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(slack - left))
}

pub struct Console<W> {
    out: W,
    input: LineReader,
    width: usize,
    stop: StopFlag,
}

impl Console<BufWriter<Stdout>> {
    /// Console on the process's stdout/stdin, sized to the terminal.
    pub fn stdio(stop: StopFlag) -> Self {
        let width = terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(FALLBACK_WIDTH);
        Self::new(BufWriter::with_capacity(64 * 1024, io::stdout()), BufReader::new(io::stdin()), width, stop)
    }
}

impl<W: Write> Console<W> {
    /// `input` is read on its own thread; see [`LineReader`].
    pub fn new<R>(out: W, input: R, width: usize, stop: StopFlag) -> Self
    where
        R: BufRead + Send + 'static,
    {
        Self {
            out,
            input: LineReader::spawn(input),
            width: width.max(20),
            stop,
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        self.write_line(&[])
    }

    pub fn line(&mut self, text: &str, style: Style) -> Result<()> {
        self.write_line(&[Span::new(text, style)])
    }

    pub fn centered(&mut self, text: &str, style: Style) -> Result<()> {
        let text = center(text, self.width);
        self.write_line(&[Span::new(text.trim_end(), style)])
    }

    pub fn panel(&mut self, panel: &Panel) -> Result<()> {
        for row in panel.render(self.width) {
            self.write_line(&row)?;
        }
        Ok(())
    }

    /// Redraw the current line in place, without moving to the next one.
    pub fn status(&mut self, text: &str, style: Style) -> Result<()> {
        queue!(self.out, Print('\r'))?;
        self.write_spans(&[Span::new(center(text, self.width).trim_end(), style)])?;
        self.out.flush()?;
        Ok(())
    }

    /// Ask a question and read one line of input.
    ///
    /// With `choices`, the answer is matched case-insensitively and the
    /// canonical choice is returned; anything else is re-asked. An empty
    /// answer picks `default` when there is one. End of input returns the
    /// default, or an empty string.
    pub fn ask(&mut self, question: &str, style: Style, choices: &[&str], default: Option<&str>) -> Result<String> {
        loop {
            let mut prompt = vec![Span::new(question, style)];
            if !choices.is_empty() {
                prompt.push(Span::new(
                    format!(" [{}]", choices.join("/")),
                    Style::tint(Tint::BrightMagenta).bold(),
                ));
            }
            if let Some(default) = default {
                prompt.push(Span::new(format!(" ({default})"), Style::tint(Tint::BrightCyan).bold()));
            }
            prompt.push(Span::new(": ", Style::plain()));
            self.write_spans(&prompt)?;
            self.out.flush()?;

            let Some(answer) = self.read_answer()? else {
                return Ok(default.unwrap_or_default().to_string());
            };

            if answer.is_empty() {
                if let Some(default) = default {
                    return Ok(default.to_string());
                }
            }
            if choices.is_empty() {
                return Ok(answer);
            }
            if let Some(choice) = choices.iter().find(|c| c.eq_ignore_ascii_case(&answer)) {
                return Ok(choice.to_string());
            }
            self.line("Please select one of the available options", Style::tint(Tint::Red))?;
        }
    }

    /// Block until the user presses Enter; returns what they typed.
    pub fn wait_enter(&mut self) -> Result<String> {
        Ok(self.read_answer()?.unwrap_or_default())
    }

    pub fn hide_cursor(&mut self) -> Result<()> {
        queue!(self.out, Hide)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn show_cursor(&mut self) -> Result<()> {
        queue!(self.out, Show)?;
        self.out.flush()?;
        Ok(())
    }

    fn read_answer(&mut self) -> Result<Option<String>> {
        let answer = self.input.next_line(&self.stop)?;
        if answer.is_none() {
            // keep the next output off the prompt line
            self.blank()?;
        }
        Ok(answer)
    }

    fn write_line(&mut self, spans: &[Span]) -> Result<()> {
        self.write_spans(spans)?;
        queue!(self.out, Clear(ClearType::UntilNewLine), Print('\n'))?;
        self.out.flush()?;
        Ok(())
    }

    fn write_spans(&mut self, spans: &[Span]) -> io::Result<()> {
        for span in spans {
            if span.style.is_plain() {
                queue!(self.out, Print(&span.text))?;
                continue;
            }
            queue!(self.out, SetForegroundColor(span.style.tint.color()))?;
            if span.style.bold {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            queue!(self.out, Print(&span.text), SetAttribute(Attribute::Reset), ResetColor)?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}

/// Group a sky row into runs of equal tint so each run costs one color change.
fn sky_spans(row: &[Cell]) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for cell in row {
        match spans.last_mut() {
            Some(span) if span.style.tint == cell.tint => span.text.push(cell.glyph),
            _ => spans.push(Span::new(cell.glyph.to_string(), Style::tint(cell.tint))),
        }
    }
    spans
}

impl<W: Write> FrameSink for Console<W> {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        log::trace!("presenting frame {}", frame.tick);
        queue!(self.out, MoveTo(0, 0))?;

        let caption = Style::tint(Tint::BrightYellow).bold();
        self.write_spans(&[Span::new(center(frame.caption, WIDTH), caption)])?;
        queue!(self.out, Clear(ClearType::UntilNewLine), Print('\n'))?;
        queue!(self.out, Clear(ClearType::UntilNewLine), Print('\n'))?;

        for row in frame.sky.rows() {
            self.write_spans(&sky_spans(row))?;
            queue!(self.out, Clear(ClearType::UntilNewLine), Print('\n'))?;
        }

        if let Some(footer) = frame.footer {
            queue!(self.out, Clear(ClearType::UntilNewLine), Print('\n'))?;
            let style = Style::tint(Tint::BrightMagenta).bold();
            self.write_spans(&[Span::new(center(footer, WIDTH), style)])?;
            queue!(self.out, Clear(ClearType::UntilNewLine))?;
        }

        self.out.flush()?;
        Ok(())
    }
}

/// Strip ANSI escape sequences, leaving the visible text.
#[cfg(test)]
pub fn strip_ansi(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let mut out = String::new();
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\x1b' {
            out.push(ch);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        }
    }
    out
}

#[cfg(test)]
pub type TestConsole = Console<Vec<u8>>;

#[cfg(test)]
pub fn test_console(input: &str) -> TestConsole {
    Console::new(Vec::new(), io::Cursor::new(input.as_bytes().to_vec()), 60, StopFlag::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShowError;
    use crate::fireworks::compositor::{FrameBuffer, HEIGHT};
    use pretty_assertions::assert_eq;
    use std::time::{Duration, Instant};

    fn screen(console: TestConsole) -> String {
        strip_ansi(&console.into_output())
    }

    #[test]
    fn center_pads_by_display_width() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("🎂", 5), " 🎂  ");
        assert_eq!(center("too long", 3), "too long");
    }

    #[test]
    fn ask_accepts_choice_case_insensitively() {
        let mut console = test_console("y\n");
        let answer = console.ask("Proceed?", Style::plain(), &["Y", "N"], Some("Y")).unwrap();
        assert_eq!(answer, "Y");
        assert_eq!(screen(console), "Proceed? [Y/N] (Y): ");
    }

    #[test]
    fn ask_reasks_until_valid() {
        let mut console = test_console("maybe\nn\n");
        let answer = console.ask("Go?", Style::plain(), &["Y", "N"], None).unwrap();
        assert_eq!(answer, "N");
        let text = screen(console);
        assert!(text.contains("Please select one of the available options"));
        assert_eq!(text.matches("Go? [Y/N]: ").count(), 2);
    }

    #[test]
    fn ask_empty_answer_takes_default() {
        let mut console = test_console("\n");
        let answer = console.ask("Go?", Style::plain(), &["Y", "N"], Some("Y")).unwrap();
        assert_eq!(answer, "Y");
    }

    #[test]
    fn ask_free_text_is_trimmed() {
        let mut console = test_console("  Arevind \r\n");
        let answer = console.ask("Who?", Style::plain(), &[], None).unwrap();
        assert_eq!(answer, "Arevind");
    }

    #[test]
    fn ask_at_end_of_input_falls_back() {
        let mut console = test_console("");
        assert_eq!(console.ask("Go?", Style::plain(), &["Y", "N"], Some("Y")).unwrap(), "Y");
        assert_eq!(console.ask("Who?", Style::plain(), &[], None).unwrap(), "");
    }

    #[test]
    fn raised_stop_flag_interrupts_prompt() {
        let stop = StopFlag::new();
        stop.raise();
        let mut console = Console::new(Vec::new(), io::Cursor::new(b"ok\n".to_vec()), 60, stop);
        let result = console.ask("Q", Style::plain(), &[], None);
        assert!(matches!(result, Err(ShowError::Interrupted)));
    }

    #[test]
    fn ctrl_c_ends_a_waiting_prompt() {
        let stop = StopFlag::new();
        let mut console = Console::new(Vec::new(), input::stalled(Duration::from_secs(3)), 60, stop.clone());
        let raiser = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(50));
            stop.raise();
        });

        let started = Instant::now();
        let result = console.ask("Continue?", Style::plain(), &["Y", "N"], Some("Y"));
        raiser.join().unwrap();

        assert!(matches!(result, Err(ShowError::Interrupted)));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn present_draws_caption_sky_and_footer() {
        let mut console = test_console("");
        let blank = FrameBuffer::blank();
        let frame = Frame {
            tick: 70,
            caption: "CAP",
            sky: &blank,
            footer: Some("FOOT"),
        };
        console.present(&frame).unwrap();

        let text = screen(console);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 2 + HEIGHT + 2);
        assert_eq!(lines[0].trim(), "CAP");
        assert_eq!(lines[0].len(), WIDTH);
        assert!(lines[2..2 + HEIGHT].iter().all(|l| l.len() == WIDTH && l.trim().is_empty()));
        assert_eq!(lines.last().unwrap().trim(), "FOOT");
    }

    #[test]
    fn sky_spans_merge_equal_tints() {
        let row = vec![
            Cell::new('*', Tint::Red),
            Cell::new('●', Tint::Red),
            Cell::BLANK,
            Cell::BLANK,
        ];
        let spans = sky_spans(&row);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "*●");
        assert_eq!(spans[1].text, "  ");
    }

    #[test]
    fn panel_goes_through_console_width() {
        let mut console = test_console("");
        console
            .panel(&Panel::new(Tint::Green).text("hello", Style::plain()).centered())
            .unwrap();
        let text = screen(console);
        let first = text.lines().next().unwrap();
        assert_eq!(first.width(), 60);
    }

    #[test]
    fn status_line_starts_with_carriage_return() {
        let mut console = test_console("");
        console.status("🎂 ", Style::plain()).unwrap();
        assert!(screen(console).starts_with('\r'));
    }
}
