use crate::error::Result;
use crate::pacing::Pacer;
use crate::palette::Tint;
use crate::ui::panel::{Border, Panel};
use crate::ui::{Console, Style};
use std::io::Write;
use std::time::Duration;

pub const LETTER: &str = "
Dear Unknown person,
                    I know you are unknown😅, but you are the most valuable person to me, I wish you the Happiest of Birthdays!🎂

With best wishes,
the dude who spent too much time making this.
";

pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);
const LINGER: Duration = Duration::from_secs(5);

/// Paragraphs of the letter: the trimmed text split on blank lines.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.trim().split("\n\n").collect()
}

fn header() -> Panel {
    Panel::new(Tint::Magenta)
        .text("💌 A Special Message Just For You 💌", Style::tint(Tint::BrightYellow).bold())
        .centered()
}

/// Reveal the letter one paragraph at a time, each redraw showing all
/// paragraphs so far.
pub fn scroll_letter<W, P>(console: &mut Console<W>, pacer: &mut P, text: &str, delay: Duration) -> Result<()>
where
    W: Write,
    P: Pacer + ?Sized,
{
    let header = header();
    console.clear()?;
    console.panel(&header)?;
    console.blank()?;

    let paragraphs = paragraphs(text);
    for shown in 1..=paragraphs.len() {
        if shown > 1 {
            pacer.pause(delay)?;
        }
        console.clear()?;
        console.panel(&header)?;
        console.blank()?;

        for paragraph in &paragraphs[..shown] {
            console.panel(
                &Panel::new(Tint::BrightCyan)
                    .text(paragraph, Style::tint(Tint::BrightCyan))
                    .border(Border::Rounded)
                    .padding(1, 2),
            )?;
            console.blank()?;
        }
    }

    pacer.pause(LINGER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacing::RecordingPacer;
    use crate::ui::{strip_ansi, test_console};
    use pretty_assertions::assert_eq;

    #[test]
    fn letter_has_two_paragraphs() {
        let parts = paragraphs(LETTER);
        assert_eq!(parts.len(), 2);
        assert!(parts[0].starts_with("Dear Unknown person,"));
        assert!(parts[1].ends_with("making this."));
    }

    #[test]
    fn paused_between_paragraphs_then_lingers() {
        let mut console = test_console("");
        let mut pacer = RecordingPacer::default();
        scroll_letter(&mut console, &mut pacer, "one\n\ntwo\n\nthree", Duration::from_millis(100)).unwrap();
        assert_eq!(
            pacer.pauses,
            vec![Duration::from_millis(100), Duration::from_millis(100), LINGER]
        );
        let text = strip_ansi(&console.into_output());
        // first paragraph is redrawn on every reveal
        assert_eq!(text.matches("one").count(), 3);
        assert_eq!(text.matches("three").count(), 1);
    }

    #[test]
    fn interrupted_mid_letter() {
        let mut console = test_console("");
        let mut pacer = RecordingPacer {
            interrupt_after: Some(0),
            ..RecordingPacer::default()
        };
        let result = scroll_letter(&mut console, &mut pacer, LETTER, DEFAULT_DELAY);
        assert!(matches!(result, Err(crate::error::ShowError::Interrupted)));
    }
}
