use crate::error::Result;
use crate::pacing::Pacer;
use crate::palette::Tint;
use crate::ui::panel::{Border, Panel};
use crate::ui::{Console, Style};
use std::io::Write;
use std::time::Duration;

const WISHES: [&str; 8] = ["🎂", "🎈", "🎁", "✨", "🌟", "💖", "🎊", "🥳"];
const WISH_INTERVAL: Duration = Duration::from_millis(200);

pub fn finale<W, P>(console: &mut Console<W>, pacer: &mut P) -> Result<()>
where
    W: Write,
    P: Pacer + ?Sized,
{
    console.blank()?;
    console.blank()?;
    console.panel(
        &Panel::new(Tint::BrightGreen)
            .text(
                "🎉 Hope your special day is absolutely wonderful! 🎉",
                Style::tint(Tint::BrightMagenta).bold(),
            )
            .border(Border::Double)
            .padding(2, 4)
            .centered(),
    )?;

    let mut wishes = String::new();
    for wish in WISHES {
        wishes.push_str(wish);
        wishes.push(' ');
        pacer.pause(WISH_INTERVAL)?;
        console.status(&wishes, Style::tint(Tint::BrightYellow))?;
    }

    console.blank()?;
    console.blank()
}

/// Ask whether to run the show again.
pub fn replay_prompt<W: Write>(console: &mut Console<W>) -> Result<bool> {
    console.centered(
        "Press Enter to exit or 'r' + Enter to replay...",
        Style::tint(Tint::BrightWhite),
    )?;
    let answer = console.wait_enter()?;
    Ok(answer.eq_ignore_ascii_case("r"))
}
