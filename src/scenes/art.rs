use crate::error::Result;
use crate::palette::{ART_TINTS, Tint};
use crate::ui::panel::{Border, Panel};
use crate::ui::{Console, Style};
use std::io::Write;

pub const ASCII_ART: [&str; 11] = [
    r"       .                      .    *+*+*   +             *       .---,    ",
    r"               }       *           |||||       .---.            /#    `\  ",
    r"     .--.     {            )     @@.@.@.@@    /     \  .        |      |  ",
    r"    /    \     }          (      |'='='='|    |#     |          '.   _/   ",
    r"    |#   |         +            @@.@.@.@.@@   '._ _,/             `(^     ",
    r"    \_ _.'   +          *   )   |'='='='='|     (^            +     )     ",
    r"     (^   *       .            @@.@.@.@.@.@@     )        *        (      ",
    r"      )  _ _  ___  ___  ___+__  __  ___  _  ___  ___+ _ _  ___  ___ __ *__",
    r"     (  | | |/   \|   \|   \\ \/ / | _ \| ||   \|   || | ||   \/   \\ \/ /",
    r"      ) |   || - || -_/| -_/ \  /  | _ <| || - / | | |   || | || - | \  / ",
    r"        |_|_||_|_||_|  |_|   /_/   |___/|_||_._\ |_| |_|_||___/|_|_| /_/  ",
];

/// The title card and the cake art.
pub fn ascii_art<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.clear()?;

    console.panel(
        &Panel::new(Tint::BrightMagenta)
            .text(
                "MESSAGE TRANSMISSION FROM AN AI INTERN TO A CS-AI STUDENT",
                Style::tint(Tint::BrightYellow).bold(),
            )
            .border(Border::Double)
            .padding(1, 2)
            .centered(),
    )?;
    console.blank()?;

    let mut art = Panel::new(Tint::BrightWhite)
        .title("COMMEMORATIVE VISUALS PROTOCOL", Style::tint(Tint::BrightWhite))
        .border(Border::Heavy)
        .centered()
        .no_wrap();
    for (i, line) in ASCII_ART.iter().enumerate() {
        art = art.text(line, Style::tint(ART_TINTS[i % ART_TINTS.len()]));
    }
    console.panel(&art)?;
    console.blank()
}

/// Hold the art on screen until Enter.
pub fn decryption_prompt<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.centered(
        "Press Enter to initiate data decryption and review the transmission...",
        Style::tint(Tint::BrightGreen).bold(),
    )?;
    console.wait_enter()?;
    Ok(())
}
