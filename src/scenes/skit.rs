use super::{Step, play_steps, step};
use crate::error::Result;
use crate::pacing::Pacer;
use crate::palette::Tint;
use crate::ui::panel::Panel;
use crate::ui::{Console, Style};
use std::io::Write;
use std::time::Duration;

const BOOT: [Step; 6] = [
    step("Loading essential scripts...", Tint::BrightYellow, 1000),
    step("Scripts have been successfully initialized.", Tint::BrightGreen, 1500),
    step("Loading data on target...", Tint::BrightYellow, 1000),
    step("DATA Loading failed. Connection timed out.", Tint::BrightRed, 1500),
    step("Unauthorized Access Detected.", Tint::BrightRed, 1000),
    step(
        "Authorization required. Running user verification protocol...",
        Tint::BrightCyan,
        1500,
    ),
];

const WIPE: [Step; 4] = [
    step("Data wipe initialized.", Tint::BrightRed, 1000),
    step("Terminating all processes...", Tint::Red, 1000),
    step("Deleting temporary files...", Tint::Dim, 1000),
    step("Shutting down system...", Tint::Dim, 1000),
];

struct Question {
    prompt: &'static str,
    answer: &'static str,
    success: &'static str,
    hold: Duration,
}

const QUESTIONS: [Question; 3] = [
    Question {
        prompt: "Weird question No.1 ? (Reply 'ok')",
        answer: "ok",
        success: "Step 1/3: Successful",
        hold: Duration::from_secs(1),
    },
    Question {
        prompt: "   Weirder question No.2 ? (Reply 'ookk')",
        answer: "ookk",
        success: "Step 2/3: Successful",
        hold: Duration::from_secs(1),
    },
    Question {
        prompt: "Who is the coolest of them all ? (Reply 'Arevind')",
        answer: "arevind",
        success: "Step 3/3: Successful \n Affirmative. Your response has been cross-referenced with the primary data source and has yielded an outcome of profound satisfaction for the program's architect.",
        hold: Duration::from_secs(5),
    },
];

/// How the verification skit ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Granted,
    Declined,
    Intruder,
}

pub fn banner<W, P>(console: &mut Console<W>, pacer: &mut P) -> Result<()>
where
    W: Write,
    P: Pacer + ?Sized,
{
    console.panel(
        &Panel::new(Tint::BrightCyan)
            .text(
                "COMMENCING HIGH-PRIORITY DATA TRANSFER AND VISUALIZATION PROTOCOL...",
                Style::tint(Tint::BrightMagenta).bold(),
            )
            .centered(),
    )?;
    pacer.pause(Duration::from_secs(1))
}

pub fn boot_scripts<W, P>(console: &mut Console<W>, pacer: &mut P) -> Result<()>
where
    W: Write,
    P: Pacer + ?Sized,
{
    console.clear()?;
    play_steps(console, pacer, &BOOT)
}

pub fn verification_quiz<W, P>(console: &mut Console<W>, pacer: &mut P) -> Result<Verdict>
where
    W: Write,
    P: Pacer + ?Sized,
{
    console.clear()?;
    console.panel(
        &Panel::new(Tint::BrightCyan)
            .text("🔐 Verification Quiz 🔐", Style::tint(Tint::BrightYellow).bold())
            .centered(),
    )?;
    console.blank()?;

    let proceed = console.ask(
        "Access is unauthorized. Do you wish to proceed with verification?",
        Style::tint(Tint::BrightMagenta).bold(),
        &["Y", "N"],
        Some("Y"),
    )?;
    if proceed == "N" {
        console.panel(&Panel::new(Tint::Red).text("Access Denied.", Style::tint(Tint::Red)).centered())?;
        console.line("Program will now exit.", Style::tint(Tint::Dim))?;
        return Ok(Verdict::Declined);
    }

    for (n, question) in QUESTIONS.iter().enumerate() {
        let reply = console.ask(question.prompt, Style::plain(), &[], None)?;
        if reply.to_lowercase() != question.answer {
            log::info!("verification failed at question {}", n + 1);
            return Ok(Verdict::Intruder);
        }
        console.panel(
            &Panel::new(Tint::Green)
                .text(question.success, Style::tint(Tint::Green))
                .centered(),
        )?;
        pacer.pause(question.hold)?;
    }
    Ok(Verdict::Granted)
}

pub fn intruder_screen<W, P>(console: &mut Console<W>, pacer: &mut P) -> Result<()>
where
    W: Write,
    P: Pacer + ?Sized,
{
    console.clear()?;
    console.panel(
        &Panel::new(Tint::Red)
            .text("🚨 INTRUDER DETECTED 🚨", Style::tint(Tint::BrightRed).bold())
            .centered(),
    )?;
    console.centered("Force closing program...", Style::tint(Tint::Dim))?;
    console.blank()?;
    play_steps(console, pacer, &WIPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacing::RecordingPacer;
    use crate::ui::{strip_ansi, test_console};
    use pretty_assertions::assert_eq;

    #[test]
    fn boot_script_timing() {
        let mut console = test_console("");
        let mut pacer = RecordingPacer::default();
        boot_scripts(&mut console, &mut pacer).unwrap();
        assert_eq!(pacer.pauses.len(), 6);
        assert_eq!(pacer.total(), Duration::from_millis(7500));
        let text = strip_ansi(&console.into_output());
        assert!(text.contains("Unauthorized Access Detected."));
    }

    #[test]
    fn correct_answers_grant_access() {
        let mut console = test_console("\nOK\nookk\nArevind\n");
        let mut pacer = RecordingPacer::default();
        let verdict = verification_quiz(&mut console, &mut pacer).unwrap();
        assert_eq!(verdict, Verdict::Granted);
        assert_eq!(pacer.total(), Duration::from_secs(7));
        let text = strip_ansi(&console.into_output());
        assert!(text.contains("Step 1/3: Successful"));
        assert!(text.contains("Affirmative."));
    }

    #[test]
    fn declining_ends_without_questions() {
        let mut console = test_console("n\n");
        let mut pacer = RecordingPacer::default();
        let verdict = verification_quiz(&mut console, &mut pacer).unwrap();
        assert_eq!(verdict, Verdict::Declined);
        let text = strip_ansi(&console.into_output());
        assert!(text.contains("Access Denied."));
        assert!(!text.contains("Weird question"));
    }

    #[test]
    fn wrong_answer_flags_intruder() {
        let mut console = test_console("y\nok\nnope\n");
        let mut pacer = RecordingPacer::default();
        let verdict = verification_quiz(&mut console, &mut pacer).unwrap();
        assert_eq!(verdict, Verdict::Intruder);
        assert_eq!(pacer.pauses, vec![Duration::from_secs(1)]);
    }

    #[test]
    fn closed_input_counts_as_wrong_answer() {
        let mut console = test_console("y\n");
        let verdict = verification_quiz(&mut console, &mut RecordingPacer::default()).unwrap();
        assert_eq!(verdict, Verdict::Intruder);
    }

    #[test]
    fn intruder_screen_runs_wipe_script() {
        let mut console = test_console("");
        let mut pacer = RecordingPacer::default();
        intruder_screen(&mut console, &mut pacer).unwrap();
        assert_eq!(pacer.total(), Duration::from_secs(4));
        let text = strip_ansi(&console.into_output());
        assert!(text.contains("INTRUDER DETECTED"));
        assert!(text.contains("Shutting down system..."));
    }
}
