use crossterm::style::Color;

/// Named terminal colors used across the show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    BrightRed,
    BrightGreen,
    BrightBlue,
    BrightYellow,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Red,
    Green,
    Blue,
    Yellow,
    Magenta,
    Cyan,
    Dim,
    Default,
}

impl Tint {
    // crossterm names the bright variants plainly and the normal ones Dark*
    pub fn color(self) -> Color {
        match self {
            Tint::BrightRed => Color::Red,
            Tint::BrightGreen => Color::Green,
            Tint::BrightBlue => Color::Blue,
            Tint::BrightYellow => Color::Yellow,
            Tint::BrightMagenta => Color::Magenta,
            Tint::BrightCyan => Color::Cyan,
            Tint::BrightWhite => Color::White,
            Tint::Red => Color::DarkRed,
            Tint::Green => Color::DarkGreen,
            Tint::Blue => Color::DarkBlue,
            Tint::Yellow => Color::DarkYellow,
            Tint::Magenta => Color::DarkMagenta,
            Tint::Cyan => Color::DarkCyan,
            Tint::Dim => Color::DarkGrey,
            Tint::Default => Color::Reset,
        }
    }
}

// Explosion colors a particle can be born with
pub const PARTICLE_TINTS: [Tint; 13] = [
    Tint::BrightRed,
    Tint::BrightGreen,
    Tint::BrightBlue,
    Tint::BrightYellow,
    Tint::BrightMagenta,
    Tint::BrightCyan,
    Tint::BrightWhite,
    Tint::Red,
    Tint::Green,
    Tint::Blue,
    Tint::Yellow,
    Tint::Magenta,
    Tint::Cyan,
];

pub const PARTICLE_GLYPHS: [char; 8] = ['*', '✦', '✧', '❋', '✪', '●', '◆', '♦'];

pub const ROCKET_MARKERS: [char; 2] = ['|', '^'];
pub const ROCKET_TINT: Tint = Tint::BrightWhite;

// Cycled line by line over the ASCII art
pub const ART_TINTS: [Tint; 11] = [
    Tint::BrightCyan,
    Tint::Cyan,
    Tint::BrightBlue,
    Tint::Blue,
    Tint::BrightMagenta,
    Tint::Magenta,
    Tint::BrightRed,
    Tint::Red,
    Tint::BrightYellow,
    Tint::Yellow,
    Tint::BrightGreen,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_palette_has_no_duplicates() {
        for (i, a) in PARTICLE_TINTS.iter().enumerate() {
            for b in &PARTICLE_TINTS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn bright_and_normal_map_to_distinct_colors() {
        assert_ne!(Tint::BrightRed.color(), Tint::Red.color());
        assert_eq!(Tint::Cyan.color(), Color::DarkCyan);
    }

    #[test]
    fn glyphs_never_collide_with_rocket_markers() {
        for marker in ROCKET_MARKERS {
            assert!(!PARTICLE_GLYPHS.contains(&marker));
        }
    }
}
