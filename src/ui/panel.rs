use super::{Span, Style};
use crate::palette::Tint;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Border {
    Square,
    Double,
    Heavy,
    Rounded,
}

struct BorderChars {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl Border {
    fn chars(self) -> BorderChars {
        let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) = match self {
            Border::Square => ('┌', '┐', '└', '┘', '─', '│'),
            Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
            Border::Heavy => ('┏', '┓', '┗', '┛', '━', '┃'),
            Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
        };
        BorderChars {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// A boxed block of text spanning the console width.
#[derive(Clone, Debug)]
pub struct Panel {
    body: Vec<(String, Style)>,
    title: Option<(String, Style)>,
    border: Border,
    border_style: Style,
    padding: (usize, usize),
    align: Align,
    wrap: bool,
}

impl Panel {
    pub fn new(border_tint: Tint) -> Self {
        Self {
            body: Vec::new(),
            title: None,
            border: Border::Square,
            border_style: Style::tint(border_tint),
            padding: (0, 1),
            align: Align::Left,
            wrap: true,
        }
    }

    /// Add body text; embedded newlines start new lines.
    pub fn text(mut self, text: &str, style: Style) -> Self {
        for line in text.split('\n') {
            self.body.push((line.to_string(), style));
        }
        self
    }

    pub fn title(mut self, title: &str, style: Style) -> Self {
        self.title = Some((title.to_string(), style));
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    /// Blank rows above/below and columns left/right of the body.
    pub fn padding(mut self, vertical: usize, horizontal: usize) -> Self {
        self.padding = (vertical, horizontal);
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    /// Clip long lines instead of wrapping them. Used for art.
    pub fn no_wrap(mut self) -> Self {
        self.wrap = false;
        self
    }

    /// Lay the panel out at `width` columns.
    pub fn render(&self, width: usize) -> Vec<Vec<Span>> {
        let width = width.max(4);
        let chars = self.border.chars();
        let inner = width - 2;
        let (vpad, hpad) = self.padding;
        let hpad = hpad.min(inner.saturating_sub(1) / 2);
        let content = inner - 2 * hpad;
        let edge = self.border_style;

        let mut out = Vec::new();
        out.push(self.top_edge(&chars, inner));

        let empty_row = || {
            vec![
                Span::new(chars.vertical.to_string(), edge),
                Span::new(" ".repeat(inner), Style::plain()),
                Span::new(chars.vertical.to_string(), edge),
            ]
        };
        for _ in 0..vpad {
            out.push(empty_row());
        }

        for (text, style) in &self.body {
            let pieces = if self.wrap {
                wrap(text, content)
            } else {
                vec![clip(text, content)]
            };
            for piece in pieces {
                let slack = content.saturating_sub(piece.width());
                let (left, right) = match self.align {
                    Align::Left => (0, slack),
                    Align::Center => (slack / 2, slack - slack / 2),
                };
                out.push(vec![
                    Span::new(chars.vertical.to_string(), edge),
                    Span::new(" ".repeat(hpad + left), Style::plain()),
                    Span::new(piece, *style),
                    Span::new(" ".repeat(right + hpad), Style::plain()),
                    Span::new(chars.vertical.to_string(), edge),
                ]);
            }
        }

        for _ in 0..vpad {
            out.push(empty_row());
        }

        let bottom = format!(
            "{}{}{}",
            chars.bottom_left,
            chars.horizontal.to_string().repeat(inner),
            chars.bottom_right
        );
        out.push(vec![Span::new(bottom, edge)]);
        out
    }

    fn top_edge(&self, chars: &BorderChars, inner: usize) -> Vec<Span> {
        let edge = self.border_style;
        let rule = |n: usize| chars.horizontal.to_string().repeat(n);

        match &self.title {
            Some((title, style)) if inner >= 4 => {
                let label = clip(&format!(" {title} "), inner - 2);
                let rest = inner - label.width();
                let left = rest / 2;
                vec![
                    Span::new(format!("{}{}", chars.top_left, rule(left)), edge),
                    Span::new(label, *style),
                    Span::new(format!("{}{}", rule(rest - left), chars.top_right), edge),
                ]
            }
            _ => vec![Span::new(format!("{}{}{}", chars.top_left, rule(inner), chars.top_right), edge)],
        }
    }
}

/// Greedy word wrap by display width. Leading indentation of a line is
/// kept on its first row; words wider than `width` are hard-split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let trimmed = text.trim_start();
    let indent = clip(&text[..text.len() - trimmed.len()], width / 2);

    let mut rows = Vec::new();
    let mut current = indent;
    let mut has_word = false;

    for word in trimmed.split_whitespace() {
        let word_width = word.width();
        let needed = if has_word { current.width() + 1 + word_width } else { current.width() + word_width };

        if needed <= width {
            if has_word {
                current.push(' ');
            }
            current.push_str(word);
            has_word = true;
            continue;
        }

        if has_word {
            rows.push(std::mem::take(&mut current));
        }

        // the word alone may still be too wide
        let mut rest = word;
        loop {
            let room = width.saturating_sub(current.width());
            let mut head = clip(rest, room);
            if head.is_empty() {
                if !current.is_empty() {
                    rows.push(std::mem::take(&mut current));
                    continue;
                }
                // a single glyph wider than the row
                head = rest.chars().next().map(String::from).unwrap_or_default();
            }
            if head.len() == rest.len() {
                current.push_str(&head);
                has_word = true;
                break;
            }
            rest = &rest[head.len()..];
            current.push_str(&head);
            rows.push(std::mem::take(&mut current));
        }
    }

    if has_word || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Longest prefix of `text` fitting in `width` columns.
pub fn clip(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(rows: &[Vec<Span>]) -> Vec<String> {
        rows.iter()
            .map(|spans| spans.iter().map(|s| s.text.as_str()).collect())
            .collect()
    }

    #[test]
    fn square_panel_layout() {
        let panel = Panel::new(Tint::Green).text("hi", Style::plain());
        assert_eq!(plain(&panel.render(8)), vec!["┌──────┐", "│ hi   │", "└──────┘"]);
    }

    #[test]
    fn centered_body_with_padding() {
        let panel = Panel::new(Tint::Red)
            .text("ab", Style::plain())
            .border(Border::Double)
            .padding(1, 1)
            .centered();
        assert_eq!(
            plain(&panel.render(10)),
            vec!["╔════════╗", "║        ║", "║   ab   ║", "║        ║", "╚════════╝"]
        );
    }

    #[test]
    fn title_sits_in_top_edge() {
        let panel = Panel::new(Tint::BrightWhite)
            .title("T", Style::plain())
            .border(Border::Heavy);
        let rows = plain(&panel.render(11));
        assert_eq!(rows[0], "┏━━━ T ━━━┓");
        assert_eq!(rows[1], "┗━━━━━━━━━┛");
    }

    #[test]
    fn every_row_has_panel_width_even_with_emoji() {
        let panel = Panel::new(Tint::Magenta)
            .text("💌 A Special Message Just For You 💌", Style::plain())
            .border(Border::Rounded)
            .centered();
        for row in plain(&panel.render(50)) {
            assert_eq!(row.width(), 50, "{row}");
        }
    }

    #[test]
    fn long_text_wraps_inside_panel() {
        let panel = Panel::new(Tint::Cyan).text("one two three four five", Style::plain());
        let rows = plain(&panel.render(14));
        assert_eq!(rows[1], "│ one two    │");
        assert_eq!(rows[2], "│ three four │");
        assert_eq!(rows[3], "│ five       │");
    }

    #[test]
    fn no_wrap_clips() {
        let panel = Panel::new(Tint::Cyan).text("abcdefghij", Style::plain()).no_wrap();
        assert_eq!(plain(&panel.render(8))[1], "│ abcd │");
    }

    #[test]
    fn wrap_keeps_indent_and_splits_long_words() {
        assert_eq!(wrap("   hello world", 9), vec!["   hello", "world"]);
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn clip_counts_wide_chars_double() {
        assert_eq!(clip("🎂🎂🎂", 5), "🎂🎂");
    }
}
