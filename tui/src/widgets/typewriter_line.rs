//! TypewriterLine Widget
//!
//! A heading prefix followed by the live typewriter text and a blinking bar
//! cursor.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

use crate::theme::Palette;

/// Cursor glyph drawn after the typed text
pub const CURSOR: &str = "▌";

/// Heading with a typewriter tail
pub struct TypewriterLine<'a> {
    prefix: &'a str,
    text: &'a str,
    cursor_visible: bool,
    prefix_style: Style,
    text_style: Style,
}

impl<'a> TypewriterLine<'a> {
    pub fn new(prefix: &'a str, text: &'a str, palette: &Palette, accent: Color) -> Self {
        Self {
            prefix,
            text,
            cursor_visible: true,
            prefix_style: palette.heading(),
            text_style: palette.accent(accent),
        }
    }

    pub fn cursor_visible(mut self, visible: bool) -> Self {
        self.cursor_visible = visible;
        self
    }
}

impl Widget for TypewriterLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let right = area.x + area.width;
        let (x, _) = buf.set_stringn(
            area.x,
            area.y,
            self.prefix,
            area.width as usize,
            self.prefix_style,
        );

        let remaining = right.saturating_sub(x) as usize;
        let (x, _) = buf.set_stringn(x, area.y, self.text, remaining, self.text_style);

        if self.cursor_visible && x < right {
            buf.set_string(x, area.y, CURSOR, self.text_style);
        }
    }
}
