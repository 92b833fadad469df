//! TestimonialList Widget
//!
//! Customer quotes in two columns, alternating between them the way the
//! page splits its cards. Entries that do not fit are dropped.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Widget;

use novacloud_core::Testimonial;

use super::wrap;
use crate::theme::{Palette, ACCENT_PURPLE};

/// Quote cards split across two columns
pub struct TestimonialList<'a> {
    testimonials: &'a [Testimonial],
    palette: Palette,
}

impl<'a> TestimonialList<'a> {
    pub fn new(testimonials: &'a [Testimonial], palette: Palette) -> Self {
        Self {
            testimonials,
            palette,
        }
    }

    fn render_column<'t>(
        &self,
        entries: impl Iterator<Item = &'t Testimonial>,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let width = area.width as usize;
        let bottom = area.y + area.height;
        let mut y = area.y;

        for entry in entries {
            let quote = wrap(&format!("\u{201c}{}\u{201d}", entry.quote), width, " ");
            // Quote, attribution, gap
            let needed = u16::try_from(quote.len() + 1).unwrap_or(u16::MAX);
            if y.saturating_add(needed) > bottom {
                break;
            }

            for line in &quote {
                buf.set_stringn(area.x, y, line, width, self.palette.base());
                y += 1;
            }

            let (x, _) = buf.set_stringn(
                area.x,
                y,
                format!("{} {}", entry.initial(), entry.name),
                width,
                self.palette.accent(ACCENT_PURPLE),
            );
            let remaining = (area.x + area.width).saturating_sub(x) as usize;
            buf.set_stringn(x, y, format!(", {}", entry.role), remaining, self.palette.muted());
            y += 2;
        }
    }
}

impl Widget for TestimonialList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.testimonials.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        let [left, right] = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .spacing(2)
            .areas(area);

        self.render_column(self.testimonials.iter().step_by(2), left, buf);
        self.render_column(self.testimonials.iter().skip(1).step_by(2), right, buf);
    }
}
