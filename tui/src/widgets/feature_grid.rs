//! FeatureGrid Widget
//!
//! The feature catalogue as a grid of cards: headline stat, its label and
//! the wrapped description.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use novacloud_core::Feature;

use super::wrap;
use crate::theme::{Palette, ACCENT_CYAN};

/// Narrowest area that still gets three columns
const THREE_COLUMN_WIDTH: u16 = 72;

/// Feature cards laid out in rows
pub struct FeatureGrid<'a> {
    features: &'a [Feature],
    palette: Palette,
}

impl<'a> FeatureGrid<'a> {
    pub fn new(features: &'a [Feature], palette: Palette) -> Self {
        Self { features, palette }
    }

    /// Columns used for an area `width` wide
    pub fn columns(width: u16) -> usize {
        if width >= THREE_COLUMN_WIDTH {
            3
        } else {
            2
        }
    }

    fn render_card(&self, feature: &Feature, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border())
            .style(Style::default().bg(self.palette.surface))
            .title(format!(" {} ", feature.title));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let (x, _) = buf.set_stringn(
            inner.x,
            inner.y,
            feature.stat,
            width,
            self.palette.accent(ACCENT_CYAN).add_modifier(Modifier::BOLD),
        );
        let remaining = (inner.x + inner.width).saturating_sub(x + 1) as usize;
        buf.set_stringn(x + 1, inner.y, feature.stat_label, remaining, self.palette.muted());

        let bottom = inner.y + inner.height;
        for (line, y) in wrap(feature.description, width, "")
            .iter()
            .zip(inner.y + 2..bottom)
        {
            buf.set_stringn(inner.x, y, line, width, self.palette.muted());
        }
    }
}

impl Widget for FeatureGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.features.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        let columns = Self::columns(area.width);
        let rows = self.features.len().div_ceil(columns);
        let row_count = u32::try_from(rows).unwrap_or(u32::MAX);
        let column_count = u32::try_from(columns).unwrap_or(u32::MAX);

        let row_areas = Layout::vertical((0..rows).map(|_| Constraint::Ratio(1, row_count))).split(area);

        for (chunk, row) in self.features.chunks(columns).zip(row_areas.iter()) {
            let cells = Layout::horizontal((0..columns).map(|_| Constraint::Ratio(1, column_count)))
                .spacing(1)
                .split(*row);
            for (feature, cell) in chunk.iter().zip(cells.iter()) {
                self.render_card(feature, *cell, buf);
            }
        }
    }
}
