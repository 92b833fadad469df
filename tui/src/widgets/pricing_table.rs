//! PricingTable Widget
//!
//! The plan catalogue as side-by-side cards. Prices follow the selected
//! billing cycle and the highlighted plan gets the accent border.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders, Widget};
use unicode_width::UnicodeWidthStr;

use novacloud_core::{BillingCycle, Plan};

use super::wrap;
use crate::theme::{Palette, ACCENT_BLUE, ACCENT_PURPLE, STATUS_GREEN};

/// Marker drawn before each feature
const FEATURE_MARK: &str = "✓ ";

/// Price label, e.g. `$24/mo`
pub fn price_label(plan: &Plan, cycle: BillingCycle) -> String {
    format!("${}/mo", plan.price(cycle))
}

/// Feature lines of a card, wrapped to `width`
pub fn feature_lines(plan: &Plan, width: usize) -> Vec<String> {
    let indent = " ".repeat(FEATURE_MARK.width());
    plan.features
        .iter()
        .flat_map(|feature| wrap(&format!("{FEATURE_MARK}{feature}"), width, &indent))
        .collect()
}

/// Plan cards for one billing cycle
pub struct PricingTable<'a> {
    plans: &'a [Plan],
    cycle: BillingCycle,
    palette: Palette,
}

impl<'a> PricingTable<'a> {
    pub fn new(plans: &'a [Plan], cycle: BillingCycle, palette: Palette) -> Self {
        Self {
            plans,
            cycle,
            palette,
        }
    }

    fn render_card(&self, plan: &Plan, area: Rect, buf: &mut Buffer) {
        let (border_style, cta_style) = if plan.highlighted {
            (self.palette.accent(ACCENT_PURPLE), self.palette.accent(ACCENT_PURPLE))
        } else {
            (self.palette.border(), self.palette.accent(ACCENT_BLUE))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(Style::default().bg(self.palette.surface))
            .title(format!(" {} ", plan.name));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let width = inner.width as usize;
        let bottom = inner.y + inner.height;
        let mut y = inner.y;

        let put = |text: &str, style: Style, y: &mut u16, buf: &mut Buffer| {
            if *y < bottom {
                buf.set_stringn(inner.x, *y, text, width, style);
                *y += 1;
            }
        };

        let mut price = price_label(plan, self.cycle);
        if self.cycle == BillingCycle::Yearly {
            let percent = plan.yearly_savings_percent();
            if percent > 0 {
                price = format!("{price}  save {percent}%");
            }
        }
        put(&price, self.palette.heading(), &mut y, buf);

        for line in wrap(plan.description, width, "") {
            put(&line, self.palette.muted(), &mut y, buf);
        }
        y += 1;

        for line in feature_lines(plan, width) {
            put(&line, self.palette.base().fg(STATUS_GREEN), &mut y, buf);
        }

        // CTA sits on the last row of the card
        if bottom > y {
            let cta = format!("[ {} ]", plan.cta);
            buf.set_stringn(inner.x, bottom - 1, &cta, width, cta_style);
        }
    }
}

impl Widget for PricingTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.plans.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        let count = u32::try_from(self.plans.len()).unwrap_or(u32::MAX);
        let columns = Layout::horizontal(
            self.plans.iter().map(|_| Constraint::Ratio(1, count)),
        )
        .spacing(1)
        .split(area);

        for (plan, column) in self.plans.iter().zip(columns.iter()) {
            self.render_card(plan, *column, buf);
        }
    }
}
