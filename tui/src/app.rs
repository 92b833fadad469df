//! Main Application
//!
//! The App struct owns both typewriter effects and the page state the
//! terminal preview renders:
//! - Event loop (keyboard, typewriter updates, cursor blink)
//! - Theme preference (written off the event loop after a toggle)
//! - Lower panel: features, reviews or pricing
//! - Billing cycle for the pricing table

use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use novacloud_core::{
    catalogue, features, testimonials, BillingCycle, LandingConfig, Theme, ThemeStore,
    TypewriterEffect,
};

use crate::theme::{Palette, ACCENT_CYAN, ACCENT_PURPLE, ERROR_RED};
use crate::widgets::{FeatureGrid, PricingTable, TestimonialList, TypewriterLine};

/// Frame budget (~10 FPS)
const FRAME_DURATION: Duration = Duration::from_millis(100);

/// Cursor blink half-period
const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// Static text in front of the hero typewriter
pub const HERO_PREFIX: &str = "Deploy Your ";

/// Static text in front of the testimonials typewriter
pub const TESTIMONIALS_PREFIX: &str = "Loved by ";

const HERO_SUBTITLE: &str = "High-performance VPS and Cloud solutions powered by NVMe SSD \
storage, 10Gbps network, and enterprise-grade DDoS protection.";

/// Which heading an update belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Hero,
    Testimonials,
}

/// Page section shown below the headings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Section {
    Features,
    Reviews,
    #[default]
    Pricing,
}

impl Section {
    /// Next section, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Features => Self::Reviews,
            Self::Reviews => Self::Pricing,
            Self::Pricing => Self::Features,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::Reviews => "Reviews",
            Self::Pricing => "Pricing",
        }
    }
}

/// Main application state
pub struct App {
    /// Is the app still running?
    running: bool,

    // === Typewriters ===
    hero: TypewriterEffect,
    testimonials: TypewriterEffect,
    hero_text: String,
    testimonials_text: String,
    /// Tagged updates from both effects
    updates: mpsc::UnboundedReceiver<(Slot, String)>,

    // === Page State ===
    theme: ThemeStore,
    /// Theme changed in memory, file not yet written
    theme_unsaved: bool,
    section: Section,
    billing: BillingCycle,
    cursor_visible: bool,
    /// Last persistence error, shown in the footer
    status: Option<String>,
}

impl App {
    /// Start both typewriters
    ///
    /// Must be called from inside a tokio runtime.
    pub fn new(config: &LandingConfig, theme: ThemeStore) -> anyhow::Result<Self> {
        let hero = TypewriterEffect::start(config.hero.clone())
            .context("failed to start hero typewriter")?;
        let testimonials = TypewriterEffect::start(config.testimonials.clone())
            .context("failed to start testimonials typewriter")?;

        let (tx, updates) = mpsc::unbounded_channel();
        for (slot, effect) in [(Slot::Hero, &hero), (Slot::Testimonials, &testimonials)] {
            let tx = tx.clone();
            effect.subscribe(move |text| {
                let _ = tx.send((slot, text.to_owned()));
            });
        }

        info!(theme = %theme.theme(), "Landing preview started");

        Ok(Self {
            running: true,
            hero,
            testimonials,
            hero_text: String::new(),
            testimonials_text: String::new(),
            updates,
            theme,
            theme_unsaved: false,
            section: Section::default(),
            billing: BillingCycle::default(),
            cursor_visible: true,
            status: None,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn billing(&self) -> BillingCycle {
        self.billing
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Latest text for `slot`
    pub fn text(&self, slot: Slot) -> &str {
        match slot {
            Slot::Hero => &self.hero_text,
            Slot::Testimonials => &self.testimonials_text,
        }
    }

    /// Record a typewriter update
    pub fn apply_update(&mut self, slot: Slot, text: String) {
        match slot {
            Slot::Hero => self.hero_text = text,
            Slot::Testimonials => self.testimonials_text = text,
        }
    }

    /// Apply every queued update, returning how many there were
    pub fn drain_updates(&mut self) -> usize {
        let mut applied = 0;
        while let Ok((slot, text)) = self.updates.try_recv() {
            self.apply_update(slot, text);
            applied += 1;
        }
        applied
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Char('t') => {
                let theme = self.theme.toggle();
                self.theme_unsaved = true;
                debug!(%theme, "Theme toggled");
            }
            KeyCode::Tab | KeyCode::Char('s') => {
                self.section = self.section.next();
                debug!(section = self.section.label(), "Section switched");
            }
            KeyCode::Char('b') => {
                self.billing = self.billing.toggle();
                debug!(billing = self.billing.label(), "Billing cycle toggled");
            }
            _ => {}
        }
    }

    /// Write a toggled theme to the preference file on the blocking pool
    pub async fn save_preferences(&mut self) {
        if !std::mem::take(&mut self.theme_unsaved) {
            return;
        }

        let store = self.theme.store().clone();
        match tokio::task::spawn_blocking(move || store.save()).await {
            Ok(Ok(())) => {
                debug!(theme = %self.theme.theme(), "Theme persisted");
                self.status = None;
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Failed to persist theme");
                self.status = Some(format!("theme not saved: {e}"));
            }
            Err(e) => {
                warn!(error = %e, "Preference write task failed");
                self.status = Some("theme not saved".to_string());
            }
        }
    }

    /// Flip cursor visibility
    pub fn blink(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    /// Stop both typewriters
    pub fn shutdown(&self) {
        self.hero.stop();
        self.testimonials.stop();
    }

    /// Main event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let mut event_stream = EventStream::new();
        let mut blink = tokio::time::interval(CURSOR_BLINK);

        terminal.draw(|frame| self.draw(frame))?;

        while self.running {
            let frame_start = Instant::now();

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => warn!(error = %e, "Terminal event error"),
                    None => self.running = false,
                },

                Some((slot, text)) = self.updates.recv() => self.apply_update(slot, text),

                _ = blink.tick() => self.blink(),
            }

            self.save_preferences().await;

            // Several ticks can land inside one frame
            self.drain_updates();
            terminal.draw(|frame| self.draw(frame))?;

            let elapsed = frame_start.elapsed();
            if elapsed < FRAME_DURATION {
                tokio::time::sleep(FRAME_DURATION - elapsed).await;
            }
        }

        self.shutdown();
        Ok(())
    }

    /// Render the whole page into `frame`
    pub fn draw(&self, frame: &mut Frame) {
        let palette = Palette::for_theme(self.theme.theme());
        let area = frame.area();
        frame.render_widget(Block::default().style(palette.base()), area);

        let [header, _, hero, subtitle, _, loved_by, _, panel, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        self.draw_header(frame, header, &palette);

        frame.render_widget(
            TypewriterLine::new(HERO_PREFIX, &self.hero_text, &palette, ACCENT_CYAN)
                .cursor_visible(self.cursor_visible),
            hero,
        );
        frame.render_widget(
            Paragraph::new(HERO_SUBTITLE)
                .style(palette.muted())
                .wrap(ratatui::widgets::Wrap { trim: true }),
            subtitle,
        );
        frame.render_widget(
            TypewriterLine::new(
                TESTIMONIALS_PREFIX,
                &self.testimonials_text,
                &palette,
                ACCENT_PURPLE,
            )
            .cursor_visible(self.cursor_visible),
            loved_by,
        );
        match self.section {
            Section::Features => {
                frame.render_widget(FeatureGrid::new(features::catalogue(), palette), panel);
            }
            Section::Reviews => {
                frame.render_widget(TestimonialList::new(testimonials::catalogue(), palette), panel);
            }
            Section::Pricing => {
                frame.render_widget(PricingTable::new(catalogue(), self.billing, palette), panel);
            }
        }

        self.draw_footer(frame, footer, &palette);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let buf = frame.buffer_mut();
        buf.set_stringn(area.x, area.y, "NovaCloud", area.width as usize, palette.accent(ACCENT_CYAN));

        let info = format!(
            "{} · {} · {} billing",
            self.section.label(),
            self.theme.theme(),
            self.billing.label()
        );
        let width = u16::try_from(info.chars().count()).unwrap_or(u16::MAX);
        if width < area.width {
            buf.set_string(area.x + area.width - width, area.y, &info, palette.muted());
        }
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let buf = frame.buffer_mut();
        let (x, _) = buf.set_stringn(
            area.x,
            area.y,
            "tab section  t theme  b billing  q quit",
            area.width as usize,
            palette.muted(),
        );
        if let Some(status) = &self.status {
            let remaining = (area.x + area.width).saturating_sub(x + 2) as usize;
            buf.set_stringn(x + 2, area.y, status, remaining, palette.base().fg(ERROR_RED));
        }
    }
}
