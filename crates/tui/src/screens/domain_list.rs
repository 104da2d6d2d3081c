//! Zone browser.
//!
//! Responsibilities:
//! - Load zones on entry, racing the load against a fixed timeout.
//! - Offer a filterable list; Enter opens the purge menu for the zone.
//!
//! Invariants:
//! - Exactly one of {zones loaded, timeout} settles a visit. Whichever arrives
//!   second finds `loading == false` and is discarded.

use std::time::Duration;

use cfctl_client::Zone;
use cfctl_config::constants::ZONES_LOAD_TIMEOUT_SECS;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::{
    Event, FilterList, ListKey, MainMenuScreen, PurgeMenuScreen, ScreenState, Transition,
};
use crate::action::{Command, Outcome};
use crate::app::Context;
use crate::input::is_char;
use crate::ui::widgets::{Row, render_empty_state, render_error_state, render_loading, render_select_list};
use crate::ui::{render_footer, render_header, screen_areas};
use crate::utils::{format_count, truncate};

pub const NO_ZONES_MESSAGE: &str = "no zones found. Ensure your API token has Zone.Zone.Read permission and access to at least one zone";

pub const ZONES_TIMEOUT_MESSAGE: &str = "timeout fetching zones. Check network connectivity and ensure your API token has Zone.Zone.Read permission";

/// Longest zone name shown before truncation.
const MAX_ZONE_NAME_CHARS: usize = 48;

#[derive(Debug, Clone, Default)]
pub struct DomainListScreen {
    loading: bool,
    zones: Vec<Zone>,
    error: Option<String>,
    list: FilterList,
}

impl DomainListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn settle(&mut self, outcome: Outcome) {
        if !self.loading {
            tracing::debug!("Discarding zones result that arrived after the visit settled");
            return;
        }
        self.loading = false;
        match outcome {
            Outcome::ZonesLoaded(Ok(zones)) if zones.is_empty() => {
                self.error = Some(NO_ZONES_MESSAGE.to_string());
            }
            Outcome::ZonesLoaded(Ok(zones)) => {
                tracing::info!(count = zones.len(), "Zones loaded");
                self.zones = zones;
            }
            Outcome::ZonesLoaded(Err(message)) => self.error = Some(message),
            Outcome::ZonesTimedOut => {
                tracing::warn!(
                    timeout_secs = ZONES_LOAD_TIMEOUT_SECS,
                    "Zones load timed out"
                );
                self.error = Some(ZONES_TIMEOUT_MESSAGE.to_string());
            }
            _ => {}
        }
    }
}

impl ScreenState for DomainListScreen {
    fn init(&mut self, _ctx: &Context) -> Vec<Command> {
        self.loading = true;
        self.error = None;
        self.zones.clear();
        vec![
            Command::LoadZones,
            Command::StartZonesTimeout(Duration::from_secs(ZONES_LOAD_TIMEOUT_SECS)),
        ]
    }

    fn handle_event(&mut self, event: Event, _ctx: &Context) -> Transition {
        let key = match event {
            Event::Outcome(outcome @ (Outcome::ZonesLoaded(_) | Outcome::ZonesTimedOut)) => {
                self.settle(outcome);
                return Transition::none();
            }
            Event::Key(key) => key,
            _ => return Transition::none(),
        };

        if self.loading || self.error.is_some() {
            return match key.code {
                KeyCode::Esc => Transition::to(MainMenuScreen::new()),
                KeyCode::Char('q') => Transition::to(MainMenuScreen::new()),
                KeyCode::Char('r') if !self.loading => Transition::to(DomainListScreen::new()),
                _ => Transition::none(),
            };
        }

        let visible = self.list.visible_indices(&self.zones, |z| z.name.as_str());
        match self.list.handle_key(key, visible.len()) {
            ListKey::Select(row) => {
                Transition::to(PurgeMenuScreen::new(self.zones[visible[row]].clone()))
            }
            ListKey::Back => Transition::to(MainMenuScreen::new()),
            ListKey::Other(key) if is_char(&key, 'q') => Transition::to(MainMenuScreen::new()),
            ListKey::Other(key) if is_char(&key, 'r') => Transition::to(DomainListScreen::new()),
            ListKey::Consumed | ListKey::Other(_) => Transition::none(),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let areas = screen_areas(area);
        render_header(f, areas.header, "Domains", ctx.active_account(), theme);

        if self.loading {
            render_loading(f, areas.body, "Domains", "Loading zones...", ctx.frame, theme);
            render_footer(f, areas.footer, &[("Esc", "Back")], theme);
            return;
        }
        if let Some(error) = &self.error {
            render_error_state(f, areas.body, "Domains", error, theme);
            render_footer(f, areas.footer, &[("r", "Retry"), ("Esc", "Back")], theme);
            return;
        }

        let [filter, list] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).areas(areas.body);
        let visible = self.list.visible_indices(&self.zones, |z| z.name.as_str());
        self.list.render_filter(f, filter, theme);
        if visible.is_empty() {
            render_empty_state(f, list, "Domains", "No zones match the filter.", theme);
        } else {
            let rows: Vec<Row> = visible
                .iter()
                .map(|&i| {
                    let zone = &self.zones[i];
                    Row::new(truncate(&zone.name, MAX_ZONE_NAME_CHARS))
                        .with_description(format!("{} • {}", zone.status, zone.plan.name))
                })
                .collect();
            let title = format_count(self.zones.len(), "zone", "zones");
            render_select_list(f, list, &title, &rows, self.list.selected(rows.len()), theme);
        }

        render_footer(
            f,
            areas.footer,
            &[
                ("↑↓", "Navigate"),
                ("Enter", "Purge"),
                ("/", "Filter"),
                ("r", "Reload"),
                ("Esc", "Back"),
            ],
            theme,
        );
    }
}
