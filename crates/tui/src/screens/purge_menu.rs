//! Purge operation picker for one zone.

use cfctl_client::Zone;
use crossterm::event::KeyCode;
use ratatui::{Frame, layout::Rect};

use super::{
    DomainListScreen, Event, PurgeEverythingScreen, PurgeFormScreen, PurgeKind, ScreenState,
    Transition,
};
use crate::app::Context;
use crate::input::{is_char, step_selection, vertical_step};
use crate::ui::widgets::{Row, render_select_list};
use crate::ui::{render_footer, render_header, screen_areas};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeChoice {
    Url,
    Hostname,
    Tag,
    Prefix,
    Everything,
    Back,
}

impl PurgeChoice {
    pub const ALL: [PurgeChoice; 6] = [
        PurgeChoice::Url,
        PurgeChoice::Hostname,
        PurgeChoice::Tag,
        PurgeChoice::Prefix,
        PurgeChoice::Everything,
        PurgeChoice::Back,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Url => "Purge by URL",
            Self::Hostname => "Purge by Hostname",
            Self::Tag => "Purge by Tag",
            Self::Prefix => "Purge by Prefix",
            Self::Everything => "Purge Everything",
            Self::Back => "Back",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Url => "Purge specific URLs (exact match)",
            Self::Hostname => "Purge all content for specific hostnames",
            Self::Tag => "Purge content by Cache-Tag header",
            Self::Prefix => "Purge all URLs under a path prefix",
            Self::Everything => "Clear entire cache (use with caution)",
            Self::Back => "Return to domain list",
        }
    }

    fn form_kind(self) -> Option<PurgeKind> {
        match self {
            Self::Url => Some(PurgeKind::Url),
            Self::Hostname => Some(PurgeKind::Hostname),
            Self::Tag => Some(PurgeKind::Tag),
            Self::Prefix => Some(PurgeKind::Prefix),
            Self::Everything | Self::Back => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PurgeMenuScreen {
    zone: Zone,
    selected: usize,
}

impl PurgeMenuScreen {
    pub fn new(zone: Zone) -> Self {
        Self { zone, selected: 0 }
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn selected_choice(&self) -> PurgeChoice {
        PurgeChoice::ALL[self.selected]
    }
}

impl ScreenState for PurgeMenuScreen {
    fn handle_event(&mut self, event: Event, _ctx: &Context) -> Transition {
        let Event::Key(key) = event else {
            return Transition::none();
        };
        if let Some(step) = vertical_step(&key) {
            self.selected = step_selection(self.selected, PurgeChoice::ALL.len(), step);
            return Transition::none();
        }
        if key.code == KeyCode::Esc || is_char(&key, 'q') {
            return Transition::to(DomainListScreen::new());
        }
        if key.code != KeyCode::Enter {
            return Transition::none();
        }

        let choice = self.selected_choice();
        tracing::debug!(zone = %self.zone.name, choice = ?choice, "Purge menu selection");
        match choice {
            PurgeChoice::Back => Transition::to(DomainListScreen::new()),
            PurgeChoice::Everything => {
                Transition::to(PurgeEverythingScreen::new(self.zone.clone()))
            }
            other => match other.form_kind() {
                Some(kind) => Transition::to(PurgeFormScreen::new(self.zone.clone(), kind)),
                None => Transition::none(),
            },
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let areas = screen_areas(area);
        render_header(
            f,
            areas.header,
            &format!("Purge Cache: {}", self.zone.name),
            ctx.active_account(),
            theme,
        );
        let rows: Vec<Row> = PurgeChoice::ALL
            .iter()
            .map(|c| Row::new(c.title()).with_description(c.description()))
            .collect();
        render_select_list(f, areas.body, "Purge Options", &rows, self.selected, theme);
        render_footer(
            f,
            areas.footer,
            &[("↑↓", "Navigate"), ("Enter", "Select"), ("Esc", "Back")],
            theme,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{
        ctx_with_accounts, feed, into_screen, key, render_text, switched_to, zone,
    };
    use crate::screens::{Screen, ScreenKind};

    fn select(index: usize) -> Transition {
        let ctx = ctx_with_accounts(&["prod"]);
        let mut screen = PurgeMenuScreen::new(zone("example.com"));
        let mut events = vec![key(KeyCode::Down); index];
        events.push(key(KeyCode::Enter));
        feed(&mut screen, events, &ctx)
    }

    #[test]
    fn test_form_choices_open_matching_form() {
        let expected = [
            PurgeKind::Url,
            PurgeKind::Hostname,
            PurgeKind::Tag,
            PurgeKind::Prefix,
        ];
        for (i, kind) in expected.into_iter().enumerate() {
            let Screen::PurgeForm(form) = into_screen(select(i)) else {
                panic!("expected a purge form");
            };
            assert_eq!(form.kind(), kind);
        }
    }

    #[test]
    fn test_everything_opens_confirmation() {
        assert_eq!(switched_to(&select(4)), Some(ScreenKind::PurgeEverything));
    }

    #[test]
    fn test_back_item_and_esc_return_to_domains() {
        assert_eq!(switched_to(&select(5)), Some(ScreenKind::DomainList));
        let ctx = ctx_with_accounts(&["prod"]);
        let t = PurgeMenuScreen::new(zone("example.com")).handle_event(key(KeyCode::Esc), &ctx);
        assert_eq!(switched_to(&t), Some(ScreenKind::DomainList));
    }

    #[test]
    fn test_selection_clamps() {
        let ctx = ctx_with_accounts(&["prod"]);
        let mut screen = PurgeMenuScreen::new(zone("example.com"));
        feed(&mut screen, vec![key(KeyCode::Up); 3], &ctx);
        assert_eq!(screen.selected_choice(), PurgeChoice::Url);
        feed(&mut screen, vec![key(KeyCode::Down); 10], &ctx);
        assert_eq!(screen.selected_choice(), PurgeChoice::Back);
    }

    #[test]
    fn test_render_shows_zone_and_choices() {
        let ctx = ctx_with_accounts(&["prod"]);
        let text = render_text(&PurgeMenuScreen::new(zone("example.com")), &ctx);
        assert!(text.contains("Purge Cache: example.com"));
        assert!(text.contains("Clear entire cache (use with caution)"));
    }
}
