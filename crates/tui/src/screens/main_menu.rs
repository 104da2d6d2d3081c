//! Main menu: the dispatch hub.

use crossterm::event::KeyCode;
use ratatui::{Frame, layout::Rect};

use super::{
    AccountConfigScreen, AccountRemoveScreen, AccountSelectScreen, DomainListScreen, Event,
    HelpScreen, MessageScreen, ScreenState, SettingsScreen, Transition,
};
use crate::app::Context;
use crate::input::{is_char, step_selection, vertical_step};
use crate::ui::widgets::{Row, render_select_list};
use crate::ui::{render_footer, render_header, screen_areas};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    ConfigureAccount,
    SelectAccount,
    RemoveAccount,
    ManageDomains,
    Settings,
    Help,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 7] = [
        MenuItem::ConfigureAccount,
        MenuItem::SelectAccount,
        MenuItem::RemoveAccount,
        MenuItem::ManageDomains,
        MenuItem::Settings,
        MenuItem::Help,
        MenuItem::Exit,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::ConfigureAccount => "Configure Account",
            Self::SelectAccount => "Select Account",
            Self::RemoveAccount => "Remove Account",
            Self::ManageDomains => "Manage Domains",
            Self::Settings => "Settings",
            Self::Help => "Help",
            Self::Exit => "Exit",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::ConfigureAccount => "⚙",
            Self::SelectAccount => "◉",
            Self::RemoveAccount => "✕",
            Self::ManageDomains => "◈",
            Self::Settings => "◐",
            Self::Help => "?",
            Self::Exit => "→",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MainMenuScreen {
    selected: usize,
}

impl MainMenuScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selected(selected: usize) -> Self {
        Self {
            selected: selected.min(MenuItem::ALL.len() - 1),
        }
    }

    pub fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.selected]
    }

    fn no_accounts(&self, body: &str) -> Transition {
        Transition::to(
            MessageScreen::warning("No Accounts", body)
                .returning_to(MainMenuScreen::with_selected(self.selected)),
        )
    }

    fn activate(&self, ctx: &Context) -> Transition {
        let has_accounts = ctx.config.has_accounts();
        match self.selected_item() {
            MenuItem::ConfigureAccount => Transition::to(AccountConfigScreen::new()),
            MenuItem::SelectAccount | MenuItem::ManageDomains if !has_accounts => {
                self.no_accounts("Please configure an account first.")
            }
            MenuItem::RemoveAccount if !has_accounts => {
                self.no_accounts("There are no accounts to remove.")
            }
            MenuItem::SelectAccount => Transition::to(AccountSelectScreen::new()),
            MenuItem::RemoveAccount => Transition::to(AccountRemoveScreen::new()),
            MenuItem::ManageDomains => Transition::to(DomainListScreen::new()),
            MenuItem::Settings => Transition::to(SettingsScreen::new()),
            MenuItem::Help => Transition::to(HelpScreen::new(Some(
                MainMenuScreen::with_selected(self.selected).into(),
            ))),
            MenuItem::Exit => Transition::Quit,
        }
    }
}

impl ScreenState for MainMenuScreen {
    fn handle_event(&mut self, event: Event, ctx: &Context) -> Transition {
        let Event::Key(key) = event else {
            return Transition::none();
        };
        if let Some(step) = vertical_step(&key) {
            self.selected = step_selection(self.selected, MenuItem::ALL.len(), step);
            return Transition::none();
        }
        match key.code {
            KeyCode::Enter => self.activate(ctx),
            _ if is_char(&key, 'q') => Transition::Quit,
            _ => Transition::none(),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let areas = screen_areas(area);
        render_header(f, areas.header, "Main Menu", ctx.active_account(), theme);

        let rows: Vec<Row> = MenuItem::ALL
            .iter()
            .map(|item| Row::new(format!("{}  {}", item.icon(), item.title())))
            .collect();
        render_select_list(f, areas.body, "Menu", &rows, self.selected, theme);

        render_footer(
            f,
            areas.footer,
            &[("↑↓", "Navigate"), ("Enter", "Select"), ("q", "Quit")],
            theme,
        );
    }
}
