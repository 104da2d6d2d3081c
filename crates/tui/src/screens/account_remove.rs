//! Remove an account: pick it, confirm, then delete.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::account_select::account_row;
use super::{Event, FilterList, ListKey, MainMenuScreen, MessageScreen, ScreenState, Transition};
use crate::action::{Command, Outcome};
use crate::app::Context;
use crate::input::is_char;
use crate::ui::widgets::{Row, render_select_list};
use crate::ui::{centered_rect, render_footer, render_header, screen_areas};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovePhase {
    Select,
    Confirm(String),
    Removing(String),
}

#[derive(Debug, Clone)]
pub struct AccountRemoveScreen {
    list: FilterList,
    phase: RemovePhase,
    error: Option<String>,
}

impl Default for AccountRemoveScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountRemoveScreen {
    pub fn new() -> Self {
        Self {
            list: FilterList::new(),
            phase: RemovePhase::Select,
            error: None,
        }
    }

    pub fn phase(&self) -> &RemovePhase {
        &self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn handle_select_key(&mut self, key: crossterm::event::KeyEvent, ctx: &Context) -> Transition {
        let accounts = &ctx.config.accounts;
        let visible = self.list.visible_indices(accounts, |a| a.name.as_str());
        match self.list.handle_key(key, visible.len()) {
            ListKey::Select(row) => {
                self.error = None;
                self.phase = RemovePhase::Confirm(accounts[visible[row]].name.clone());
                Transition::none()
            }
            ListKey::Back => Transition::to(MainMenuScreen::new()),
            ListKey::Other(key) if is_char(&key, 'q') => Transition::to(MainMenuScreen::new()),
            ListKey::Consumed | ListKey::Other(_) => Transition::none(),
        }
    }
}

impl ScreenState for AccountRemoveScreen {
    fn handle_event(&mut self, event: Event, ctx: &Context) -> Transition {
        match (&self.phase, event) {
            (RemovePhase::Removing(_), Event::Outcome(Outcome::AccountRemoved(result))) => {
                match result {
                    Ok(name) => Transition::to(
                        MessageScreen::success(
                            "Account Removed",
                            format!("Account '{name}' has been removed."),
                        )
                        .returning_to(MainMenuScreen::new()),
                    ),
                    Err(message) => {
                        self.phase = RemovePhase::Select;
                        self.error = Some(message);
                        Transition::none()
                    }
                }
            }
            (RemovePhase::Select, Event::Key(key)) => self.handle_select_key(key, ctx),
            (RemovePhase::Confirm(name), Event::Key(key)) => {
                if is_char(&key, 'y') || is_char(&key, 'Y') {
                    let name = name.clone();
                    self.phase = RemovePhase::Removing(name.clone());
                    Transition::command(Command::RemoveAccount(name))
                } else if is_char(&key, 'n') || is_char(&key, 'N') || key.code == KeyCode::Esc {
                    self.phase = RemovePhase::Select;
                    Transition::none()
                } else {
                    Transition::none()
                }
            }
            _ => Transition::none(),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let areas = screen_areas(area);
        render_header(f, areas.header, "Remove Account", ctx.active_account(), theme);

        let [filter, list, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(areas.body);

        let accounts = &ctx.config.accounts;
        let visible = self.list.visible_indices(accounts, |a| a.name.as_str());
        let rows: Vec<Row> = visible.iter().map(|&i| account_row(&accounts[i])).collect();
        self.list.render_filter(f, filter, theme);
        render_select_list(f, list, "Accounts", &rows, self.list.selected(rows.len()), theme);

        if let Some(error) = &self.error {
            f.render_widget(
                Paragraph::new(Span::styled(format!("✗ {error}"), theme.error())),
                status,
            );
        }

        match &self.phase {
            RemovePhase::Select => render_footer(
                f,
                areas.footer,
                &[("↑↓", "Navigate"), ("Enter", "Remove"), ("/", "Filter"), ("Esc", "Back")],
                theme,
            ),
            RemovePhase::Confirm(name) | RemovePhase::Removing(name) => {
                let removing = matches!(self.phase, RemovePhase::Removing(_));
                let popup = centered_rect(56, 6, areas.body);
                let prompt = if removing {
                    Line::from(Span::styled("Removing...", theme.text_dim()))
                } else {
                    Line::from(vec![
                        Span::styled("y", theme.key_hint()),
                        Span::styled(" confirm  ", theme.text_dim()),
                        Span::styled("n", theme.key_hint()),
                        Span::styled(" cancel", theme.text_dim()),
                    ])
                };
                let body = vec![
                    Line::from(Span::styled(
                        format!("Remove account '{name}'?"),
                        theme.warning(),
                    )),
                    Line::from(Span::styled(
                        "Its stored credential will be deleted.",
                        theme.text_dim(),
                    )),
                    prompt,
                ];
                f.render_widget(ratatui::widgets::Clear, popup);
                f.render_widget(
                    Paragraph::new(body).block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(theme.warning())
                            .title(" Confirm "),
                    ),
                    popup,
                );
            }
        }
    }
}
