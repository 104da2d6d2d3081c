//! Pick the default account from a filterable list.

use cfctl_config::Account;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::Paragraph,
};

use super::{Event, FilterList, ListKey, MainMenuScreen, MessageScreen, ScreenState, Transition};
use crate::action::{Command, Outcome};
use crate::app::Context;
use crate::input::is_char;
use crate::ui::widgets::{Row, render_select_list};
use crate::ui::{render_footer, render_header, screen_areas};

/// List row for an account: `★` marks the default.
pub(crate) fn account_row(account: &Account) -> Row {
    let marker = if account.default { "★ " } else { "  " };
    Row::new(format!("{marker}{}", account.name)).with_description(account.description())
}

#[derive(Debug, Clone, Default)]
pub struct AccountSelectScreen {
    list: FilterList,
    pending: Option<String>,
    error: Option<String>,
}

impl AccountSelectScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl ScreenState for AccountSelectScreen {
    fn handle_event(&mut self, event: Event, ctx: &Context) -> Transition {
        match event {
            Event::Outcome(Outcome::DefaultAccountSet(result)) if self.pending.is_some() => {
                self.pending = None;
                match result {
                    Ok(name) => Transition::to(
                        MessageScreen::success("Success", format!("Default account set to: {name}"))
                            .returning_to(MainMenuScreen::new()),
                    ),
                    Err(message) => {
                        self.error = Some(message);
                        Transition::none()
                    }
                }
            }
            Event::Key(_) if self.pending.is_some() => Transition::none(),
            Event::Key(key) => {
                let accounts = &ctx.config.accounts;
                let visible = self.list.visible_indices(accounts, |a| a.name.as_str());
                match self.list.handle_key(key, visible.len()) {
                    ListKey::Select(row) => {
                        let name = accounts[visible[row]].name.clone();
                        self.error = None;
                        self.pending = Some(name.clone());
                        Transition::command(Command::SetDefaultAccount(name))
                    }
                    ListKey::Back => Transition::to(MainMenuScreen::new()),
                    ListKey::Other(key) if is_char(&key, 'q') => {
                        Transition::to(MainMenuScreen::new())
                    }
                    ListKey::Consumed | ListKey::Other(_) => Transition::none(),
                }
            }
            _ => Transition::none(),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let areas = screen_areas(area);
        render_header(f, areas.header, "Select Account", ctx.active_account(), theme);

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
        } else if self.pending.is_some() {
            f.render_widget(
                Paragraph::new(Span::styled("Setting default account...", theme.text_dim())),
                status,
            );
        }

        render_footer(
            f,
            areas.footer,
            &[("↑↓", "Navigate"), ("Enter", "Set Default"), ("/", "Filter"), ("Esc", "Back")],
            theme,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::test_support::{
        chars, ctx_with_accounts, feed, into_screen, key, render_text, switched_to,
    };
    use crate::screens::{Screen, ScreenKind};
    use crossterm::event::KeyCode;

    #[test]
    fn test_enter_issues_set_default_for_selected() {
        let ctx = ctx_with_accounts(&["prod", "staging"]);
        let mut screen = AccountSelectScreen::new();
        let t = feed(&mut screen, vec![key(KeyCode::Down), key(KeyCode::Enter)], &ctx);
        let Transition::Stay(commands) = t else {
            panic!("expected a command");
        };
        assert!(matches!(
            commands.as_slice(),
            [Command::SetDefaultAccount(name)] if name == "staging"
        ));
        assert_eq!(screen.pending(), Some("staging"));
    }

    #[test]
    fn test_filter_narrows_selection() {
        let ctx = ctx_with_accounts(&["prod", "staging", "dev"]);
        let mut screen = AccountSelectScreen::new();
        let mut events = vec![key(KeyCode::Char('/'))];
        events.extend(chars("dev"));
        events.push(key(KeyCode::Enter));
        events.push(key(KeyCode::Enter));
        let t = feed(&mut screen, events, &ctx);
        let Transition::Stay(commands) = t else {
            panic!("expected a command");
        };
        assert!(matches!(
            commands.as_slice(),
            [Command::SetDefaultAccount(name)] if name == "dev"
        ));
    }

    #[test]
    fn test_success_shows_message_then_main_menu() {
        let ctx = ctx_with_accounts(&["prod", "staging"]);
        let mut screen = AccountSelectScreen::new();
        feed(&mut screen, vec![key(KeyCode::Down), key(KeyCode::Enter)], &ctx);
        let t = screen.handle_event(
            Event::Outcome(Outcome::DefaultAccountSet(Ok("staging".to_string()))),
            &ctx,
        );
        let Screen::Message(mut message) = into_screen(t) else {
            panic!("expected a message");
        };
        assert_eq!(message.body(), "Default account set to: staging");
        let back = message.handle_event(key(KeyCode::Enter), &ctx);
        assert_eq!(switched_to(&back), Some(ScreenKind::MainMenu));
    }

    #[test]
    fn test_failure_stays_with_error() {
        let ctx = ctx_with_accounts(&["prod"]);
        let mut screen = AccountSelectScreen::new();
        screen.handle_event(key(KeyCode::Enter), &ctx);
        screen.handle_event(
            Event::Outcome(Outcome::DefaultAccountSet(Err("disk full".to_string()))),
            &ctx,
        );
        assert_eq!(screen.error(), Some("disk full"));
        assert_eq!(screen.pending(), None);
    }

    #[test]
    fn test_esc_clears_filter_then_leaves() {
        let ctx = ctx_with_accounts(&["prod"]);
        let mut screen = AccountSelectScreen::new();
        let mut events = vec![key(KeyCode::Char('/'))];
        events.extend(chars("zz"));
        events.push(key(KeyCode::Enter));
        feed(&mut screen, events, &ctx);

        let t = screen.handle_event(key(KeyCode::Esc), &ctx);
        assert!(switched_to(&t).is_none());
        let t = screen.handle_event(key(KeyCode::Esc), &ctx);
        assert_eq!(switched_to(&t), Some(ScreenKind::MainMenu));
    }

    #[test]
    fn test_render_marks_default() {
        let ctx = ctx_with_accounts(&["prod", "staging"]);
        let text = render_text(&AccountSelectScreen::new(), &ctx);
        assert!(text.contains("★ prod"));
        assert!(text.contains("Token authentication"));
    }
}
