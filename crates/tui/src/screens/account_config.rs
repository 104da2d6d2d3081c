//! Account configuration wizard.
//!
//! Steps: choose the auth type, fill in the fields, verify against the API
//! (async), done. Validation runs before any command is issued; a failed
//! verification returns to the field step with the error shown.

use cfctl_config::AuthType;
use cfctl_config::validation::{
    validate_account_name, validate_api_key, validate_api_token, validate_email,
};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use secrecy::SecretString;

use super::{Event, MainMenuScreen, ScreenState, Transition};
use crate::action::{Command, NewAccount, Outcome};
use crate::app::Context;
use crate::input::SingleLineInput;
use crate::ui::widgets::{Row, render_select_list};
use crate::ui::{render_footer, render_header, screen_areas, theme::spinner_char};

const SECRET_MASK: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigStep {
    AuthType,
    Inputs,
    Verifying,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Secret,
}

const TOKEN_FIELDS: &[Field] = &[Field::Name, Field::Secret];
const KEY_FIELDS: &[Field] = &[Field::Name, Field::Email, Field::Secret];

#[derive(Debug, Clone)]
pub struct AccountConfigScreen {
    step: ConfigStep,
    auth_type: AuthType,
    focus: usize,
    name: SingleLineInput,
    email: SingleLineInput,
    secret: SingleLineInput,
    error: Option<String>,
    saved_name: Option<String>,
}

impl Default for AccountConfigScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountConfigScreen {
    pub fn new() -> Self {
        Self {
            step: ConfigStep::AuthType,
            auth_type: AuthType::Token,
            focus: 0,
            name: SingleLineInput::new(),
            email: SingleLineInput::new(),
            secret: SingleLineInput::new(),
            error: None,
            saved_name: None,
        }
    }

    pub fn step(&self) -> ConfigStep {
        self.step
    }

    pub fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn fields(&self) -> &'static [Field] {
        match self.auth_type {
            AuthType::Token => TOKEN_FIELDS,
            AuthType::Key => KEY_FIELDS,
        }
    }

    fn focused_input(&mut self) -> &mut SingleLineInput {
        match self.fields()[self.focus] {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Secret => &mut self.secret,
        }
    }

    fn handle_auth_type_key(&mut self, code: KeyCode) -> Transition {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => {
                self.auth_type = match self.auth_type {
                    AuthType::Token => AuthType::Key,
                    AuthType::Key => AuthType::Token,
                };
            }
            KeyCode::Enter => {
                self.step = ConfigStep::Inputs;
                self.focus = 0;
                self.error = None;
            }
            KeyCode::Esc => return Transition::to(MainMenuScreen::new()),
            _ => {}
        }
        Transition::none()
    }

    fn handle_inputs_key(&mut self, key: crossterm::event::KeyEvent) -> Transition {
        let last = self.fields().len() - 1;
        match key.code {
            KeyCode::Esc => return Transition::to(MainMenuScreen::new()),
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % (last + 1),
            KeyCode::BackTab | KeyCode::Up => self.focus = (self.focus + last) % (last + 1),
            KeyCode::Enter if self.focus < last => self.focus += 1,
            KeyCode::Enter => return self.submit(),
            _ => self.focused_input().handle_key(key),
        }
        Transition::none()
    }

    /// Validate the fields and, if they pass, start verification.
    fn submit(&mut self) -> Transition {
        match self.build_account() {
            Ok(account) => {
                self.error = None;
                self.step = ConfigStep::Verifying;
                self.saved_name = Some(account.name.clone());
                Transition::command(Command::VerifyAndSaveAccount(account))
            }
            Err(message) => {
                self.error = Some(message);
                Transition::none()
            }
        }
    }

    fn build_account(&self) -> Result<NewAccount, String> {
        let name = self.name.value().trim();
        validate_account_name(name).map_err(|e| e.to_string())?;

        let email = if self.auth_type.requires_email() {
            let email = self.email.value().trim();
            validate_email(email).map_err(|e| e.to_string())?;
            Some(email.to_string())
        } else {
            None
        };

        let secret = self.secret.value().trim();
        match self.auth_type {
            AuthType::Token => validate_api_token(secret),
            AuthType::Key => validate_api_key(secret),
        }
        .map_err(|e| e.to_string())?;

        Ok(NewAccount {
            name: name.to_string(),
            email,
            auth_type: self.auth_type,
            secret: SecretString::new(secret.to_string().into()),
        })
    }

    fn render_auth_type(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let rows = [
            Row::new("API Token").with_description("Recommended. Scoped, fine-grained permissions."),
            Row::new("Global API Key").with_description("Legacy. Full account access; needs email."),
        ];
        let selected = match self.auth_type {
            AuthType::Token => 0,
            AuthType::Key => 1,
        };
        render_select_list(f, area, "Authentication Method", &rows, selected, &ctx.theme);
    }

    fn render_inputs(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let fields = self.fields();
        let mut constraints = vec![Constraint::Length(3); fields.len()];
        constraints.push(Constraint::Min(1));
        let rows = Layout::vertical(constraints).split(area);

        for (i, field) in fields.iter().enumerate() {
            let (label, input, mask) = match field {
                Field::Name => ("Account Name", &self.name, None),
                Field::Email => ("Email", &self.email, None),
                Field::Secret => (
                    match self.auth_type {
                        AuthType::Token => "API Token",
                        AuthType::Key => "Global API Key",
                    },
                    &self.secret,
                    Some(SECRET_MASK),
                ),
            };
            let focused = i == self.focus;
            let border = if focused { theme.title() } else { theme.border() };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(label);
            let inner = block.inner(rows[i]);
            f.render_widget(
                Paragraph::new(input.display(mask)).style(theme.text()).block(block),
                rows[i],
            );
            if focused {
                let x = inner.x + input.cursor_position() as u16;
                f.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
            }
        }

        if let Some(error) = &self.error {
            f.render_widget(
                Paragraph::new(Span::styled(format!("✗ {error}"), theme.error()))
                    .wrap(Wrap { trim: true }),
                rows[fields.len()],
            );
        }
    }
}

impl ScreenState for AccountConfigScreen {
    fn handle_event(&mut self, event: Event, _ctx: &Context) -> Transition {
        match (self.step, event) {
            (ConfigStep::Verifying, Event::Outcome(Outcome::AccountVerified(result))) => {
                match result {
                    Ok(()) => self.step = ConfigStep::Done,
                    Err(message) => {
                        self.step = ConfigStep::Inputs;
                        self.error = Some(message);
                    }
                }
                Transition::none()
            }
            (ConfigStep::AuthType, Event::Key(key)) => self.handle_auth_type_key(key.code),
            (ConfigStep::Inputs, Event::Key(key)) => self.handle_inputs_key(key),
            (ConfigStep::Done, Event::Key(key))
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) =>
            {
                Transition::to(MainMenuScreen::new())
            }
            _ => Transition::none(),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &Context) {
        let theme = &ctx.theme;
        let areas = screen_areas(area);
        render_header(f, areas.header, "Configure Account", ctx.active_account(), theme);

        match self.step {
            ConfigStep::AuthType => {
                self.render_auth_type(f, areas.body, ctx);
                render_footer(
                    f,
                    areas.footer,
                    &[("↑↓", "Choose"), ("Enter", "Continue"), ("Esc", "Back")],
                    theme,
                );
            }
            ConfigStep::Inputs => {
                self.render_inputs(f, areas.body, ctx);
                render_footer(
                    f,
                    areas.footer,
                    &[("Tab", "Next Field"), ("Enter", "Next/Submit"), ("Esc", "Back")],
                    theme,
                );
            }
            ConfigStep::Verifying => {
                let line = Line::from(vec![
                    Span::styled(format!("{} ", spinner_char(ctx.frame)), theme.info()),
                    Span::styled("Verifying credentials with Cloudflare...", theme.text()),
                ]);
                f.render_widget(Paragraph::new(line), areas.body);
            }
            ConfigStep::Done => {
                let name = self.saved_name.as_deref().unwrap_or_default();
                let lines = vec![
                    Line::from(Span::styled(
                        format!("✓ Account '{name}' configured successfully"),
                        theme.success(),
                    )),
                    Line::from(Span::styled(
                        "Credentials verified and stored in the system keyring.",
                        theme.text_dim(),
                    )),
                ];
                f.render_widget(Paragraph::new(lines), areas.body);
                render_footer(f, areas.footer, &[("Enter", "Main Menu")], theme);
            }
        }
    }
}
