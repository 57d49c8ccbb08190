//! Main TUI application state and logic

use crate::auth::Credentials;
use crate::registry::Registry;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Lines moved by PageUp/PageDown in a scrolling dialog
const SCROLL_PAGE: usize = 10;

/// Which menu is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Main,
    Admin,
    Student,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Main => " Welcome to Society Management ",
            Screen::Admin => " Admin Panel ",
            Screen::Student => " Student Panel ",
        }
    }

    /// Menu entries, top to bottom
    pub fn actions(self) -> &'static [MenuAction] {
        match self {
            Screen::Main => &[
                MenuAction::AdminLogin,
                MenuAction::StudentAccess,
                MenuAction::Quit,
            ],
            Screen::Admin => &[
                MenuAction::AddSociety,
                MenuAction::DeleteSociety,
                MenuAction::AddEvent,
                MenuAction::DeleteEvent,
                MenuAction::ViewReport,
                MenuAction::ViewFeedback,
                MenuAction::Back,
            ],
            Screen::Student => &[
                MenuAction::JoinSociety,
                MenuAction::JoinEvent,
                MenuAction::GiveFeedback,
                MenuAction::ViewNotifications,
                MenuAction::Back,
            ],
        }
    }
}

/// Something a menu entry does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AdminLogin,
    StudentAccess,
    Quit,
    AddSociety,
    DeleteSociety,
    AddEvent,
    DeleteEvent,
    ViewReport,
    ViewFeedback,
    JoinSociety,
    JoinEvent,
    GiveFeedback,
    ViewNotifications,
    Back,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AdminLogin => "Admin Login",
            MenuAction::StudentAccess => "Student Access",
            MenuAction::Quit => "Quit",
            MenuAction::AddSociety => "Add Society",
            MenuAction::DeleteSociety => "Delete Society",
            MenuAction::AddEvent => "Add Event",
            MenuAction::DeleteEvent => "Delete Event",
            MenuAction::ViewReport => "View Report",
            MenuAction::ViewFeedback => "View Feedback",
            MenuAction::JoinSociety => "Join Society",
            MenuAction::JoinEvent => "Join Event",
            MenuAction::GiveFeedback => "Give Feedback",
            MenuAction::ViewNotifications => "View Notifications",
            MenuAction::Back => "Back",
        }
    }
}

/// What a submitted text input is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    AdminPassword,
    AddSociety,
    AddEvent,
    Feedback,
}

/// What a chosen option is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoicePurpose {
    DeleteSociety,
    DeleteEvent,
    JoinSociety,
    JoinEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

/// Modal dialog drawn over the menu. At most one is open at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Input {
        title: &'static str,
        prompt: &'static str,
        buffer: String,
        masked: bool,
        purpose: InputPurpose,
    },
    Choice {
        title: &'static str,
        options: Vec<String>,
        selected: usize,
        purpose: ChoicePurpose,
    },
    Message {
        title: &'static str,
        lines: Vec<String>,
        kind: MessageKind,
        /// First body line shown; clamped when drawn
        scroll: usize,
    },
    Notifications {
        entries: Vec<String>,
        scroll: usize,
    },
    Report,
}

impl Dialog {
    fn input(title: &'static str, prompt: &'static str, purpose: InputPurpose) -> Self {
        Dialog::Input {
            title,
            prompt,
            buffer: String::new(),
            masked: purpose == InputPurpose::AdminPassword,
            purpose,
        }
    }

    fn info(title: &'static str, lines: Vec<String>) -> Self {
        Dialog::Message {
            title,
            lines,
            kind: MessageKind::Info,
            scroll: 0,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Dialog::Message {
            title: "Error",
            lines: vec![message.into()],
            kind: MessageKind::Error,
            scroll: 0,
        }
    }
}

/// The main application state
pub struct App {
    /// Societies, events, notifications, feedback and the report
    pub registry: Registry,

    credentials: Credentials,

    /// Menu currently showing
    pub screen: Screen,

    /// Cursor row in the current menu
    pub selected: usize,

    /// Open modal, if any
    pub dialog: Option<Dialog>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    pub fn new(registry: Registry, credentials: Credentials) -> Self {
        App {
            registry,
            credentials,
            screen: Screen::Main,
            selected: 0,
            dialog: None,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub(crate) fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Menu (left) | Overview (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[0]);

        super::panes::render_menu_pane(
            frame,
            columns[0],
            self.screen,
            self.selected,
            self.dialog.is_none(),
        );
        super::panes::render_overview_pane(frame, columns[1], &self.registry);

        if let Some(dialog) = self.dialog.as_mut() {
            super::panes::render_dialog(frame, main_chunks[0], dialog, self.registry.report());
        }

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.screen,
            self.dialog.is_some(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.dialog.is_some() {
            self.handle_dialog_key(key);
            return;
        }

        let count = self.screen.actions().len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') if self.screen == Screen::Main => {
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = if self.selected == 0 {
                    count - 1
                } else {
                    self.selected - 1
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % count;
            }
            KeyCode::Enter => {
                if let Some(&action) = self.screen.actions().get(self.selected) {
                    self.activate(action);
                }
            }
            KeyCode::Esc if self.screen != Screen::Main => {
                self.switch_screen(Screen::Main);
            }
            _ => {}
        }
    }

    /// Perform a menu entry
    fn activate(&mut self, action: MenuAction) {
        match action {
            MenuAction::AdminLogin => {
                self.dialog = Some(Dialog::input(
                    "Admin Login",
                    "Enter admin password:",
                    InputPurpose::AdminPassword,
                ));
            }
            MenuAction::StudentAccess => self.switch_screen(Screen::Student),
            MenuAction::Quit => self.should_quit = true,
            MenuAction::AddSociety => {
                self.dialog = Some(Dialog::input(
                    "Add Society",
                    "Enter society name",
                    InputPurpose::AddSociety,
                ));
            }
            MenuAction::AddEvent => {
                self.dialog = Some(Dialog::input(
                    "Add Event",
                    "Enter event title",
                    InputPurpose::AddEvent,
                ));
            }
            MenuAction::GiveFeedback => {
                self.dialog = Some(Dialog::input(
                    "Give Feedback",
                    "Enter feedback",
                    InputPurpose::Feedback,
                ));
            }
            MenuAction::DeleteSociety => self.open_choice(ChoicePurpose::DeleteSociety),
            MenuAction::DeleteEvent => self.open_choice(ChoicePurpose::DeleteEvent),
            MenuAction::JoinSociety => self.open_choice(ChoicePurpose::JoinSociety),
            MenuAction::JoinEvent => self.open_choice(ChoicePurpose::JoinEvent),
            MenuAction::ViewReport => {
                self.dialog = Some(if self.registry.report().is_empty() {
                    Dialog::info("Report", vec!["No activity recorded yet".to_string()])
                } else {
                    Dialog::Report
                });
            }
            MenuAction::ViewFeedback => {
                let entries = self.registry.feedback_entries();
                let lines = if entries.is_empty() {
                    vec!["No feedback yet".to_string()]
                } else {
                    entries
                        .iter()
                        .enumerate()
                        .map(|(i, text)| format!("{}. {}", i + 1, text))
                        .collect()
                };
                self.dialog = Some(Dialog::info("Feedback", lines));
            }
            MenuAction::ViewNotifications => {
                let entries = self.registry.view_notifications();
                self.dialog = Some(Dialog::Notifications { entries, scroll: 0 });
            }
            MenuAction::Back => self.switch_screen(Screen::Main),
        }
    }

    /// Open a choice list over a snapshot of societies or events
    fn open_choice(&mut self, purpose: ChoicePurpose) {
        let (title, options, empty) = match purpose {
            ChoicePurpose::DeleteSociety => (
                "Delete society",
                self.registry.society_names(),
                "No societies yet",
            ),
            ChoicePurpose::JoinSociety => (
                "Join a society",
                self.registry.society_names(),
                "No societies yet",
            ),
            ChoicePurpose::DeleteEvent => (
                "Delete event",
                self.registry.event_names(),
                "No events yet",
            ),
            ChoicePurpose::JoinEvent => (
                "Join an event",
                self.registry.event_names(),
                "No events yet",
            ),
        };

        self.dialog = Some(if options.is_empty() {
            Dialog::info(title, vec![empty.to_string()])
        } else {
            Dialog::Choice {
                title,
                options,
                selected: 0,
                purpose,
            }
        });
    }

    fn switch_screen(&mut self, screen: Screen) {
        debug!(from = ?self.screen, to = ?screen, "screen change");
        self.screen = screen;
        self.selected = 0;
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.dialog.as_mut() else {
            return;
        };

        match dialog {
            Dialog::Input { buffer, purpose, .. } => match key.code {
                KeyCode::Esc => {
                    self.dialog = None;
                    self.status_message = "Cancelled".to_string();
                }
                KeyCode::Enter => {
                    let purpose = *purpose;
                    let input = std::mem::take(buffer);
                    self.dialog = None;
                    self.submit_input(purpose, input);
                }
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    buffer.push(c);
                }
                _ => {}
            },
            Dialog::Choice {
                options,
                selected,
                purpose,
                ..
            } => match key.code {
                KeyCode::Esc => {
                    self.dialog = None;
                    self.status_message = "Cancelled".to_string();
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    *selected = selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if *selected + 1 < options.len() {
                        *selected += 1;
                    }
                }
                KeyCode::Enter => {
                    let purpose = *purpose;
                    let choice = options.get(*selected).cloned();
                    self.dialog = None;
                    if let Some(choice) = choice {
                        self.apply_choice(purpose, &choice);
                    }
                }
                _ => {}
            },
            Dialog::Notifications { entries, scroll } => match key.code {
                KeyCode::Char('d') | KeyCode::Delete => {
                    if let Some(dismissed) = self.registry.dismiss_notification() {
                        self.status_message = format!("Dismissed: {}", dismissed);
                    }
                    *entries = self.registry.notifications();
                }
                KeyCode::Esc | KeyCode::Enter => self.dialog = None,
                code => scroll_by_key(code, scroll),
            },
            Dialog::Message { scroll, .. } => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.dialog = None,
                code => scroll_by_key(code, scroll),
            },
            Dialog::Report => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    self.dialog = None;
                }
            }
        }
    }

    fn submit_input(&mut self, purpose: InputPurpose, input: String) {
        if purpose == InputPurpose::AdminPassword {
            if self.credentials.verify_password(&input) {
                info!(user = %self.credentials.username, "admin login");
                self.status_message = format!("Logged in as {}", self.credentials.username);
                self.switch_screen(Screen::Admin);
            } else {
                warn!("admin login rejected");
                self.dialog = Some(Dialog::error("Incorrect password!"));
            }
            return;
        }

        let text = input.trim();
        if text.is_empty() {
            let what = match purpose {
                InputPurpose::AddSociety => "Society name",
                InputPurpose::AddEvent => "Event title",
                _ => "Feedback",
            };
            self.dialog = Some(Dialog::error(format!("{} cannot be empty", what)));
            return;
        }

        match purpose {
            InputPurpose::AddSociety => {
                self.registry.add_society(text);
                self.status_message = format!("Added society '{}'", text);
            }
            InputPurpose::AddEvent => {
                self.registry.add_event(text);
                self.status_message = format!("Added event '{}'", text);
            }
            InputPurpose::Feedback => {
                self.registry.give_feedback(text);
                self.status_message = "Thanks for your feedback!".to_string();
            }
            InputPurpose::AdminPassword => {}
        }
    }

    fn apply_choice(&mut self, purpose: ChoicePurpose, choice: &str) {
        match purpose {
            ChoicePurpose::DeleteSociety => {
                self.registry.delete_society(choice);
                self.status_message = format!("Deleted society '{}'", choice);
            }
            ChoicePurpose::DeleteEvent => {
                self.registry.delete_event(choice);
                self.status_message = format!("Deleted event '{}'", choice);
            }
            ChoicePurpose::JoinSociety => {
                self.registry.join_society(choice);
                self.status_message = format!("Joined society '{}'", choice);
            }
            ChoicePurpose::JoinEvent => {
                self.registry.join_event(choice);
                self.status_message = format!("Joined event '{}'", choice);
            }
        }
    }
}

/// Move a dialog's scroll offset. Drawing clamps it to the content.
fn scroll_by_key(code: KeyCode, scroll: &mut usize) {
    match code {
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::PageUp => *scroll = scroll.saturating_sub(SCROLL_PAGE),
        KeyCode::PageDown => *scroll = scroll.saturating_add(SCROLL_PAGE),
        KeyCode::Home | KeyCode::Char('g') => *scroll = 0,
        KeyCode::End | KeyCode::Char('G') => *scroll = usize::MAX,
        _ => {}
    }
}
