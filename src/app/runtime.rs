use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::sync::Once;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde_json::Value;

use crate::{
    form::FormModel,
    presentation::{self, UiContext},
    store::FormStore,
};

use super::{UiOptions, status::StatusLine};

const HELP_TEXT: &str = "Tab/Shift+Tab or Up/Down navigate • Ctrl+S save • Ctrl+Q quit";

pub(crate) struct App {
    model: FormModel,
    store: FormStore,
    options: UiOptions,
    status: StatusLine,
    title: Option<String>,
    description: Option<String>,
    exit_armed: bool,
    should_quit: bool,
    result: Option<Value>,
}

impl App {
    pub fn new(
        model: FormModel,
        store: FormStore,
        title: Option<String>,
        description: Option<String>,
        options: UiOptions,
    ) -> Self {
        Self {
            model,
            store,
            options,
            status: StatusLine::new(),
            title,
            description,
            exit_armed: false,
            should_quit: false,
            result: None,
        }
    }

    pub fn run(&mut self) -> Result<Value> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            // Deferred commits fire between events too; the poll timeout
            // bounds how late past-deadline commits can land.
            let fired = self.model.tick(Instant::now(), &mut self.store);
            if fired > 0 {
                self.status.committed(fired);
            }

            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key)?,
                Event::Resize(_, _) => {}
                Event::Mouse(_) => {}
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }

        if let Some(value) = self.result.take() {
            Ok(value)
        } else {
            Err(anyhow!("user exited without saving"))
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let help = if self.options.show_help {
            Some(HELP_TEXT)
        } else {
            None
        };
        presentation::draw(
            frame,
            UiContext {
                title: self.title.as_deref(),
                description: self.description.as_deref(),
                model: &self.model,
                store: &self.store,
                status_message: self.status.message(),
                dirty: self.model.is_dirty(),
                pending: self.model.pending_count(),
                help,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') | KeyCode::Char('S') => {
                    self.exit_armed = false;
                    self.on_save();
                    return Ok(());
                }
                KeyCode::Char('q')
                | KeyCode::Char('Q')
                | KeyCode::Char('c')
                | KeyCode::Char('C') => {
                    self.on_exit();
                    return Ok(());
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.model.focus_next(&mut self.store);
                self.exit_armed = false;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.model.focus_prev(&mut self.store);
                self.exit_armed = false;
            }
            KeyCode::Esc => {
                self.exit_armed = false;
                self.status.ready();
            }
            _ => {
                if self.model.handle_key(&key, Instant::now()) {
                    self.exit_armed = false;
                    if let Some(field) = self.model.focused() {
                        self.status.editing(field.label());
                    }
                }
            }
        }

        Ok(())
    }

    fn on_save(&mut self) {
        self.model.flush_all(&mut self.store);
        self.status.saved();
        self.result = Some(self.store.to_value());
        self.should_quit = true;
    }

    fn on_exit(&mut self) {
        let unsettled = self.model.is_dirty() || self.model.pending_count() > 0;
        if self.options.confirm_exit && unsettled && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
        self.result = None;
    }
}

static PANIC_HOOK: Once = Once::new();

/// Raw-mode/alternate-screen scope. The terminal is restored on drop
/// and from the panic hook, whichever comes first.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))
            .context("failed to initialize terminal")?;
        PANIC_HOOK.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |panic_info| {
                restore_terminal();
                previous(panic_info);
            }));
        });
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        restore_terminal();
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
}
