use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::credentials::CredentialCache;
use crate::payment::PaymentVault;
use crate::remote::{ApiClient, AuthApi, NotesApi};
use crate::secrets::{SERVICE_NAME, SecretChain};
use crate::session::Session;
use crate::store::LocalStore;
use crate::tui::TuiRunOptions;

mod app;
use app::{App, Screen};

mod input;

mod view;
use view::draw;

pub(crate) fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let store = LocalStore::open_or_init(&opts.home)?;
    crate::logging::init_file(&store.log_path(), "seclab=info")?;
    let cfg = store.read_config()?;

    let api = ApiClient::from_config(&cfg)?;
    let chain = Arc::new(SecretChain::for_kind(cfg.store, SERVICE_NAME));
    let mut session = Session::new(
        CredentialCache::new(chain.clone()),
        PaymentVault::new(chain),
    )
    .with_offline_demo(cfg.offline_demo);
    session.restore();

    let mut app = App::new(api, session);

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

fn run_loop<A: AuthApi + NotesApi>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<A>,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, app)).context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key<A: AuthApi + NotesApi>(app: &mut App<A>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('l') => app.logout(),
            KeyCode::Char('c') => app.quit = true,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.quit = true,
        KeyCode::F(1) => app.switch_to(Screen::Login),
        KeyCode::F(2) => app.switch_to(Screen::Notes),
        KeyCode::F(3) => app.switch_to(Screen::Payment),
        KeyCode::Tab => app.next_field(),
        KeyCode::BackTab => app.prev_field(),
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.focused_input().backspace(),
        KeyCode::Delete => app.focused_input().delete(),
        KeyCode::Left => app.focused_input().move_left(),
        KeyCode::Right => app.focused_input().move_right(),
        KeyCode::Char(c) => app.focused_input().insert_char(c),
        _ => {}
    }
}

#[cfg(test)]
#[path = "tests/tui_shell_tests.rs"]
mod tests;
