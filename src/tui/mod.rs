// terminal ui

mod app;
mod ascii;
mod event;
mod theme;
mod ui;

pub use app::App;
pub use theme::ThemeKind;

use crossterm::{
    cursor::SetCursorStyle,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, stdout};
use std::time::Duration;

use crate::core::{Directory, HealthBot};
use crate::Error;
use app::{LogLevel, Mode};
use event::{Action, handle_event, poll_event};

// shown instead of an error when the assistant call fails
const APOLOGY: &str =
    "I apologize, but I'm having trouble responding right now. Please try again later.";

pub async fn run() -> Result<(), Error> {
    // setup terminal
    enable_raw_mode().map_err(|e| Error::Server(e.to_string()))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| Error::Server(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| Error::Server(e.to_string()))?;

    // run app
    let result = run_app(&mut terminal).await;

    // restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        SetCursorStyle::DefaultUserShape,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

async fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), Error> {
    let mut app = App::new(Directory::new());
    let bot = HealthBot::new();

    let mut last_mode = app.mode;

    loop {
        // update cursor style before render
        if app.mode != last_mode {
            let cursor_style = match app.mode {
                Mode::Insert => SetCursorStyle::BlinkingBar, // beam cursor
                Mode::Normal => SetCursorStyle::BlinkingBlock, // block cursor
            };
            execute!(terminal.backend_mut(), cursor_style).ok();
            last_mode = app.mode;
        }

        // render (cursor position is set in ui::render when in insert mode)
        terminal
            .draw(|frame| ui::render(frame, &mut app))
            .map_err(|e| Error::Server(e.to_string()))?;

        // poll events
        if let Some(event) =
            poll_event(Duration::from_millis(100)).map_err(|e| Error::Server(e.to_string()))?
        {
            match handle_event(&mut app, event) {
                Action::Quit => break,
                Action::Submit(query) => {
                    app.push_user(query.clone());
                    app.loading = true;

                    // render loading state
                    terminal
                        .draw(|frame| ui::render(frame, &mut app))
                        .map_err(|e| Error::Server(e.to_string()))?;

                    // the apology fallback is this caller's policy, the bot
                    // itself never produces it
                    match bot.respond(&query).await {
                        Ok(reply) => app.push_bot(reply),
                        Err(e) => {
                            app.log(LogLevel::Error, e.to_string());
                            app.push_bot(APOLOGY.to_string());
                        }
                    }
                    app.loading = false;
                }
                Action::None => {}
            }
        }
    }

    Ok(())
}
