use std::io::{self, Stdout};
use std::sync::Once;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

static PANIC_HOOK: Once = Once::new();

/// The studio's full-screen terminal. Raw mode, the alternate screen and
/// bracketed paste are active until this value is dropped, or until a
/// panic unwinds through the event loop.
pub struct StudioTerminal {
    inner: Terminal<CrosstermBackend<Stdout>>,
}

impl StudioTerminal {
    pub fn enter() -> Result<Self> {
        PANIC_HOOK.call_once(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                leave();
                previous(info);
            }));
        });

        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste) {
            leave();
            return Err(err).context("failed to enter alternate screen");
        }
        let inner = Terminal::new(CrosstermBackend::new(stdout))
            .inspect_err(|_| leave())
            .context("failed to initialize terminal")?;
        Ok(Self { inner })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.inner
            .draw(render)
            .context("failed to draw frame")?;
        Ok(())
    }
}

impl Drop for StudioTerminal {
    fn drop(&mut self) {
        let _ = self.inner.show_cursor();
        leave();
    }
}

fn leave() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableBracketedPaste,
        LeaveAlternateScreen,
        Show
    );
}
