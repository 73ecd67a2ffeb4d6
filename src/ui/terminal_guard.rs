use crate::ui::app::App;
use crate::ui::render::draw;
use ratatui::DefaultTerminal;
use std::io;

/// The terminal while the UI owns it: raw mode and the alternate screen.
///
/// `ratatui::try_init` chains a panic hook that restores the terminal before
/// the panic message prints; dropping the guard restores it on normal exit.
pub struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        let mut terminal = ratatui::try_init()?;
        if let Err(err) = terminal.clear() {
            ratatui::restore();
            return Err(err);
        }
        Ok(Self { terminal })
    }

    pub fn draw(&mut self, app: &App) -> io::Result<()> {
        self.terminal.draw(|frame| draw(frame, app))?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
