use crate::ui::app::{PopupKind, Screen};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    screen: Screen,
    popup: Option<PopupKind>,
}

impl Footer {
    pub fn new(screen: Screen, popup: Option<PopupKind>) -> Self {
        Self { screen, popup }
    }

    pub fn hints(&self) -> &'static str {
        match (self.popup, self.screen) {
            (Some(PopupKind::Filter), _) => {
                " ↑↓: Field │ ←→: Change │ Enter: Apply │ Ctrl+R: Reset │ Esc: Cancel"
            }
            (Some(PopupKind::Sort), _) => " ↑↓: Key │ Enter: Select │ Esc: Cancel",
            (Some(PopupKind::Detail | PopupKind::Alert), _) => " Enter/Esc: Close",
            (None, Screen::Login) => {
                " Tab: Next field │ Ctrl+P: Show password │ Enter: Log in │ Esc: Quit"
            }
            (None, Screen::Home) => {
                " ←→: Category │ Enter: Details │ Ctrl+F: Filter │ Ctrl+S: Sort │ Ctrl+N: More │ Ctrl+L: Logout │ Ctrl+Q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
