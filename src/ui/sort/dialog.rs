use crate::discovery::SortKey;
use crate::ui::components::PopupDialog;
use crate::ui::sort::state::SortDialogState;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, BRAND_BLUE, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

pub fn render_sort_dialog(frame: &mut Frame, area: Rect, state: &SortDialogState) {
    let SortDialogState::Visible { current, focused } = state else {
        return;
    };

    let mut lines = Vec::new();
    for key in SortKey::ALL {
        let active = key == current.key;
        let mut spans = vec![
            Span::styled(
                if key == *focused { "▸ " } else { "  " },
                Style::default().fg(HEADER_TEXT),
            ),
            Span::styled(format!("{:<14}", key.label()), Style::default().fg(HEADER_TEXT)),
        ];
        if active {
            spans.push(Span::styled(
                current.direction.arrow(),
                Style::default().fg(BRAND_BLUE),
            ));
        }
        let mut line = Line::from(spans);
        if key == *focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter: Sort (again to reverse)  Esc: Cancel",
        Style::default().fg(MUTED_TEXT),
    )));

    PopupDialog::new("Sort by", lines)
        .min_width(40)
        .render(frame, area);
}
