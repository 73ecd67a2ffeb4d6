use crate::discovery::{distance_label, rating_label};
use crate::ui::components::PopupDialog;
use crate::ui::filter::state::{FilterDialogState, FilterField};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 60;

pub fn render_filter_dialog(frame: &mut Frame, area: Rect, state: &FilterDialogState) {
    let FilterDialogState::Visible { draft, focused } = state else {
        return;
    };

    let mut lines = Vec::new();
    for field in FilterField::ALL {
        let value = match field {
            FilterField::Rating => rating_label(draft.min_rating),
            FilterField::Distance => distance_label(draft.max_distance_km),
            FilterField::OpenNow if draft.open_now => "Yes".to_string(),
            FilterField::OpenNow => "Any".to_string(),
        };
        let marker = if field == *focused { "▸ " } else { "  " };
        let mut line = Line::from(vec![
            Span::styled(marker, Style::default().fg(HEADER_TEXT)),
            Span::styled(format!("{:<18}", field.label()), Style::default().fg(HEADER_TEXT)),
            Span::styled(format!("◂ {} ▸", value), Style::default().fg(HEADER_TEXT)),
        ]);
        if field == *focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " ←/→: Change  Enter: Apply  Ctrl+R: Reset  Esc: Cancel",
        Style::default().fg(MUTED_TEXT),
    )));

    PopupDialog::new("Filter", lines)
        .fixed_width(DIALOG_WIDTH)
        .render(frame, area);
}
