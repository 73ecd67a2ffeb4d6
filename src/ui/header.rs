use crate::auth::Session;
use crate::location::LocationState;
use crate::ui::theme::{BRAND_BLUE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    session: &'a Session,
    location: &'a LocationState,
}

impl<'a> Header<'a> {
    pub fn new(session: &'a Session, location: &'a LocationState) -> Self {
        Self { session, location }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (indicator, indicator_style, location_text) = match self.location {
            LocationState::Pending => ("○", text_style, "Locating…".to_string()),
            LocationState::Located(coordinate) => (
                "●",
                Style::default().fg(STATUS_OK),
                format!("{:.4}, {:.4}", coordinate.lat, coordinate.lon),
            ),
            LocationState::Failed(message) => {
                ("●", Style::default().fg(STATUS_ERROR), message.clone())
            }
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "vendorscope",
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(indicator, indicator_style),
            Span::styled(" ", text_style),
            Span::styled(location_text, text_style),
        ];

        if let Some(profile) = self.session.profile() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(profile.display_name().to_string(), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
