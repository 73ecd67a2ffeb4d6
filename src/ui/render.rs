use crate::discovery::Category;
use crate::geo::format_distance;
use crate::ui::app::{App, PopupKind, Screen};
use crate::ui::components::PopupDialog;
use crate::ui::detail::render_detail_dialog;
use crate::ui::filter::render_filter_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::login::{LoginField, LoginFormState};
use crate::ui::sort::render_sort_dialog;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, RATING_STAR,
    STATUS_ERROR, STATUS_OK,
};
use crate::vendor::{format_rating, format_review_count, Vendor};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const LOGIN_FORM_WIDTH: u16 = 50;
const LOGIN_FORM_HEIGHT: u16 = 12;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.session(), app.location());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    match app.screen() {
        Screen::Login => draw_login(frame, body, app.login_form()),
        Screen::Home => draw_home(frame, body, app),
    }

    let footer_widget = Footer::new(app.screen(), app.popup_kind());
    frame.render_widget(footer_widget.widget(footer), footer);

    match app.popup_kind() {
        Some(PopupKind::Filter) => render_filter_dialog(frame, area, app.filter_dialog()),
        Some(PopupKind::Sort) => render_sort_dialog(frame, area, app.sort_dialog()),
        Some(PopupKind::Detail) => {
            if let Some(vendor) = app.selected_vendor() {
                render_detail_dialog(frame, area, vendor);
            }
        }
        Some(PopupKind::Alert) => {
            let message = app.alert().unwrap_or_default();
            let lines = vec![
                Line::from(Span::styled(message, Style::default().fg(STATUS_ERROR))),
                Line::from(""),
                Line::from(Span::styled(
                    " Enter/Esc: Dismiss",
                    Style::default().fg(MUTED_TEXT),
                )),
            ];
            PopupDialog::new("Error", lines).min_width(36).render(frame, area);
        }
        None => {}
    }
}

fn draw_login(frame: &mut Frame<'_>, body: Rect, form: &LoginFormState) {
    let form_area = centered_rect_by_size(body, LOGIN_FORM_WIDTH, LOGIN_FORM_HEIGHT);
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);

    let field = |label: &'static str, value: String, focused: bool| {
        let marker = if focused { "▸ " } else { "  " };
        let line = Line::from(vec![
            Span::styled(marker, text),
            Span::styled(format!("{:<10}", label), muted),
            Span::styled(value, text),
            Span::styled(if focused { "▏" } else { "" }, Style::default().fg(BRAND_BLUE)),
        ]);
        if focused {
            line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
        } else {
            line
        }
    };

    let mut lines = vec![
        Line::from(Span::styled("Welcome back", text.add_modifier(Modifier::BOLD))),
        Line::from(Span::styled("Sign in to find vendors near you", muted)),
        Line::from(""),
        field(
            "Username",
            form.username.clone(),
            form.focused == LoginField::Username,
        ),
        field(
            "Password",
            form.password_display(),
            form.focused == LoginField::Password,
        ),
        Line::from(""),
    ];

    if form.in_flight {
        lines.push(Line::from(Span::styled("Signing in…", muted)));
    } else if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    let block = Block::default()
        .title(Span::styled(" Log in ", Style::default().fg(BRAND_BLUE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), form_area);
}

fn draw_home(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let [search_area, category_area, list_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(body);

    let query = &app.discovery().query;
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);

    let search_line = if query.search.is_empty() {
        Line::from(vec![
            Span::styled(" 🔍 ", text),
            Span::styled("Search vendors…", muted),
        ])
    } else {
        Line::from(vec![
            Span::styled(" 🔍 ", text),
            Span::styled(query.search.clone(), text),
            Span::styled("▏", Style::default().fg(BRAND_BLUE)),
        ])
    };
    frame.render_widget(Paragraph::new(search_line), search_area);

    let mut category_spans = vec![Span::raw(" ")];
    for category in Category::ALL {
        let style = if category == query.category {
            Style::default()
                .fg(BRAND_BLUE)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            muted
        };
        category_spans.push(Span::styled(category.name(), style));
        category_spans.push(Span::raw("  "));
    }
    if !query.filter.is_neutral() {
        category_spans.push(Span::styled("│ filtered", Style::default().fg(RATING_STAR)));
    }
    frame.render_widget(Paragraph::new(Line::from(category_spans)), category_area);

    let view = app.view();
    if view.is_empty() {
        let empty = vec![
            Line::from(""),
            Line::from(Span::styled("No vendors found", text.add_modifier(Modifier::BOLD))),
            Line::from(Span::styled("Try adjusting your search or filters", muted)),
        ];
        frame.render_widget(
            Paragraph::new(empty).alignment(Alignment::Center),
            list_area,
        );
    } else {
        let items: Vec<ListItem> = view.items.iter().copied().map(vendor_item).collect();
        let list = List::new(items).highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
        let mut state = ListState::default().with_selected(Some(app.discovery().selected));
        frame.render_stateful_widget(list, list_area, &mut state);
    }

    let sort = query.sort;
    let status = Line::from(vec![
        Span::styled(
            format!(" Showing {} of {}", view.items.len(), view.total_matches),
            muted,
        ),
        Span::styled(
            format!("  │  Sort: {} {}", sort.key.label(), sort.direction.arrow()),
            muted,
        ),
        Span::styled(
            if view.has_more { "  │  Ctrl+N for more" } else { "" },
            muted,
        ),
    ]);
    frame.render_widget(Paragraph::new(status), status_area);
}

fn vendor_item(vendor: &Vendor) -> ListItem<'static> {
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);

    let status = if vendor.is_open {
        Span::styled("Open", Style::default().fg(STATUS_OK))
    } else {
        Span::styled("Closed", Style::default().fg(STATUS_ERROR))
    };
    let distance = vendor
        .distance_km
        .map(format_distance)
        .unwrap_or_else(|| "-".to_string());

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(" ", text),
            Span::styled(vendor.name.clone(), text.add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {} · {}", vendor.brand, vendor.category), muted),
        ]),
        Line::from(vec![
            Span::styled("   ★ ", Style::default().fg(RATING_STAR)),
            Span::styled(format_rating(vendor.rating), text),
            Span::styled(
                format!(" ({})  {}  ", format_review_count(vendor.review_count), distance),
                muted,
            ),
            status,
        ]),
    ])
}
