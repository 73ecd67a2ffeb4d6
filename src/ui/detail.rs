//! Vendor detail card.

use crate::geo::format_distance;
use crate::ui::components::PopupDialog;
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, RATING_STAR, STATUS_ERROR, STATUS_OK};
use crate::vendor::{format_price, format_rating, format_review_count, Vendor};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 64;

pub fn detail_lines(vendor: &Vendor) -> Vec<Line<'static>> {
    let text = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);

    let mut lines = vec![
        Line::from(Span::styled(
            vendor.name.clone(),
            text.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} · {}", vendor.brand, vendor.category),
            muted,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("★ ", Style::default().fg(RATING_STAR)),
            Span::styled(format_rating(vendor.rating), text),
            Span::styled(
                format!("  ({} reviews)", format_review_count(vendor.review_count)),
                muted,
            ),
        ]),
        Line::from(vec![
            Span::styled("Distance:      ", muted),
            Span::styled(
                vendor
                    .distance_km
                    .map(|d| format!("{} away", format_distance(d)))
                    .unwrap_or_else(|| "Unknown".to_string()),
                text,
            ),
        ]),
        Line::from(vec![
            Span::styled("Status:        ", muted),
            if vendor.is_open {
                Span::styled("Open now", Style::default().fg(STATUS_OK))
            } else {
                Span::styled("Closed", Style::default().fg(STATUS_ERROR))
            },
        ]),
        Line::from(vec![
            Span::styled("Delivery time: ", muted),
            Span::styled(vendor.delivery_time.clone(), text),
        ]),
        Line::from(vec![
            Span::styled("Delivery fee:  ", muted),
            Span::styled(format_price(vendor.delivery_fee), text),
        ]),
        Line::from(vec![
            Span::styled("Minimum order: ", muted),
            Span::styled(format_price(vendor.minimum_order), text),
        ]),
    ];

    if let Some(description) = vendor.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(description.to_string(), text)));
    }

    lines.push(Line::from(""));
    if vendor.products.is_empty() {
        lines.push(Line::from(Span::styled("No products listed", muted)));
    } else {
        lines.push(Line::from(Span::styled("Products:", muted)));
        for product in &vendor.products {
            let price = product
                .price
                .map(format_price)
                .unwrap_or_else(|| "-".to_string());
            lines.push(Line::from(Span::styled(
                format!("  {}: {}", product.name, price),
                text,
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(" Esc/Enter: Close", muted)));
    lines
}

pub fn render_detail_dialog(frame: &mut Frame, area: Rect, vendor: &Vendor) {
    PopupDialog::new("Vendor", detail_lines(vendor))
        .fixed_width(DIALOG_WIDTH)
        .render(frame, area);
}
