// crates/pulse-terminal/src/components/order_list.rs

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::{App, OrderSource, OrderStatus};
use crate::ui::format_price;
use pulse_core::Side;

pub fn draw_order_list(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec!["Time", "ID", "Sym", "Side", "Price", "Qty", "Via", "Status"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app.orders.values().enumerate().map(|(i, order)| {
        let style = if i == app.selected_order_index {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        let side_style = match order.request.order_type {
            Side::Buy => style.fg(Color::Green),
            Side::Sell => style.fg(Color::Red),
        };

        let (status_text, status_style) = match &order.status {
            OrderStatus::Pending => ("Pending".to_string(), style.fg(Color::Yellow)),
            OrderStatus::Completed => ("Completed".to_string(), style.fg(Color::Green)),
            OrderStatus::Failed(reason) => (format!("Failed: {reason}"), style.fg(Color::Red)),
        };

        let via = match order.source {
            OrderSource::Voice => "voice",
            OrderSource::Dialog => "dialog",
        };

        Row::new(vec![
            Cell::from(order.timestamp.format("%H:%M:%S").to_string()).style(style),
            Cell::from(order.id.to_string()).style(style),
            Cell::from(order.request.symbol.clone()).style(style),
            Cell::from(order.request.order_type.to_string()).style(side_style),
            Cell::from(format_price(order.request.price)).style(style),
            Cell::from(order.request.qty.to_string()).style(style),
            Cell::from(via).style(style),
            Cell::from(status_text).style(status_style),
        ])
    }).collect();

    let widths = [
        Constraint::Length(8),   // Time
        Constraint::Length(5),   // ID
        Constraint::Length(6),   // Symbol
        Constraint::Length(5),   // Side
        Constraint::Length(9),   // Price
        Constraint::Length(5),   // Qty
        Constraint::Length(6),   // Source
        Constraint::Min(10),     // Status
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default()
            .title(" Orders ")
            .borders(Borders::ALL));

    f.render_widget(table, area);
}
