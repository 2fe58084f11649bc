// crates/pulse-terminal/src/components/watchlist.rs

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::app::App;
use crate::ui::format_price;

pub fn draw_watchlist(f: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(vec!["Symbol", "Last", "Id"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app.watchlist.iter().enumerate().map(|(i, stock)| {
        let style = if i == app.selected_stock_index {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };

        Row::new(vec![
            Cell::from(stock.symbol.clone()).style(style.fg(Color::Cyan)),
            Cell::from(format_price(stock.last_price)).style(style),
            Cell::from(stock.id.clone()).style(style.fg(Color::DarkGray)),
        ])
    }).collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default()
            .title(" Dashboard - Watchlist ([Enter] Trade) ")
            .borders(Borders::ALL));

    f.render_widget(table, area);
}
