// crates/pulse-terminal/src/components/trade_dialog.rs

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, NO_PRESETS};
use crate::ui::format_price;

pub fn draw_trade_dialog(f: &mut Frame, area: Rect, app: &App) {
    let Some(dialog) = app.trade_dialog.as_ref() else {
        return;
    };

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Select Trade Preset - {} @ {} ", dialog.stock.symbol, format_price(dialog.stock.last_price)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),     // Presets
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Actions
        ])
        .split(inner);

    let presets = app.interpreter.presets();
    if presets.is_empty() {
        let info = Paragraph::new(NO_PRESETS)
            .style(Style::default().fg(Color::Blue))
            .wrap(Wrap { trim: true });
        f.render_widget(info, chunks[0]);
    } else {
        let items: Vec<ListItem> = presets.iter().enumerate().map(|(i, (id, preset))| {
            let text = format!(
                "{} - {} - Qty: {} @ ${}",
                id,
                preset.action,
                preset.quantity,
                preset.price.normalize()
            );
            let style = if dialog.selected == Some(i) {
                Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        }).collect();

        let list = List::new(items)
            .block(Block::default().title("Select Preset").borders(Borders::BOTTOM));
        f.render_widget(list, chunks[0]);
    }

    if let Some(status) = dialog.status.as_deref() {
        let color = if dialog.status_is_success() { Color::Green } else { Color::Red };
        let status_widget = Paragraph::new(status)
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true });
        f.render_widget(status_widget, chunks[1]);
    }

    let actions = if dialog.is_loading() {
        Line::from("Placing order...")
    } else {
        Line::from("[↑/↓] Select | [Enter] Execute Order | [Esc] Cancel")
    };
    let actions_widget = Paragraph::new(actions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(actions_widget, chunks[2]);
}
