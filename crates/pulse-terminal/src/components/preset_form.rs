// crates/pulse-terminal/src/components/preset_form.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

use pulse_core::{risk_reward_fields, PresetField};

use crate::app::{App, InputMode};

pub fn draw_preset_page(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),  // Form
            Constraint::Percentage(60),  // Saved presets
        ])
        .split(area);

    draw_preset_form(f, chunks[0], app);
    draw_preset_list(f, chunks[1], app);
}

fn draw_preset_form(f: &mut Frame, area: Rect, app: &App) {
    let editing = matches!(app.input_mode, InputMode::EditingPreset);

    let mut items: Vec<ListItem> = PresetField::ALL.iter().map(|&field| {
        let focused = editing && field == app.preset_field;
        let label_style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![
            Span::styled(format!("{:<26}", field.label()), label_style),
            Span::styled(app.preset_draft.field(field), Style::default().fg(Color::Cyan)),
        ];
        if focused {
            spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
        ListItem::new(Line::from(spans))
    }).collect();

    // Live preview of the derived levels
    let (stop_loss, take_profit) = risk_reward_fields(app.preset_draft.levels().as_ref());
    items.push(ListItem::new(""));
    items.push(ListItem::new(format!("{:<26}{}", "Stop Loss", stop_loss)));
    items.push(ListItem::new(format!("{:<26}{}", "Take Profit", take_profit)));

    let hint = if editing {
        "[Tab] Next [Enter] Add Preset [Esc] Done"
    } else {
        "[E] Edit form [A] Add Preset"
    };
    items.push(ListItem::new(""));
    items.push(ListItem::new(Span::styled(hint, Style::default().fg(Color::DarkGray))));

    let form = List::new(items)
        .block(Block::default()
            .title(" Preset - Create Trading Presets ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if editing { Color::Yellow } else { Color::White })));
    f.render_widget(form, area);
}

fn draw_preset_list(f: &mut Frame, area: Rect, app: &App) {
    if app.user_presets.is_empty() {
        let empty = Paragraph::new("No presets yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(" Your Presets ").borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Name", "Script", "Action", "Type", "Qty", "SL", "TP", "Risk", "Cap", "R:R"])
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app.user_presets.iter().enumerate().map(|(i, preset)| {
        let style = if i == app.selected_preset_index {
            Style::default().bg(Color::DarkGray)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(preset.preset_name.clone()),
            Cell::from(preset.script_name.clone()),
            Cell::from(preset.action.clone()),
            Cell::from(preset.order_type.clone()),
            Cell::from(preset.quantity.clone()),
            Cell::from(preset.stop_loss.clone()).style(Style::default().fg(Color::Red)),
            Cell::from(preset.take_profit.clone()).style(Style::default().fg(Color::Green)),
            Cell::from(preset.total_risk.clone()),
            Cell::from(preset.total_risk_on_capital.clone()),
            Cell::from(preset.risk_reward_ratio.clone()),
        ])
        .style(style)
    }).collect();

    let widths = [
        Constraint::Min(8),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Length(4),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default()
            .title(" Your Presets ([D] Delete) ")
            .borders(Borders::ALL));
    f.render_widget(table, area);
}
