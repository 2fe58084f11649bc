// crates/pulse-terminal/src/components/status_bar.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};
use crate::speech::SpeechCapture;

pub fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let (msg, style) = match app.input_mode {
        InputMode::Normal => {
            let shortcuts = vec![
                Span::styled("[V]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw("oice "),
                Span::styled("[Tab]", Style::default().fg(Color::Blue)),
                Span::raw("Page "),
                Span::styled("[Enter]", Style::default().fg(Color::Cyan)),
                Span::raw("Trade "),
                Span::styled("[E]", Style::default().fg(Color::Yellow)),
                Span::raw("dit Preset "),
                Span::styled("[F1]", Style::default().fg(Color::Gray)),
                Span::raw("Help "),
                Span::styled("[Q]", Style::default().fg(Color::Gray)),
                Span::raw("uit"),
            ];
            (Line::from(shortcuts), Style::default())
        }
        InputMode::Listening => {
            let input = vec![
                Span::raw("Heard: "),
                Span::styled(app.speech.transcript(), Style::default().fg(Color::Yellow)),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
                Span::raw(" [Enter] Stop [Esc] Discard"),
            ];
            (Line::from(input), Style::default().fg(Color::Red))
        }
        InputMode::Dialog => (
            Line::from("[↑/↓] Select preset [Enter] Execute Order [Esc] Cancel"),
            Style::default().fg(Color::Cyan),
        ),
        InputMode::EditingPreset => (
            Line::from(vec![
                Span::raw("Editing: "),
                Span::styled(app.preset_field.label(), Style::default().fg(Color::Yellow)),
                Span::raw(" [Tab/↓] Next [Shift+Tab/↑] Prev [Enter] Add [Esc] Done"),
            ]),
            Style::default().fg(Color::Yellow),
        ),
    };

    let status_block = Block::default()
        .borders(Borders::ALL)
        .border_style(style);

    let paragraph = Paragraph::new(msg)
        .block(status_block)
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
