// crates/pulse-terminal/src/components/account.rs

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn draw_account(f: &mut Frame, area: Rect, app: &App) {
    let endpoint = match app.submission_url.as_deref() {
        Some(url) => Span::styled(url, Style::default().fg(Color::Cyan)),
        None => Span::styled("dry run (orders acknowledged locally)", Style::default().fg(Color::Yellow)),
    };

    let lines = vec![
        Line::from(vec![Span::raw("User ID:      "), Span::raw(app.user_id.as_str())]),
        Line::from(vec![Span::raw("Order API:    "), endpoint]),
        Line::from(format!("Orders sent:  {}", app.orders.len())),
        Line::from(format!("Your presets: {}", app.user_presets.len())),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(" Account ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
