// crates/pulse-terminal/src/ui.rs

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, NoticeKind, Page};
use crate::components::{
    account::draw_account,
    header::draw_header,
    help::draw_help,
    order_list::draw_order_list,
    positions::draw_positions,
    preset_form::draw_preset_page,
    status_bar::draw_status_bar,
    tools::draw_tools,
    trade_dialog::draw_trade_dialog,
    watchlist::draw_watchlist,
};

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Page content
            Constraint::Length(3),   // Notice
            Constraint::Length(3),   // Status bar
        ])
        .split(f.size());

    draw_header(f, chunks[0], app);
    draw_page(f, chunks[1], app);
    draw_notice(f, chunks[2], app);
    draw_status_bar(f, chunks[3], app);

    if app.trade_dialog.is_some() {
        draw_trade_dialog(f, centered_rect(60, 50, f.size()), app);
    }

    // Help overlay sits on top of everything
    if app.show_help {
        draw_help(f, centered_rect(60, 70, f.size()));
    }
}

fn draw_page(f: &mut Frame, area: Rect, app: &App) {
    match app.current_page {
        Page::Dashboard => draw_watchlist(f, area, app),
        Page::Orders => draw_order_list(f, area, app),
        Page::Positions => draw_positions(f, area, app),
        Page::Account => draw_account(f, area, app),
        Page::Tools => draw_tools(f, area, app),
        Page::Preset => draw_preset_page(f, area, app),
    }
}

fn draw_notice(f: &mut Frame, area: Rect, app: &App) {
    let line = match &app.notice {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Success => Color::Green,
                NoticeKind::Error => Color::Red,
            };
            Line::from(vec![
                Span::styled(notice.text.as_str(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled("  [Esc] dismiss", Style::default().fg(Color::DarkGray)),
            ])
        }
        None => Line::from(Span::styled(
            "Press [V] and say: place order preset one for apple",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let paragraph = Paragraph::new(line)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Messages "));
    f.render_widget(paragraph, area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Cents-precision price for tables.
pub fn format_price(price: rust_decimal::Decimal) -> String {
    format!("{:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(app: &App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn dashboard_shows_header_and_watchlist() {
        let app = App::new(&ClientConfig::default());
        let screen = rendered(&app);
        assert!(screen.contains("Trade Pulse"));
        assert!(screen.contains("Dashboard"));
        assert!(screen.contains("TSLA"));
    }

    #[test]
    fn every_page_renders() {
        let mut app = App::new(&ClientConfig::default());
        for page in Page::ALL {
            app.navigate(page);
            let screen = rendered(&app);
            assert!(screen.contains(page.title()), "{} missing", page.title());
        }
    }

    #[test]
    fn trade_dialog_lists_presets() {
        let mut app = App::new(&ClientConfig::default());
        app.open_trade_dialog();
        let screen = rendered(&app);
        assert!(screen.contains("Select Trade Preset"));
        assert!(screen.contains("preset-1 - Buy - Qty: 10 @ $10"));
    }
}
