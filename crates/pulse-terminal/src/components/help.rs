// crates/pulse-terminal/src/components/help.rs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

fn key(k: &'static str, color: Color, what: &'static str) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(what),
    ]))
}

pub fn draw_help(f: &mut Frame, area: Rect) {
    // Clear the area first for the overlay
    f.render_widget(Clear, area);

    let help_items = vec![
        ListItem::new(Span::styled(
            "Use the following format for speech commands:",
            Style::default().fg(Color::Cyan),
        )),
        ListItem::new(Span::styled(
            "  Place order preset one for [company name]",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        ListItem::new(Span::styled(
            "  Place order preset two for [company name]",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        ListItem::new(""),
        key("V/v", Color::Green, " - Order by Voice (type, then Enter to stop)"),
        key("Enter", Color::Cyan, " - Trade selected stock (Dashboard)"),
        key("E/e", Color::Yellow, " - Edit preset form"),
        key("A/a", Color::Yellow, " - Add preset"),
        key("D/d", Color::Magenta, " - Delete selected preset"),
        key("1-6", Color::Blue, " - Go to page"),
        key("Tab", Color::Blue, " - Next Page"),
        key("Shift+Tab", Color::Blue, " - Previous Page"),
        key("↑/k ↓/j", Color::White, " - Move selection"),
        key("Esc", Color::Gray, " - Dismiss message"),
        key("L/l", Color::Red, " - Logout"),
        key("Q/q", Color::Red, " - Quit"),
    ];

    let help_list = List::new(help_items)
        .block(Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(help_list, area);

    // Add footer with close instruction
    let footer = Paragraph::new("Press F1 or ESC to close help")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    let footer_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    f.render_widget(footer, footer_area);
}
