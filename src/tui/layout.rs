use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph, Tabs},
    Frame,
};

use crate::config::Config;
use crate::tui::app::TuiApp;
use crate::tui::screen::Screen;

pub fn render(frame: &mut Frame, app: &TuiApp, config: &Config) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Item list
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tab_bar(frame, app, config, chunks[0]);
    render_header(frame, app.active_screen(), config, chunks[1]);
    render_items(frame, app.active_screen(), config, chunks[2]);
    render_status_bar(frame, app.active_screen(), config, chunks[3]);
}

fn render_tab_bar(frame: &mut Frame, app: &TuiApp, config: &Config, area: Rect) {
    let titles: Vec<&str> = app.screens.iter().map(|s| s.source.title()).collect();
    let tabs = Tabs::new(titles)
        .select(app.active)
        .style(Style::default().fg(config.colors.tab_inactive))
        .highlight_style(
            Style::default()
                .fg(config.colors.tab_active)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_header(frame: &mut Frame, screen: &Screen, config: &Config, area: Rect) {
    let title = Line::from(Span::styled(
        screen.source.title(),
        Style::default()
            .fg(config.colors.header_fg)
            .add_modifier(Modifier::BOLD),
    ));
    let header = Paragraph::new(vec![Line::from(""), title])
        .alignment(Alignment::Center)
        .block(Block::default().style(Style::default().bg(config.colors.header_bg)));
    frame.render_widget(header, area);
}

fn render_items(frame: &mut Frame, screen: &Screen, config: &Config, area: Rect) {
    if screen.shows_spinner() {
        let spinner = Paragraph::new("Loading…")
            .alignment(Alignment::Center)
            .style(Style::default().fg(config.colors.spinner));
        frame.render_widget(spinner, area);
        return;
    }

    if screen.items.is_empty() {
        if let Some(ref error) = screen.error {
            let message = Paragraph::new(error.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(config.colors.error));
            frame.render_widget(message, area);
        }
        return;
    }

    let width = area.width as usize;
    let rows: Vec<ListItem> = screen
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == screen.selected {
                Style::default()
                    .fg(config.colors.selection_fg)
                    .bg(config.colors.selection_bg)
            } else {
                Style::default()
            };
            ListItem::new(truncate_title(item.display_title(), width)).style(style)
        })
        .collect();

    frame.render_widget(List::new(rows), area);
}

fn render_status_bar(frame: &mut Frame, screen: &Screen, config: &Config, area: Rect) {
    let status = if screen.is_refreshing() {
        "Refreshing…".to_string()
    } else if let Some(ref error) = screen.error {
        error.clone()
    } else {
        "j/k:Navigate  Tab:Switch feed  r:Refresh  q:Quit".to_string()
    };

    let paragraph = Paragraph::new(status).style(
        Style::default()
            .fg(config.colors.status_fg)
            .bg(config.colors.status_bg),
    );

    frame.render_widget(paragraph, area);
}

/// Truncate to a single line of at most `width` characters, ending with an
/// ellipsis when the title overflows.
fn truncate_title(title: &str, width: usize) -> String {
    if title.chars().count() <= width {
        return title.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut truncated: String = title.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_is_untouched() {
        assert_eq!(truncate_title("Mercato", 20), "Mercato");
        assert_eq!(truncate_title("Mercato", 7), "Mercato");
    }

    #[test]
    fn test_long_title_gets_an_ellipsis() {
        assert_eq!(truncate_title("Girondins de Bordeaux", 10), "Girondins…");
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_title("échauffement général", 8), "échauff…");
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(truncate_title("Mercato", 0), "");
    }
}
