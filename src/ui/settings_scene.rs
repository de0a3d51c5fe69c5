//! Settings overlay: mode, difficulty, and theme selection.

use super::Palette;
use crate::config::GameConfig;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn setting_row<'a>(
    label: &'a str,
    value: &'a str,
    selected: bool,
    colors: &Palette,
) -> Line<'a> {
    let marker = if selected { "> " } else { "  " };
    let value_style = if selected {
        Style::default()
            .fg(colors.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.text)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(colors.accent)),
        Span::styled(format!("{:<12}", label), Style::default().fg(colors.dim)),
        Span::styled("\u{2190} ", Style::default().fg(colors.dim)),
        Span::styled(format!("{:^14}", value), value_style),
        Span::styled(" \u{2192}", Style::default().fg(colors.dim)),
    ])
}

/// Render the settings overlay centered over the game scene.
pub fn render_settings(
    frame: &mut Frame,
    area: Rect,
    config: &GameConfig,
    selected_row: usize,
    colors: &Palette,
) {
    let lines = vec![
        setting_row("Mode", config.mode.name(), selected_row == 0, colors),
        setting_row(
            "Difficulty",
            config.difficulty.name(),
            selected_row == 1,
            colors,
        ),
        setting_row("Theme", config.theme.name(), selected_row == 2, colors),
        Line::from(""),
        Line::from(Span::styled(
            "Mode/difficulty changes restart the game",
            Style::default().fg(colors.dim),
        )),
        Line::from(Span::styled(
            "[\u{2191}\u{2193}] Row  [\u{2190}\u{2192}] Change  [Esc] Close",
            Style::default().fg(colors.dim),
        )),
    ];

    let height = (lines.len() as u16 + 2).min(area.height);
    let width = 46.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Settings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.accent));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}
