//! Stats overlay: per-bucket win tables and the highest daily streak.

use super::{format_seconds, Palette};
use crate::stats::{StatBucket, Stats};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn bucket_title(bucket: &StatBucket) -> String {
    match bucket.difficulty {
        Some(difficulty) => format!("{} - {}", bucket.mode.name(), difficulty.name()),
        None => bucket.mode.name().to_string(),
    }
}

fn bucket_lines(bucket: &StatBucket, colors: &Palette) -> Vec<Line<'static>> {
    let fewest = bucket
        .fewest_guesses
        .map_or("-".to_string(), |v| v.to_string());
    let most = bucket
        .most_guesses
        .map_or("-".to_string(), |v| v.to_string());
    let fastest = bucket
        .fastest_seconds
        .map_or("-".to_string(), format_seconds);
    let slowest = bucket
        .slowest_seconds
        .map_or("-".to_string(), format_seconds);

    vec![
        Line::from(Span::styled(
            bucket_title(bucket),
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("  Wins: ", Style::default().fg(colors.dim)),
            Span::styled(format!("{}", bucket.wins), Style::default().fg(colors.text)),
            Span::styled("   Avg guesses: ", Style::default().fg(colors.dim)),
            Span::styled(
                format!("{:.1}", bucket.average_guesses()),
                Style::default().fg(colors.text),
            ),
        ]),
        Line::from(vec![
            Span::styled("  Guesses best/worst: ", Style::default().fg(colors.dim)),
            Span::styled(format!("{} / {}", fewest, most), Style::default().fg(colors.text)),
        ]),
        Line::from(vec![
            Span::styled("  Time best/worst: ", Style::default().fg(colors.dim)),
            Span::styled(
                format!("{} / {}", fastest, slowest),
                Style::default().fg(colors.text),
            ),
            Span::styled("   Total: ", Style::default().fg(colors.dim)),
            Span::styled(
                format_seconds(bucket.total_seconds),
                Style::default().fg(colors.text),
            ),
        ]),
    ]
}

/// Render the stats overlay centered over the game scene.
pub fn render_stats(frame: &mut Frame, area: Rect, stats: &Stats, colors: &Palette) {
    let mut lines: Vec<Line> = vec![Line::from(vec![
        Span::styled("Highest Streak: ", Style::default().fg(colors.dim)),
        Span::styled(
            format!("{}", stats.highest_streak),
            Style::default()
                .fg(colors.exact)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if stats.buckets.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No wins recorded yet.",
            Style::default().fg(colors.dim),
        )));
    }
    for bucket in &stats.buckets {
        lines.push(Line::from(""));
        lines.extend(bucket_lines(bucket, colors));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Esc] Close",
        Style::default().fg(colors.dim),
    )));

    let height = (lines.len() as u16 + 2).min(area.height);
    let width = 52.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Stats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.accent));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}
