//! Game scene: guess history, the working buffer, status bars, and the win
//! overlay.

use super::{format_seconds, Palette};
use crate::core::game_logic::MSG_DAILY_LOCKED;
use crate::core::game_state::{
    FeedbackMark, GameSession, GuessRecord, GuessSlot, Mode, MultiplayerPhase,
};
use crate::core::marking::sorted_summary;
use crate::stats::Streak;
use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the game scene into `area`.
pub fn render_game(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    streak: &Streak,
    colors: &Palette,
    today: NaiveDate,
) {
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(26)])
        .split(area);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(h_chunks[0]);

    let daily_locked = session.mode == Mode::Daily && streak.won_on(today) && !session.won;

    render_board(frame, v_chunks[0], session, colors, daily_locked);
    render_status_bar(frame, v_chunks[1], session, colors, daily_locked);
    render_info_panel(frame, h_chunks[1], session, streak, colors);

    if session.won {
        render_win_overlay(frame, h_chunks[0], session, streak, colors);
    }
}

fn mark_style(mark: FeedbackMark, colors: &Palette) -> Style {
    let color = match mark {
        FeedbackMark::Exact => colors.exact,
        FeedbackMark::Misplaced => colors.misplaced,
        FeedbackMark::Absent => colors.absent,
    };
    Style::default().fg(color)
}

fn summary_span(mark: FeedbackMark, colors: &Palette) -> Span<'static> {
    match mark {
        FeedbackMark::Exact => Span::styled("\u{25CF} ", Style::default().fg(colors.exact)),
        FeedbackMark::Misplaced => {
            Span::styled("\u{25CB} ", Style::default().fg(colors.misplaced))
        }
        FeedbackMark::Absent => Span::styled("\u{00B7} ", Style::default().fg(colors.dim)),
    }
}

fn history_line(
    index: usize,
    record: &GuessRecord,
    session: &GameSession,
    colors: &Palette,
) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:>2}: ", index + 1),
        Style::default().fg(colors.dim),
    )];

    if session.difficulty.summary_feedback() {
        // Terse tiers: plain digits, then the sorted mark summary.
        for d in record.digits {
            spans.push(Span::styled(
                format!("{} ", d),
                Style::default().fg(colors.text),
            ));
        }
        spans.push(Span::raw("  "));
        for mark in sorted_summary(&record.feedback) {
            spans.push(summary_span(mark, colors));
        }
    } else {
        // Verbose tiers: each digit colored by its own mark.
        for (i, d) in record.digits.iter().enumerate() {
            spans.push(Span::styled(
                format!("{} ", d),
                mark_style(record.feedback[i], colors),
            ));
        }
    }

    Line::from(spans)
}

fn buffer_line(session: &GameSession, colors: &Palette) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:>2}: ", session.guess_count() + 1),
        Style::default().fg(colors.dim),
    )];

    for slot in session.buffer.slots() {
        match slot {
            GuessSlot::Digit(d) => spans.push(Span::styled(
                format!("{} ", d),
                Style::default().fg(colors.accent),
            )),
            GuessSlot::Cursor => spans.push(Span::styled(
                "_ ",
                Style::default()
                    .fg(colors.accent)
                    .bg(colors.dim)
                    .add_modifier(Modifier::BOLD),
            )),
            GuessSlot::Empty => {
                spans.push(Span::styled("\u{00B7} ", Style::default().fg(colors.dim)))
            }
        }
    }

    if session.is_marking() {
        spans.push(Span::styled(
            "  (being marked)",
            Style::default().fg(colors.dim),
        ));
    }

    Line::from(spans)
}

fn render_board(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    colors: &Palette,
    daily_locked: bool,
) {
    let block = Block::default()
        .title(" Numble ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut y = inner.y;
    let visible_rows = inner.height as usize;

    // Keep the tail of a long history on screen, plus the input row.
    let history_rows = visible_rows.saturating_sub(2);
    let skip = session.history.len().saturating_sub(history_rows);

    for (i, record) in session.history.iter().enumerate().skip(skip) {
        if y >= inner.y + inner.height {
            break;
        }
        frame.render_widget(
            Paragraph::new(history_line(i, record, session, colors)),
            Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1),
        );
        y += 1;
    }

    if !session.history.is_empty() && !session.won {
        y += 1;
    }

    if !session.won && !daily_locked && y < inner.y + inner.height {
        frame.render_widget(
            Paragraph::new(buffer_line(session, colors)),
            Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1),
        );
    }
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    colors: &Palette,
    daily_locked: bool,
) {
    if area.height < 2 {
        return;
    }

    let status = if daily_locked {
        Span::styled(MSG_DAILY_LOCKED, Style::default().fg(colors.misplaced))
    } else if let Some(ref msg) = session.message {
        Span::styled(msg.clone(), Style::default().fg(colors.misplaced))
    } else if session.history.is_empty() && !session.won {
        Span::styled("Guess the number", Style::default().fg(colors.dim))
    } else {
        Span::raw("")
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::raw(" "), status])).alignment(Alignment::Left),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let controls = if session.is_marking() {
        vec![
            Span::styled(" [1]", Style::default().fg(colors.text)),
            Span::styled(" Right place  ", Style::default().fg(colors.dim)),
            Span::styled("[2]", Style::default().fg(colors.text)),
            Span::styled(" Wrong place  ", Style::default().fg(colors.dim)),
            Span::styled("[3]", Style::default().fg(colors.text)),
            Span::styled(" Not in it", Style::default().fg(colors.dim)),
        ]
    } else if session.won {
        vec![
            Span::styled(" [N]", Style::default().fg(colors.text)),
            Span::styled(" New game  ", Style::default().fg(colors.dim)),
            Span::styled("[S]", Style::default().fg(colors.text)),
            Span::styled(" Stats  ", Style::default().fg(colors.dim)),
            Span::styled("[Q]", Style::default().fg(colors.text)),
            Span::styled(" Quit", Style::default().fg(colors.dim)),
        ]
    } else {
        vec![
            Span::styled(" [0-9]", Style::default().fg(colors.text)),
            Span::styled(" Type  ", Style::default().fg(colors.dim)),
            Span::styled("[Enter]", Style::default().fg(colors.text)),
            Span::styled(" Submit  ", Style::default().fg(colors.dim)),
            Span::styled("[Tab]", Style::default().fg(colors.text)),
            Span::styled(" Settings  ", Style::default().fg(colors.dim)),
            Span::styled("[S]", Style::default().fg(colors.text)),
            Span::styled(" Stats  ", Style::default().fg(colors.dim)),
            Span::styled("[Q]", Style::default().fg(colors.text)),
            Span::styled(" Quit", Style::default().fg(colors.dim)),
        ]
    };
    frame.render_widget(
        Paragraph::new(Line::from(controls)),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );
}

fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    streak: &Streak,
    colors: &Palette,
) {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.dim));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Mode: ", Style::default().fg(colors.dim)),
            Span::styled(session.mode.name(), Style::default().fg(colors.accent)),
        ]),
        Line::from(vec![
            Span::styled("Difficulty: ", Style::default().fg(colors.dim)),
            Span::styled(session.difficulty.name(), Style::default().fg(colors.accent)),
        ]),
        Line::from(vec![
            Span::styled("Guesses: ", Style::default().fg(colors.dim)),
            Span::styled(
                format!("{}", session.guess_count()),
                Style::default().fg(colors.text),
            ),
        ]),
        Line::from(vec![
            Span::styled("Time: ", Style::default().fg(colors.dim)),
            Span::styled(
                format_seconds(session.elapsed_seconds),
                Style::default().fg(colors.text),
            ),
        ]),
    ];

    if session.mode == Mode::Daily {
        lines.push(Line::from(vec![
            Span::styled("Streak: ", Style::default().fg(colors.dim)),
            Span::styled(
                format!("{}", streak.count),
                Style::default().fg(colors.exact),
            ),
        ]));
    }

    if session.multiplayer_phase == Some(MultiplayerPhase::AwaitingSecret) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Pass the keyboard to",
            Style::default().fg(colors.dim),
        )));
        lines.push(Line::from(Span::styled(
            "player 1 to set a code.",
            Style::default().fg(colors.dim),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Feedback:",
        Style::default()
            .fg(colors.text)
            .add_modifier(Modifier::BOLD),
    )));
    if session.difficulty.summary_feedback() {
        lines.push(Line::from(vec![
            Span::styled(" \u{25CF} ", Style::default().fg(colors.exact)),
            Span::styled("Right place", Style::default().fg(colors.dim)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" \u{25CB} ", Style::default().fg(colors.misplaced)),
            Span::styled("Wrong place", Style::default().fg(colors.dim)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" \u{00B7} ", Style::default().fg(colors.dim)),
            Span::styled("Not in it", Style::default().fg(colors.dim)),
        ]));
        lines.push(Line::from(Span::styled(
            " (sorted, not by position)",
            Style::default().fg(colors.dim),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled(" digit ", Style::default().fg(colors.exact)),
            Span::styled("Right place", Style::default().fg(colors.dim)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" digit ", Style::default().fg(colors.misplaced)),
            Span::styled("Wrong place", Style::default().fg(colors.dim)),
        ]));
        lines.push(Line::from(vec![
            Span::styled(" digit ", Style::default().fg(colors.absent)),
            Span::styled("Not in it", Style::default().fg(colors.dim)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_win_overlay(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    streak: &Streak,
    colors: &Palette,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            "You Won!",
            Style::default()
                .fg(colors.exact)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} guesses in {}",
                session.guess_count(),
                format_seconds(session.elapsed_seconds)
            ),
            Style::default().fg(colors.text),
        )),
    ];

    if session.mode == Mode::Daily {
        lines.push(Line::from(Span::styled(
            format!("Streak: {}", streak.count),
            Style::default().fg(colors.exact),
        )));
        lines.push(Line::from(Span::styled(
            "Come back tomorrow",
            Style::default().fg(colors.dim),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "[N] Play Again",
            Style::default().fg(colors.dim),
        )));
    }

    let height = lines.len() as u16 + 2;
    let width = 28;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    let overlay_area = Rect::new(x, y, width.min(area.width), height.min(area.height));

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.exact));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}
