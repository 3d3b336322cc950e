//! Counters, input parameters and catalog facts

use crate::algorithm::Algorithm;
use crate::catalog::CatalogEntry;
use crate::input::AlgorithmInput;
use crate::replay::{DisplayState, Speed};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<13}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

pub struct StatsRenderData<'a> {
    pub algorithm: Algorithm,
    pub input: &'a AlgorithmInput,
    pub display: &'a DisplayState,
    pub entry: Option<&'static CatalogEntry>,
    pub speed: Speed,
}

pub fn render_stats_pane(frame: &mut Frame, area: Rect, data: &StatsRenderData) {
    let block = Block::default()
        .title(" Stats ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let counters = data.display.counters;
    let mut lines = vec![
        heading("Counters"),
        row("Comparisons", counters.comparisons.to_string()),
        row("Swaps", counters.swaps.to_string()),
        row("Passes", counters.passes.to_string()),
    ];
    if counters.writes > 0 {
        lines.push(row("Writes", counters.writes.to_string()));
    }
    if counters.visits > 0 {
        lines.push(row("Visits", counters.visits.to_string()));
    }

    lines.push(Line::from(""));
    lines.push(heading("Input"));
    if data.algorithm.uses_target() {
        let label = if data.algorithm == Algorithm::TwoPointer {
            "Pair sum"
        } else {
            "Target"
        };
        lines.push(row(label, data.input.target.to_string()));
    }
    if data.algorithm.uses_window() {
        lines.push(row("Window", data.input.window.to_string()));
    }
    lines.push(row("Speed", data.speed.to_string()));

    if let Some(entry) = data.entry {
        let stable = match entry.stable {
            Some(true) => "yes",
            Some(false) => "no",
            None => "n/a",
        };
        lines.extend([
            Line::from(""),
            heading(entry.title),
            row("Category", entry.category.to_string()),
            row("Best", entry.best.to_string()),
            row("Average", entry.average.to_string()),
            row("Worst", entry.worst.to_string()),
            row("Space", entry.space.to_string()),
            row("Stable", stable.to_string()),
            row("Topic", entry.topic_id.to_string()),
            Line::from(""),
            Line::from(Span::styled(
                entry.description,
                Style::default().fg(DEFAULT_THEME.fg),
            )),
            Line::from(Span::styled(
                format!("Used for: {}", entry.use_cases.join(", ")),
                Style::default().fg(DEFAULT_THEME.comment),
            )),
        ]);
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
