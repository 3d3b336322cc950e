//! Array pane: value cells, index row and marker rows

use crate::replay::DisplayState;
use crate::step::{Detail, StepKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

const CELL_WIDTH: usize = 5;

fn cell_style(display: &DisplayState, index: usize) -> Style {
    let highlighted = display.highlighted.contains(&index);
    let in_window = match display.detail {
        Detail::Window { start, len, .. } => (start..start + len).contains(&index),
        _ => false,
    };

    if highlighted {
        let bg = match display.kind {
            Some(StepKind::Swap | StepKind::Swapped | StepKind::Shift) => DEFAULT_THEME.error,
            Some(StepKind::Found | StepKind::NewBest | StepKind::Place | StepKind::Merge) => DEFAULT_THEME.success,
            _ => DEFAULT_THEME.compare,
        };
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if display.settled.contains(&index) {
        Style::default().fg(DEFAULT_THEME.success)
    } else if in_window {
        Style::default().fg(DEFAULT_THEME.window)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

fn cells<'a, T: std::fmt::Display>(
    values: impl IntoIterator<Item = T>,
    style: impl Fn(usize) -> Style,
) -> Line<'a> {
    let spans: Vec<Span> = values
        .into_iter()
        .enumerate()
        .flat_map(|(i, v)| {
            [
                Span::styled(format!("{:^width$}", v, width = CELL_WIDTH), style(i)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

/// Marker row under the cells: search bounds, pointers, window extent, merge segment.
fn marker_line(display: &DisplayState) -> Option<Line<'static>> {
    let n = display.array.len();
    let labels: Vec<String> = match display.detail {
        Detail::Bounds { left, right, mid } => (0..n)
            .map(|i| {
                let mut label = String::new();
                if i == left {
                    label.push('L');
                }
                if i == mid {
                    label.push('M');
                }
                if i == right {
                    label.push('R');
                }
                label
            })
            .collect(),
        Detail::Pointers { left, right } => (0..n)
            .map(|i| match (i == left, i == right) {
                (true, true) => "LR".to_string(),
                (true, false) => "L".to_string(),
                (false, true) => "R".to_string(),
                _ => String::new(),
            })
            .collect(),
        Detail::Window { start, len, .. } => (0..n)
            .map(|i| {
                if (start..start + len).contains(&i) {
                    "═".repeat(CELL_WIDTH)
                } else {
                    String::new()
                }
            })
            .collect(),
        Detail::Segment {
            start, end, split, ..
        } => (0..n)
            .map(|i| {
                if Some(i) == split {
                    "┃".to_string()
                } else if (start..end).contains(&i) {
                    "─".repeat(CELL_WIDTH)
                } else {
                    String::new()
                }
            })
            .collect(),
        _ => return None,
    };
    Some(cells(labels, |_| {
        Style::default()
            .fg(DEFAULT_THEME.pointer)
            .add_modifier(Modifier::BOLD)
    }))
}

fn counting_lines(display: &DisplayState) -> Vec<Line<'static>> {
    let Detail::Counting {
        phase,
        ref counts,
        ref output,
        slot,
    } = display.detail
    else {
        return Vec::new();
    };

    let label = |text: &'static str| Span::styled(text, Style::default().fg(DEFAULT_THEME.comment));
    let slot_style = |i: usize| {
        if Some(i) == slot {
            Style::default()
                .bg(DEFAULT_THEME.compare)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.window)
        }
    };

    let mut key_line = vec![label("key    ")];
    key_line.extend(cells(0..counts.len(), |_| Style::default().fg(DEFAULT_THEME.comment)).spans);
    let mut count_line = vec![label("count  ")];
    count_line.extend(cells(counts.iter(), slot_style).spans);
    let mut output_line = vec![label("output ")];
    output_line.extend(
        cells(
            output
                .iter()
                .map(|v| v.map_or_else(|| "·".to_string(), |v| v.to_string())),
            |i| {
                if output[i].is_some() {
                    Style::default().fg(DEFAULT_THEME.success)
                } else {
                    Style::default().fg(DEFAULT_THEME.comment)
                }
            },
        )
        .spans,
    );

    vec![
        Line::from(""),
        Line::from(Span::styled(
            phase.label(),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(key_line),
        Line::from(count_line),
        Line::from(output_line),
    ]
}

/// Render the array visualization
pub fn render_array_pane(frame: &mut Frame, area: Rect, display: &DisplayState, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 1, 0));

    if display.array.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut lines = vec![
        cells(display.array.iter(), |i| cell_style(display, i)),
        cells(0..display.array.len(), |_| {
            Style::default().fg(DEFAULT_THEME.comment)
        }),
    ];
    lines.extend(marker_line(display));

    if let Detail::Window { sum, best_sum, .. } = display.detail {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Window sum: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(sum.to_string(), Style::default().fg(DEFAULT_THEME.window)),
            Span::styled("   Best: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(best_sum.to_string(), Style::default().fg(DEFAULT_THEME.success)),
        ]));
    }
    lines.extend(counting_lines(display));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
