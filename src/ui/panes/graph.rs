//! Graph pane: node states, adjacency, frontier and traversal order

use crate::algorithm::Algorithm;
use crate::input::graph::{node_label, Graph};
use crate::replay::DisplayState;
use crate::step::{Detail, Traversal};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

fn node_style(walk: &Traversal, node: usize) -> Style {
    if walk.active == Some(node) {
        Style::default()
            .bg(DEFAULT_THEME.compare)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else if walk.finished.contains(&node) {
        Style::default().fg(DEFAULT_THEME.success)
    } else if walk.frontier.contains(&node) {
        Style::default().fg(DEFAULT_THEME.window)
    } else if walk.discovered.contains(&node) {
        Style::default().fg(DEFAULT_THEME.secondary)
    } else {
        Style::default().fg(DEFAULT_THEME.comment)
    }
}

fn list(nodes: &[usize], sep: &str) -> String {
    nodes.iter().map(|&n| node_label(n)).collect::<Vec<_>>().join(sep)
}

/// Render the graph traversal view
pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    graph: &Graph,
    display: &DisplayState,
    algorithm: Algorithm,
) {
    let block = Block::default()
        .title(format!(" {} ", algorithm))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 1, 0));

    if graph.node_count() == 0 {
        let paragraph = Paragraph::new("(empty graph)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let empty = Traversal::default();
    let walk = match &display.detail {
        Detail::Traversal(walk) => walk,
        _ => &empty,
    };
    let comment = Style::default().fg(DEFAULT_THEME.comment);

    let mut lines: Vec<Line> = (0..graph.node_count())
        .map(|node| {
            let mut spans = vec![
                Span::styled(format!(" {:<3} ", node_label(node)), node_style(walk, node)),
                Span::styled(" → ", comment),
                Span::styled(
                    format!("{:<16}", list(graph.neighbors(node), ", ")),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
            ];
            match algorithm {
                Algorithm::Bfs => {
                    let dist = walk
                        .distances
                        .get(node)
                        .copied()
                        .flatten()
                        .map_or_else(|| "∞".to_string(), |d| d.to_string());
                    spans.push(Span::styled(format!(" dist={}", dist), comment));
                }
                _ => {
                    let (d, f) = walk.times.get(node).copied().unwrap_or((None, None));
                    let show = |t: Option<u32>| t.map_or_else(|| "-".to_string(), |t| t.to_string());
                    spans.push(Span::styled(format!(" d/f={}/{}", show(d), show(f)), comment));
                }
            }
            Line::from(spans)
        })
        .collect();

    let frontier_name = if algorithm == Algorithm::Bfs { "Queue" } else { "Stack" };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(format!("{}: ", frontier_name), comment),
        Span::styled(
            format!("[{}]", list(&walk.frontier, ", ")),
            Style::default().fg(DEFAULT_THEME.window),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Order: ", comment),
        Span::styled(
            list(&walk.discovered, " → "),
            Style::default().fg(DEFAULT_THEME.secondary),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
