//! Narration log pane

use crate::step::{Step, StepKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn narration_style(kind: StepKind, latest: bool) -> Style {
    let style = match kind {
        StepKind::Found | StepKind::Done | StepKind::EarlyExit => {
            Style::default().fg(DEFAULT_THEME.success)
        }
        StepKind::NotFound => Style::default().fg(DEFAULT_THEME.error),
        StepKind::PassStart | StepKind::PhaseStart | StepKind::Divide | StepKind::Conquer => {
            Style::default().fg(DEFAULT_THEME.primary)
        }
        _ => Style::default().fg(DEFAULT_THEME.fg),
    };
    if latest {
        style
            .bg(DEFAULT_THEME.current_line_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Render every narration up to the cursor, newest last
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    applied: &[Step],
    idle_message: &str,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Narration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if applied.is_empty() {
        let paragraph = Paragraph::new(idle_message)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let last = applied.len() - 1;
    let all_items: Vec<ListItem> = applied
        .iter()
        .enumerate()
        .map(|(i, step)| {
            ListItem::new(format!("{:>4}  {}", i + 1, step.narration))
                .style(narration_style(step.kind, i == last))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
