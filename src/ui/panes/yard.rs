//! Yard pane rendering
//!
//! Draws every stack as a diagram column, base at the bottom, followed by the
//! legend row and the current top message. The pane is bottom-aligned so the
//! stack bases stay put while crates pile up; scrolling moves the view up
//! from the bottom.
//!
//! # Highlighting
//!
//! - Crates placed by the current step are drawn in the "moved" color
//! - Every other top crate is drawn in the "top" color
//! - In the legend, the source stack of the current step is orange and the
//!   target stack blue

use crate::parser::instruction::MoveInstruction;
use crate::ui::panes::border_style;
use crate::ui::theme::DEFAULT_THEME;
use crate::yard::{stack::Stack, Yard};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Data needed to render the yard pane
pub struct YardRenderData<'a> {
    pub yard: &'a Yard,
    /// The move that produced the displayed yard (`None` at the start)
    pub last_move: Option<MoveInstruction>,
}

/// Style for the crate at `level` of stack `index` (1-based)
fn crate_style(stack: &Stack, index: usize, level: usize, last_move: Option<MoveInstruction>) -> Style {
    let depth = stack.depth();
    let placed_here = last_move
        .filter(|mv| !mv.is_no_op() && mv.to == index)
        .is_some_and(|mv| level + mv.count >= depth);

    if placed_here {
        Style::default()
            .fg(DEFAULT_THEME.moved_crate)
            .add_modifier(Modifier::BOLD)
    } else if level + 1 == depth {
        Style::default()
            .fg(DEFAULT_THEME.top_crate)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.crate_label)
    }
}

/// Build one diagram row at `level` (0 = stack base)
fn diagram_row(yard: &Yard, level: usize, last_move: Option<MoveInstruction>) -> Line<'static> {
    let bracket = Style::default().fg(DEFAULT_THEME.comment);
    let mut spans = Vec::new();

    for (idx, stack) in yard.stacks().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        match stack.crates().get(level) {
            Some(item) => {
                spans.push(Span::styled("[", bracket));
                spans.push(Span::styled(
                    item.to_string(),
                    crate_style(stack, idx + 1, level, last_move),
                ));
                spans.push(Span::styled("]", bracket));
            }
            None => spans.push(Span::raw("   ")),
        }
    }

    Line::from(spans)
}

/// Build the legend row, marking the stacks the last move touched
fn legend_row(yard: &Yard, last_move: Option<MoveInstruction>) -> Line<'static> {
    let mut spans = Vec::new();

    for index in 1..=yard.len() {
        if index > 1 {
            spans.push(Span::raw(" "));
        }
        let style = match last_move {
            Some(mv) if mv.to == index => Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
            Some(mv) if mv.from == index => Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(DEFAULT_THEME.comment),
        };
        spans.push(Span::styled(format!("{:^3}", index), style));
    }

    Line::from(spans)
}

/// Render the yard pane
pub fn render_yard_pane(
    frame: &mut Frame,
    area: Rect,
    data: YardRenderData,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(
        " Yard │ {} stacks, {} crates ",
        data.yard.len(),
        data.yard.crate_count()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if data.yard.is_empty() {
        let paragraph = Paragraph::new("(empty yard)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let mut lines: Vec<Line> = (0..data.yard.max_depth())
        .rev()
        .map(|level| diagram_row(data.yard, level, data.last_move))
        .collect();
    lines.push(legend_row(data.yard, data.last_move));
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Tops: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            data.yard.top_message(),
            Style::default()
                .fg(DEFAULT_THEME.top_crate)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Scroll offset counts rows hidden below the view
    let max_scroll = total_lines.saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);
    let start = max_scroll - *scroll_offset;

    let mut visible: Vec<Line> = lines
        .into_iter()
        .skip(start)
        .take(visible_height)
        .collect();

    // Bottom-align short yards
    if visible.len() < visible_height {
        let mut padded = vec![Line::raw(""); visible_height - visible.len()];
        padded.append(&mut visible);
        visible = padded;
    }

    let paragraph = Paragraph::new(visible).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(paragraph, area);
}
