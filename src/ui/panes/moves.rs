//! Move list pane rendering
//!
//! Lists every instruction of the run with its step number. The move that
//! produced the displayed yard is highlighted and kept at a fixed visual row
//! while stepping; a move that failed is shown in the error color, and moves
//! after it (never executed) are dimmed.

use crate::parser::instruction::MoveInstruction;
use crate::ui::panes::border_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Scroll state for the moves pane
pub struct MovesScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

impl MovesScrollState {
    pub fn new() -> Self {
        MovesScrollState {
            offset: 0,
            target_line_row: None,
        }
    }
}

impl Default for MovesScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Highlight keywords and numbers of one move
fn highlight_move(instruction: &MoveInstruction) -> Vec<Span<'static>> {
    let keyword = Style::default().fg(DEFAULT_THEME.keyword);
    let number = Style::default().fg(DEFAULT_THEME.number);
    vec![
        Span::styled("move ", keyword),
        Span::styled(instruction.count.to_string(), number),
        Span::styled(" from ", keyword),
        Span::styled(instruction.from.to_string(), number),
        Span::styled(" to ", keyword),
        Span::styled(instruction.to.to_string(), number),
    ]
}

/// Render the moves pane.
///
/// `current_step` is the 1-based step of the displayed yard (0 before the
/// first move); `failed_step` is the step that aborted the run, if any.
pub fn render_moves_pane(
    frame: &mut Frame,
    area: Rect,
    instructions: &[MoveInstruction],
    current_step: usize,
    failed_step: Option<usize>,
    is_focused: bool,
    scroll_state: &mut MovesScrollState,
) {
    let block = Block::default()
        .title(format!(" Moves │ {} ", instructions.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if instructions.is_empty() {
        let paragraph = Paragraph::new("(no moves)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let total_lines = instructions.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Initialize target_line_row to center if not set
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current step at the target visual row
    scroll_state.offset = current_step.saturating_sub(1).saturating_sub(target_row);
    if total_lines > visible_height {
        scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
    } else {
        scroll_state.offset = 0;
    }

    let visible_lines: Vec<Line> = instructions
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, instruction)| {
            let step = idx + 1;
            let step_str = format!("{:4} ", step);

            let is_failed = failed_step == Some(step);
            let never_ran = failed_step.is_some_and(|failed| step > failed);

            let (num_style, content_style) = if is_failed {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                    Some(
                        Style::default()
                            .bg(DEFAULT_THEME.error)
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                )
            } else if step == current_step {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                    Some(Style::default().bg(DEFAULT_THEME.current_line_bg)),
                )
            } else if never_ran {
                (
                    Style::default().fg(DEFAULT_THEME.comment),
                    Some(Style::default().fg(DEFAULT_THEME.comment)),
                )
            } else {
                (Style::default().fg(DEFAULT_THEME.comment), None)
            };

            let mut spans = vec![Span::styled(step_str, num_style)];
            let mut content = highlight_move(instruction);
            if let Some(style) = content_style {
                for span in &mut content {
                    span.style = if is_failed || never_ran {
                        style
                    } else {
                        span.style.patch(style)
                    };
                }
            }
            spans.extend(content);

            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
