//! TUI pane rendering modules
//!
//! - [`yard`]: The stacks drawn as diagram columns, with tops and the last
//!   moved crates highlighted
//! - [`moves`]: The instruction list with the current step highlighted
//! - [`status`]: Status bar with keybindings and replay state
//!
//! Each pane module exports a primary `render_*` function plus the scroll
//! state it keeps between frames.

pub mod moves;
pub mod status;
pub mod yard;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by all bordered panes
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

pub use moves::{render_moves_pane, MovesScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use yard::{render_yard_pane, YardRenderData};
