use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub crate_label: Color,
    pub top_crate: Color,   // Yellow for the crate a stack would hand out next
    pub moved_crate: Color, // Pink for crates placed by the current step
    pub keyword: Color,
    pub number: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    crate_label: Color::Rgb(148, 226, 213),    // Cyan/teal for crate labels
    top_crate: Color::Rgb(249, 226, 175),
    moved_crate: Color::Rgb(245, 194, 231),
    keyword: Color::Rgb(137, 180, 250),
    number: Color::Rgb(250, 179, 135),
};
