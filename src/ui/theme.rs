use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub compare: Color, // Yellow for cells under comparison
    pub window: Color,  // Cyan for sliding window / frontier
    pub pointer: Color, // Pink for L/M/R markers
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    compare: Color::Rgb(249, 226, 175),
    window: Color::Rgb(148, 226, 213),
    pointer: Color::Rgb(245, 194, 231),
};
