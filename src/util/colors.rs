use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00c792ea);
pub const SECONDARY: Color = Color::from_u32(0x006e4a8c);
pub const NEUTRAL: Color = Color::from_u32(0x00404040);
pub const BACKGROUND: Color = Color::from_u32(0x000d0d0d);
pub const ACCENT: Color = Color::from_u32(0x0089ddff);
pub const DANGER: Color = Color::from_u32(0x00e06c75);
pub const SUCCESS: Color = Color::from_u32(0x0098c379);
