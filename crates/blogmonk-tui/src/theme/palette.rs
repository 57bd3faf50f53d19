//! Color palette for the blogmonk theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent
pub const ACCENT_DIM: Color = Color::DarkGray; // Dimmed accent

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
pub const CONTRAST_FG: Color = Color::Black; // Foreground on accent backgrounds

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // Success notice
pub const STATUS_RED: Color = Color::Red; // Error panels
pub const STATUS_YELLOW: Color = Color::Yellow; // Key hints

// --- Badges ---
pub const BADGE_FG: Color = Color::Black;
pub const BADGE_BG: Color = Color::DarkGray;

// --- Skeleton placeholders ---
pub const SKELETON: Color = Color::DarkGray;
