//! Colour constants for the terminal user interface.

use ratatui::style::Color;

// Programme palette carried over from the mobile client's theme,
// one accent per area.

/// Treinos accent.
pub const ORANGE: Color = Color::Rgb(245, 124, 0);
/// Mentoria accent.
pub const GREEN: Color = Color::Rgb(76, 175, 80);
/// Oportunidades accent.
pub const PURPLE: Color = Color::Rgb(156, 39, 176);
/// Educação accent.
pub const BLUE: Color = Color::Rgb(33, 150, 243);
/// Live accent.
pub const RED_ORANGE: Color = Color::Rgb(255, 87, 34);
/// Biblioteca accent.
pub const LIGHT_BLUE: Color = Color::Rgb(96, 165, 250);
/// Perfil accent.
pub const LIGHT_GREEN: Color = Color::Rgb(34, 197, 94);
/// Task board accent.
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Secondary text.
pub const SUBTEXT: Color = Color::Rgb(154, 168, 181);
