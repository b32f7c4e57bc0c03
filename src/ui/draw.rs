use ratatui::Frame;

use crate::app::App;
use super::mint_view;

/// Main entry point for UI rendering
pub fn draw(f: &mut Frame, app: &mut App) {
    mint_view::draw_main(f, app);
}
