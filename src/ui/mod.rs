// UI module for the loyalty-card mint TUI
// This module handles all the terminal UI rendering logic

mod animations;
mod draw;
mod mint_view;
mod status_display;
mod utils;

// Re-export the public functions
pub use draw::draw;
