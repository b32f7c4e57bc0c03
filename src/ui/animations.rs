use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::constants::{BANNER_FRAMES, CONFETTI_GLYPHS};

const CONFETTI_PIECES: u64 = 40;
const CONFETTI_COLORS: [Color; 5] = [
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightRed,
];

pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Render the animated ASCII banner.
pub fn render_banner(f: &mut Frame, area: Rect, highlight_color: Color) {
    let animation_frame = (now_secs() % 3) as usize;
    let banner = Paragraph::new(BANNER_FRAMES[animation_frame])
        .style(Style::default().fg(highlight_color))
        .alignment(Alignment::Center);
    f.render_widget(banner, area);
}

/// Scatter celebratory glyphs over the whole frame. Placement is a
/// deterministic function of time so no state is carried between frames.
pub fn render_confetti(f: &mut Frame, time_millis: u64) {
    let width = f.size().width as u64;
    let height = f.size().height as u64;
    if width < 6 || height < 6 {
        return;
    }

    let phase = time_millis / 120;
    for i in 0..CONFETTI_PIECES {
        let seed = phase.wrapping_add(i.wrapping_mul(7919));
        let x = (seed.wrapping_mul(31).wrapping_add(i * 13) % (width - 4)) + 2;
        let y = (seed.wrapping_mul(17).wrapping_add(i * 5) % (height - 4)) + 2;

        let glyph = CONFETTI_GLYPHS[(seed % CONFETTI_GLYPHS.len() as u64) as usize];
        let color = CONFETTI_COLORS[((seed + i) % CONFETTI_COLORS.len() as u64) as usize];

        let piece = Paragraph::new(glyph).style(Style::default().fg(color));
        f.render_widget(piece, Rect::new(x as u16, y as u16, 1, 1));
    }
}

/// Ambient noise flicker in the frame corners, same trick as the confetti
/// but dimmed.
pub fn render_ambient_noise(f: &mut Frame, time: u64, dim_color: Color) {
    let width = f.size().width as u64;
    let height = f.size().height as u64;
    if width < 6 || height < 6 {
        return;
    }

    for i in 0..10u64 {
        let noise_char = match (time + i) % 3 {
            0 => "▓",
            1 => "▒",
            _ => "░",
        };

        let x = (time.wrapping_mul(7).wrapping_add(i * 11) % (width - 4)) + 2;
        let y = (time.wrapping_mul(13).wrapping_add(i * 5) % (height - 4)) + 2;

        let noise = Paragraph::new(noise_char).style(Style::default().fg(dim_color));
        f.render_widget(noise, Rect::new(x as u16, y as u16, 1, 1));
    }
}
