use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, Feedback, FeedbackKind, FormField};
use crate::ui::animations::{now_millis, now_secs, render_ambient_noise, render_banner, render_confetti};
use crate::ui::status_display::{render_image_preview, render_recent_activity, render_wallet_panel};
use crate::ui::utils::centered_rect;

/// Renders the mint form screen plus overlays.
pub fn draw_main(f: &mut Frame, app: &mut App) {
    let time = now_secs();
    let base_color = app.theme.base();
    let highlight_color = app.theme.highlight();
    let dim_color = app.theme.dim();

    // Full screen frame
    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(base_color));
    f.render_widget(main_block, f.size());

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(5), // Banner
            Constraint::Length(1), // Status indicators
            Constraint::Min(12),   // Form + side panels
            Constraint::Length(3), // Control information
        ])
        .split(f.size());

    render_banner(f, main_layout[0], highlight_color);
    render_status_indicators(f, app, main_layout[1], base_color);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(main_layout[2]);

    render_form(f, app, body[0], time);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Min(4),
        ])
        .split(body[1]);
    render_wallet_panel(f, app, side[0]);
    render_image_preview(f, app, side[1]);
    render_recent_activity(f, app, side[2]);

    render_help(f, app, main_layout[3]);
    render_ambient_noise(f, time, dim_color);

    if app.feedback.is_open() {
        render_feedback_modal(f, app);
    }
    if app.confetti.is_active(std::time::Instant::now()) {
        render_confetti(f, now_millis());
    }
}

fn render_status_indicators(
    f: &mut Frame,
    app: &App,
    area: ratatui::layout::Rect,
    base_color: Color,
) {
    let indicators = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let network_status = format!(
        "[■■■■■□□□□□] NETWORK: {}",
        app.network_state.get_current_network().to_uppercase()
    );
    let network_info = Paragraph::new(network_status)
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(network_info, indicators[0]);

    let build_on_sui = Paragraph::new("╔══════╡ BUILD ON SUI ╞══════╗")
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(build_on_sui, indicators[1]);

    let wallet_status = format!("[■■■■■■■□□□] WALLET: {}", app.wallet_address);
    let wallet_info = Paragraph::new(wallet_status)
        .style(Style::default().fg(base_color))
        .alignment(Alignment::Center);
    f.render_widget(wallet_info, indicators[2]);
}

fn render_form(f: &mut Frame, app: &App, area: ratatui::layout::Rect, time: u64) {
    let base_color = app.theme.base();
    let highlight_color = app.theme.highlight();
    let dim_color = app.theme.dim();

    let form_block = Block::default()
        .title(" << MINT LOYALTY CARD >> ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(base_color));

    let blink_cursor = time % 2 == 0;
    let mut lines = Vec::new();

    for field in FormField::ALL {
        let active = field == app.active_field();
        let marker = if active { ">> " } else { "   " };
        let label_style = if active {
            Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(dim_color)
        };

        let value = app.form.field(field);
        let mut value_text = value.to_string();
        if active && blink_cursor && !app.is_submitting {
            value_text.push('█');
        }

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(highlight_color)),
            Span::styled(format!("{:<18}", field.label()), label_style),
            Span::styled(value_text, Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    let submit_line = if app.is_submitting {
        Line::from(vec![
            Span::styled("⟳ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                "Sending transaction to network...",
                Style::default().fg(Color::Yellow),
            ),
        ])
    } else if !app.is_connected() {
        Line::from(Span::styled(
            "No wallet connected — minting disabled",
            Style::default().fg(Color::Red),
        ))
    } else if app.form.is_submittable() {
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(dim_color)),
            Span::styled("ENTER", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::styled(" to mint your loyalty card", Style::default().fg(dim_color)),
        ])
    } else {
        Line::from(Span::styled(
            "Fill in all required fields to enable minting",
            Style::default().fg(dim_color),
        ))
    };
    lines.push(submit_line);

    let form = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(form_block);
    f.render_widget(form, area);
}

fn render_help(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let highlight_color = app.theme.highlight();
    let dim_color = app.theme.dim();

    let help_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(dim_color));

    let help_text = if app.feedback.is_open() {
        vec![Line::from(vec![
            Span::styled("ESC", Style::default().fg(Color::Yellow)),
            Span::raw(": Dismiss"),
        ])]
    } else if app.is_switching_network {
        vec![Line::from(vec![
            Span::styled("1/2/3", Style::default().fg(Color::Yellow)),
            Span::raw(format!(": {}", app.get_network_options())),
            Span::raw("  |  "),
            Span::styled("ESC", Style::default().fg(Color::Yellow)),
            Span::raw(": Cancel"),
        ])]
    } else {
        vec![Line::from(vec![
            Span::styled("TAB", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
            Span::raw(" FIELD"),
            Span::raw("   "),
            Span::styled("ENTER", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
            Span::raw(" MINT"),
            Span::raw("   "),
            Span::styled("^R", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
            Span::raw(" RESET"),
            Span::raw("   "),
            Span::styled("^N", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
            Span::raw(" NETWORK"),
            Span::raw("   "),
            Span::styled("^T", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
            Span::raw(" THEME"),
            Span::raw("   "),
            Span::styled("ESC", Style::default().fg(highlight_color).add_modifier(Modifier::BOLD)),
            Span::raw(" QUIT"),
        ])]
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(dim_color))
        .alignment(Alignment::Center)
        .block(help_block);
    f.render_widget(help, area);
}

fn render_feedback_modal(f: &mut Frame, app: &App) {
    let Feedback::Open {
        kind,
        message,
        detail_link,
    } = &app.feedback
    else {
        return;
    };

    let (title, accent) = match kind {
        FeedbackKind::Success => (" ✓ SUCCESS ", Color::Green),
        FeedbackKind::Error => (" ✗ ERROR ", Color::Red),
    };

    let area = centered_rect(64, 40, f.size());
    f.render_widget(Clear, area);

    let modal_block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(accent));

    let wrap_width = area.width.saturating_sub(6).max(20) as usize;
    let mut lines = vec![Line::from("")];
    for wrapped in textwrap::wrap(message, wrap_width) {
        lines.push(
            Line::from(Span::styled(
                wrapped.into_owned(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        );
    }

    if let Some(link) = detail_link {
        lines.push(Line::from(""));
        for wrapped in textwrap::wrap(link, wrap_width) {
            lines.push(
                Line::from(Span::styled(
                    wrapped.into_owned(),
                    Style::default().fg(Color::Cyan),
                ))
                .alignment(Alignment::Center),
            );
        }
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "Press ESC to close",
            Style::default().fg(Color::Yellow),
        ))
        .alignment(Alignment::Center),
    );

    let modal = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(modal_block);
    f.render_widget(modal, area);
}
