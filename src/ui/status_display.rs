use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::image::ResolvedImage;
use crate::utils::{format_sui_balance, shorten_id};

/// Wallet panel: address, SUI balance, connection state.
pub fn render_wallet_panel(f: &mut Frame, app: &App, area: Rect) {
    let base_color = app.theme.base();
    let highlight_color = app.theme.highlight();
    let dim_color = app.theme.dim();

    let wallet_block = Block::default()
        .title(" WALLET ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(base_color));

    let balance_line = if !app.is_connected() {
        Span::styled("--", Style::default().fg(dim_color))
    } else {
        match app.sui_balance {
            Some(balance) => Span::styled(
                format_sui_balance(balance),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("Loading...", Style::default().fg(Color::Yellow)),
        }
    };

    let status = if app.is_connected() {
        Span::styled("● CONNECTED", Style::default().fg(Color::Green))
    } else {
        Span::styled("○ NOT CONNECTED", Style::default().fg(Color::Red))
    };

    let lines = vec![
        Line::from(vec![Span::styled("ADDRESS: ", Style::default().fg(highlight_color)), Span::raw(app.wallet_address.clone())]),
        Line::from(vec![Span::styled("BALANCE: ", Style::default().fg(highlight_color)), balance_line]),
        Line::from(status),
    ];

    let panel = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(wallet_block);
    f.render_widget(panel, area);
}

/// Most recent transactions sent from the connected address.
pub fn render_recent_activity(f: &mut Frame, app: &App, area: Rect) {
    let base_color = app.theme.base();
    let highlight_color = app.theme.highlight();
    let dim_color = app.theme.dim();

    let activity_block = Block::default()
        .title(" RECENT ACTIVITY ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(base_color));

    let mut lines = Vec::new();
    if !app.is_connected() {
        lines.push(Line::from(Span::styled(
            "Connect a wallet to see activity",
            Style::default().fg(dim_color),
        )));
    } else if app.recent_transactions.is_empty() {
        let text = if app.is_refreshing { "Loading..." } else { "no data" };
        lines.push(Line::from(Span::styled(text, Style::default().fg(dim_color))));
    } else {
        for digest in &app.recent_transactions {
            lines.push(Line::from(vec![
                Span::styled("▸ ", Style::default().fg(highlight_color)),
                Span::raw(shorten_id(digest)),
            ]));
        }
    }

    let panel = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(activity_block);
    f.render_widget(panel, area);
}

/// Image preview panel: resolved reference details, or the fallback warning
/// while the reference fails to load.
pub fn render_image_preview(f: &mut Frame, app: &App, area: Rect) {
    let base_color = app.theme.base();
    let highlight_color = app.theme.highlight();
    let dim_color = app.theme.dim();

    let preview_block = Block::default()
        .title(" IMAGE PREVIEW ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(base_color));

    let lines = if app.image.load_failed {
        vec![Line::from(Span::styled(
            "Could not load image. Please check the reference.",
            Style::default().fg(Color::Red),
        ))]
    } else {
        match &app.image.resolved {
            Some(ResolvedImage::Url(url)) => vec![
                Line::from(vec![
                    Span::styled("REMOTE: ", Style::default().fg(highlight_color)),
                    Span::raw(shorten_id(url)),
                ]),
                Line::from(Span::styled(
                    "URL will be passed through unchanged",
                    Style::default().fg(dim_color),
                )),
            ],
            Some(ResolvedImage::File { path, kind, len }) => vec![
                Line::from(vec![
                    Span::styled("FILE: ", Style::default().fg(highlight_color)),
                    Span::raw(shorten_id(&path.display().to_string())),
                ]),
                Line::from(vec![
                    Span::styled("TYPE: ", Style::default().fg(highlight_color)),
                    Span::raw(kind.mime()),
                    Span::raw(format!("  ({:.1} KiB)", *len as f64 / 1024.0)),
                ]),
                Line::from(Span::styled(
                    "Will be embedded as a data URI on mint",
                    Style::default().fg(dim_color),
                )),
            ],
            None => vec![Line::from(Span::styled(
                "Enter an image URL or local file path",
                Style::default().fg(dim_color),
            ))],
        }
    };

    let panel = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .block(preview_block);
    f.render_widget(panel, area);
}
