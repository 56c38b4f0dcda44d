use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::form::FormModel;
use crate::store::FormStore;

use super::fields::render_fields;

pub struct UiContext<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub model: &'a FormModel,
    pub store: &'a FormStore,
    pub status_message: &'a str,
    pub dirty: bool,
    pub pending: usize,
    pub help: Option<&'a str>,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let header_constraint = if ctx.description.is_some() {
        Constraint::Length(4)
    } else {
        Constraint::Length(3)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([header_constraint, Constraint::Min(5), Constraint::Length(3)])
        .split(frame.area());

    render_header(frame, chunks[0], ctx.title, ctx.description);
    render_fields(frame, chunks[1], ctx.model, ctx.store);
    render_footer(frame, chunks[2], &ctx);
}

fn render_header(
    frame: &mut Frame<'_>,
    area: Rect,
    title: Option<&str>,
    description: Option<&str>,
) {
    let mut lines = Vec::new();
    if let Some(text) = title {
        lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(text) = description {
        lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Gray),
        )));
    }
    let header = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let mut spans = vec![Span::raw(ctx.status_message.to_string())];
    if ctx.pending > 0 {
        spans.push(Span::styled(
            format!("  • {} pending", ctx.pending),
            Style::default().fg(Color::Yellow),
        ));
    } else if ctx.dirty {
        spans.push(Span::styled(
            "  • unsaved edits",
            Style::default().fg(Color::Yellow),
        ));
    }
    let errors = ctx.store.error_count();
    if errors > 0 {
        spans.push(Span::styled(
            format!("  • {errors} issue(s)"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(help) = ctx.help {
        lines.push(Line::from(Span::styled(
            help.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let footer = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
