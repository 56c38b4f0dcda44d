use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::field::{FieldControl, FieldPhase, FormField};
use crate::form::FormModel;
use crate::store::FormStore;

pub(super) fn render_fields(
    frame: &mut Frame<'_>,
    area: Rect,
    model: &FormModel,
    store: &FormStore,
) {
    if model.is_empty() {
        let placeholder = List::new([ListItem::new("This form has no fields")])
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(placeholder, area);
        return;
    }

    let content_width = area.width.saturating_sub(4);
    let focused = model.focus_index();
    let mut items = Vec::with_capacity(model.len());
    let mut cursor_hint: Option<CursorHint> = None;
    let mut line_offset = 0usize;

    for (idx, field) in model.fields().iter().enumerate() {
        let render = build_field_render(field, store, idx == focused, content_width);
        let line_count = render.lines.len();
        if cursor_hint.is_none() {
            if let Some(mut hint) = render.cursor_hint {
                hint.line_offset += line_offset;
                cursor_hint = Some(hint);
            }
        }
        line_offset += line_count;
        items.push(ListItem::new(render.lines));
    }

    let mut list_state = ListState::default();
    list_state.select(Some(focused));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);

    if let Some(cursor) = cursor_hint {
        let inner_y = area.y.saturating_add(1);
        let inner_x = area.x.saturating_add(1);
        let line = cursor
            .line_offset
            .min(area.height.saturating_sub(2) as usize) as u16;
        let cursor_y = inner_y.saturating_add(line);
        let cursor_x = inner_x
            .saturating_add(2)
            .saturating_add(cursor.value_width);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

struct FieldRender {
    lines: Vec<Line<'static>>,
    cursor_hint: Option<CursorHint>,
}

struct CursorHint {
    line_offset: usize,
    value_width: u16,
}

fn build_field_render(
    field: &FormField,
    store: &FormStore,
    is_focused: bool,
    max_width: u16,
) -> FieldRender {
    let mut lines = Vec::new();

    let label_style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(Span::styled(
        field.label().to_string(),
        label_style,
    )));

    let (value_panel, cursor_hint) = value_panel_lines(field, is_focused, max_width);
    lines.extend(value_panel);

    if let Some(options) = option_row(field) {
        lines.push(options);
    }

    lines.push(meta_line(field, store));

    if let Some(error) = error_lines(field, store, max_width) {
        lines.extend(error);
    }

    FieldRender { lines, cursor_hint }
}

fn value_panel_lines(
    field: &FormField,
    is_focused: bool,
    max_width: u16,
) -> (Vec<Line<'static>>, Option<CursorHint>) {
    let clamp_width = max_width.max(4) as usize;
    let mut value_text = field.display_value();
    let mut placeholder = false;
    if value_text.is_empty()
        && let FieldControl::Text(config) = field.control()
        && let Some(hint) = &config.placeholder
    {
        value_text = hint.clone();
        placeholder = true;
    }

    let mut wrapped_value: Vec<String> = wrap(&value_text, clamp_width)
        .into_iter()
        .map(|segment| segment.into_owned())
        .collect();
    if wrapped_value.is_empty() {
        wrapped_value.push(String::new());
    }
    let inner_width = wrapped_value
        .iter()
        .map(|line| UnicodeWidthStr::width(line.as_str()))
        .max()
        .unwrap_or(0);
    let last_line_width = if placeholder {
        0
    } else {
        wrapped_value
            .last()
            .map(|line| UnicodeWidthStr::width(line.as_str()))
            .unwrap_or(0)
    };
    let value_color = if placeholder {
        Color::DarkGray
    } else {
        Color::White
    };
    let mut cursor_hint = None;
    let mut lines = Vec::new();

    if is_focused {
        let border_width = inner_width.saturating_add(2);
        let border_line = "─".repeat(border_width);
        let border_style = Style::default().fg(Color::Yellow);
        let value_style = Style::default()
            .fg(value_color)
            .add_modifier(Modifier::BOLD);

        lines.push(Line::from(Span::styled(
            format!("┌{}┐", border_line),
            border_style,
        )));
        let value_line_index = lines.len();
        for segment in &wrapped_value {
            let mut content = segment.clone();
            let mut width = UnicodeWidthStr::width(content.as_str());
            while width < inner_width {
                content.push(' ');
                width += 1;
            }
            lines.push(Line::from(vec![
                Span::styled("│ ", border_style),
                Span::styled(content, value_style),
                Span::styled(" │", border_style),
            ]));
        }
        lines.push(Line::from(Span::styled(
            format!("└{}┘", border_line),
            border_style,
        )));
        cursor_hint = Some(CursorHint {
            line_offset: value_line_index,
            value_width: last_line_width as u16,
        });
    } else {
        for segment in wrapped_value {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(segment, Style::default().fg(value_color)),
            ]));
        }
    }

    (lines, cursor_hint)
}

fn option_row(field: &FormField) -> Option<Line<'static>> {
    let FieldControl::Select(control) = field.control() else {
        return None;
    };
    let selected = control.selected_index(field.core().local());
    let mut spans = vec![Span::raw("  ")];
    let views = control.visible_options();
    for (idx, option) in views.iter().enumerate() {
        let style = if option.disabled {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC)
        } else if selected == Some(idx) && !control.loading() {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(option.label.clone(), style));
        if idx + 1 != views.len() {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
    }
    Some(Line::from(spans))
}

fn meta_line(field: &FormField, store: &FormStore) -> Line<'static> {
    let mut meta = Vec::new();
    let kind = match field.control() {
        FieldControl::Text(config) => config.kind.hint(),
        FieldControl::Select(_) => "select",
    };
    meta.push(Span::styled(
        format!("  type: {kind}"),
        Style::default().fg(Color::DarkGray),
    ));
    match field.phase() {
        FieldPhase::Loading => {
            meta.push(Span::styled(
                "  • loading",
                Style::default().fg(Color::Blue),
            ));
        }
        FieldPhase::PendingCommit => {
            meta.push(Span::styled(
                "  • pending",
                Style::default().fg(Color::Yellow),
            ));
        }
        FieldPhase::Idle => {
            if store.is_touched(field.name()) {
                meta.push(Span::styled(
                    "  • touched",
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }
    }
    Line::from(meta)
}

fn error_lines(field: &FormField, store: &FormStore, max_width: u16) -> Option<Vec<Line<'static>>> {
    store.error(field.name()).map(|message| {
        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled(
            "  Error:",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        for line in wrap(message, max_width as usize) {
            lines.push(Line::from(Span::styled(
                format!("    {}", line.into_owned()),
                Style::default().fg(Color::Red),
            )));
        }
        lines
    })
}
