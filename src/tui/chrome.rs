// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, footer, help, and style helpers used by TUI rendering.

fn uses_narrow_layout(width: u16, narrow_width: u16) -> bool {
    width < narrow_width
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Menu,
    Content,
    Summary,
    Buttons,
}

impl Region {
    fn cycle(narrow: bool) -> &'static [Region] {
        if narrow {
            &[Region::Content, Region::Buttons]
        } else {
            &[Region::Menu, Region::Content, Region::Summary]
        }
    }

    fn label(self) -> &'static str {
        match self {
            Region::Menu => "Menu",
            Region::Content => "Content",
            Region::Summary => "Reform",
            Region::Buttons => "Buttons",
        }
    }
}

fn panel_border_style(active: bool) -> Style {
    if active {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    }
}

fn view_title(label: &str, tail: Option<&str>) -> String {
    let mut title = format!("─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

fn region_block(label: &str, tail: Option<&str>, active: bool) -> Block<'static> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(view_title(label, tail))
        .border_style(panel_border_style(active));
    if active {
        block = block.title_style(
            Style::default()
                .fg(FOCUS_COLOR)
                .add_modifier(Modifier::BOLD),
        );
    }
    block
}

/// Numbered crumbs joined by `" > "`; digits jump to the crumb.
fn breadcrumb_line(crumbs: &[Breadcrumb]) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    let last = crumbs.len().saturating_sub(1);
    for (idx, crumb) in crumbs.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(
                BREADCRUMB_SEPARATOR,
                Style::default().fg(FOOTER_LABEL_COLOR),
            ));
        }
        if idx < 9 {
            spans.push(Span::styled(
                format!("{} ", idx + 1),
                Style::default().fg(FOOTER_KEY_COLOR),
            ));
        }
        let style = if idx == last {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(crumb.label.clone(), style));
    }
    if spans.is_empty() {
        spans.push(Span::styled("—", Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Null => "—".to_owned(),
        other => other.to_string(),
    }
}

fn footer_help_line(app: &App, toast_message: Option<&str>) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();

    if app.edit.is_some() {
        push_footer_entry(&mut spans, "SAVE", "Enter");
        push_footer_entry(&mut spans, "CANCEL", "Esc");
    } else if !app.page.is_on_policy_route() {
        push_footer_entry(&mut spans, "BACK", "b");
        push_footer_entry(&mut spans, "QUIT", "q");
    } else {
        push_footer_entry(&mut spans, "PANE", "Tab");
        push_footer_entry(&mut spans, "MOVE", "j/k");
        push_footer_entry(&mut spans, "OPEN", "Enter");
        push_footer_entry(&mut spans, "UP", "⌫");
        push_footer_entry(&mut spans, "CRUMB", "1-9");
        push_footer_entry(&mut spans, "SEARCH", "/");
        let editable = matches!(app.page.panel(), Some(Panel::ParameterEditor { .. }));
        push_footer_entry_maybe_disabled(&mut spans, "EDIT", "e/x", !editable);
        push_footer_entry(&mut spans, "HELP", "?");
        push_footer_entry(&mut spans, "QUIT", "q");
    }

    push_toast(&mut spans, toast_message);
    Line::from(spans)
}

fn search_footer_line(
    search: &SearchState,
    result_count: usize,
    toast_message: Option<&str>,
) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            "/".to_owned(),
            Style::default()
                .fg(FOOTER_KEY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(search.query.clone()),
        Span::raw("   "),
    ];
    if !search.query.trim().is_empty() {
        let count = match result_count {
            0 => "0".to_owned(),
            n => format!("{}/{n}", search.selected.min(n - 1) + 1),
        };
        spans.push(Span::styled(count, Style::default().fg(Color::LightGreen)));
    }
    push_footer_entry(&mut spans, "Accept", "Enter");
    push_footer_entry(&mut spans, "Close", "Esc");
    push_toast(&mut spans, toast_message);
    Line::from(spans)
}

fn push_toast(spans: &mut Vec<Span<'static>>, toast_message: Option<&str>) {
    let Some(message) = toast_message.map(str::trim).filter(|message| !message.is_empty()) else {
        return;
    };
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    spans.push(Span::styled(
        "Toast:".to_owned(),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::raw(message.to_owned()));
}

fn footer_brand_line() -> Line<'static> {
    Line::from(vec![Span::styled(
        FOOTER_BRAND.to_owned(),
        Style::default().fg(FOOTER_BRAND_COLOR),
    )])
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    push_footer_entry_maybe_disabled(spans, label, value, false);
}

fn push_footer_entry_maybe_disabled(
    spans: &mut Vec<Span<'static>>,
    label: &str,
    value: &str,
    disabled: bool,
) {
    if !spans.is_empty() {
        spans.push(Span::styled(
            " | ".to_owned(),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    let color = if disabled {
        Color::DarkGray
    } else {
        FOOTER_KEY_COLOR
    };
    spans.push(Span::styled(
        value.to_owned(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}

fn help_key_style() -> Style {
    Style::default()
        .fg(FOOTER_KEY_COLOR)
        .add_modifier(Modifier::BOLD)
}

fn help_header_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
    let vertical_margin = (100u16.saturating_sub(height_percent)) / 2;
    let horizontal_margin = (100u16.saturating_sub(width_percent)) / 2;

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(vertical_margin),
            Constraint::Percentage(height_percent),
            Constraint::Percentage(vertical_margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(horizontal_margin),
            Constraint::Percentage(width_percent),
            Constraint::Percentage(horizontal_margin),
        ])
        .split(vertical[1])[1]
}

fn help_kv(key: &str, desc: &str, key_width: usize, key_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:>width$}", width = key_width), key_style),
        Span::raw("  "),
        Span::raw(desc.to_owned()),
    ])
}

fn render_help(frame: &mut Frame<'_>, main_area: Rect) {
    let area = centered_rect(70, 80, main_area);
    frame.render_widget(Clear, area);

    let key_style = help_key_style();
    let header_style = help_header_style();
    let key_col_width = ["Tab/Shift-Tab", "j/k or ↑/↓", "Backspace/u"]
        .iter()
        .map(|key| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::<Line<'static>>::new();
    lines.push(Line::from(Span::styled("--- Navigation ---", header_style)));
    lines.push(help_kv("Tab/Shift-Tab", "Cycle panes", key_col_width, key_style));
    lines.push(help_kv("j/k or ↑/↓", "Move cursor", key_col_width, key_style));
    lines.push(help_kv("Enter", "Open selected entry", key_col_width, key_style));
    lines.push(help_kv("Backspace/u", "Go to parent folder", key_col_width, key_style));
    lines.push(help_kv("1-9", "Jump to breadcrumb", key_col_width, key_style));
    lines.push(help_kv("/", "Search parameters", key_col_width, key_style));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("--- Reform ---", header_style)));
    lines.push(help_kv("e", "Edit parameter value", key_col_width, key_style));
    lines.push(help_kv("x", "Reset parameter to current law", key_col_width, key_style));
    lines.push(help_kv("c", "Switch policy / impact", key_col_width, key_style));
    lines.push(help_kv("h", "Open household", key_col_width, key_style));
    lines.push(help_kv("b", "Return from household", key_col_width, key_style));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("--- App ---", header_style)));
    lines.push(help_kv("?", "Toggle help", key_col_width, key_style));
    lines.push(help_kv("q", "Quit", key_col_width, key_style));

    let block = Block::default()
        .borders(Borders::ALL)
        .title("─ Help ─")
        .border_style(Style::default().fg(FOCUS_COLOR))
        .title_style(
            Style::default()
                .fg(FOCUS_COLOR)
                .add_modifier(Modifier::BOLD),
        );
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
