// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Interactive shell for the policy page (ratatui + crossterm). Wide terminals get three columns
//! (menu, content, reform summary); narrow ones get content, breadcrumbs and a bottom menu.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::{info, warn};

use crate::model::TreeNode;
use crate::nav::{
    bottom_menu_buttons, find_in_tree, parameter_search_options, policy_output_children,
    policy_output_roots, policy_route, rank_search_options, stacked_menu_rows, Breadcrumb,
    MenuRow, NavButton, NavState, Panel, SearchOption, FOCUS_KEY, REFORM_KEY,
};
use crate::page::{PageError, PolicyPage};

const FOCUS_COLOR: Color = Color::LightGreen;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const OVERRIDE_COLOR: Color = Color::Yellow;
const FOOTER_BRAND: &str = "policyscope";
const BREADCRUMB_SEPARATOR: &str = " > ";
const SEARCH_RESULT_LIMIT: usize = 12;
const TOAST_TTL: Duration = Duration::from_secs(3);

/// Runs the interactive terminal UI until the user quits.
pub fn run(page: PolicyPage, narrow_width: u16) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(page, narrow_width);

    while !app.should_quit {
        app.tick();
        terminal.draw(|frame| draw(frame, &mut app))?;

        // Loading is drawn for one frame before the reform arrives.
        if app.load_pending_reform() {
            continue;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    app.set_narrow(uses_narrow_layout(area.width, app.narrow_width));

    if !app.page.is_on_policy_route() {
        render_away(frame, app, main_area);
    } else if app.narrow {
        draw_narrow(frame, app, main_area);
    } else {
        draw_wide(frame, app, main_area);
    }

    let toast = app.live_toast().map(str::to_owned);
    let footer = match &app.search {
        Some(search) => search_footer_line(search, app.search_results().len(), toast.as_deref()),
        None => footer_help_line(app, toast.as_deref()),
    };
    let brand_width = FOOTER_BRAND.chars().count() as u16;
    let status = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(brand_width)])
        .split(status_area);
    frame.render_widget(Paragraph::new(footer), status[0]);
    frame.render_widget(Paragraph::new(footer_brand_line()), status[1]);

    if app.search.is_some() {
        render_search(frame, app, main_area);
    }
    if app.show_help {
        render_help(frame, main_area);
    }
}

fn draw_wide(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(area);
    render_menu(frame, app, columns[0]);

    let center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(columns[1]);
    render_breadcrumbs(frame, app, center[0]);
    render_content(frame, app, center[1]);

    render_summary(frame, app, columns[2]);
}

fn draw_narrow(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);
    render_content(frame, app, rows[0]);
    render_breadcrumbs(frame, app, rows[1]);
    render_buttons(frame, app, rows[2]);
}

fn list_highlight_style(active: bool) -> Style {
    if active {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::UNDERLINED)
    }
}

fn render_menu(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let active = app.region == Region::Menu;
    let items = menu_rows(&app.page)
        .iter()
        .map(menu_item)
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(region_block(Region::Menu.label(), None, active))
        .highlight_style(list_highlight_style(active));
    frame.render_stateful_widget(list, area, &mut app.menu_state);
}

fn menu_item(row: &MenuRow<'_>) -> ListItem<'static> {
    let indent = "  ".repeat(row.depth);
    let marker = match (row.node.is_leaf(), row.expanded) {
        (true, _) => "  ",
        (false, true) => "▾ ",
        (false, false) => "▸ ",
    };
    let style = if row.selected {
        Style::default()
            .fg(FOCUS_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    ListItem::new(Line::from(vec![
        Span::raw(format!("{indent}{marker}")),
        Span::styled(row.node.label().to_owned(), style),
    ]))
}

fn render_breadcrumbs(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let crumbs = app.page.breadcrumbs();
    let paragraph =
        Paragraph::new(breadcrumb_line(&crumbs)).block(region_block("Path", None, false));
    frame.render_widget(paragraph, area);
}

fn render_content(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let active = app.region == Region::Content;
    match app.page.panel() {
        Some(Panel::FolderListing { label, children })
        | Some(Panel::OutputFolderListing { label, children }) => {
            let items = children
                .iter()
                .map(|child| {
                    let marker = if child.is_leaf() { "  " } else { "▸ " };
                    ListItem::new(format!("{marker}{}", child.label()))
                })
                .collect::<Vec<_>>();
            let list = List::new(items)
                .block(region_block(label, None, active))
                .highlight_style(list_highlight_style(active));
            frame.render_stateful_widget(list, area, &mut app.content_state);
        }
        panel => {
            let (title, lines) = panel_text(app, panel);
            let paragraph = Paragraph::new(lines)
                .block(region_block(&title, None, active))
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
        }
    }
}

fn panel_text(app: &App, panel: Option<Panel<'_>>) -> (String, Vec<Line<'static>>) {
    let dim = Style::default().fg(Color::DarkGray);
    match panel {
        None => (
            "Nothing here".to_owned(),
            vec![Line::from(Span::styled(
                format!("No view for {:?}.", app.page.focus()),
                dim,
            ))],
        ),
        Some(Panel::Loading) => (
            "Loading".to_owned(),
            vec![Line::from(Span::styled("Loading reform…", dim))],
        ),
        Some(Panel::ParameterEditor { parameter }) => parameter_editor_text(app, parameter),
        Some(Panel::OutputDetail { output }) => output_detail_text(app, output),
        Some(Panel::FolderListing { label, children })
        | Some(Panel::OutputFolderListing { label, children }) => (
            label.to_owned(),
            children
                .iter()
                .map(|child| Line::from(child.label().to_owned()))
                .collect(),
        ),
    }
}

fn parameter_editor_text(app: &App, parameter: &str) -> (String, Vec<Line<'static>>) {
    let dim = Style::default().fg(Color::DarkGray);
    let label_style = Style::default().fg(FOOTER_LABEL_COLOR);
    let Some(entry) = app.page.metadata().parameter(parameter) else {
        return (parameter.to_owned(), Vec::new());
    };

    let mut lines = Vec::<Line<'static>>::new();
    if let Some(description) = &entry.description {
        lines.push(Line::from(description.clone()));
        lines.push(Line::from(""));
    }
    if let Some(unit) = &entry.unit {
        lines.push(Line::from(vec![
            Span::styled("Unit: ", label_style),
            Span::raw(unit.clone()),
        ]));
    }
    for (date, value) in &entry.values {
        lines.push(Line::from(vec![
            Span::styled(format!("Current law from {date}: "), label_style),
            Span::raw(format_value(value)),
        ]));
    }

    let reform_value = match app.page.policy().parameter_value(parameter) {
        Some(value) => Span::styled(
            format_value(value),
            Style::default()
                .fg(OVERRIDE_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("unchanged", dim),
    };
    lines.push(Line::from(vec![Span::styled("Reform: ", label_style), reform_value]));
    lines.push(Line::from(""));

    match app.edit.as_ref().filter(|edit| edit.parameter == parameter) {
        Some(edit) => lines.push(Line::from(vec![
            Span::styled("New value: ", Style::default().fg(FOOTER_KEY_COLOR)),
            Span::raw(format!("{}▏", edit.buffer)),
        ])),
        None => lines.push(Line::from(Span::styled(
            "e edit value, x reset to current law",
            dim,
        ))),
    }

    (entry.label.clone(), lines)
}

fn output_detail_text(app: &App, output: &str) -> (String, Vec<Line<'static>>) {
    let label = find_in_tree(policy_output_roots(), output)
        .map(TreeNode::label)
        .unwrap_or(output);
    let reform = app.page.nav().reform().unwrap_or("—");
    let changes = reform_overrides(&app.page).len();
    let lines = vec![
        Line::from(vec![
            Span::styled("Output: ", Style::default().fg(FOOTER_LABEL_COLOR)),
            Span::raw(output.to_owned()),
        ]),
        Line::from(format!(
            "Reform {reform} with {changes} parameter change(s), compared with current law."
        )),
    ];
    (label.to_owned(), lines)
}

fn render_summary(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let active = app.region == Region::Summary;
    let reform = app.page.nav().reform().map(|id| format!("#{id}"));
    let block = region_block(Region::Summary.label(), reform.as_deref(), active);

    if !app.page.policy().is_loaded() {
        let loading = Span::styled("Loading…", Style::default().fg(Color::DarkGray));
        let paragraph = Paragraph::new(loading).block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let overrides = reform_overrides(&app.page);
    if overrides.is_empty() {
        let paragraph = Paragraph::new(Span::styled(
            "No changes from current law.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block)
        .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
        return;
    }

    let items = overrides
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(item.label.to_owned()),
                Line::from(Span::styled(
                    format!("  {}", format_value(item.value)),
                    Style::default().fg(OVERRIDE_COLOR),
                )),
            ])
        })
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(block)
        .highlight_style(list_highlight_style(active));
    frame.render_stateful_widget(list, area, &mut app.summary_state);
}

fn render_buttons(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let active = app.region == Region::Buttons;
    let items = app
        .buttons()
        .iter()
        .map(|button| ListItem::new(format!("[ {} ]", button.text)))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(region_block(Region::Buttons.label(), None, active))
        .highlight_style(list_highlight_style(active));
    frame.render_stateful_widget(list, area, &mut app.buttons_state);
}

fn render_search(frame: &mut Frame<'_>, app: &App, main_area: Rect) {
    let Some(search) = &app.search else {
        return;
    };
    let area = centered_rect(60, 60, main_area);
    frame.render_widget(Clear, area);

    let results = app.search_results();
    let items = results
        .iter()
        .map(|option| {
            ListItem::new(Line::from(vec![
                Span::raw(option.label.to_owned()),
                Span::styled(
                    format!("  {}", option.value),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect::<Vec<_>>();
    let mut state = ListState::default();
    if !results.is_empty() {
        state.select(Some(search.selected.min(results.len() - 1)));
    }
    let list = List::new(items)
        .block(region_block("Search", Some(&search.query), true))
        .highlight_style(list_highlight_style(true));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_away(frame: &mut Frame<'_>, app: &App, main_area: Rect) {
    let area = centered_rect(60, 40, main_area);
    let lines = vec![
        Line::from(vec![
            Span::styled("Location: ", Style::default().fg(FOOTER_LABEL_COLOR)),
            Span::raw(app.page.nav().to_string()),
        ]),
        Line::from(""),
        Line::from("The household editor is not part of this view."),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("b", help_key_style()),
            Span::raw(" to return to your policy."),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .block(region_block("Household", None, true))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

include!("chrome.rs");

fn menu_rows(page: &PolicyPage) -> Vec<MenuRow<'_>> {
    stacked_menu_rows(
        page.metadata().parameter_tree.children(),
        policy_output_children(),
        page.focus(),
    )
}

#[derive(Debug, Clone, Copy)]
struct ReformOverride<'a> {
    parameter: &'a str,
    label: &'a str,
    value: &'a serde_json::Value,
}

fn reform_overrides(page: &PolicyPage) -> Vec<ReformOverride<'_>> {
    let Some(data) = page.policy().reform.data() else {
        return Vec::new();
    };
    data.iter()
        .map(|(parameter, value)| ReformOverride {
            parameter,
            label: page
                .metadata()
                .parameter(parameter)
                .map(|entry| entry.label.as_str())
                .filter(|label| !label.is_empty())
                .unwrap_or(parameter),
            value,
        })
        .collect()
}

fn step_index(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let max = (len - 1) as isize;
    (current as isize + delta).clamp(0, max) as usize
}

fn move_list(state: &mut ListState, len: usize, delta: isize) {
    if len == 0 {
        state.select(None);
        return;
    }
    let current = state.selected().unwrap_or(0);
    state.select(Some(step_index(current, len, delta)));
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SearchState {
    query: String,
    selected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct EditState {
    parameter: String,
    buffer: String,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    page: PolicyPage,
    narrow_width: u16,
    narrow: bool,
    region: Region,
    menu_state: ListState,
    content_state: ListState,
    summary_state: ListState,
    buttons_state: ListState,
    search: Option<SearchState>,
    edit: Option<EditState>,
    show_help: bool,
    toast: Option<Toast>,
    return_to: Option<NavState>,
    failed_reform: Option<String>,
    seen_rev: Option<u64>,
    should_quit: bool,
}

impl App {
    fn new(page: PolicyPage, narrow_width: u16) -> Self {
        Self {
            page,
            narrow_width,
            narrow: false,
            region: Region::Content,
            menu_state: ListState::default(),
            content_state: ListState::default(),
            summary_state: ListState::default(),
            buttons_state: ListState::default(),
            search: None,
            edit: None,
            show_help: false,
            toast: None,
            return_to: None,
            failed_reform: None,
            seen_rev: None,
            should_quit: false,
        }
    }

    /// Applies navigation corrections and resyncs cursors after navigation.
    fn tick(&mut self) {
        if self.page.is_on_policy_route() {
            self.page.settle();
        }
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= Instant::now())
        {
            self.toast = None;
        }
        if self.seen_rev != Some(self.page.rev()) {
            self.seen_rev = Some(self.page.rev());
            self.sync_selection();
        }
    }

    fn sync_selection(&mut self) {
        let rows = menu_rows(&self.page);
        let selected = rows
            .iter()
            .position(|row| row.selected)
            .or((!rows.is_empty()).then_some(0));
        self.menu_state.select(selected);

        let content_len = self.content_len();
        self.content_state.select((content_len > 0).then_some(0));

        let summary_len = self.summary_len();
        let summary = self.summary_state.selected().unwrap_or(0);
        self.summary_state
            .select((summary_len > 0).then(|| summary.min(summary_len - 1)));

        self.buttons_state.select(Some(0));
    }

    fn set_narrow(&mut self, narrow: bool) {
        self.narrow = narrow;
        if !Region::cycle(narrow).contains(&self.region) {
            self.region = Region::Content;
        }
    }

    /// Loads the requested reform. Returns whether the page changed.
    fn load_pending_reform(&mut self) -> bool {
        if !self.page.is_on_policy_route() {
            return false;
        }
        let requested = self.page.nav().reform().map(str::to_owned);
        if requested.is_some() && requested == self.failed_reform {
            return false;
        }

        match self.page.load_pending_reform() {
            Ok(loaded) => {
                if loaded {
                    self.failed_reform = None;
                    self.sync_selection();
                }
                loaded
            }
            Err(PageError::InvalidReformId { raw, source }) => {
                warn!(reform = %raw, error = %source, "dropping invalid reform id");
                self.set_toast(format!("Invalid reform id {raw:?}"));
                let next = self.page.nav().without(REFORM_KEY);
                self.page.navigate(next)
            }
            Err(err) => {
                warn!(error = %err, "reform load failed");
                self.set_toast(format!("Reform load failed: {err}"));
                self.failed_reform = requested;
                false
            }
        }
    }

    fn content_len(&self) -> usize {
        match self.page.panel() {
            Some(Panel::FolderListing { children, .. })
            | Some(Panel::OutputFolderListing { children, .. }) => children.len(),
            _ => 0,
        }
    }

    fn summary_len(&self) -> usize {
        reform_overrides(&self.page).len()
    }

    fn buttons(&self) -> Vec<NavButton> {
        bottom_menu_buttons(self.page.nav(), self.page.metadata())
    }

    fn search_results(&self) -> Vec<SearchOption<'_>> {
        let Some(search) = &self.search else {
            return Vec::new();
        };
        let options = parameter_search_options(self.page.metadata());
        let mut ranked = rank_search_options(&options, &search.query);
        ranked.truncate(SEARCH_RESULT_LIMIT);
        ranked
    }

    fn editable_parameter(&self) -> Option<String> {
        match self.page.panel() {
            Some(Panel::ParameterEditor { parameter }) => Some(parameter.to_owned()),
            _ => None,
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn live_toast(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|toast| toast.expires_at > Instant::now())
            .map(|toast| toast.message.as_str())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the app should quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                _ => {}
            }
            return false;
        }
        if self.search.is_some() {
            self.handle_search_key(code);
            return false;
        }
        if self.edit.is_some() {
            self.handle_edit_key(code);
            return false;
        }

        if !self.page.is_on_policy_route() {
            match code {
                KeyCode::Char('q') => return true,
                KeyCode::Char('?') => self.show_help = true,
                KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Esc => self.return_to_policy(),
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.cycle_region(1),
            KeyCode::BackTab => self.cycle_region(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Enter => self.activate(),
            KeyCode::Backspace | KeyCode::Char('u') => self.focus_parent(),
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                self.jump_to_breadcrumb(index);
            }
            KeyCode::Char('/') => self.search = Some(SearchState::default()),
            KeyCode::Char('e') => self.start_edit(),
            KeyCode::Char('x') => self.clear_override(),
            KeyCode::Char('c') => self.press_button_where(|button| button.route.is_none()),
            KeyCode::Char('h') => self.press_button_where(|button| button.route.is_some()),
            _ => {}
        }
        false
    }

    fn cycle_region(&mut self, delta: isize) {
        let regions = Region::cycle(self.narrow);
        let current = regions
            .iter()
            .position(|region| *region == self.region)
            .unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(regions.len() as isize) as usize;
        self.region = regions[next];
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.region {
            Region::Menu => {
                let len = menu_rows(&self.page).len();
                move_list(&mut self.menu_state, len, delta);
            }
            Region::Content => {
                let len = self.content_len();
                move_list(&mut self.content_state, len, delta);
            }
            Region::Summary => {
                let len = self.summary_len();
                move_list(&mut self.summary_state, len, delta);
            }
            Region::Buttons => {
                let len = self.buttons().len();
                move_list(&mut self.buttons_state, len, delta);
            }
        }
    }

    fn activate(&mut self) {
        match self.region {
            Region::Menu => {
                let index = self.menu_state.selected().unwrap_or(0);
                let target = menu_rows(&self.page)
                    .get(index)
                    .map(|row| row.node.name().to_owned());
                if let Some(target) = target {
                    self.page.set_focus(&target);
                }
            }
            Region::Content => {
                if self.editable_parameter().is_some() {
                    self.start_edit();
                    return;
                }
                let index = self.content_state.selected().unwrap_or(0);
                let target = match self.page.panel() {
                    Some(Panel::FolderListing { children, .. })
                    | Some(Panel::OutputFolderListing { children, .. }) => {
                        children.get(index).map(|child| child.name().to_owned())
                    }
                    _ => None,
                };
                if let Some(target) = target {
                    self.page.set_focus(&target);
                }
            }
            Region::Summary => {
                let index = self.summary_state.selected().unwrap_or(0);
                let target = reform_overrides(&self.page)
                    .get(index)
                    .map(|item| item.parameter.to_owned());
                if let Some(target) = target {
                    self.page.set_focus(&target);
                    self.region = Region::Content;
                }
            }
            Region::Buttons => {
                let index = self.buttons_state.selected().unwrap_or(0);
                if let Some(button) = self.buttons().get(index).cloned() {
                    self.press_button(button);
                }
            }
        }
    }

    fn focus_parent(&mut self) {
        let crumbs = self.page.breadcrumbs();
        match crumbs.len() {
            0 | 1 => self.set_toast("Already at the top"),
            n => {
                let parent = crumbs[n - 2].name.clone();
                self.page.set_focus(&parent);
            }
        }
    }

    fn jump_to_breadcrumb(&mut self, index: usize) {
        let crumbs = self.page.breadcrumbs();
        match crumbs.get(index) {
            Some(crumb) => {
                let target = crumb.name.clone();
                self.page.set_focus(&target);
            }
            None => self.set_toast(format!("No breadcrumb {}", index + 1)),
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.search = None,
            KeyCode::Enter => self.accept_search(),
            KeyCode::Down => self.move_search(1),
            KeyCode::Up => self.move_search(-1),
            KeyCode::Backspace => {
                if let Some(search) = self.search.as_mut() {
                    search.query.pop();
                    search.selected = 0;
                }
            }
            KeyCode::Char(ch) => {
                if let Some(search) = self.search.as_mut() {
                    search.query.push(ch);
                    search.selected = 0;
                }
            }
            _ => {}
        }
    }

    fn move_search(&mut self, delta: isize) {
        let count = self.search_results().len();
        if let Some(search) = self.search.as_mut() {
            search.selected = step_index(search.selected, count, delta);
        }
    }

    fn accept_search(&mut self) {
        let selected = self.search.as_ref().map_or(0, |search| search.selected);
        let choice = self
            .search_results()
            .get(selected)
            .map(|option| option.value.to_owned());
        self.search = None;
        match choice {
            Some(target) => {
                self.page.set_focus(&target);
                self.region = Region::Content;
            }
            None => self.set_toast("No matching parameter"),
        }
    }

    fn start_edit(&mut self) {
        let Some(parameter) = self.editable_parameter() else {
            self.set_toast("Select a parameter to edit");
            return;
        };
        let buffer = self
            .page
            .policy()
            .parameter_value(&parameter)
            .map(format_value)
            .unwrap_or_default();
        self.edit = Some(EditState { parameter, buffer });
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.edit = None,
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Backspace => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.buffer.pop();
                }
            }
            KeyCode::Char(ch) => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.buffer.push(ch);
                }
            }
            _ => {}
        }
    }

    fn commit_edit(&mut self) {
        let Some(edit) = self.edit.take() else {
            return;
        };
        if edit.buffer.trim().is_empty() {
            self.set_toast("Empty value, nothing saved");
            return;
        }
        match self.page.set_parameter(&edit.parameter, &edit.buffer) {
            Ok(()) => {
                info!(parameter = %edit.parameter, "parameter updated");
                self.set_toast(format!("Saved {}", edit.parameter));
            }
            Err(err) => self.set_toast(format!("Could not save: {err}")),
        }
        self.sync_selection();
    }

    fn clear_override(&mut self) {
        let Some(parameter) = self.editable_parameter() else {
            self.set_toast("Select a parameter to reset");
            return;
        };
        match self.page.clear_parameter(&parameter) {
            Ok(true) => self.set_toast(format!("Reset {parameter}")),
            Ok(false) => self.set_toast("Nothing to reset"),
            Err(err) => self.set_toast(format!("Could not save: {err}")),
        }
        self.sync_selection();
    }

    fn press_button_where(&mut self, predicate: impl Fn(&NavButton) -> bool) {
        match self.buttons().into_iter().find(|button| predicate(button)) {
            Some(button) => self.press_button(button),
            None => self.set_toast("Nothing to switch to"),
        }
    }

    fn press_button(&mut self, button: NavButton) {
        let current = self.page.nav().clone();
        let next = button.apply(&current);
        if button.route.is_some() {
            self.return_to = Some(current);
        }
        info!(button = button.text, "menu button");
        self.page.navigate(next);
    }

    fn return_to_policy(&mut self) {
        let target = match self.return_to.take() {
            Some(nav) => nav,
            None => self
                .page
                .nav()
                .with_path(policy_route(self.page.metadata()))
                .without(FOCUS_KEY),
        };
        self.page.navigate(target);
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
