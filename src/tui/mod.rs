mod export;
mod help;

use crate::cli::Cli;
use crate::form::{FieldSet, NewApplicantForm, StagePatchForm};
use crate::model::{AppEvent, ApplicantRecord, SOURCES, STAGES, UiCommand};
use crate::orchestrator;
use crate::render;
use crate::view::{Dashboard, SortField};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap},
    Terminal,
};
use std::{io, time::Duration, time::Instant};
use tokio::sync::mpsc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

const TAB_DASHBOARD: usize = 0;
const TAB_NEW: usize = 1;
const TAB_DETAIL: usize = 2;
const TAB_HELP: usize = 3;
const TAB_COUNT: usize = 4;

struct UiState {
    tab: usize,
    dashboard: Dashboard,
    loading: bool,
    submitting: bool,
    banner: Option<String>,
    info: String,
    search_editing: bool,
    selected_row: usize,
    new_form: NewApplicantForm,
    detail: Option<ApplicantRecord>,
    detail_form: Option<StagePatchForm>,
    detail_loading: bool,
    base_url: String,
}

impl UiState {
    fn new(base_url: String, dashboard: Dashboard) -> Self {
        Self {
            tab: TAB_DASHBOARD,
            dashboard,
            loading: false,
            submitting: false,
            banner: None,
            info: String::new(),
            search_editing: false,
            selected_row: 0,
            new_form: NewApplicantForm::new(),
            detail: None,
            detail_form: None,
            detail_loading: false,
            base_url,
        }
    }

    fn visible_len(&self) -> usize {
        self.dashboard.visible_page().len()
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= len {
            self.selected_row = len - 1;
        }
    }
}

pub async fn run(args: Cli) -> Result<()> {
    // Unbounded channels avoid backpressure between the UI thread and the
    // controller task.
    let (event_tx, event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<UiCommand>();

    // Resolve the initial view state before touching the terminal so flag
    // errors print normally.
    let view = crate::cli::initial_view_state(&args)?;

    // The TUI runs in a dedicated thread to keep all blocking I/O out of
    // the Tokio runtime.
    let ui_args = args.clone();
    let ui_handle = std::thread::spawn(move || run_threaded(ui_args, view, event_rx, cmd_tx));

    let res = orchestrator::run_controller(&args, event_tx, cmd_rx).await;

    let join_res = tokio::task::spawn_blocking(move || ui_handle.join()).await;
    if let Ok(joined) = join_res {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(e),
            Err(_) => return Err(anyhow::anyhow!("TUI thread panicked")),
        }
    }

    res
}

/// Run the TUI loop on a dedicated thread.
fn run_threaded(
    args: Cli,
    view: crate::view::ViewState,
    mut event_rx: UnboundedReceiver<AppEvent>,
    cmd_tx: UnboundedSender<UiCommand>,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    // UiState is owned by the UI thread only; no cross-thread mutation.
    let mut state = UiState::new(args.base_url.clone(), Dashboard::new(view));
    state.loading = true;

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    let res = loop {
        // Drain events without blocking to keep the UI responsive.
        while let Ok(ev) = event_rx.try_recv() {
            apply_event(&mut state, ev, &cmd_tx);
        }

        if last_tick.elapsed() >= tick_rate {
            terminal.draw(|f| draw(f.area(), f, &state)).ok();
            last_tick = Instant::now();
        }

        // Poll input with a short timeout to avoid blocking the render loop.
        if event::poll(Duration::from_millis(10)).unwrap_or(false) {
            if let Ok(Event::Key(k)) = event::read() {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                if k.modifiers == KeyModifiers::CONTROL && k.code == KeyCode::Char('c') {
                    let _ = cmd_tx.send(UiCommand::Quit);
                    break Ok(());
                }
                if handle_key(&mut state, k, &cmd_tx) {
                    break Ok(());
                }
            }
        }
    };

    disable_raw_mode().ok();
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen).ok();
    res
}

fn apply_event(state: &mut UiState, ev: AppEvent, cmd_tx: &UnboundedSender<UiCommand>) {
    match ev {
        AppEvent::LoadStarted => state.loading = true,
        AppEvent::Loaded { records } => {
            state.loading = false;
            let count = records.len();
            state.dashboard.replace_records(records);
            state.selected_row = 0;
            state.info = format!("Loaded {count} applicant(s)");
        }
        AppEvent::LoadFailed { message } => {
            state.loading = false;
            state.banner = Some(message);
        }
        AppEvent::DetailLoaded { record } => {
            state.detail_loading = false;
            state.detail_form = Some(StagePatchForm::from_record(&record));
            state.detail = Some(*record);
        }
        AppEvent::DetailFailed { message } => {
            state.detail_loading = false;
            state.banner = Some(message);
        }
        AppEvent::Created { record } => {
            state.submitting = false;
            state.info = format!("Applicant created successfully! Opening #{}…", record.ident());
            state.new_form.reset();
        }
        AppEvent::Updated { record } => {
            state.submitting = false;
            state.info = "Applicant updated successfully!".into();
            state.detail_form = Some(StagePatchForm::from_record(&record));
            state.detail = Some(*record);
        }
        AppEvent::SubmitFailed { message } => {
            state.submitting = false;
            state.banner = Some(message);
        }
        AppEvent::OpenDetail { id } => {
            state.tab = TAB_DETAIL;
            state.detail = None;
            state.detail_form = None;
            state.detail_loading = true;
            let _ = cmd_tx.send(UiCommand::LoadDetail { id });
        }
        AppEvent::Info(msg) => state.info = msg,
    }
}

/// Route a key press by tab. Returns true when the app should quit.
fn handle_key(state: &mut UiState, k: KeyEvent, cmd_tx: &UnboundedSender<UiCommand>) -> bool {
    match state.tab {
        TAB_DASHBOARD if state.search_editing => {
            handle_search_key(state, k);
            false
        }
        TAB_DASHBOARD => handle_dashboard_key(state, k, cmd_tx),
        TAB_NEW => {
            handle_new_form_key(state, k, cmd_tx);
            false
        }
        TAB_DETAIL => {
            handle_detail_key(state, k, cmd_tx);
            false
        }
        _ => handle_help_key(state, k, cmd_tx),
    }
}

fn handle_search_key(state: &mut UiState, k: KeyEvent) {
    match k.code {
        KeyCode::Enter | KeyCode::Esc => state.search_editing = false,
        KeyCode::Backspace => {
            let mut term = state.dashboard.view.search.clone();
            term.pop();
            state.dashboard.set_search(term);
            state.selected_row = 0;
        }
        KeyCode::Char(c) => {
            let mut term = state.dashboard.view.search.clone();
            term.push(c);
            state.dashboard.set_search(term);
            state.selected_row = 0;
        }
        _ => {}
    }
}

/// Step a filter value through "" (all) and the given options.
fn cycle_filter(current: &str, options: &[&str]) -> String {
    match options.iter().position(|o| *o == current) {
        None => options.first().map(|o| o.to_string()).unwrap_or_default(),
        Some(i) if i + 1 < options.len() => options[i + 1].to_string(),
        Some(_) => String::new(),
    }
}

fn sort_field_for_digit(c: char) -> Option<SortField> {
    match c {
        '1' => Some(SortField::Id),
        '2' => Some(SortField::Name),
        '3' => Some(SortField::Email),
        '4' => Some(SortField::Stage),
        '5' => Some(SortField::Source),
        '6' => Some(SortField::LastUpdate),
        _ => None,
    }
}

fn handle_dashboard_key(
    state: &mut UiState,
    k: KeyEvent,
    cmd_tx: &UnboundedSender<UiCommand>,
) -> bool {
    match k.code {
        KeyCode::Char('q') => {
            let _ = cmd_tx.send(UiCommand::Quit);
            return true;
        }
        KeyCode::Char('/') => state.search_editing = true,
        KeyCode::Char('s') => {
            let next = cycle_filter(&state.dashboard.view.stage, &STAGES);
            state.dashboard.set_stage(next);
            state.selected_row = 0;
        }
        KeyCode::Char('o') => {
            let next = cycle_filter(&state.dashboard.view.source, &SOURCES);
            state.dashboard.set_source(next);
            state.selected_row = 0;
        }
        KeyCode::Char('c') => {
            state.dashboard.clear_filters();
            state.selected_row = 0;
            state.info = "Filters cleared".into();
        }
        KeyCode::Char(c @ '1'..='6') => {
            if let Some(field) = sort_field_for_digit(c) {
                state.dashboard.toggle_sort(field);
                state.selected_row = 0;
            }
        }
        KeyCode::Left | KeyCode::Char('h') => {
            let page = state.dashboard.view.page;
            if state.dashboard.change_page(page.saturating_sub(1)) {
                state.selected_row = 0;
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let page = state.dashboard.view.page;
            if state.dashboard.change_page(page + 1) {
                state.selected_row = 0;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected_row = state.selected_row.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected_row += 1;
            state.clamp_selection();
        }
        KeyCode::Enter => {
            let page = state.dashboard.visible_page();
            if let Some(record) = page.get(state.selected_row) {
                let id = record.ident();
                state.tab = TAB_DETAIL;
                state.detail = None;
                state.detail_form = None;
                state.detail_loading = true;
                let _ = cmd_tx.send(UiCommand::LoadDetail { id });
            }
        }
        KeyCode::Char('r') => {
            state.info = "Refreshing…".into();
            let _ = cmd_tx.send(UiCommand::Refresh);
        }
        KeyCode::Char('n') => state.tab = TAB_NEW,
        KeyCode::Char('e') => {
            match export::export_page_html(&state.dashboard, &state.base_url) {
                Ok(p) => state.info = format!("Exported HTML: {}", p.display()),
                Err(e) => state.info = format!("HTML export failed: {e:#}"),
            }
        }
        KeyCode::Char('y') => {
            let page = state.dashboard.visible_page();
            if let Some(record) = page.get(state.selected_row) {
                let url = render::detail_url(&state.base_url, record.ident());
                match export::copy_to_clipboard(&url) {
                    Ok(()) => state.info = format!("Copied detail URL: {url}"),
                    Err(e) => state.info = format!("Clipboard copy failed: {e:#}"),
                }
            }
        }
        KeyCode::Char('x') | KeyCode::Esc => state.banner = None,
        KeyCode::Tab => state.tab = (state.tab + 1) % TAB_COUNT,
        KeyCode::Char('?') => state.tab = TAB_HELP,
        _ => {}
    }
    false
}

enum FormAction {
    Edited,
    Submit,
    Back,
}

fn handle_form_key(set: &mut FieldSet, k: KeyEvent) -> FormAction {
    if k.modifiers == KeyModifiers::CONTROL && k.code == KeyCode::Char('s') {
        return FormAction::Submit;
    }
    match k.code {
        KeyCode::Esc => return FormAction::Back,
        KeyCode::Up => set.focus_prev(),
        KeyCode::Down | KeyCode::Tab | KeyCode::Enter => set.focus_next(),
        KeyCode::Left => set.focused_mut().cycle(-1),
        KeyCode::Right => set.focused_mut().cycle(1),
        KeyCode::Backspace => set.focused_mut().backspace(),
        KeyCode::Char(c) => set.focused_mut().push_char(c),
        _ => {}
    }
    FormAction::Edited
}

fn handle_new_form_key(state: &mut UiState, k: KeyEvent, cmd_tx: &UnboundedSender<UiCommand>) {
    match handle_form_key(&mut state.new_form.set, k) {
        FormAction::Back => state.tab = TAB_DASHBOARD,
        FormAction::Submit => {
            if state.submitting {
                return;
            }
            if state.new_form.set.validate_all() {
                state.submitting = true;
                state.info = "Submitting applicant…".into();
                let _ = cmd_tx.send(UiCommand::Create {
                    payload: state.new_form.payload(),
                    resume: state.new_form.resume_path(),
                });
            } else {
                state.info = "Please fix the highlighted fields".into();
            }
        }
        FormAction::Edited => {}
    }
}

fn handle_detail_key(state: &mut UiState, k: KeyEvent, cmd_tx: &UnboundedSender<UiCommand>) {
    let Some(form) = state.detail_form.as_mut() else {
        if k.code == KeyCode::Esc {
            state.tab = TAB_DASHBOARD;
        }
        return;
    };
    match handle_form_key(&mut form.set, k) {
        FormAction::Back => state.tab = TAB_DASHBOARD,
        FormAction::Submit => {
            let Some(record) = state.detail.as_ref() else {
                return;
            };
            if state.submitting {
                return;
            }
            state.submitting = true;
            state.info = "Saving changes…".into();
            let _ = cmd_tx.send(UiCommand::Update {
                id: record.ident(),
                patch: form.patch(),
            });
        }
        FormAction::Edited => {}
    }
}

fn handle_help_key(state: &mut UiState, k: KeyEvent, cmd_tx: &UnboundedSender<UiCommand>) -> bool {
    match k.code {
        KeyCode::Char('q') => {
            let _ = cmd_tx.send(UiCommand::Quit);
            return true;
        }
        KeyCode::Esc => state.tab = TAB_DASHBOARD,
        KeyCode::Tab => state.tab = (state.tab + 1) % TAB_COUNT,
        _ => {}
    }
    false
}

fn draw(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let banner_height = if state.banner.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Length(banner_height),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(area);

    let tabs = Tabs::new(vec![
        Line::from("Dashboard"),
        Line::from("New Applicant"),
        Line::from("Detail"),
        Line::from("Help"),
    ])
    .select(state.tab)
    .block(Block::default().borders(Borders::ALL).title("hirehub-cli"))
    .highlight_style(Style::default().fg(Color::Yellow));
    f.render_widget(tabs, chunks[0]);

    if let Some(message) = &state.banner {
        let banner = Paragraph::new(Line::from(vec![
            Span::styled(message.clone(), Style::default().fg(Color::Red)),
            Span::styled("  (x to dismiss)", Style::default().fg(Color::Gray)),
        ]))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Red)));
        f.render_widget(banner, chunks[1]);
    }

    match state.tab {
        TAB_DASHBOARD => draw_dashboard(chunks[2], f, state),
        TAB_NEW => draw_new_form(chunks[2], f, state),
        TAB_DETAIL => draw_detail(chunks[2], f, state),
        _ => help::draw_help(chunks[2], f),
    }

    draw_status(chunks[3], f, state);
}

fn draw_status(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let mut spans = Vec::new();
    if state.loading {
        spans.push(Span::styled("Loading… ", Style::default().fg(Color::Yellow)));
    }
    if state.submitting {
        spans.push(Span::styled("Submitting… ", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::raw(state.info.clone()));
    let status = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status (? for help)"));
    f.render_widget(status, area);
}

fn draw_dashboard(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(area);

    draw_filter_bar(chunks[0], f, state);

    let page = state.dashboard.visible_page();
    let rows = render::project_rows(&page, &state.base_url);
    let total = state.dashboard.total();

    if rows.is_empty() {
        let empty = Paragraph::new("No applicants found")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL).title("Applicants (0)"));
        f.render_widget(empty, chunks[1]);
    } else {
        let header = Row::new(
            [
                SortField::Id,
                SortField::Name,
                SortField::Email,
                SortField::Stage,
                SortField::Source,
                SortField::LastUpdate,
            ]
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let arrow = match state.dashboard.view.sort {
                    Some((active, direction)) if active == *field => direction.arrow(),
                    _ => "↕",
                };
                Cell::from(format!("[{}] {} {}", i + 1, field.label(), arrow))
            })
            .collect::<Vec<_>>(),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let table_rows = rows.iter().enumerate().map(|(i, r)| {
            let row = Row::new(vec![
                Cell::from(r.id.to_string()),
                Cell::from(r.name.clone()),
                Cell::from(r.email.clone()),
                Cell::from(r.stage.clone()),
                Cell::from(r.source.clone()),
                Cell::from(r.last_update.clone()),
            ]);
            if i == state.selected_row {
                row.style(Style::default().bg(Color::DarkGray).fg(Color::White))
            } else {
                row
            }
        });

        let table = Table::new(
            table_rows,
            [
                Constraint::Length(8),
                Constraint::Percentage(22),
                Constraint::Percentage(26),
                Constraint::Length(21),
                Constraint::Length(16),
                Constraint::Length(17),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Applicants ({total})")),
        );
        f.render_widget(table, chunks[1]);
    }

    draw_pagination(chunks[2], f, state);
}

fn draw_filter_bar(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let view = &state.dashboard.view;
    let mut spans = vec![Span::styled("Search: ", Style::default().fg(Color::Gray))];
    if state.search_editing {
        spans.push(Span::styled(
            format!("{}█", view.search),
            Style::default().fg(Color::Yellow),
        ));
    } else if view.search.is_empty() {
        spans.push(Span::styled("(/)", Style::default().fg(Color::DarkGray)));
    } else {
        spans.push(Span::raw(view.search.clone()));
    }
    spans.push(Span::styled("   Stage: ", Style::default().fg(Color::Gray)));
    spans.push(Span::raw(if view.stage.is_empty() {
        "All".to_string()
    } else {
        view.stage.clone()
    }));
    spans.push(Span::styled("   Source: ", Style::default().fg(Color::Gray)));
    spans.push(Span::raw(if view.source.is_empty() {
        "All".to_string()
    } else {
        view.source.clone()
    }));
    spans.push(Span::styled("   Sort: ", Style::default().fg(Color::Gray)));
    spans.push(Span::raw(match view.sort {
        Some((field, direction)) => format!("{} {}", field.label(), direction.arrow()),
        None => "None".to_string(),
    }));

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Filters"));
    f.render_widget(bar, area);
}

fn draw_pagination(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let meta = render::PageMeta {
        page: state.dashboard.view.page,
        total_pages: state.dashboard.total_pages(),
        total: state.dashboard.total(),
    };
    let controls = render::pagination_controls(meta.page, meta.total_pages);

    let mut spans: Vec<Span> = Vec::new();
    for control in &controls {
        match control {
            render::PageControl::Previous { enabled } => {
                let style = if *enabled {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled("[← Prev] ", style));
            }
            render::PageControl::Next { enabled } => {
                let style = if *enabled {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                spans.push(Span::styled("[Next →]", style));
            }
            render::PageControl::Page { number, active } => {
                let style = if *active {
                    Style::default().fg(Color::Black).bg(Color::Yellow)
                } else {
                    Style::default().fg(Color::White)
                };
                spans.push(Span::styled(format!(" {number} "), style));
            }
            render::PageControl::Ellipsis => {
                spans.push(Span::styled(" … ", Style::default().fg(Color::Gray)));
            }
        }
    }
    let (start, end) = meta.shown_range();
    spans.push(Span::styled(
        format!("   Showing {start}-{end} of {}", meta.total),
        Style::default().fg(Color::Gray),
    ));

    let strip = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Page {} of {}",
            meta.page, meta.total_pages
        )));
    f.render_widget(strip, area);
}

/// Render a field set as label/value lines with inline errors under the
/// offending field.
fn form_lines(set: &FieldSet) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, field) in set.fields.iter().enumerate() {
        let focused = i == set.focus;
        let marker = if focused { "› " } else { "  " };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(Color::Yellow)),
            Span::styled(format!("{}: ", field.label), Style::default().fg(Color::Gray)),
        ];
        let value_style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default()
        };
        if field.options.is_some() {
            let shown = if field.value.is_empty() {
                "(←/→ to choose)".to_string()
            } else {
                format!("‹ {} ›", field.value)
            };
            spans.push(Span::styled(shown, value_style));
        } else if focused {
            spans.push(Span::styled(format!("{}█", field.value), value_style));
        } else {
            spans.push(Span::styled(field.value.clone(), value_style));
        }
        if field.required {
            spans.push(Span::styled(" *", Style::default().fg(Color::Red)));
        }
        lines.push(Line::from(spans));
        if let Some(error) = field.error() {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(error.to_string(), Style::default().fg(Color::Red)),
            ]));
        }
    }
    lines
}

fn draw_new_form(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let mut lines = form_lines(&state.new_form.set);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ move · ←/→ choose · Ctrl-S submit · Esc back",
        Style::default().fg(Color::Gray),
    )));
    let form = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("New Applicant"));
    f.render_widget(form, area);
}

fn detail_value(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}

fn draw_detail(area: Rect, f: &mut ratatui::Frame, state: &UiState) {
    let Some(record) = state.detail.as_ref() else {
        let text = if state.detail_loading {
            "Loading applicant…"
        } else {
            "No applicant loaded. Select a row on the Dashboard and press Enter."
        };
        let placeholder = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL).title("Applicant Detail"));
        f.render_widget(placeholder, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    let label = |text: &str| Span::styled(format!("{text}: "), Style::default().fg(Color::Gray));
    let tags = if record.tags.is_empty() {
        "No tags".to_string()
    } else {
        record.tags.join(", ")
    };
    let dates = if record.interview_dates.is_empty() {
        "N/A".to_string()
    } else {
        record.interview_dates.join(", ")
    };
    let info_lines = vec![
        Line::from(vec![label("ID"), Span::raw(record.ident().to_string())]),
        Line::from(vec![label("Name"), Span::raw(record.name.clone())]),
        Line::from(vec![label("Email"), Span::raw(record.email.clone())]),
        Line::from(vec![label("Phone"), Span::raw(detail_value(record.phone.as_deref()))]),
        Line::from(vec![label("Source"), Span::raw(detail_value(record.source.as_deref()))]),
        Line::from(vec![label("Tags"), Span::raw(tags)]),
        Line::from(vec![
            label("Resume file"),
            Span::raw(detail_value(record.resume_file.as_deref())),
        ]),
        Line::from(vec![
            label("Interviewers"),
            Span::raw(detail_value(record.interviewers.as_deref())),
        ]),
        Line::from(vec![label("Interview dates"), Span::raw(dates)]),
        Line::from(vec![
            label("Overall feedback"),
            Span::raw(detail_value(record.overall_feedback.as_deref())),
        ]),
        Line::from(vec![
            label("Final decision"),
            Span::raw(detail_value(record.final_decision.as_deref())),
        ]),
        Line::from(vec![
            label("Created"),
            Span::raw(render::format_timestamp(record.created_at.as_deref())),
        ]),
        Line::from(vec![
            label("Detail URL"),
            Span::styled(
                render::detail_url(&state.base_url, record.ident()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];
    let info = Paragraph::new(info_lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Applicant #{}",
            record.ident()
        )));
    f.render_widget(info, columns[0]);

    if let Some(form) = state.detail_form.as_ref() {
        let mut lines = form_lines(&form.set);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "↑/↓ move · ←/→ change stage · Ctrl-S save · Esc back",
            Style::default().fg(Color::Gray),
        )));
        let form_widget = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Update"));
        f.render_widget(form_widget, columns[1]);
    }
}
