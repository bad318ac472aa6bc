//! UI rendering for the TUI.
//!
//! Everything here is a pure function of [`App`] state.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::features::focus::{render_progress_bar, Mode};
use crate::features::stats::render_session_dots;
use crate::records::{habits_met, Priority};
use crate::tui::app::App;

/// Most session dots shown under the timer.
const MAX_SESSION_DOTS: u32 = 8;

/// Render the application UI.
#[allow(clippy::cast_possible_truncation)]
pub fn render(frame: &mut Frame<'_>, app: &App<'_>) {
    // Header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.habits.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(columns[1]);

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, left[0]);
    render_week(frame, app, left[1]);
    render_habits(frame, app, right[0]);
    render_tasks(frame, app, right[1]);
    render_status_bar(frame, app, chunks[2]);
}

fn mode_color(mode: Mode) -> Color {
    match mode {
        Mode::Focus => Color::Green,
        Mode::Break => Color::Magenta,
    }
}

/// Render the header with the stat cards.
fn render_header(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let stats = app.stats();
    let line = Line::from(vec![
        Span::styled(
            " Study ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}d streak", stats.streak_days),
            Style::default().fg(Color::LightRed),
        ),
        Span::styled(
            format!("  {} sessions", stats.sessions_completed),
            Style::default().fg(Color::Green),
        ),
        Span::styled(
            format!("  {}/{} tasks", stats.tasks_completed, stats.tasks_total),
            Style::default().fg(Color::Blue),
        ),
        Span::styled(
            format!("  {:.1}h/day", stats.average_daily_hours),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

/// Render the timer card.
fn render_timer(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let snap = app.timer.snapshot();
    let color = mode_color(snap.mode);

    let block = Block::default()
        .title(" Timer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // mode pills
            Constraint::Length(1),
            Constraint::Length(1), // countdown
            Constraint::Length(1), // gauge
            Constraint::Length(1), // state
            Constraint::Length(1), // sessions
        ])
        .split(inner);

    let pill = |mode: Mode| {
        let style = if snap.mode == mode {
            Style::default()
                .fg(Color::Black)
                .bg(mode_color(mode))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" {mode} "), style)
    };
    let pills = Paragraph::new(Line::from(vec![pill(Mode::Focus), Span::raw("  "), pill(Mode::Break)]))
        .alignment(Alignment::Center);
    frame.render_widget(pills, rows[0]);

    let countdown = Paragraph::new(app.timer.session().format_remaining())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(countdown, rows[2]);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(snap.progress)
        .label(format!("{:.0}%", snap.progress * 100.0));
    frame.render_widget(gauge, rows[3]);

    let state = if snap.is_running {
        Span::styled("running", Style::default().fg(Color::Green))
    } else if snap.remaining_seconds == 0 {
        Span::styled("done - press r", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("paused", Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(Paragraph::new(state).alignment(Alignment::Center), rows[4]);

    let dots = Paragraph::new(render_session_dots(snap.sessions_completed, MAX_SESSION_DOTS))
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center);
    frame.render_widget(dots, rows[5]);
}

/// Render the weekly study chart.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn render_week(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let bars: Vec<Bar<'_>> = app
        .week
        .days
        .iter()
        .map(|day| {
            let style = if day.day == app.today {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Blue)
            };
            Bar::default()
                .value((day.hours * 10.0).round() as u64)
                .text_value(format!("{:.1}", day.hours))
                .label(Line::from(day.day.to_string()))
                .style(style)
        })
        .collect();

    let title = format!(
        " This Week  {:.1}h total, {}h/day ",
        app.week.total_hours,
        app.week.format_average()
    );
    let chart = BarChart::default()
        .block(Block::default().title(title).borders(Borders::ALL))
        .bar_width(5)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Render the habits list.
fn render_habits(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .habits
        .iter()
        .map(|habit| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<14} ", habit.name)),
                Span::styled(
                    render_progress_bar(habit.progress(), 10),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!(" {}d", habit.streak),
                    Style::default().fg(Color::Yellow),
                ),
            ]))
        })
        .collect();

    let title = format!(
        " Habits  {}/{} complete ",
        habits_met(&app.habits),
        app.habits.len()
    );
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(list, area);
}

/// Render the task list.
fn render_tasks(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let items: Vec<ListItem<'_>> = app
        .tasks
        .ordered()
        .into_iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = i == app.selected;

            let (icon, icon_color) = if task.completed {
                ("[x]", Color::Green)
            } else {
                ("[ ]", Color::White)
            };

            let priority_color = match task.priority {
                Priority::High => Color::Red,
                Priority::Medium => Color::Yellow,
                Priority::Low => Color::Blue,
            };

            let mut title_style = Style::default();
            if task.completed {
                title_style = title_style
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT);
            }
            if is_selected {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }

            let mut spans = vec![
                Span::styled(format!("{icon} "), Style::default().fg(icon_color)),
                Span::styled("● ", Style::default().fg(priority_color)),
                Span::styled(task.title.clone(), title_style),
                Span::styled(
                    format!("  {}", task.subject),
                    Style::default().fg(Color::DarkGray),
                ),
            ];

            if let Some(due) = task.due.as_ref().filter(|_| !task.completed) {
                spans.push(Span::styled(
                    format!("  {due}"),
                    Style::default().fg(Color::Yellow),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!(
        " Tasks ({}/{}) ",
        app.tasks.completed_count(),
        app.tasks.len()
    );
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App<'_>, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("space:start/pause | r:reset | m:switch | enter:toggle task | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
