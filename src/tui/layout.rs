//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};

use super::runtime::{App, EditTarget, Mode};
use super::style;
use crate::format::{SummaryLines, device_line};

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // devices + summary
            Constraint::Length(3), // parameters / input line
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_header(frame, app, chunks[0]);
    render_devices(frame, app, body[0]);
    render_summary(frame, app, body[1]);
    render_parameters(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);
}

/// Header bar: enabled count and calculation state.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.session.snapshot();
    let enabled = snapshot.iter().filter(|r| r.enabled).count();
    let state = if app.session.last_result().is_some() {
        "calculated"
    } else {
        "not calculated"
    };

    let header = Line::from(vec![
        Span::styled(
            " ENERGY-CALC ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {enabled}/{} devices enabled │ {state} ",
            snapshot.len()
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Device table: checkbox, name, watts, hours per day.
fn render_devices(frame: &mut Frame, app: &App, area: Rect) {
    let rows = app.session.snapshot().iter().map(|r| {
        let mark = if r.enabled { "[x]" } else { "[ ]" };
        Row::new(vec![
            Cell::from(mark),
            Cell::from(r.name.as_str()),
            Cell::from(format!("{}", r.watts)),
            Cell::from(format!("{}", r.hours_per_day)),
        ])
        .style(Style::default().fg(style::device_color(r.enabled)))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(16),
            Constraint::Length(8),
            Constraint::Length(7),
        ],
    )
    .header(
        Row::new(vec!["", "Device", "W", "h/day"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().title(" Devices ").borders(Borders::ALL))
    .row_highlight_style(Style::default().bg(style::SELECTED_BG));

    let mut state = TableState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Totals and per-device breakdown of the last calculation.
fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let result = app.session.last_result();
    let totals = SummaryLines::from_result(result, &app.currency);

    let mut lines: Vec<Line> = totals
        .as_array()
        .iter()
        .map(|l| {
            Line::from(Span::styled(
                format!("  {l}"),
                Style::default().fg(style::TOTALS_FG),
            ))
        })
        .collect();

    if let Some(result) = result {
        lines.push(Line::from(""));
        lines.extend(
            result
                .per_device
                .iter()
                .map(|d| Line::from(format!("  {}", device_line(d, &app.currency)))),
        );
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title(" Summary ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Parameter inputs, or the input line while editing.
fn render_parameters(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.mode {
        Mode::Editing { target, buffer } => {
            let subject = match target {
                EditTarget::Watts(i) | EditTarget::Hours(i) => app
                    .session
                    .registry()
                    .get(*i)
                    .map_or_else(String::new, |r| format!("{} ", r.name)),
                EditTarget::UnitCost | EditTarget::BillingDays => String::new(),
            };
            Line::from(Span::styled(
                format!("  {subject}{}: {buffer}_", target.label()),
                Style::default().fg(style::EDIT_FG),
            ))
        }
        Mode::Browse => Line::from(format!(
            "  Cost per Wh: {}  │  Days per month: {}  │  Currency: {}",
            display_input(&app.unit_cost_input),
            display_input(&app.days_input),
            app.currency,
        )),
    };

    let block = Block::default().title(" Parameters ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Footer with keybinding hints for the current mode.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.mode {
        Mode::Editing { .. } => " Enter:Apply  Esc:Cancel  Backspace:Delete",
        Mode::Browse => {
            " q:Quit  ↑/↓:Select  Space:Toggle  w/h:Edit W/hours  u/d:Edit cost/days  c:Calculate  r:Reset"
        }
    };
    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}

fn display_input(raw: &str) -> &str {
    if raw.is_empty() { "(empty)" } else { raw }
}
