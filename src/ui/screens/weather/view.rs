use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::models::WeatherReport;
use crate::ui::fetch::FetchState;
use crate::ui::layout::search_regions;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

use super::state::WeatherScreenState;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &WeatherScreenState) {
    let (search, content) = search_regions(area);

    let input = if state.city.is_empty() {
        Line::styled("Enter city name", Style::default().fg(MUTED_TEXT))
    } else {
        Line::styled(format!("{}▏", state.city), Style::default().fg(HEADER_TEXT))
    };
    frame.render_widget(
        Paragraph::new(input).block(
            Block::default()
                .title(" Weather App ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        ),
        search,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    match &state.fetch {
        FetchState::Initial => centered_message(frame, content, block, "Search for a City", None),
        FetchState::Loading { .. } => {
            centered_message(frame, content, block, "Loading weather...", None)
        }
        FetchState::Error(message) => {
            centered_message(frame, content, block, "Error", Some(message.as_str()))
        }
        FetchState::Loaded(report) => render_report(frame, content, block, report),
    }
}

fn centered_message(
    frame: &mut Frame<'_>,
    area: Rect,
    block: Block<'_>,
    title: &str,
    detail: Option<&str>,
) {
    let mut lines = vec![
        Line::from(""),
        Line::styled(title.to_string(), Style::default().fg(HEADER_TEXT)),
    ];
    if let Some(detail) = detail {
        lines.push(Line::styled(detail.to_string(), Style::default().fg(STATUS_ERROR)));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

fn render_report(frame: &mut Frame<'_>, area: Rect, block: Block<'_>, report: &WeatherReport) {
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(inner);

    let current = &report.current;
    let lines = vec![
        Line::styled(
            current.city.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("{}°F", current.temperature),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::styled(current.condition.clone(), Style::default().fg(HEADER_TEXT)),
        Line::styled(
            format!("Humidity: {}%", current.humidity),
            Style::default().fg(MUTED_TEXT),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), parts[0]);

    let rows = report.forecast.iter().map(|day| {
        Row::new(vec![
            Cell::from(day.date.format("%a %b %-d").to_string()),
            Cell::from(day.condition.clone()),
            Cell::from(format!("H {}°", day.high)),
            Cell::from(format!("L {}°", day.low)),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(15),
            Constraint::Length(7),
            Constraint::Length(7),
        ],
    )
    .header(Row::new(vec!["Day", "Condition", "High", "Low"]).style(Style::default().fg(MUTED_TEXT)))
    .style(Style::default().fg(HEADER_TEXT))
    .block(Block::default().title(" Forecast ").borders(Borders::TOP));
    frame.render_widget(table, parts[1]);
}
