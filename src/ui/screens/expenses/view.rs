use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::services::ExpenseService;
use crate::ui::layout::popup_rect;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER,
};

use super::form::{ExpenseForm, FormField};
use super::state::{ExpenseScreenState, ListOrder};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &ExpenseScreenState, service: &ExpenseService) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let breakdown: Vec<Span> = service
        .totals_by_category()
        .into_iter()
        .map(|(category, total)| {
            Span::styled(
                format!("{} {} {:.2}   ", category.icon(), category.name(), total),
                Style::default().fg(MUTED_TEXT),
            )
        })
        .collect();
    let summary = vec![
        Line::from(vec![
            Span::styled("Total Expenses: ", Style::default().fg(HEADER_TEXT)),
            Span::styled(
                format!("{:.2}", service.total_expenses()),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(breakdown),
    ];
    frame.render_widget(
        Paragraph::new(summary).block(
            Block::default()
                .title(" Expense Tracker ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        parts[0],
    );

    let rows = super::displayed(service, state.order).into_iter().map(|e| {
        let mut title = e.title.clone();
        if let Some(notes) = &e.notes {
            title.push_str(&format!(" · {notes}"));
        }
        Row::new(vec![
            Cell::from(e.date.format("%Y-%m-%d").to_string()),
            Cell::from(format!("{} {}", e.category.icon(), e.category.name())),
            Cell::from(title),
            Cell::from(format!("{:>10.2}", e.amount)),
        ])
    });
    let order = match state.order {
        ListOrder::Ledger => "as entered",
        ListOrder::NewestFirst => "newest first",
    };
    let table = Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Length(17),
            Constraint::Min(10),
            Constraint::Length(11),
        ],
    )
    .header(
        Row::new(vec!["Date", "Category", "Title", "Amount"]).style(Style::default().fg(MUTED_TEXT)),
    )
    .style(Style::default().fg(HEADER_TEXT))
    .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
    .block(
        Block::default()
            .title(format!(" Expenses ({order}) "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, parts[1], &mut table_state);

    if let Some(form) = &state.form {
        render_form(frame, area, form);
    }
}

fn render_form(frame: &mut Frame<'_>, area: Rect, form: &ExpenseForm) {
    let popup = popup_rect(66, 8, area);
    frame.render_widget(Clear, popup);

    let field = |label: &str, value: String, which: FormField| {
        let focused = form.field == which;
        let marker = if focused { "▶ " } else { "  " };
        let value_style = if focused {
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        Line::from(vec![
            Span::styled(format!("{marker}{label:<10}"), Style::default().fg(MUTED_TEXT)),
            Span::styled(value, value_style),
        ])
    };
    let category = format!("◀ {} {} ▶", form.category.icon(), form.category.name());
    let lines = vec![
        field("Title", form.title.clone(), FormField::Title),
        field("Amount", form.amount.clone(), FormField::Amount),
        field("Category", category, FormField::Category),
        field("Notes", form.notes.clone(), FormField::Notes),
        Line::from(""),
        Line::styled(
            "Tab: Next field │ ←/→: Category │ Enter: Save │ Esc: Cancel",
            Style::default().fg(MUTED_TEXT),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Add Expense ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        popup,
    );
}
