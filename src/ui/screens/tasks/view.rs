use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::services::{OrphanPolicy, TaskBoard};
use crate::ui::layout::popup_rect;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_OK,
};

use super::state::{Pane, TaskScreenState};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &TaskScreenState, board: &TaskBoard) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let categories: Vec<ListItem> = board
        .categories()
        .iter()
        .map(|c| {
            let count = board.tasks_for(c.id).len();
            ListItem::new(Line::from(vec![
                Span::raw(format!("{} ", c.icon)),
                Span::styled(c.name.clone(), Style::default().fg(HEADER_TEXT)),
                Span::styled(format!("  {count}"), Style::default().fg(MUTED_TEXT)),
            ]))
        })
        .collect();
    let title = format!(" Categories · {} ", policy_label(board));
    let mut category_state = ListState::default().with_selected(Some(state.category));
    frame.render_stateful_widget(
        List::new(categories)
            .block(pane_block(title, state.pane == Pane::Categories))
            .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT)),
        columns[0],
        &mut category_state,
    );

    let selected = board.categories().get(state.category);
    let tasks: Vec<ListItem> = selected
        .map(|c| board.tasks_for(c.id))
        .unwrap_or_default()
        .into_iter()
        .map(|t| {
            let (mark, style) = if t.is_completed {
                (
                    Span::styled("✔ ", Style::default().fg(STATUS_OK)),
                    Style::default()
                        .fg(MUTED_TEXT)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                (
                    Span::styled("○ ", Style::default().fg(MUTED_TEXT)),
                    Style::default().fg(HEADER_TEXT),
                )
            };
            ListItem::new(Line::from(vec![mark, Span::styled(t.title.clone(), style)]))
        })
        .collect();
    let title = selected
        .map(|c| format!(" {} ", c.name))
        .unwrap_or_else(|| " Tasks ".to_string());
    let mut task_state = ListState::default().with_selected(Some(state.task));
    frame.render_stateful_widget(
        List::new(tasks)
            .block(pane_block(title, state.pane == Pane::Tasks))
            .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT)),
        columns[1],
        &mut task_state,
    );

    if let Some(draft) = &state.draft {
        let popup = popup_rect(50, 5, area);
        frame.render_widget(Clear, popup);
        let lines = vec![
            Line::styled(format!("{draft}▏"), Style::default().fg(HEADER_TEXT)),
            Line::from(""),
            Line::styled("Enter: Save │ Esc: Cancel", Style::default().fg(MUTED_TEXT)),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .title(" Add New Task ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
            popup,
        );
    }
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

fn policy_label(board: &TaskBoard) -> String {
    match board.policy() {
        OrphanPolicy::Block => "delete: block".to_string(),
        OrphanPolicy::Cascade => "delete: cascade".to_string(),
        OrphanPolicy::Reassign { to } => {
            let name = board.category(to).map(|c| c.name.as_str()).unwrap_or("?");
            format!("delete: move to {name}")
        }
    }
}
