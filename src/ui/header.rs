use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

use crate::ui::screens::Screen;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

/// Screen tabs across the top of the frame.
pub struct Header {
    active: Screen,
}

impl Header {
    pub fn new(active: Screen) -> Self {
        Self { active }
    }

    pub fn widget(&self) -> Tabs<'static> {
        let titles: Vec<Line> = Screen::ALL
            .iter()
            .map(|s| Line::from(s.title()))
            .collect();
        Tabs::new(titles)
            .select(self.active.index())
            .style(Style::default().fg(MUTED_TEXT))
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .divider(ratatui::text::Span::styled("│", Style::default().fg(HEADER_TEXT)))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
