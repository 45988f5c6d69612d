use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::{Status, StatusKind};
use crate::ui::screens::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the active screen, or the latest status message.
pub struct Footer<'a> {
    screen: Screen,
    status: Option<&'a Status>,
}

impl<'a> Footer<'a> {
    pub fn new(screen: Screen, status: Option<&'a Status>) -> Self {
        Self { screen, status }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let (text, style) = match self.status {
            Some(status) => {
                let color = match status.kind {
                    StatusKind::Info => STATUS_OK,
                    StatusKind::Error => STATUS_ERROR,
                };
                (format!(" {}", status.text), Style::default().fg(color))
            }
            None => (
                format!(" {} │ Tab: Next screen │ Ctrl+Q: Quit", hints(self.screen)),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
            ),
        };
        let version = format!("v{} ", VERSION);

        // Pad by char count, not bytes.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(text.chars().count())
            .saturating_sub(version.chars().count());

        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(text, style),
            Span::styled(" ".repeat(padding), dim),
            Span::styled(version, dim),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Counter => "+/-: Count │ r: Reset",
        Screen::Color => "↑/↓: Channel │ ←/→: ±1 │ PgUp/PgDn: ±16",
        Screen::Temperature => "Type °C",
        Screen::Tip => "Type bill │ ←/→: Tip %",
        Screen::Tasks => "←/→: Pane │ Space: Done │ a: Add │ d: Delete",
        Screen::Weather => "Type city │ Enter: Search │ Esc: Clear",
        Screen::GitHub => "Type user │ Enter: Search │ ↑/↓: Select │ Ctrl+F: Favorite",
        Screen::Expenses => "a: Add │ d: Delete │ s: Sort",
    }
}
