use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Split the frame into header, body and footer.
///
/// The header is kept first when the terminal is too short for all three.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height - header_height);
    let body_height = area.height - header_height - footer_height;

    let header = Rect {
        height: header_height,
        ..area
    };
    let body = Rect {
        y: area.y + header_height,
        height: body_height,
        ..area
    };
    let footer = Rect {
        y: body.bottom(),
        height: footer_height,
        ..area
    };
    (header, body, footer)
}

/// A `width` x `height` box centered in `area`, shrunk to fit.
pub fn popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// Input row on top, the rest below. Used by the search screens.
pub fn search_regions(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}
