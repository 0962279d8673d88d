use ratatui::layout::Rect;

use crate::ui::selector::SELECTOR_HEIGHT;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the dropdown row and the detail card below it.
pub fn body_regions(body: Rect) -> (Rect, Rect) {
    let selector_height = SELECTOR_HEIGHT.min(body.height);
    let selector = Rect {
        height: selector_height,
        ..body
    };
    let card = Rect {
        y: body.y + selector_height,
        height: body.height.saturating_sub(selector_height),
        ..body
    };
    (selector, card)
}
