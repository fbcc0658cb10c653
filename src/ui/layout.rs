use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Header box, body box and a help footer; header and body carry an inner text area.
pub struct ThreeBox {
    pub top: Rect,
    pub middle: Rect,
    pub bottom: Rect,
    pub top_inner: Rect,
    pub middle_inner: Rect,
}

pub struct Margins {
    pub page: u16,         // outer page margin (e.g., 2)
    pub inner_top: u16,    // inner margin for top box (e.g., 3)
    pub inner_middle: u16, // inner margin for middle box (e.g., 3)
}

impl Margins {
    pub const STANDARD: Margins = Margins { page: 2, inner_top: 3, inner_middle: 3 };
}

pub fn three_box_layout(
    size: Rect,
    top_needed: u16,
    middle_needed: u16,
    footer_height: u16,
    margins: Margins,
) -> ThreeBox {
    let available_for_top_and_middle =
        size.height.saturating_sub(2 * margins.page).saturating_sub(footer_height);

    let top_min = 5;
    let top_cap = available_for_top_and_middle.saturating_sub(middle_needed);
    let top_height = top_needed.min(top_cap.max(top_min));
    let middle_height = available_for_top_and_middle.saturating_sub(top_height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(margins.page)
        .constraints([
            Constraint::Length(top_height),
            Constraint::Length(middle_height),
            Constraint::Length(footer_height),
        ])
        .split(size);

    let top_inner = chunks[0].inner(&Margin { horizontal: margins.inner_top, vertical: 1 });
    let middle_inner = chunks[1].inner(&Margin { horizontal: margins.inner_middle, vertical: 1 });

    ThreeBox {
        top: chunks[0],
        middle: chunks[1],
        bottom: chunks[2],
        top_inner,
        middle_inner,
    }
}

/// Fixed-size rect centered in `r`, shrunk to fit.
pub fn centered_rect_abs(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width.saturating_sub(2));
    let h = height.min(r.height.saturating_sub(2));
    let x = r.x + (r.width.saturating_sub(w)) / 2;
    let y = r.y + (r.height.saturating_sub(h)) / 2;
    Rect { x, y, width: w, height: h }
}
