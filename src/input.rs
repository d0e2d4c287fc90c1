// Pointer and wheel arithmetic shared by the event handlers.
use glam::Vec2;

/// Pointer position relative to an element's top-left corner.
#[inline]
pub fn client_to_local(client: Vec2, rect_origin: Vec2) -> Vec2 {
    client - rect_origin
}

/// Movement since the previous sample; zero on the first one.
#[inline]
pub fn movement_since(prev: Option<Vec2>, now: Vec2) -> Vec2 {
    prev.map(|p| now - p).unwrap_or(Vec2::ZERO)
}

/// Converts a wheel delta to pixels. `mode` is `WheelEvent.deltaMode`:
/// 0 pixels, 1 lines, 2 pages.
pub fn wheel_delta_px(delta: f64, mode: u32, line_px: f64, page_px: f64) -> f64 {
    match mode {
        1 => delta * line_px,
        2 => delta * page_px,
        _ => delta,
    }
}

/// Finger moved from `prev_y` to `y`; positive means scroll down.
#[inline]
pub fn touch_delta(prev_y: f64, y: f64) -> f64 {
    prev_y - y
}

/// Page-scroll delta for a touch sample. `None` on the first sample of a
/// gesture and while the finger is dragging a capsule on the skills board.
pub fn touch_scroll_delta(state: &mut TouchState, y: f64, board_dragging: bool) -> Option<f64> {
    let prev = state.last_y.replace(y)?;
    if board_dragging {
        return None;
    }
    Some(touch_delta(prev, y))
}

/// Document offset that brings an element's top edge to the viewport top.
#[inline]
pub fn anchor_offset(client_top: f64, scroll_y: f64) -> f64 {
    (client_top + scroll_y).max(0.0)
}

/// Backing-store size for a canvas of `css` size at `dpr`.
pub fn backing_size(css_w: f64, css_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    (
        (css_w.max(1.0) * dpr).round() as u32,
        (css_h.max(1.0) * dpr).round() as u32,
    )
}

/// `KeyboardEvent.key` values that dismiss the side menu.
#[inline]
pub fn closes_menu(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub last: Option<Vec2>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TouchState {
    pub last_y: Option<f64>,
}
