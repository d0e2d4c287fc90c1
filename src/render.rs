// Canvas 2D drawing of the skills board. Reads body views only.
use crate::constants::{CAPSULE_FONT, CAPSULE_LABEL_COLOR};
use folio_core::physics::BodyView;
use std::f64::consts::PI;
use web_sys as web;

pub fn clear(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) {
    _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}

/// Stadium outline centred on the origin: two half circles joined by
/// straight edges.
fn capsule_path(ctx: &web::CanvasRenderingContext2d, width: f64, height: f64) {
    let r = height * 0.5;
    let half = (width * 0.5 - r).max(0.0);
    ctx.begin_path();
    ctx.move_to(-half, -r);
    ctx.line_to(half, -r);
    _ = ctx.arc(half, 0.0, r, -PI / 2.0, PI / 2.0);
    ctx.line_to(-half, r);
    _ = ctx.arc(-half, 0.0, r, PI / 2.0, 3.0 * PI / 2.0);
    ctx.close_path();
}

/// Draw one capsule, label centred and rotated with the body.
pub fn draw_capsule(ctx: &web::CanvasRenderingContext2d, body: &BodyView<'_>, dpr: f64) {
    ctx.save();
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    _ = ctx.translate(body.position.x as f64, body.position.y as f64);
    _ = ctx.rotate(body.angle as f64);

    capsule_path(ctx, body.width as f64, body.height as f64);
    ctx.set_fill_style_str(body.color);
    ctx.fill();

    ctx.set_fill_style_str(CAPSULE_LABEL_COLOR);
    ctx.set_font(CAPSULE_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    _ = ctx.fill_text(body.label, 0.0, 0.0);
    ctx.restore();
}

pub fn draw_board<'a>(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    bodies: impl Iterator<Item = BodyView<'a>>,
    dpr: f64,
) {
    clear(ctx, canvas);
    for b in bodies {
        draw_capsule(ctx, &b, dpr);
    }
}
