use crate::constants::{SKILLS_BOARD_SEED, SKILLS_CANVAS_ID};
use crate::dom;
use crate::render;
use anyhow::anyhow;
use folio_core::content::SiteContent;
use folio_core::physics::{ArenaSize, CapsuleBoard, PhysicsConfig};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Physics board bound to its canvas. Pointer wiring lives in
/// `events::pointer`; the frame loop calls [`SkillsBoard::frame`].
pub struct SkillsBoard {
    pub canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    pub board: CapsuleBoard,
    dpr: f64,
}

fn arena_of(canvas: &web::HtmlCanvasElement) -> ArenaSize {
    let rect = canvas.get_bounding_client_rect();
    ArenaSize::resolve(rect.width() as f32, rect.height() as f32)
}

impl SkillsBoard {
    pub fn mount(document: &web::Document, content: &SiteContent) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = dom::element(document, SKILLS_CANVAS_ID)?;
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("unexpected context type: {:?}", e))?;
        let dpr = dom::sync_canvas_backing_size(&canvas);
        let arena = arena_of(&canvas);
        let board = CapsuleBoard::new(
            PhysicsConfig::default(),
            content.skill_specs(),
            arena,
            SKILLS_BOARD_SEED,
        )?;
        log::info!(
            "[skills] board {}x{} with {} capsules",
            arena.width,
            arena.height,
            board.bodies().len()
        );
        Ok(Self {
            canvas,
            ctx,
            board,
            dpr,
        })
    }

    /// Container resized: new backing store and a full rebuild at the new size.
    pub fn resize(&mut self) {
        self.dpr = dom::sync_canvas_backing_size(&self.canvas);
        let arena = arena_of(&self.canvas);
        if arena != self.board.arena() {
            log::info!("[skills] rebuild at {}x{}", arena.width, arena.height);
            self.board.rebuild(arena);
        }
    }

    /// Client coordinates to arena coordinates.
    pub fn local_point(&self, client_x: f64, client_y: f64) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        crate::input::client_to_local(
            Vec2::new(client_x as f32, client_y as f32),
            Vec2::new(rect.left() as f32, rect.top() as f32),
        )
    }

    pub fn frame(&mut self, dt_sec: f32) {
        self.board.advance(dt_sec);
        render::draw_board(&self.ctx, &self.canvas, self.board.views(), self.dpr);
    }

    pub fn teardown(&mut self) {
        self.board.clear();
        render::clear(&self.ctx, &self.canvas);
    }
}
