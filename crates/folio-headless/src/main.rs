//! Native driver for the platform-free controllers: spawns the skills board,
//! drags a capsule into a wall, lets it settle and checks containment.

use anyhow::{bail, Context};
use folio_core::content::SiteContent;
use folio_core::physics::{ArenaSize, CapsuleBoard, PhysicsConfig};
use folio_core::preloader::{Preloader, PreloaderConfig};
use folio_core::scroll::{SmoothScroll, SmoothScrollConfig};
use glam::Vec2;

const SEED: u64 = 0x5eed;
const ARENA: (f32, f32) = (1200.0, 500.0);
const SETTLE_STEPS: usize = 1200;
const DRAG_FRAMES: usize = 90;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let content = SiteContent::default();
    run_preloader(&content)?;
    run_scroll();
    run_board(&content)
}

fn run_preloader(content: &SiteContent) -> anyhow::Result<()> {
    let mut p = Preloader::new(PreloaderConfig::default(), content.greetings.iter().copied())
        .context("building preloader")?;
    while p.next_delay().is_some() {
        log::info!("[preloader] {:>5} ms  {}", p.elapsed().as_millis(), p.word());
        p.advance();
    }
    log::info!(
        "[preloader] {:>5} ms  {} (last), reveal at {} ms",
        p.elapsed().as_millis(),
        p.word(),
        p.reveal_after().as_millis()
    );
    Ok(())
}

fn run_scroll() {
    let mut s = SmoothScroll::new(SmoothScrollConfig::default(), 0.0, 4000.0);
    s.scroll_to(1800.0);
    let mut t = 0.0;
    while s.is_animating() {
        t += 1.0 / 60.0;
        s.raf(t);
    }
    log::info!("[scroll] reached {:.1} after {:.2}s", s.offset(), t);
}

fn run_board(content: &SiteContent) -> anyhow::Result<()> {
    let arena = ArenaSize::resolve(ARENA.0, ARENA.1);
    let mut board = CapsuleBoard::new(PhysicsConfig::default(), content.skill_specs(), arena, SEED)
        .context("building capsule board")?;
    let steps = board.settle(SETTLE_STEPS);
    log::info!("[skills] {} capsules settled in {} steps", board.bodies().len(), steps);

    let start = board
        .bodies()
        .first()
        .map(|b| b.position)
        .context("board spawned no capsules")?;
    if board.pointer_down(start).is_none() {
        bail!("no capsule under {:?}", start);
    }
    // Drag well past the right wall.
    let target = Vec2::new(arena.width + 400.0, start.y);
    for i in 1..=DRAG_FRAMES {
        let t = i as f32 / DRAG_FRAMES as f32;
        board.pointer_move(start.lerp(target, t));
        board.advance(1.0 / 60.0);
    }
    board.pointer_up();
    let steps = board.settle(SETTLE_STEPS);
    log::info!("[skills] released, settled in {} steps", steps);

    let mut escaped = 0;
    for view in board.views() {
        let inside = (0.0..=arena.width).contains(&view.position.x)
            && (0.0..=arena.height).contains(&view.position.y);
        log::info!(
            "[skills] {:<12} ({:7.1}, {:6.1}) {:+.2} rad{}",
            view.label,
            view.position.x,
            view.position.y,
            view.angle,
            if inside { "" } else { "  OUTSIDE" }
        );
        if !inside {
            escaped += 1;
        }
    }
    if escaped > 0 {
        bail!("{} capsule(s) left the {}x{} arena", escaped, arena.width, arena.height);
    }
    Ok(())
}
