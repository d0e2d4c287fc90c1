//! Transition tables for the site chrome: side menu, nav links, header,
//! preloader.

use crate::tween::{Easing, Transition, Variant, VariantTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Opacity,
    TranslateX,
    TranslateY,
    RotateX,
    Width,
    Height,
    Top,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Open,
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloaderView {
    Shown,
    Leaving,
}

pub const MENU_OPEN_WIDTH_PX: f32 = 380.0;
pub const MENU_OPEN_HEIGHT_VH: f32 = 0.85;
pub const MENU_CLOSED_WIDTH_PX: f32 = 100.0;
pub const MENU_CLOSED_HEIGHT_PX: f32 = 40.0;
/// Delay between a nav click and the scroll, letting the menu close first.
pub const NAV_SCROLL_DELAY_MS: u32 = 300;
/// Header hides once scroll passes this fraction of the viewport height.
pub const HEADER_HIDE_FRACTION: f64 = 0.5;
/// Per-item stagger of link reveals.
pub const LINK_STAGGER_SEC: f32 = 0.1;

/// Menu panel geometry; height depends on the viewport.
pub fn menu_panel(viewport_h: f32) -> VariantTable<MenuState, Channel> {
    VariantTable::new()
        .with(
            MenuState::Open,
            Variant::new(
                &[
                    (Channel::Width, MENU_OPEN_WIDTH_PX),
                    (Channel::Height, MENU_OPEN_HEIGHT_VH * viewport_h),
                    (Channel::Top, -25.0),
                    (Channel::Right, -25.0),
                ],
                Transition::new(0.75, Easing::CURTAIN),
            ),
        )
        .with(
            MenuState::Closed,
            Variant::new(
                &[
                    (Channel::Width, MENU_CLOSED_WIDTH_PX),
                    (Channel::Height, MENU_CLOSED_HEIGHT_PX),
                    (Channel::Top, 0.0),
                    (Channel::Right, 0.0),
                ],
                Transition::new(0.75, Easing::CURTAIN).delayed(0.35),
            ),
        )
}

/// Perspective flip-in of the big nav links; stagger by item index.
pub fn nav_link() -> VariantTable<RevealState, Channel> {
    VariantTable::new()
        .with(
            RevealState::Hidden,
            Variant::new(
                &[
                    (Channel::Opacity, 0.0),
                    (Channel::RotateX, 90.0),
                    (Channel::TranslateY, 80.0),
                    (Channel::TranslateX, -20.0),
                ],
                Transition::new(0.0, Easing::Linear),
            ),
        )
        .with(
            RevealState::Visible,
            Variant::new(
                &[
                    (Channel::Opacity, 1.0),
                    (Channel::RotateX, 0.0),
                    (Channel::TranslateY, 0.0),
                    (Channel::TranslateX, 0.0),
                ],
                Transition::new(0.65, Easing::SOFT_OUT).delayed(0.5),
            ),
        )
        .with(
            RevealState::Exit,
            Variant::new(&[(Channel::Opacity, 0.0)], Transition::new(0.5, Easing::CURTAIN)),
        )
}

/// Small footer links of the open menu.
pub fn menu_footer_link() -> VariantTable<RevealState, Channel> {
    VariantTable::new()
        .with(
            RevealState::Hidden,
            Variant::new(
                &[(Channel::Opacity, 0.0), (Channel::TranslateY, 20.0)],
                Transition::new(0.0, Easing::Linear),
            ),
        )
        .with(
            RevealState::Visible,
            Variant::new(
                &[(Channel::Opacity, 1.0), (Channel::TranslateY, 0.0)],
                Transition::new(0.5, Easing::SOFT_OUT).delayed(0.75),
            ),
        )
        .with(
            RevealState::Exit,
            Variant::new(&[(Channel::Opacity, 0.0)], Transition::new(0.5, Easing::CURTAIN)),
        )
}

/// Fixed header fading in/out with scroll.
pub fn header() -> VariantTable<RevealState, Channel> {
    VariantTable::new()
        .with(
            RevealState::Hidden,
            Variant::new(
                &[(Channel::Opacity, 0.0), (Channel::TranslateY, -20.0)],
                Transition::new(0.3, Easing::Linear),
            ),
        )
        .with(
            RevealState::Visible,
            Variant::new(
                &[(Channel::Opacity, 1.0), (Channel::TranslateY, 0.0)],
                Transition::new(0.3, Easing::Linear),
            ),
        )
}

#[inline]
pub fn header_visible(scroll_y: f64, viewport_h: f64) -> bool {
    scroll_y <= viewport_h * HEADER_HIDE_FRACTION
}

/// Preloader curtain: slides up past the top of the viewport on exit.
pub fn preloader_curtain(viewport_h: f32) -> VariantTable<PreloaderView, Channel> {
    VariantTable::new()
        .with(
            PreloaderView::Shown,
            Variant::new(&[(Channel::Top, 0.0)], Transition::new(0.0, Easing::Linear)),
        )
        .with(
            PreloaderView::Leaving,
            Variant::new(
                &[(Channel::Top, -viewport_h)],
                Transition::new(0.8, Easing::CURTAIN).delayed(0.2),
            ),
        )
}

/// Greeting word fade-in.
pub fn preloader_word() -> VariantTable<RevealState, Channel> {
    VariantTable::new()
        .with(
            RevealState::Hidden,
            Variant::new(&[(Channel::Opacity, 0.0)], Transition::new(0.0, Easing::Linear)),
        )
        .with(
            RevealState::Visible,
            Variant::new(
                &[(Channel::Opacity, 0.75)],
                Transition::new(1.0, Easing::Linear).delayed(0.2),
            ),
        )
}
