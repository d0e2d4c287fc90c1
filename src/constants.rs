// DOM hooks and frame tuning for the web front-end.
// Element ids and class names match `web/index.html`.

// Preloader
pub const PRELOADER_ID: &str = "preloader";
pub const PRELOADER_WORD_ID: &str = "preloader-word";
pub const PRELOADER_CURVE_ID: &str = "preloader-curve";
// Curtain slide-up duration plus its delay, in milliseconds.
pub const PRELOADER_EXIT_MS: u32 = 1000;
pub const CURSOR_BUSY: &str = "wait";
pub const CURSOR_DEFAULT: &str = "default";

// Chrome
pub const HEADER_ID: &str = "site-header";
pub const MENU_BUTTON_ID: &str = "menu-button";
pub const MENU_PANEL_ID: &str = "menu-panel";
pub const NAV_LINK_CLASS: &str = "nav-link";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const MENU_FOOTER_LINK_SELECTOR: &str = ".menu-footer-link";
pub const MENU_OPEN_CLASS: &str = "open";

// Scroll-driven sections
pub const HERO_ABOUT_ID: &str = "hero-about";
pub const HERO_ID: &str = "hero";
pub const ABOUT_ID: &str = "about";
pub const TIMELINE_ID: &str = "journey";
pub const TIMELINE_PATH_ID: &str = "timeline-path";
pub const TIMELINE_LIST_ID: &str = "timeline-list";
pub const MILESTONE_SELECTOR: &str = ".milestone";
pub const TEXT_PATH_SECTION_ID: &str = "text-path";
pub const TEXT_PATH_COPY_SELECTOR: &str = ".text-path-copy";
pub const CAPTION_ID: &str = "text-path-caption";
pub const TEXT_PATH_COPIES: usize = 2;
pub const PROJECTS_ID: &str = "projects";
pub const CARD_SELECTOR: &str = ".project-card";
pub const CARD_IMAGE_SELECTOR: &str = ".project-card-image";
pub const SKILLS_TRACK_SECTION_ID: &str = "skills-track";
pub const SKILLS_TRACK_ID: &str = "skills-track-inner";

// Gallery
pub const GALLERY_ID: &str = "gallery";
pub const GALLERY_IMAGE_SELECTOR: &str = ".gallery-image";
pub const CAROUSEL_DOT_SELECTOR: &str = ".carousel-dot";
pub const CAROUSEL_DOT_ACTIVE_CLASS: &str = "active";
pub const CAROUSEL_SEED: u64 = 0x5eed_ca20;

// Skills board
pub const SKILLS_CANVAS_ID: &str = "skills-canvas";
pub const SKILLS_BOARD_SEED: u64 = 0x0b0a_4d5e;
pub const CAPSULE_FONT: &str = "600 16px 'Departure Mono', monospace";
pub const CAPSULE_LABEL_COLOR: &str = "#0b0b0b";

// Frame loop
// Longest frame step fed to the simulations (tab switches, debugger pauses).
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Wheel deltaMode scaling
pub const WHEEL_LINE_PX: f64 = 16.0;
pub const WHEEL_PAGE_FRACTION: f64 = 0.9;
