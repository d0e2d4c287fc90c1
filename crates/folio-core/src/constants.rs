// Shared tuning constants used by both the web and headless front-ends.
//
// Every value here is an empirically tuned default; the config structs in the
// controller modules take them through `Default` so callers can override any
// of them.

// Mouse-trail gallery
pub const TRAIL_STEP_PX: f32 = 120.0; // cumulative pointer travel between placements
pub const TRAIL_SLOT_COUNT: usize = 5; // images in the ring
pub const TRAIL_MAX_VISIBLE: usize = 4; // sliding window size

// Mobile carousel
pub const CAROUSEL_INTERVAL_MS: u32 = 2000;
pub const CAROUSEL_VISIBLE_DEPTH: usize = 3; // current + two behind it
pub const CAROUSEL_POS_MIN_PCT: f32 = 15.0;
pub const CAROUSEL_POS_SPAN_PCT: f32 = 70.0;

// Capsule physics board
pub const ARENA_DEFAULT_WIDTH: f32 = 1200.0; // used when the container measures zero
pub const ARENA_DEFAULT_HEIGHT: f32 = 500.0;
pub const WALL_THICKNESS: f32 = 50.0;
pub const CAPSULE_HEIGHT: f32 = 40.0;
pub const CAPSULE_CHAR_WIDTH: f32 = 15.0;
pub const CAPSULE_PADDING: f32 = 40.0;
pub const GRAVITY_PX_PER_S2: f32 = 1000.0;
pub const RESTITUTION: f32 = 0.5;
pub const FRICTION: f32 = 0.1;
pub const DRAG_STIFFNESS: f32 = 0.2; // fraction of the anchor error closed per step
pub const FIXED_STEP_SEC: f32 = 1.0 / 60.0;
pub const PX_PER_METER: f32 = 100.0; // simulation runs in metres, the page in pixels
pub const MAX_SUBSTEPS_PER_FRAME: usize = 4;
pub const INITIAL_TILT_RAD: f32 = 0.25; // start angles in [-tilt, tilt]

// Smooth scroll
pub const SCROLL_DURATION_SEC: f64 = 1.2;
pub const ANCHOR_DURATION_SEC: f64 = 1.5;
pub const WHEEL_MULTIPLIER: f64 = 1.0;
pub const TOUCH_MULTIPLIER: f64 = 2.0;

// Preloader
pub const PRELOADER_FIRST_DELAY_MS: u32 = 1000; // first-paint grace period
pub const PRELOADER_STEP_DELAY_MS: u32 = 150;
pub const PRELOADER_EXIT_HOLD_MS: u32 = 350;
pub const PRELOADER_CURVE_BULGE_PX: f64 = 300.0;

// Layout profile breakpoints (max widths, inclusive)
pub const PHONE_MAX_WIDTH: f64 = 375.0;
pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

// Horizontal pinned track
pub const SCRUB_LAG_SEC: f32 = 1.0;
