//! Device class resolved once from the viewport width and passed down.

use crate::constants::{MOBILE_MAX_WIDTH, PHONE_MAX_WIDTH, TABLET_MAX_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayoutProfile {
    Phone,
    Mobile,
    Tablet,
    Desktop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryVariant {
    MouseTrail,
    Carousel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineVariant {
    Path,
    List,
}

impl LayoutProfile {
    pub fn from_width(width: f64) -> Self {
        // Unmeasured viewports fall through to the largest layout.
        if !(width > 0.0) {
            return LayoutProfile::Desktop;
        }
        if width <= PHONE_MAX_WIDTH {
            LayoutProfile::Phone
        } else if width <= MOBILE_MAX_WIDTH {
            LayoutProfile::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            LayoutProfile::Tablet
        } else {
            LayoutProfile::Desktop
        }
    }

    #[inline]
    pub fn is_handheld(self) -> bool {
        matches!(self, LayoutProfile::Phone | LayoutProfile::Mobile)
    }

    pub fn gallery(self) -> GalleryVariant {
        if self.is_handheld() {
            GalleryVariant::Carousel
        } else {
            GalleryVariant::MouseTrail
        }
    }

    pub fn timeline(self) -> TimelineVariant {
        if self.is_handheld() {
            TimelineVariant::List
        } else {
            TimelineVariant::Path
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LayoutProfile::Phone => "phone",
            LayoutProfile::Mobile => "mobile",
            LayoutProfile::Tablet => "tablet",
            LayoutProfile::Desktop => "desktop",
        }
    }
}
