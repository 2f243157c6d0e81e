use serde::Deserialize;

use crate::geometry::Size;

pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;
pub const DEFAULT_MOBILE_RATIO: f64 = 0.35;
pub const DEFAULT_MOBILE_MAX: f64 = 140.0;
pub const DEFAULT_DESKTOP_SIZE: f64 = 210.0;

/// Maps viewport dimensions to the reveal window side length.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SizePolicy {
    pub mobile_breakpoint: f64,
    pub mobile_ratio: f64,
    pub mobile_max: f64,
    pub desktop_size: f64,
}

impl Default for SizePolicy {
    fn default() -> Self {
        Self {
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            mobile_ratio: DEFAULT_MOBILE_RATIO,
            mobile_max: DEFAULT_MOBILE_MAX,
            desktop_size: DEFAULT_DESKTOP_SIZE,
        }
    }
}

impl SizePolicy {
    pub fn is_compact(&self, viewport: Size) -> bool {
        viewport.width < self.mobile_breakpoint
    }

    pub fn window_size(&self, viewport: Size) -> f64 {
        if self.is_compact(viewport) {
            (viewport.width.max(0.0) * self.mobile_ratio).min(self.mobile_max)
        } else {
            self.desktop_size
        }
    }
}
