use std::fmt;

use crate::geometry::Point;

/// Clip polygon for the blurred layer: the full box with a square hole cut
/// out around the reveal window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPolygon {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ClipPolygon {
    pub fn around(center: Point, window_size: f64) -> Self {
        let half = window_size * 0.5;
        Self {
            left: center.x - half,
            top: center.y - half,
            right: center.x + half,
            bottom: center.y + half,
        }
    }
}

impl fmt::Display for ClipPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            left,
            top,
            right,
            bottom,
        } = *self;
        write!(
            f,
            "polygon(0% 0%, 0% 100%, {left}px 100%, {left}px {top}px, {right}px {top}px, \
             {right}px {bottom}px, {left}px {bottom}px, {left}px 100%, 100% 100%, 100% 0%)"
        )
    }
}
