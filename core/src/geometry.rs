#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Keeps a window of side `window_size` inside `[0, extent]` along one axis.
///
/// The lower bound wins when the extent is smaller than the window, so the
/// result is always finite and never panics on inverted bounds.
pub fn clamp_axis(value: f64, window_size: f64, extent: f64) -> f64 {
    let half = window_size * 0.5;
    let value = if value.is_nan() { half } else { value };
    value.min(extent - half).max(half)
}

pub fn clamp_center(candidate: Point, window_size: f64, container: Size) -> Point {
    Point::new(
        clamp_axis(candidate.x, window_size, container.width),
        clamp_axis(candidate.y, window_size, container.height),
    )
}
