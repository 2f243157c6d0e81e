use arukoto_core::{Point, Size};
use web_sys::{DomRect, Element, MouseEvent, TouchEvent};

pub(crate) trait HasClientRect {
    fn client_rect(&self) -> DomRect;
}

impl HasClientRect for Element {
    fn client_rect(&self) -> DomRect {
        self.get_bounding_client_rect()
    }
}

pub(crate) fn element_size(element: &impl HasClientRect) -> Size {
    let rect = element.client_rect();
    Size::new(rect.width(), rect.height())
}

/// Converts a client-space point into the element's local space, returning
/// the local point together with the element's current size.
pub(crate) fn client_to_local(client: Point, element: &impl HasClientRect) -> (Point, Size) {
    let rect = element.client_rect();
    let local = Point::new(client.x - rect.left(), client.y - rect.top());
    (local, Size::new(rect.width(), rect.height()))
}

pub(crate) fn mouse_client_point(event: &MouseEvent) -> Point {
    Point::new(event.client_x() as f64, event.client_y() as f64)
}

/// First active touch point; `None` once every finger has lifted.
pub(crate) fn touch_client_point(event: &TouchEvent) -> Option<Point> {
    let touch = event.touches().get(0)?;
    Some(Point::new(touch.client_x() as f64, touch.client_y() as f64))
}
