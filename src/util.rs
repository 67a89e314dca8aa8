// Browser helpers shared by components and state
use web_sys::{HtmlElement, MouseEvent, Storage, Touch};

use crate::model::Point;

pub fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

pub fn mouse_point(e: &MouseEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

pub fn touch_point(t: &Touch) -> Point {
    Point::new(t.client_x() as f64, t.client_y() as f64)
}
