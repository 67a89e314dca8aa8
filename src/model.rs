//! Core data models for the gallery page.
//! The image modal viewport lives here as plain state transitions; components
//! only translate browser events into `ModalAction`s and render the result.

use serde::{Deserialize, Serialize};
use std::ops::Sub;
use std::rc::Rc;
use yew::Reducible;

use crate::config::ZoomLimits;

/// Step zooms are rounded to this many fractional steps so repeated
/// additions of 0.2 land back on exactly 1.0.
const SCALE_PRECISION: f64 = 1e6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    pub fn distance(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchBaseline {
    pub initial_distance: f64,
    pub initial_scale: f64,
}

/// Zoom and pan of the image shown in the modal.
///
/// Every mutating method returns whether anything changed so the reducer can
/// skip re-rendering on suppressed input.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    pub scale: f64,
    pub offset: Point,
    /// Pointer position at drag start minus the offset at that time.
    pub drag_origin: Option<Point>,
    pub pinch: Option<PinchBaseline>,
    pub limits: ZoomLimits,
}

impl ViewportState {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            scale: 1.0,
            offset: Point::ORIGIN,
            drag_origin: None,
            pinch: None,
            limits,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Panning only makes sense once the image is larger than its fitted size.
    pub fn can_pan(&self) -> bool {
        self.scale > 1.0
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = self.limits.clamp(scale);
        if self.scale <= 1.0 {
            self.offset = Point::ORIGIN;
            self.drag_origin = None;
        }
    }

    fn snapped(v: f64) -> f64 {
        (v * SCALE_PRECISION).round() / SCALE_PRECISION
    }

    pub fn zoom_in(&mut self) -> bool {
        if self.scale >= self.limits.max {
            return false;
        }
        self.set_scale(Self::snapped(self.scale + self.limits.step));
        true
    }

    pub fn zoom_out(&mut self) -> bool {
        if self.scale <= self.limits.min {
            return false;
        }
        self.set_scale(Self::snapped(self.scale - self.limits.step));
        true
    }

    /// Wheel zoom: scrolling up (negative delta) zooms in.
    pub fn zoom_at(&mut self, delta_y: f64) -> bool {
        if delta_y < 0.0 {
            self.zoom_in()
        } else if delta_y > 0.0 {
            self.zoom_out()
        } else {
            false
        }
    }

    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.can_pan() {
            return false;
        }
        self.drag_origin = Some(pointer - self.offset);
        true
    }

    pub fn continue_drag(&mut self, pointer: Point) -> bool {
        let Some(origin) = self.drag_origin else {
            return false;
        };
        let next = pointer - origin;
        if next == self.offset {
            return false;
        }
        self.offset = next;
        true
    }

    pub fn end_drag(&mut self) -> bool {
        self.drag_origin.take().is_some()
    }

    pub fn begin_pinch(&mut self, a: Point, b: Point) -> bool {
        self.drag_origin = None;
        self.pinch = Some(PinchBaseline {
            initial_distance: a.distance(b),
            initial_scale: self.scale,
        });
        true
    }

    /// A zero baseline distance (both touches on one spot) leaves the scale alone.
    pub fn continue_pinch(&mut self, a: Point, b: Point) -> bool {
        let Some(base) = self.pinch else {
            return false;
        };
        if !(base.initial_distance > 0.0) {
            return false;
        }
        let before = (self.scale, self.offset);
        self.set_scale(base.initial_scale * (a.distance(b) / base.initial_distance));
        before != (self.scale, self.offset)
    }

    pub fn end_pinch(&mut self) -> bool {
        self.pinch.take().is_some()
    }

    pub fn cursor(&self) -> Cursor {
        if self.is_dragging() {
            Cursor::Grabbing
        } else if self.can_pan() {
            Cursor::Grab
        } else {
            Cursor::Default
        }
    }

    /// CSS transform centering the image and applying pan then zoom.
    pub fn transform(&self) -> String {
        format!(
            "translate(-50%, -50%) translate({}px, {}px) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpenImage {
    pub image: ImageRef,
    pub viewport: ViewportState,
}

/// Modal contents. `open` is `None` while the modal is hidden.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalState {
    pub limits: ZoomLimits,
    pub open: Option<OpenImage>,
}

impl ModalState {
    pub fn new(limits: ZoomLimits) -> Self {
        Self { limits, open: None }
    }

    pub fn viewport(&self) -> Option<&ViewportState> {
        self.open.as_ref().map(|o| &o.viewport)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalAction {
    Open(ImageRef),
    Close,
    ZoomIn,
    ZoomOut,
    Wheel { delta_y: f64 },
    BeginDrag(Point),
    ContinueDrag(Point),
    EndDrag,
    BeginPinch(Point, Point),
    ContinuePinch(Point, Point),
    EndPinch,
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ModalAction::*;
        let mut new = (*self).clone();
        let changed = match action {
            Open(image) => {
                new.open = Some(OpenImage {
                    image,
                    viewport: ViewportState::new(new.limits),
                });
                true
            }
            Close => new.open.take().is_some(),
            other => match new.open.as_mut() {
                Some(open) => {
                    let vp = &mut open.viewport;
                    match other {
                        ZoomIn => vp.zoom_in(),
                        ZoomOut => vp.zoom_out(),
                        Wheel { delta_y } => vp.zoom_at(delta_y),
                        BeginDrag(p) => vp.begin_drag(p),
                        ContinueDrag(p) => vp.continue_drag(p),
                        EndDrag => vp.end_drag(),
                        BeginPinch(a, b) => vp.begin_pinch(a, b),
                        ContinuePinch(a, b) => vp.continue_pinch(a, b),
                        EndPinch => vp.end_pinch(),
                        Open(_) | Close => false,
                    }
                }
                None => false,
            },
        };
        if !changed {
            return self;
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vp() -> ViewportState {
        ViewportState::new(ZoomLimits::default())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= 1e-9,
            "expected {expected} got {actual}"
        );
    }

    fn image() -> ImageRef {
        ImageRef {
            src: "img/harbour.jpg".to_string(),
            alt: "Harbour".to_string(),
        }
    }

    #[test]
    fn scale_stays_within_bounds() {
        let mut v = vp();
        for _ in 0..40 {
            v.zoom_in();
            assert!(v.scale <= 5.0);
        }
        assert_close(v.scale, 5.0);
        assert!(!v.zoom_in());
        for _ in 0..40 {
            v.zoom_out();
            assert!(v.scale >= 0.5);
        }
        assert_close(v.scale, 0.5);
        assert!(!v.zoom_out());
    }

    #[test]
    fn mixed_zoom_sequence_stays_within_bounds() {
        let mut v = vp();
        let pattern = [true, true, false, true, false, false, false, false, true];
        for _ in 0..20 {
            for &up in &pattern {
                if up {
                    v.zoom_in();
                } else {
                    v.zoom_out();
                }
                assert!(v.scale >= 0.5 && v.scale <= 5.0, "scale {}", v.scale);
            }
        }
    }

    #[test]
    fn zoom_clamps_partial_step() {
        let mut v = vp();
        v.scale = 4.9;
        assert!(v.zoom_in());
        assert_close(v.scale, 5.0);
        v.scale = 0.6;
        assert!(v.zoom_out());
        assert_close(v.scale, 0.5);
    }

    #[test]
    fn zoom_to_one_or_below_recenters() {
        let mut v = vp();
        v.scale = 1.2;
        v.offset = Point::new(40.0, -12.0);
        v.zoom_out();
        assert_close(v.scale, 1.0);
        assert_eq!(v.offset, Point::ORIGIN);
    }

    #[test]
    fn zoom_in_three_then_out_four() {
        let mut v = vp();
        for _ in 0..3 {
            v.zoom_in();
        }
        assert_close(v.scale, 1.6);
        v.offset = Point::new(25.0, 25.0);
        for _ in 0..4 {
            v.zoom_out();
        }
        assert_close(v.scale, 0.8);
        assert_eq!(v.offset, Point::ORIGIN);
    }

    #[test]
    fn wheel_direction_maps_to_zoom() {
        let mut v = vp();
        assert!(v.zoom_at(-100.0));
        assert_close(v.scale, 1.2);
        assert!(v.zoom_at(53.0));
        assert_close(v.scale, 1.0);
        assert!(!v.zoom_at(0.0));
        assert_close(v.scale, 1.0);
    }

    #[test]
    fn drag_ignored_at_fitted_scale() {
        let mut v = vp();
        assert!(!v.begin_drag(Point::new(10.0, 10.0)));
        assert!(!v.continue_drag(Point::new(50.0, 50.0)));
        assert_eq!(v.offset, Point::ORIGIN);
        assert_eq!(v.cursor(), Cursor::Default);
    }

    #[test]
    fn drag_without_movement_keeps_offset() {
        let mut v = vp();
        v.scale = 2.0;
        v.offset = Point::new(7.0, -3.0);
        let p = Point::new(120.0, 80.0);
        v.begin_drag(p);
        assert!(!v.continue_drag(p));
        assert_eq!(v.offset, Point::new(7.0, -3.0));
    }

    #[test]
    fn drag_moves_offset_and_restarts_cleanly() {
        let mut v = vp();
        v.scale = 2.0;
        assert!(v.begin_drag(Point::new(100.0, 100.0)));
        assert_eq!(v.cursor(), Cursor::Grabbing);
        v.continue_drag(Point::new(130.0, 115.0));
        assert_eq!(v.offset, Point::new(30.0, 15.0));

        assert!(v.end_drag());
        assert_eq!(v.cursor(), Cursor::Grab);
        assert!(!v.continue_drag(Point::new(500.0, 500.0)));

        v.begin_drag(Point::new(200.0, 200.0));
        assert_eq!(v.drag_origin, Some(Point::new(170.0, 185.0)));
        assert_eq!(v.offset, Point::new(30.0, 15.0));
        v.continue_drag(Point::new(210.0, 190.0));
        assert_eq!(v.offset, Point::new(40.0, 5.0));
    }

    #[test]
    fn zooming_out_mid_drag_ends_the_drag() {
        let mut v = vp();
        v.scale = 1.2;
        v.begin_drag(Point::new(0.0, 0.0));
        v.continue_drag(Point::new(10.0, 10.0));
        v.zoom_out();
        assert!(!v.is_dragging());
        assert_eq!(v.offset, Point::ORIGIN);
        assert!(!v.continue_drag(Point::new(30.0, 30.0)));
    }

    #[test]
    fn pinch_at_baseline_distance_keeps_scale() {
        let mut v = vp();
        v.scale = 1.8;
        v.begin_pinch(Point::new(0.0, 0.0), Point::new(30.0, 40.0));
        assert_eq!(v.pinch.map(|p| p.initial_distance), Some(50.0));
        v.continue_pinch(Point::new(10.0, 10.0), Point::new(40.0, 50.0));
        assert_close(v.scale, 1.8);
    }

    #[test]
    fn pinch_scales_relative_to_baseline_and_clamps() {
        let mut v = vp();
        v.begin_pinch(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(v.continue_pinch(Point::new(0.0, 0.0), Point::new(250.0, 0.0)));
        assert_close(v.scale, 2.5);
        v.continue_pinch(Point::new(0.0, 0.0), Point::new(1000.0, 0.0));
        assert_close(v.scale, 5.0);
        v.continue_pinch(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_close(v.scale, 0.5);
    }

    #[test]
    fn pinch_below_one_recenters() {
        let mut v = vp();
        v.scale = 2.0;
        v.offset = Point::new(60.0, 60.0);
        v.begin_pinch(Point::new(0.0, 0.0), Point::new(0.0, 200.0));
        v.continue_pinch(Point::new(0.0, 0.0), Point::new(0.0, 90.0));
        assert_close(v.scale, 0.9);
        assert_eq!(v.offset, Point::ORIGIN);
    }

    #[test]
    fn zero_distance_pinch_is_ignored() {
        let mut v = vp();
        let p = Point::new(50.0, 50.0);
        v.begin_pinch(p, p);
        assert!(!v.continue_pinch(Point::new(0.0, 0.0), Point::new(300.0, 0.0)));
        assert_close(v.scale, 1.0);
    }

    #[test]
    fn pinch_without_baseline_is_ignored() {
        let mut v = vp();
        assert!(!v.continue_pinch(Point::new(0.0, 0.0), Point::new(300.0, 0.0)));
        v.begin_pinch(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(v.end_pinch());
        assert!(!v.continue_pinch(Point::new(0.0, 0.0), Point::new(300.0, 0.0)));
        assert_close(v.scale, 1.0);
    }

    #[test]
    fn transform_string_format() {
        let mut v = vp();
        assert_eq!(
            v.transform(),
            "translate(-50%, -50%) translate(0px, 0px) scale(1)"
        );
        v.scale = 2.0;
        v.offset = Point::new(30.0, -15.5);
        assert_eq!(
            v.transform(),
            "translate(-50%, -50%) translate(30px, -15.5px) scale(2)"
        );
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Point::new(1.0, 2.0).distance(Point::new(4.0, 6.0)), 5.0);
        assert_eq!(Point::ORIGIN.distance(Point::ORIGIN), 0.0);
    }

    #[test]
    fn open_resets_viewport_and_close_discards() {
        let state = Rc::new(ModalState::new(ZoomLimits::default()));
        let state = state.reduce(ModalAction::Open(image()));
        let state = state.reduce(ModalAction::ZoomIn);
        let state = state.reduce(ModalAction::ZoomIn);
        assert_close(state.viewport().unwrap().scale, 1.4);

        let state = state.reduce(ModalAction::Open(ImageRef {
            src: "img/pier.jpg".to_string(),
            alt: "Pier".to_string(),
        }));
        let open = state.open.as_ref().unwrap();
        assert_eq!(open.image.src, "img/pier.jpg");
        assert_eq!(open.viewport, ViewportState::new(ZoomLimits::default()));

        let state = state.reduce(ModalAction::Close);
        assert!(state.open.is_none());
    }

    #[test]
    fn actions_on_closed_modal_do_nothing() {
        let state = Rc::new(ModalState::new(ZoomLimits::default()));
        let after = state.clone().reduce(ModalAction::ZoomIn);
        assert!(Rc::ptr_eq(&state, &after));
        let after = state.clone().reduce(ModalAction::BeginDrag(Point::ORIGIN));
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn suppressed_input_keeps_same_state() {
        let state =
            Rc::new(ModalState::new(ZoomLimits::default())).reduce(ModalAction::Open(image()));
        let after = state.clone().reduce(ModalAction::BeginDrag(Point::new(5.0, 5.0)));
        assert!(Rc::ptr_eq(&state, &after));
        let after = state.clone().reduce(ModalAction::Wheel { delta_y: 0.0 });
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn reducer_routes_gestures() {
        let state = Rc::new(ModalState::new(ZoomLimits::default()))
            .reduce(ModalAction::Open(image()))
            .reduce(ModalAction::Wheel { delta_y: -1.0 })
            .reduce(ModalAction::Wheel { delta_y: -1.0 })
            .reduce(ModalAction::BeginDrag(Point::new(10.0, 10.0)))
            .reduce(ModalAction::ContinueDrag(Point::new(4.0, 22.0)))
            .reduce(ModalAction::EndDrag);
        let vp = state.viewport().unwrap();
        assert_close(vp.scale, 1.4);
        assert_eq!(vp.offset, Point::new(-6.0, 12.0));
        assert_eq!(vp.cursor(), Cursor::Grab);
    }

    #[test]
    fn opened_image_starts_within_configured_limits() {
        let cfg = crate::config::SiteConfig::from_json(r#"{"zoom": {"min": 2.0, "max": 5.0}}"#)
            .unwrap();
        let state = Rc::new(ModalState::new(cfg.zoom)).reduce(ModalAction::Open(image()));
        let vp = state.viewport().unwrap();
        assert!(
            vp.scale >= vp.limits.min && vp.scale <= vp.limits.max,
            "scale {} outside [{}, {}]",
            vp.scale,
            vp.limits.min,
            vp.limits.max
        );
    }
}
