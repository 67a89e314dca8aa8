use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{EventTarget, HtmlElement, KeyboardEvent, MouseEvent, Node, TouchEvent, WheelEvent};
use yew::prelude::*;

use crate::model::{ModalAction, ModalState, Point, ViewportState};
use crate::util::{mouse_point, touch_point};

#[derive(Properties, PartialEq, Clone)]
pub struct ImageModalProps {
    pub modal: UseReducerHandle<ModalState>,
}

type ModalRef = Rc<RefCell<UseReducerHandle<ModalState>>>;

/// What a touch event with a given number of active points should drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TouchGesture {
    Pinch,
    Pan,
    Ignore,
}

/// Two points always pinch; one point pans only once the image is zoomed past its fitted size.
fn touch_start_gesture(touches: u32, vp: Option<&ViewportState>) -> TouchGesture {
    match touches {
        2 => TouchGesture::Pinch,
        1 if vp.is_some_and(|vp| vp.can_pan()) => TouchGesture::Pan,
        _ => TouchGesture::Ignore,
    }
}

fn touch_move_gesture(touches: u32, vp: Option<&ViewportState>) -> TouchGesture {
    match touches {
        2 => TouchGesture::Pinch,
        1 if vp.is_some_and(|vp| vp.is_dragging()) => TouchGesture::Pan,
        _ => TouchGesture::Ignore,
    }
}

/// Fewer than two remaining points end the pinch; none left also ends the drag.
fn touch_end_actions(remaining: u32) -> Vec<ModalAction> {
    let mut actions = Vec::new();
    if remaining < 2 {
        actions.push(ModalAction::EndPinch);
    }
    if remaining == 0 {
        actions.push(ModalAction::EndDrag);
    }
    actions
}

fn key_action(key: &str) -> Option<ModalAction> {
    match key {
        "Escape" => Some(ModalAction::Close),
        "+" | "=" => Some(ModalAction::ZoomIn),
        "-" => Some(ModalAction::ZoomOut),
        _ => None,
    }
}

/// True only when the click landed on the backdrop itself, not on the image or controls.
fn is_backdrop_target(target: Option<EventTarget>, backdrop: Option<Node>) -> bool {
    match (target, backdrop) {
        (Some(target), Some(node)) => js_sys::Object::is(&target.into(), &node.into()),
        _ => false,
    }
}

fn first_two_touches(e: &TouchEvent) -> Option<(Point, Point)> {
    let touches = e.touches();
    if touches.length() != 2 {
        return None;
    }
    let a = touches.item(0)?;
    let b = touches.item(1)?;
    Some((touch_point(&a), touch_point(&b)))
}

fn listen<T: ?Sized>(target: &EventTarget, name: &str, cb: &Closure<T>) {
    if target
        .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to attach {} listener", name);
    }
}

fn unlisten<T: ?Sized>(target: &EventTarget, name: &str, cb: &Closure<T>) {
    if target
        .remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to remove {} listener", name);
    }
}

/// Registers wheel, mouse, touch, and key listeners while the modal is open.
/// The returned closure removes them again.
fn attach_gesture_listeners(
    backdrop: HtmlElement,
    image: HtmlElement,
    modal_ref: ModalRef,
) -> Box<dyn FnOnce()> {
    let Some(window) = web_sys::window() else {
        return Box::new(|| ());
    };
    let current = move || modal_ref.borrow().clone();

    // Wheel zoom on the whole overlay; the page behind must not scroll.
    let wheel_cb = {
        let current = current.clone();
        Closure::wrap(Box::new(move |e: WheelEvent| {
            e.prevent_default();
            current().dispatch(ModalAction::Wheel {
                delta_y: e.delta_y(),
            });
        }) as Box<dyn FnMut(_)>)
    };
    let mousedown_cb = {
        let current = current.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let handle = current();
            if handle.viewport().is_some_and(|vp| vp.can_pan()) {
                e.prevent_default();
                handle.dispatch(ModalAction::BeginDrag(mouse_point(&e)));
            }
        }) as Box<dyn FnMut(_)>)
    };
    // Move and release are tracked on the window so a drag leaving the image still ends.
    let mousemove_cb = {
        let current = current.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let handle = current();
            if handle.viewport().is_some_and(|vp| vp.is_dragging()) {
                handle.dispatch(ModalAction::ContinueDrag(mouse_point(&e)));
            }
        }) as Box<dyn FnMut(_)>)
    };
    let mouseup_cb = {
        let current = current.clone();
        Closure::wrap(Box::new(move |_e: MouseEvent| {
            current().dispatch(ModalAction::EndDrag);
        }) as Box<dyn FnMut(_)>)
    };
    let touch_start_cb = {
        let current = current.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            let handle = current();
            match touch_start_gesture(e.touches().length(), handle.viewport()) {
                TouchGesture::Pinch => {
                    if let Some((a, b)) = first_two_touches(&e) {
                        e.prevent_default();
                        handle.dispatch(ModalAction::BeginPinch(a, b));
                    }
                }
                TouchGesture::Pan => {
                    if let Some(t0) = e.touches().item(0) {
                        e.prevent_default();
                        handle.dispatch(ModalAction::BeginDrag(touch_point(&t0)));
                    }
                }
                TouchGesture::Ignore => {}
            }
        }) as Box<dyn FnMut(_)>)
    };
    let touch_move_cb = {
        let current = current.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            let handle = current();
            match touch_move_gesture(e.touches().length(), handle.viewport()) {
                TouchGesture::Pinch => {
                    if let Some((a, b)) = first_two_touches(&e) {
                        e.prevent_default();
                        handle.dispatch(ModalAction::ContinuePinch(a, b));
                    }
                }
                TouchGesture::Pan => {
                    if let Some(t0) = e.touches().item(0) {
                        e.prevent_default();
                        handle.dispatch(ModalAction::ContinueDrag(touch_point(&t0)));
                    }
                }
                TouchGesture::Ignore => {}
            }
        }) as Box<dyn FnMut(_)>)
    };
    let touch_end_cb = {
        let current = current.clone();
        Closure::wrap(Box::new(move |e: TouchEvent| {
            let handle = current();
            for action in touch_end_actions(e.touches().length()) {
                handle.dispatch(action);
            }
        }) as Box<dyn FnMut(_)>)
    };
    let keydown_cb = {
        let current = current.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            let Some(action) = key_action(&e.key()) else {
                return;
            };
            e.prevent_default();
            current().dispatch(action);
        }) as Box<dyn FnMut(_)>)
    };

    listen(&backdrop, "wheel", &wheel_cb);
    listen(&image, "mousedown", &mousedown_cb);
    listen(&image, "touchstart", &touch_start_cb);
    listen(&image, "touchmove", &touch_move_cb);
    listen(&image, "touchend", &touch_end_cb);
    listen(&image, "touchcancel", &touch_end_cb);
    listen(&window, "mousemove", &mousemove_cb);
    listen(&window, "mouseup", &mouseup_cb);
    listen(&window, "keydown", &keydown_cb);
    log::debug!("image modal listeners attached");

    Box::new(move || {
        unlisten(&backdrop, "wheel", &wheel_cb);
        unlisten(&image, "mousedown", &mousedown_cb);
        unlisten(&image, "touchstart", &touch_start_cb);
        unlisten(&image, "touchmove", &touch_move_cb);
        unlisten(&image, "touchend", &touch_end_cb);
        unlisten(&image, "touchcancel", &touch_end_cb);
        unlisten(&window, "mousemove", &mousemove_cb);
        unlisten(&window, "mouseup", &mouseup_cb);
        unlisten(&window, "keydown", &keydown_cb);
        log::debug!("image modal listeners removed");
    })
}

#[function_component(ImageModal)]
pub fn image_modal(props: &ImageModalProps) -> Html {
    let backdrop_ref = use_node_ref();
    let image_ref = use_node_ref();
    let modal_ref = use_mut_ref(|| props.modal.clone());
    let is_open = props.modal.open.is_some();

    // Keep listeners pointed at the latest handle
    {
        let modal_ref = modal_ref.clone();
        let handle = props.modal.clone();
        use_effect(move || {
            *modal_ref.borrow_mut() = handle;
            || ()
        });
    }
    {
        let backdrop_ref = backdrop_ref.clone();
        let image_ref = image_ref.clone();
        let modal_ref = modal_ref.clone();
        use_effect_with(is_open, move |open| {
            let cleanup = if *open {
                match (
                    backdrop_ref.cast::<HtmlElement>(),
                    image_ref.cast::<HtmlElement>(),
                ) {
                    (Some(backdrop), Some(image)) => {
                        Some(attach_gesture_listeners(backdrop, image, modal_ref))
                    }
                    _ => None,
                }
            } else {
                None
            };
            move || {
                if let Some(cleanup) = cleanup {
                    cleanup();
                }
            }
        });
    }

    let Some(open) = props.modal.open.as_ref() else {
        return html! {};
    };

    let close_cb = {
        let modal = props.modal.clone();
        Callback::from(move |_| modal.dispatch(ModalAction::Close))
    };
    // Only clicks landing on the backdrop itself close the modal
    let backdrop_click = {
        let modal = props.modal.clone();
        let backdrop_ref = backdrop_ref.clone();
        Callback::from(move |e: MouseEvent| {
            if is_backdrop_target(e.target(), backdrop_ref.get()) {
                modal.dispatch(ModalAction::Close);
            }
        })
    };
    let zoom_in = {
        let modal = props.modal.clone();
        Callback::from(move |_| modal.dispatch(ModalAction::ZoomIn))
    };
    let zoom_out = {
        let modal = props.modal.clone();
        Callback::from(move |_| modal.dispatch(ModalAction::ZoomOut))
    };

    let vp = &open.viewport;
    let image_style = format!(
        "position:absolute; top:50%; left:50%; max-width:90vw; max-height:85vh; transform:{}; cursor:{}; user-select:none; touch-action:none;",
        vp.transform(),
        vp.cursor().as_css()
    );
    let zoom_label = format!("{:.0}%", vp.scale * 100.0);

    html! {
        <div id="image-modal" class="modal" ref={backdrop_ref} onclick={backdrop_click}
            style="display:block; position:fixed; inset:0; background:rgba(0,0,0,0.85); overflow:hidden; z-index:50;">
            <span class="close" onclick={close_cb} style="position:absolute; top:12px; right:20px; font-size:32px; cursor:pointer; z-index:2;">{"×"}</span>
            <img id="modal-image" class="modal-content" ref={image_ref}
                src={open.image.src.clone()} alt={open.image.alt.clone()}
                draggable="false" style={image_style} />
            <div class="zoom-controls" style="position:absolute; bottom:16px; left:50%; transform:translateX(-50%); display:flex; gap:8px; align-items:center; z-index:2;">
                <button id="zoom-out" onclick={zoom_out}>{"-"}</button>
                <span style="min-width:48px; text-align:center; color:#fff;">{ zoom_label }</span>
                <button id="zoom-in" onclick={zoom_in}>{"+"}</button>
            </div>
        </div>
    }
}
