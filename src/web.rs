//! Browser binding: DOM pointer events in, `setTimeout` for the throttle.
//!
//! `pointerdown` is listened for on the target element; move, up and cancel
//! are listened for on the document so contacts that leave the element keep
//! reporting until they lift.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, EventTarget, PointerEvent};

use crate::geometry::Point;
use crate::gesture::{GestureConfig, TransformGesture};
use crate::timer::ChangeTimer;
use crate::util::cwarn;

pub type SharedGesture = Rc<RefCell<TransformGesture>>;

type PointerCallback = Closure<dyn FnMut(PointerEvent)>;

/// [`ChangeTimer`] backed by `window.setTimeout`.
pub struct DomTimer {
    gesture: Weak<RefCell<TransformGesture>>,
    timeout_id: Option<i32>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl DomTimer {
    pub fn new(gesture: Weak<RefCell<TransformGesture>>) -> Self {
        Self {
            gesture,
            timeout_id: None,
            callback: None,
        }
    }

    fn clear(&mut self) {
        if let Some(id) = self.timeout_id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

impl ChangeTimer for DomTimer {
    fn arm(&mut self, delay_ms: u32) {
        self.clear();
        let Some(window) = web_sys::window() else {
            cwarn("transform gesture: no window, change notification dropped");
            return;
        };
        let gesture = self.gesture.clone();
        let cb = Closure::wrap(Box::new(move || {
            let Some(gesture) = gesture.upgrade() else { return };
            // Skip if a handler is already running on this gesture; the next move re-arms.
            if let Ok(mut g) = gesture.try_borrow_mut() {
                g.fire_change();
            }
        }) as Box<dyn FnMut()>);
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), delay) {
            Ok(id) => {
                self.timeout_id = Some(id);
                self.callback = Some(cb);
            }
            Err(_) => cwarn("transform gesture: setTimeout failed"),
        }
    }

    fn cancel(&mut self) {
        self.clear();
        self.callback = None;
    }
}

impl Drop for DomTimer {
    fn drop(&mut self) {
        self.clear();
    }
}

fn client_point(e: &PointerEvent) -> Point {
    Point::new(e.client_x() as f64, e.client_y() as f64)
}

/// Owns a gesture and the DOM listeners feeding it. Listeners are removed on drop.
pub struct GestureBinding {
    gesture: SharedGesture,
    target: EventTarget,
    document: Document,
    down_cb: PointerCallback,
    move_cb: PointerCallback,
    up_cb: PointerCallback,
    cancel_cb: PointerCallback,
}

impl GestureBinding {
    pub fn attach(target: &EventTarget, config: GestureConfig) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;

        let gesture: SharedGesture = Rc::new_cyclic(|weak| {
            RefCell::new(TransformGesture::new(config, Box::new(DomTimer::new(weak.clone()))))
        });

        let down_cb = {
            let gesture = gesture.clone();
            Closure::wrap(Box::new(move |e: PointerEvent| {
                e.prevent_default();
                if let Ok(mut g) = gesture.try_borrow_mut() {
                    g.add_pointer(e.pointer_id(), client_point(&e));
                }
            }) as Box<dyn FnMut(_)>)
        };
        let move_cb = {
            let gesture = gesture.clone();
            Closure::wrap(Box::new(move |e: PointerEvent| {
                if let Ok(mut g) = gesture.try_borrow_mut() {
                    g.pointer_move(e.pointer_id(), client_point(&e));
                }
            }) as Box<dyn FnMut(_)>)
        };
        let up_cb = {
            let gesture = gesture.clone();
            Closure::wrap(Box::new(move |e: PointerEvent| {
                if let Ok(mut g) = gesture.try_borrow_mut() {
                    g.pointer_up(e.pointer_id(), client_point(&e));
                }
            }) as Box<dyn FnMut(_)>)
        };
        let cancel_cb = {
            let gesture = gesture.clone();
            Closure::wrap(Box::new(move |e: PointerEvent| {
                if let Ok(mut g) = gesture.try_borrow_mut() {
                    g.pointer_cancel(e.pointer_id(), client_point(&e));
                }
            }) as Box<dyn FnMut(_)>)
        };

        target.add_event_listener_with_callback("pointerdown", down_cb.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("pointermove", move_cb.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("pointerup", up_cb.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("pointercancel", cancel_cb.as_ref().unchecked_ref())?;

        Ok(Self {
            gesture,
            target: target.clone(),
            document,
            down_cb,
            move_cb,
            up_cb,
            cancel_cb,
        })
    }

    pub fn gesture(&self) -> &SharedGesture {
        &self.gesture
    }
}

impl Drop for GestureBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("pointerdown", self.down_cb.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("pointermove", self.move_cb.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("pointerup", self.up_cb.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("pointercancel", self.cancel_cb.as_ref().unchecked_ref());
    }
}
