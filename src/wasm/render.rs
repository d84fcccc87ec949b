use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{error, info};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, PageTransitionEvent};

/// Calls a render callback once per display refresh until stopped.
pub struct AnimationLoop {
    inner: Rc<Inner>,
}

struct Inner {
    // `frame` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` from within it. The closure only holds a
    // weak reference back, so dropping the loop releases it.
    frame: RefCell<Option<Closure<dyn FnMut()>>>,
    pending: Cell<Option<i32>>,
}

impl Inner {
    fn schedule(&self) -> Result<(), JsValue> {
        let frame = self.frame.borrow();
        let Some(frame) = frame.as_ref() else {
            return Ok(());
        };
        let handle = window()
            .ok_or("no window")?
            .request_animation_frame(frame.as_ref().unchecked_ref())?;
        self.pending.set(Some(handle));
        Ok(())
    }
}

impl AnimationLoop {
    pub fn start(mut render: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let inner = Rc::new(Inner {
            frame: RefCell::new(None),
            pending: Cell::new(None),
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        *inner.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            render();

            // schedule next
            if let Err(err) = inner.schedule() {
                error!("failed to schedule animation frame: {err:?}");
            }
        }) as Box<dyn FnMut()>));

        inner.schedule()?;
        Ok(Self { inner })
    }

    /// Cancels the pending frame; the callback is never invoked again.
    pub fn stop(&self) {
        if let Some(handle) = self.inner.pending.take() {
            if let Some(window) = window() {
                window.cancel_animation_frame(handle).ok();
            }
        }
        self.inner.frame.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.inner.frame.borrow().is_some()
    }
}

/// Stops `frames` when the page is unloaded for good. A `pagehide` that moves
/// the page into the back/forward cache leaves the loop in place, so it
/// resumes when the page is restored.
pub fn stop_on_unload(frames: Rc<AnimationLoop>) -> Result<(), JsValue> {
    let on_hide = Closure::wrap(Box::new(move |event: PageTransitionEvent| {
        if !event.persisted() && frames.is_running() {
            frames.stop();
            info!("render loop stopped");
        }
    }) as Box<dyn FnMut(PageTransitionEvent)>);
    window()
        .ok_or("no window")?
        .add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref())?;
    on_hide.forget();
    Ok(())
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
