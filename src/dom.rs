use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use web_sys::{window, Storage};

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn system_prefers_dark() -> bool {
    media_matches("(prefers-color-scheme: dark)")
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

pub fn viewport_height() -> f64 {
    let Some(win) = window() else {
        return 720.0;
    };

    win.inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0)
}

// At most one scheduled frame per gate; dropping every clone cancels a
// pending frame.
#[derive(Clone)]
pub struct FrameGate {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self {
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn request(&self, callback: impl FnOnce() + 'static) {
        if self.pending.borrow().is_some() {
            return;
        }

        let pending = Rc::downgrade(&self.pending);
        let frame = request_animation_frame(move |_| {
            if let Some(pending) = pending.upgrade() {
                pending.borrow_mut().take();
            }
            callback();
        });
        *self.pending.borrow_mut() = Some(frame);
    }
}
