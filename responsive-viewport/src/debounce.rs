use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::js::js_error_message;

/// Trailing-edge debouncer over the browser's `setTimeout`.
///
/// Owns the scheduled task explicitly: `trigger` cancels any pending timer
/// before scheduling a new one, so a burst of events runs the task exactly
/// once, `delay` ms after the burst ends. Dropping (or disposing) the
/// debouncer cancels whatever is still pending, so teardown cannot be
/// followed by a late firing.
pub struct Debouncer {
    window: Window,
    delay_ms: i32,
    pending: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut()>,
}

impl Debouncer {
    pub fn new(window: Window, delay_ms: u32, mut task: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(None));

        let callback = Closure::wrap(Box::new({
            let pending = Rc::clone(&pending);
            move || {
                pending.set(None);
                task();
            }
        }) as Box<dyn FnMut()>);

        Self { window, delay_ms: delay_ms as i32, pending, callback }
    }

    /// Restarts the quiet-period timer.
    pub fn trigger(&self) {
        self.cancel();

        match self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            self.delay_ms,
        ) {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(e) => {
                tracing::error!("failed to schedule debounced task: {}", js_error_message(&e));
            }
        }
    }

    /// Cancels any pending task without running it.
    pub fn dispose(&self) {
        self.cancel();
    }

    fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            self.window.clear_timeout_with_handle(handle);
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
