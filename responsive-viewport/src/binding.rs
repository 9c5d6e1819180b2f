use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::debounce::Debouncer;
use crate::options::ViewportOptions;
use crate::target::{DomViewportTarget, sync_viewport};

/// Events that should re-run the viewport sync.
const BOUND_EVENTS: [&str; 2] = ["resize", "orientationchange"];

/// An active viewport binding: listeners attached, debouncer armed.
///
/// Created by [`bind`](ViewportBinding::bind) and torn down by
/// [`unbind`](ViewportBinding::unbind); there are no other states.
pub(crate) struct ViewportBinding {
    window: Window,
    debouncer: Rc<Debouncer>,
    listener: Closure<dyn FnMut()>,
}

impl ViewportBinding {
    /// Runs an initial sync, then installs the debounced listeners.
    ///
    /// Returns `None` outside a browser context, where there is no viewport
    /// to manage.
    pub(crate) fn bind(options: ViewportOptions) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;

        let min_width = options.min_width;
        let sync = move || {
            let Some(root) = document.document_element() else { return };
            let target = DomViewportTarget::new(document.clone());
            sync_viewport(&target, f64::from(root.client_width()), min_width);
        };

        sync();

        let debouncer = Rc::new(Debouncer::new(window.clone(), options.delay, sync));

        let listener = Closure::wrap(Box::new({
            let debouncer = Rc::clone(&debouncer);
            move || debouncer.trigger()
        }) as Box<dyn FnMut()>);

        for event in BOUND_EVENTS {
            let _ = window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }

        Some(Self { window, debouncer, listener })
    }

    /// Removes the listeners and cancels any pending debounced sync.
    pub(crate) fn unbind(self) {
        for event in BOUND_EVENTS {
            let _ = self.window.remove_event_listener_with_callback(event, self.listener.as_ref().unchecked_ref());
        }
        self.debouncer.dispose();
    }
}
