//! A Leptos hook that keeps the page's `<meta name="viewport">` tag
//! responsive to the actual window size.
//!
//! While the layout viewport is wider than a configured minimum, the tag is
//! held at `width=device-width`. Once the window shrinks below that minimum,
//! the width is pinned to the minimum and a matching `maximum-scale` is set
//! so the pinned layout still fits the screen. Resize and orientation-change
//! events are debounced; directives other scripts or the page author put on
//! the tag are preserved. The tag is created (and appended to `<head>`) when
//! it does not exist yet.
//!
//! ```no_run
//! use leptos::prelude::*;
//! use responsive_viewport::use_responsive_viewport;
//!
//! #[component]
//! pub fn App() -> impl IntoView {
//!     // Keep the page at least 420 logical pixels wide.
//!     use_responsive_viewport(420.0);
//!
//!     view! { <main>"hello"</main> }
//! }
//! ```

use leptos::prelude::*;

mod binding;
mod content;
mod debounce;
mod js;
mod options;
mod target;

pub use options::{DEFAULT_DELAY_MS, DEFAULT_MIN_WIDTH, ViewportOptions};
pub use target::{DomViewportTarget, TagState, ViewportTarget, sync_viewport};

use binding::ViewportBinding;

/// Binds the responsive viewport behavior for the lifetime of the current
/// component.
///
/// Accepts [`ViewportOptions`] or a bare number (treated as the minimum
/// width in pixels). The viewport is synced immediately on mount and again
/// after each debounced `resize`/`orientationchange` event; everything is
/// torn down when the component is disposed. Outside a browser context this
/// is a no-op.
pub fn use_responsive_viewport(options: impl Into<ViewportOptions>) {
    let options = options.into();
    let binding = StoredValue::new_local(None::<ViewportBinding>);

    Effect::new(move |_| {
        binding.update_value(|slot| {
            // Listeners are installed once per component lifetime.
            if slot.is_none() {
                *slot = ViewportBinding::bind(options);
            }
        });
    });

    on_cleanup(move || binding.update_value(unbind_slot));
}

/// Reactive variant of [`use_responsive_viewport`].
///
/// Whenever the resolved options change, the previous listeners and any
/// pending debounced sync are torn down exactly as on unmount, and a fresh
/// bind cycle runs with the new configuration.
pub fn use_responsive_viewport_reactive(options: Signal<ViewportOptions>) {
    let resolved = Memo::new(move |_| options.get());
    let binding = StoredValue::new_local(None::<ViewportBinding>);

    Effect::new(move |_| {
        let options = resolved.get();
        binding.update_value(|slot| {
            unbind_slot(slot);
            *slot = ViewportBinding::bind(options);
        });
    });

    on_cleanup(move || binding.update_value(unbind_slot));
}

fn unbind_slot(slot: &mut Option<ViewportBinding>) {
    if let Some(previous) = slot.take() {
        previous.unbind();
    }
}
