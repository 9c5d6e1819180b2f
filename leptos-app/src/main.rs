use leptos::prelude::*;
use web_sys::window;

use responsive_viewport::{ViewportOptions, use_responsive_viewport};

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::INFO) // Only show INFO, WARN, ERROR
            .build(),
    );

    leptos::mount::mount_to_body(App);
}

/// Reads the viewport meta tag's current content attribute, if any.
fn current_meta_content() -> String {
    let meta = window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(r#"meta[name="viewport"]"#).ok().flatten());

    match meta.and_then(|el| el.get_attribute("content")) {
        Some(content) => content,
        None => "(no viewport meta tag)".to_string(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Keep the demo page at least 420 logical pixels wide, syncing 100ms
    // after the last resize or orientation change.
    use_responsive_viewport(ViewportOptions { delay: 100, min_width: 420.0 });

    let meta_content = RwSignal::new(String::new());

    Effect::new(move |_| meta_content.set(current_meta_content()));

    view! {
        <div class="container">
            <h1>"Responsive viewport demo"</h1>
            <p>
                "Resize the window below 420px and the viewport meta tag is pinned to "
                <code>"width=420"</code> " with a matching " <code>"maximum-scale"</code> "."
            </p>
            <p>
                "Current content: " <code>{move || meta_content.get()}</code>
            </p>
            <button class="button" on:click=move |_| meta_content.set(current_meta_content())>
                "Refresh"
            </button>
        </div>
    }
}
