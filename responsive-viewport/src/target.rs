//! The [`ViewportTarget`] capability: where synthesized viewport content goes.
//!
//! Splitting the meta-tag plumbing out of the synthesis logic keeps the sync
//! driver deterministic — tests exercise it against an in-memory target, and
//! the browser build plugs in [`DomViewportTarget`].

use web_sys::Document;

use crate::content::{desired_directives, merge_content};
use crate::js::js_error_message;

/// State of the page's viewport meta tag as seen by a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagState {
    /// No `<meta name="viewport">` element exists.
    Absent,
    /// The tag exists; `None` when it carries no `content` attribute.
    Present(Option<String>),
}

/// Read/write access to the single viewport meta tag.
pub trait ViewportTarget {
    fn read(&self) -> TagState;
    /// Replaces the `content` attribute of the existing tag.
    fn write(&self, content: &str);
    /// Creates the tag with the given content. May quietly do nothing when
    /// the document has nowhere to put it.
    fn create(&self, content: &str);
}

/// Brings the target's viewport meta tag in line with the current width.
///
/// Foreign directives already on the tag survive; the managed `width` and
/// `maximum-scale` directives are replaced. The attribute is only written
/// when the merged value actually differs, so repeated syncs at an unchanged
/// width leave the DOM untouched.
pub fn sync_viewport<T: ViewportTarget>(target: &T, width: f64, min_width: f64) {
    let desired = desired_directives(width, min_width);

    match target.read() {
        TagState::Absent => target.create(&desired.join(",")),
        TagState::Present(current) => {
            let merged = merge_content(current.as_deref(), &desired);
            if current.as_deref() != Some(merged.as_str()) {
                target.write(&merged);
            }
        }
    }
}

const META_SELECTOR: &str = r#"meta[name="viewport"]"#;

/// [`ViewportTarget`] backed by the real DOM.
///
/// Holds on to the `Document` so repeated syncs skip the `window()` lookup.
#[derive(Clone)]
pub struct DomViewportTarget {
    document: Document,
}

impl DomViewportTarget {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Builds a target from the global window, or `None` outside a browser.
    pub fn from_window() -> Option<Self> {
        Some(Self::new(web_sys::window()?.document()?))
    }

    fn query_meta(&self) -> Option<web_sys::Element> {
        self.document.query_selector(META_SELECTOR).ok().flatten()
    }
}

impl ViewportTarget for DomViewportTarget {
    fn read(&self) -> TagState {
        match self.query_meta() {
            Some(meta) => TagState::Present(meta.get_attribute("content")),
            None => TagState::Absent,
        }
    }

    fn write(&self, content: &str) {
        if let Some(meta) = self.query_meta() {
            let _ = meta.set_attribute("content", content);
        }
    }

    fn create(&self, content: &str) {
        let Some(head) = self.document.get_elements_by_tag_name("head").item(0) else {
            tracing::debug!("document has no <head>, not creating viewport meta tag");
            return;
        };

        let meta = match self.document.create_element("meta") {
            Ok(meta) => meta,
            Err(e) => {
                tracing::error!("failed to create viewport meta element: {}", js_error_message(&e));
                return;
            }
        };

        let _ = meta.set_attribute("name", "viewport");
        let _ = meta.set_attribute("content", content);
        let _ = head.append_child(&meta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory stand-in for the DOM meta tag, recording every mutation.
    struct FakeTarget {
        state: RefCell<TagState>,
        writes: RefCell<Vec<String>>,
        creates: RefCell<Vec<String>>,
    }

    impl FakeTarget {
        fn new(state: TagState) -> Self {
            Self { state: RefCell::new(state), writes: RefCell::new(Vec::new()), creates: RefCell::new(Vec::new()) }
        }

        fn content(&self) -> Option<String> {
            match &*self.state.borrow() {
                TagState::Present(content) => content.clone(),
                TagState::Absent => None,
            }
        }
    }

    impl ViewportTarget for FakeTarget {
        fn read(&self) -> TagState {
            self.state.borrow().clone()
        }

        fn write(&self, content: &str) {
            self.writes.borrow_mut().push(content.to_owned());
            *self.state.borrow_mut() = TagState::Present(Some(content.to_owned()));
        }

        fn create(&self, content: &str) {
            self.creates.borrow_mut().push(content.to_owned());
            *self.state.borrow_mut() = TagState::Present(Some(content.to_owned()));
        }
    }

    #[test]
    fn absent_tag_is_created_with_synthesized_content() {
        let target = FakeTarget::new(TagState::Absent);
        sync_viewport(&target, 320.0, 360.0);

        assert_eq!(
            target.creates.borrow().as_slice(),
            ["width=360,maximum-scale=0.8888888888888888"]
        );
        assert!(target.writes.borrow().is_empty());
    }

    #[test]
    fn tag_without_content_attribute_gets_desired_string() {
        let target = FakeTarget::new(TagState::Present(None));
        sync_viewport(&target, 1024.0, 360.0);

        assert_eq!(target.content().as_deref(), Some("width=device-width"));
    }

    #[test]
    fn existing_content_is_merged_not_replaced() {
        let target = FakeTarget::new(TagState::Present(Some(
            "width=device-width,user-scalable=no".to_owned(),
        )));
        sync_viewport(&target, 300.0, 360.0);

        assert_eq!(
            target.content().as_deref(),
            Some("user-scalable=no,width=360,maximum-scale=0.8333333333333334")
        );
    }

    #[test]
    fn repeated_sync_at_same_width_writes_once() {
        let target = FakeTarget::new(TagState::Present(Some("width=device-width".to_owned())));
        sync_viewport(&target, 320.0, 360.0);
        sync_viewport(&target, 320.0, 360.0);

        assert_eq!(target.writes.borrow().len(), 1);
    }

    #[test]
    fn growing_past_min_width_drops_the_scale_directive() {
        let target = FakeTarget::new(TagState::Absent);
        sync_viewport(&target, 320.0, 360.0);
        sync_viewport(&target, 800.0, 360.0);

        assert_eq!(target.content().as_deref(), Some("width=device-width"));
    }

    #[test]
    fn matching_content_is_left_untouched() {
        let target = FakeTarget::new(TagState::Present(Some("width=device-width".to_owned())));
        sync_viewport(&target, 1024.0, 360.0);

        assert!(target.writes.borrow().is_empty());
        assert!(target.creates.borrow().is_empty());
    }
}
