//! Small DOM building helpers.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget};

use portfolio::{RevealFrame, RevealTransition};

/// An event listener that is removed from its target when dropped.
pub(crate) struct DomListener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl DomListener {
    pub(crate) fn new(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut()>::new(callback);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub(crate) fn el(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

pub(crate) fn text_el(
    document: &Document,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let element = el(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// An anchor that opens in a new tab.
pub(crate) fn external_link(
    document: &Document,
    class: &str,
    href: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let link = text_el(document, "a", class, text)?;
    link.set_attribute("href", href)?;
    link.set_attribute("target", "_blank")?;
    link.set_attribute("rel", "noopener noreferrer")?;
    Ok(link)
}

pub(crate) fn button(document: &Document, class: &str, label: &str) -> Result<Element, JsValue> {
    let button = text_el(document, "button", class, label)?;
    button.set_attribute("type", "button")?;
    Ok(button)
}

pub(crate) fn append_all(parent: &Element, children: &[&Element]) -> Result<(), JsValue> {
    for child in children {
        parent.append_child(child)?;
    }
    Ok(())
}

/// `base` plus `flag` when `on`.
pub(crate) fn set_flag_class(element: &Element, base: &str, flag: &str, on: bool) {
    if on {
        element.set_class_name(&format!("{base} {flag}"));
    } else {
        element.set_class_name(base);
    }
}

pub(crate) fn reveal_style(frame: RevealFrame, transition: RevealTransition) -> String {
    format!(
        "opacity: {}; transform: translate({}px, {}px); transition: all {}ms ease; transition-delay: {}ms;",
        frame.opacity,
        frame.offset_x,
        frame.offset_y,
        transition.duration.as_millis(),
        transition.delay.as_millis(),
    )
}
