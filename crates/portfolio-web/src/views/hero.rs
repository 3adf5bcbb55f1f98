use wasm_bindgen::prelude::*;
use web_sys::Element;

use portfolio::{SectionId, TypewriterText};

use super::ViewContext;
use crate::dom::{append_all, el, set_flag_class, text_el};

const CURSOR_CLASS: &str = "cursor";

pub(crate) fn build_hero(cx: &mut ViewContext<'_>) -> Result<Element, JsValue> {
    let section = el(cx.document, "header", "hero")?;
    section.set_id(SectionId::Home.as_str());

    let content = el(cx.document, "div", "hero-content")?;

    let title = el(cx.document, "h1", "hero-title")?;
    let typed = el(cx.document, "span", "typed")?;
    let cursor = el(cx.document, "span", CURSOR_CLASS)?;
    append_all(&title, &[&typed, &cursor])?;
    mount_typewriter(cx, &typed, &cursor)?;

    let tagline = text_el(cx.document, "p", "hero-tagline", &cx.content.profile.tagline)?;

    let links = el(cx.document, "div", "profile-links")?;
    for link in &cx.content.profile.links {
        let anchor = text_el(cx.document, "a", "profile-link", link.kind.label())?;
        anchor.set_attribute("href", &link.href)?;
        anchor.set_attribute("aria-label", link.kind.label())?;
        links.append_child(&anchor)?;
    }

    append_all(&content, &[&title, &tagline, &links])?;
    let reveal = cx.reveals.hero;
    let wrapper = cx.fade_in("hero-reveal", reveal, &content)?;
    section.append_child(&wrapper)?;
    Ok(section)
}

fn mount_typewriter(
    cx: &mut ViewContext<'_>,
    typed: &Element,
    cursor: &Element,
) -> Result<(), JsValue> {
    let mut typewriter = TypewriterText::new(cx.config.typewriter.clone());

    cx.mounted.subscriptions.push({
        let typed = typed.clone();
        typewriter
            .text()
            .subscribe(move |text: &String| typed.set_text_content(Some(text)))
    });

    let cursor_visible = typewriter.cursor_visible();
    set_flag_class(cursor, CURSOR_CLASS, "visible", cursor_visible.get());
    cx.mounted.subscriptions.push({
        let cursor = cursor.clone();
        cursor_visible
            .subscribe(move |&visible| set_flag_class(&cursor, CURSOR_CLASS, "visible", visible))
    });

    typewriter.mount(cx.scheduler, &cx.content.profile.name);
    cx.mounted.typewriters.push(typewriter);
    Ok(())
}
