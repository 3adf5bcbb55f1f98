use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use portfolio::{Experience, ExperienceIndex, ExperienceSelector, SectionId};

use super::ViewContext;
use crate::dom::{DomListener, append_all, button, el, external_link, set_flag_class, text_el};

const TAB_CLASS: &str = "experience-tab";

/// Company tabs on one side, the selected role on the other.
pub(crate) fn build_experience(cx: &mut ViewContext<'_>) -> Result<Element, JsValue> {
    let section = el(cx.document, "section", "experience")?;
    section.set_id(SectionId::Experience.as_str());

    let heading = text_el(cx.document, "h2", "section-heading", "> experience")?;
    let reveal = cx.reveals.experience_heading;
    let heading = cx.fade_in("", reveal, &heading)?;

    let selector = ExperienceSelector::new(cx.content.experiences.clone())
        .map_err(crate::utils::js_error)?;

    let layout = el(cx.document, "div", "experience-layout")?;
    let tabs = el(cx.document, "div", "experience-tabs")?;
    tabs.set_attribute("role", "tablist")?;

    let mut buttons: Vec<(ExperienceIndex, Element)> = Vec::with_capacity(selector.len());
    for (index, experience) in selector.options() {
        let tab = button(cx.document, TAB_CLASS, "")?;
        tab.set_attribute("role", "tab")?;
        let company = text_el(cx.document, "span", "tab-company", &experience.company)?;
        let period = text_el(cx.document, "span", "tab-period", &experience.period)?;
        append_all(&tab, &[&company, &period])?;
        let listener = {
            let selector = selector.clone();
            DomListener::new(&tab, "click", move || selector.select(index))?
        };
        cx.mounted.listeners.push(listener);
        tabs.append_child(&tab)?;
        buttons.push((index, tab));
    }

    let panel = el(cx.document, "div", "experience-panel")?;
    render_detail(cx.document, &panel, selector.selected())?;
    highlight(&buttons, selector.selected_index());

    let subscription = {
        let document = cx.document.clone();
        let panel = panel.clone();
        let experiences = cx.content.experiences.clone();
        selector.selection().subscribe(move |&index: &ExperienceIndex| {
            highlight(&buttons, index);
            if let Some(experience) = experiences.get(index.get()) {
                if let Err(err) = render_detail(&document, &panel, experience) {
                    tracing::warn!(?err, "failed to render experience");
                }
            }
        })
    };
    cx.mounted.subscriptions.push(subscription);
    cx.mounted.selectors.push(selector);

    append_all(&layout, &[&tabs, &panel])?;
    let reveal = cx.reveals.experience_selector;
    let layout = cx.fade_in("experience-selector", reveal, &layout)?;
    append_all(&section, &[&heading, &layout])?;
    Ok(section)
}

fn highlight(buttons: &[(ExperienceIndex, Element)], selected: ExperienceIndex) {
    for (index, tab) in buttons {
        let on = *index == selected;
        set_flag_class(tab, TAB_CLASS, "selected", on);
        let _ = tab.set_attribute("aria-selected", if on { "true" } else { "false" });
    }
}

fn render_detail(
    document: &Document,
    panel: &Element,
    experience: &Experience,
) -> Result<(), JsValue> {
    panel.set_inner_html("");

    let company = text_el(document, "h3", "experience-company", &experience.company)?;
    let role = text_el(document, "p", "experience-role", &experience.role)?;
    let period = text_el(document, "p", "experience-period", &experience.period)?;
    let description = text_el(
        document,
        "p",
        "experience-description",
        &experience.description,
    )?;

    let technologies = el(document, "ul", "tag-list")?;
    for technology in &experience.technologies {
        let tag = text_el(document, "li", "tag", technology)?;
        technologies.append_child(&tag)?;
    }

    let link = external_link(document, "learn-more", &experience.link, "learn more →")?;
    append_all(panel, &[&company, &role, &period, &description, &technologies, &link])
}
