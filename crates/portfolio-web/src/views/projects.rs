use wasm_bindgen::prelude::*;
use web_sys::Element;

use portfolio::SectionId;

use super::ViewContext;
use crate::dom::{append_all, el, external_link, text_el};

pub(crate) fn build_projects(cx: &mut ViewContext<'_>) -> Result<Element, JsValue> {
    let section = el(cx.document, "section", "projects")?;
    section.set_id(SectionId::Projects.as_str());

    let heading = text_el(cx.document, "h2", "section-heading", "> projects")?;
    let reveal = cx.reveals.projects_heading;
    let heading = cx.fade_in("", reveal, &heading)?;

    let grid = el(cx.document, "div", "project-grid")?;
    let content = cx.content.clone();
    for (index, project) in content.projects.iter().enumerate() {
        let card = el(cx.document, "article", "project-card")?;
        let title = text_el(cx.document, "h3", "project-title", &project.title)?;
        let description = text_el(cx.document, "p", "project-description", &project.description)?;
        let tags = el(cx.document, "ul", "tag-list")?;
        for tag in &project.tags {
            let item = text_el(cx.document, "li", "tag", tag)?;
            tags.append_child(&item)?;
        }
        let link = external_link(cx.document, "project-link", &project.link, "view project →")?;
        append_all(&card, &[&title, &description, &tags, &link])?;

        let reveal = cx.reveals.project_card(index);
        let wrapper = cx.fade_in("", reveal, &card)?;
        grid.append_child(&wrapper)?;
    }

    append_all(&section, &[&heading, &grid])?;
    Ok(section)
}
