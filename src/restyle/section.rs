// Body restructuring: group content between h1 headings into sections.
//
// Works on a snapshot of the body's direct children. Each h1 opens a new
// `<section>` appended at the end of the body (a `<div class="divider">`
// goes in front of every section after the first); the children that follow
// an h1 are detached from the body and re-appended to the open section, in
// order. The h1 itself stays where it is, stripped down to its text.

use crate::dom::{Document, NodeId};

use super::tags;

/// Restructure the children of the body marker node into sections and style
/// every subtree on the way.
pub(crate) fn sectionize(dom: &mut Document, body: NodeId) {
    let mut current_section: Option<NodeId> = None;

    // The loop detaches and re-appends members of this same child list, so
    // iterate a snapshot, never the live list.
    let children: Vec<NodeId> = dom.children(body).to_vec();

    for child in children {
        if dom.is_element_named(child, "h1") {
            let heading_id = dom.attr(child, "id").unwrap_or_default().to_string();
            if let Some(el) = dom.element_mut(child) {
                el.attrs.clear();
            }

            if current_section.is_some() {
                let divider = dom.create_html_element("div", &[("class", "divider")]);
                dom.append(body, divider);
            }

            let section = dom.create_html_element("section", &[("id", &heading_id)]);
            dom.append(body, section);
            current_section = Some(section);
        } else if let Some(section) = current_section {
            // Pre-existing sections are left as direct children of the body.
            if !dom.is_element_named(child, "section") {
                dom.detach(child);
                dom.append(section, child);
            }
        }

        tags::style_tags(dom, child);
    }
}
