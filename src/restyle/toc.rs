// Navigation styling for the table-of-contents subtree.
//
// Unlike the body tag rules these append to the written slot instead of
// replacing it, and the classes target the Bootstrap nav component.

use crate::dom::{Document, NodeId};

const UL_CLASS: &str = "nav flex-column fixed-column";
const LI_CLASS: &str = "nav-item";
const A_CLASS: &str = "nav-link";

/// Style a navigation subtree rooted at the TOC marker node.
pub(crate) fn style_nav(dom: &mut Document, id: NodeId) {
    if let Some(el) = dom.element_mut(id) {
        let class = match el.tag() {
            "ul" => Some(UL_CLASS),
            "li" => Some(LI_CLASS),
            "a" => Some(A_CLASS),
            _ => None,
        };
        if let Some(class) = class {
            let idx = el.find_or_append_attr("class");
            el.attrs[idx].value.push_str(class);
        }
    }

    let children: Vec<NodeId> = dom.children(id).to_vec();
    for child in children {
        style_nav(dom, child);
    }
}
