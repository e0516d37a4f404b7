// Per-tag presentation rules for body content.
//
// Applied by the sectionizer to every subtree it places. A node matches at
// most one rule, by tag name; the rule value replaces whatever the written
// slot held.

use crate::dom::{Document, NodeId};

const IMG_STYLE: &str = "max-width: 100%;";
const P_STYLE: &str = "text-indent: 20px; text-align: justify;";
const TABLE_CLASS: &str = "table table-bordered";

/// Apply the tag rules to a node and its whole subtree.
pub(crate) fn style_tags(dom: &mut Document, id: NodeId) {
    if let Some(el) = dom.element_mut(id) {
        let rule = match el.tag() {
            "img" => Some(("style", IMG_STYLE)),
            "p" => Some(("style", P_STYLE)),
            "table" => Some(("class", TABLE_CLASS)),
            _ => None,
        };
        if let Some((key, value)) = rule {
            let idx = el.find_or_append_attr(key);
            el.attrs[idx].value = value.to_string();
        }
    }

    let children: Vec<NodeId> = dom.children(id).to_vec();
    for child in children {
        style_tags(dom, child);
    }
}
