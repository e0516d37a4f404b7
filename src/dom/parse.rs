// HTML parsing front end.
//
// html5ever does the heavy lifting and is lenient by construction: malformed
// markup yields a best-effort tree, never an error, so parsing is infallible.
// The RcDom tree the parser produces is copied into the arena in one walk and
// dropped; everything downstream works on `Document` handles only.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use super::{Attribute, Document, NodeId};

/// Parse an HTML string into an arena document.
pub fn parse_html(html: &str) -> Document {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            // The doctype must survive the round trip.
            drop_doctype: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let rcdom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .one(html.as_bytes());

    let mut dom = Document::new();
    let root = dom.root();
    copy_children(&mut dom, root, &rcdom.document);
    dom
}

/// Recursively copy an RcDom subtree under an arena parent.
fn copy_children(dom: &mut Document, parent: NodeId, handle: &Handle) {
    for child in handle.children.borrow().iter() {
        let id = match child.data {
            NodeData::Element {
                ref name,
                ref attrs,
                ..
            } => {
                let attrs = attrs
                    .borrow()
                    .iter()
                    .map(|a| Attribute {
                        name: a.name.clone(),
                        value: a.value.to_string(),
                    })
                    .collect();
                dom.create_element(name.clone(), attrs)
            }
            NodeData::Text { ref contents } => dom.create_text(contents.borrow().to_string()),
            NodeData::Comment { ref contents } => dom.create_comment(contents.to_string()),
            NodeData::Doctype {
                ref name,
                ref public_id,
                ref system_id,
            } => dom.create_doctype(
                name.to_string(),
                public_id.to_string(),
                system_id.to_string(),
            ),
            // Nested documents don't occur; processing instructions carry
            // nothing the output needs.
            NodeData::Document | NodeData::ProcessingInstruction { .. } => continue,
        };
        dom.append(parent, id);
        copy_children(dom, id, child);
    }
}
