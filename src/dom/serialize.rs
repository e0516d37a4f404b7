// Arena → HTML string serialization.
//
// The arena tree plugs into html5ever's serializer through the `Serialize`
// trait; `HtmlSerializer` then owns the output rules — text and attribute
// escaping, void elements without close tags, raw text inside script/style.

use std::io;

use html5ever::serialize::{serialize, Serialize, SerializeOpts, Serializer, TraversalScope};

use super::{Document, NodeData, NodeId};
use crate::error::Result;

impl Document {
    /// Serialize the whole document back to an HTML string.
    pub fn to_html(&self) -> Result<String> {
        let mut bytes = Vec::new();
        let root = SerializableNode {
            dom: self,
            id: self.root(),
        };
        serialize(&mut bytes, &root, SerializeOpts::default())?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// One arena node viewed through html5ever's `Serialize` trait.
struct SerializableNode<'a> {
    dom: &'a Document,
    id: NodeId,
}

impl Serialize for SerializableNode<'_> {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        match traversal_scope {
            TraversalScope::IncludeNode => write_node(self.dom, self.id, serializer),
            TraversalScope::ChildrenOnly(_) => {
                for &child in self.dom.children(self.id) {
                    write_node(self.dom, child, serializer)?;
                }
                Ok(())
            }
        }
    }
}

fn write_node<S>(dom: &Document, id: NodeId, serializer: &mut S) -> io::Result<()>
where
    S: Serializer,
{
    match &dom.node(id).data {
        NodeData::Document => {
            for &child in dom.children(id) {
                write_node(dom, child, serializer)?;
            }
            Ok(())
        }
        NodeData::Element(el) => {
            serializer.start_elem(
                el.name.clone(),
                el.attrs.iter().map(|a| (&a.name, a.value.as_str())),
            )?;
            for &child in dom.children(id) {
                write_node(dom, child, serializer)?;
            }
            serializer.end_elem(el.name.clone())
        }
        NodeData::Text(text) => serializer.write_text(text),
        NodeData::Comment(text) => serializer.write_comment(text),
        NodeData::Doctype { name, .. } => serializer.write_doctype(name),
    }
}
