// HTML post-processing: restructure and restyle converter output.
//
// The converter emits a flat document whose template carries reserved `id`
// markers. A single pre-order walk dispatches on those markers:
//
//   author-toc            → navigation styling over that subtree
//   author-body           → section restructuring over that subtree
//   author-date           → rewrite of the date text, then normal descent
//   author-copyright-year → rewrite to the year, then normal descent
//
// The TOC and body handlers own their subtrees completely: the walk does not
// descend past those markers itself.

pub(crate) mod date;
pub(crate) mod section;
pub(crate) mod tags;
pub(crate) mod toc;

use crate::dom::{Document, NodeId};

/// Reserved `id` attribute values that activate a processing routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Toc,
    Body,
    Date,
    CopyrightYear,
}

impl Marker {
    fn from_id(id: &str) -> Option<Self> {
        match id {
            "author-toc" => Some(Self::Toc),
            "author-body" => Some(Self::Body),
            "author-date" => Some(Self::Date),
            "author-copyright-year" => Some(Self::CopyrightYear),
            _ => None,
        }
    }
}

/// Walk the whole document and apply every marker's routine in place.
///
/// A document without markers comes back structurally unchanged.
pub fn restyle_document(dom: &mut Document) {
    let root = dom.root();
    dispatch(dom, root);
}

fn dispatch(dom: &mut Document, id: NodeId) {
    let marker = dom.attr(id, "id").and_then(Marker::from_id);
    match marker {
        Some(Marker::Toc) => {
            toc::style_nav(dom, id);
            return;
        }
        Some(Marker::Body) => {
            section::sectionize(dom, id);
            return;
        }
        Some(Marker::Date) => date::rewrite_date(dom, id, date::DateStyle::DayMonthYear),
        Some(Marker::CopyrightYear) => date::rewrite_date(dom, id, date::DateStyle::YearOnly),
        None => {}
    }

    // Snapshot before descending; handlers further down may mutate.
    let children: Vec<NodeId> = dom.children(id).to_vec();
    for child in children {
        dispatch(dom, child);
    }
}
