// bindery — document builder around an external converter.
//
// pandoc turns the markup sources into HTML or PDF; the HTML output is then
// restructured and styled in-process to fit the presentation template.
//
// Architecture:
//   sources → pandoc → HTML → html5ever parse → arena Document
//   → restyle (sections, nav, tags, dates) → serialize → index.html

mod error;

pub mod build;
pub mod dom;
pub mod project;
pub mod restyle;
pub mod scaffold;
pub mod watch;

pub use error::{Error, Result};

/// Post-process a converter-produced HTML string: restructure the body into
/// sections, style the navigation and content tags, rewrite date markers.
///
/// Documents without any reserved markers pass through structurally
/// unchanged.
///
/// # Examples
///
/// ```
/// let html = r#"<div id="author-body"><h1 id="intro">Intro</h1><p>text</p></div>"#;
/// let out = bindery::restyle(html).unwrap();
/// assert!(out.contains(r#"<section id="intro">"#));
/// ```
pub fn restyle(html: &str) -> Result<String> {
    let mut dom = dom::parse::parse_html(html);
    restyle::restyle_document(&mut dom);
    dom.to_html()
}
