// Shared test helpers for bindery.

/// Wrap body markup in a complete HTML document.
///
/// Deliberately whitespace-free: stray text nodes between body children
/// would be swept into sections like any other content.
pub fn page(body: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>Test</title></head><body>{body}</body></html>")
}

/// A page shaped like rendered template output: a TOC nav, a content div
/// with two chapters, and both date markers in the footer.
pub fn rendered_page() -> String {
    page(
        "<nav id=\"author-toc\"><ul>\
         <li><a href=\"#one\">One</a></li>\
         <li><a href=\"#two\">Two</a></li>\
         </ul></nav>\
         <div id=\"author-body\">\
         <h1 id=\"one\">One</h1><p>first chapter</p>\
         <h1 id=\"two\">Two</h1><p>second chapter</p>\
         </div>\
         <footer><p id=\"author-date\">2024-05-01</p>\
         <span id=\"author-copyright-year\">2024-05-01</span></footer>",
    )
}
