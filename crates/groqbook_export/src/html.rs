//! Markdown to HTML conversion.

use pulldown_cmark::{Options, Parser, html};

/// Stylesheet embedded in the HTML handed to the PDF renderer.
pub const PDF_STYLESHEET: &str = "\
body { font-family: Georgia, 'Times New Roman', serif; font-size: 12pt; line-height: 1.5; margin: 2cm; color: #222; }
h1, h2, h3, h4, h5, h6 { font-family: Helvetica, Arial, sans-serif; color: #111; page-break-after: avoid; }
h1 { font-size: 24pt; border-bottom: 1px solid #ccc; padding-bottom: 4pt; }
h2 { font-size: 18pt; }
h3 { font-size: 14pt; }
table { border-collapse: collapse; width: 100%; margin: 1em 0; }
th, td { border: 1px solid #bbb; padding: 4pt 6pt; text-align: left; }
th { background: #f0f0f0; }
pre { background: #f6f8fa; padding: 8pt; border-radius: 4pt; overflow-x: auto; }
code { font-family: 'DejaVu Sans Mono', Menlo, monospace; font-size: 10pt; }
pre code[class^='language-'] { color: #24292e; }
blockquote { border-left: 3pt solid #ccc; margin-left: 0; padding-left: 10pt; color: #555; }
";

/// Converts markdown to an HTML fragment.
///
/// Tables, footnotes, strikethrough, task lists and fenced code blocks are
/// supported. Fenced blocks with an info string get a `language-*` class.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

/// Wraps an HTML fragment in a minimal document with the PDF stylesheet.
pub fn wrap_html_document(body: &str) -> String {
    format!(
        "<html>\n    <head>\n        <meta charset=\"utf-8\">\n        <style>\n{}        </style>\n    </head>\n    <body>\n{}\n    </body>\n</html>\n",
        PDF_STYLESHEET, body
    )
}
