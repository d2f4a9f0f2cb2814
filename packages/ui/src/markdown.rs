use pulldown_cmark::{html, Options, Parser};

/// Render a sheet description to HTML. Raw HTML in the source is escaped.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES)
        .map(|event| match event {
            pulldown_cmark::Event::Html(raw) | pulldown_cmark::Event::InlineHtml(raw) => {
                pulldown_cmark::Event::Text(raw)
            }
            other => other,
        });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
