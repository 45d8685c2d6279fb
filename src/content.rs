use scraper::Html;

const LINE_BREAKS: [&str; 4] = ["<br>", "<br/>", "<br />", "<p>"];

/// Turn a post's HTML body into a single trimmed line of plain text.
///
/// The result doubles as the display label and the map key for per-post
/// statistics.
pub fn normalize_content(content: &str) -> String {
    let mut marked = content.to_string();
    for tag in LINE_BREAKS {
        marked = marked.replace(tag, "\n");
    }
    let marked = marked.replace("</p>", "");

    let fragment = Html::parse_fragment(&marked);
    let text: String = fragment.root_element().text().collect();

    text.replace(['\n', '\r'], " ").trim().to_string()
}
