//! Grounding source list.

use asmr_models::GroundingSource;

use super::{html_escape, safe_href};

/// Render sources that have both a URI and a title; empty when none do.
pub fn source_list(sources: &[GroundingSource]) -> String {
    let items: Vec<String> = sources
        .iter()
        .filter_map(GroundingSource::link)
        .map(|(uri, title)| {
            format!(
                r#"<li><a class="source" href="{}" target="_blank" rel="noopener noreferrer">{}</a></li>"#,
                safe_href(uri),
                html_escape(title)
            )
        })
        .collect();

    if items.is_empty() {
        return String::new();
    }

    format!(
        r#"<div class="sources">
<h3>Sources</h3>
<ul>
{}
</ul>
</div>"#,
        items.join("\n")
    )
}
