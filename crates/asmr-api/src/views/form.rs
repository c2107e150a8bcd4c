//! URL input form.

use super::html_escape;

pub const URL_PLACEHOLDER: &str = "Enter YouTube ASMR video URL...";

/// Render the submission form, disabled while `busy`.
pub fn url_input_form(url: &str, busy: bool) -> String {
    let disabled = if busy { " disabled" } else { "" };
    let label = if busy { "Analyzing..." } else { "Analyze" };

    format!(
        r#"<form class="url-form" id="analyze-form" method="post" action="/">
<input type="url" name="url" value="{url}" placeholder="{placeholder}" aria-label="YouTube video URL" required{disabled}>
<button type="submit"{disabled}>{label}</button>
</form>"#,
        url = html_escape(url),
        placeholder = URL_PLACEHOLDER,
        disabled = disabled,
        label = label,
    )
}
