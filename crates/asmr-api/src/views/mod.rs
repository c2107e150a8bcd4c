//! Server-rendered HTML for the trigger finder page.
//!
//! Every renderer is a pure function returning a `String`; user and model
//! text is escaped with [`html_escape`] before it is interpolated.

pub mod form;
pub mod loader;
pub mod sources;
pub mod triggers;
pub mod video;

pub use form::url_input_form;
pub use loader::loader;
pub use sources::source_list;
pub use triggers::{trigger_list, TriggerView};
pub use video::video_player;

use crate::services::AnalysisOutcome;

/// Everything the page needs to render one response.
#[derive(Debug, Default)]
pub struct PageState {
    /// Value echoed back into the URL field.
    pub url: String,
    /// Another analysis holds the gate.
    pub busy: bool,
    pub error: Option<String>,
    pub outcome: Option<AnalysisOutcome>,
}

impl PageState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_outcome(outcome: AnalysisOutcome) -> Self {
        Self {
            url: outcome.url.clone(),
            outcome: Some(outcome),
            ..Self::default()
        }
    }

    pub fn with_error(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// Render the full page.
pub fn render_page(state: &PageState) -> String {
    let results = match &state.outcome {
        Some(outcome) => format!(
            r#"<section class="results">
{video}
{triggers}
{sources}
</section>"#,
            video = video_player(&outcome.video_id),
            triggers = trigger_list(&outcome.result.triggers, &outcome.video_id),
            sources = source_list(&outcome.result.sources),
        ),
        None => String::new(),
    };

    let busy_notice = if state.busy {
        r#"<p class="notice">Another video is being analyzed. Please try again in a moment.</p>"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>ASMR Trigger Finder</title>
<style>
*{{box-sizing:border-box;margin:0;padding:0}}
body{{background:#0f172a;color:#e2e8f0;min-height:100vh;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;padding:32px 16px}}
main{{max-width:720px;margin:0 auto;display:flex;flex-direction:column;gap:24px}}
header{{text-align:center}}
h1{{font-size:2.2rem;font-weight:700;color:#c084fc}}
.tagline{{color:#94a3b8;margin-top:8px}}
h2{{font-size:1.5rem;font-weight:600;text-align:center;margin-bottom:16px}}
h3{{font-size:1.2rem;font-weight:600;color:#cbd5e1;text-align:center;margin-bottom:12px}}
.url-form{{display:flex;background:#1e293b;border:1px solid #334155;border-radius:8px}}
.url-form input{{flex:1;padding:16px;background:transparent;border:0;color:#e2e8f0;font-size:1rem}}
.url-form button{{margin:6px;padding:10px 24px;background:#9333ea;color:#fff;font-weight:600;border:0;border-radius:6px;cursor:pointer}}
.url-form button:disabled{{background:#475569;cursor:not-allowed}}
.loader{{display:flex;flex-direction:column;align-items:center;gap:16px;padding:40px}}
.loader[hidden]{{display:none}}
.spinner{{width:48px;height:48px;border:4px solid #c084fc;border-top-color:transparent;border-radius:50%;animation:spin 1s linear infinite}}
@keyframes spin{{to{{transform:rotate(360deg)}}}}
.loader p,.empty,.notice{{color:#94a3b8;text-align:center}}
.error{{background:rgba(127,29,29,.4);border:1px solid #b91c1c;color:#fecaca;padding:16px;border-radius:8px;text-align:center}}
.results{{display:flex;flex-direction:column;gap:32px}}
.player{{position:relative;padding-bottom:56.25%;border-radius:8px;overflow:hidden;border:1px solid #334155}}
.player iframe{{position:absolute;top:0;left:0;width:100%;height:100%;border:0}}
.fallback{{display:block;text-align:center;margin-top:8px;font-size:.85rem;color:#94a3b8}}
ul{{list-style:none;display:flex;flex-direction:column;gap:12px}}
.trigger{{display:flex;justify-content:space-between;align-items:center;background:rgba(30,41,59,.5);border:1px solid #334155;padding:16px;border-radius:8px}}
.trigger-name{{text-transform:capitalize;color:#cbd5e1}}
.timestamp{{background:#334155;color:#cbd5e1;padding:4px 12px;border-radius:999px;font-family:monospace;text-decoration:none}}
.timestamp.unparsed{{opacity:.6}}
.source{{display:block;padding:12px;background:rgba(30,41,59,.5);border:1px solid #334155;border-radius:8px;color:#94a3b8;text-decoration:none;white-space:nowrap;overflow:hidden;text-overflow:ellipsis}}
a:hover{{color:#c084fc}}
</style>
</head>
<body>
<main>
<header>
<h1>ASMR Trigger Finder</h1>
<p class="tagline">Paste a YouTube ASMR video link and jump straight to its triggers.</p>
</header>
{form}
{busy_notice}
{loader}
{error}
{results}
</main>
</body>
</html>"#,
        form = url_input_form(&state.url, state.busy),
        busy_notice = busy_notice,
        loader = loader(false),
        error = state.error.as_deref().map(error_banner).unwrap_or_default(),
        results = results,
    )
}

/// Banner shown above the form after a failed submission.
pub fn error_banner(message: &str) -> String {
    format!(
        r#"<div class="error" role="alert">{}</div>"#,
        html_escape(message)
    )
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Only http(s) links are emitted as `href`s.
pub(crate) fn safe_href(uri: &str) -> String {
    let lower = uri.trim_start().to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        html_escape(uri)
    } else {
        "#".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use asmr_models::{AnalysisResult, GroundingSource, GroundingStrategy, Trigger};

    fn outcome() -> AnalysisOutcome {
        AnalysisOutcome {
            url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            video_id: "dQw4w9WgXcQ".to_string(),
            strategy: GroundingStrategy::SearchGrounded,
            result: AnalysisResult {
                triggers: vec![Trigger::new("tapping", "01:23")],
                sources: vec![GroundingSource::web("https://example.com", "Example")],
            },
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_safe_href() {
        assert_eq!(safe_href("https://a.com/?x=1&y=2"), "https://a.com/?x=1&amp;y=2");
        assert_eq!(safe_href("javascript:alert(1)"), "#");
    }

    #[test]
    fn test_empty_page_has_form_only() {
        let html = render_page(&PageState::empty());
        assert!(html.contains("Enter YouTube ASMR video URL..."));
        assert!(!html.contains("Identified Triggers"));
        assert!(!html.contains(r#"class="error""#));
    }

    #[test]
    fn test_page_with_results() {
        let html = render_page(&PageState::with_outcome(outcome()));
        assert!(html.contains("youtube-nocookie.com/embed/dQw4w9WgXcQ"));
        assert!(html.contains("Identified Triggers"));
        assert!(html.contains("https://www.youtube.com/watch?v=dQw4w9WgXcQ&amp;t=83s"));
        assert!(html.contains("<h3>Sources</h3>"));
        assert!(html.contains(r#"value="https://youtu.be/dQw4w9WgXcQ""#));
    }

    #[test]
    fn test_page_with_error_keeps_form_enabled() {
        let html = render_page(&PageState::with_error(
            "https://youtu.be/dQw4w9WgXcQ",
            "Failed to get triggers from Gemini API.",
        ));
        assert!(html.contains("Failed to get triggers from Gemini API."));
        assert!(html.contains(r#"<button type="submit">Analyze</button>"#));
    }

    #[test]
    fn test_busy_page_disables_form() {
        let state = PageState {
            busy: true,
            ..PageState::empty()
        };
        let html = render_page(&state);
        assert!(html.contains("Another video is being analyzed"));
        assert!(html.contains(r#"<button type="submit" disabled>"#));
    }
}
