//! Trigger list and the per-trigger view model shared with the JSON API.

use serde::Serialize;
use tracing::warn;

use asmr_models::timestamp::{
    format_seconds_to_timestamp, parse_timestamp_to_seconds, try_parse_timestamp,
};
use asmr_models::youtube::deep_link;
use asmr_models::{Trigger, TriggerTimestamp};

use super::html_escape;

pub const EMPTY_TRIGGERS_MESSAGE: &str =
    "The AI couldn't identify any specific triggers for this video.";

/// A trigger resolved against its video.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerView {
    pub trigger: String,
    /// Timestamp exactly as the model reported it.
    pub timestamp: TriggerTimestamp,
    pub seconds: i64,
    pub display: String,
    pub link: String,
    /// False when the timestamp was not strictly well formed, e.g. `"soon"`
    /// (linked at zero) or `":30"` (linked at 30s).
    pub parsed: bool,
}

impl TriggerView {
    pub fn from_trigger(trigger: &Trigger, video_id: &str) -> Self {
        let seconds = parse_timestamp_to_seconds(&trigger.timestamp);
        let parsed = match try_parse_timestamp(&trigger.timestamp) {
            Ok(_) => true,
            Err(e) => {
                warn!(
                    trigger = %trigger.trigger,
                    timestamp = %trigger.timestamp,
                    seconds,
                    error = %e,
                    "Malformed trigger timestamp"
                );
                false
            }
        };

        Self {
            trigger: trigger.trigger.clone(),
            timestamp: trigger.timestamp.clone(),
            seconds,
            display: format_seconds_to_timestamp(seconds as f64),
            link: deep_link(video_id, seconds),
            parsed,
        }
    }

    pub fn from_triggers(triggers: &[Trigger], video_id: &str) -> Vec<Self> {
        triggers
            .iter()
            .map(|t| Self::from_trigger(t, video_id))
            .collect()
    }
}

/// Render the trigger list, or the empty-state message.
pub fn trigger_list(triggers: &[Trigger], video_id: &str) -> String {
    if triggers.is_empty() {
        return format!(r#"<div class="empty">{}</div>"#, EMPTY_TRIGGERS_MESSAGE);
    }

    let items: String = TriggerView::from_triggers(triggers, video_id)
        .iter()
        .map(render_item)
        .collect();

    format!(
        r#"<div class="triggers">
<h2>Identified Triggers</h2>
<ul>
{}</ul>
</div>"#,
        items
    )
}

fn render_item(view: &TriggerView) -> String {
    let class = if view.parsed {
        "timestamp"
    } else {
        "timestamp unparsed"
    };
    let display = html_escape(&view.display);

    format!(
        r#"<li class="trigger"><span class="trigger-name">{name}</span><a class="{class}" href="{link}" target="_blank" rel="noopener noreferrer" aria-label="Watch video at {display}">{display}</a></li>
"#,
        name = html_escape(&view.trigger),
        class = class,
        link = html_escape(&view.link),
        display = display,
    )
}
