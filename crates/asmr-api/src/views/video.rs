//! Embedded video player.

use asmr_models::youtube::{embed_url, watch_url};

use super::html_escape;

/// Render the privacy-enhanced embed with a direct YouTube fallback link.
pub fn video_player(video_id: &str) -> String {
    format!(
        r#"<div class="video">
<h2>Analyzed Video</h2>
<div class="player">
<iframe src="{embed}" title="YouTube video player" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share" allowfullscreen></iframe>
</div>
<a class="fallback" href="{watch}" target="_blank" rel="noopener noreferrer">Playback issues? Watch on YouTube</a>
</div>"#,
        embed = html_escape(&embed_url(video_id)),
        watch = html_escape(&watch_url(video_id)),
    )
}
