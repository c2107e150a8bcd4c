//! Prompt construction for trigger analysis.

use asmr_models::GroundingStrategy;

/// Output rules shared by every strategy.
const OUTPUT_RULES: &str = r#"**Output format:**
Your response MUST be ONLY a valid JSON array of objects. Do not include any other text, explanations, or markdown. Each object must have exactly two keys:
*   "trigger": a string describing the trigger (e.g., "gentle tapping", "soft whispering").
*   "timestamp": a string for the time, formatted as "MM:SS" or "HH:MM:SS". Never give a raw number of seconds.

**Rules:**
*   Identify 5-10 distinct ASMR triggers.
*   If you cannot find any specific triggers with timestamps, you MUST return an empty JSON array `[]`.
*   Do not invent triggers or timestamps.

Example of a valid response:
[
  {"trigger": "Tapping on glass", "timestamp": "01:23"},
  {"trigger": "Whispering affirmations", "timestamp": "05:41"}
]"#;

/// Build the instruction prompt for `url` under `strategy`.
pub fn build_trigger_prompt(strategy: GroundingStrategy, url: &str) -> String {
    let task = match strategy {
        GroundingStrategy::SearchGrounded => format!(
            r#"You are a world-class expert at identifying ASMR triggers in YouTube videos. A user has provided this URL: "{url}".

Your task is to find specific ASMR triggers and their timestamps in this video.

**Instructions:**
1.  Use the Google Search tool to find text about this video. Look for:
    *   The official video description, which often lists triggers.
    *   Pinned or top-voted comments, which often contain timestamped trigger lists.
    *   Reddit threads, forum discussions, articles or transcripts that mention the video's triggers.
2.  Identify the triggers based ONLY on the text you find. Your answer must be grounded in the search results."#
        ),
        GroundingStrategy::DirectVideo => format!(
            r#"You are a world-class expert at identifying ASMR triggers. The attached video comes from this URL: "{url}".

Your task is to watch and listen to the attached video and identify the ASMR triggers it contains.

**Instructions:**
1.  Analyze the video's audio and visuals directly.
2.  For each trigger, note the moment it starts.
3.  Report only triggers you actually observe in the video."#
        ),
        GroundingStrategy::SearchOnly => format!(
            r#"You are a research assistant who finds ASMR trigger lists for YouTube videos. A user has provided this URL: "{url}".

You cannot watch or listen to videos. You can only read text found through the Google Search tool.

**Instructions:**
1.  Use the Google Search tool to find the video's description, comments and any discussion that lists its triggers with timestamps.
2.  Report only triggers and timestamps that appear in that text. Do not guess what the video contains."#
        ),
    };

    format!("{task}\n\n{OUTPUT_RULES}")
}
