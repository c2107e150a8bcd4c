//! Loading indicator.

pub const LOADER_MESSAGE: &str = "AI is analyzing the video...";

// Reveals the loader on submit. The input is made read-only rather than
// disabled so its value is still posted.
const SUBMIT_SCRIPT: &str = r#"<script>
document.getElementById("analyze-form")?.addEventListener("submit", function (event) {
  var form = event.currentTarget;
  var input = form.querySelector("input[name=url]");
  var button = form.querySelector("button[type=submit]");
  if (input) { input.readOnly = true; }
  if (button) { button.disabled = true; button.textContent = "Analyzing..."; }
  document.getElementById("loader")?.removeAttribute("hidden");
  document.querySelector(".results")?.remove();
  document.querySelector(".error")?.remove();
});
</script>"#;

/// Render the spinner, hidden unless `visible`, plus the submit handler.
pub fn loader(visible: bool) -> String {
    let hidden = if visible { "" } else { " hidden" };
    format!(
        r#"<div class="loader" id="loader" role="status"{hidden}>
<div class="spinner"></div>
<p>{message}</p>
</div>
{script}"#,
        hidden = hidden,
        message = LOADER_MESSAGE,
        script = SUBMIT_SCRIPT,
    )
}
