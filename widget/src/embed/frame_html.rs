//! The `srcdoc` document loaded into the chat iframe.
//!
//! The document carries its own stylesheet link and a module script that
//! loads this same bundle and calls `mountChatFrame` with the widget config.
//! If the bundle fails to load, the script reports `CHATBOT_ERROR` to the
//! parent, which swaps in [`error_fallback_html`].

#[cfg(test)]
#[path = "frame_html_test.rs"]
mod frame_html_test;

use crate::config::WidgetConfig;
use crate::error::WidgetError;

use super::MOUNT_ID;

/// JS glue emitted for this crate by `wasm-bindgen --target web`.
pub const BUNDLE_FILE: &str = "chatbot_widget.js";
pub const STYLESHEET_FILE: &str = "chatbot-widget.css";
/// Used when no script on the page points at the bundle.
pub const FALLBACK_DIR: &str = "./dist";

/// URLs the frame document pulls in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPaths {
    pub script: String,
    pub stylesheet: String,
}

impl AssetPaths {
    /// Resolve asset URLs.
    ///
    /// An explicit `asset_base` wins. Otherwise the first page script whose
    /// file name looks like the widget bundle (`chatbot-widget*` or
    /// `chatbot_widget*`) supplies the directory, and the stylesheet is its
    /// sibling. With neither, assets are expected under [`FALLBACK_DIR`].
    pub fn resolve(asset_base: Option<&str>, script_srcs: &[String]) -> Self {
        let dir = asset_base
            .map(|base| base.trim_end_matches('/').to_owned())
            .or_else(|| script_srcs.iter().find_map(|src| bundle_dir(src)))
            .unwrap_or_else(|| FALLBACK_DIR.to_owned());
        Self {
            script: format!("{dir}/{BUNDLE_FILE}"),
            stylesheet: format!("{dir}/{STYLESHEET_FILE}"),
        }
    }
}

fn bundle_dir(src: &str) -> Option<String> {
    let path = src.split(['?', '#']).next()?;
    let (dir, file) = path.rsplit_once('/').unwrap_or(("", path));
    let looks_like_bundle = (file.starts_with("chatbot-widget") || file.starts_with("chatbot_widget"))
        && file.ends_with(".js");
    if !looks_like_bundle {
        return None;
    }
    Some(if dir.is_empty() { ".".to_owned() } else { dir.to_owned() })
}

/// Build the iframe document for `config`.
///
/// # Errors
///
/// Returns [`WidgetError::InvalidConfig`] if the config cannot be serialized.
pub fn frame_document(paths: &AssetPaths, config: &WidgetConfig) -> Result<String, WidgetError> {
    let config_js = script_safe(&serde_json::to_string(config)?);
    let script_js = script_safe(&serde_json::to_string(&paths.script)?);
    let stylesheet = escape_attr(&paths.stylesheet);
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>ChatBot</title>
  <link rel="stylesheet" href="{stylesheet}">
  <style>
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    html, body {{ width: 100%; height: 100%; overflow: hidden; }}
    #{MOUNT_ID} {{ width: 100%; height: 100%; }}
  </style>
</head>
<body>
  <div id="{MOUNT_ID}"></div>
  <script type="module">
    import({script_js}).then(async (bundle) => {{
      await bundle.default();
      bundle.mountChatFrame({config_js});
    }}).catch((err) => {{
      console.error("chat bundle failed to load", err);
      window.parent.postMessage({{ type: "CHATBOT_ERROR" }}, "*");
    }});
  </script>
</body>
</html>
"#
    ))
}

/// Static view shown in the panel when the chat frame cannot start.
pub fn error_fallback_html() -> &'static str {
    r#"<div style="display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100%; width: 100%; background: white; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;">
  <div style="font-size: 48px; color: #ff6b6b;">⚠️</div>
  <p style="color: #ff6b6b; margin-top: 20px;">Failed to load. Please refresh the page.</p>
  <button onclick="location.reload()" style="margin-top: 20px; padding: 10px 20px; background: #5b6fd8; color: white; border: none; border-radius: 8px; cursor: pointer;">Reload</button>
</div>"#
}

/// Keep JSON from opening or closing tags inside the surrounding `<script>`.
/// `<` only ever appears inside JSON strings, where `\u003c` is equivalent.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn escape_attr(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('"', "&quot;").replace('<', "&lt;").replace('>', "&gt;")
}
