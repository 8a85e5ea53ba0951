//! Test page embedding the widget with manual controls and an event log.

use chatbot_widget::config::WidgetConfig;

pub fn render(widget: &WidgetConfig) -> Result<String, serde_json::Error> {
    let config_json = serde_json::to_string(widget)?.replace('<', "\\u003c");
    Ok(format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>ChatBot Widget dev host</title>
  <style>
    body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; margin: 40px; color: #1f2330; }}
    .controls button {{ margin-right: 8px; padding: 8px 16px; border-radius: 6px; border: 1px solid #5b6fd8; background: #fff; color: #5b6fd8; cursor: pointer; }}
    #status {{ margin: 16px 0; }}
    #log {{ background: #1e1e1e; color: #ddd; font-family: monospace; font-size: 12px; padding: 12px; height: 240px; overflow-y: auto; border-radius: 6px; }}
    .info {{ color: #4fc3f7; }} .success {{ color: #66bb6a; }} .error {{ color: #ef5350; }}
  </style>
</head>
<body>
  <h1>ChatBot Widget</h1>
  <p id="status">Loading...</p>
  <div class="controls">
    <button data-action="open">Open</button>
    <button data-action="close">Close</button>
    <button data-action="toggle">Toggle</button>
    <button data-action="destroy">Destroy</button>
    <button data-action="init">Init</button>
  </div>
  <h2>Log</h2>
  <div id="log"></div>
  <script type="module">
    import init, {{ ChatBotWidget }} from "/pkg/chatbot_widget.js";

    const logEl = document.getElementById("log");
    const statusEl = document.getElementById("status");
    const log = (text, kind = "info") => {{
      const line = document.createElement("div");
      line.className = kind;
      line.textContent = `[${{new Date().toLocaleTimeString()}}] [${{kind.toUpperCase()}}] ${{text}}`;
      logEl.appendChild(line);
      logEl.scrollTop = logEl.scrollHeight;
    }};

    try {{
      await init();
      const widget = new ChatBotWidget({config_json});
      widget.init();
      window.chatWidget = widget;
      statusEl.textContent = "Widget loaded.";
      log("widget initialized", "success");

      for (const button of document.querySelectorAll("[data-action]")) {{
        button.addEventListener("click", () => {{
          const action = button.dataset.action;
          try {{
            widget[action]();
            log(`${{action}} (open: ${{widget.isOpen()}})`, "success");
          }} catch (e) {{
            log(`${{action}} failed: ${{e?.message ?? e}}`, "error");
          }}
        }});
      }}
    }} catch (e) {{
      statusEl.textContent = `Failed to load widget: ${{e?.message ?? e}}`;
      log(`init failed: ${{e?.message ?? e}}`, "error");
    }}
  </script>
</body>
</html>
"##
    ))
}
