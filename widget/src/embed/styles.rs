//! Inline styles for the host-page chrome.
//!
//! The launcher and panel live in the embedding page, where the widget's own
//! stylesheet is not loaded, so their look is carried as `style` attributes
//! plus one small injected `<style>` block.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

use crate::config::Corner;

/// Gap between the viewport edge and the launcher or panel.
pub const EDGE_OFFSET_PX: u32 = 20;
/// Bottom offset of the panel for bottom corners, leaving room for the launcher.
pub const PANEL_BOTTOM_OFFSET_PX: u32 = 100;
pub const PANEL_WIDTH_PX: u32 = 400;
pub const PANEL_HEIGHT_PX: u32 = 600;
pub const LAUNCHER_SIZE_PX: u32 = 60;

pub const LAUNCHER_GLYPH: &str = "💬";

pub const HOST_STYLESHEET: &str = "\
@keyframes chatbotSlideIn {
  from { opacity: 0; transform: translateY(20px) scale(0.95); }
  to { opacity: 1; transform: translateY(0) scale(1); }
}
#chatbot-widget-button:hover {
  transform: scale(1.1);
  box-shadow: 0 6px 20px rgba(91, 111, 216, 0.5);
}
#chatbot-widget-button:active {
  transform: scale(0.95);
}
";

pub const FRAME_CSS: &str = "width: 100%; height: 100%; border: none; display: block;";

fn corner_offsets(corner: Corner, vertical_px: u32) -> String {
    let e = EDGE_OFFSET_PX;
    match corner {
        Corner::BottomRight => format!("bottom: {vertical_px}px; right: {e}px;"),
        Corner::BottomLeft => format!("bottom: {vertical_px}px; left: {e}px;"),
        Corner::TopRight => format!("top: {e}px; right: {e}px;"),
        Corner::TopLeft => format!("top: {e}px; left: {e}px;"),
    }
}

/// Panel container, hidden until opened.
pub fn container_css(corner: Corner) -> String {
    format!(
        "position: fixed; z-index: 999999; display: none; animation: chatbotSlideIn 0.3s ease; \
         width: {PANEL_WIDTH_PX}px; height: {PANEL_HEIGHT_PX}px; \
         box-shadow: 0 4px 20px rgba(0, 0, 0, 0.15); border-radius: 16px; overflow: hidden; {}",
        corner_offsets(corner, PANEL_BOTTOM_OFFSET_PX)
    )
}

pub fn launcher_css(corner: Corner) -> String {
    format!(
        "position: fixed; width: {LAUNCHER_SIZE_PX}px; height: {LAUNCHER_SIZE_PX}px; border-radius: 50%; \
         background: linear-gradient(135deg, #5b6fd8 0%, #4a5fc7 100%); \
         box-shadow: 0 4px 12px rgba(91, 111, 216, 0.4); cursor: pointer; z-index: 999998; \
         display: flex; align-items: center; justify-content: center; \
         color: white; font-size: 28px; border: none; transition: all 0.3s ease; {}",
        corner_offsets(corner, EDGE_OFFSET_PX)
    )
}

/// `display` value for the container when shown or hidden.
pub fn panel_display(open: bool) -> &'static str {
    if open { "block" } else { "none" }
}

/// `display` value for the launcher; it hides while the panel is open.
pub fn launcher_display(open: bool) -> &'static str {
    if open { "none" } else { "flex" }
}
