//! Everything the host page injects: element ids, inline chrome styles, the
//! iframe document, and the frame → host message protocol.

pub mod frame_html;
pub mod host_message;
pub mod styles;

/// Panel container appended to the host `<body>`.
pub const CONTAINER_ID: &str = "chatbot-widget-root";
/// Floating launcher button.
pub const LAUNCHER_ID: &str = "chatbot-widget-button";
pub const IFRAME_ID: &str = "chatbot-widget-iframe";
/// Shared `<style>` element with the launcher hover rules and keyframes.
pub const HOST_STYLE_ID: &str = "chatbot-widget-style";
/// Mount point inside the frame document.
pub const MOUNT_ID: &str = "chatbot-root";
