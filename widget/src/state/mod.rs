//! Frame-side reactive state.
//!
//! DESIGN
//! ======
//! Each struct is plain data with synchronous update methods; the chat tree
//! wraps them in `RwSignal`s provided via context. Timers and DOM access stay
//! in the components so everything here is testable natively.

pub mod chat;
pub mod emoji;
pub mod ui;
