//! Small helpers shared by the chat components.

#[cfg(feature = "csr")]
pub mod dom_measure;
pub mod file_size;
pub mod timer_set;
pub mod timestamp;
pub mod upload;
