//! Media helpers for the Skim service: WAV trimming and image resizing.
//!
//! Both are in-memory transforms used by the upload endpoints. They
//! share the process with the summarizer but never call into it.

pub mod audio;
pub mod imaging;

pub use audio::trim_wav;
pub use imaging::{resize, ResizedImage};

#[cfg(test)]
mod tests;
