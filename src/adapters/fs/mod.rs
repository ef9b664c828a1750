//! Filesystem adapter. Turns a path into a selected file.

pub mod audio_file;

pub use audio_file::{load_audio_file, mime_for_path};
