//! meeting-summarizer: upload meeting audio to a summarization backend, with Hexagonal Architecture.

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
