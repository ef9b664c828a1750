//! Implements InputPort for non-interactive use: load one file, submit, print, exit.

use crate::adapters::fs::load_audio_file;
use crate::adapters::ui::progress::submit_with_progress;
use crate::adapters::ui::render::{render_json, render_text};
use crate::domain::DomainError;
use crate::ports::InputPort;
use crate::usecases::SummarizeService;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

pub struct OneShotInputPort {
    service: Arc<SummarizeService>,
    path: PathBuf,
    json: bool,
}

impl OneShotInputPort {
    pub fn new(service: Arc<SummarizeService>, path: PathBuf, json: bool) -> Self {
        Self {
            service,
            path,
            json,
        }
    }
}

#[async_trait]
impl InputPort for OneShotInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let file = load_audio_file(&self.path).await?;
        self.service.select_file(file);

        match submit_with_progress(&self.service).await {
            Ok(result) => {
                let out = if self.json {
                    render_json(&result)?
                } else {
                    render_text(&result)
                };
                println!("{}", out);
                Ok(())
            }
            Err(e) => {
                if let Some(msg) = self.service.snapshot().error {
                    eprintln!("{}", msg);
                }
                Err(e)
            }
        }
    }
}
