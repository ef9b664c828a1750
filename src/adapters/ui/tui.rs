//! Implements InputPort. Inquire-based interactive menu.
//!
//! Select a file, generate a summary, review the result. Ctrl-C while processing cancels.

use crate::adapters::fs::load_audio_file;
use crate::adapters::ui::progress::submit_with_progress;
use crate::adapters::ui::render::{render_json, render_text, status_line};
use crate::domain::{DomainError, ViewState};
use crate::ports::InputPort;
use crate::usecases::SummarizeService;
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Global inquire theme. Call once before the first prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("?").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new(">").with_fg(Color::LightMagenta));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    SelectFile,
    Generate,
    ShowResult,
    ClearFile,
    Quit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::SelectFile => "Select audio file",
            Self::Generate => "Generate summary",
            Self::ShowResult => "Show last result",
            Self::ClearFile => "Clear selection",
            Self::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Actions offered for the current state. Generate is withheld while loading.
fn menu_actions(view: &ViewState) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::SelectFile];
    if !view.loading {
        actions.push(MenuAction::Generate);
    }
    if view.result.is_some() {
        actions.push(MenuAction::ShowResult);
    }
    if view.selected.is_some() {
        actions.push(MenuAction::ClearFile);
    }
    actions.push(MenuAction::Quit);
    actions
}

/// True when the user backed out of a prompt (Esc / Ctrl-C).
fn is_dismissed(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<SummarizeService>,
    json: bool,
}

impl TuiInputPort {
    pub fn new(service: Arc<SummarizeService>, json: bool) -> Self {
        Self { service, json }
    }

    fn print_result(&self) -> Result<(), DomainError> {
        let view = self.service.snapshot();
        if let Some(result) = &view.result {
            let out = if self.json {
                render_json(result)?
            } else {
                render_text(result)
            };
            println!("\n{}", out);
        }
        Ok(())
    }

    fn print_error(&self) {
        if let Some(msg) = self.service.snapshot().error {
            eprintln!("{}", msg.red());
        }
    }

    async fn select_file(&self) -> Result<(), DomainError> {
        let path = match Text::new("Path to meeting audio:")
            .with_help_message("Upload your meeting audio file (.mp3)")
            .prompt()
        {
            Ok(p) => p,
            Err(e) if is_dismissed(&e) => return Ok(()),
            Err(e) => return Err(DomainError::Ui(e.to_string())),
        };

        match load_audio_file(path.trim()).await {
            Ok(file) => self.service.select_file(file),
            Err(e) => eprintln!("{}", e.to_string().red()),
        }
        Ok(())
    }

    async fn generate(&self) -> Result<(), DomainError> {
        match submit_with_progress(&self.service).await {
            Ok(_) => self.print_result(),
            Err(DomainError::Cancelled(id)) | Err(DomainError::Superseded(id)) => {
                eprintln!("{}", format!("Submission #{} cancelled.", id).yellow());
                Ok(())
            }
            Err(e) => {
                debug!(error = %e, "submission failed");
                self.print_error();
                Ok(())
            }
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let view = self.service.snapshot();
            println!("{}", status_line(&view).dim());

            let action = match Select::new("What next?", menu_actions(&view)).prompt() {
                Ok(a) => a,
                Err(e) if is_dismissed(&e) => break,
                Err(e) => return Err(DomainError::Ui(e.to_string())),
            };

            match action {
                MenuAction::SelectFile => self.select_file().await?,
                MenuAction::Generate => self.generate().await?,
                MenuAction::ShowResult => self.print_result()?,
                MenuAction::ClearFile => self.service.clear_file(),
                MenuAction::Quit => break,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FileInfo;

    #[test]
    fn test_menu_hides_generate_while_loading() {
        let mut view = ViewState::default();
        assert_eq!(
            menu_actions(&view),
            vec![MenuAction::SelectFile, MenuAction::Generate, MenuAction::Quit]
        );

        view.loading = true;
        view.selected = Some(FileInfo {
            file_name: "a.mp3".to_string(),
            mime_type: "audio/mpeg".to_string(),
            size_bytes: 1,
        });
        assert_eq!(
            menu_actions(&view),
            vec![MenuAction::SelectFile, MenuAction::ClearFile, MenuAction::Quit]
        );
    }

    #[test]
    fn test_dismissed_prompts() {
        assert!(is_dismissed(&InquireError::OperationCanceled));
        assert!(is_dismissed(&InquireError::OperationInterrupted));
        assert!(!is_dismissed(&InquireError::NotTTY));
    }
}
