// src/interactive.rs
//! Prompt-driven session: the toggles, the text area, the drop zone and the two buttons

use anyhow::Result;
use dialoguer::{Input, Select};
use std::path::PathBuf;

use crate::app_log;
use crate::cli::select_paths;
use crate::core::ResumeBackend;
use crate::render::{render_button, render_shell};
use crate::shell::Shell;
use crate::types::{Mode, UploadAction};

/// One entry of the session menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    SetMode(Mode),
    EditJobDescription,
    SelectFile,
    Press(UploadAction),
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::SetMode(Mode::Single),
        MenuChoice::SetMode(Mode::Bulk),
        MenuChoice::EditJobDescription,
        MenuChoice::SelectFile,
        MenuChoice::Press(UploadAction::Analyze),
        MenuChoice::Press(UploadAction::Rank),
        MenuChoice::Quit,
    ];
}

pub fn menu_label(shell: &Shell, choice: MenuChoice) -> String {
    match choice {
        MenuChoice::SetMode(mode) if mode == shell.mode() => {
            format!("{} (active)", mode.toggle_label())
        }
        MenuChoice::SetMode(mode) => mode.toggle_label().to_string(),
        MenuChoice::EditJobDescription => "Edit job description".to_string(),
        MenuChoice::SelectFile => "Select file".to_string(),
        MenuChoice::Press(action) => render_button(shell.panel(), action),
        MenuChoice::Quit => "Quit".to_string(),
    }
}

/// Split a comma-separated list of paths typed at the prompt
pub fn parse_paths(input: &str) -> Vec<PathBuf> {
    input
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .collect()
}

pub async fn run_interactive<B>(backend: &B) -> Result<bool>
where
    B: ResumeBackend + ?Sized,
{
    let mut shell = Shell::new();

    loop {
        println!("\n{}", render_shell(&shell));

        let labels: Vec<String> = MenuChoice::ALL
            .iter()
            .map(|choice| menu_label(&shell, *choice))
            .collect();
        let index = Select::new()
            .with_prompt("Choose")
            .items(&labels)
            .default(0)
            .interact()?;

        match MenuChoice::ALL[index] {
            MenuChoice::SetMode(mode) => shell.set_mode(mode),
            MenuChoice::EditJobDescription => {
                let text: String = Input::new()
                    .with_prompt("Job description")
                    .with_initial_text(shell.panel().job_description())
                    .allow_empty(true)
                    .interact_text()?;
                shell.panel_mut().set_job_description(text);
            }
            MenuChoice::SelectFile => {
                let raw: String = Input::new()
                    .with_prompt("File path(s), comma-separated")
                    .interact_text()?;
                match select_paths(shell.panel_mut(), &parse_paths(&raw)).await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => println!("{}", e),
                    Err(e) => {
                        app_log!(warn, "Could not read selection: {:#}", e);
                        println!("{:#}", e);
                    }
                }
            }
            MenuChoice::Press(action) => {
                // failures already live in panel state and show up in the next render
                if let Err(e) = shell.panel_mut().trigger(action, backend).await {
                    app_log!(debug, "{} finished with: {}", action, e);
                }
            }
            MenuChoice::Quit => return Ok(true),
        }
    }
}
