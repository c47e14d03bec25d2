//! CLI driver: flag parsing and dispatch.

use crate::client::GistClient;
use crate::config::GistConfig;
use crate::editor::EditWorkflow;
use crate::errors::{GistError, GistErrorKind, GistResult};
use crate::output::render_gist;
use crate::types::Gist;
use clap::Parser;
use std::io::{IsTerminal, Read};

/// Command-line interface for gisty.
#[derive(Debug, Parser)]
#[command(name = "gisty", version, about = "Create, show, edit, and list GitHub gists")]
pub struct Cli {
    /// Create a private gist stored under your profile.
    #[arg(long)]
    pub create: bool,

    /// Make the created gist public.
    #[arg(long)]
    pub public: bool,

    /// Create the gist anonymously, without a token.
    #[arg(long)]
    pub anon: bool,

    /// Gist description; left blank when not provided.
    #[arg(long, default_value = "")]
    pub description: String,

    /// Inline gist content; read from stdin when piped and not provided.
    #[arg(long)]
    pub content: Option<String>,

    /// Name of the gist file.
    #[arg(long, default_value = "file1.txt")]
    pub filename: String,

    /// Display the gist with this id.
    #[arg(long, value_name = "ID")]
    pub show: Option<String>,

    /// Open the gist with this id in your editor and save the result.
    #[arg(long, value_name = "ID")]
    pub edit: Option<String>,

    /// List your gists.
    #[arg(long)]
    pub list: bool,
}

/// The single action a CLI invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Create a gist.
    Create,
    /// Show a gist by id.
    Show(String),
    /// Edit a gist by id.
    Edit(String),
    /// List gists.
    List,
}

impl Cli {
    /// Resolves which action the flags select, create first, as in the
    /// original flag precedence. `None` means usage help should be printed.
    pub fn action(&self) -> Option<Action> {
        if self.create {
            return Some(Action::Create);
        }
        if let Some(id) = &self.show {
            return Some(Action::Show(id.clone()));
        }
        if let Some(id) = &self.edit {
            return Some(Action::Edit(id.clone()));
        }
        if self.list {
            return Some(Action::List);
        }
        None
    }

    /// Runs the selected action against the given configuration.
    pub async fn run(&self, action: Action, config: GistConfig) -> GistResult<()> {
        match action {
            Action::Create => self.run_create(config).await,
            Action::Show(id) => self.run_show(config, &id).await,
            Action::Edit(id) => self.run_edit(config, &id).await,
            Action::List => self.run_list(config).await,
        }
    }

    async fn run_create(&self, mut config: GistConfig) -> GistResult<()> {
        let content = self.resolve_content()?;

        if self.anon {
            // Anonymous creation never sends the Authorization header.
            config.token = None;
        } else if !config.has_token() {
            return Err(GistError::missing_auth(format!(
                "Please set the ENV variable ${}.",
                crate::config::TOKEN_ENV
            )));
        }

        let client = GistClient::new(config)?;
        let gist = Gist::new(&self.description, self.public, &self.filename, content);
        let created = client.gists().create(&gist).await?;
        print!("{}", render_gist(&created));
        Ok(())
    }

    async fn run_show(&self, config: GistConfig, id: &str) -> GistResult<()> {
        let client = GistClient::new(config)?;
        let gist = client.gists().show(id).await?;
        print!("{}", render_gist(&gist));
        Ok(())
    }

    async fn run_edit(&self, config: GistConfig, id: &str) -> GistResult<()> {
        let client = GistClient::new(config)?;
        let workflow = EditWorkflow::new(&client);
        let updated = workflow.edit(id).await?;
        print!("{}", render_gist(&updated));
        Ok(())
    }

    async fn run_list(&self, config: GistConfig) -> GistResult<()> {
        let client = GistClient::new(config)?;
        let gists = client.gists().list().await?;
        for gist in &gists {
            print!("{}", render_gist(gist));
        }
        Ok(())
    }

    /// Picks the create content: the `--content` flag wins, otherwise piped
    /// stdin; neither is a user-facing failure.
    fn resolve_content(&self) -> GistResult<String> {
        if let Some(content) = &self.content {
            if !content.is_empty() {
                return Ok(content.clone());
            }
        }

        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            let mut content = String::new();
            stdin
                .lock()
                .read_to_string(&mut content)
                .map_err(|e| GistError::new(
                    GistErrorKind::MissingContent,
                    format!("Failed to read content from stdin: {}", e),
                ))?;
            if !content.is_empty() {
                return Ok(content);
            }
        }

        Err(GistError::new(
            GistErrorKind::MissingContent,
            "Please set your content.",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_precedence() {
        let cli = Cli::parse_from(["gisty", "--create", "--list"]);
        assert_eq!(cli.action(), Some(Action::Create));

        let cli = Cli::parse_from(["gisty", "--show", "abc", "--list"]);
        assert_eq!(cli.action(), Some(Action::Show("abc".into())));

        let cli = Cli::parse_from(["gisty", "--edit", "abc"]);
        assert_eq!(cli.action(), Some(Action::Edit("abc".into())));

        let cli = Cli::parse_from(["gisty", "--list"]);
        assert_eq!(cli.action(), Some(Action::List));

        let cli = Cli::parse_from(["gisty"]);
        assert_eq!(cli.action(), None);
    }

    #[test]
    fn test_default_filename() {
        let cli = Cli::parse_from(["gisty", "--create", "--content", "hi"]);
        assert_eq!(cli.filename, "file1.txt");
        assert!(!cli.public);
        assert!(!cli.anon);
    }

    #[test]
    fn test_inline_content_wins() {
        let cli = Cli::parse_from(["gisty", "--create", "--content", "inline"]);
        assert_eq!(cli.resolve_content().unwrap(), "inline");
    }
}
