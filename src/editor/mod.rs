//! Edit workflow: round-trip gist content through an external editor.

use crate::client::GistClient;
use crate::errors::{GistError, GistErrorKind, GistResult};
use crate::types::Gist;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tempfile::{Builder, NamedTempFile};
use tokio::process::Command;
use tracing::debug;

/// Capability to run an editor on a file: inherit the terminal's standard
/// streams and block until the process exits.
///
/// The workflow depends on this trait rather than spawning processes
/// directly, so tests can substitute a fake that rewrites the file.
#[async_trait]
pub trait EditorLauncher: Send + Sync {
    /// Runs `program` on `path` and waits for it to exit.
    ///
    /// Fails when the process cannot be spawned or exits with a non-zero
    /// status.
    async fn launch(&self, program: &str, path: &Path) -> GistResult<()>;
}

/// Launches the editor as a real child process with inherited stdio.
#[derive(Debug, Default)]
pub struct SystemEditor;

#[async_trait]
impl EditorLauncher for SystemEditor {
    async fn launch(&self, program: &str, path: &Path) -> GistResult<()> {
        let status = Command::new(program)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                GistError::new(
                    GistErrorKind::EditorLaunchFailed,
                    format!("Failed to launch editor {}: {}", program, e),
                )
            })?;

        if !status.success() {
            return Err(GistError::new(
                GistErrorKind::EditorFailed,
                format!("Editor {} exited with status {}", program, status),
            ));
        }

        Ok(())
    }
}

/// Workflow that fetches a gist, opens its content in the configured
/// editor, and submits the edited content as an update.
pub struct EditWorkflow<'a> {
    client: &'a GistClient,
    launcher: Box<dyn EditorLauncher>,
}

impl<'a> EditWorkflow<'a> {
    /// Creates a workflow that spawns the real system editor.
    pub fn new(client: &'a GistClient) -> Self {
        Self::with_launcher(client, Box::new(SystemEditor))
    }

    /// Creates a workflow with a custom editor launcher.
    pub fn with_launcher(client: &'a GistClient, launcher: Box<dyn EditorLauncher>) -> Self {
        Self { client, launcher }
    }

    /// Edits the gist with the given id.
    ///
    /// Fetches the gist, writes the lexicographically first file's content
    /// to a temp file, runs the editor on it, reads the result back, and
    /// PATCHes an update that preserves the original description and
    /// visibility and carries the complete file map. Any failure aborts the
    /// workflow without retry; the temp file is removed on every exit path.
    pub async fn edit(&self, id: &str) -> GistResult<Gist> {
        let original = self.client.gists().show(id).await?;

        let (filename, file) = original.first_file().ok_or_else(|| {
            GistError::not_found(format!("Gist {} has no files to edit", id))
        })?;
        let filename = filename.to_string();
        debug!(%id, %filename, "editing gist file");

        // Deleted on drop, whether the editor or the update fails.
        let temp = self.write_temp_file(&file.content)?;

        self.launcher
            .launch(&self.client.config().editor, temp.path())
            .await?;

        let content = tokio::fs::read_to_string(temp.path()).await.map_err(|e| {
            GistError::temp_file("Failed to read edited content back", e)
        })?;

        let mut update = Gist {
            description: original.description.clone(),
            public: original.public,
            files: original.files.clone(),
            ..Default::default()
        };
        if let Some(edited) = update.files.get_mut(&filename) {
            edited.content = content;
        }

        self.client.gists().update(id, &update).await
    }

    fn write_temp_file(&self, content: &str) -> GistResult<NamedTempFile> {
        let temp = Builder::new()
            .prefix("gisty")
            .tempfile()
            .map_err(|e| GistError::temp_file("Failed to create temp file", e))?;

        std::fs::write(temp.path(), content)
            .map_err(|e| GistError::temp_file("Failed to write temp file", e))?;

        Ok(temp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_system_editor_launch_failure() {
        let editor = SystemEditor;
        let err = editor
            .launch("definitely-not-a-real-editor-binary", Path::new("/tmp/x"))
            .await
            .unwrap_err();

        assert_eq!(*err.kind(), GistErrorKind::EditorLaunchFailed);
    }

    #[tokio::test]
    async fn test_system_editor_nonzero_exit() {
        let editor = SystemEditor;
        let err = editor.launch("false", Path::new("/tmp/x")).await.unwrap_err();

        assert_eq!(*err.kind(), GistErrorKind::EditorFailed);
    }

    #[tokio::test]
    async fn test_system_editor_success() {
        let editor = SystemEditor;
        assert!(editor.launch("true", Path::new("/tmp/x")).await.is_ok());
    }
}
