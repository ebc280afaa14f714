use std::process::{Command, Output};

use crate::error::AppError;

/// Symbolic name of the remote this tool manages. The same literal is used
/// for the existence check and for add/set-url, otherwise the decision
/// between the two would be wrong.
pub const REMOTE_NAME: &str = "origin";
/// Branch pushed to on the remote. Kept literal; the current branch name is
/// not detected.
pub const PUSH_BRANCH: &str = "master";

/// Scope of a Git config write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// All repositories of the current user (`--global`)
    Global,
    /// The repository in the current directory only
    Local,
}

/// Git operations used by the setup sequence.
///
/// Git's config store is external, persistent state; going through this
/// trait keeps the sequencing logic testable without a real `git` binary.
pub trait GitClient {
    /// Sets a Git config key at the given scope
    fn set_config(&self, key: &str, value: &str, scope: ConfigScope) -> Result<(), AppError>;
    /// Lists the symbolic names of the configured remotes
    fn list_remotes(&self) -> Result<Vec<String>, AppError>;
    /// Adds a new remote
    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError>;
    /// Updates the URL of an existing remote
    fn set_remote_url(&self, name: &str, url: &str) -> Result<(), AppError>;
    /// Stages every modified, added and deleted path in the working tree
    fn stage_all(&self) -> Result<(), AppError>;
    /// Creates a commit from the staged changes
    fn commit(&self, message: &str) -> Result<(), AppError>;
    /// Pushes to the remote branch, setting upstream tracking
    fn push(&self, remote: &str, branch: &str) -> Result<(), AppError>;
}

/// `GitClient` backed by the system `git` executable
pub struct SystemGit;

impl GitClient for SystemGit {
    fn set_config(&self, key: &str, value: &str, scope: ConfigScope) -> Result<(), AppError> {
        match scope {
            ConfigScope::Global => run_git(&["config", "--global", key, value])?,
            ConfigScope::Local => run_git(&["config", key, value])?,
        };
        Ok(())
    }

    fn list_remotes(&self) -> Result<Vec<String>, AppError> {
        let stdout = run_git(&["remote"])?;
        Ok(parse_remote_names(&stdout))
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), AppError> {
        run_git(&["remote", "add", name, url])?;
        Ok(())
    }

    fn set_remote_url(&self, name: &str, url: &str) -> Result<(), AppError> {
        run_git(&["remote", "set-url", name, url])?;
        Ok(())
    }

    fn stage_all(&self) -> Result<(), AppError> {
        run_git(&["add", "."])?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<(), AppError> {
        run_git(&["commit", "-m", message])?;
        Ok(())
    }

    fn push(&self, remote: &str, branch: &str) -> Result<(), AppError> {
        run_git(&["push", "-u", remote, branch])?;
        Ok(())
    }
}

/// Executes a Git command, returning its stdout
///
/// # Arguments
/// * `args` - Arguments passed to the `git` executable
fn run_git(args: &[&str]) -> Result<String, AppError> {
    let git_command_output: Output = Command::new("git").args(args).output()?;

    if !git_command_output.status.success() {
        let stderr = String::from_utf8(git_command_output.stderr)?.trim().to_string();
        // `git commit` reports "nothing to commit" on stdout, not stderr
        let diagnostic = if stderr.is_empty() {
            String::from_utf8(git_command_output.stdout)?.trim().to_string()
        } else {
            stderr
        };
        return Err(AppError::GitCommand(diagnostic));
    }

    Ok(String::from_utf8_lossy(&git_command_output.stdout).to_string())
}

/// Splits `git remote` output into symbolic remote names
fn parse_remote_names(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
