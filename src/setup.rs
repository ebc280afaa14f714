use colored::Colorize;

use crate::error::AppError;
use crate::git::{ConfigScope, GitClient, PUSH_BRANCH, REMOTE_NAME};

/// Inputs collected before the setup sequence runs
#[derive(Debug)]
pub struct SetupInputs {
    /// Git username (user.name)
    pub name: String,
    /// Git email address (user.email)
    pub email: String,
    /// Commit message for the pending changes
    pub message: String,
    /// Remote repository URL (SSH or HTTPS)
    pub url: String,
    /// Scope of the identity config write
    pub scope: ConfigScope,
}

/// Runs the full setup sequence: identity, remote, commit, push.
///
/// Each step gates the next; the first failure aborts the run with the
/// diagnostic text the underlying Git command produced. No step is retried.
pub fn run(git: &impl GitClient, inputs: &SetupInputs) -> Result<(), AppError> {
    set_identity(git, &inputs.name, &inputs.email, inputs.scope)?;
    reconcile_remote(git, &inputs.url)?;
    commit_all(git, &inputs.message)?;
    push_upstream(git)?;
    Ok(())
}

/// Persists the Git user name and email at the given scope
pub fn set_identity(
    git: &impl GitClient,
    name: &str,
    email: &str,
    scope: ConfigScope,
) -> Result<(), AppError> {
    git.set_config("user.name", name, scope)?;
    git.set_config("user.email", email, scope)?;
    println!("{} {} <{}>", "git identity set to:".green(), name, email);
    Ok(())
}

/// Points the "origin" remote at `url`, adding it if it does not exist yet.
///
/// Idempotent across repeated runs: the first run adds the remote,
/// subsequent runs update its URL.
pub fn reconcile_remote(git: &impl GitClient, url: &str) -> Result<(), AppError> {
    let remotes = git.list_remotes()?;

    if remotes.iter().any(|remote| remote == REMOTE_NAME) {
        git.set_remote_url(REMOTE_NAME, url)?;
        println!("{} {}", "remote repository url updated to:".green(), url);
    } else {
        git.add_remote(REMOTE_NAME, url)?;
        println!("{} {}", "remote repository url added:".green(), url);
    }

    Ok(())
}

/// Stages all pending changes and commits them with `message`.
///
/// A clean working tree makes `git commit` exit non-zero; that surfaces as
/// a regular `GitCommand` error, no special-casing.
pub fn commit_all(git: &impl GitClient, message: &str) -> Result<(), AppError> {
    git.stage_all()?;
    git.commit(message)?;
    println!("{} {}", "changes committed with message:".green(), message);
    Ok(())
}

/// Pushes to origin/master with upstream tracking
pub fn push_upstream(git: &impl GitClient) -> Result<(), AppError> {
    git.push(REMOTE_NAME, PUSH_BRANCH)?;
    println!("{} {}/{}", "changes pushed to".green(), REMOTE_NAME, PUSH_BRANCH);
    Ok(())
}
