use std::io;
use std::process::{Command, ExitStatus, Stdio};

use crate::app::types::LaunchOutcome;
use crate::fs_op::Resolver;
use crate::runner::interrupt;

/// Runs a game and reports how it ended.
pub trait Launcher {
    /// Start `game`, block until it exits and classify the result. Never
    /// fails: every problem is an outcome the menu knows how to show.
    fn launch(&mut self, game: &str) -> LaunchOutcome;
}

/// Launches real child processes found through a `Resolver`.
///
/// The child inherits stdin and stdout and writes stderr into the same
/// stdout handle, so it owns the terminal until it exits. No arguments are
/// passed.
pub struct ProcessLauncher<R> {
    resolver: R,
}

impl<R: Resolver> ProcessLauncher<R> {
    pub fn new(resolver: R) -> Self {
        ProcessLauncher { resolver }
    }
}

impl<R: Resolver> Launcher for ProcessLauncher<R> {
    fn launch(&mut self, game: &str) -> LaunchOutcome {
        let Some(path) = self.resolver.resolve(game) else {
            tracing::warn!(game, "game not found at launch time");
            return LaunchOutcome::NotFound;
        };

        let mut cmd = Command::new(&path);
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.arg0(game);
        }
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::from(io::stdout()));

        tracing::info!(game, path = %path.display(), "launching game");
        interrupt::reset();
        let result = cmd.status();
        let interrupted = interrupt::take();
        classify(game, result, interrupted)
    }
}

fn classify(game: &str, result: io::Result<ExitStatus>, interrupted: bool) -> LaunchOutcome {
    match result {
        Ok(status) if interrupted || killed_by_interrupt(&status) => {
            tracing::info!(game, "game interrupted");
            LaunchOutcome::Interrupted
        }
        Ok(status) => {
            if !status.success() {
                tracing::info!(game, code = ?status.code(), "game exited with non-zero status");
            } else {
                tracing::info!(game, "game exited");
            }
            LaunchOutcome::Completed(status.code())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(game, "executable vanished before launch: {}", e);
            LaunchOutcome::NotFound
        }
        Err(e) => {
            tracing::warn!(game, "failed to launch: {}", e);
            LaunchOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(unix)]
fn killed_by_interrupt(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    const SIGINT: i32 = 2;
    status.signal() == Some(SIGINT)
}

#[cfg(not(unix))]
fn killed_by_interrupt(_status: &ExitStatus) -> bool {
    false
}
