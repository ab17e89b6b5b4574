use tracing::{error, info};

use crate::core::error::OperationError;
use crate::core::state::AppState;
use crate::handlers::resume::{resume_paused_torrents, ResumeReport};

/// Mover status observed by a single poll
#[derive(Debug, Clone, PartialEq)]
pub enum MoverStatus {
    Running,
    /// The mover was not running; carries the outcome of the triggered resume
    Stopped(ResumeReport),
}

/// Start the mover in the background. Failure is logged, never propagated.
pub async fn start_mover(state: &AppState) -> bool {
    info!(
        host = %state.remote.host(),
        "Invoking mover on remote host (starting in background)"
    );

    match state.remote.start_mover().await {
        Ok(()) => {
            info!(host = %state.remote.host(), "Mover started in background");
            true
        }
        Err(e) => {
            error!(host = %state.remote.host(), error = %e, "Failed to start mover");
            false
        }
    }
}

/// Check the remote mover once and resume the recorded torrents if it has stopped.
///
/// Meant to be run on an external schedule; a running mover is left alone
/// until the next invocation.
pub async fn poll_mover_and_resume(state: &AppState) -> Result<MoverStatus, OperationError> {
    if let Err(e) = state.remote.check_reachable().await {
        error!(
            host = %state.remote.host(),
            error = %e,
            "Skipping mover status check and resume due to SSH connection failure"
        );
        return Err(e.into());
    }

    info!(host = %state.remote.host(), "Checking if mover is running");

    let running = state.remote.mover_running().await.map_err(|e| {
        error!(host = %state.remote.host(), error = %e, "Failed to check mover status");
        e
    })?;

    if running {
        info!("Mover is still running. Will check again on next scheduled run");
        return Ok(MoverStatus::Running);
    }

    info!("Mover has stopped running. Resuming paused torrents to original states");
    let report = resume_paused_torrents(state).await?;
    Ok(MoverStatus::Stopped(report))
}
