pub mod mover;
pub mod pause;
pub mod resume;

#[cfg(test)]
pub(crate) mod test_helpers;

use crate::core::commands::Command;
use crate::core::error::OperationError;
use crate::core::state::AppState;

/// Run the operation selected on the command line
pub async fn dispatch(command: Command, state: &AppState) -> Result<(), OperationError> {
    match command {
        Command::Pause => pause::pause_torrents(state).await.map(|_| ()),
        Command::Resume => resume::resume_paused_torrents(state).await.map(|_| ()),
        Command::ForceResume => resume::force_resume(state).await.map(|_| ()),
        Command::PollMover => mover::poll_mover_and_resume(state).await.map(|_| ()),
    }
}
