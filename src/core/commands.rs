// Command-line operation selectors

use crate::core::error::CommandError;

pub const SELECTORS: [&str; 4] = ["-pause", "-resume", "-force-resume", "-force-resume-mover"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pause trigger-state torrents, record them, start the mover
    Pause,
    /// Resume every recorded torrent
    Resume,
    /// Alias of `Resume`; only the recorded torrents are touched, never all
    ForceResume,
    /// Resume once the remote mover is no longer running
    PollMover,
}

impl Command {
    pub fn parse(arg: Option<&str>) -> Result<Self, CommandError> {
        match arg {
            None => Err(CommandError::Missing),
            Some("-pause") => Ok(Command::Pause),
            Some("-resume") => Ok(Command::Resume),
            Some("-force-resume") => Ok(Command::ForceResume),
            Some("-force-resume-mover") => Ok(Command::PollMover),
            Some(other) => Err(CommandError::Invalid(other.to_string())),
        }
    }

    /// Whether the operation talks to the remote host over ssh
    pub fn needs_remote(&self) -> bool {
        matches!(self, Command::Pause | Command::PollMover)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Pause => "-pause",
            Command::Resume => "-resume",
            Command::ForceResume => "-force-resume",
            Command::PollMover => "-force-resume-mover",
        }
    }
}
