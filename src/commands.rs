//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// Side effects requested by `update`, executed by the runtime host
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the panel from the current state
    Redraw,
    /// Write the panel state to the session file
    PersistState,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Check whether this command (or any batched child) requests a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_redraw),
            Cmd::None | Cmd::PersistState => false,
        }
    }

    /// Check whether this command (or any batched child) asks to persist state
    pub fn needs_persist(&self) -> bool {
        match self {
            Cmd::PersistState => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_persist),
            Cmd::None | Cmd::Redraw => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_flags() {
        let cmd = Cmd::Batch(vec![Cmd::Redraw, Cmd::PersistState]);
        assert!(cmd.needs_redraw());
        assert!(cmd.needs_persist());

        assert!(!Cmd::None.needs_redraw());
        assert!(!Cmd::Redraw.needs_persist());
    }
}
