//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The update functions never touch the platform; they describe what should
//! happen and the runtime carries it out.

/// Kind of tactile feedback to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Haptic {
    /// Success notification pattern
    Success,
}

/// Side effects returned by `update`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the screen
    Redraw,
    /// Drop focus from the text inputs (hides the virtual keyboard)
    DismissKeyboard,
    /// Play tactile feedback
    Haptic(Haptic),
    /// Request application exit
    Quit,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Both follow a visible state change (or a declined submit the
            // user should see again)
            Cmd::DismissKeyboard => true,
            Cmd::Haptic(_) => true,
            Cmd::Quit => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten into the list of concrete effects, in execution order
    ///
    /// Nested batches are expanded and `Cmd::None` is dropped.
    pub fn effects(self) -> Vec<Cmd> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<Cmd>) {
        match self {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    cmd.flatten_into(out);
                }
            }
            other => out.push(other),
        }
    }

    /// Check whether this command contains `effect` anywhere
    pub fn contains(&self, effect: &Cmd) -> bool {
        match self {
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.contains(effect)),
            other => other == effect,
        }
    }
}
