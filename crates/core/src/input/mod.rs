use std::collections::VecDeque;

/// The two keyboard side effects of the piece. Both are idempotent and run
/// between ticks, never concurrently with drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Export the frame currently on screen as a PNG.
    SaveFrame,
    /// Toggle the looping background track.
    ToggleMusic,
}

impl Command {
    /// Maps a pressed key to a command. Case-insensitive; every other key
    /// is ignored.
    pub fn from_key(key: char) -> Option<Command> {
        match key {
            's' | 'S' => Some(Command::SaveFrame),
            'm' | 'M' => Some(Command::ToggleMusic),
            _ => None,
        }
    }
}

/// FIFO of commands pushed by the platform layer as keys arrive and drained
/// by the scheduler between ticks, keeping input off the draw path.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: VecDeque<Command>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// Feeds a raw key press through [`Command::from_key`], queueing the
    /// command when the key is bound to one.
    pub fn push_key(&mut self, key: char) {
        if let Some(command) = Command::from_key(key) {
            self.push(command);
        }
    }

    /// Removes and returns all pending commands in arrival order.
    pub fn drain(&mut self) -> Vec<Command> {
        self.pending.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
