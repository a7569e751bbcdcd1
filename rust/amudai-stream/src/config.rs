//! Execution mode flags carried by every stream.

/// Execution mode of a [`Stream`](crate::Stream).
///
/// The flags are declarative only: every operation runs sequentially and in
/// encounter order regardless of the mode. They are tracked so that callers
/// can query what was requested, and are carried unchanged through every
/// intermediate operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExecutionMode {
    /// Whether parallel execution was requested.
    pub parallel: bool,

    /// Whether the encounter order was declared significant.
    pub ordered: bool,
}

impl ExecutionMode {
    /// Sequential, ordered execution. This is the default mode.
    pub const SEQUENTIAL: ExecutionMode = ExecutionMode {
        parallel: false,
        ordered: true,
    };

    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    pub fn with_parallel(self, parallel: bool) -> ExecutionMode {
        ExecutionMode { parallel, ..self }
    }

    pub fn with_ordered(self, ordered: bool) -> ExecutionMode {
        ExecutionMode { ordered, ..self }
    }
}

impl Default for ExecutionMode {
    fn default() -> Self {
        ExecutionMode::SEQUENTIAL
    }
}
