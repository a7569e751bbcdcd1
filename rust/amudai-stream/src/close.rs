//! Ordered registry of close handlers and the failure aggregation performed
//! when a stream is closed.

use std::fmt;

use amudai_common::{MultiError, Result, StdErrorBoxed};

/// A registered close handler.
///
/// A handler reports a recoverable failure by returning `Err`. A panic inside a
/// handler is treated as an unrecoverable fault: it unwinds through
/// [`CloseHandlers::run`] and the remaining handlers are not invoked.
pub type CloseHandler = Box<dyn FnOnce() -> std::result::Result<(), StdErrorBoxed>>;

/// An ordered list of close handlers.
#[derive(Default)]
pub struct CloseHandlers {
    handlers: Vec<CloseHandler>,
}

impl CloseHandlers {
    pub fn new() -> CloseHandlers {
        CloseHandlers {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler. Handlers run in the order they were pushed.
    pub fn push<F, E>(&mut self, handler: F)
    where
        F: FnOnce() -> std::result::Result<(), E> + 'static,
        E: Into<StdErrorBoxed>,
    {
        self.handlers
            .push(Box::new(move || -> std::result::Result<(), StdErrorBoxed> {
                handler().map_err(Into::into)
            }));
    }

    /// Moves all handlers of `other` to the end of this registry, keeping
    /// their relative order.
    pub fn append(&mut self, mut other: CloseHandlers) {
        self.handlers.append(&mut other.handlers);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs every handler in registration order.
    ///
    /// A failing handler does not prevent the following ones from running.
    /// Once all handlers have run, every collected failure is reported through
    /// a single [`MultiError`]: one failure keeps its own message, several are
    /// rendered as `multiple errors: <msg1>, <msg2>, `.
    pub fn run(self) -> Result<()> {
        let count = self.handlers.len();
        let mut failures = MultiError::new();
        for (index, handler) in self.handlers.into_iter().enumerate() {
            if let Err(e) = handler() {
                log::trace!("close handler #{index} failed: {e}");
                failures.push(e);
            }
        }
        log::debug!(
            "ran {count} close handler(s), {} failure(s)",
            failures.len()
        );
        failures.into_result()?;
        Ok(())
    }
}

impl fmt::Debug for CloseHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseHandlers")
            .field("len", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn test_run_empty() {
        assert!(CloseHandlers::new().run().is_ok());
    }

    #[test]
    fn test_append_keeps_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut first = CloseHandlers::new();
        let mut second = CloseHandlers::new();
        let recorder = |id: i32| {
            let log = log.clone();
            move || {
                log.borrow_mut().push(id);
                Ok::<_, StdErrorBoxed>(())
            }
        };
        first.push(recorder(1));
        second.push(recorder(2));
        first.push(recorder(3));
        first.append(second);
        assert_eq!(first.len(), 3);
        first.run().unwrap();
        assert_eq!(*log.borrow(), [1, 3, 2]);
    }

    #[test]
    fn test_single_failure_keeps_message() {
        let mut handlers = CloseHandlers::new();
        handlers.push(|| Err("disk detached"));
        handlers.push(|| Ok::<_, &str>(()));
        let err = handlers.run().unwrap_err();
        assert_eq!(err.to_string(), "disk detached");
        assert_eq!(err.close_failures().unwrap().len(), 1);
    }

    #[test]
    fn test_debug_shows_count() {
        let mut handlers = CloseHandlers::new();
        handlers.push(|| Ok::<_, &str>(()));
        assert_eq!(format!("{handlers:?}"), "CloseHandlers { len: 1 }");
    }
}
