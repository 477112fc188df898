//! Pause/resume/stop signalling for a batch run
//!
//! The control handle only toggles the desired mode; it never touches the
//! run's results or tallies. Signals are carried on a `tokio::sync::watch`
//! channel so the orchestrator can suspend on `changed()` while paused
//! instead of busy-polling, and still observe a stop promptly.

use tokio::sync::watch;

/// Desired execution mode, as signalled by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    /// Proceed with the next item
    Run,
    /// Suspend at the next item boundary
    Pause,
    /// Terminate at the next item boundary; one-way
    Stop,
}

/// Cloneable handle for signalling a running batch
///
/// `stop()` is a one-way transition: pause and resume are ignored once a
/// stop has been signalled.
#[derive(Debug, Clone)]
pub struct BatchControl {
    tx: watch::Sender<ControlSignal>,
}

impl BatchControl {
    /// Create a control handle and the receiver the orchestrator listens on
    pub fn new() -> (Self, watch::Receiver<ControlSignal>) {
        let (tx, rx) = watch::channel(ControlSignal::Run);
        (Self { tx }, rx)
    }

    /// Request suspension at the next item boundary
    pub fn pause(&self) {
        self.tx.send_if_modified(|signal| {
            if *signal == ControlSignal::Run {
                *signal = ControlSignal::Pause;
                true
            } else {
                false
            }
        });
    }

    /// Resume a paused run
    pub fn resume(&self) {
        self.tx.send_if_modified(|signal| {
            if *signal == ControlSignal::Pause {
                *signal = ControlSignal::Run;
                true
            } else {
                false
            }
        });
    }

    /// Request termination; the item in flight is allowed to finish
    pub fn stop(&self) {
        self.tx.send_if_modified(|signal| {
            if *signal == ControlSignal::Stop {
                false
            } else {
                *signal = ControlSignal::Stop;
                true
            }
        });
    }

    /// The most recently signalled mode
    pub fn current(&self) -> ControlSignal {
        *self.tx.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_signal_is_run() {
        let (control, rx) = BatchControl::new();
        assert_eq!(control.current(), ControlSignal::Run);
        assert_eq!(*rx.borrow(), ControlSignal::Run);
    }

    #[test]
    fn test_pause_and_resume() {
        let (control, rx) = BatchControl::new();

        control.pause();
        assert_eq!(*rx.borrow(), ControlSignal::Pause);

        control.resume();
        assert_eq!(*rx.borrow(), ControlSignal::Run);
    }

    #[test]
    fn test_resume_without_pause_is_noop() {
        let (control, rx) = BatchControl::new();
        control.resume();
        assert_eq!(*rx.borrow(), ControlSignal::Run);
    }

    #[test]
    fn test_stop_is_one_way() {
        let (control, rx) = BatchControl::new();

        control.stop();
        assert_eq!(*rx.borrow(), ControlSignal::Stop);

        // No resume after stop
        control.resume();
        assert_eq!(*rx.borrow(), ControlSignal::Stop);
        control.pause();
        assert_eq!(*rx.borrow(), ControlSignal::Stop);
    }

    #[test]
    fn test_stop_while_paused() {
        let (control, rx) = BatchControl::new();
        control.pause();
        control.stop();
        assert_eq!(*rx.borrow(), ControlSignal::Stop);
    }

    #[tokio::test]
    async fn test_changed_wakes_on_resume() {
        let (control, mut rx) = BatchControl::new();
        control.pause();
        rx.borrow_and_update();

        let waiter = tokio::spawn(async move {
            rx.changed().await.unwrap();
            *rx.borrow()
        });

        control.resume();
        assert_eq!(waiter.await.unwrap(), ControlSignal::Run);
    }
}
