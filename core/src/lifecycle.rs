//! The phases of a game session.

use log::info;

/// The phase of the game loop.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Phase {
    /// The window and assets are being set up.
    Initializing,
    /// Frames are being drawn.
    Running,
    /// The session is over and the window is to be closed.
    Terminating,
}

/// External requests that affect the phase of the game loop.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Signal {
    /// The window is being closed.
    CloseRequested,
    /// The escape key was pressed.
    Escape,
}

impl Default for Phase {
    fn default() -> Phase {
        Phase::Initializing
    }
}

impl Phase {
    /// Start the game loop, if it has not been started or ended yet.
    pub fn start(self) -> Phase {
        match self {
            Phase::Initializing => {
                info!("Running");
                Phase::Running
            }
            p => p
        }
    }

    pub fn on_signal(self, signal: Signal) -> Phase {
        match (self, signal) {
            (Phase::Terminating, _) => Phase::Terminating,
            (_, Signal::CloseRequested) | (_, Signal::Escape) => {
                info!("Terminating on {:?}", signal);
                Phase::Terminating
            }
        }
    }

    pub fn is_running(self) -> bool {
        self == Phase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions() {
        let p = Phase::default();
        assert_eq!(p, Phase::Initializing);
        assert!(!p.is_running());
        let p = p.start();
        assert!(p.is_running());
        assert_eq!(p.start(), Phase::Running);
        for s in &[Signal::CloseRequested, Signal::Escape] {
            let t = p.on_signal(*s);
            assert_eq!(t, Phase::Terminating);
            assert_eq!(t.start(), Phase::Terminating);
            assert_eq!(t.on_signal(*s), Phase::Terminating);
        }
    }

    #[test]
    fn close_before_start() {
        let p = Phase::Initializing.on_signal(Signal::CloseRequested);
        assert_eq!(p.start(), Phase::Terminating);
    }
}
