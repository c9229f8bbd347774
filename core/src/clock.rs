//! Frame rate limiting.

use std::time::{ Duration, Instant };

/// Caps the number of frames per second by telling the game loop
/// how long to wait after each frame.
#[derive(Clone, Debug)]
pub struct FrameClock {
    frame: Option<Duration>,
    last: Option<Instant>,
}

impl FrameClock {
    /// A clock for the given number of frames per second,
    /// where `0` means no limit.
    pub fn new(fps: u32) -> FrameClock {
        let frame = if fps == 0 {
            None
        } else {
            Some(Duration::from_secs_f64(1. / fps as f64))
        };
        FrameClock { frame, last: None }
    }

    /// Mark the end of a frame at `now`, returning the time to wait
    /// before the next frame may begin.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let wait = match (self.frame, self.last) {
            (Some(frame), Some(last)) => {
                let elapsed = now.saturating_duration_since(last);
                frame.checked_sub(elapsed).unwrap_or_default()
            }
            _ => Duration::default(),
        };
        self.last = Some(now + wait);
        wait
    }
}
