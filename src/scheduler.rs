//! Frame scheduling for the continuous simulation loop.
//!
//! The simulator never sleeps or spawns threads. It asks the host for one
//! frame at a time and the host answers by calling
//! [`Simulator::on_frame`](crate::simulator::Simulator::on_frame) with the
//! handle it handed out.

/// Identifies one armed frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host-side per-frame primitive, e.g. `requestAnimationFrame` in a browser.
pub trait FrameScheduler {
    /// Arms a single callback for the next display frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels an armed callback. Unknown or already fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// State of the frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

/// Frame source that only fires when told to.
///
/// Used by tests and headless hosts. At most one frame is armed at a time,
/// which mirrors a display loop where every tick re-arms the next one.
#[derive(Debug, Default)]
pub struct ManualFrames {
    next_id: u64,
    armed: Option<FrameHandle>,
}

impl ManualFrames {
    /// The frame that would fire next, if any.
    pub fn pending(&self) -> Option<FrameHandle> {
        self.armed
    }

    /// Disarms and returns the pending frame.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.armed.take()
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.armed = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.armed == Some(handle) {
            self.armed = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique() {
        let mut frames = ManualFrames::default();
        let first = frames.request_frame();
        let second = frames.request_frame();

        assert_ne!(first, second);
        assert_eq!(frames.pending(), Some(second));
    }

    #[test]
    fn fire_disarms() {
        let mut frames = ManualFrames::default();
        let handle = frames.request_frame();

        assert_eq!(frames.fire(), Some(handle));
        assert_eq!(frames.fire(), None);
    }

    #[test]
    fn cancel_ignores_stale_handles() {
        let mut frames = ManualFrames::default();
        let stale = frames.request_frame();
        let current = frames.request_frame();

        frames.cancel_frame(stale);
        assert_eq!(frames.pending(), Some(current));

        frames.cancel_frame(current);
        assert_eq!(frames.pending(), None);
    }

    #[test]
    fn stopped_is_the_initial_state() {
        assert_eq!(RunState::default(), RunState::Stopped);
    }
}
