//! Edge-triggered player input

/// Player intents a front end can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Jump,
    Restart,
    Quit,
}

/// Edges collected since the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub jump: bool,
    pub restart: bool,
    pub quit: bool,
}

/// Turns raw press/release into once-per-press frame input
///
/// A press registers only on the transition from released, so holding a
/// key never repeats a jump.
#[derive(Debug, Default)]
pub struct InputLatch {
    held: FrameInput,
    pending: FrameInput,
}

fn slot(input: &mut FrameInput, action: Action) -> &mut bool {
    match action {
        Action::Jump => &mut input.jump,
        Action::Restart => &mut input.restart,
        Action::Quit => &mut input.quit,
    }
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, action: Action) {
        let held = slot(&mut self.held, action);
        if !*held {
            *held = true;
            *slot(&mut self.pending, action) = true;
        }
    }

    pub fn release(&mut self, action: Action) {
        *slot(&mut self.held, action) = false;
    }

    /// Pending edges for this frame; clears them
    pub fn take(&mut self) -> FrameInput {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_consumed_once() {
        let mut latch = InputLatch::new();
        latch.press(Action::Jump);
        assert!(latch.take().jump);
        assert_eq!(latch.take(), FrameInput::default());
    }

    #[test]
    fn test_held_key_does_not_repeat() {
        let mut latch = InputLatch::new();
        latch.press(Action::Jump);
        latch.take();
        latch.press(Action::Jump);
        assert!(!latch.take().jump);

        latch.release(Action::Jump);
        latch.press(Action::Jump);
        assert!(latch.take().jump);
    }

    #[test]
    fn test_tap_between_frames_still_counts() {
        let mut latch = InputLatch::new();
        latch.press(Action::Restart);
        latch.release(Action::Restart);
        latch.press(Action::Quit);
        let input = latch.take();
        assert!(input.restart && input.quit && !input.jump);
    }
}
