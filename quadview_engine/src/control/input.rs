/// Directional input for the first-person frustum controller.
///
/// Input delivery (keyboard events, scripted timelines, network...) is up
/// to the caller; the controller only sees the `InputState` it is handed
/// each tick.

use bitflags::bitflags;

bitflags! {
    /// Held directions. Several bits may be active at once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputMask: u8 {
        const ROTATE_LEFT   = 0x01;
        const MOVE_BACKWARD = 0x02;
        const ROTATE_RIGHT  = 0x04;
        const MOVE_FORWARD  = 0x08;
    }
}

impl InputMask {
    /// Conventional key binding: `a`/`s`/`d`/`w` (case-insensitive).
    pub fn from_key(key: char) -> Option<InputMask> {
        match key.to_ascii_lowercase() {
            'a' => Some(InputMask::ROTATE_LEFT),
            's' => Some(InputMask::MOVE_BACKWARD),
            'd' => Some(InputMask::ROTATE_RIGHT),
            'w' => Some(InputMask::MOVE_FORWARD),
            _ => None,
        }
    }
}

/// Currently held directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    mask: InputMask,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with exactly `mask` held
    pub fn from_mask(mask: InputMask) -> Self {
        Self { mask }
    }

    /// Start holding the given directions
    pub fn press(&mut self, mask: InputMask) {
        self.mask |= mask;
    }

    /// Stop holding the given directions
    pub fn release(&mut self, mask: InputMask) {
        self.mask &= !mask;
    }

    /// Release everything
    pub fn clear(&mut self) {
        self.mask = InputMask::empty();
    }

    pub fn mask(&self) -> InputMask {
        self.mask
    }

    pub fn is_held(&self, mask: InputMask) -> bool {
        self.mask.contains(mask)
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
