//! Volume control with mute memory
//!
//! Volume is the slider's 0-100 value applied as a linear gain. Setting the
//! level to zero is a mute; the last explicit nonzero level is remembered so
//! unmuting restores what the user actually had, not a default.

/// Fallback level when no meaningful previous volume exists
pub const DEFAULT_VOLUME: u8 = 80;

/// Volume state: current level, mute flag, and unmute memory
#[derive(Debug, Clone)]
pub struct Volume {
    /// Current level (0-100)
    level: u8,

    /// Mute state; always true when level is 0
    muted: bool,

    /// Last explicit nonzero level, restored on unmute
    previous: u8,
}

impl Volume {
    /// Create a volume controller at `level`
    pub fn new(level: u8) -> Self {
        let level = level.min(100);
        Self {
            level,
            muted: level == 0,
            previous: if level > 0 { level } else { DEFAULT_VOLUME },
        }
    }

    /// Set the level (0-100, clamped)
    ///
    /// Zero mutes and leaves the unmute memory untouched; any nonzero value
    /// unmutes and becomes the new unmute memory.
    pub fn set_level(&mut self, level: u8) {
        let level = level.min(100);
        self.level = level;
        if level == 0 {
            self.muted = true;
        } else {
            self.muted = false;
            self.previous = level;
        }
    }

    /// Current level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Level that unmuting should restore
    pub fn unmute_target(&self) -> u8 {
        if self.previous > 0 {
            self.previous
        } else {
            DEFAULT_VOLUME
        }
    }

    /// Overwrite the unmute memory without changing the level
    ///
    /// Used when restoring a persisted muted state: the output stays at
    /// zero, but the remembered volume comes from the snapshot.
    pub fn remember(&mut self, level: u8) {
        let level = level.min(100);
        if level > 0 {
            self.previous = level;
        }
    }

    /// Linear gain multiplier for the audio output
    pub fn gain(&self) -> f32 {
        f32::from(self.level) / 100.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME)
    }
}
