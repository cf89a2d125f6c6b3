/// Listener volume with an independent mute flag. The stored level
/// survives muting, so unmuting restores the previous loudness.
#[derive(Debug, Clone, Copy)]
pub struct VolumeControl {
    level: f32,
    muted: bool,
}

/// Loudness bucket the volume indicator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeTier {
    Muted,
    Low,
    Medium,
    High,
}

impl VolumeControl {
    pub fn new(level: f32) -> Self {
        VolumeControl {
            level: level.clamp(0.0, 1.0),
            muted: false,
        }
    }

    /// Effective output gain: zero while muted, the stored level
    /// otherwise.
    pub fn gain(&self) -> f32 {
        match self.muted {
            true => 0.0,
            false => self.level,
        }
    }

    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Raising the level above zero also lifts mute; setting it to
    /// zero leaves the flag alone.
    pub fn set_level(&mut self, level: f32) {
        self.level = level.clamp(0.0, 1.0);
        if self.level > 0.0 {
            self.muted = false;
        }
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn tier(&self) -> VolumeTier {
        let gain = self.gain();

        if gain <= 0.0 {
            VolumeTier::Muted
        } else if gain < 0.3 {
            VolumeTier::Low
        } else if gain < 0.7 {
            VolumeTier::Medium
        } else {
            VolumeTier::High
        }
    }
}
