//! Library settings.
//!
//! [`Settings`] carries the tunables that are not part of a member's own
//! record: the rotation period assumed for legacy `"5x1"` records and the UTC
//! offset used to turn stored timestamps back into local calendar days.
//!
//! Settings are an ordinary value passed to the functions that need them.
//! Nothing in the workspace keeps a global copy.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Rotation period of the observed `5x1` pattern (five days on, one off).
pub const DEFAULT_ROTATION_PERIOD: u32 = 6;

/// Tunables for rule construction and record import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Days between successive off days for rotating rules built from
    /// records that do not store a period.
    pub rotation_period: u32,
    /// Offset from UTC, in minutes, of the timezone in which stored
    /// timestamps were written (e.g. `-180` for UTC−3).
    pub utc_offset_minutes: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rotation_period: DEFAULT_ROTATION_PERIOD,
            utc_offset_minutes: 0,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document; missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check that every field is within range.
    pub fn validate(&self) -> Result<()> {
        crate::ensure!(
            self.rotation_period > 0,
            Config,
            "rotation_period must be positive"
        );
        // Real-world offsets lie within UTC−12:00 ..= UTC+14:00.
        crate::ensure!(
            (-12 * 60..=14 * 60).contains(&self.utc_offset_minutes),
            Config,
            "utc_offset_minutes {} out of range [-720, 840]",
            self.utc_offset_minutes
        );
        Ok(())
    }

    /// Return a copy with a different UTC offset.
    pub fn with_utc_offset_minutes(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Return a copy with a different rotation period.
    pub fn with_rotation_period(mut self, period: u32) -> Self {
        self.rotation_period = period;
        self
    }
}
