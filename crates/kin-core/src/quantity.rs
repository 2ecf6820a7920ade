//! Named scalar physical variables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named scalar physical variable.
///
/// The snake_case serde form doubles as the key used in persisted history
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Speed,
    Time,
    Distance,
    InitialVelocity,
    FinalVelocity,
    Acceleration,
    Height,
}

impl Quantity {
    /// Return the snake_case name used in history records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Speed => "speed",
            Self::Time => "time",
            Self::Distance => "distance",
            Self::InitialVelocity => "initial_velocity",
            Self::FinalVelocity => "final_velocity",
            Self::Acceleration => "acceleration",
            Self::Height => "height",
        }
    }

    /// Human-readable name for prompts and result lines.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Speed => "Speed",
            Self::Time => "Time",
            Self::Distance => "Distance",
            Self::InitialVelocity => "Initial velocity",
            Self::FinalVelocity => "Final velocity",
            Self::Acceleration => "Acceleration",
            Self::Height => "Height",
        }
    }

    /// SI unit label shown next to prompts.
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Speed | Self::InitialVelocity | Self::FinalVelocity => "m/s",
            Self::Time => "s",
            Self::Distance | Self::Height => "m",
            Self::Acceleration => "m/s²",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
