//! Canonical equipment catalog.
//!
//! The closed vocabulary every equipment label is resolved into. The serde
//! spelling of each variant (camelCase) is the wire label the external
//! classifier and generator are told to use, so adding or renaming a variant
//! changes the external contract.

use super::error::LiftError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A canonical piece of gym equipment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum Equipment {
    Barbell,
    SquatRack,
    SmithMachine,
    CableMachine,
    LatPulldown,
    LegPress,
    Dumbbells,
    Kettlebells,
    BenchFlat,
    BenchIncline,
    PullupBar,
    Treadmill,
    Rower,
    Bike,
    StairClimber,
    TrapBar,
    AssistedDipChin,
    PecDeck,
    HackSquat,
    PreacherCurl,
    HipAbductor,
    HipAdductor,
    CalfRaise,
    Landmine,
    Sled,
    PulleySingle,
}

impl Equipment {
    /// Every catalog entry, in catalog order.
    pub const ALL: [Equipment; 26] = [
        Self::Barbell,
        Self::SquatRack,
        Self::SmithMachine,
        Self::CableMachine,
        Self::LatPulldown,
        Self::LegPress,
        Self::Dumbbells,
        Self::Kettlebells,
        Self::BenchFlat,
        Self::BenchIncline,
        Self::PullupBar,
        Self::Treadmill,
        Self::Rower,
        Self::Bike,
        Self::StairClimber,
        Self::TrapBar,
        Self::AssistedDipChin,
        Self::PecDeck,
        Self::HackSquat,
        Self::PreacherCurl,
        Self::HipAbductor,
        Self::HipAdductor,
        Self::CalfRaise,
        Self::Landmine,
        Self::Sled,
        Self::PulleySingle,
    ];

    /// Canonical wire spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Barbell => "barbell",
            Self::SquatRack => "squatRack",
            Self::SmithMachine => "smithMachine",
            Self::CableMachine => "cableMachine",
            Self::LatPulldown => "latPulldown",
            Self::LegPress => "legPress",
            Self::Dumbbells => "dumbbells",
            Self::Kettlebells => "kettlebells",
            Self::BenchFlat => "benchFlat",
            Self::BenchIncline => "benchIncline",
            Self::PullupBar => "pullupBar",
            Self::Treadmill => "treadmill",
            Self::Rower => "rower",
            Self::Bike => "bike",
            Self::StairClimber => "stairClimber",
            Self::TrapBar => "trapBar",
            Self::AssistedDipChin => "assistedDipChin",
            Self::PecDeck => "pecDeck",
            Self::HackSquat => "hackSquat",
            Self::PreacherCurl => "preacherCurl",
            Self::HipAbductor => "hipAbductor",
            Self::HipAdductor => "hipAdductor",
            Self::CalfRaise => "calfRaise",
            Self::Landmine => "landmine",
            Self::Sled => "sled",
            Self::PulleySingle => "pulleySingle",
        }
    }

    /// Equipment that only exists in a commercial gym. Accessories tagged
    /// with it are removed from the pool when training at home.
    pub fn is_machine_only(self) -> bool {
        match self {
            Self::CableMachine | Self::LegPress | Self::LatPulldown => true,
            Self::Barbell
            | Self::SquatRack
            | Self::SmithMachine
            | Self::Dumbbells
            | Self::Kettlebells
            | Self::BenchFlat
            | Self::BenchIncline
            | Self::PullupBar
            | Self::Treadmill
            | Self::Rower
            | Self::Bike
            | Self::StairClimber
            | Self::TrapBar
            | Self::AssistedDipChin
            | Self::PecDeck
            | Self::HackSquat
            | Self::PreacherCurl
            | Self::HipAbductor
            | Self::HipAdductor
            | Self::CalfRaise
            | Self::Landmine
            | Self::Sled
            | Self::PulleySingle => false,
        }
    }

    /// Case-insensitive match against the canonical spelling only.
    pub fn from_canonical(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|eq| eq.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Equipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Equipment {
    type Err = LiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(s.trim()).ok_or_else(|| LiftError::UnknownEquipment(s.to_string()))
    }
}

/// Equipment of a typical commercial gym, used for demos and dry runs.
pub fn sample_gym() -> Vec<Equipment> {
    vec![
        Equipment::SquatRack,
        Equipment::Barbell,
        Equipment::BenchFlat,
        Equipment::CableMachine,
        Equipment::LatPulldown,
        Equipment::Dumbbells,
        Equipment::Treadmill,
        Equipment::LegPress,
        Equipment::PullupBar,
    ]
}
