use serde::{Deserialize, Serialize};

use crate::error::FarmError;

/// Crop growth stage. Stages are ordered and double as 1-based indices into
/// per-stage resource requirement arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GrowthStage {
    Vegetative,
    Reproductive,
    Ripening,
}

impl GrowthStage {
    /// All stages in order.
    pub const ALL: [GrowthStage; 3] = [
        GrowthStage::Vegetative,
        GrowthStage::Reproductive,
        GrowthStage::Ripening,
    ];

    /// 1-based stage id.
    pub fn id(&self) -> u8 {
        match self {
            GrowthStage::Vegetative => 1,
            GrowthStage::Reproductive => 2,
            GrowthStage::Ripening => 3,
        }
    }

    /// Look up a stage by its 1-based id.
    pub fn from_id(id: u8) -> Result<Self, FarmError> {
        match id {
            1 => Ok(GrowthStage::Vegetative),
            2 => Ok(GrowthStage::Reproductive),
            3 => Ok(GrowthStage::Ripening),
            _ => Err(FarmError::ParseError(format!(
                "Growth stage id must be 1, 2, or 3, got {id}"
            ))),
        }
    }

    /// 0-based index into per-stage requirement arrays.
    pub fn requirement_index(&self) -> usize {
        (self.id() - 1) as usize
    }

    /// Short description of what happens during the stage.
    pub fn description(&self) -> &'static str {
        match self {
            GrowthStage::Vegetative => {
                "Initial growth stage focused on leaf and stem development"
            }
            GrowthStage::Reproductive => {
                "Middle stage with flowering and early fruit/grain formation"
            }
            GrowthStage::Ripening => {
                "Final stage with fruit/grain maturation before harvest"
            }
        }
    }
}

impl From<GrowthStage> for u8 {
    fn from(stage: GrowthStage) -> u8 {
        stage.id()
    }
}

impl TryFrom<u8> for GrowthStage {
    type Error = FarmError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        GrowthStage::from_id(id)
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GrowthStage::Vegetative => write!(f, "Vegetative"),
            GrowthStage::Reproductive => write!(f, "Reproductive"),
            GrowthStage::Ripening => write!(f, "Ripening"),
        }
    }
}

impl std::str::FromStr for GrowthStage {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vegetative" | "1" => Ok(GrowthStage::Vegetative),
            "reproductive" | "2" => Ok(GrowthStage::Reproductive),
            "ripening" | "3" => Ok(GrowthStage::Ripening),
            _ => Err(FarmError::ParseError(format!(
                "Unknown growth stage: '{s}'"
            ))),
        }
    }
}
