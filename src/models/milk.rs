use serde::Serialize;

/// Recognized milk types for feed records. Feeds whose milk type is not one
/// of these are skipped by the aggregator (the volume would have no calorie
/// coefficient to pair with).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum MilkType {
    Maternal,
    Puramino,
    Nutramigen,
}

impl MilkType {
    pub const ALL: [MilkType; 3] = [MilkType::Maternal, MilkType::Puramino, MilkType::Nutramigen];

    pub fn to_db_str(&self) -> &'static str {
        match self {
            MilkType::Maternal => "maternal",
            MilkType::Puramino => "puramino",
            MilkType::Nutramigen => "nutramigen",
        }
    }

    /// Store string → enum. Old sheets carried the Spanish form "materna".
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "maternal" | "materna" => Some(MilkType::Maternal),
            "puramino" => Some(MilkType::Puramino),
            "nutramigen" => Some(MilkType::Nutramigen),
            _ => None,
        }
    }

    pub fn from_cli_str(s: &str) -> Option<Self> {
        Self::from_db_str(&s.trim().to_lowercase())
    }

    pub fn label(&self) -> &'static str {
        match self {
            MilkType::Maternal => "maternal",
            MilkType::Puramino => "Puramino",
            MilkType::Nutramigen => "Nutramigen",
        }
    }
}
