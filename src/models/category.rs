use serde::Serialize;

/// Closed set of care-event categories.
/// Rows read back from the store with any other category string are
/// quarantined by the row parser instead of flowing into the metrics.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Category {
    MilkFeed,
    BreastFeed,
    StomaBridge,
    BowelMovement,
    ReservoirEmpty,
    BagChange,
    Pumping,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::MilkFeed,
        Category::BreastFeed,
        Category::StomaBridge,
        Category::BowelMovement,
        Category::ReservoirEmpty,
        Category::BagChange,
        Category::Pumping,
    ];

    /// Convert enum → store string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Category::MilkFeed => "milk_feed",
            Category::BreastFeed => "breast_feed",
            Category::StomaBridge => "stoma_bridge",
            Category::BowelMovement => "bowel_movement",
            Category::ReservoirEmpty => "reservoir_empty",
            Category::BagChange => "bag_change",
            Category::Pumping => "pumping",
        }
    }

    /// Convert store string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "milk_feed" => Some(Category::MilkFeed),
            "breast_feed" => Some(Category::BreastFeed),
            "stoma_bridge" => Some(Category::StomaBridge),
            "bowel_movement" => Some(Category::BowelMovement),
            "reservoir_empty" => Some(Category::ReservoirEmpty),
            "bag_change" => Some(Category::BagChange),
            "pumping" => Some(Category::Pumping),
            _ => None,
        }
    }

    /// Accepts the CLI spellings: case-insensitive, dashes or underscores.
    pub fn from_cli_str(s: &str) -> Option<Self> {
        Self::from_db_str(&s.trim().to_lowercase().replace('-', "_"))
    }

    /// Human label for tables and messages.
    pub fn label(&self) -> &'static str {
        match self {
            Category::MilkFeed => "milk feed",
            Category::BreastFeed => "breastfeeding",
            Category::StomaBridge => "stoma bridge",
            Category::BowelMovement => "bowel movement",
            Category::ReservoirEmpty => "reservoir emptying",
            Category::BagChange => "bag change",
            Category::Pumping => "pumping",
        }
    }
}
