// src/export/model.rs

use crate::db::models::RawEventRow;
use serde::Serialize;

/// Flat export row. Field order is the store's column order, so the CSV a
/// reader downloads lines up with what they would see in the store itself.
/// Values are exported raw: what sits in the store is what leaves it.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub category: String,
    pub milk_volume_ml: String,
    pub milk_type: String,
    pub bridged_volume_ml: String,
    pub bowel_movement: String,
    pub pumped_volume_ml: String,
    pub breastfeeding_min: String,
    pub source: String,
}

impl From<&RawEventRow> for EventExport {
    fn from(r: &RawEventRow) -> Self {
        Self {
            id: r.id,
            date: r.date.clone(),
            time: r.time.clone(),
            category: r.category.clone(),
            milk_volume_ml: r.milk_volume_ml.clone(),
            milk_type: r.milk_type.clone(),
            bridged_volume_ml: r.bridged_volume_ml.clone(),
            bowel_movement: r.bowel_movement.clone(),
            pumped_volume_ml: r.pumped_volume_ml.clone(),
            breastfeeding_min: r.breastfeeding_min.clone(),
            source: r.source.clone(),
        }
    }
}
