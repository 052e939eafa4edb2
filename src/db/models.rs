//! Raw store rows. Every payload column is text: the store is hand-editable
//! (volumes may arrive with comma decimals, flags in Spanish), so typing
//! happens later at the adapter boundary, not here.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEventRow {
    pub id: i64,                   // ⇔ events.id
    pub date: String,              // ⇔ events.date ("YYYY-MM-DD")
    pub time: String,              // ⇔ events.time ("HH:MM")
    pub category: String,          // ⇔ events.category
    pub milk_volume_ml: String,    // ⇔ events.milk_volume_ml
    pub milk_type: String,         // ⇔ events.milk_type
    pub bridged_volume_ml: String, // ⇔ events.bridged_volume_ml
    pub bowel_movement: String,    // ⇔ events.bowel_movement
    pub pumped_volume_ml: String,  // ⇔ events.pumped_volume_ml (added later)
    pub breastfeeding_min: String, // ⇔ events.breastfeeding_min (added later)
    pub source: String,            // ⇔ events.source
    pub created_at: String,        // ⇔ events.created_at
}
