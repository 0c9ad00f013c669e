//! Society Snapshot
//!
//! Everything the data-access layer fetches for one society before
//! handing it to the engine.

use super::plan::{PaymentPlan, PaymentPlanRatio, TowerPlanActivation};
use super::receipt::Receipt;
use super::sale::Sale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocietySnapshot {
    pub society_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ratios: Vec<PaymentPlanRatio>,
    /// Standalone plans (Direct and Tower scoped)
    #[serde(default)]
    pub plans: Vec<PaymentPlan>,
    #[serde(default)]
    pub activations: Vec<TowerPlanActivation>,
    #[serde(default)]
    pub towers: Vec<TowerSnapshot>,
}

impl SocietySnapshot {
    pub fn ratio(&self, ratio_id: i64) -> Option<&PaymentPlanRatio> {
        self.ratios.iter().find(|r| r.id == ratio_id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TowerSnapshot {
    pub tower_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub flats: Vec<FlatSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatSnapshot {
    pub flat_id: i64,
    #[serde(default)]
    pub number: String,
    /// Unsold flats have no sale
    #[serde(default)]
    pub sale: Option<SaleSnapshot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleSnapshot {
    pub sale: Sale,
    #[serde(default)]
    pub receipts: Vec<Receipt>,
}
