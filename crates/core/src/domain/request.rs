use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(pub Uuid);

impl RequestId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialCategory {
    Cement,
    Brick,
    Concrete,
    Timber,
    Steel,
    Insulation,
    Paint,
    Other,
}

impl MaterialCategory {
    pub const ALL: [MaterialCategory; 8] = [
        MaterialCategory::Cement,
        MaterialCategory::Brick,
        MaterialCategory::Concrete,
        MaterialCategory::Timber,
        MaterialCategory::Steel,
        MaterialCategory::Insulation,
        MaterialCategory::Paint,
        MaterialCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MaterialCategory::Cement => "Cement",
            MaterialCategory::Brick => "Brick",
            MaterialCategory::Concrete => "Concrete",
            MaterialCategory::Timber => "Timber",
            MaterialCategory::Steel => "Steel",
            MaterialCategory::Insulation => "Insulation",
            MaterialCategory::Paint => "Paint",
            MaterialCategory::Other => "Other",
        }
    }
}

impl Default for MaterialCategory {
    fn default() -> Self {
        MaterialCategory::Cement
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    pub const ALL: [UrgencyLevel; 4] = [
        UrgencyLevel::Low,
        UrgencyLevel::Medium,
        UrgencyLevel::High,
        UrgencyLevel::Critical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "Low",
            UrgencyLevel::Medium => "Medium",
            UrgencyLevel::High => "High",
            UrgencyLevel::Critical => "Critical",
        }
    }
}

impl Default for UrgencyLevel {
    fn default() -> Self {
        UrgencyLevel::Medium
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Fulfilled,
    Cancelled,
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Pending
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRequest {
    pub id: RequestId,
    pub worker_name: String,
    pub department: String,
    pub material_type: MaterialCategory,
    pub material_name: String,
    pub quantity: Decimal,
    pub unit: String,
    pub urgency: UrgencyLevel,
    pub description: String,
    pub date_requested: DateTime<Utc>,
    pub status: RequestStatus,
}
