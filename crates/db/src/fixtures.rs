use chrono::Utc;
use rust_decimal::Decimal;

use matreq_core::domain::request::{
    MaterialCategory, MaterialRequest, RequestId, RequestStatus, UrgencyLevel,
};
use matreq_core::draft::{RequestDraft, DEPARTMENTS, UNITS};

use crate::repositories::{RepositoryError, SqlRequestStore};

pub fn sample_draft() -> RequestDraft {
    RequestDraft {
        worker_name: "Anna Morozova".to_owned(),
        department: DEPARTMENTS[1].to_owned(),
        material_type: MaterialCategory::Paint,
        material_name: "Interior acrylic, white".to_owned(),
        quantity_text: "12".to_owned(),
        unit: UNITS[5].to_owned(),
        urgency: UrgencyLevel::Low,
        description: "hallway repaint".to_owned(),
    }
}

pub fn sample_request() -> MaterialRequest {
    MaterialRequest {
        id: RequestId::generate(),
        worker_name: "Ivan Petrov".to_owned(),
        department: DEPARTMENTS[0].to_owned(),
        material_type: MaterialCategory::Cement,
        material_name: "Portland M500".to_owned(),
        quantity: Decimal::from(40),
        unit: UNITS[1].to_owned(),
        urgency: UrgencyLevel::High,
        description: "foundation pour, section B".to_owned(),
        date_requested: Utc::now(),
        status: RequestStatus::Pending,
    }
}

pub async fn seed_requests(store: &SqlRequestStore, count: usize) -> Result<(), RepositoryError> {
    for n in 0..count {
        let mut request = sample_request();
        request.material_name = format!("{} (lot {})", request.material_name, n + 1);
        store.insert(&request).await?;
    }
    Ok(())
}
