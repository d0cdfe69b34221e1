use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::request::{
    MaterialCategory, MaterialRequest, RequestId, RequestStatus, UrgencyLevel,
};
use crate::errors::SubmitError;
use crate::store::RequestStore;

pub const DEPARTMENTS: [&str; 5] =
    ["Construction", "Finishing", "Electrical", "Plumbing", "Roofing"];

pub const UNITS: [&str; 8] = ["pcs", "kg", "m", "m2", "m3", "l", "pack", "t"];

pub const DEFAULT_UNIT: &str = "pcs";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDraft {
    pub worker_name: String,
    pub department: String,
    pub material_type: MaterialCategory,
    pub material_name: String,
    pub quantity_text: String,
    pub unit: String,
    pub urgency: UrgencyLevel,
    pub description: String,
}

impl Default for RequestDraft {
    fn default() -> Self {
        Self {
            worker_name: String::new(),
            department: String::new(),
            material_type: MaterialCategory::default(),
            material_name: String::new(),
            quantity_text: String::new(),
            unit: DEFAULT_UNIT.to_owned(),
            urgency: UrgencyLevel::default(),
            description: String::new(),
        }
    }
}

impl RequestDraft {
    /// Gate for enabling the submit action. Checks that every required
    /// field is filled in and the quantity text is numeric. The positive
    /// check is deferred to `submit`: a quantity of "0" or "-5" still
    /// counts as valid here.
    pub fn is_valid(&self) -> bool {
        !self.worker_name.trim().is_empty()
            && !self.department.is_empty()
            && !self.material_name.trim().is_empty()
            && !self.quantity_text.trim().is_empty()
            && self.parse_quantity().is_some()
            && !self.unit.is_empty()
    }

    fn parse_quantity(&self) -> Option<Decimal> {
        self.quantity_text.trim().parse::<Decimal>().ok()
    }

    /// Turns the draft into an immutable `MaterialRequest` and hands it to
    /// the store. On success every field resets to its default. When the
    /// quantity is missing, non-numeric, or not positive, the draft is left
    /// exactly as it was and `InvalidQuantity` is returned instead.
    ///
    /// Store failures are not a failure path of the draft: the record was
    /// already constructed from valid input, so a save error is logged and
    /// the submission still counts as done from the form's point of view.
    pub async fn submit(
        &mut self,
        store: &dyn RequestStore,
    ) -> Result<MaterialRequest, SubmitError> {
        let quantity = match self.parse_quantity() {
            Some(quantity) if quantity > Decimal::ZERO => quantity,
            _ => {
                return Err(SubmitError::InvalidQuantity {
                    input: self.quantity_text.clone(),
                })
            }
        };

        let request = MaterialRequest {
            id: RequestId::generate(),
            worker_name: self.worker_name.clone(),
            department: self.department.clone(),
            material_type: self.material_type,
            material_name: self.material_name.clone(),
            quantity,
            unit: self.unit.clone(),
            urgency: self.urgency,
            description: self.description.clone(),
            date_requested: Utc::now(),
            status: RequestStatus::Pending,
        };

        if let Err(error) = store.save(request.clone()).await {
            warn!(
                event_name = "request.submit.save_failed",
                request_id = %request.id.0,
                error = %error,
                "request store rejected the save"
            );
        } else {
            info!(
                event_name = "request.submit.saved",
                request_id = %request.id.0,
                "material request saved"
            );
        }

        self.clear();
        Ok(request)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
