use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::Row;
use uuid::Uuid;

use matreq_core::domain::request::{
    MaterialCategory, MaterialRequest, RequestId, RequestStatus, UrgencyLevel,
};
use matreq_core::errors::StoreError;
use matreq_core::store::RequestStore;

use super::RepositoryError;
use crate::DbPool;

pub struct SqlRequestStore {
    pool: DbPool,
}

impl SqlRequestStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(
        &self,
        id: &RequestId,
    ) -> Result<Option<MaterialRequest>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, worker_name, department, material_type, material_name, quantity,
                    unit, urgency, description, date_requested, status
             FROM material_request WHERE id = ?",
        )
        .bind(id.0.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(ref r) => Ok(Some(row_to_request(r)?)),
            None => Ok(None),
        }
    }

    pub async fn list_recent(&self, limit: u32) -> Result<Vec<MaterialRequest>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT id, worker_name, department, material_type, material_name, quantity,
                    unit, urgency, description, date_requested, status
             FROM material_request ORDER BY date_requested DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_request).collect()
    }

    pub async fn insert(&self, request: &MaterialRequest) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO material_request (id, worker_name, department, material_type,
                                           material_name, quantity, unit, urgency,
                                           description, date_requested, status)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(request.id.0.to_string())
        .bind(&request.worker_name)
        .bind(&request.department)
        .bind(category_as_str(&request.material_type))
        .bind(&request.material_name)
        .bind(request.quantity.to_string())
        .bind(&request.unit)
        .bind(urgency_as_str(&request.urgency))
        .bind(&request.description)
        .bind(request.date_requested.to_rfc3339())
        .bind(status_as_str(&request.status))
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl RequestStore for SqlRequestStore {
    async fn save(&self, request: MaterialRequest) -> Result<(), StoreError> {
        self.insert(&request)
            .await
            .map_err(|error| StoreError::Persistence(error.to_string()))
    }
}

pub fn status_as_str(status: &RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "pending",
        RequestStatus::Approved => "approved",
        RequestStatus::Rejected => "rejected",
        RequestStatus::Fulfilled => "fulfilled",
        RequestStatus::Cancelled => "cancelled",
    }
}

fn parse_status(s: &str) -> RequestStatus {
    match s {
        "approved" => RequestStatus::Approved,
        "rejected" => RequestStatus::Rejected,
        "fulfilled" => RequestStatus::Fulfilled,
        "cancelled" => RequestStatus::Cancelled,
        _ => RequestStatus::Pending,
    }
}

pub fn category_as_str(category: &MaterialCategory) -> &'static str {
    match category {
        MaterialCategory::Cement => "cement",
        MaterialCategory::Brick => "brick",
        MaterialCategory::Concrete => "concrete",
        MaterialCategory::Timber => "timber",
        MaterialCategory::Steel => "steel",
        MaterialCategory::Insulation => "insulation",
        MaterialCategory::Paint => "paint",
        MaterialCategory::Other => "other",
    }
}

fn parse_category(s: &str) -> MaterialCategory {
    match s {
        "cement" => MaterialCategory::Cement,
        "brick" => MaterialCategory::Brick,
        "concrete" => MaterialCategory::Concrete,
        "timber" => MaterialCategory::Timber,
        "steel" => MaterialCategory::Steel,
        "insulation" => MaterialCategory::Insulation,
        "paint" => MaterialCategory::Paint,
        _ => MaterialCategory::Other,
    }
}

pub fn urgency_as_str(urgency: &UrgencyLevel) -> &'static str {
    match urgency {
        UrgencyLevel::Low => "low",
        UrgencyLevel::Medium => "medium",
        UrgencyLevel::High => "high",
        UrgencyLevel::Critical => "critical",
    }
}

fn parse_urgency(s: &str) -> UrgencyLevel {
    match s {
        "low" => UrgencyLevel::Low,
        "high" => UrgencyLevel::High,
        "critical" => UrgencyLevel::Critical,
        _ => UrgencyLevel::Medium,
    }
}

fn row_to_request(row: &sqlx::sqlite::SqliteRow) -> Result<MaterialRequest, RepositoryError> {
    let id: String = row.try_get("id").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let worker_name: String =
        row.try_get("worker_name").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let department: String =
        row.try_get("department").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let material_type: String =
        row.try_get("material_type").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let material_name: String =
        row.try_get("material_name").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let quantity_str: String =
        row.try_get("quantity").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let unit: String = row.try_get("unit").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let urgency: String =
        row.try_get("urgency").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let description: String =
        row.try_get("description").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let date_requested_str: String =
        row.try_get("date_requested").map_err(|e| RepositoryError::Decode(e.to_string()))?;
    let status: String =
        row.try_get("status").map_err(|e| RepositoryError::Decode(e.to_string()))?;

    let id = Uuid::parse_str(&id)
        .map_err(|e| RepositoryError::Decode(format!("request id {id:?}: {e}")))?;
    let quantity = Decimal::from_str(&quantity_str)
        .map_err(|e| RepositoryError::Decode(format!("quantity {quantity_str:?}: {e}")))?;
    let date_requested = DateTime::parse_from_rfc3339(&date_requested_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Decode(format!("date_requested {date_requested_str:?}: {e}")))?;

    Ok(MaterialRequest {
        id: RequestId(id),
        worker_name,
        department,
        material_type: parse_category(&material_type),
        material_name,
        quantity,
        unit,
        urgency: parse_urgency(&urgency),
        description,
        date_requested,
        status: parse_status(&status),
    })
}
