use crate::enums::{UrgencyLevel, WorkStatus};
use serde::{Deserialize, Serialize};

/// Service order as returned by `GET /api/orders/all` and `GET /api/orders/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Estimated time in hours
    pub estimated_time: f64,
    pub workload: f64,
    /// Server label ("Alta" / "Media" / "Baja"); kept as text so unknown labels still render
    pub urgency: String,
    pub zone_id: i64,
    pub zone_name: String,
    pub requester: String,
    /// Creation timestamp, ISO-8601 as sent by the server
    pub timestamp: String,
    #[serde(default)]
    pub technician_name: Option<String>,
    #[serde(default)]
    pub specialty_name: Option<String>,
}

/// Display status derived on the client; the server has no such field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderDisplayStatus {
    Asignado,
    Nuevo,
}

impl OrderDisplayStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderDisplayStatus::Asignado => "Asignado",
            OrderDisplayStatus::Nuevo => "Nuevo",
        }
    }
}

impl OrderDto {
    /// Assigned technician name, `None` when absent or blank
    pub fn assigned_technician(&self) -> Option<&str> {
        self.technician_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_technician().is_some()
    }

    pub fn display_status(&self) -> OrderDisplayStatus {
        if self.is_assigned() {
            OrderDisplayStatus::Asignado
        } else {
            OrderDisplayStatus::Nuevo
        }
    }

    pub fn urgency_level(&self) -> Option<UrgencyLevel> {
        UrgencyLevel::from_label(&self.urgency)
    }
}

/// Body of `PUT /api/orders/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: WorkStatus,
}
