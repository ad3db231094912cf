use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row of `GET /api/assignment/report`: per-technician assignment totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianAssignmentReportDto {
    pub technician_id: i64,
    pub technician_name: String,
    pub specialty: String,
    pub zone: String,
    pub total_assignments: i64,
}

/// Body of `POST /api/assignment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignmentDto {
    pub technician_id: i64,
    pub technician_name: String,
    pub order_id: i64,
    pub order_name: String,
    pub timestamp: DateTime<Utc>,
}

impl NewAssignmentDto {
    /// Manual assignment of `technician` to an order, stamped with the current time
    pub fn manual(
        technician: &TechnicianAssignmentReportDto,
        order_id: i64,
        order_name: impl Into<String>,
    ) -> Self {
        Self {
            technician_id: technician.technician_id,
            technician_name: technician.technician_name.clone(),
            order_id,
            order_name: order_name.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Assignment accepted by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDto {
    pub id: i64,
    pub technician_id: i64,
    pub technician_name: String,
    pub order_id: i64,
    pub order_name: String,
    pub timestamp: String,
}

/// Query string of `POST /api/assignment/auto`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoAssignQuery {
    pub order_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technician() -> TechnicianAssignmentReportDto {
        TechnicianAssignmentReportDto {
            technician_id: 2,
            technician_name: "Ana Gómez".to_string(),
            specialty: "Plomería".to_string(),
            zone: "Sur".to_string(),
            total_assignments: 3,
        }
    }

    #[test]
    fn test_manual_assignment_copies_technician() {
        let dto = NewAssignmentDto::manual(&technician(), 41, "Fuga de agua");
        assert_eq!(dto.technician_id, 2);
        assert_eq!(dto.technician_name, "Ana Gómez");
        assert_eq!(dto.order_id, 41);
        assert_eq!(dto.order_name, "Fuga de agua");
    }

    #[test]
    fn test_new_assignment_wire_names() {
        let dto = NewAssignmentDto::manual(&technician(), 41, "Fuga de agua");
        let value = serde_json::to_value(&dto).unwrap();
        for key in ["technicianId", "technicianName", "orderId", "orderName", "timestamp"] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_decodes_assignment_response() {
        let json = r#"{"id":9,"technicianId":2,"technicianName":"Ana Gómez","orderId":41,"orderName":"Fuga de agua","timestamp":"2025-05-20T10:15:00Z"}"#;
        let dto: AssignmentDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, 9);
        assert_eq!(dto.order_id, 41);
    }
}
