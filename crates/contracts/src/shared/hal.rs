//! HAL collection envelopes (`{ "_embedded": { "<listName>": [...] } }`).
//!
//! The server omits `_embedded` entirely for an empty collection, so only
//! that case decodes to an empty list. An `_embedded` object without the
//! expected list key, or with items of the wrong shape, is a decode error.

use crate::domain::assignment::TechnicianAssignmentReportDto;
use crate::domain::order::OrderDto;
use serde::{Deserialize, Serialize};

/// Envelope of `GET /api/orders/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCollection {
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<OrderList>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderList {
    #[serde(rename = "orderDTOList")]
    pub items: Vec<OrderDto>,
}

impl OrderCollection {
    pub fn into_items(self) -> Vec<OrderDto> {
        self.embedded.map(|e| e.items).unwrap_or_default()
    }
}

/// Envelope of `GET /api/assignment/report`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicianReportCollection {
    #[serde(rename = "_embedded", default, skip_serializing_if = "Option::is_none")]
    pub embedded: Option<TechnicianReportList>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicianReportList {
    #[serde(rename = "technicianAssignmentReportDTOList")]
    pub items: Vec<TechnicianAssignmentReportDto>,
}

impl TechnicianReportCollection {
    pub fn into_items(self) -> Vec<TechnicianAssignmentReportDto> {
        self.embedded.map(|e| e.items).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_envelope() {
        let json = r#"{
            "_embedded": {
                "technicianAssignmentReportDTOList": [
                    {"technicianId": 1, "technicianName": "Juan Pérez", "specialty": "Electricidad", "zone": "Norte", "totalAssignments": 5},
                    {"technicianId": 2, "technicianName": "Ana Gómez", "specialty": "Plomería", "zone": "Sur", "totalAssignments": 3}
                ]
            },
            "_links": {"self": {"href": "https://example.test/api/assignment/report"}}
        }"#;
        let items = serde_json::from_str::<TechnicianReportCollection>(json)
            .unwrap()
            .into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].technician_name, "Ana Gómez");
        assert_eq!(items[0].total_assignments, 5);
    }

    #[test]
    fn test_missing_embedded_is_empty_collection() {
        let json = r#"{"_links": {"self": {"href": "https://example.test/api/orders/all"}}}"#;
        let items = serde_json::from_str::<OrderCollection>(json)
            .unwrap()
            .into_items();
        assert!(items.is_empty());
    }

    #[test]
    fn test_wrong_list_key_fails_loudly() {
        let json = r#"{"_embedded": {"orders": []}}"#;
        assert!(serde_json::from_str::<OrderCollection>(json).is_err());
    }

    #[test]
    fn test_malformed_item_fails_loudly() {
        let json = r#"{"_embedded": {"orderDTOList": [{"id": "not-a-number"}]}}"#;
        assert!(serde_json::from_str::<OrderCollection>(json).is_err());
    }
}
