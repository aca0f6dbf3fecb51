//! Catalog records: vehicle types and cars.
//!
//! Field names on the wire follow what the browser frontend reads:
//! a vehicle type's name is serialized as `type`, and cars carry
//! `short_desc` / `image_url` in snake case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{CarId, VehicleTypeId};

/// A top-level vehicle category (e.g. SUV) with its named subtypes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleType {
    pub id: VehicleTypeId,
    #[serde(rename = "type")]
    pub name: String,
    pub description: Option<String>,
    /// Subtype names in stored order.
    pub subtypes: Vec<String>,
}

/// A catalog car belonging to one type/subtype pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub subtype: String,
    pub short_desc: Option<String>,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn golf() -> Car {
        Car {
            id: CarId::new(3),
            name: "Volkswagen Golf".to_owned(),
            vehicle_type: "Hatchback".to_owned(),
            subtype: "Compact Hatchback".to_owned(),
            short_desc: Some("European-engineered compact hatchback".to_owned()),
            description: None,
            features: vec!["Digital Cockpit".to_owned()],
            image_url: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 17, 9, 45, 0).unwrap(),
        }
    }

    #[test]
    fn test_car_wire_shape() {
        let value = serde_json::to_value(golf()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Volkswagen Golf",
                "type": "Hatchback",
                "subtype": "Compact Hatchback",
                "short_desc": "European-engineered compact hatchback",
                "description": null,
                "features": ["Digital Cockpit"],
                "image_url": null,
                "created_at": "2024-01-17T09:45:00Z"
            })
        );
    }

    #[test]
    fn test_vehicle_type_wire_shape() {
        let suv = VehicleType {
            id: VehicleTypeId::new(1),
            name: "SUV".to_owned(),
            description: Some("Sport Utility Vehicles".to_owned()),
            subtypes: vec!["Compact SUV".to_owned(), "Mid-size SUV".to_owned()],
        };

        let value = serde_json::to_value(&suv).unwrap();
        assert_eq!(value["type"], "SUV");
        assert_eq!(value["subtypes"], json!(["Compact SUV", "Mid-size SUV"]));
        assert!(value.get("name").is_none());
    }

    #[test]
    fn test_car_deserializes_from_wire() {
        let parsed: Car = serde_json::from_value(serde_json::to_value(golf()).unwrap()).unwrap();
        assert_eq!(parsed, golf());
    }
}
