//! Car listing filter.
//!
//! The filter has three shapes, decided by which values are present:
//!
//! | `type` | `subtype` | matches                                   |
//! |--------|-----------|-------------------------------------------|
//! | yes    | yes       | type and subtype equal (case-insensitive) |
//! | yes    | no        | type equal (case-insensitive)             |
//! | no     | any       | every car                                 |
//!
//! A subtype on its own is ignored. Empty strings count as absent.

use super::vehicle::Car;

/// Filter applied when listing cars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarFilter {
    vehicle_type: Option<String>,
    subtype: Option<String>,
}

impl CarFilter {
    /// Build a filter from optional query values.
    ///
    /// A subtype without a type is dropped.
    #[must_use]
    pub fn new(vehicle_type: Option<String>, subtype: Option<String>) -> Self {
        let vehicle_type = vehicle_type.filter(|t| !t.is_empty());
        let subtype = vehicle_type
            .as_ref()
            .and(subtype)
            .filter(|s| !s.is_empty());

        Self {
            vehicle_type,
            subtype,
        }
    }

    /// A filter that matches every car.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter on type only.
    #[must_use]
    pub fn by_type(vehicle_type: impl Into<String>) -> Self {
        Self::new(Some(vehicle_type.into()), None)
    }

    /// Filter on type and subtype.
    #[must_use]
    pub fn by_type_and_subtype(vehicle_type: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self::new(Some(vehicle_type.into()), Some(subtype.into()))
    }

    #[must_use]
    pub fn vehicle_type(&self) -> Option<&str> {
        self.vehicle_type.as_deref()
    }

    /// The subtype, only ever set alongside a type.
    #[must_use]
    pub fn subtype(&self) -> Option<&str> {
        self.subtype.as_deref()
    }

    /// Returns true when the filter selects every car.
    #[must_use]
    pub const fn is_unfiltered(&self) -> bool {
        self.vehicle_type.is_none()
    }

    /// Returns true if `car` is selected by this filter.
    #[must_use]
    pub fn matches(&self, car: &Car) -> bool {
        let Some(vehicle_type) = &self.vehicle_type else {
            return true;
        };

        if !eq_case_folded(&car.vehicle_type, vehicle_type) {
            return false;
        }

        self.subtype
            .as_deref()
            .is_none_or(|subtype| eq_case_folded(&car.subtype, subtype))
    }
}

fn eq_case_folded(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::CarId;

    fn car(id: i32, vehicle_type: &str, subtype: &str) -> Car {
        Car {
            id: CarId::new(id),
            name: format!("car-{id}"),
            vehicle_type: vehicle_type.to_owned(),
            subtype: subtype.to_owned(),
            short_desc: None,
            description: None,
            features: Vec::new(),
            image_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_unfiltered_matches_everything() {
        let filter = CarFilter::all();
        assert!(filter.is_unfiltered());
        assert!(filter.matches(&car(1, "SUV", "Compact SUV")));
        assert!(filter.matches(&car(2, "Sedan", "Luxury Sedan")));
    }

    #[test]
    fn test_type_match_is_case_insensitive() {
        let filter = CarFilter::by_type("hatchback");
        assert!(filter.matches(&car(3, "Hatchback", "Compact Hatchback")));
        assert!(!filter.matches(&car(1, "SUV", "Compact SUV")));
    }

    #[test]
    fn test_type_match_is_exact_not_substring() {
        let filter = CarFilter::by_type("Hatch");
        assert!(!filter.matches(&car(3, "Hatchback", "Compact Hatchback")));
    }

    #[test]
    fn test_type_and_subtype() {
        let car = car(3, "Hatchback", "Compact Hatchback");
        assert!(CarFilter::by_type_and_subtype("Hatchback", "Compact Hatchback").matches(&car));
        assert!(CarFilter::by_type_and_subtype("HATCHBACK", "compact hatchback").matches(&car));
        assert!(!CarFilter::by_type_and_subtype("Hatchback", "Hot Hatch").matches(&car));
        assert!(!CarFilter::by_type_and_subtype("Sedan", "Compact Hatchback").matches(&car));
    }

    #[test]
    fn test_subtype_without_type_is_ignored() {
        let filter = CarFilter::new(None, Some("Hot Hatch".to_owned()));
        assert!(filter.is_unfiltered());
        assert_eq!(filter.subtype(), None);
        assert!(filter.matches(&car(1, "SUV", "Compact SUV")));
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        assert!(CarFilter::new(Some(String::new()), Some("Hot Hatch".to_owned())).is_unfiltered());

        let filter = CarFilter::new(Some("SUV".to_owned()), Some(String::new()));
        assert_eq!(filter.vehicle_type(), Some("SUV"));
        assert_eq!(filter.subtype(), None);
    }

    #[test]
    fn test_unicode_case_folding() {
        let filter = CarFilter::by_type("GELÄNDEWAGEN");
        assert!(filter.matches(&car(9, "Geländewagen", "Kompakt")));
    }
}
