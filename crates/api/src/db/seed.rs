//! Built-in catalog.
//!
//! Backs the mock backend and is what `car-expo seed` writes into `PostgreSQL`.

use chrono::{DateTime, TimeZone, Utc};

use car_expo_core::{Car, CarId, VehicleType, VehicleTypeId};

/// The seeded vehicle types, ordered by id.
#[must_use]
pub fn vehicle_types() -> Vec<VehicleType> {
    vec![
        vehicle_type(
            1,
            "SUV",
            "Sport Utility Vehicles with high ground clearance and spacious interiors",
            &["Compact SUV", "Mid-size SUV", "Full-size SUV", "Luxury SUV"],
        ),
        vehicle_type(
            2,
            "Sedan",
            "Traditional four-door passenger cars with separate trunk compartments",
            &["Compact Sedan", "Mid-size Sedan", "Full-size Sedan", "Luxury Sedan"],
        ),
        vehicle_type(
            3,
            "Hatchback",
            "Compact cars with rear door that swings upward to provide access to cargo area",
            &["Subcompact Hatchback", "Compact Hatchback", "Hot Hatch"],
        ),
        vehicle_type(
            4,
            "Coupe",
            "Two-door cars with fixed roof and sporty appearance",
            &["Sports Coupe", "Luxury Coupe", "Grand Tourer"],
        ),
    ]
}

/// The seeded cars, ordered by id.
#[must_use]
pub fn cars() -> Vec<Car> {
    vec![
        Car {
            id: CarId::new(1),
            name: "Toyota RAV4".to_owned(),
            vehicle_type: "SUV".to_owned(),
            subtype: "Compact SUV".to_owned(),
            short_desc: Some("Reliable and fuel-efficient compact SUV".to_owned()),
            description: Some(
                "The Toyota RAV4 is a compact crossover SUV that offers excellent fuel economy, \
                 reliability, and all-weather capability. Perfect for families and adventure \
                 seekers alike."
                    .to_owned(),
            ),
            features: strings(&[
                "All-Wheel Drive",
                "Safety Sense 2.0",
                "Apple CarPlay",
                "LED Headlights",
                "Roof Rails",
            ]),
            image_url: Some(unsplash("photo-1549317661-bd32c8ce0db2")),
            created_at: seeded_at(2024, 1, 15, 10, 30),
        },
        Car {
            id: CarId::new(2),
            name: "Honda Accord".to_owned(),
            vehicle_type: "Sedan".to_owned(),
            subtype: "Mid-size Sedan".to_owned(),
            short_desc: Some("Spacious and efficient mid-size sedan".to_owned()),
            description: Some(
                "The Honda Accord delivers a perfect blend of performance, efficiency, and \
                 comfort. With its spacious interior and advanced safety features, it's an \
                 excellent choice for daily commuting."
                    .to_owned(),
            ),
            features: strings(&[
                "Honda Sensing",
                "CVT Transmission",
                "Remote Start",
                "Dual-Zone Climate",
                "LED Lighting",
            ]),
            image_url: Some(unsplash("photo-1552519507-da3b142c6e3d")),
            created_at: seeded_at(2024, 1, 16, 14, 20),
        },
        Car {
            id: CarId::new(3),
            name: "Volkswagen Golf".to_owned(),
            vehicle_type: "Hatchback".to_owned(),
            subtype: "Compact Hatchback".to_owned(),
            short_desc: Some("European-engineered compact hatchback".to_owned()),
            description: Some(
                "The Volkswagen Golf sets the standard for compact hatchbacks with its refined \
                 driving dynamics, premium interior, and German engineering excellence."
                    .to_owned(),
            ),
            features: strings(&[
                "Digital Cockpit",
                "MQB Platform",
                "Car-Net",
                "IQ.DRIVE",
                "LED Taillights",
            ]),
            image_url: Some(unsplash("photo-1580273916550-e323be2ae537")),
            created_at: seeded_at(2024, 1, 17, 9, 45),
        },
        Car {
            id: CarId::new(4),
            name: "BMW 4 Series".to_owned(),
            vehicle_type: "Coupe".to_owned(),
            subtype: "Luxury Coupe".to_owned(),
            short_desc: Some("Premium luxury coupe with dynamic performance".to_owned()),
            description: Some(
                "The BMW 4 Series Coupe combines athletic performance with luxury comfort. Its \
                 distinctive design and advanced technology make every drive an experience to \
                 remember."
                    .to_owned(),
            ),
            features: strings(&[
                "xDrive AWD",
                "iDrive 7.0",
                "M Sport Package",
                "Harman Kardon Audio",
                "Adaptive Suspension",
            ]),
            image_url: Some(unsplash("photo-1555215695-3004980ad54e")),
            created_at: seeded_at(2024, 1, 18, 16, 10),
        },
        Car {
            id: CarId::new(5),
            name: "Jeep Grand Cherokee".to_owned(),
            vehicle_type: "SUV".to_owned(),
            subtype: "Mid-size SUV".to_owned(),
            short_desc: Some("Capable mid-size SUV with off-road prowess".to_owned()),
            description: Some(
                "The Jeep Grand Cherokee offers legendary off-road capability combined with \
                 on-road refinement. Perfect for those who demand both luxury and adventure \
                 capability."
                    .to_owned(),
            ),
            features: strings(&[
                "4x4 Capability",
                "Uconnect System",
                "Selec-Terrain",
                "Premium Audio",
                "Panoramic Sunroof",
            ]),
            image_url: Some(unsplash("photo-1544636331-e26879cd4d9b")),
            created_at: seeded_at(2024, 1, 19, 11, 30),
        },
        Car {
            id: CarId::new(6),
            name: "Mercedes-Benz S-Class".to_owned(),
            vehicle_type: "Sedan".to_owned(),
            subtype: "Luxury Sedan".to_owned(),
            short_desc: Some("Ultimate luxury sedan with cutting-edge technology".to_owned()),
            description: Some(
                "The Mercedes-Benz S-Class represents the pinnacle of luxury sedans, offering \
                 unparalleled comfort, advanced technology, and prestigious styling."
                    .to_owned(),
            ),
            features: strings(&[
                "MBUX System",
                "Air Suspension",
                "Burmester Audio",
                "Massage Seats",
                "Night Vision",
            ]),
            image_url: Some(unsplash("photo-1618843479313-40f8afb4b4d8")),
            created_at: seeded_at(2024, 1, 20, 13, 15),
        },
    ]
}

fn vehicle_type(id: i32, name: &str, description: &str, subtypes: &[&str]) -> VehicleType {
    VehicleType {
        id: VehicleTypeId::new(id),
        name: name.to_owned(),
        description: Some(description.to_owned()),
        subtypes: strings(subtypes),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?w=400&h=300&fit=crop")
}

fn seeded_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let type_ids: HashSet<_> = vehicle_types().iter().map(|t| t.id).collect();
        assert_eq!(type_ids.len(), vehicle_types().len());

        let car_ids: HashSet<_> = cars().iter().map(|c| c.id).collect();
        assert_eq!(car_ids.len(), cars().len());
    }

    #[test]
    fn test_every_car_names_a_known_type_and_subtype() {
        let types = vehicle_types();
        for car in cars() {
            let vehicle_type = types
                .iter()
                .find(|t| t.name == car.vehicle_type)
                .unwrap_or_else(|| panic!("{} has unknown type {}", car.name, car.vehicle_type));
            assert!(
                vehicle_type.subtypes.contains(&car.subtype),
                "{} has unknown subtype {}",
                car.name,
                car.subtype
            );
        }
    }

    #[test]
    fn test_timestamps_are_set() {
        assert!(cars().iter().all(|c| c.created_at.timestamp() > 0));

        let golf = cars().into_iter().find(|c| c.id == CarId::new(3));
        assert_eq!(
            golf.map(|c| c.created_at.to_rfc3339()).as_deref(),
            Some("2024-01-17T09:45:00+00:00")
        );
    }
}
