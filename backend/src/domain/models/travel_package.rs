use serde::{Deserialize, Serialize};

use super::destination::Destination;

/// Domain model for a sellable bundle of destinations.
///
/// `passenger_capacity` is declarative: it is stored and reported but never
/// enforced against the size of the passenger roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPackage {
    pub id: u32,
    pub name: String,
    pub passenger_capacity: u32,
    pub destinations: Vec<Destination>,
    /// Numbers of the passengers assigned to this package.
    pub passenger_numbers: Vec<i32>,
}

impl TravelPackage {
    pub fn new(id: u32, name: impl Into<String>, passenger_capacity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            passenger_capacity,
            destinations: Vec::new(),
            passenger_numbers: Vec::new(),
        }
    }

    /// Linear scan of this package's destination list; first match wins.
    pub fn find_destination_by_name(&self, destination_name: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.name == destination_name)
    }
}

impl From<shared::TravelPackage> for TravelPackage {
    fn from(dto: shared::TravelPackage) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            passenger_capacity: dto.passenger_capacity,
            destinations: dto.destinations.into_iter().map(Into::into).collect(),
            passenger_numbers: dto.passenger_numbers,
        }
    }
}

impl From<&TravelPackage> for shared::TravelPackage {
    fn from(package: &TravelPackage) -> Self {
        shared::TravelPackage {
            id: package.id,
            name: package.name.clone(),
            passenger_capacity: package.passenger_capacity,
            destinations: package.destinations.iter().map(Into::into).collect(),
            passenger_numbers: package.passenger_numbers.clone(),
        }
    }
}
