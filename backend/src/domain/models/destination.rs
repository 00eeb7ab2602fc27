use serde::{Deserialize, Serialize};

use super::activity::Activity;

/// Domain model for a location within a travel package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: u32,
    pub name: String,
    pub activities: Vec<Activity>,
}

impl Destination {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            activities: Vec::new(),
        }
    }

    /// Linear scan of the activity list; first match wins.
    pub fn find_activity_by_name(&self, activity_name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == activity_name)
    }
}

impl From<shared::Destination> for Destination {
    fn from(dto: shared::Destination) -> Self {
        let activities = dto
            .activities
            .into_iter()
            .map(|a| Activity {
                name: a.name,
                description: a.description,
                cost: a.cost,
                capacity: a.capacity,
                destination_name: dto.name.clone(),
                passenger_numbers: a.passenger_numbers,
            })
            .collect();
        Self {
            id: dto.id,
            name: dto.name,
            activities,
        }
    }
}

impl From<&Destination> for shared::Destination {
    fn from(destination: &Destination) -> Self {
        shared::Destination {
            id: destination.id,
            name: destination.name.clone(),
            activities: destination.activities.iter().map(Into::into).collect(),
        }
    }
}
