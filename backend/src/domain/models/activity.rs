use serde::{Deserialize, Serialize};

/// Domain model for a capacity-limited bookable offering at a destination.
///
/// `capacity` is the *remaining* capacity: it is decremented on every
/// successful enrollment and checked before each one, so it can never go
/// negative. The enrolled passenger list is kept separately for reporting
/// and mirrors `Passenger::activities` on the other side of the link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub capacity: u32,
    /// Name of the destination this activity belongs to.
    pub destination_name: String,
    pub passenger_numbers: Vec<i32>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        cost: f64,
        capacity: u32,
        destination_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            cost,
            capacity,
            destination_name: destination_name.into(),
            passenger_numbers: Vec::new(),
        }
    }

    /// Whether at least one unit of capacity is left.
    pub fn has_availability(&self) -> bool {
        self.capacity > 0
    }
}

impl From<&Activity> for shared::Activity {
    fn from(activity: &Activity) -> Self {
        shared::Activity {
            name: activity.name.clone(),
            description: activity.description.clone(),
            cost: activity.cost,
            capacity: activity.capacity,
            passenger_numbers: activity.passenger_numbers.clone(),
        }
    }
}
