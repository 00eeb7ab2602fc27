use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pricing tier of a passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassengerTier {
    Standard,
    Gold,
    Premium,
}

impl PassengerTier {
    /// Payment required from a passenger of this tier for an activity with
    /// the given base cost.
    ///
    /// Gold passengers pay `cost * 0.9` with no rounding step, so the debit
    /// is exactly reproducible (cost 50 yields 45.0).
    pub fn amount_due(&self, cost: f64) -> f64 {
        match self {
            PassengerTier::Standard => cost,
            PassengerTier::Gold => cost * 0.9,
            PassengerTier::Premium => 0.0,
        }
    }
}

impl From<shared::PassengerTier> for PassengerTier {
    fn from(tier: shared::PassengerTier) -> Self {
        match tier {
            shared::PassengerTier::Standard => PassengerTier::Standard,
            shared::PassengerTier::Gold => PassengerTier::Gold,
            shared::PassengerTier::Premium => PassengerTier::Premium,
        }
    }
}

impl From<PassengerTier> for shared::PassengerTier {
    fn from(tier: PassengerTier) -> Self {
        match tier {
            PassengerTier::Standard => shared::PassengerTier::Standard,
            PassengerTier::Gold => shared::PassengerTier::Gold,
            PassengerTier::Premium => shared::PassengerTier::Premium,
        }
    }
}

/// One enrollment held by a passenger: the composite key of the activity
/// plus the moment the enrollment was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRef {
    pub activity_name: String,
    pub destination_name: String,
    pub enrolled_at: DateTime<Utc>,
}

/// Domain model for an enrolling customer.
///
/// The passenger number is caller-supplied and not checked for uniqueness.
/// The balance is only ever mutated by a successful enrollment debit and
/// can never be driven negative by one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub number: i32,
    pub name: String,
    pub balance: f64,
    pub tier: PassengerTier,
    pub activities: Vec<ActivityRef>,
}

impl Passenger {
    pub fn new(number: i32, name: impl Into<String>, balance: f64, tier: PassengerTier) -> Self {
        Self {
            number,
            name: name.into(),
            balance,
            tier,
            activities: Vec::new(),
        }
    }

    /// Build a domain passenger from its boundary DTO. Fails only when an
    /// enrollment timestamp in the DTO is not valid RFC 3339.
    pub fn from_dto(dto: shared::Passenger) -> Result<Self> {
        let mut activities = Vec::with_capacity(dto.activities.len());
        for enrolled in dto.activities {
            let enrolled_at = DateTime::parse_from_rfc3339(&enrolled.enrolled_at)
                .with_context(|| {
                    format!(
                        "invalid enrolled_at timestamp for activity {}",
                        enrolled.activity_name
                    )
                })?
                .with_timezone(&Utc);
            activities.push(ActivityRef {
                activity_name: enrolled.activity_name,
                destination_name: enrolled.destination_name,
                enrolled_at,
            });
        }
        Ok(Self {
            number: dto.number,
            name: dto.name,
            balance: dto.balance,
            tier: dto.tier.into(),
            activities,
        })
    }
}

impl From<&Passenger> for shared::Passenger {
    fn from(passenger: &Passenger) -> Self {
        shared::Passenger {
            number: passenger.number,
            name: passenger.name.clone(),
            balance: passenger.balance,
            tier: passenger.tier.into(),
            activities: passenger
                .activities
                .iter()
                .map(|a| shared::EnrolledActivity {
                    activity_name: a.activity_name.clone(),
                    destination_name: a.destination_name.clone(),
                    enrolled_at: a.enrolled_at.to_rfc3339(),
                })
                .collect(),
        }
    }
}
