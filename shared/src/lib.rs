use serde::{Deserialize, Serialize};

/// Pricing tier of a passenger, fixed at registration time.
///
/// The tier determines the payment required when signing up for an activity:
/// standard passengers pay the full cost, gold passengers get a 10% discount,
/// premium passengers travel for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassengerTier {
    Standard,
    Gold,
    Premium,
}

/// A sellable bundle of destinations offered to passengers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPackage {
    pub id: u32,
    pub name: String,
    /// Declared passenger capacity of the package. Informational only —
    /// it is not enforced against the enrolled passenger list.
    pub passenger_capacity: u32,
    #[serde(default)]
    pub destinations: Vec<Destination>,
    /// Passenger numbers of everyone assigned to this package.
    #[serde(default)]
    pub passenger_numbers: Vec<i32>,
}

/// A location within a package, hosting bookable activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A capacity-limited bookable offering at a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    /// Base cost before any tier discount.
    pub cost: f64,
    /// Remaining capacity; each successful enrollment consumes one unit.
    pub capacity: u32,
    /// Passenger numbers of everyone enrolled in this activity.
    #[serde(default)]
    pub passenger_numbers: Vec<i32>,
}

/// An enrolling customer with a balance and a pricing tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    /// Caller-supplied external identifier. Not validated for uniqueness.
    pub number: i32,
    pub name: String,
    pub balance: f64,
    pub tier: PassengerTier,
    #[serde(default)]
    pub activities: Vec<EnrolledActivity>,
}

/// A single enrollment held by a passenger, keyed by activity and destination
/// name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrolledActivity {
    pub activity_name: String,
    pub destination_name: String,
    /// When the enrollment was recorded (RFC 3339).
    pub enrolled_at: String,
}

/// Terminal outcome of a sign-up call that did not fail outright.
///
/// Lookup and capacity failures are surfaced as errors; running out of
/// balance is a declined business outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentOutcome {
    /// The passenger was enrolled, the balance debited, and one unit of
    /// capacity consumed.
    Enrolled,
    /// The passenger could not afford the tier-adjusted price. No state
    /// was changed.
    DeclinedInsufficientBalance,
}

/// Response to a sign-up call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpForActivityResponse {
    pub outcome: EnrollmentOutcome,
    /// Amount actually debited (0 when declined or for premium passengers).
    pub amount_charged: f64,
    /// Passenger balance after the call.
    pub new_balance: f64,
    /// Activity capacity after the call.
    pub remaining_capacity: u32,
    /// Human-readable description of what happened.
    pub message: String,
}

/// Itinerary of a package: destinations and their activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryView {
    pub package_name: String,
    pub destinations: Vec<ItineraryDestination>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDestination {
    pub name: String,
    pub activities: Vec<ItineraryActivity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryActivity {
    pub name: String,
    pub description: String,
    pub cost: f64,
    pub capacity: u32,
}

/// Passenger list of a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerManifest {
    pub package_name: String,
    pub passenger_capacity: u32,
    pub enrolled_count: usize,
    pub passengers: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub number: i32,
}

/// Detail view of a single passenger and their enrollments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerDetails {
    pub name: String,
    pub number: i32,
    pub tier: PassengerTier,
    pub balance: f64,
    pub activities: Vec<PassengerActivityDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerActivityDetail {
    pub activity_name: String,
    pub destination_name: String,
    /// Base cost of the activity as listed in the catalog.
    pub cost: f64,
}

/// One entry in the catalog-wide list of activities that still have
/// capacity left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableActivity {
    pub activity_name: String,
    pub destination_name: String,
    pub description: String,
    pub cost: f64,
    pub remaining_capacity: u32,
}
