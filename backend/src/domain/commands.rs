//! Domain-level command and result types.
//!
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The `Backend` facade maps the public DTOs
//! defined in the `shared` crate to these internal types.
//!
//! Entities arrive fully-formed (there is no partial construction), so the
//! commands carry whole domain models rather than loose fields.

pub mod packages {
    use crate::domain::models::{Activity, Destination, TravelPackage};

    /// Input for creating a travel package. No uniqueness check is applied
    /// to the name; the catalog keeps duplicates and lookups return the
    /// first match.
    #[derive(Debug, Clone)]
    pub struct CreateTravelPackageCommand {
        pub package: TravelPackage,
    }

    #[derive(Debug, Clone)]
    pub struct CreateTravelPackageResult {
        pub package: TravelPackage,
    }

    /// Input for adding a destination to a package.
    #[derive(Debug, Clone)]
    pub struct AddDestinationCommand {
        pub package_name: String,
        pub destination: Destination,
    }

    /// Result of adding a destination. `added` is false when the package
    /// name resolved to nothing and the destination was dropped.
    #[derive(Debug, Clone)]
    pub struct AddDestinationResult {
        pub added: bool,
    }

    /// Input for adding an activity to a destination within a package.
    /// The activity's owning-destination key is set from
    /// `destination_name`, whatever the incoming record carried.
    #[derive(Debug, Clone)]
    pub struct AddActivityCommand {
        pub package_name: String,
        pub destination_name: String,
        pub activity: Activity,
    }

    #[derive(Debug, Clone)]
    pub struct AddActivityResult {
        pub added: bool,
    }

    #[derive(Debug, Clone)]
    pub struct ListTravelPackagesResult {
        pub packages: Vec<TravelPackage>,
    }
}

pub mod passengers {
    use crate::domain::models::Passenger;

    /// Input for assigning a passenger to a package. The passenger becomes
    /// known to the ledger only through this assignment.
    #[derive(Debug, Clone)]
    pub struct AddPassengerCommand {
        pub package_name: String,
        pub passenger: Passenger,
    }

    /// Result of assigning a passenger. `added` is false when the package
    /// name resolved to nothing and the passenger was dropped.
    #[derive(Debug, Clone)]
    pub struct AddPassengerResult {
        pub added: bool,
    }

    #[derive(Debug, Clone)]
    pub struct ListPassengersResult {
        pub passengers: Vec<Passenger>,
    }
}

pub mod enrollment {
    use shared::EnrollmentOutcome;

    /// Input for the sign-up operation.
    #[derive(Debug, Clone)]
    pub struct SignUpForActivityCommand {
        pub passenger_number: i32,
        pub activity_name: String,
        pub destination_name: String,
    }

    /// Result of a sign-up call that did not fail with an
    /// `EnrollmentError`.
    #[derive(Debug, Clone)]
    pub struct SignUpForActivityResult {
        pub outcome: EnrollmentOutcome,
        /// Amount actually debited; 0 when declined and for premium tiers.
        pub amount_charged: f64,
        pub new_balance: f64,
        pub remaining_capacity: u32,
        pub message: String,
    }
}
