//! # Storage Traits
//!
//! Storage abstraction for the catalog and the passenger ledger. The domain
//! layer only talks to these traits, so alternative backends (a database,
//! a file store) can be dropped in without touching the services. The only
//! backend shipped here is the in-memory one.

use anyhow::Result;

use crate::domain::models::{Activity, Destination, Passenger, TravelPackage};

/// Interface for catalog storage: packages and the destination/activity
/// tree they own.
pub trait PackageStorage: Send + Sync {
    /// Append a package to the catalog. Duplicate names are permitted;
    /// name lookups always return the first match.
    fn store_package(&self, package: &TravelPackage) -> Result<()>;

    /// Find a package by name. Linear scan, first match wins.
    fn get_package(&self, package_name: &str) -> Result<Option<TravelPackage>>;

    /// Snapshot of every package in insertion order.
    fn list_packages(&self) -> Result<Vec<TravelPackage>>;

    /// Append a destination to the named package. Returns false (and stores
    /// nothing) when the package does not exist.
    fn add_destination(&self, package_name: &str, destination: Destination) -> Result<bool>;

    /// Append an activity to the named destination of the named package.
    /// Returns false (and stores nothing) when either does not exist.
    fn add_activity(
        &self,
        package_name: &str,
        destination_name: &str,
        activity: Activity,
    ) -> Result<bool>;

    /// Append a passenger number to the named package's roster. Returns
    /// false when the package does not exist.
    fn add_passenger_number(&self, package_name: &str, number: i32) -> Result<bool>;

    /// Find a destination by name across *every* package in the catalog,
    /// not scoped to one package. Linear scan, first match wins.
    fn find_destination(&self, destination_name: &str) -> Result<Option<Destination>>;

    /// Find an activity by name within the (globally resolved) destination.
    fn find_activity(
        &self,
        destination_name: &str,
        activity_name: &str,
    ) -> Result<Option<Activity>>;
}

/// Interface for the passenger ledger.
pub trait PassengerStorage: Send + Sync {
    /// Append a passenger to the ledger. Passenger numbers are not checked
    /// for uniqueness; number lookups return the first match.
    fn store_passenger(&self, passenger: &Passenger) -> Result<()>;

    /// Find a passenger by number. Linear scan of the ledger, first match.
    fn get_passenger(&self, number: i32) -> Result<Option<Passenger>>;

    /// Snapshot of every passenger in insertion order.
    fn list_passengers(&self) -> Result<Vec<Passenger>>;
}

/// Outcome of an enrollment commit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum EnrollmentCommit {
    /// The debit, the capacity decrement, and both sides of the
    /// passenger/activity mirror were applied together.
    Applied {
        amount_charged: f64,
        new_balance: f64,
        remaining_capacity: u32,
    },
    /// The passenger could not cover the amount due. Nothing was changed.
    InsufficientBalance,
    /// The activity had no capacity left at commit time. Nothing was
    /// changed.
    SoldOut,
}

/// Interface for the one mutation that spans both aggregates.
pub trait EnrollmentStorage: Send + Sync {
    /// Atomically enroll a passenger in an activity: re-check availability,
    /// check the balance against `amount_due`, debit, decrement capacity,
    /// and record the enrollment on both the activity and the passenger.
    /// Either every one of those mutations happens or none of them does.
    ///
    /// The passenger and the activity must have been resolved beforehand;
    /// their disappearance between resolution and commit is a storage error.
    fn commit_enrollment(
        &self,
        passenger_number: i32,
        destination_name: &str,
        activity_name: &str,
        amount_due: f64,
    ) -> Result<EnrollmentCommit>;
}

/// Factory trait for storage connections, abstracting the backend the
/// repositories run on.
pub trait Connection: Send + Sync + Clone {
    type PackageRepository: PackageStorage;
    type PassengerRepository: PassengerStorage;
    type EnrollmentRepository: EnrollmentStorage;

    fn create_package_repository(&self) -> Self::PackageRepository;
    fn create_passenger_repository(&self) -> Self::PassengerRepository;
    fn create_enrollment_repository(&self) -> Self::EnrollmentRepository;
}
