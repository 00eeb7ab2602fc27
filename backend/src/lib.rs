//! # Tourbook Backend
//!
//! Catalog and enrollment backend for a travel agency: packages own
//! destinations, destinations own capacity-limited activities, and
//! passengers enroll in activities under tiered pricing with balance
//! checks.
//!
//! The [`Backend`] struct wires every domain service over one shared
//! in-memory storage connection and exposes the procedural API a transport
//! layer (HTTP, desktop shell) would call, speaking the DTO types from the
//! `shared` crate.

use std::sync::Arc;

use anyhow::Result;

pub mod domain;
pub mod storage;

use domain::commands::enrollment::SignUpForActivityCommand;
use domain::commands::packages::{
    AddActivityCommand, AddDestinationCommand, CreateTravelPackageCommand,
};
use domain::commands::passengers::AddPassengerCommand;
use domain::models::{Activity, EnrollmentError, Passenger, TravelPackage};
use domain::{EnrollmentService, PackageService, PassengerService, ReportService};
pub use storage::memory::MemoryConnection;

/// Main backend struct that orchestrates all services over one shared
/// storage connection.
pub struct Backend {
    pub package_service: PackageService<MemoryConnection>,
    pub passenger_service: PassengerService<MemoryConnection>,
    pub enrollment_service: EnrollmentService<MemoryConnection>,
    pub report_service: ReportService<MemoryConnection>,
}

impl Backend {
    /// Create a backend instance with all services over a fresh, empty
    /// in-memory store.
    pub fn new() -> Self {
        let connection = Arc::new(MemoryConnection::new());
        Backend {
            package_service: PackageService::new(connection.clone()),
            passenger_service: PassengerService::new(connection.clone()),
            enrollment_service: EnrollmentService::new(connection.clone()),
            report_service: ReportService::new(connection),
        }
    }

    /// Create a travel package from its boundary DTO. The stored package is
    /// echoed back.
    pub fn create_travel_package(
        &self,
        package: shared::TravelPackage,
    ) -> Result<shared::TravelPackage> {
        let result = self
            .package_service
            .create_travel_package(CreateTravelPackageCommand {
                package: TravelPackage::from(package),
            })?;
        Ok((&result.package).into())
    }

    /// Add a destination to a package. Returns false when the package name
    /// does not resolve (the destination is dropped, not an error).
    pub fn add_destination_to_package(
        &self,
        package_name: &str,
        destination: shared::Destination,
    ) -> Result<bool> {
        let result = self
            .package_service
            .add_destination_to_package(AddDestinationCommand {
                package_name: package_name.to_string(),
                destination: destination.into(),
            })?;
        Ok(result.added)
    }

    /// Add an activity to a destination within a package. Returns false
    /// when the package or the destination does not resolve.
    pub fn add_activity_to_destination(
        &self,
        package_name: &str,
        destination_name: &str,
        activity: shared::Activity,
    ) -> Result<bool> {
        let result = self
            .package_service
            .add_activity_to_destination(AddActivityCommand {
                package_name: package_name.to_string(),
                destination_name: destination_name.to_string(),
                activity: Activity {
                    name: activity.name,
                    description: activity.description,
                    cost: activity.cost,
                    capacity: activity.capacity,
                    destination_name: destination_name.to_string(),
                    passenger_numbers: activity.passenger_numbers,
                },
            })?;
        Ok(result.added)
    }

    /// Assign a passenger to a package, which also registers them in the
    /// ledger. Returns false when the package name does not resolve.
    pub fn add_passenger_to_package(
        &self,
        package_name: &str,
        passenger: shared::Passenger,
    ) -> Result<bool> {
        let result = self
            .passenger_service
            .add_passenger_to_package(AddPassengerCommand {
                package_name: package_name.to_string(),
                passenger: Passenger::from_dto(passenger)?,
            })?;
        Ok(result.added)
    }

    /// Sign a passenger up for an activity at a destination.
    ///
    /// Lookup and capacity failures come back as [`EnrollmentError`];
    /// running out of balance is reported as a declined outcome in the
    /// response, with no state changed.
    pub fn sign_up_passenger_for_activity(
        &self,
        passenger_number: i32,
        activity_name: &str,
        destination_name: &str,
    ) -> Result<shared::SignUpForActivityResponse, EnrollmentError> {
        let result = self
            .enrollment_service
            .sign_up_passenger_for_activity(SignUpForActivityCommand {
                passenger_number,
                activity_name: activity_name.to_string(),
                destination_name: destination_name.to_string(),
            })?;
        Ok(shared::SignUpForActivityResponse {
            outcome: result.outcome,
            amount_charged: result.amount_charged,
            new_balance: result.new_balance,
            remaining_capacity: result.remaining_capacity,
            message: result.message,
        })
    }

    /// Snapshot of every package in the catalog.
    pub fn list_travel_packages(&self) -> Result<Vec<shared::TravelPackage>> {
        let result = self.package_service.list_travel_packages()?;
        Ok(result.packages.iter().map(Into::into).collect())
    }

    /// Snapshot of every passenger known to the ledger.
    pub fn list_passengers(&self) -> Result<Vec<shared::Passenger>> {
        let result = self.passenger_service.list_passengers()?;
        Ok(result.passengers.iter().map(Into::into).collect())
    }

    pub fn itinerary(&self, package_name: &str) -> Result<Option<shared::ItineraryView>> {
        self.report_service.itinerary(package_name)
    }

    pub fn passenger_manifest(
        &self,
        package_name: &str,
    ) -> Result<Option<shared::PassengerManifest>> {
        self.report_service.passenger_manifest(package_name)
    }

    pub fn passenger_details(&self, number: i32) -> Result<Option<shared::PassengerDetails>> {
        self.report_service.passenger_details(number)
    }

    pub fn available_activities(&self) -> Result<Vec<shared::AvailableActivity>> {
        self.report_service.available_activities()
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new()
    }
}
