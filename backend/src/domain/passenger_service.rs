//! Passenger ledger service.
//!
//! A passenger is not known to the ledger until assigned to at least one
//! package; assignment to an unknown package silently drops the passenger.

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::commands::passengers::{
    AddPassengerCommand, AddPassengerResult, ListPassengersResult,
};
use crate::domain::models::Passenger;
use crate::storage::traits::{Connection, PackageStorage, PassengerStorage};

/// Service owning the ledger of passengers known to the agency.
#[derive(Clone)]
pub struct PassengerService<C: Connection> {
    passenger_repository: C::PassengerRepository,
    package_repository: C::PackageRepository,
}

impl<C: Connection> PassengerService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let passenger_repository = connection.create_passenger_repository();
        let package_repository = connection.create_package_repository();
        Self {
            passenger_repository,
            package_repository,
        }
    }

    /// Assign a passenger to a package. When the package exists the
    /// passenger lands on the package roster and in the ledger; when it
    /// does not, the passenger is dropped without error. Passenger numbers
    /// are not checked for uniqueness.
    pub fn add_passenger_to_package(
        &self,
        command: AddPassengerCommand,
    ) -> Result<AddPassengerResult> {
        let added = self
            .package_repository
            .add_passenger_number(&command.package_name, command.passenger.number)?;
        if added {
            self.passenger_repository
                .store_passenger(&command.passenger)?;
            info!(
                "Assigned passenger {} (#{}) to package {}",
                command.passenger.name, command.passenger.number, command.package_name
            );
        } else {
            warn!(
                "Package {} not found, passenger {} dropped",
                command.package_name, command.passenger.number
            );
        }
        Ok(AddPassengerResult { added })
    }

    /// Find a passenger by number; linear scan of the ledger, first match.
    pub fn find_passenger_by_number(&self, number: i32) -> Result<Option<Passenger>> {
        self.passenger_repository.get_passenger(number)
    }

    pub fn list_passengers(&self) -> Result<ListPassengersResult> {
        let passengers = self.passenger_repository.list_passengers()?;
        Ok(ListPassengersResult { passengers })
    }
}
