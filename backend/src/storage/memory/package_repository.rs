use anyhow::Result;
use log::{debug, warn};

use crate::domain::models::{Activity, Destination, TravelPackage};
use crate::storage::traits::PackageStorage;

use super::connection::MemoryConnection;

/// In-memory catalog repository.
#[derive(Clone)]
pub struct PackageRepository {
    connection: MemoryConnection,
}

impl PackageRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl PackageStorage for PackageRepository {
    fn store_package(&self, package: &TravelPackage) -> Result<()> {
        let mut state = self.connection.write();
        state.packages.push(package.clone());
        debug!("Stored package {} ({} total)", package.name, state.packages.len());
        Ok(())
    }

    fn get_package(&self, package_name: &str) -> Result<Option<TravelPackage>> {
        let state = self.connection.read();
        Ok(state
            .packages
            .iter()
            .find(|p| p.name == package_name)
            .cloned())
    }

    fn list_packages(&self) -> Result<Vec<TravelPackage>> {
        let state = self.connection.read();
        Ok(state.packages.clone())
    }

    fn add_destination(&self, package_name: &str, destination: Destination) -> Result<bool> {
        let mut state = self.connection.write();
        match state.packages.iter_mut().find(|p| p.name == package_name) {
            Some(package) => {
                package.destinations.push(destination);
                Ok(true)
            }
            None => {
                warn!("Package {} not found, destination not stored", package_name);
                Ok(false)
            }
        }
    }

    fn add_activity(
        &self,
        package_name: &str,
        destination_name: &str,
        activity: Activity,
    ) -> Result<bool> {
        let mut state = self.connection.write();
        let destination = state
            .packages
            .iter_mut()
            .find(|p| p.name == package_name)
            .and_then(|p| p.destinations.iter_mut().find(|d| d.name == destination_name));
        match destination {
            Some(destination) => {
                destination.activities.push(activity);
                Ok(true)
            }
            None => {
                warn!(
                    "Destination {} not found in package {}, activity not stored",
                    destination_name, package_name
                );
                Ok(false)
            }
        }
    }

    fn add_passenger_number(&self, package_name: &str, number: i32) -> Result<bool> {
        let mut state = self.connection.write();
        match state.packages.iter_mut().find(|p| p.name == package_name) {
            Some(package) => {
                package.passenger_numbers.push(number);
                Ok(true)
            }
            None => {
                warn!("Package {} not found, passenger {} not assigned", package_name, number);
                Ok(false)
            }
        }
    }

    fn find_destination(&self, destination_name: &str) -> Result<Option<Destination>> {
        let state = self.connection.read();
        // The search deliberately spans every package in the catalog; the
        // first destination with a matching name wins.
        Ok(state
            .packages
            .iter()
            .flat_map(|p| p.destinations.iter())
            .find(|d| d.name == destination_name)
            .cloned())
    }

    fn find_activity(
        &self,
        destination_name: &str,
        activity_name: &str,
    ) -> Result<Option<Activity>> {
        let state = self.connection.read();
        Ok(state
            .packages
            .iter()
            .flat_map(|p| p.destinations.iter())
            .find(|d| d.name == destination_name)
            .and_then(|d| d.find_activity_by_name(activity_name))
            .cloned())
    }
}
