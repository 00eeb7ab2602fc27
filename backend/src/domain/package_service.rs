//! Catalog service: travel packages and the destination/activity tree.

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::commands::packages::{
    AddActivityCommand, AddActivityResult, AddDestinationCommand, AddDestinationResult,
    CreateTravelPackageCommand, CreateTravelPackageResult, ListTravelPackagesResult,
};
use crate::domain::models::{Activity, Destination, TravelPackage};
use crate::storage::traits::{Connection, PackageStorage};

/// Service owning the catalog of travel packages.
#[derive(Clone)]
pub struct PackageService<C: Connection> {
    package_repository: C::PackageRepository,
}

impl<C: Connection> PackageService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let package_repository = connection.create_package_repository();
        Self { package_repository }
    }

    /// Append a travel package to the catalog. Duplicate names are not
    /// rejected; lookups will only ever see the first one.
    pub fn create_travel_package(
        &self,
        command: CreateTravelPackageCommand,
    ) -> Result<CreateTravelPackageResult> {
        info!(
            "Creating travel package {} (capacity {})",
            command.package.name, command.package.passenger_capacity
        );
        self.package_repository.store_package(&command.package)?;
        Ok(CreateTravelPackageResult {
            package: command.package,
        })
    }

    /// Add a destination to the named package. An unknown package name
    /// drops the destination without error.
    pub fn add_destination_to_package(
        &self,
        command: AddDestinationCommand,
    ) -> Result<AddDestinationResult> {
        let added = self
            .package_repository
            .add_destination(&command.package_name, command.destination)?;
        if !added {
            warn!(
                "Package {} not found, destination dropped",
                command.package_name
            );
        }
        Ok(AddDestinationResult { added })
    }

    /// Add an activity to the named destination of the named package. An
    /// unknown package or destination name drops the activity without
    /// error. The activity's owning-destination key is pinned to the
    /// destination it lands in.
    pub fn add_activity_to_destination(
        &self,
        command: AddActivityCommand,
    ) -> Result<AddActivityResult> {
        let mut activity = command.activity;
        activity.destination_name = command.destination_name.clone();
        let added = self.package_repository.add_activity(
            &command.package_name,
            &command.destination_name,
            activity,
        )?;
        if !added {
            warn!(
                "Destination {} not found in package {}, activity dropped",
                command.destination_name, command.package_name
            );
        }
        Ok(AddActivityResult { added })
    }

    pub fn list_travel_packages(&self) -> Result<ListTravelPackagesResult> {
        let packages = self.package_repository.list_packages()?;
        Ok(ListTravelPackagesResult { packages })
    }

    /// Find a package by name; first match wins.
    pub fn find_package_by_name(&self, package_name: &str) -> Result<Option<TravelPackage>> {
        self.package_repository.get_package(package_name)
    }

    /// Find a destination by name, searching every package in the catalog.
    pub fn find_destination_by_name(&self, destination_name: &str) -> Result<Option<Destination>> {
        self.package_repository.find_destination(destination_name)
    }

    /// Find an activity by name within a (globally resolved) destination.
    pub fn find_activity(
        &self,
        destination_name: &str,
        activity_name: &str,
    ) -> Result<Option<Activity>> {
        self.package_repository
            .find_activity(destination_name, activity_name)
    }
}
