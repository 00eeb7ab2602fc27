//! Read-only views over the catalog and the passenger ledger.
//!
//! Nothing here mutates state; the views are assembled from repository
//! snapshots and returned as `shared` DTOs for whatever presentation layer
//! sits on top.

use anyhow::Result;
use log::warn;
use std::collections::HashMap;
use std::sync::Arc;

use shared::{
    AvailableActivity, ItineraryActivity, ItineraryDestination, ItineraryView, ManifestEntry,
    PassengerActivityDetail, PassengerDetails, PassengerManifest,
};

use crate::storage::traits::{Connection, PackageStorage, PassengerStorage};

/// Read-model service over catalog + ledger state.
#[derive(Clone)]
pub struct ReportService<C: Connection> {
    package_repository: C::PackageRepository,
    passenger_repository: C::PassengerRepository,
}

impl<C: Connection> ReportService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            package_repository: connection.create_package_repository(),
            passenger_repository: connection.create_passenger_repository(),
        }
    }

    /// Itinerary of a package: destinations and their activities. `None`
    /// when the package name does not resolve.
    pub fn itinerary(&self, package_name: &str) -> Result<Option<ItineraryView>> {
        let Some(package) = self.package_repository.get_package(package_name)? else {
            return Ok(None);
        };
        let destinations = package
            .destinations
            .iter()
            .map(|destination| ItineraryDestination {
                name: destination.name.clone(),
                activities: destination
                    .activities
                    .iter()
                    .map(|activity| ItineraryActivity {
                        name: activity.name.clone(),
                        description: activity.description.clone(),
                        cost: activity.cost,
                        capacity: activity.capacity,
                    })
                    .collect(),
            })
            .collect();
        Ok(Some(ItineraryView {
            package_name: package.name,
            destinations,
        }))
    }

    /// Passenger list of a package: declared capacity, enrolled count, and
    /// the name/number of everyone assigned.
    pub fn passenger_manifest(&self, package_name: &str) -> Result<Option<PassengerManifest>> {
        let Some(package) = self.package_repository.get_package(package_name)? else {
            return Ok(None);
        };
        let ledger = self.passenger_repository.list_passengers()?;
        let by_number: HashMap<i32, &str> = ledger
            .iter()
            .map(|p| (p.number, p.name.as_str()))
            .collect();

        let passengers = package
            .passenger_numbers
            .iter()
            .filter_map(|number| match by_number.get(number) {
                Some(name) => Some(ManifestEntry {
                    name: (*name).to_string(),
                    number: *number,
                }),
                None => {
                    warn!("Passenger #{} on roster of {} missing from ledger", number, package.name);
                    None
                }
            })
            .collect::<Vec<_>>();

        Ok(Some(PassengerManifest {
            package_name: package.name,
            passenger_capacity: package.passenger_capacity,
            enrolled_count: passengers.len(),
            passengers,
        }))
    }

    /// Detail view of one passenger: tier, balance, and every enrollment
    /// with the activity's destination and catalog cost.
    pub fn passenger_details(&self, number: i32) -> Result<Option<PassengerDetails>> {
        let Some(passenger) = self.passenger_repository.get_passenger(number)? else {
            return Ok(None);
        };

        let mut activities = Vec::with_capacity(passenger.activities.len());
        for enrolled in &passenger.activities {
            let cost = match self
                .package_repository
                .find_activity(&enrolled.destination_name, &enrolled.activity_name)?
            {
                Some(activity) => activity.cost,
                None => {
                    warn!(
                        "Enrolled activity {} at {} missing from catalog",
                        enrolled.activity_name, enrolled.destination_name
                    );
                    continue;
                }
            };
            activities.push(PassengerActivityDetail {
                activity_name: enrolled.activity_name.clone(),
                destination_name: enrolled.destination_name.clone(),
                cost,
            });
        }

        Ok(Some(PassengerDetails {
            name: passenger.name,
            number: passenger.number,
            tier: passenger.tier.into(),
            balance: passenger.balance,
            activities,
        }))
    }

    /// Every activity across every package that still has capacity left.
    pub fn available_activities(&self) -> Result<Vec<AvailableActivity>> {
        let packages = self.package_repository.list_packages()?;
        Ok(packages
            .iter()
            .flat_map(|package| package.destinations.iter())
            .flat_map(|destination| destination.activities.iter())
            .filter(|activity| activity.has_availability())
            .map(|activity| AvailableActivity {
                activity_name: activity.name.clone(),
                destination_name: activity.destination_name.clone(),
                description: activity.description.clone(),
                cost: activity.cost,
                remaining_capacity: activity.capacity,
            })
            .collect())
    }
}
