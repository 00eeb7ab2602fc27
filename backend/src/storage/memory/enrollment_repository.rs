use anyhow::{anyhow, Result};
use chrono::Utc;
use log::debug;

use crate::domain::models::passenger::ActivityRef;
use crate::storage::traits::{EnrollmentCommit, EnrollmentStorage};

use super::connection::MemoryConnection;

/// In-memory implementation of the atomic enrollment commit.
#[derive(Clone)]
pub struct EnrollmentRepository {
    connection: MemoryConnection,
}

impl EnrollmentRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl EnrollmentStorage for EnrollmentRepository {
    fn commit_enrollment(
        &self,
        passenger_number: i32,
        destination_name: &str,
        activity_name: &str,
        amount_due: f64,
    ) -> Result<EnrollmentCommit> {
        let mut state = self.connection.write();
        // Split borrow: the activity lives in the catalog, the balance in
        // the ledger, and both must move together under this one lock.
        let state = &mut *state;

        let activity = state
            .packages
            .iter_mut()
            .find_map(|p| p.destinations.iter_mut().find(|d| d.name == destination_name))
            .and_then(|d| d.activities.iter_mut().find(|a| a.name == activity_name))
            .ok_or_else(|| {
                anyhow!(
                    "activity {} at destination {} vanished before commit",
                    activity_name,
                    destination_name
                )
            })?;

        let passenger = state
            .passengers
            .iter_mut()
            .find(|p| p.number == passenger_number)
            .ok_or_else(|| anyhow!("passenger {} vanished before commit", passenger_number))?;

        if !activity.has_availability() {
            debug!(
                "Commit rejected, activity {} at {} is sold out",
                activity_name, destination_name
            );
            return Ok(EnrollmentCommit::SoldOut);
        }

        if passenger.balance < amount_due {
            debug!(
                "Commit declined, passenger {} balance {:.2} below amount due {:.2}",
                passenger_number, passenger.balance, amount_due
            );
            return Ok(EnrollmentCommit::InsufficientBalance);
        }

        passenger.balance -= amount_due;
        activity.capacity -= 1;
        activity.passenger_numbers.push(passenger.number);
        passenger.activities.push(ActivityRef {
            activity_name: activity.name.clone(),
            destination_name: activity.destination_name.clone(),
            enrolled_at: Utc::now(),
        });

        Ok(EnrollmentCommit::Applied {
            amount_charged: amount_due,
            new_balance: passenger.balance,
            remaining_capacity: activity.capacity,
        })
    }
}
