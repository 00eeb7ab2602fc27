//! Enrollment engine: the one place where pricing, balance checks, and
//! capacity consumption intersect.
//!
//! A sign-up call has three distinguishable endings:
//! - `Enrolled` — the tier-adjusted price was debited, one unit of capacity
//!   consumed, and the passenger/activity link recorded on both sides;
//! - `DeclinedInsufficientBalance` — a valid, non-error outcome that leaves
//!   every piece of state exactly as it was;
//! - an [`EnrollmentError`] — the passenger, destination, or activity did
//!   not resolve, or the activity was already fully booked.

use log::info;
use std::sync::Arc;

use shared::EnrollmentOutcome;

use crate::domain::commands::enrollment::{SignUpForActivityCommand, SignUpForActivityResult};
use crate::domain::models::{EnrollmentError, PassengerTier};
use crate::storage::traits::{
    Connection, EnrollmentCommit, EnrollmentStorage, PackageStorage, PassengerStorage,
};

/// The enrollment engine.
#[derive(Clone)]
pub struct EnrollmentService<C: Connection> {
    package_repository: C::PackageRepository,
    passenger_repository: C::PassengerRepository,
    enrollment_repository: C::EnrollmentRepository,
}

impl<C: Connection> EnrollmentService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        Self {
            package_repository: connection.create_package_repository(),
            passenger_repository: connection.create_passenger_repository(),
            enrollment_repository: connection.create_enrollment_repository(),
        }
    }

    /// Sign a passenger up for an activity at a destination.
    ///
    /// Resolution order is fixed: passenger, then destination (searched
    /// across every package in the catalog), then activity within that
    /// destination, then availability. Each step is a hard precondition and
    /// fails the call with the key that did not resolve. Pricing and the
    /// actual debit/decrement happen atomically afterwards; running out of
    /// balance at that point is a declined outcome, not an error.
    pub fn sign_up_passenger_for_activity(
        &self,
        command: SignUpForActivityCommand,
    ) -> Result<SignUpForActivityResult, EnrollmentError> {
        info!(
            "Sign-up request: passenger #{} for {} at {}",
            command.passenger_number, command.activity_name, command.destination_name
        );

        let passenger = self
            .passenger_repository
            .get_passenger(command.passenger_number)?
            .ok_or(EnrollmentError::PassengerNotFound(command.passenger_number))?;

        let destination = self
            .package_repository
            .find_destination(&command.destination_name)?
            .ok_or_else(|| EnrollmentError::DestinationNotFound(command.destination_name.clone()))?;

        let activity = self
            .package_repository
            .find_activity(&destination.name, &command.activity_name)?
            .ok_or_else(|| EnrollmentError::ActivityNotFound {
                name: command.activity_name.clone(),
                destination: destination.name.clone(),
            })?;

        if !activity.has_availability() {
            return Err(EnrollmentError::ActivityFull {
                name: activity.name,
                destination: destination.name,
            });
        }

        let amount_due = passenger.tier.amount_due(activity.cost);
        let commit = self.enrollment_repository.commit_enrollment(
            passenger.number,
            &destination.name,
            &activity.name,
            amount_due,
        )?;

        match commit {
            EnrollmentCommit::Applied {
                amount_charged,
                new_balance,
                remaining_capacity,
            } => {
                let message = match passenger.tier {
                    PassengerTier::Standard => format!(
                        "{} signed up for {} at {}.",
                        passenger.name, activity.name, destination.name
                    ),
                    PassengerTier::Gold => format!(
                        "{} signed up for {} at {} with a 10% discount.",
                        passenger.name, activity.name, destination.name
                    ),
                    PassengerTier::Premium => format!(
                        "{} signed up for {} at {} for free.",
                        passenger.name, activity.name, destination.name
                    ),
                };
                info!("{}", message);
                Ok(SignUpForActivityResult {
                    outcome: EnrollmentOutcome::Enrolled,
                    amount_charged,
                    new_balance,
                    remaining_capacity,
                    message,
                })
            }
            EnrollmentCommit::InsufficientBalance => {
                let message = format!(
                    "{} does not have sufficient balance to sign up for {}.",
                    passenger.name, activity.name
                );
                info!("{}", message);
                Ok(SignUpForActivityResult {
                    outcome: EnrollmentOutcome::DeclinedInsufficientBalance,
                    amount_charged: 0.0,
                    new_balance: passenger.balance,
                    remaining_capacity: activity.capacity,
                    message,
                })
            }
            // Lost the race between the availability check and the commit;
            // same failure the earlier check reports.
            EnrollmentCommit::SoldOut => Err(EnrollmentError::ActivityFull {
                name: activity.name,
                destination: destination.name,
            }),
        }
    }
}
