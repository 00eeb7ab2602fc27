//! End-to-end tests driving the backend through its DTO boundary, the way
//! a transport layer would.

use std::sync::Arc;
use std::thread;

use shared::{EnrollmentOutcome, PassengerTier};
use tourbook_backend::domain::models::EnrollmentError;
use tourbook_backend::Backend;

fn package(id: u32, name: &str, passenger_capacity: u32) -> shared::TravelPackage {
    shared::TravelPackage {
        id,
        name: name.to_string(),
        passenger_capacity,
        destinations: Vec::new(),
        passenger_numbers: Vec::new(),
    }
}

fn destination(id: u32, name: &str) -> shared::Destination {
    shared::Destination {
        id,
        name: name.to_string(),
        activities: Vec::new(),
    }
}

fn activity(name: &str, description: &str, cost: f64, capacity: u32) -> shared::Activity {
    shared::Activity {
        name: name.to_string(),
        description: description.to_string(),
        cost,
        capacity,
        passenger_numbers: Vec::new(),
    }
}

fn passenger(number: i32, name: &str, balance: f64, tier: PassengerTier) -> shared::Passenger {
    shared::Passenger {
        number,
        name: name.to_string(),
        balance,
        tier,
        activities: Vec::new(),
    }
}

/// Backend seeded with "Package 1" / "Paris" / an "Eiffel Tower Tour"
/// activity of the given cost and capacity.
fn seeded_backend(cost: f64, capacity: u32) -> Backend {
    let backend = Backend::new();
    backend
        .create_travel_package(package(1, "Package 1", 20))
        .unwrap();
    assert!(backend
        .add_destination_to_package("Package 1", destination(1, "Paris"))
        .unwrap());
    assert!(backend
        .add_activity_to_destination(
            "Package 1",
            "Paris",
            activity("Eiffel Tower Tour", "Visit the iconic Eiffel Tower", cost, capacity),
        )
        .unwrap());
    backend
}

#[test]
fn full_enrollment_flow_for_standard_and_gold_passengers() {
    let backend = seeded_backend(50.0, 2);
    assert!(backend
        .add_passenger_to_package("Package 1", passenger(1, "John Smith", 500.0, PassengerTier::Standard))
        .unwrap());
    assert!(backend
        .add_passenger_to_package("Package 1", passenger(2, "Emily Johnson", 1000.0, PassengerTier::Gold))
        .unwrap());

    let first = backend
        .sign_up_passenger_for_activity(1, "Eiffel Tower Tour", "Paris")
        .unwrap();
    assert_eq!(first.outcome, EnrollmentOutcome::Enrolled);
    assert_eq!(first.new_balance, 450.0);
    assert_eq!(first.remaining_capacity, 1);

    let second = backend
        .sign_up_passenger_for_activity(2, "Eiffel Tower Tour", "Paris")
        .unwrap();
    assert_eq!(second.outcome, EnrollmentOutcome::Enrolled);
    assert_eq!(second.amount_charged, 45.0);
    assert_eq!(second.new_balance, 955.0);
    assert_eq!(second.remaining_capacity, 0);

    // Capacity is exhausted; a third attempt fails rather than going
    // negative.
    let third = backend
        .sign_up_passenger_for_activity(2, "Eiffel Tower Tour", "Paris")
        .unwrap_err();
    assert!(matches!(third, EnrollmentError::ActivityFull { .. }));

    let details = backend.passenger_details(2).unwrap().unwrap();
    assert_eq!(details.balance, 955.0);
    assert_eq!(details.activities.len(), 1);
    assert_eq!(details.activities[0].cost, 50.0);

    // The sold-out tour no longer shows up as available.
    assert!(backend.available_activities().unwrap().is_empty());
}

#[test]
fn declined_sign_up_is_not_an_error_and_changes_nothing() {
    let backend = seeded_backend(500.0, 10);
    assert!(backend
        .add_passenger_to_package("Package 1", passenger(3, "Michael Davis", 200.0, PassengerTier::Standard))
        .unwrap());

    let response = backend
        .sign_up_passenger_for_activity(3, "Eiffel Tower Tour", "Paris")
        .unwrap();
    assert_eq!(response.outcome, EnrollmentOutcome::DeclinedInsufficientBalance);
    assert_eq!(response.new_balance, 200.0);
    assert_eq!(response.remaining_capacity, 10);

    let details = backend.passenger_details(3).unwrap().unwrap();
    assert_eq!(details.balance, 200.0);
    assert!(details.activities.is_empty());
}

#[test]
fn lookup_failures_surface_the_offending_keys() {
    let backend = seeded_backend(50.0, 10);
    assert!(backend
        .add_passenger_to_package("Package 1", passenger(1, "John Smith", 500.0, PassengerTier::Standard))
        .unwrap());

    let err = backend
        .sign_up_passenger_for_activity(10, "Any", "Any")
        .unwrap_err();
    assert!(matches!(err, EnrollmentError::PassengerNotFound(10)));

    let err = backend
        .sign_up_passenger_for_activity(1, "Scuba Diving", "Paris")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Activity with name Scuba Diving not found at destination Paris."
    );

    let err = backend
        .sign_up_passenger_for_activity(1, "Eiffel Tower Tour", "Goa")
        .unwrap_err();
    assert_eq!(err.to_string(), "Destination with name Goa not found.");
}

#[test]
fn passenger_assigned_to_unknown_package_is_dropped_silently() {
    let backend = seeded_backend(50.0, 10);
    let added = backend
        .add_passenger_to_package("Nowhere", passenger(7, "Ghost", 100.0, PassengerTier::Standard))
        .unwrap();
    assert!(!added);
    assert!(backend.passenger_details(7).unwrap().is_none());
}

#[test]
fn destination_resolves_across_packages() {
    let backend = seeded_backend(50.0, 10);
    backend.create_travel_package(package(2, "Asia Escape", 15)).unwrap();
    assert!(backend
        .add_destination_to_package("Asia Escape", destination(2, "Goa"))
        .unwrap());
    assert!(backend
        .add_activity_to_destination("Asia Escape", "Goa", activity("Snorkeling", "Reef tour", 80.0, 4))
        .unwrap());
    assert!(backend
        .add_passenger_to_package("Package 1", passenger(1, "John Smith", 500.0, PassengerTier::Standard))
        .unwrap());

    // Passenger 1 is assigned to "Package 1", but the destination lookup is
    // catalog-wide, so an enrollment at "Goa" goes through.
    let response = backend
        .sign_up_passenger_for_activity(1, "Snorkeling", "Goa")
        .unwrap();
    assert_eq!(response.outcome, EnrollmentOutcome::Enrolled);
    assert_eq!(response.new_balance, 420.0);
}

#[test]
fn reports_reflect_engine_state() {
    let backend = seeded_backend(50.0, 10);
    assert!(backend
        .add_passenger_to_package("Package 1", passenger(1, "John Smith", 500.0, PassengerTier::Standard))
        .unwrap());

    let itinerary = backend.itinerary("Package 1").unwrap().unwrap();
    assert_eq!(itinerary.destinations[0].name, "Paris");
    assert_eq!(itinerary.destinations[0].activities[0].cost, 50.0);

    let manifest = backend.passenger_manifest("Package 1").unwrap().unwrap();
    assert_eq!(manifest.passenger_capacity, 20);
    assert_eq!(manifest.enrolled_count, 1);

    let packages = backend.list_travel_packages().unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].passenger_numbers, vec![1]);

    let ledger = backend.list_passengers().unwrap();
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].tier, PassengerTier::Standard);
}

#[test]
fn capacity_one_admits_exactly_one_of_two_concurrent_sign_ups() {
    let backend = Arc::new(seeded_backend(50.0, 1));
    assert!(backend
        .add_passenger_to_package("Package 1", passenger(1, "John Smith", 500.0, PassengerTier::Standard))
        .unwrap());
    assert!(backend
        .add_passenger_to_package("Package 1", passenger(2, "Emily Johnson", 1000.0, PassengerTier::Gold))
        .unwrap());

    let handles: Vec<_> = [1, 2]
        .into_iter()
        .map(|number| {
            let backend = Arc::clone(&backend);
            thread::spawn(move || {
                backend.sign_up_passenger_for_activity(number, "Eiffel Tower Tour", "Paris")
            })
        })
        .collect();

    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let enrolled = outcomes
        .iter()
        .filter(|r| matches!(r, Ok(response) if response.outcome == EnrollmentOutcome::Enrolled))
        .count();
    let full = outcomes
        .iter()
        .filter(|r| matches!(r, Err(EnrollmentError::ActivityFull { .. })))
        .count();
    assert_eq!(enrolled, 1);
    assert_eq!(full, 1);

    // Whoever won, the invariants hold: capacity is 0, never negative, and
    // only one balance moved.
    let packages = backend.list_travel_packages().unwrap();
    let activity = &packages[0].destinations[0].activities[0];
    assert_eq!(activity.capacity, 0);
    assert_eq!(activity.passenger_numbers.len(), 1);
}
