//! Domain models for the booking system.
//!
//! The catalog tree is owned top-down: a travel package owns its
//! destinations, a destination owns its activities. Passengers and
//! activities never own each other — after an enrollment they reference
//! each other by key only (passenger number on one side, activity name +
//! destination name on the other).

pub mod activity;
pub mod destination;
pub mod enrollment;
pub mod passenger;
pub mod travel_package;

pub use activity::Activity;
pub use destination::Destination;
pub use enrollment::EnrollmentError;
pub use passenger::{ActivityRef, Passenger, PassengerTier};
pub use travel_package::TravelPackage;
