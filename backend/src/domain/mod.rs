//! # Domain Module
//!
//! Business logic for the travel agency booking system.
//!
//! The catalog side (packages, destinations, activities) and the ledger
//! side (passengers and balances) stay independent until the enrollment
//! engine links them: a sign-up resolves both, prices the activity under
//! the passenger's tier, and commits the debit, the capacity decrement, and
//! the bidirectional passenger/activity link as one decision.
//!
//! ## Module Organization
//!
//! - **package_service**: catalog ownership and name-keyed lookup
//! - **passenger_service**: the passenger ledger
//! - **enrollment_service**: the sign-up engine (pricing, balance, capacity)
//! - **report_service**: read-only views for presentation layers
//! - **commands**: internal command/result types used by the services
//! - **models**: the entity types and the enrollment error taxonomy
//!
//! ## Business Rules
//!
//! - Standard passengers pay the full activity cost, gold passengers pay
//!   90% of it, premium passengers pay nothing
//! - A debit never drives a balance negative: the sign-up is declined
//!   instead, leaving all state untouched
//! - Remaining capacity never goes negative: once it reaches zero, further
//!   sign-ups fail as fully booked
//! - Name lookups are linear scans where the first match wins; destination
//!   lookup spans every package in the catalog
//! - Assignments to unknown packages are dropped silently, not rejected

pub mod commands;
pub mod enrollment_service;
pub mod models;
pub mod package_service;
pub mod passenger_service;
pub mod report_service;

pub use enrollment_service::EnrollmentService;
pub use package_service::PackageService;
pub use passenger_service::PassengerService;
pub use report_service::ReportService;
