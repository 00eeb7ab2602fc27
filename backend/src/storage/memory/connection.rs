use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::models::{Passenger, TravelPackage};
use crate::storage::traits::Connection;

use super::{EnrollmentRepository, PackageRepository, PassengerRepository};

/// Whole-service state: the catalog and the passenger ledger, kept behind
/// one lock so the enrollment commit can mutate both sides in a single
/// critical section.
#[derive(Debug, Default)]
pub(crate) struct AgencyState {
    pub packages: Vec<TravelPackage>,
    pub passengers: Vec<Passenger>,
}

/// In-memory storage connection. Cloning is cheap and every clone shares
/// the same underlying state, mirroring how a pooled database connection
/// would behave.
#[derive(Clone)]
pub struct MemoryConnection {
    state: Arc<RwLock<AgencyState>>,
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(AgencyState::default())),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, AgencyState> {
        self.state.read().unwrap()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, AgencyState> {
        self.state.write().unwrap()
    }
}

impl Default for MemoryConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl Connection for MemoryConnection {
    type PackageRepository = PackageRepository;
    type PassengerRepository = PassengerRepository;
    type EnrollmentRepository = EnrollmentRepository;

    fn create_package_repository(&self) -> Self::PackageRepository {
        PackageRepository::new(self.clone())
    }

    fn create_passenger_repository(&self) -> Self::PassengerRepository {
        PassengerRepository::new(self.clone())
    }

    fn create_enrollment_repository(&self) -> Self::EnrollmentRepository {
        EnrollmentRepository::new(self.clone())
    }
}
