use anyhow::Result;
use log::debug;

use crate::domain::models::Passenger;
use crate::storage::traits::PassengerStorage;

use super::connection::MemoryConnection;

/// In-memory passenger ledger repository.
#[derive(Clone)]
pub struct PassengerRepository {
    connection: MemoryConnection,
}

impl PassengerRepository {
    pub fn new(connection: MemoryConnection) -> Self {
        Self { connection }
    }
}

impl PassengerStorage for PassengerRepository {
    fn store_passenger(&self, passenger: &Passenger) -> Result<()> {
        let mut state = self.connection.write();
        state.passengers.push(passenger.clone());
        debug!(
            "Stored passenger {} (#{}), ledger size {}",
            passenger.name,
            passenger.number,
            state.passengers.len()
        );
        Ok(())
    }

    fn get_passenger(&self, number: i32) -> Result<Option<Passenger>> {
        let state = self.connection.read();
        Ok(state
            .passengers
            .iter()
            .find(|p| p.number == number)
            .cloned())
    }

    fn list_passengers(&self) -> Result<Vec<Passenger>> {
        let state = self.connection.read();
        Ok(state.passengers.clone())
    }
}
