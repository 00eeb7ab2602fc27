pub mod memory;
pub mod traits;

pub use traits::{
    Connection, EnrollmentCommit, EnrollmentStorage, PackageStorage, PassengerStorage,
};
