pub mod address;
pub mod error;

pub use address::{Address, Host};
pub use error::{AddressError, Result};
