use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid IP address length: {0} bytes, expected 4 or 16")]
    InvalidIpLength(usize),
}
