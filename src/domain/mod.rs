pub mod payment;
pub mod ports;
pub mod registration;
pub mod signature;
