//! Domain models and request/response types

pub mod attraction;
pub mod booking;
pub mod customer;
pub mod enums;
pub mod hotel;
pub mod staff;
pub mod submission;
pub mod transport;
