pub mod appointment;
pub mod auth;
pub mod consultation;
pub mod doctor;
pub mod envelope;
pub mod patient;
pub mod user;
