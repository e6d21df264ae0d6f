pub mod appointment;
pub mod doctor;
pub mod patient;
pub mod prediction;
