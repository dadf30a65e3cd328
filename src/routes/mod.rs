pub mod appointments;
pub mod products;
pub mod status;
