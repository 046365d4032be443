pub mod availability;
pub mod booking;
pub mod format;
pub mod slot;
