// Main library file for the room booking utility

// Export modules for each part of the booking system
pub mod catalog;
pub mod config;
pub mod console;
pub mod registry;
pub mod validation;

// Re-export key types for convenience
pub use catalog::{
    Area, CatalogEntry, RoomOption, RoomTemplate, AREAS, ROOM_COUNT, ROOM_TEMPLATES,
};
pub use config::{BookingConfig, ConfigError};
pub use console::{Console, ConsoleError, MenuChoice};
pub use registry::{Booking, BookingError, BookingRegistry, BookingRequest, MAX_BOOKINGS};
pub use validation::{is_valid_phone_number, is_valid_time_format, parse_time};
