// Booking registry: holds the booked rooms and every mutation on them

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    catalog::{RoomTemplate, ROOM_COUNT, ROOM_TEMPLATES},
    config::BookingConfig,
    validation::{is_valid_phone_number, is_valid_time_format},
};

// One slot per room template
pub const MAX_BOOKINGS: usize = ROOM_COUNT;

// The Display strings double as the messages shown to the operator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("No rooms available for booking.")]
    NoRoomsAvailable,

    #[error("Room number {0} not found.")]
    RoomNotFound(i32),

    #[error("Room number {0} is already booked.")]
    RoomAlreadyBooked(i32),

    #[error("Invalid room choice: {0}")]
    InvalidRoomChoice(usize),

    #[error("Invalid phone number format: {0}")]
    InvalidPhoneNumber(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub room_name: String,
    pub host_name: String,
    pub phone_number: String,
    pub start_time: String,
    pub end_time: String,
    pub chair_capacity: i32,
    pub room_number: i32,
}

impl Booking {
    fn from_template(template: &RoomTemplate, request: BookingRequest) -> Self {
        Self {
            room_name: template.name.to_string(),
            host_name: request.host_name,
            phone_number: request.phone_number,
            start_time: request.start_time,
            end_time: request.end_time,
            chair_capacity: template.capacity,
            room_number: template.room_number,
        }
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Room Name: {}", self.room_name)?;
        writeln!(f, "Host Name: {}", self.host_name)?;
        writeln!(f, "Phone Number: {}", self.phone_number)?;
        writeln!(f, "Start Time: {}", self.start_time)?;
        writeln!(f, "End Time: {}", self.end_time)?;
        writeln!(f, "Chair Capacity: {}", self.chair_capacity)?;
        write!(f, "Room Number: {}", self.room_number)
    }
}

// Everything the operator supplies for a new booking.
// `template` is a zero-based index into ROOM_TEMPLATES.
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    pub host_name: String,
    pub template: usize,
    pub phone_number: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Default)]
pub struct BookingRegistry {
    bookings: Vec<Booking>,
    config: BookingConfig,
}

impl BookingRegistry {
    pub fn new(config: BookingConfig) -> Self {
        Self {
            bookings: Vec::with_capacity(MAX_BOOKINGS),
            config,
        }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    // Bookings in insertion order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.bookings.len() >= MAX_BOOKINGS
    }

    pub fn is_room_available(&self, room_number: i32) -> bool {
        !self.bookings.iter().any(|b| b.room_number == room_number)
    }

    pub fn find(&self, room_number: i32) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.room_number == room_number)
    }

    fn find_mut(&mut self, room_number: i32) -> Result<&mut Booking, BookingError> {
        match self
            .bookings
            .iter_mut()
            .find(|b| b.room_number == room_number)
        {
            Some(booking) => Ok(booking),
            None => {
                debug!(room_number, "lookup missed");
                Err(BookingError::RoomNotFound(room_number))
            }
        }
    }

    // Cuts the host name down to the configured number of characters
    fn clamp_host_name(&self, host_name: String) -> String {
        match host_name.char_indices().nth(self.config.host_name_max_chars) {
            Some((cut, _)) => {
                warn!(
                    max_chars = self.config.host_name_max_chars,
                    "host name truncated"
                );
                host_name[..cut].to_string()
            }
            None => host_name,
        }
    }

    /// Appends a booking built from the chosen template and returns its room number.
    ///
    /// The booked count is the admission guard; `enforce_room_availability`
    /// additionally refuses a template whose room number is already booked.
    pub fn book_room(&mut self, request: BookingRequest) -> Result<i32, BookingError> {
        if self.is_full() {
            warn!(booked = self.bookings.len(), "booking refused, registry is full");
            return Err(BookingError::NoRoomsAvailable);
        }

        let template = ROOM_TEMPLATES
            .get(request.template)
            .ok_or(BookingError::InvalidRoomChoice(request.template))?;

        if self.config.enforce_room_availability && !self.is_room_available(template.room_number)
        {
            return Err(BookingError::RoomAlreadyBooked(template.room_number));
        }

        if !is_valid_phone_number(&request.phone_number) {
            return Err(BookingError::InvalidPhoneNumber(request.phone_number));
        }
        for time in [&request.start_time, &request.end_time] {
            if !is_valid_time_format(time) {
                return Err(BookingError::InvalidTime(time.clone()));
            }
        }

        let request = BookingRequest {
            host_name: self.clamp_host_name(request.host_name),
            ..request
        };
        let booking = Booking::from_template(template, request);
        let room_number = booking.room_number;

        info!(
            room_number,
            room_name = %booking.room_name,
            host = %booking.host_name,
            "room booked"
        );
        self.bookings.push(booking);

        Ok(room_number)
    }

    // Each setter returns the updated booking's room name for the confirmation message

    pub fn set_host(&mut self, room_number: i32, host_name: String) -> Result<&str, BookingError> {
        let host_name = self.clamp_host_name(host_name);
        let booking = self.find_mut(room_number)?;
        booking.host_name = host_name;
        info!(room_number, host = %booking.host_name, "host updated");
        Ok(&booking.room_name)
    }

    pub fn set_start_time(
        &mut self,
        room_number: i32,
        start_time: &str,
    ) -> Result<&str, BookingError> {
        if !is_valid_time_format(start_time) {
            return Err(BookingError::InvalidTime(start_time.to_string()));
        }
        let booking = self.find_mut(room_number)?;
        booking.start_time = start_time.to_string();
        info!(room_number, start_time, "start time updated");
        Ok(&booking.room_name)
    }

    pub fn set_end_time(
        &mut self,
        room_number: i32,
        end_time: &str,
    ) -> Result<&str, BookingError> {
        if !is_valid_time_format(end_time) {
            return Err(BookingError::InvalidTime(end_time.to_string()));
        }
        let booking = self.find_mut(room_number)?;
        booking.end_time = end_time.to_string();
        info!(room_number, end_time, "end time updated");
        Ok(&booking.room_name)
    }

    // No range check: zero and negative capacities are stored as given
    pub fn set_chair_capacity(
        &mut self,
        room_number: i32,
        capacity: i32,
    ) -> Result<&str, BookingError> {
        let booking = self.find_mut(room_number)?;
        booking.chair_capacity = capacity;
        info!(room_number, capacity, "chair capacity updated");
        Ok(&booking.room_name)
    }
}
