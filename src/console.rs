// Interactive menu over any line-oriented reader/writer pair.
// Invalid field input is re-prompted until it validates, the configured
// attempt limit runs out, or the input stream ends.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    catalog::{room_number_catalog, room_options, template_index, ROOM_TEMPLATES},
    registry::{BookingError, BookingRegistry, BookingRequest},
    validation::{is_valid_phone_number, is_valid_time_format},
};

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Input stream closed")]
    InputClosed,

    #[error("Too many invalid attempts for {0}, operation cancelled.")]
    RetriesExhausted(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    BookRoom,
    SetHost,
    SetStartTime,
    SetEndTime,
    SetChairCapacity,
    ShowRoomNumbers,
    ShowBookings,
    Exit,
}

impl MenuChoice {
    pub fn from_input(input: &str) -> Option<Self> {
        let choice = match input.trim().parse::<i64>().ok()? {
            1 => Self::BookRoom,
            2 => Self::SetHost,
            3 => Self::SetStartTime,
            4 => Self::SetEndTime,
            5 => Self::SetChairCapacity,
            6 => Self::ShowRoomNumbers,
            7 => Self::ShowBookings,
            0 => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

const MENU: &str = "\n1. Book a room\
                    \n2. Set the host\
                    \n3. Set the start time\
                    \n4. Set the end time\
                    \n5. Set the chair capacity\
                    \n6. Display the room numbers\
                    \n7. Display booked room details\
                    \n0. Exit\n";

const INVALID_START_TIME: &str = "Invalid start time format. Use HH:MM format: ";
const INVALID_END_TIME: &str = "Invalid end time format. Use HH:MM format: ";

pub struct Console<R, W> {
    input: R,
    output: W,
    registry: BookingRegistry,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, registry: BookingRegistry) -> Self {
        Self {
            input,
            output,
            registry,
        }
    }

    pub fn into_parts(self) -> (R, W, BookingRegistry) {
        (self.input, self.output, self.registry)
    }

    /// Runs the menu loop until the operator exits or the input ends.
    ///
    /// Only I/O failures are returned; everything else is reported to the
    /// operator and the loop carries on.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            write!(self.output, "{MENU}")?;
            self.prompt("Enter Your Choice: ")?;

            let line = match self.read_line() {
                Ok(line) => line,
                Err(ConsoleError::InputClosed) => break,
                Err(e) => return Err(e),
            };

            let Some(choice) = MenuChoice::from_input(&line) else {
                debug!(input = %line, "invalid menu choice");
                writeln!(self.output, "Invalid Choice! Please try again.")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                writeln!(self.output, "Exiting...")?;
                break;
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(ConsoleError::InputClosed) => break,
                Err(e @ ConsoleError::RetriesExhausted(_)) => {
                    warn!("{e}");
                    writeln!(self.output, "{e}")?;
                }
                Err(e) => return Err(e),
            }
        }

        self.output.flush()?;
        info!(bookings = self.registry.len(), "session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<(), ConsoleError> {
        debug!(?choice, "menu choice");
        match choice {
            MenuChoice::BookRoom => self.book_room(),
            MenuChoice::SetHost => self.set_host(),
            MenuChoice::SetStartTime => self.set_start_time(),
            MenuChoice::SetEndTime => self.set_end_time(),
            MenuChoice::SetChairCapacity => self.set_chair_capacity(),
            MenuChoice::ShowRoomNumbers => self.show_room_numbers(),
            MenuChoice::ShowBookings => self.show_bookings(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    // One line with surrounding whitespace removed
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    // Prompts once, then keeps re-prompting with `retry` until `parse` accepts
    // the line or the attempt limit is reached.
    fn prompt_until<T>(
        &mut self,
        field: &'static str,
        first: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, ConsoleError> {
        let limit = self.registry.config().max_prompt_attempts;
        let mut attempts = 0u32;

        self.prompt(first)?;
        loop {
            let line = self.read_line()?;
            if let Some(value) = parse(&line) {
                return Ok(value);
            }

            attempts += 1;
            debug!(field, attempts, input = %line, "rejected input");
            if limit.is_some_and(|max| attempts >= max) {
                return Err(ConsoleError::RetriesExhausted(field));
            }
            self.prompt(retry)?;
        }
    }

    fn prompt_time(
        &mut self,
        field: &'static str,
        first: &str,
        retry: &str,
    ) -> Result<String, ConsoleError> {
        self.prompt_until(field, first, retry, |s| {
            is_valid_time_format(s).then(|| s.to_string())
        })
    }

    fn show_room_options(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "Available rooms for booking:")?;
        for option in room_options() {
            writeln!(
                self.output,
                "{}. {} (Capacity: {}, Room No: {})",
                option.selection,
                option.template.name,
                option.template.capacity,
                option.template.room_number
            )?;
        }
        Ok(())
    }

    // Zero-based template index
    fn choose_room_template(&mut self) -> Result<usize, ConsoleError> {
        self.show_room_options()?;
        let retry = format!(
            "Invalid choice. Please enter a number between 1 and {}: ",
            ROOM_TEMPLATES.len()
        );
        self.prompt_until(
            "room choice",
            "Enter the number corresponding to your choice: ",
            &retry,
            |s| s.parse::<i64>().ok().and_then(template_index),
        )
    }

    fn prompt_room_number(&mut self, purpose: &str) -> Result<i32, ConsoleError> {
        self.prompt_until(
            "room number",
            &format!("Enter the room number to {purpose}: "),
            "Invalid room number. Please enter a whole number: ",
            |s| s.parse::<i32>().ok(),
        )
    }

    // Looks the room up before asking for the new value, so a miss never
    // prompts for data that would be thrown away.
    fn require_booked(&mut self, room_number: i32) -> Result<bool, ConsoleError> {
        if self.registry.find(room_number).is_some() {
            return Ok(true);
        }
        warn!(room_number, "update for unbooked room");
        writeln!(self.output, "{}", BookingError::RoomNotFound(room_number))?;
        Ok(false)
    }

    // Registry errors become operator messages
    fn report(&mut self, result: Result<String, BookingError>) -> Result<(), ConsoleError> {
        match result {
            Ok(message) => writeln!(self.output, "{message}")?,
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(())
    }

    fn book_room(&mut self) -> Result<(), ConsoleError> {
        if self.registry.is_full() {
            let msg = BookingError::NoRoomsAvailable;
            warn!("{msg}");
            writeln!(self.output, "{msg}")?;
            return Ok(());
        }

        self.prompt("Enter host's name: ")?;
        let host_name = self.read_line()?;

        let template = self.choose_room_template()?;
        let room_number = ROOM_TEMPLATES[template].room_number;
        if self.registry.config().enforce_room_availability
            && !self.registry.is_room_available(room_number)
        {
            writeln!(self.output, "{}", BookingError::RoomAlreadyBooked(room_number))?;
            return Ok(());
        }

        let phone_number = self.prompt_until(
            "phone number",
            "Enter phone number (10 digits): ",
            "Invalid phone number format. Please enter 10 digits: ",
            |s| is_valid_phone_number(s).then(|| s.to_string()),
        )?;
        let start_time =
            self.prompt_time("start time", "Enter start time (HH:MM): ", INVALID_START_TIME)?;
        let end_time =
            self.prompt_time("end time", "Enter end time (HH:MM): ", INVALID_END_TIME)?;

        let result = self
            .registry
            .book_room(BookingRequest {
                host_name,
                template,
                phone_number,
                start_time,
                end_time,
            })
            .map(|n| format!("Room booked successfully! Room Number: {n}"));
        self.report(result)
    }

    fn set_host(&mut self) -> Result<(), ConsoleError> {
        let room_number = self.prompt_room_number("set the host")?;
        if !self.require_booked(room_number)? {
            return Ok(());
        }

        self.prompt("Enter new host name: ")?;
        let host_name = self.read_line()?;

        let result = self
            .registry
            .set_host(room_number, host_name)
            .map(|room| format!("Host name updated for room {room}."));
        self.report(result)
    }

    fn set_start_time(&mut self) -> Result<(), ConsoleError> {
        let room_number = self.prompt_room_number("set start time")?;
        if !self.require_booked(room_number)? {
            return Ok(());
        }

        let time = self.prompt_time(
            "start time",
            "Enter new start time (HH:MM): ",
            INVALID_START_TIME,
        )?;
        let result = self
            .registry
            .set_start_time(room_number, &time)
            .map(|room| format!("Start time updated for room {room}."));
        self.report(result)
    }

    fn set_end_time(&mut self) -> Result<(), ConsoleError> {
        let room_number = self.prompt_room_number("set end time")?;
        if !self.require_booked(room_number)? {
            return Ok(());
        }

        let time =
            self.prompt_time("end time", "Enter new end time (HH:MM): ", INVALID_END_TIME)?;
        let result = self
            .registry
            .set_end_time(room_number, &time)
            .map(|room| format!("End time updated for room {room}."));
        self.report(result)
    }

    fn set_chair_capacity(&mut self) -> Result<(), ConsoleError> {
        let room_number = self.prompt_room_number("set chair capacity")?;
        if !self.require_booked(room_number)? {
            return Ok(());
        }

        let capacity = self.prompt_until(
            "chair capacity",
            "Enter new chair capacity: ",
            "Invalid chair capacity. Please enter a whole number: ",
            |s| s.parse::<i32>().ok(),
        )?;
        let result = self
            .registry
            .set_chair_capacity(room_number, capacity)
            .map(|room| format!("Chair capacity updated for room {room}."));
        self.report(result)
    }

    fn show_room_numbers(&mut self) -> Result<(), ConsoleError> {
        writeln!(self.output, "\n\t\t\t******* Room Numbers *******\t\t\t")?;
        for entry in room_number_catalog() {
            writeln!(self.output, "{}: Room No. {}", entry.name, entry.room_number)?;
        }
        Ok(())
    }

    fn show_bookings(&mut self) -> Result<(), ConsoleError> {
        if self.registry.is_empty() {
            writeln!(self.output, "No rooms have been booked yet.")?;
            return Ok(());
        }

        writeln!(self.output, "\n\t\t\t******* Booked Room Details *******\t\t\t")?;
        for booking in self.registry.bookings() {
            writeln!(self.output, "{booking}\n")?;
        }
        Ok(())
    }
}
