// Field validation for phone numbers and HH:MM times

use chrono::NaiveTime;

pub const PHONE_NUMBER_LEN: usize = 10;

// Parses a strict HH:MM value. Every position other than the colon has to be
// an ASCII digit; single-digit hours such as "9:00" are rejected.
pub fn parse_time(time: &str) -> Option<NaiveTime> {
    let bytes = time.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }

    let two_digits = |hi: u8, lo: u8| -> Option<u32> {
        if hi.is_ascii_digit() && lo.is_ascii_digit() {
            Some(u32::from(hi - b'0') * 10 + u32::from(lo - b'0'))
        } else {
            None
        }
    };

    let hour = two_digits(bytes[0], bytes[1])?;
    let minute = two_digits(bytes[3], bytes[4])?;

    NaiveTime::from_hms_opt(hour, minute, 0)
}

pub fn is_valid_time_format(time: &str) -> bool {
    parse_time(time).is_some()
}

pub fn is_valid_phone_number(phone_number: &str) -> bool {
    phone_number.len() == PHONE_NUMBER_LEN && phone_number.bytes().all(|b| b.is_ascii_digit())
}
