//! The phone-number capability the collapse rules depend on.
//!
//! Parsing and matching are delegated to a [`PhoneNumberOracle`]. The shipped
//! implementation, [`LibphonenumberOracle`], is backed by the `rlibphonenumber`
//! metadata; tests inject scripted oracles instead.

mod libphonenumber;

use crate::error::CoreError;
use serde::Serialize;
use thiserror::Error;

pub use libphonenumber::LibphonenumberOracle;

/// Country calling code shared by the North American Numbering Plan.
pub const NANP_COUNTRY_CODE: u16 = 1;

/// A number that carried an explicit country calling code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PhoneNumber {
    pub country_code: u16,
    /// National significant number, leading zeros included.
    pub national_number: String,
    pub extension: Option<String>,
}

/// Why text could not be read as an internationally dialable number.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("not a phone number")]
    NotANumber,
    /// Also returned for numbers that simply carry no country code.
    #[error("missing or invalid country code")]
    InvalidCountryCode,
    #[error("national number too short")]
    TooShortNsn,
    #[error("number too short after international dialing prefix")]
    TooShortAfterIdd,
    #[error("national number too long")]
    TooLongNsn,
}

/// How closely two phone numbers agree, strongest last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchType {
    NotANumber,
    NoMatch,
    ShortNsnMatch,
    NsnMatch,
    ExactMatch,
}

impl MatchType {
    pub const fn as_str(self) -> &'static str {
        match self {
            MatchType::NotANumber => "not-a-number",
            MatchType::NoMatch => "no-match",
            MatchType::ShortNsnMatch => "short-nsn-match",
            MatchType::NsnMatch => "nsn-match",
            MatchType::ExactMatch => "exact-match",
        }
    }

    /// Ordinal used by libphonenumber bindings.
    pub const fn code(self) -> i32 {
        match self {
            MatchType::NotANumber => 0,
            MatchType::NoMatch => 1,
            MatchType::ShortNsnMatch => 2,
            MatchType::NsnMatch => 3,
            MatchType::ExactMatch => 4,
        }
    }

    /// Decodes an oracle result received as a raw ordinal.
    ///
    /// An unrecognized code means the oracle's contract changed; it is reported as an
    /// error rather than mapped onto a guess.
    pub fn from_code(code: i32) -> Result<Self, CoreError> {
        match code {
            0 => Ok(MatchType::NotANumber),
            1 => Ok(MatchType::NoMatch),
            2 => Ok(MatchType::ShortNsnMatch),
            3 => Ok(MatchType::NsnMatch),
            4 => Ok(MatchType::ExactMatch),
            _ => Err(CoreError::UnknownMatchType(code)),
        }
    }
}

pub trait PhoneNumberOracle {
    /// Parses `text` without a default region: only numbers carrying an explicit
    /// country code succeed.
    fn parse(&self, text: &str) -> Result<PhoneNumber, ParseError>;

    /// Compares two free-form numbers, inferring a missing country code from the
    /// other side when it has one.
    fn match_type(&self, first: &str, second: &str) -> MatchType;
}

impl<T: PhoneNumberOracle + ?Sized> PhoneNumberOracle for &T {
    fn parse(&self, text: &str) -> Result<PhoneNumber, ParseError> {
        (**self).parse(text)
    }

    fn match_type(&self, first: &str, second: &str) -> MatchType {
        (**self).match_type(first, second)
    }
}
