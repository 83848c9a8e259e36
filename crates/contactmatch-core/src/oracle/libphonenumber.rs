use super::{MatchType, ParseError, PhoneNumber, PhoneNumberOracle};
use rlibphonenumber::{
    get_national_significant_number_owned, MatchType as LibMatchType,
    ParseError as LibParseError, PHONE_NUMBER_UTIL,
};

/// [`PhoneNumberOracle`] over the process-wide `rlibphonenumber` instance.
///
/// Parsing never assumes a default region, so only text with a `+` country code
/// (or a number already in E.164 form) parses successfully.
#[derive(Debug, Default, Clone, Copy)]
pub struct LibphonenumberOracle;

impl LibphonenumberOracle {
    pub fn new() -> Self {
        Self
    }
}

impl PhoneNumberOracle for LibphonenumberOracle {
    fn parse(&self, text: &str) -> Result<PhoneNumber, ParseError> {
        let number = PHONE_NUMBER_UTIL.parse(text, None).map_err(map_parse_error)?;
        let country_code =
            u16::try_from(number.country_code).map_err(|_| ParseError::InvalidCountryCode)?;
        Ok(PhoneNumber {
            country_code,
            national_number: get_national_significant_number_owned(&number),
            extension: number.extension,
        })
    }

    fn match_type(&self, first: &str, second: &str) -> MatchType {
        // The library reports unparseable input as an error rather than a variant.
        match PHONE_NUMBER_UTIL.is_number_match_with_two_strings(first, second) {
            Ok(found) => map_match_type(found),
            Err(_) => MatchType::NotANumber,
        }
    }
}

fn map_match_type(found: LibMatchType) -> MatchType {
    match found {
        LibMatchType::NoMatch => MatchType::NoMatch,
        LibMatchType::ShortNsnMatch => MatchType::ShortNsnMatch,
        LibMatchType::NsnMatch => MatchType::NsnMatch,
        LibMatchType::ExactMatch => MatchType::ExactMatch,
    }
}

fn map_parse_error(err: LibParseError) -> ParseError {
    match err {
        LibParseError::InvalidCountryCode => ParseError::InvalidCountryCode,
        LibParseError::NotANumber(_) => ParseError::NotANumber,
        LibParseError::TooShortAfterIdd => ParseError::TooShortAfterIdd,
        LibParseError::TooShortNsn => ParseError::TooShortNsn,
        LibParseError::TooLongNsn => ParseError::TooLongNsn,
    }
}
