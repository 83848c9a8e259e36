pub mod domain;
pub mod error;
pub mod oracle;
pub mod rules;
pub mod search;

pub use domain::*;
pub use error::CoreError;
pub use oracle::{LibphonenumberOracle, MatchType, ParseError, PhoneNumber, PhoneNumberOracle};
pub use rules::*;
pub use search::{
    clean_start_and_end_of_search_query, find_matching_line, find_next_token_start,
    is_phone_number, MatchedLine, SearchQuery, TokenStarts,
};
