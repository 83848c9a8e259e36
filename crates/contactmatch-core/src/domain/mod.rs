pub mod mimetype;
pub mod phone;

pub use mimetype::{resolve_mimetype, DataItem};
pub use phone::{convert_keypad_letters_to_digits, normalize_number, split_wait_segments, WAIT};
