pub mod collapse;

pub use collapse::{
    collapse_items, phone_values_equivalent, should_collapse, should_collapse_items,
};
