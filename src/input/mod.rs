pub mod records;
pub mod validate;

pub use records::{load_items, parse_items};
pub use validate::{is_valid_item_record, is_valid_json};
