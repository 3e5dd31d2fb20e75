mod error;
mod requests;
mod types;
mod validation;

pub use error::ValidationError;
pub use requests::{parse_read_query, parse_write_body, WriteRequest};
pub use types::{Item, ItemKey};
pub use validation::{coerce_title, coerce_year, validate_keys};
