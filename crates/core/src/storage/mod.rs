mod error;
mod traits;
mod types;

pub use error::{Result, StoreError, StoreErrorDetail};
pub use traits::ItemStore;
pub use types::{DeleteItemOutput, GetItemOutput, PutItemOutput, UpdateItemOutput, UpdatedAttributes};
