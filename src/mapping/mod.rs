pub mod convert;
pub mod envelope;
pub mod error;
pub mod record;

pub use convert::{FromJson, FromJsonLenient, ToJson};
pub use error::{MappingError, kind_name};
