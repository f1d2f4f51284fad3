mod breed;
pub use self::breed::{DecodeError, SubBreedsResponse};
