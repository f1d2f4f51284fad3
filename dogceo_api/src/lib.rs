//! Client for the public dog.ceo API.
//!
//! The only operation is [`BreedFetcher::get_sub_breeds`], implemented for
//! the real service by [`Client`].

mod client;
mod errors;
mod fetcher;
pub mod types;

pub use self::client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::fetcher::BreedFetcher;
