use std::future::Future;

use crate::Error;

/// Source of sub-breed listings.
///
/// Implementations issue at most one upstream request per call and report
/// every failure as [`Error::FetchFailed`].
pub trait BreedFetcher {
    /// Returns the sub-breeds of `breed` in the order the source lists them.
    ///
    /// An empty list means the breed exists but has no sub-breeds.
    fn get_sub_breeds(
        &self,
        breed: &str,
    ) -> impl Future<Output = Result<Vec<String>, Error>> + Send;
}
