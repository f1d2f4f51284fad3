use anyhow::{bail, Result};
use clap::Args;
use dogceo_api::BreedFetcher;

use crate::output::{print_sub_breeds, BreedListing, OutputFormat};

#[derive(Args)]
pub struct SubBreedsArgs {
    /// Breed names to look up (e.g. hound, terrier)
    #[arg(required = true)]
    pub breeds: Vec<String>,

    /// Request timeout in seconds (overrides DOGCEO_TIMEOUT_SECS)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// API base URL (overrides DOGCEO_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,
}

/// Fetches every requested breed in turn. Failures are reported as they
/// happen; the listings that did succeed are still returned.
pub async fn fetch_all<F: BreedFetcher>(
    fetcher: &F,
    breeds: &[String],
) -> (Vec<BreedListing>, usize) {
    let mut listings = Vec::with_capacity(breeds.len());
    let mut failures = 0;
    for breed in breeds {
        match fetcher.get_sub_breeds(breed).await {
            Ok(sub_breeds) => listings.push(BreedListing {
                breed: breed.clone(),
                sub_breeds,
            }),
            Err(e) => {
                eprintln!("{}: {}", breed, e);
                failures += 1;
            }
        }
    }
    (listings, failures)
}

pub async fn run<F: BreedFetcher>(
    args: &SubBreedsArgs,
    fetcher: &F,
    format: &OutputFormat,
) -> Result<()> {
    let (listings, failures) = fetch_all(fetcher, &args.breeds).await;

    if !listings.is_empty() {
        print_sub_breeds(&listings, format);
    }

    if failures > 0 {
        bail!("{} of {} breed lookups failed", failures, args.breeds.len());
    }
    Ok(())
}
