use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Sub-breeds fetched for one breed, in server order.
#[derive(Debug, Clone, Serialize)]
pub struct BreedListing {
    pub breed: String,
    pub sub_breeds: Vec<String>,
}

#[derive(Tabled)]
struct SubBreedRow {
    #[tabled(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Sub-breed")]
    sub_breed: String,
}

fn build_sub_breed_rows(listings: &[BreedListing]) -> Vec<SubBreedRow> {
    listings
        .iter()
        .flat_map(|listing| {
            if listing.sub_breeds.is_empty() {
                vec![SubBreedRow {
                    breed: listing.breed.clone(),
                    sub_breed: "(none)".to_string(),
                }]
            } else {
                listing
                    .sub_breeds
                    .iter()
                    .map(|name| SubBreedRow {
                        breed: listing.breed.clone(),
                        sub_breed: name.clone(),
                    })
                    .collect()
            }
        })
        .collect()
}

pub fn render_sub_breeds_table(listings: &[BreedListing]) -> String {
    let mut table = Table::new(build_sub_breed_rows(listings));
    table.with(Style::rounded());
    table.to_string()
}

/// JSON object mapping each breed to its sub-breeds.
pub fn render_sub_breeds_json(listings: &[BreedListing]) -> serde_json::Result<String> {
    let mut map = serde_json::Map::new();
    for listing in listings {
        map.insert(
            listing.breed.clone(),
            serde_json::Value::from(listing.sub_breeds.clone()),
        );
    }
    serde_json::to_string_pretty(&map)
}

pub fn print_sub_breeds(listings: &[BreedListing], format: &OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", render_sub_breeds_table(listings)),
        OutputFormat::Json => match render_sub_breeds_json(listings) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
        },
    }
}
