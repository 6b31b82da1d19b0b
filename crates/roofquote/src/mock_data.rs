//! Demo quotes for populating a dashboard during development.

use chrono::{Duration, Local, NaiveDate};
use rand::{seq::IndexedRandom, Rng};

use roofquote_core::{quote::NewQuote, storage::QuoteRepository};

const CONTRACTORS: &[&str] = &[
    "Alex Morgan",
    "Jordan Blake",
    "Sam Rivera",
    "Taylor Chen",
    "Casey Brooks",
    "Riley Patel",
];

const COMPANIES: &[&str] = &[
    "Summit Roofing",
    "Ridge Line Co",
    "Apex Exteriors",
    "Blue Sky Roofing",
    "Ironclad Roofs",
];

const LOCATIONS: &[(&str, &str)] = &[
    ("Austin", "TX"),
    ("Dallas", "TX"),
    ("Denver", "CO"),
    ("Phoenix", "AZ"),
    ("Tampa", "FL"),
    ("Orlando", "FL"),
    ("Sacramento", "CA"),
    ("Raleigh", "NC"),
];

const ROOF_TYPES: &[&str] = &["Asphalt Shingle", "Metal", "Tile", "Slate", "TPO", "Wood Shake"];

/// Generates `count` random quotes with project dates in the two years
/// before `today`.
pub fn generate_demo_quotes(count: usize, today: NaiveDate) -> Vec<NewQuote> {
    let mut rng = rand::rng();

    (0..count)
        .map(|_| {
            let (city, state) = LOCATIONS.choose(&mut rng).copied().unwrap_or(("Austin", "TX"));
            let date = today - Duration::days(rng.random_range(0..730));

            NewQuote::default()
                .with_contractor_name(pick(&mut rng, CONTRACTORS))
                .with_company(pick(&mut rng, COMPANIES))
                .with_roof_size(rng.random_range(800..6000_i64))
                .with_roof_type(pick(&mut rng, ROOF_TYPES))
                .with_city(city)
                .with_state(state)
                .with_project_date(date.format("%Y-%m-%d").to_string())
        })
        .collect()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, values: &[&'static str]) -> &'static str {
    values.choose(rng).copied().unwrap_or_default()
}

/// Inserts `count` demo quotes dated relative to today.
pub async fn seed_demo_quotes(
    repo: &dyn QuoteRepository,
    count: usize,
) -> Result<(), anyhow::Error> {
    let quotes = generate_demo_quotes(count, Local::now().date_naive());

    for quote in &quotes {
        repo.create_quote(quote).await?;
    }

    tracing::info!(count, "Seeded demo quotes");
    Ok(())
}
