//! # Headlines
//!
//! Simulated business metrics and SEO headlines.
//!
//! ## Generation
//! - Rating: uniform in [3.5, 5.0], one fraction digit, sent as a string
//! - Reviews: uniform integer in [50, 349]
//! - Headline: one of [`HEADLINE_TEMPLATES`] picked uniformly, placeholders filled
//!
//! Each call is an independent draw. Nothing about a previous call is remembered,
//! so regenerating may land on the same template again.
//!
//! ## Placeholders
//! `{name}` and `{location}` are replaced in a single left to right pass over the
//! template. Substituted text is never scanned again, so a caller supplying
//! `{location}` as a name gets that text back verbatim.
use payloads::{BusinessInsight, BusinessQuery};
use rand::{Rng, seq::IndexedRandom};

pub const NAME_TOKEN: &str = "{name}";
pub const LOCATION_TOKEN: &str = "{location}";

pub const MIN_RATING: f64 = 3.5;
pub const MAX_RATING: f64 = 5.0;
pub const MIN_REVIEWS: u32 = 50;
pub const MAX_REVIEWS: u32 = 349;

pub static HEADLINE_TEMPLATES: [&str; 15] = [
    "Why {name} is {location}'s Best Choice in 2025",
    "Discover Why {name} is {location}'s Hidden Gem",
    "{name}: Your Go-To Destination in {location}",
    "Top-Rated {name} Takes {location} by Storm",
    "{location} Locals Love {name} - Here's Why",
    "{name} Sets New Standards in {location}",
    "Experience Excellence at {name} in {location}",
    "{name} Dominates {location}'s Market in 2025",
    "The Ultimate Guide to {name} in {location}",
    "{name}: {location}'s Premier Business Success Story",
    "Why {name} is Revolutionizing {location}",
    "{name} Becomes {location}'s Most Trusted Name",
    "Inside {name}: {location}'s Rising Star",
    "{name} Delivers Unmatched Quality in {location}",
    "How {name} Became {location}'s Go-To Choice",
];

pub fn random_rating<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:.1}", rng.random_range(MIN_RATING..=MAX_RATING))
}

pub fn random_reviews<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random_range(MIN_REVIEWS..=MAX_REVIEWS)
}

pub fn random_headline<R: Rng + ?Sized>(rng: &mut R, name: &str, location: &str) -> String {
    // the template list is a non-empty constant
    let template = HEADLINE_TEMPLATES.choose(rng).copied().unwrap_or_default();

    fill_template(template, name, location)
}

pub fn generate_insight<R: Rng + ?Sized>(rng: &mut R, query: &BusinessQuery) -> BusinessInsight {
    BusinessInsight {
        rating: random_rating(rng),
        reviews: random_reviews(rng),
        headline: random_headline(rng, &query.name, &query.location),
    }
}

pub fn fill_template(template: &str, name: &str, location: &str) -> String {
    let mut filled = String::with_capacity(template.len() + name.len() + location.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        filled.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(after) = tail.strip_prefix(NAME_TOKEN) {
            filled.push_str(name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(LOCATION_TOKEN) {
            filled.push_str(location);
            rest = after;
        } else {
            filled.push('{');
            rest = &tail[1..];
        }
    }

    filled.push_str(rest);
    filled
}
