mod concept_card;
mod footer;
mod header;
pub mod visualizer;

pub use concept_card::ConceptCard;
pub use footer::Footer;
pub use header::Header;
