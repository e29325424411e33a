//! Fuzzy resolution of free-text distiller and bottler names against the catalog.
//!
//! Raw input (typed by a user or lifted from a label by OCR) is normalized for display,
//! reduced to a comparison key, and ranked against the active producer names by edit
//! distance. The best candidate is only auto-applied when its confidence tier is not
//! `low`; otherwise callers get a short list of suggestions.

pub mod canonical;
pub mod catalog;
pub mod confidence;
pub mod distance;
pub mod normalizer;
pub mod resolver;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use canonical::canonicalize;
pub use catalog::{
    CandidateSource, CatalogError, ProducerCatalog, ProducerKind, ProducerRecord,
    UnknownProducerKind,
};
pub use confidence::{classify, MatchConfidence};
pub use distance::{contains_either, levenshtein};
pub use normalizer::normalize_producer_name;
pub use resolver::{resolve_producer_name, ProducerResolution};
pub use router::{producer_router, ResolveRequest, ResolveRequestError, ResolveResponse};
pub use service::ProducerNameService;
