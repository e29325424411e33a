use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use whisky_catalog::config::CatalogConfig;
use whisky_catalog::producers::{CatalogError, ProducerCatalog, ProducerKind, ProducerRecord};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

const SEED_DISTILLERS: &[&str] = &[
    "Aberlour",
    "Ardbeg",
    "Balvenie",
    "Ben Nevis",
    "Bowmore",
    "Bruichladdich",
    "Bunnahabhain",
    "Caol Ila",
    "Dalmore",
    "Glendronach",
    "Glenfarclas",
    "Glenfiddich",
    "Glenlivet",
    "Glenmorangie",
    "Highland Park",
    "Kavalan",
    "Kilchoman",
    "Lagavulin",
    "Laphroaig",
    "Macallan",
    "Mackmyra",
    "Oban",
    "Springbank",
    "Talisker",
    "Yamazaki",
];

const SEED_BOTTLERS: &[&str] = &[
    "Adelphi",
    "Berry Bros & Rudd",
    "Cadenhead",
    "Compass Box",
    "Douglas Laing",
    "Gordon & MacPhail",
    "Hunter Laing",
    "Signatory Vintage",
    "That Boutique-y Whisky Company",
    "The Scotch Malt Whisky Society",
];

/// Built-in catalog used when no seed file is configured.
pub(crate) fn default_catalog() -> ProducerCatalog {
    let distillers = SEED_DISTILLERS
        .iter()
        .map(|name| ProducerRecord::new(ProducerKind::Distiller, *name));
    let bottlers = SEED_BOTTLERS
        .iter()
        .map(|name| ProducerRecord::new(ProducerKind::Bottler, *name));
    ProducerCatalog::new(distillers.chain(bottlers).collect())
}

pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<ProducerCatalog, CatalogError> {
    match &config.producer_seed {
        Some(path) => {
            let catalog = ProducerCatalog::from_path(path)?;
            info!(path = %path.display(), records = catalog.len(), "loaded producer catalog");
            Ok(catalog)
        }
        None => Ok(default_catalog()),
    }
}
