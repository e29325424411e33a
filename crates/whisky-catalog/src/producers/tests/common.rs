use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::producers::catalog::{
    CandidateSource, CatalogError, ProducerCatalog, ProducerKind, ProducerRecord,
};
use crate::producers::router::producer_router;
use crate::producers::service::ProducerNameService;

pub(super) fn sample_catalog() -> ProducerCatalog {
    let mut merged = ProducerRecord::new(ProducerKind::Distiller, "Glen Fiddich");
    merged.merged_into = Some("Glenfiddich".to_string());
    let mut closed = ProducerRecord::new(ProducerKind::Distiller, "Port Ellen");
    closed.active = false;

    ProducerCatalog::new(vec![
        ProducerRecord::new(ProducerKind::Distiller, "Glenfiddich"),
        ProducerRecord::new(ProducerKind::Distiller, "Glenlivet"),
        ProducerRecord::new(ProducerKind::Distiller, "Glenmorangie"),
        ProducerRecord::new(ProducerKind::Distiller, "Ben Nevis"),
        merged,
        closed,
        ProducerRecord::new(ProducerKind::Bottler, "Gordon & MacPhail"),
        ProducerRecord::new(ProducerKind::Bottler, "Signatory Vintage"),
        ProducerRecord::new(ProducerKind::Bottler, "Douglas Laing"),
    ])
}

pub(super) fn build_service() -> Arc<ProducerNameService<ProducerCatalog>> {
    Arc::new(ProducerNameService::new(Arc::new(sample_catalog())))
}

pub(super) fn router_with_service(
    service: Arc<ProducerNameService<ProducerCatalog>>,
) -> axum::Router {
    producer_router(service)
}

/// Source that always fails, standing in for an unreachable database.
pub(super) struct UnavailableSource;

impl CandidateSource for UnavailableSource {
    fn active_names(&self, _kind: ProducerKind) -> Result<Vec<String>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }
}

/// Source returning a fixed list while counting lookups per call.
#[derive(Default)]
pub(super) struct CountingSource {
    pub(super) names: Vec<String>,
    pub(super) lookups: AtomicUsize,
}

impl CountingSource {
    pub(super) fn with_names(names: &[&str]) -> Self {
        Self {
            names: names.iter().map(|name| name.to_string()).collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub(super) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl CandidateSource for CountingSource {
    fn active_names(&self, _kind: ProducerKind) -> Result<Vec<String>, CatalogError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        Ok(self.names.clone())
    }
}
