use std::sync::Arc;

use tracing::{debug, warn};

use super::catalog::{CandidateSource, ProducerKind};
use super::resolver::{resolve_producer_name, ProducerResolution};

/// Service pairing a candidate source with the name resolver.
pub struct ProducerNameService<S> {
    source: Arc<S>,
}

impl<S> ProducerNameService<S>
where
    S: CandidateSource + 'static,
{
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Resolve a raw name against the active producers of `kind`.
    ///
    /// A failing source is treated as an empty catalog and yields a `low` resolution.
    pub fn resolve(&self, kind: ProducerKind, raw: &str) -> ProducerResolution {
        let candidates = match self.source.active_names(kind) {
            Ok(names) => names,
            Err(error) => {
                warn!(%kind, %error, "producer candidates unavailable");
                Vec::new()
            }
        };

        let resolution = resolve_producer_name(raw, &candidates);
        debug!(
            %kind,
            candidates = candidates.len(),
            confidence = resolution.confidence.label(),
            "resolved producer name"
        );
        resolution
    }

    pub fn resolve_distiller_name(&self, raw: &str) -> ProducerResolution {
        self.resolve(ProducerKind::Distiller, raw)
    }

    pub fn resolve_bottler_name(&self, raw: &str) -> ProducerResolution {
        self.resolve(ProducerKind::Bottler, raw)
    }
}
