use crate::infra::load_catalog;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use whisky_catalog::config::AppConfig;
use whisky_catalog::error::AppError;
use whisky_catalog::producers::{ProducerKind, ProducerNameService, ProducerResolution};

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// Producer kind to resolve against (distiller or bottler)
    #[arg(long, value_parser = parse_kind)]
    pub(crate) kind: ProducerKind,
    /// Producer catalog CSV; defaults to PRODUCER_CATALOG_PATH or the built-in seed
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the resolution as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
    /// Raw producer name, as typed or read from a label
    pub(crate) value: String,
}

fn parse_kind(raw: &str) -> Result<ProducerKind, String> {
    raw.parse::<ProducerKind>().map_err(|err| err.to_string())
}

pub(crate) fn run_resolve(args: ResolveArgs) -> Result<(), AppError> {
    let ResolveArgs {
        kind,
        catalog,
        json,
        value,
    } = args;

    let mut config = AppConfig::load()?;
    if catalog.is_some() {
        config.catalog.producer_seed = catalog;
    }

    let catalog = load_catalog(&config.catalog)?;
    let service = ProducerNameService::new(Arc::new(catalog));
    let resolution = service.resolve(kind, &value);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &resolution).map_err(std::io::Error::from)?;
        writeln!(out)?;
    } else {
        render_resolution(&mut out, kind, &resolution)?;
    }

    Ok(())
}

fn render_resolution<W: Write>(
    out: &mut W,
    kind: ProducerKind,
    resolution: &ProducerResolution,
) -> std::io::Result<()> {
    writeln!(out, "Producer resolution ({kind})")?;
    writeln!(out, "Input: {:?}", resolution.input)?;
    writeln!(out, "Normalized: {:?}", resolution.normalized)?;
    writeln!(out, "Confidence: {}", resolution.confidence.label())?;

    match &resolution.resolved_name {
        Some(name) => writeln!(out, "Resolved: {name}")?,
        None => writeln!(out, "Resolved: none")?,
    }

    if resolution.suggestions.is_empty() {
        writeln!(out, "Suggestions: none")?;
    } else {
        writeln!(out, "Suggestions")?;
        for suggestion in &resolution.suggestions {
            writeln!(out, "- {suggestion}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use whisky_catalog::producers::resolve_producer_name;

    #[test]
    fn parse_kind_reports_unknown_values() {
        assert_eq!(parse_kind("Bottler"), Ok(ProducerKind::Bottler));
        let err = parse_kind("maltster").expect_err("unknown kind");
        assert!(err.contains("maltster"));
    }

    #[test]
    fn renders_resolution_summary() {
        let resolution = resolve_producer_name("Ben", &["Ben Nevis", "Benromach"]);
        let mut buffer = Vec::new();
        render_resolution(&mut buffer, ProducerKind::Distiller, &resolution).expect("renders");
        let text = String::from_utf8(buffer).expect("utf8 output");

        assert!(text.starts_with("Producer resolution (distiller)"));
        assert!(text.contains("Confidence: low"));
        assert!(text.contains("Resolved: none"));
        assert!(text.contains("- Ben Nevis"));
    }
}
