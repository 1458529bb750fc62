//! `weft`: weftstreams command-line interface.
//!
//! Provides two subcommands:
//!
//! - **`report`**: classify every property slot of a sample document against
//!   a resolver with callbacks for the named types, and print the result.
//! - **`types`**: list the type names a resolver accepts callbacks for.
//!
//! Logs go to stderr, filtered by `WEFT_LOG`; reports go to stdout.

mod config;
mod sample;

use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use thiserror::Error;
use weftstreams::{
    classify, render_report, Context, Handler, ResolveError, Resolver, TypeUniverse, WalkError,
};
use weftstreams_vocab::{
    is_link_type, Activity, Application, Arrive, Article, Collection, Create, Document, Image,
    IntransitiveActivity, Link, Mention, Note, Object, Person, Place, Question, Travel,
    VocabularyType,
};

use config::{CliConfig, Format};
use sample::Drone;

/// weft: type-driven resolution of linked vocabulary documents
#[derive(Parser)]
#[command(name = "weft", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify the sample document and print a resolution report.
    ///
    /// Embedded nodes whose type has a callback are resolved; everything
    /// else is reported as needing raw handling. Exits 1 if a callback fails.
    ///
    /// Examples:
    ///   weft report --handle Note,Place
    ///   WEFT_HANDLE=Drone weft report --format json
    Report(CliConfig),

    /// List the built-in type names, plus the sample's extension type.
    Types,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("unknown type {0:?}; run `weft types` for the accepted names")]
    UnknownType(String),

    #[error("invalid resolver: {0}")]
    Resolver(#[from] ResolveError),

    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("WEFT_LOG")
                .unwrap_or_else(|_| "weftstreams=info,weft=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Report(config) => run_report(&config).map(|out| print!("{out}")),
        Command::Types => {
            print!("{}", list_types());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run_report(config: &CliConfig) -> Result<String, CliError> {
    let hits = Arc::new(AtomicUsize::new(0));
    let resolver = build_resolver(&config.handle, &hits)?;
    tracing::info!(
        "resolver: {} handler(s) for {}",
        resolver.len(),
        resolver.registered_types().join(", ")
    );

    let document = sample::arrival();
    let report = classify(
        &Context::background(),
        &resolver,
        document.raw(),
        config.max_depth,
    )?;
    tracing::info!(
        "report: {} slot(s), {} callback(s) fired, max depth {}",
        report.len(),
        hits.load(Ordering::SeqCst),
        config.max_depth
    );

    match config.format {
        Format::Text => Ok(render_report(&report)),
        Format::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&report)?)),
    }
}

/// A resolver with one counting callback per name. Naming the sample's
/// extension type also declares it.
fn build_resolver(names: &[String], hits: &Arc<AtomicUsize>) -> Result<Resolver, CliError> {
    let mut builder = Resolver::builder();
    for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        if name == Drone::TYPE_NAME {
            builder = builder.extension_type::<Drone>();
        }
        let handler = handler_for(name, hits).ok_or_else(|| CliError::UnknownType(name.into()))?;
        builder = builder.handler(handler);
    }
    Ok(builder.build()?)
}

macro_rules! handler_by_name {
    ($name:expr, $hits:expr, [$($ty:ident),* $(,)?]) => {
        match $name {
            $(stringify!($ty) => Some(counting::<$ty>($hits)),)*
            _ => None,
        }
    };
}

fn handler_for(name: &str, hits: &Arc<AtomicUsize>) -> Option<Handler> {
    handler_by_name!(
        name,
        hits,
        [
            Object,
            Link,
            Mention,
            Note,
            Article,
            Image,
            Document,
            Place,
            Person,
            Application,
            Collection,
            Activity,
            IntransitiveActivity,
            Create,
            Arrive,
            Travel,
            Question,
            Drone,
        ]
    )
}

fn counting<T: VocabularyType>(hits: &Arc<AtomicUsize>) -> Handler {
    let hits = Arc::clone(hits);
    Handler::on(move |_: &T| {
        let n = hits.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!("callback: {} (call {n})", T::TYPE_NAME);
        Ok(())
    })
}

fn list_types() -> String {
    let mut out = String::new();
    for name in TypeUniverse::builtin().iter() {
        if is_link_type(name) {
            out.push_str(&format!("{name}  (link)\n"));
        } else {
            out.push_str(&format!("{name}\n"));
        }
    }
    out.push_str(&format!("{}  (extension)\n", Drone::TYPE_NAME));
    out
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use weftstreams::{Report, Resolution};

    fn config(handle: &[&str], max_depth: usize, format: Format) -> CliConfig {
        CliConfig {
            handle: handle.iter().map(|s| s.to_string()).collect(),
            max_depth,
            format,
        }
    }

    fn report_for(handle: &[&str], max_depth: usize) -> Report {
        let out = run_report(&config(handle, max_depth, Format::Json)).unwrap();
        serde_json::from_str(&out).unwrap()
    }

    #[test]
    fn every_listed_type_has_a_handler() {
        let hits = Arc::new(AtomicUsize::new(0));
        for line in list_types().lines() {
            let name = line.split_whitespace().next().unwrap();
            assert!(handler_for(name, &hits).is_some(), "{name}");
        }
        assert!(handler_for("Emoji", &hits).is_none());
    }

    #[test]
    fn unknown_handle_is_an_error() {
        let hits = Arc::new(AtomicUsize::new(0));
        let names = vec!["Note".to_string(), "Emoji".to_string()];
        let err = build_resolver(&names, &hits).unwrap_err();
        assert!(matches!(err, CliError::UnknownType(ref n) if n == "Emoji"));
    }

    #[test]
    fn blank_names_are_skipped() {
        let hits = Arc::new(AtomicUsize::new(0));
        let names = vec![" Note ".to_string(), String::new()];
        let r = build_resolver(&names, &hits).unwrap();
        assert_eq!(r.registered_types(), vec!["Note"]);
    }

    #[test]
    fn extension_resolves_only_when_named() {
        let instrument = |report: &Report| {
            report
                .entries()
                .iter()
                .find(|e| e.path == "$.instrument")
                .map(|e| e.resolution)
        };

        let without = report_for(&["Note"], 4);
        assert_eq!(instrument(&without), Some(Resolution::RawResolutionNeeded));

        let with = report_for(&["Drone"], 4);
        assert_eq!(instrument(&with), Some(Resolution::Resolved));
    }

    #[test]
    fn default_report() {
        let report = report_for(&["Note", "Image"], 4);
        // result[0] and its attachment
        assert!(report.count(Resolution::Resolved) >= 2);
        assert!(report.raw_paths().contains(&"$.result[1]".to_string()));

        let shallow = report_for(&["Note", "Image"], 0);
        assert!(shallow.len() < report.len());
    }

    #[test]
    fn text_format() {
        let out = run_report(&config(&["Note"], 4, Format::Text)).unwrap();
        assert!(out.starts_with("Resolution report"));
        assert!(out.contains("RESOLVED ("));
    }

    #[test]
    fn parses_report_flags() {
        let cli = Cli::try_parse_from([
            "weft",
            "report",
            "--handle",
            "Note,Place",
            "--max-depth",
            "1",
            "--format",
            "json",
        ])
        .unwrap();
        let Command::Report(config) = cli.command else {
            panic!("expected report");
        };
        assert_eq!(config.handle, vec!["Note", "Place"]);
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.format, Format::Json);
    }
}
