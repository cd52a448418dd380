// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic as _;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{TracingConfig, WriterConfig, rolling_file_appender_impl};

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(true)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true)
    };
}

/// Simply initialize the global tracing subscriber with the provided [`TracingConfig`].
/// Does nothing if the config has no writers.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been set.
pub fn init_tracing(tracing_config: TracingConfig) -> miette::Result<()> {
    match try_create_layers(&tracing_config)? {
        Some(layers) => tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic(),
        None => Ok(()),
    }
}

/// Returns the layers. This does not initialize the tracing system. Use it with
/// [`tracing::subscriber::with_default()`] to scope the subscriber, eg in tests.
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let writer_config = tracing_config.get_writer_config();
    if writer_config == WriterConfig::None {
        return Ok(None);
    }

    let level_filter = tracing_config.get_level_filter();
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter for the whole registry.
    return_it.push(Box::new(level_filter));

    if matches!(
        writer_config,
        WriterConfig::Stderr | WriterConfig::StderrAndFile
    ) {
        return_it.push(Box::new(
            create_fmt!()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ));
    }

    if matches!(writer_config, WriterConfig::File | WriterConfig::StderrAndFile) {
        let file = rolling_file_appender_impl::try_create(
            tracing_config.tracing_log_file_path_and_prefix.as_str(),
        )?;
        return_it.push(Box::new(
            create_fmt!()
                .with_ansi(false)
                .with_writer(file)
                .with_filter(level_filter),
        ));
    }

    Ok(Some(return_it))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;
    use crate::WriterArg;

    #[test]
    fn test_no_writers_no_layers() {
        let config = TracingConfig {
            writers: vec![WriterArg::None],
            ..TracingConfig::new_stderr(tracing::Level::INFO)
        };
        assert!(try_create_layers(&config).unwrap().is_none());
        assert!(init_tracing(config).is_ok());
    }

    #[test]
    fn test_stderr_layers() {
        let config = TracingConfig::new_stderr(tracing::Level::INFO);
        let layers = try_create_layers(&config).unwrap().unwrap();
        // Level filter + stderr.
        assert_eq!(layers.len(), 2);
    }

    #[test]
    #[serial]
    fn test_file_layer_writes_events_at_or_above_level() {
        let path = std::env::temp_dir().join(format!(
            "r3bl_banner_select_test_{}.log",
            std::process::id()
        ));
        drop(std::fs::remove_file(&path));

        let config = TracingConfig::new_file(
            Some(path.display().to_string()),
            tracing::Level::INFO,
        );
        let layers = try_create_layers(&config).unwrap();

        tracing::subscriber::with_default(tracing_subscriber::registry().with(layers), || {
            tracing::info!(message = "picked", value = "China");
            tracing::debug!(message = "filtered out");
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("picked"));
        assert!(contents.contains("China"));
        assert!(!contents.contains("filtered out"));

        drop(std::fs::remove_file(&path));
    }
}
