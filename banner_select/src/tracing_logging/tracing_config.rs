// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_PATH_AND_PREFIX: &str = "banner_select_log.txt";

/// Configure where the tracing output goes, and at what level. Pass it to
/// [`crate::init_tracing()`].
///
/// The prompt paints on stdout, so logs are never written there. Write them to
/// stderr, or to a file, or both.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writers: Vec<WriterArg>,
    pub level: tracing::Level,
    /// Eg: `/tmp/bs_log.txt` or `bs_log.txt`.
    pub tracing_log_file_path_and_prefix: String,
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(filename: Option<String>, level: tracing::Level) -> Self {
        Self {
            writers: vec![WriterArg::File],
            level,
            tracing_log_file_path_and_prefix: filename
                .unwrap_or_else(|| DEFAULT_LOG_FILE_PATH_AND_PREFIX.to_string()),
        }
    }

    #[must_use]
    pub fn new_stderr(level: tracing::Level) -> Self {
        Self {
            writers: vec![WriterArg::Stderr],
            level,
            tracing_log_file_path_and_prefix: DEFAULT_LOG_FILE_PATH_AND_PREFIX.to_string(),
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig {
        WriterConfig::from(self.writers.as_slice())
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}

/// One log destination, as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterArg {
    Stderr,
    File,
    None,
}

impl FromStr for WriterArg {
    type Err = String;

    fn from_str(it: &str) -> Result<Self, Self::Err> {
        match it.trim().to_lowercase().as_str() {
            "stderr" => Ok(WriterArg::Stderr),
            "file" => Ok(WriterArg::File),
            "none" => Ok(WriterArg::None),
            other => Err(format!("Unknown log writer: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Stderr,
    File,
    StderrAndFile,
}

impl From<&[WriterArg]> for WriterConfig {
    fn from(writers: &[WriterArg]) -> Self {
        let contains_file_writer = writers.contains(&WriterArg::File);
        let contains_stderr_writer = writers.contains(&WriterArg::Stderr);
        match (contains_file_writer, contains_stderr_writer) {
            (true, true) => WriterConfig::StderrAndFile,
            (true, false) => WriterConfig::File,
            (false, true) => WriterConfig::Stderr,
            (false, false) => WriterConfig::None,
        }
    }
}
