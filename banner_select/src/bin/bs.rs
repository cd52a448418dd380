// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use std::io::BufRead as _;

use clap::Parser;
use miette::IntoDiagnostic as _;
use r3bl_banner_select::{DefaultIoDevices, HelpMode, IndexMode, NormalizedChoice,
                         OutputDevice, SelectConfig, StdinIsPipedResult,
                         StdoutIsPipedResult, Theme, TracingConfig, init_tracing,
                         is_stdin_piped, is_stdout_piped, select};

#[derive(Debug, Parser)]
#[command(bin_name = "bs")]
#[command(about = "Pick one item from a list, with a banner for the highlighted item", long_about = None)]
#[command(version)]
#[command(next_line_help = true)]
struct CliArgs {
    /// Items to choose from. When none are given, one item is read per line from stdin,
    /// eg: `ls | bs` 👉
    #[arg(value_name = "CHOICES")]
    choices: Vec<String>,

    /// Question displayed above the list
    #[arg(long, short = 'm', default_value = "Select an item")]
    message: String,

    /// Number of rows in the visible page
    #[arg(long, short = 'p', default_value_t = 7, value_parser = clap::value_parser!(u16).range(1..))]
    page_size: u16,

    /// Stop at the first and last items instead of wrapping around
    #[arg(long)]
    no_loop: bool,

    /// Item to highlight first
    #[arg(long, short = 'd')]
    default: Option<String>,

    /// When to show the navigation hints
    #[arg(long, value_enum, default_value_t = HelpMode::Auto)]
    help_mode: HelpMode,

    /// Prefix each item with its position
    #[arg(long, value_enum, default_value_t = IndexMode::Hidden)]
    index_mode: IndexMode,

    /// Banner displayed above the prompt. `{name}`, `{position}`, and `{count}` are
    /// replaced with the highlighted item's name, its position, and the number of items.
    /// For eg: "[{position}/{count}] {name}" 💡
    #[arg(long, value_name = "TEMPLATE")]
    banner: Option<String>,

    /// Write logs to this file. You can use `tail -f` to watch it
    #[arg(long, value_name = "PATH")]
    log_file: Option<String>,

    /// Log level used with `--log-file`
    #[arg(long, default_value_t = tracing::Level::DEBUG)]
    log_level: tracing::Level,
}

#[tokio::main]
#[allow(clippy::needless_return)]
async fn main() -> miette::Result<()> {
    let cli_args = CliArgs::parse();

    if let Some(ref log_file) = cli_args.log_file {
        init_tracing(TracingConfig::new_file(
            Some(log_file.clone()),
            cli_args.log_level,
        ))?;
    }

    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_args = ?cli_args);

    let choices = match (cli_args.choices.is_empty(), is_stdin_piped()) {
        (true, StdinIsPipedResult::StdinIsPiped) => read_choices_from_stdin()?,
        _ => cli_args.choices.clone(),
    };

    let config = create_config(&cli_args, choices);

    let mut io = DefaultIoDevices::default();
    // Keep stdout clean for the selected value, eg: `picked=$(bs a b c)`.
    if is_stdout_piped() == StdoutIsPipedResult::StdoutIsPiped {
        io.output_device = OutputDevice::new_stderr();
    }

    let result = select(config, io.as_mut_tuple(), None).await;

    match result {
        Ok(value) => {
            tracing::info!(message = "Selected", value = %value);
            println!("{value}");
            Ok(())
        }
        Err(report) => {
            tracing::error!(message = "Could not complete the selection", error = ?report);
            Err(report)
        }
    }
}

fn create_config(cli_args: &CliArgs, choices: Vec<String>) -> SelectConfig<String> {
    let count = choices.len();

    let mut config = SelectConfig::new(cli_args.message.clone(), choices)
        .with_page_size(usize::from(cli_args.page_size))
        .with_loop(!cli_args.no_loop)
        .with_theme(Theme {
            help_mode: cli_args.help_mode,
            index_mode: cli_args.index_mode,
            ..Theme::default()
        });

    if let Some(ref default) = cli_args.default {
        config = config.with_default(default.clone());
    }

    if let Some(ref template) = cli_args.banner {
        let template = template.clone();
        config = config.with_banner(move |choice: &NormalizedChoice<String>, index| {
            Ok(Some(fill_banner_template(&template, &choice.name, index, count)))
        });
    }

    config
}

fn fill_banner_template(template: &str, name: &str, index: usize, count: usize) -> String {
    template
        .replace("{name}", name)
        .replace("{position}", &(index + 1).to_string())
        .replace("{count}", &count.to_string())
}

/// Blank lines are skipped.
fn read_choices_from_stdin() -> miette::Result<Vec<String>> {
    let mut acc = vec![];
    for line in std::io::stdin().lock().lines() {
        let line = line.into_diagnostic()?;
        if !line.trim().is_empty() {
            acc.push(line);
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_fill_banner_template() {
        assert_eq!(
            fill_banner_template("[{position}/{count}] {name}", "China", 1, 3),
            "[2/3] China"
        );
        assert_eq!(fill_banner_template("static", "China", 1, 3), "static");
    }

    #[test]
    fn test_parse_args() {
        let cli_args = CliArgs::try_parse_from([
            "bs",
            "-m",
            "Pick",
            "-p",
            "3",
            "--no-loop",
            "--help-mode",
            "never",
            "--index-mode",
            "number",
            "a",
            "b",
        ])
        .unwrap();
        assert_eq!(cli_args.choices, vec!["a", "b"]);
        assert_eq!(cli_args.message, "Pick");
        assert_eq!(cli_args.page_size, 3);
        assert!(cli_args.no_loop);
        assert_eq!(cli_args.help_mode, HelpMode::Never);
        assert_eq!(cli_args.index_mode, IndexMode::Number);
        assert_eq!(cli_args.log_level, tracing::Level::DEBUG);

        let config = create_config(&cli_args, cli_args.choices.clone());
        assert_eq!(config.page_size, 3);
        assert!(!config.loop_choices);
        assert_eq!(config.theme.index_mode, IndexMode::Number);
    }

    #[test]
    fn test_page_size_must_be_positive() {
        assert!(CliArgs::try_parse_from(["bs", "-p", "0", "a"]).is_err());
    }
}
