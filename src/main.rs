//! `verselink` - link a Bible reference from the command line.
//!
//! Usage: verselink [--translation LABEL] [--preview | --no-preview] [--save] <REFERENCE...>
//!        verselink --list-versions
//!
//! The reference is read from stdin when no reference arguments are given.
//! The linked Markdown (plus the verse preview, if enabled) goes to stdout;
//! notices go to stderr.

use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use verselink::bible::versions;
use verselink::config::Config;
use verselink::constants::command;
use verselink::services::{BibleApiClient, LogNotifier, TextBuffer};
use verselink::{BibleLinker, SettingsStore};

#[derive(Debug, Default)]
struct Args {
    translation: Option<String>,
    preview: Option<bool>,
    save: bool,
    list_versions: bool,
    help: bool,
    reference: Vec<String>,
}

fn parse_args() -> Args {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-t" | "--translation" => args.translation = iter.next(),
            "--preview" => args.preview = Some(true),
            "--no-preview" => args.preview = Some(false),
            "--save" => args.save = true,
            "--list-versions" => args.list_versions = true,
            "-h" | "--help" => args.help = true,
            _ => args.reference.push(arg),
        }
    }
    args
}

fn print_usage(config: &Config) {
    println!("{} {}: {} ({})", config.app_name(), config.app_version(), command::NAME, command::ID);
    println!();
    println!("Usage: verselink [OPTIONS] <REFERENCE...>");
    println!();
    println!("Options:");
    println!("  -t, --translation <LABEL>  Version label for the link (see --list-versions)");
    println!("      --preview              Insert the verse text after the link");
    println!("      --no-preview           Only insert the link");
    println!("      --save                 Remember --translation/--preview choices");
    println!("      --list-versions        Print supported version labels");
    println!("  -h, --help                 Print this help");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    if args.help {
        print_usage(&Config::default());
        return Ok(ExitCode::SUCCESS);
    }
    if args.list_versions {
        for label in versions::labels() {
            println!("{label}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::load().context("Failed to load config")?;
    let store = SettingsStore::new(&config.settings_path);
    let mut settings = store.load().context("Failed to load settings")?;

    if let Some(label) = args.translation {
        settings.set_version(label);
    }
    if let Some(enabled) = args.preview {
        settings.set_add_preview(enabled);
    }
    if args.save {
        store.save(&settings)
            .with_context(|| format!("Failed to save settings to {}", store.path().display()))?;
    }

    let reference = if args.reference.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
        buf
    } else {
        args.reference.join(" ")
    };

    if reference.trim().is_empty() {
        if args.save {
            return Ok(ExitCode::SUCCESS);
        }
        print_usage(&config);
        return Ok(ExitCode::FAILURE);
    }

    let fetcher = Arc::new(BibleApiClient::new(&config));
    let linker = BibleLinker::from_config(&config, settings, fetcher);
    let mut editor = TextBuffer::with_all_selected(reference);
    let notifier = LogNotifier;

    // Failures were already reported as notices
    let Ok(link) = linker.link_selection(&mut editor, &notifier) else {
        return Ok(ExitCode::FAILURE);
    };

    if let Some(preview) = link.preview {
        preview.apply(&mut editor, &notifier).await;
    }

    println!("{}", editor.text());
    Ok(ExitCode::SUCCESS)
}
