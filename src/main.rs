// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Policyscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Policyscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Policyscope CLI entrypoint.
//!
//! Runs the interactive policy page by default. `--print` settles the page once, loads the
//! requested reform and prints the result as JSON.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use policyscope::config::Settings;
use policyscope::logging::init_logging;
use policyscope::model::demo_metadata;
use policyscope::nav::{policy_route, NavState, REFORM_KEY};
use policyscope::page::PolicyPage;
use policyscope::store::{MetadataFile, ReformFolder};

#[derive(Debug, Parser)]
#[command(name = "policyscope", version, about = "Browse and edit a policy reform in the terminal")]
struct Cli {
    /// Settings file (TOML).
    #[arg(long, env = "POLICYSCOPE_CONFIG")]
    config: Option<PathBuf>,

    /// Metadata JSON (`countryId`, `parameters`, `parameterTree`). Demo metadata when omitted.
    #[arg(long)]
    metadata: Option<PathBuf>,

    /// Directory holding `reform-<id>.json` documents.
    #[arg(long)]
    reform_dir: Option<PathBuf>,

    /// Initial focus, e.g. `gov.hmrc.income_tax`.
    #[arg(long)]
    focus: Option<String>,

    /// Initial reform id.
    #[arg(long)]
    reform: Option<String>,

    /// Print the settled page as JSON instead of starting the UI.
    #[arg(long)]
    print: bool,
}

impl Cli {
    fn initial_nav(&self, route: String) -> NavState {
        let mut nav = NavState::new(route);
        if let Some(focus) = &self.focus {
            nav = nav.with_focus(focus.as_str());
        }
        if let Some(reform) = &self.reform {
            nav = nav.with(REFORM_KEY, reform.as_str());
        }
        nav
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("policyscope: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let settings = Settings::load(cli.config.as_deref())?;
    if let Err(err) = init_logging(&settings.logging) {
        eprintln!("policyscope: logging disabled: {err}");
    }

    let metadata = match cli.metadata.as_ref().or(settings.metadata.as_ref()) {
        Some(path) => MetadataFile::new(path).load()?,
        None => {
            info!("no metadata file configured, using demo metadata");
            demo_metadata()
        }
    };
    let reforms = cli
        .reform_dir
        .clone()
        .or_else(|| settings.reform_dir.clone())
        .map(ReformFolder::new);
    let nav = cli.initial_nav(policy_route(&metadata));
    let mut page = PolicyPage::with_nav(metadata, reforms, nav);

    if cli.print {
        page.settle_and_load()?;
        println!("{}", serde_json::to_string_pretty(&page.snapshot())?);
        return Ok(());
    }

    policyscope::tui::run(page, settings.layout.narrow_width)
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Cli;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_empty_args() {
        let cli = Cli::try_parse_from(["policyscope"]).expect("parse args");
        assert!(!cli.print);
        assert!(cli.metadata.is_none());
        assert!(cli.focus.is_none());

        let nav = cli.initial_nav("/uk/policy".to_owned());
        assert_eq!(nav.to_string(), "/uk/policy");
    }

    #[test]
    fn focus_and_reform_seed_navigation() {
        let cli = Cli::try_parse_from([
            "policyscope",
            "--print",
            "--focus",
            "gov.hmrc",
            "--reform",
            "7",
            "--reform-dir",
            "reforms",
        ])
        .expect("parse args");
        assert!(cli.print);
        assert_eq!(cli.reform_dir.as_deref(), Some(std::path::Path::new("reforms")));

        let nav = cli.initial_nav("/us/policy".to_owned());
        assert_eq!(nav.focus(), "gov.hmrc");
        assert_eq!(nav.reform(), Some("7"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["policyscope", "--bogus"]).is_err());
    }
}
