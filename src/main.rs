//! apiref - resolve an API-reference descriptor tree into a JSON site model.

use anyhow::{Context, Result, bail};
use apiref::{
    cli::{Cli, Commands},
    config::DocsConfig,
    log, logger,
    model::SiteModel,
    output::write_model,
};
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::set_quiet(cli.quiet);
    let config = DocsConfig::load(&cli)?;
    if let Some(notice) = live_notice(&config) {
        log!("warn"; "{notice}");
    }

    match cli.command {
        Commands::Build { clean } => build(&config, clean),
        Commands::Check { strict } => check(&config, strict),
    }
}

/// Resolve and write the model to the output directory.
fn build(config: &DocsConfig, clean: bool) -> Result<()> {
    let model = resolve(config)?;
    report_warnings(&model);
    write_model(&model, &config.output, clean)?;
    log!("build"; "done");
    Ok(())
}

/// Resolve and report, without writing anything.
fn check(config: &DocsConfig, strict: bool) -> Result<()> {
    let model = resolve(config)?;
    report_warnings(&model);

    let warnings = model.warnings().len();
    if strict && warnings > 0 {
        bail!("{warnings} warnings reported in strict mode");
    }
    log!(
        "check";
        "{} pages, {} types, {warnings} warnings",
        model.pages().len(),
        model.registry().len()
    );
    Ok(())
}

fn resolve(config: &DocsConfig) -> Result<SiteModel> {
    SiteModel::build(config)
        .with_context(|| format!("Failed to resolve {}", config.content.dir.display()))
}

/// Warnings are printed whole: their tail names the routes involved.
fn report_warnings(model: &SiteModel) {
    for warning in model.warnings() {
        logger::log_full("warn", &warning.to_string());
    }
}

/// `live` drives `ModelHandle` rebuilds; `build` and `check` run one pass.
fn live_notice(config: &DocsConfig) -> Option<&'static str> {
    config
        .live
        .then_some("`live = true` has no effect on one-shot commands, running a single pass")
}
