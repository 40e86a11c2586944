use anyhow::{Context, Result};
use comfy_table::Table;
use refova_cli::runner::{RunReport, run};
use refova_cli::scenario::Scenario;
use refova_validate::RULE_KINDS;
use tracing::info_span;

use crate::cli::{OutputFormatArg, RunArgs};
use crate::summary::{apply_table_style, print_summary};

pub fn run_rules() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Kind", "Passes when"]);
    apply_table_style(&mut table);
    for (kind, description) in RULE_KINDS {
        table.add_row(vec![*kind, *description]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_scenario(args: &RunArgs) -> Result<RunReport> {
    let path = &args.scenario;
    let span = info_span!("scenario", path = %path.display());
    let _guard = span.enter();
    let scenario = Scenario::load(path)
        .with_context(|| format!("load scenario {}", path.display()))?;
    run(&scenario).context("replay scenario")
}

pub fn print_report(report: &RunReport, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => print_summary(report),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(report).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}
