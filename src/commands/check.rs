use crate::audit::Auditor;
use crate::cli::{CheckArgs, Cli};
use crate::config::validate_config_semantics;
use crate::output::{
    AuditProgress, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter, print_error_full,
};
use crate::{Config, EXIT_CONFIG_ERROR, Result};

use super::context::{color_choice_to_mode, load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error_full(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Run the audit and report. Returns the process exit code.
///
/// # Errors
/// Returns an error for configuration problems and fatal filesystem failures.
/// Findings are not errors; they produce exit code 1.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?.config;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);
    validate_config_semantics(&config)?;

    // 3. Run the audit
    let progress = AuditProgress::new(cli.quiet);
    let report = Auditor::new(&config)
        .with_nav(!args.no_nav)
        .run(&args.root, &progress)?;

    // 4. Format and write output
    let output = match args.format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose)
                .format(&report)?
        }
        OutputFormat::Json => JsonFormatter.format(&report)?,
    };
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(report.exit_code())
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ref ext) = args.ext {
        config.scanner.extension.clone_from(ext);
    }

    config.scanner.exclude.extend(args.exclude.iter().cloned());

    if let Some(ref nav) = args.nav {
        config.links.nav_source.clone_from(nav);
    }

    if args.no_head {
        config.head.enabled = false;
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
