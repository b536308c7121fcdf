use std::path::Path;
use std::process::ExitCode;

use color_eyre::eyre::{Result, WrapErr};
use docmeta_core::report::Report;
use docmeta_core::{Severity, Validator};

use super::{display_path, resolve_config};
use crate::CheckFileArgs;
use crate::logging;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: CheckFileArgs) -> Result<ExitCode> {
    let rc = resolve_config(config, profile, None)?;
    logging::init(&rc, true);

    let text = std::fs::read_to_string(&args.file)
        .wrap_err_with(|| format!("failed to read {}", args.file.display()))?;
    let hint = args.path_hint.unwrap_or_else(|| display_path(&args.file));

    let result = Validator::default().check_document(&text, &hint);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let verdict = if result.is_compliant() { "COMPLIANT" } else { "NON-COMPLIANT" };
        println!("{} [{}] {}", verdict, result.category(), result.path());
        for finding in result.findings() {
            println!("  {finding}");
        }
        println!(
            "{} error(s), {} warning(s), {} info",
            result.count(Severity::Error),
            result.count(Severity::Warning),
            result.count(Severity::Info)
        );
    }

    let outcome = Report::new(vec![result]).outcome(rc.validation.strict);
    Ok(ExitCode::from(outcome.exit_code()))
}
