use std::io;
use std::path::Path;
use std::process::ExitCode;

use color_eyre::eyre::{Result, WrapErr};
use docmeta_core::corpus::{CorpusWalker, Document};
use docmeta_core::report::Report;
use docmeta_core::{ValidationResult, Validator};
use rayon::prelude::*;
use tracing::{info, warn};

use super::{display_path, output, resolve_config};
use crate::ValidateArgs;
use crate::logging;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: ValidateArgs) -> Result<ExitCode> {
    let rc = resolve_config(config, profile, args.path.as_deref())?;
    logging::init(&rc, args.quiet);

    let strict = args.strict || rc.validation.strict;
    let format = args.output.unwrap_or(rc.validation.output);

    info!("Scanning for markdown files in: {}", rc.docs_root.display());
    let walker = CorpusWalker::with_exclusions(&rc.docs_root, rc.excluded_folders.clone())
        .wrap_err_with(|| format!("cannot scan {}", rc.docs_root.display()))?;
    let docs = walker.walk()?;
    info!("Found {} markdown files", docs.len());

    let root_is_file = rc.docs_root.is_file();
    let validator = Validator::default();
    let results: Vec<ValidationResult> = docs
        .par_iter()
        .map(|doc| {
            let path = if root_is_file {
                display_path(&rc.docs_root)
            } else {
                display_path(&rc.docs_root.join(&doc.relative_path))
            };
            check(validator, doc, &path)
        })
        .collect();
    info!("Processed {} files", results.len());

    let report = Report::new(results);
    let outcome = report.outcome(strict);

    let stdout = io::stdout();
    output::render(&report, format, &mut stdout.lock())?;

    info!(
        compliant = report.summary().compliant_files,
        non_compliant = report.summary().non_compliant_files,
        strict,
        "validation finished"
    );
    logging::flush();
    Ok(ExitCode::from(outcome.exit_code()))
}

fn check(validator: Validator<'_>, doc: &Document, path: &str) -> ValidationResult {
    match std::fs::read_to_string(&doc.absolute_path) {
        Ok(text) => validator.check_document(&text, path),
        Err(e) => {
            warn!(path, error = %e, "could not read document");
            ValidationResult::unreadable(path, e)
        }
    }
}
