use std::path::Path;
use std::process::ExitCode;

use color_eyre::eyre::Result;
use docmeta_core::config::{ConfigLoader, default_config_path};

pub fn run(config: Option<&Path>, profile: Option<&str>) -> Result<ExitCode> {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   docmeta doctor");
            println!(
                "path: {}",
                rc.source.clone().unwrap_or_else(default_config_path).display()
            );
            println!("profile: {}", rc.active_profile);
            println!("docs_root: {}", rc.docs_root.display());
            if rc.excluded_folders.is_empty() {
                println!("excluded_folders: (none)");
            } else {
                println!("excluded_folders:");
                for folder in &rc.excluded_folders {
                    println!("  - {}", folder.display());
                }
            }
            println!("validation.strict: {}", rc.validation.strict);
            println!("validation.output: {}", rc.validation.output);
            println!("logging.level: {}", rc.logging.level);
            if let Some(file) = &rc.logging.file {
                println!("logging.file: {}", file.display());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("FAIL docmeta doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            Ok(ExitCode::from(1))
        }
    }
}
