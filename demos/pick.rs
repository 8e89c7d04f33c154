//! Show one native dialog and print what was picked.
//!
//! ```text
//! cargo run --example pick -- file|files|dir [INIT_DIR]
//! ```

use file_picker::{pick_dir, pick_file, pick_files, FileFilter};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "usage: pick file|files|dir [INIT_DIR]";

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let Some(mode) = args.next() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };
    let init_dir = args.next().map(PathBuf::from);
    let init_dir = init_dir.as_deref();

    let filters = [
        FileFilter::new("Rust Files", "*.rs"),
        FileFilter::new("Manifests", "Cargo.toml *.lock"),
        FileFilter::all_files(),
    ];

    let picked: file_picker::Result<Vec<PathBuf>> = match mode.as_str() {
        "file" => {
            pick_file(Some(&filters[..]), init_dir).map(|path| path.into_iter().collect())
        }
        "files" => pick_files(Some(&filters[..]), init_dir),
        "dir" => pick_dir(init_dir).map(|path| path.into_iter().collect()),
        other => {
            eprintln!("unknown mode '{}'\n{}", other, USAGE);
            return ExitCode::FAILURE;
        }
    };

    match picked {
        Ok(paths) if paths.is_empty() => {
            info!("Nothing picked");
            ExitCode::SUCCESS
        }
        Ok(paths) => {
            for path in paths {
                println!("{}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
