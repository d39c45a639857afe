#[cfg(target_env = "musl")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;
use refdiff_core::{list_changed_files, ListConfig, OutputWriter, ReferencePair};
use std::borrow::Cow;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "refdiff",
    version,
    about = "List files changed between two Git references"
)]
struct Cli {
    /// Base git reference (tag, branch, or commit)
    base_ref: String,

    /// Head git reference (tag, branch, or commit)
    head_ref: String,

    /// Glob pattern applied to changed file names (e.g. "*.py")
    #[arg(short, long, env = "REFDIFF_PATTERN")]
    pattern: Option<String>,

    /// Write the list to this file instead of stdout
    #[arg(short, long, env = "REFDIFF_OUTPUT")]
    output: Option<PathBuf>,

    /// Repository path (default: current directory)
    #[arg(long, env = "REFDIFF_REPO_PATH")]
    repo_path: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

/// Filter empty string from Option (env vars may produce "" for unset values)
fn clean_opt(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

fn run(cli: &Cli) -> i32 {
    let refs = match ReferencePair::new(cli.base_ref.as_str(), cli.head_ref.as_str()) {
        Ok(refs) => refs,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    let config = ListConfig {
        refs,
        pattern: clean_opt(&cli.pattern).map(Cow::Borrowed),
        repo_path: clean_opt(&cli.repo_path).map(Cow::Borrowed),
    };

    let changed = match list_changed_files(&config) {
        Ok(changed) => changed,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    // The file is only touched after a successful listing, so a failed git
    // invocation never truncates an existing output file.
    let result = match &cli.output {
        Some(path) => OutputWriter::write_lines(path, changed.iter()),
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            OutputWriter::print_lines(&mut lock, changed.iter())
        }
    };

    if let Err(e) = result {
        eprintln!("{e}");
        return 1;
    }

    0
}
