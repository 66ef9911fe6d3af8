//! Minimal process runner: `safe-exec <program> [args...]`.

use std::process::ExitCode;

use spectron_launcher::{main_with, SourceKind};

fn main() -> ExitCode {
    main_with(SourceKind::CommandLine)
}
