//! Launch `$SPECTRON_NODE_PATH $SPECTRON_LAUNCHER_PATH <args...>`.

use std::process::ExitCode;

use spectron_launcher::{main_with, SourceKind};

fn main() -> ExitCode {
    main_with(SourceKind::Environment)
}
