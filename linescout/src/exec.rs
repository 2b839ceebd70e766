use std::process::Command;
use tracing::trace;

/// Runs a command through the platform shell and returns its stdout as
/// newline-stripped lines.
///
/// A command that cannot be spawned yields an empty vec; a nonzero exit
/// status still yields whatever stdout was captured before it. Stderr is
/// not captured.
pub fn run(command: &str) -> Vec<String> {
    trace!("Running command: {}", command);

    let output = if cfg!(windows) {
        Command::new("cmd").args(["/C", command]).output()
    } else {
        Command::new("sh").args(["-c", command]).output()
    };

    match output {
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect(),
        Err(_) => Vec::new(),
    }
}
