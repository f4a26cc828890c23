//! Shell stubs standing in for the downloader binary in integration tests.
//!
//! Each stub is a small `#!/bin/sh` script written into a temp dir. The
//! recording stub appends its argv (one argument per line) to a log file so
//! tests can assert the exact invocation; other stubs replay canned stdout
//! or stderr from payload files to avoid any quoting issues.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let bin = dir.join(name);
    fs::write(&bin, format!("#!/bin/sh\n{body}")).unwrap();
    fs::set_permissions(&bin, fs::Permissions::from_mode(0o755)).unwrap();
    bin
}

/// Stub that records its argv and exits with `exit_code`.
/// Returns (stub path, argv log path).
pub fn recording(dir: &Path, exit_code: i32) -> (PathBuf, PathBuf) {
    let log = dir.join("argv.log");
    let body = format!(
        "for arg in \"$@\"; do printf '%s\\n' \"$arg\" >> '{}'; done\nexit {}\n",
        log.display(),
        exit_code
    );
    (write_script(dir, "fake-ytdlp", &body), log)
}

/// Stub that prints `stdout` and exits 0, for probe tests.
pub fn with_stdout(dir: &Path, stdout: &str) -> PathBuf {
    let payload = dir.join("stdout.payload");
    fs::write(&payload, stdout).unwrap();
    let body = format!("cat '{}'\nexit 0\n", payload.display());
    write_script(dir, "fake-ytdlp-stdout", &body)
}

/// Stub that prints `stderr` on stderr and exits with `exit_code`.
pub fn failing(dir: &Path, stderr: &str, exit_code: i32) -> PathBuf {
    let payload = dir.join("stderr.payload");
    fs::write(&payload, stderr).unwrap();
    let body = format!("cat '{}' >&2\nexit {}\n", payload.display(), exit_code);
    write_script(dir, "fake-ytdlp-failing", &body)
}
