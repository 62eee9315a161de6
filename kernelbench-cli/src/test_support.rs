//! Shell-script stand-ins for the build tool and the benchmark kernel.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable `sh` script at `dir/rel`, creating parent dirs
pub fn write_script(dir: &Path, rel: &str, body: &str) -> PathBuf {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Fake kernel that logs each argument to `calls.log` next to itself.
/// With `fail_on`, that size writes to stderr and exits 7.
pub fn write_kernel(dir: &Path, rel: &str, fail_on: Option<u64>) -> PathBuf {
    let failure = match fail_on {
        Some(size) => format!(
            "if [ \"$1\" = \"{}\" ]; then\n    echo \"bad size $1\" >&2\n    exit 7\nfi\n",
            size
        ),
        None => String::new(),
    };
    write_script(
        dir,
        rel,
        &format!(
            "echo \"$1\" >> \"$(dirname \"$0\")/calls.log\"\n{}echo \"kernel size=$1\"",
            failure
        ),
    )
}

/// Fake build tool that leaves a marker in its working directory
pub fn write_build_tool(dir: &Path, exit_code: i32) -> PathBuf {
    write_script(
        dir,
        "tools/fake-make",
        &format!("touch \"$PWD/build.ran\"\nexit {}", exit_code),
    )
}

/// Lines the fake kernel logged, empty if it never ran
pub fn kernel_calls(kernel: &Path) -> Vec<String> {
    let log = kernel.with_file_name("calls.log");
    fs::read_to_string(log)
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
