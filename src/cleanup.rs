//! Removal of in-progress dump files, driven either by command flow
//! (end of a clone) or by SIGINT/SIGTERM.

use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;
use std::thread;

use nix::sys::signal::{SigSet, Signal};

use crate::error::BackupError;

/// Environment variable naming the dump file to delete on interrupt.
pub const CLEANUP_FILE_ENV: &str = "PGBACK_CLEANUP_FILE";

/// Remember `path` so an interrupt (or a later `run`) deletes it.
pub fn register(path: &Path) {
    env::set_var(CLEANUP_FILE_ENV, path);
}

/// Delete the registered dump file. Errors when nothing was registered
/// or the file is already gone.
pub fn run() -> Result<(), BackupError> {
    let path = env::var_os(CLEANUP_FILE_ENV).ok_or(BackupError::NothingToCleanUp)?;
    fs::remove_file(&path)?;
    env::remove_var(CLEANUP_FILE_ENV);
    Ok(())
}

fn watched_signals() -> SigSet {
    let mut set = SigSet::empty();
    set.add(Signal::SIGINT);
    set.add(Signal::SIGTERM);
    set
}

/// Block SIGINT/SIGTERM on the calling thread and hand them to a
/// background listener that removes any in-progress dump file before
/// terminating the process. Must run before any other thread is spawned
/// so the mask is inherited everywhere.
pub fn spawn_signal_listener() -> Result<(), BackupError> {
    let signals = watched_signals();
    signals
        .thread_block()
        .map_err(|errno| io::Error::from_raw_os_error(errno as i32))?;

    thread::spawn(move || {
        if let Ok(signal) = signals.wait() {
            tracing::debug!("caught {}, cleaning up", signal);
            if let Err(err) = run() {
                eprintln!("{}", err);
            }
            std::process::exit(1);
        }
    });

    Ok(())
}

/// Child processes must not inherit the blocked mask, or an interrupt
/// would leave a pg_dump running after this process exits.
pub fn unblock_in_child(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;

    unsafe {
        cmd.pre_exec(|| {
            watched_signals()
                .thread_unblock()
                .map_err(|errno| io::Error::from_raw_os_error(errno as i32))
        });
    }
}
