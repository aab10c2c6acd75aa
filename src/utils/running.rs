use anyhow::{Result, anyhow};
use std::sync::atomic::{self, AtomicBool};
use std::sync::{Arc, OnceLock};
use yansi::Paint;

/// The running flag, used to check if the user aborted.
pub fn running_flag() -> &'static Arc<AtomicBool> {
    static RUNNING: OnceLock<Arc<AtomicBool>> = OnceLock::new();
    RUNNING.get_or_init(|| Arc::new(AtomicBool::new(true)))
}

/// Install a Ctrl-C handler that lowers the running flag, so long reads can stop cleanly.
pub fn install_ctrl_c_handler() {
    let running = Arc::clone(running_flag());
    let res = ctrlc::set_handler(move || {
        eprintln!(" aborting...");
        running.store(false, atomic::Ordering::Relaxed);
    });
    if let Err(err) = res {
        eprintln!("{}: no ctrl-c handler: {err}", "warning".yellow());
    }
}

/// Check whether the user asked to abort, failing with "aborted" if so.
pub fn user_aborted() -> Result<()> {
    ensure_running(running_flag())
}

/// Fail with "aborted" once the given running flag was lowered.
pub fn ensure_running(flag: &AtomicBool) -> Result<()> {
    match flag.load(atomic::Ordering::Relaxed) {
        true => Ok(()),
        false => Err(anyhow!("aborted")),
    }
}
