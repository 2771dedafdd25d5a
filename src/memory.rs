// src/memory.rs
use sysinfo::System;

/// Formats the current process's virtual memory size, e.g. `[VMS=1532MiB]`.
///
/// The value is queried fresh from the OS on every call and truncated to
/// whole mebibytes. Intended for tagging log lines during long runs.
pub fn memory_info() -> String {
    let pid = sysinfo::get_current_pid().expect("Failed to resolve current process pid");
    let mut sys = System::new();
    sys.refresh_process(pid);
    let vms_mib = sys.process(pid).map(|p| p.virtual_memory()).unwrap_or(0) / 1024 / 1024;
    format!("[VMS={}MiB]", vms_mib)
}
