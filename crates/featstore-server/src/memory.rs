//! Process memory probe
//!
//! Reports the resident set size of the current process in megabytes.
//! Feature responses and /stats embed the value so the demo can show the
//! memory cost of precomputing against the on-demand baseline.

use sysinfo::{Pid, System};
use tokio::sync::Mutex;

/// Samples the current process's resident memory
pub struct MemoryProbe {
    pid: Pid,
    system: Mutex<System>,
}

impl MemoryProbe {
    /// Create a probe bound to the current process
    pub fn new() -> Self {
        let pid = sysinfo::get_current_pid().unwrap_or_else(|_| Pid::from_u32(std::process::id()));
        Self {
            pid,
            system: Mutex::new(System::new()),
        }
    }

    /// Current resident set size in megabytes; 0 when the process cannot
    /// be inspected
    pub async fn resident_mb(&self) -> f64 {
        let mut system = self.system.lock().await;
        system.refresh_process(self.pid);
        system
            .process(self.pid)
            .map(|process| process.memory() as f64 / (1024.0 * 1024.0))
            .unwrap_or(0.0)
    }
}

impl Default for MemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resident_memory_is_positive() {
        let probe = MemoryProbe::new();
        let mb = probe.resident_mb().await;
        assert!(mb > 0.0, "expected a running process to report memory, got {mb}");
    }

    #[tokio::test]
    async fn test_repeated_samples_stay_positive() {
        let probe = MemoryProbe::new();
        let first = probe.resident_mb().await;
        let second = probe.resident_mb().await;
        assert!(first > 0.0);
        assert!(second > 0.0);
    }
}
