use sysinfo::System;

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Identity and memory footprint of the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessInfo {
    pub pid: u32,
    /// Resident memory, rounded to whole MiB. Zero when unknown.
    pub memory_mb: u64,
}

impl ProcessInfo {
    pub fn current() -> Self {
        let pid = std::process::id();
        let memory_bytes = sysinfo::get_current_pid()
            .ok()
            .and_then(|spid| {
                let mut system = System::new();
                system.refresh_process(spid);
                system.process(spid).map(sysinfo::Process::memory)
            })
            .unwrap_or(0);

        Self {
            pid,
            memory_mb: round_mib(memory_bytes),
        }
    }
}

fn round_mib(bytes: u64) -> u64 {
    (bytes + BYTES_PER_MIB / 2) / BYTES_PER_MIB
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_reports_own_pid() {
        assert_eq!(ProcessInfo::current().pid, std::process::id());
    }

    #[test]
    fn rounds_to_nearest_mib() {
        assert_eq!(round_mib(0), 0);
        assert_eq!(round_mib(BYTES_PER_MIB / 2 - 1), 0);
        assert_eq!(round_mib(BYTES_PER_MIB / 2), 1);
        assert_eq!(round_mib(3 * BYTES_PER_MIB), 3);
    }
}
