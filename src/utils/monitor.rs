#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct PhaseStats {
    pub phase: String,
    pub memory_mb: u64,
    pub peak_memory_mb: u64,
    pub phase_elapsed: Duration,
    pub total_elapsed: Duration,
}

/// 記錄每個搜尋階段的耗時與記憶體用量
#[cfg(feature = "cli")]
pub struct RunMonitor {
    system: Mutex<System>,
    pid: Option<Pid>,
    started: Instant,
    last_phase: Mutex<Instant>,
    peak_memory_mb: Mutex<u64>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let now = Instant::now();
        Self {
            system: Mutex::new(System::new()),
            pid: sysinfo::get_current_pid().ok(),
            started: now,
            last_phase: Mutex::new(now),
            peak_memory_mb: Mutex::new(0),
            enabled,
        }
    }

    fn current_memory_mb(&self) -> Option<u64> {
        let pid = self.pid?;
        let mut system = self.system.lock().ok()?;
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        system.process(pid).map(|p| p.memory() / 1024 / 1024)
    }

    pub fn phase_stats(&self, phase: &str) -> Option<PhaseStats> {
        if !self.enabled {
            return None;
        }

        let memory_mb = self.current_memory_mb().unwrap_or(0);
        let peak_memory_mb = {
            let mut peak = self.peak_memory_mb.lock().ok()?;
            *peak = (*peak).max(memory_mb);
            *peak
        };
        let phase_elapsed = {
            let mut last = self.last_phase.lock().ok()?;
            let elapsed = last.elapsed();
            *last = Instant::now();
            elapsed
        };

        Some(PhaseStats {
            phase: phase.to_string(),
            memory_mb,
            peak_memory_mb,
            phase_elapsed,
            total_elapsed: self.started.elapsed(),
        })
    }

    pub fn log_phase(&self, phase: &str) {
        if let Some(stats) = self.phase_stats(phase) {
            tracing::info!(
                "📊 {} - Memory: {}MB, Peak: {}MB, Phase: {:?}, Total: {:?}",
                stats.phase,
                stats.memory_mb,
                stats.peak_memory_mb,
                stats.phase_elapsed,
                stats.total_elapsed
            );
        }
    }

    pub fn log_final(&self) {
        if !self.enabled {
            return;
        }
        let peak = self.peak_memory_mb.lock().map(|p| *p).unwrap_or(0);
        tracing::info!(
            "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
            self.started.elapsed(),
            peak
        );
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// 非 CLI 建置時不蒐集系統資訊
#[cfg(not(feature = "cli"))]
#[derive(Default)]
pub struct RunMonitor;

#[cfg(not(feature = "cli"))]
impl RunMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_phase(&self, _phase: &str) {}

    pub fn log_final(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
