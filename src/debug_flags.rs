use std::sync::OnceLock;

use crate::bus::FaultPolicy;

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "on" | "ON"))
        .unwrap_or(default)
}

/// Trace every bus access (`DEBUG_BUS`).
pub fn bus_trace() -> bool {
    static ON: OnceLock<bool> = OnceLock::new();
    *ON.get_or_init(|| env_flag("DEBUG_BUS", false))
}

pub fn quiet() -> bool {
    static ON: OnceLock<bool> = OnceLock::new();
    *ON.get_or_init(|| env_flag("QUIET", false))
}

/// Policy for unmapped accesses from `NES_BUS_FAULT` (halt, zero, open-bus).
/// Unknown values fall back to halt.
pub fn fault_policy() -> FaultPolicy {
    static POLICY: OnceLock<FaultPolicy> = OnceLock::new();
    *POLICY.get_or_init(|| match std::env::var("NES_BUS_FAULT") {
        Ok(v) => v.parse().unwrap_or_else(|err| {
            log::warn!("{}; using halt", err);
            FaultPolicy::Halt
        }),
        Err(_) => FaultPolicy::Halt,
    })
}
