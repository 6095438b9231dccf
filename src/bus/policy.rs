use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{BusError, BusResult, Memory};

/// What the embedding system does with an unmapped access.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FaultPolicy {
    /// Hand the fault back to the caller.
    #[default]
    Halt,
    /// Reads return 0, writes are dropped.
    Zero,
    /// Reads return the last value seen on the data bus, writes are dropped.
    OpenBus,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown fault policy: {0:?} (expected halt, zero or open-bus)")]
pub struct UnknownPolicy(pub String);

impl FromStr for FaultPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "halt" => Ok(FaultPolicy::Halt),
            "zero" => Ok(FaultPolicy::Zero),
            "open-bus" | "open_bus" | "openbus" => Ok(FaultPolicy::OpenBus),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

/// Applies a [`FaultPolicy`] on top of a bus.
///
/// Keeps an open-bus latch holding the last byte read or written
/// successfully through it.
pub struct Lenient<M> {
    inner: M,
    policy: FaultPolicy,
    latch: u8,
}

impl<M: Memory> Lenient<M> {
    pub fn new(inner: M, policy: FaultPolicy) -> Self {
        Lenient {
            inner,
            policy,
            latch: 0,
        }
    }

    pub fn policy(&self) -> FaultPolicy {
        self.policy
    }

    pub fn latch(&self) -> u8 {
        self.latch
    }

    pub fn into_inner(self) -> M {
        self.inner
    }

    fn absorb(&self, err: BusError) -> BusResult<()> {
        if self.policy == FaultPolicy::Halt {
            return Err(err);
        }
        log::warn!("{} (ignored, policy {:?})", err, self.policy);
        Ok(())
    }
}

impl<M: Memory> Memory for Lenient<M> {
    fn read(&mut self, addr: u16) -> BusResult<u8> {
        match self.inner.read(addr) {
            Ok(data) => {
                self.latch = data;
                Ok(data)
            }
            Err(err) => {
                self.absorb(err)?;
                Ok(match self.policy {
                    FaultPolicy::OpenBus => self.latch,
                    _ => 0,
                })
            }
        }
    }

    fn write(&mut self, addr: u16, value: u8) -> BusResult<()> {
        match self.inner.write(addr, value) {
            Ok(()) => {
                self.latch = value;
                Ok(())
            }
            Err(err) => self.absorb(err),
        }
    }
}
