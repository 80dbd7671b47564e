//! Serialized access to the hardware tick counter
//!
//! [`read_monotonic_ticks`] is the single narrow interface over the
//! per-architecture counter: `rdtsc` fenced by `lfence` on x86_64, the
//! virtual counter fenced by `isb` on aarch64, and a monotonic nanosecond
//! clock anywhere else. Everything above it goes through [`TickSource`] so
//! that calibration and the driver can be exercised with synthetic clocks.

#![allow(unsafe_code)]

use std::fmt;
use std::time::Duration;

/// What one tick of a [`TickSource`] measures
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickUnit {
    /// Processor cycles (or a fixed-rate cycle counter)
    Cycles,
    /// Nanoseconds of a monotonic wall clock
    Nanoseconds,
}

impl fmt::Display for TickUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickUnit::Cycles => f.write_str("cycles"),
            TickUnit::Nanoseconds => f.write_str("ns"),
        }
    }
}

/// Read the tick counter with instruction-ordering fences on both sides
#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn read_monotonic_ticks() -> u64 {
    use core::arch::x86_64::{_mm_lfence, _rdtsc};
    // SAFETY: lfence and rdtsc touch no memory; SSE2 is part of the x86_64
    // baseline.
    unsafe {
        _mm_lfence();
        let t = _rdtsc();
        _mm_lfence();
        t
    }
}

/// Read the tick counter with instruction-ordering fences on both sides
#[cfg(target_arch = "aarch64")]
#[inline(always)]
pub fn read_monotonic_ticks() -> u64 {
    let t: u64;
    // SAFETY: cntvct_el0 is readable from EL0 on every aarch64 OS we target.
    unsafe {
        core::arch::asm!(
            "isb",
            "mrs {t}, cntvct_el0",
            "isb",
            t = out(reg) t,
            options(nostack, preserves_flags),
        );
    }
    t
}

/// Nanoseconds since the first call, from a monotonic clock
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
#[inline(always)]
pub fn read_monotonic_ticks() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static EPOCH: OnceLock<Instant> = OnceLock::new();
    let epoch = EPOCH.get_or_init(Instant::now);
    std::sync::atomic::compiler_fence(std::sync::atomic::Ordering::SeqCst);
    epoch.elapsed().as_nanos() as u64
}

/// Unit of [`read_monotonic_ticks`] on this target
pub const fn native_unit() -> TickUnit {
    if cfg!(any(target_arch = "x86_64", target_arch = "aarch64")) {
        TickUnit::Cycles
    } else {
        TickUnit::Nanoseconds
    }
}

/// Run `iterations` passes of 20 dependent adds and return the elapsed ticks
///
/// Each add depends on the previous one, so on a core running at the counter
/// frequency the loop costs one tick per add.
#[cfg(target_arch = "x86_64")]
pub fn canary_ticks(iterations: u64) -> u64 {
    if iterations == 0 {
        return 0;
    }

    let start: u64;
    let end: u64;
    // SAFETY: register-only; rax and rdx are declared clobbered and the loop
    // counter is nonzero on entry.
    unsafe {
        core::arch::asm!(
            "lfence",
            "rdtsc",
            "shl rdx, 32",
            "or rax, rdx",
            "mov {start}, rax",
            "2:",
            ".rept 10",
            "add {a}, {b}",
            "add {b}, {a}",
            ".endr",
            "dec {n}",
            "jnz 2b",
            "lfence",
            "rdtsc",
            "lfence",
            "shl rdx, 32",
            "or rax, rdx",
            start = out(reg) start,
            a = inout(reg) 1u64 => _,
            b = inout(reg) 1u64 => _,
            n = inout(reg) iterations => _,
            out("rax") end,
            out("rdx") _,
            options(nostack, nomem),
        );
    }
    end.wrapping_sub(start)
}

/// Abstraction over "read a monotonic tick count"
pub trait TickSource {
    /// Current tick count, serialized against surrounding instructions
    fn read(&mut self) -> u64;

    /// What a tick measures
    fn unit(&self) -> TickUnit;

    /// Ticks taken by `iterations` passes of the fixed-cost canary loop, or
    /// `None` when this source cannot run it
    fn canary(&mut self, iterations: u64) -> Option<u64>;

    /// Block for `duration` of wall-clock time
    fn sleep(&mut self, duration: Duration);
}

/// The real counter of the running machine
#[derive(Copy, Clone, Debug, Default)]
pub struct HardwareTicks;

impl TickSource for HardwareTicks {
    #[inline(always)]
    fn read(&mut self) -> u64 {
        read_monotonic_ticks()
    }

    fn unit(&self) -> TickUnit {
        native_unit()
    }

    #[cfg(target_arch = "x86_64")]
    fn canary(&mut self, iterations: u64) -> Option<u64> {
        Some(canary_ticks(iterations))
    }

    #[cfg(not(target_arch = "x86_64"))]
    fn canary(&mut self, _iterations: u64) -> Option<u64> {
        None
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// A deterministic clock for tests and dry runs
///
/// Every `read` advances time by `ticks_per_read`; the canary reports
/// `cycles_per_instruction` ticks per add; `sleep` advances by
/// `ticks_per_second` scaled to the duration without blocking.
#[derive(Clone, Debug)]
pub struct SyntheticTicks {
    now: u64,
    ticks_per_read: u64,
    ticks_per_second: u64,
    cycles_per_instruction: Option<f64>,
    adds_per_iteration: u64,
}

impl SyntheticTicks {
    pub fn new(ticks_per_second: u64, cycles_per_instruction: f64) -> Self {
        Self {
            now: 0,
            ticks_per_read: 0,
            ticks_per_second,
            cycles_per_instruction: Some(cycles_per_instruction),
            adds_per_iteration: evm384_params::utils::harness::CANARY_ADDS_PER_ITERATION,
        }
    }

    /// A source that cannot run the canary
    pub fn without_canary(ticks_per_second: u64) -> Self {
        Self {
            cycles_per_instruction: None,
            ..Self::new(ticks_per_second, 1.0)
        }
    }

    pub fn with_ticks_per_read(mut self, ticks: u64) -> Self {
        self.ticks_per_read = ticks;
        self
    }

    pub fn now(&self) -> u64 {
        self.now
    }
}

impl TickSource for SyntheticTicks {
    fn read(&mut self) -> u64 {
        self.now += self.ticks_per_read;
        self.now
    }

    fn unit(&self) -> TickUnit {
        TickUnit::Cycles
    }

    fn canary(&mut self, iterations: u64) -> Option<u64> {
        let cpi = self.cycles_per_instruction?;
        let ticks = (iterations * self.adds_per_iteration) as f64 * cpi;
        let ticks = ticks.round() as u64;
        self.now += ticks;
        Some(ticks)
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += (self.ticks_per_second as u128 * duration.as_nanos() / 1_000_000_000) as u64;
    }
}

/// Fixed-length per-outer-iteration sample storage
///
/// Slots are overwritten, never appended, so one buffer serves every case a
/// driver runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawSampleBuffer {
    samples: Vec<u64>,
}

impl RawSampleBuffer {
    pub fn new(len: usize) -> Self {
        Self {
            samples: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.samples
    }

    /// Zero every slot
    pub fn clear(&mut self) {
        self.samples.iter_mut().for_each(|s| *s = 0);
    }

    fn store(&mut self, slot: usize, value: u64) {
        self.samples[slot] = value;
    }
}

/// Start/end pair around a timed region
#[derive(Debug)]
pub struct CycleCounter<S> {
    source: S,
    start: u64,
}

impl<S: TickSource> CycleCounter<S> {
    pub fn new(source: S) -> Self {
        Self { source, start: 0 }
    }

    /// Record the start of a timed region
    #[inline(always)]
    pub fn start(&mut self) {
        self.start = self.source.read();
    }

    /// Store the ticks elapsed since [`start`](Self::start) into `slot`
    ///
    /// Panics if `slot` is out of range for `buffer`.
    #[inline(always)]
    pub fn end(&mut self, slot: usize, buffer: &mut RawSampleBuffer) {
        let end = self.source.read();
        buffer.store(slot, end.wrapping_sub(self.start));
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
