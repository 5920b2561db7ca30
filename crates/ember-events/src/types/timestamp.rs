//! Human-readable rendering of native event timestamps.
//!
//! Timestamps are nanosecond tick counts from the native monotonic clock.
//! No validation is applied beyond being an unsigned integer.

use std::fmt;

const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000 * NANOS_PER_MILLI;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Display adapter decomposing a nanosecond tick count into
/// `"<h>h <m>min <s>s <ms>ms <ns>ns"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayTimestamp(pub u64);

impl fmt::Display for DisplayTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = self.0;
        let hours = ns / NANOS_PER_HOUR;
        let minutes = (ns % NANOS_PER_HOUR) / NANOS_PER_MINUTE;
        let seconds = (ns % NANOS_PER_MINUTE) / NANOS_PER_SECOND;
        let millis = (ns % NANOS_PER_SECOND) / NANOS_PER_MILLI;
        let nanos = ns % NANOS_PER_MILLI;
        write!(f, "{hours}h {minutes}min {seconds}s {millis}ms {nanos}ns")
    }
}
