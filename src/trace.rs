//! Iteration tracing for step-by-step comparison of execution modes.
//!
//! With the `trace` feature enabled, the solver writes one tagged line per
//! event to a [`TraceWriter`]. Diffing the output of a sequential run against
//! a parallel run of the same problem verifies line-by-line that the two
//! modes walk an identical iteration sequence.
//!
//! Tags:
//! ```text
//! TRACE INIT a=<x> fa=<f> b=<x> fb=<f>
//! TRACE ITER t=<n> m=<val> intervals=<count>
//! TRACE SELECT t=<n> lo=<x> hi=<x> r=<characteristic> xk=<x>
//! TRACE DONE t=<n> x=<x> fun=<f> nfev=<n>
//! ```
//!
//! Floats are printed with `{:.17e}` so the lines round-trip bit-exactly.

use std::fmt::Write as FmtWrite;
use std::sync::Mutex;

/// A thread-safe buffer collecting trace lines.
pub struct TraceWriter {
    buffer: Mutex<String>,
}

impl TraceWriter {
    pub fn new() -> Self {
        Self {
            buffer: Mutex::new(String::with_capacity(16 * 1024)),
        }
    }

    /// Append one line.
    pub fn write_line(&self, line: &str) {
        let mut buf = self.buffer.lock().unwrap();
        buf.push_str(line);
        buf.push('\n');
    }

    /// Append one line from format args.
    pub fn write_fmt(&self, args: std::fmt::Arguments<'_>) {
        let mut buf = self.buffer.lock().unwrap();
        let _ = buf.write_fmt(args);
        buf.push('\n');
    }

    /// Everything collected so far.
    pub fn output(&self) -> String {
        self.buffer.lock().unwrap().clone()
    }

    /// Collected output split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.buffer
            .lock()
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Default for TraceWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a trace line to an `Option<TraceWriter>` sink. Compiles to nothing
/// without the `trace` feature.
#[cfg(feature = "trace")]
#[macro_export]
macro_rules! trace_write {
    ($tracer:expr, $($arg:tt)*) => {
        if let Some(ref tw) = $tracer {
            tw.write_fmt(format_args!($($arg)*));
        }
    };
}

#[cfg(not(feature = "trace"))]
#[macro_export]
macro_rules! trace_write {
    ($tracer:expr, $($arg:tt)*) => {};
}
