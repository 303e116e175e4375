//! Duration of the last command, when it was slow.

use std::fmt::Write;
use std::time::Duration;

use async_trait::async_trait;

use super::{Module, ModuleError, ModuleId};
use crate::context::Context;
use crate::style::{BOLD, BOLD_RESET, FG_RESET, fg};

/// Commands faster than this are not reported.
const MIN_DURATION: Duration = Duration::from_secs(2);

const NANOS_PER_MILLI: u128 = 1_000_000;

pub struct TookModule;

#[async_trait]
impl Module for TookModule {
    fn id(&self) -> ModuleId {
        ModuleId::Took
    }

    async fn render(&self, ctx: &Context) -> Result<String, ModuleError> {
        if ctx.duration < MIN_DURATION {
            return Ok(String::new());
        }
        Ok(format!(
            " took {}{}{}{}{}",
            BOLD,
            fg("yellow"),
            format_duration(ctx.duration),
            BOLD_RESET,
            FG_RESET
        ))
    }
}

/// Format a duration rounded to the millisecond, e.g. `2.5s`, `1m5.123s`,
/// `1h0m2s`, `350ms`.
pub fn format_duration(duration: Duration) -> String {
    // Round half up to whole milliseconds
    let millis = (duration.as_nanos() + NANOS_PER_MILLI / 2) / NANOS_PER_MILLI;

    if millis == 0 {
        return "0s".to_string();
    }
    if millis < 1000 {
        return format!("{}ms", millis);
    }

    let hours = millis / 3_600_000;
    let minutes = (millis / 60_000) % 60;
    let seconds = (millis / 1000) % 60;
    let frac = millis % 1000;

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{}h", hours);
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{}m", minutes);
    }
    let _ = write!(out, "{}", seconds);
    if frac > 0 {
        let digits = format!("{:03}", frac);
        let _ = write!(out, ".{}", digits.trim_end_matches('0'));
    }
    out.push('s');
    out
}
