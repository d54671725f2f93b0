//! Daily wall-clock scheduling in the configured timezone.
//!
//! `next_firing` is pure and tested without I/O; the run loop sleeps until
//! the next slot and fires the pipeline once per slot. A wakeup later than
//! the grace window counts as a missed firing and is skipped.

use std::time::Duration;

use chrono::{DateTime, Days, TimeZone, Utc};
use chrono_tz::Tz;
use tokio::time::sleep;
use tracing::{info, warn};

use tavern_common::FiringSlot;

use crate::pipeline::Pipeline;

/// Earliest configured slot strictly after `after`, resolved in `tz`.
/// Returns `None` when no slots are configured.
pub fn next_firing(slots: &[FiringSlot], tz: Tz, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let local = after.with_timezone(&tz);
    let mut best: Option<DateTime<Utc>> = None;

    // Two extra days are enough to roll past midnight and any DST gap.
    for day in 0..=2u64 {
        let date = local.date_naive().checked_add_days(Days::new(day))?;
        for slot in slots {
            let Some(naive) = date.and_hms_opt(slot.hour, slot.minute, 0) else {
                continue;
            };
            // A local time inside a DST spring-forward gap yields no instant:
            // that day's slot is dropped and the search moves to the next day.
            // An ambiguous local time (fall-back) resolves to the earlier of
            // its two instants.
            let Some(candidate) = tz.from_local_datetime(&naive).earliest() else {
                continue;
            };
            let utc = candidate.with_timezone(&Utc);
            if utc > after && best.map_or(true, |b| utc < b) {
                best = Some(utc);
            }
        }
    }

    best
}

/// Whether a wakeup this late counts as a missed firing rather than a
/// deliverable one. Lateness exactly at the grace bound still fires.
pub fn is_misfire(late: Duration, grace: Duration) -> bool {
    late > grace
}

pub struct Scheduler {
    slots: Vec<FiringSlot>,
    timezone: Tz,
    misfire_grace: Duration,
}

impl Scheduler {
    pub fn new(slots: Vec<FiringSlot>, timezone: Tz, misfire_grace: Duration) -> Self {
        Self {
            slots,
            timezone,
            misfire_grace,
        }
    }

    /// Run until ctrl-c. Each iteration sleeps to the next slot, then fires
    /// the pipeline once.
    pub async fn run(&self, pipeline: &Pipeline) {
        let slots: Vec<String> = self.slots.iter().map(|s| s.to_string()).collect();
        info!(
            slots = slots.join(",").as_str(),
            timezone = %self.timezone,
            "Scheduler started"
        );

        loop {
            let now = Utc::now();
            let Some(next) = next_firing(&self.slots, self.timezone, now) else {
                warn!("No firing slots configured, scheduler stopping");
                return;
            };

            let wait = (next - now).to_std().unwrap_or(Duration::ZERO);
            info!(next = %next.with_timezone(&self.timezone), "Next firing scheduled");

            tokio::select! {
                _ = sleep(wait) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown requested, stopping scheduler");
                    return;
                }
            }

            let woke = Utc::now();
            let late = (woke - next).to_std().unwrap_or(Duration::ZERO);
            if is_misfire(late, self.misfire_grace) {
                warn!(
                    late_secs = late.as_secs(),
                    "Missed firing beyond grace window, skipping"
                );
                continue;
            }

            pipeline.run_scheduled_firing(woke).await;
        }
    }
}
