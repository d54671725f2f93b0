//! One scheduled firing: time → kind → post → delivery outcome.
//!
//! Each firing is independent and stateless; a failed firing never affects
//! the next one.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use tracing::{error, info};

use ai_client::util::truncate_to_char_boundary;
use tavern_common::SlotPolicy;

use crate::generator::ContentGenerator;
use crate::publisher::Publisher;
use crate::selector::select_post_kind;

pub struct Pipeline {
    generator: ContentGenerator,
    publisher: Publisher,
    timezone: Tz,
    slots: SlotPolicy,
}

impl Pipeline {
    pub fn new(
        generator: ContentGenerator,
        publisher: Publisher,
        timezone: Tz,
        slots: SlotPolicy,
    ) -> Self {
        Self {
            generator,
            publisher,
            timezone,
            slots,
        }
    }

    /// Run one firing. Failures are terminal for this firing only.
    pub async fn run_scheduled_firing(&self, now: DateTime<Utc>) {
        let hour = now.with_timezone(&self.timezone).hour();
        let kind = select_post_kind(hour, &self.slots, &mut rand::rng());

        info!(hour, kind = %kind, "Firing: generating post");

        let post = self.generator.generate(kind).await;

        if self.publisher.publish(&post).await {
            info!(
                kind = %kind,
                preview = truncate_to_char_boundary(&post.text, 50),
                "Firing complete"
            );
        } else {
            error!(kind = %kind, "No post published this slot");
        }
    }

    /// Startup diagnostics: transport connectivity only.
    pub async fn self_check(&self) -> bool {
        self.publisher.self_check().await
    }
}
