//! Hour-of-day → post kind policy.

use rand::Rng;

use tavern_common::{PostKind, SlotPolicy};

/// Pick the post kind for the given hour.
///
/// The morning slot is always motivation; midday alternates fact/humor;
/// evening alternates devlog/fact. Any other hour draws uniformly from the
/// full set. Callers inject the random source so tests can seed it.
pub fn select_post_kind<R: Rng + ?Sized>(hour: u32, policy: &SlotPolicy, rng: &mut R) -> PostKind {
    if hour == policy.morning {
        PostKind::Motivation
    } else if hour == policy.midday {
        if rng.random_bool(0.5) {
            PostKind::Fact
        } else {
            PostKind::Humor
        }
    } else if hour == policy.evening {
        if rng.random_bool(0.5) {
            PostKind::Devlog
        } else {
            PostKind::Fact
        }
    } else {
        PostKind::ALL[rng.random_range(0..PostKind::ALL.len())]
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn every_hour_yields_a_known_kind() {
        let policy = SlotPolicy::default();
        let mut rng = StdRng::seed_from_u64(7);
        for hour in 0..24 {
            let kind = select_post_kind(hour, &policy, &mut rng);
            assert!(PostKind::ALL.contains(&kind), "hour {hour} gave {kind}");
        }
    }

    #[test]
    fn morning_is_always_motivation() {
        let policy = SlotPolicy::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(
                select_post_kind(policy.morning, &policy, &mut rng),
                PostKind::Motivation
            );
        }
    }

    #[test]
    fn midday_alternates_fact_and_humor() {
        let policy = SlotPolicy::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let kind = select_post_kind(policy.midday, &policy, &mut rng);
            assert!(matches!(kind, PostKind::Fact | PostKind::Humor));
        }
    }

    #[test]
    fn evening_alternates_devlog_and_fact() {
        let policy = SlotPolicy::default();
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let kind = select_post_kind(policy.evening, &policy, &mut rng);
            assert!(matches!(kind, PostKind::Devlog | PostKind::Fact));
        }
    }

    #[test]
    fn policy_hours_are_configurable() {
        let policy = SlotPolicy {
            morning: 9,
            midday: 14,
            evening: 20,
        };
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            select_post_kind(9, &policy, &mut rng),
            PostKind::Motivation
        );
        for _ in 0..20 {
            let kind = select_post_kind(14, &policy, &mut rng);
            assert!(matches!(kind, PostKind::Fact | PostKind::Humor));
        }
    }

    #[test]
    fn seeded_rng_is_deterministic() {
        let policy = SlotPolicy::default();
        let a: Vec<PostKind> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..24)
                .map(|h| select_post_kind(h, &policy, &mut rng))
                .collect()
        };
        let b: Vec<PostKind> = {
            let mut rng = StdRng::seed_from_u64(99);
            (0..24)
                .map(|h| select_post_kind(h, &policy, &mut rng))
                .collect()
        };
        assert_eq!(a, b);
    }
}
