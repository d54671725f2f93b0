//! Hand-authored fallback posts, substituted when live generation fails.
//!
//! Invariant: every kind has at least one entry, and the pool never changes
//! at runtime.

use rand::Rng;

use tavern_common::PostKind;

/// The static fallback pool for a kind.
pub fn fallback_texts(kind: PostKind) -> &'static [&'static str] {
    match kind {
        PostKind::Motivation => MOTIVATION_FALLBACKS,
        PostKind::Fact => FACT_FALLBACKS,
        PostKind::Humor => HUMOR_FALLBACKS,
        PostKind::Devlog => DEVLOG_FALLBACKS,
    }
}

/// Pick one fallback text for the kind, uniformly at random.
pub fn pick_fallback<R: Rng + ?Sized>(kind: PostKind, rng: &mut R) -> &'static str {
    let pool = fallback_texts(kind);
    pool[rng.random_range(0..pool.len())]
}

const MOTIVATION_FALLBACKS: &[&str] = &[
    "🌅 Good morning, Developer's Tavern!\n\n\
     A new day brings new chances to grow. Every bug we fix and every line we \
     write moves us closer to mastery. Don't be afraid to experiment and to \
     learn from your own mistakes.\n\n\
     \"You don't have to be great to start, but you have to start to be great.\"\n\
     — Zig Ziglar\n\n\
     #dev #morningdev #motivation #discipline",
    "🌅 Good morning, Developer's Tavern!\n\n\
     Today is a fine day for writing clean code. Remember: the best developers \
     are not the ones who never make mistakes, but the ones who find and fix \
     them fast. Every challenge is a chance to get better.\n\n\
     \"Simplicity is the ultimate sophistication.\"\n\
     — Leonardo da Vinci\n\n\
     #dev #morningdev #motivation #discipline",
];

const FACT_FALLBACKS: &[&str] = &[
    "🔍 Interesting fact: the first computer bug was found in 1947 by Admiral \
     Grace Hopper. It was a real moth stuck in a relay of the Harvard Mark II. \
     That is why fixing errors is called \"debugging\" — literally removing \
     the bugs.\n\n\
     #dev #morningdev #motivation #discipline",
    "🐍 Python is named after the British comedy show \"Monty Python's Flying \
     Circus\", not after the snake. Guido van Rossum, the language's creator, \
     was a big fan of the show and wanted a name that was short and a little \
     mysterious.\n\n\
     #dev #morningdev #motivation #discipline",
];

const HUMOR_FALLBACKS: &[&str] = &[
    "😅 Fixed one bug, shipped three new ones. My code doesn't have a bug \
     tracker, it has a family tree.\n\n\
     #dev #morningdev #motivation #discipline",
    "🧐 Code review status: \"looks good to me\" after scrolling for four \
     seconds. We all know who will be reading that file at 2 AM next month.\n\n\
     #dev #morningdev #motivation #discipline",
];

const DEVLOG_FALLBACKS: &[&str] = &[
    "💡 Spent three hours today debugging a single function. It turned out \
     the problem was my misunderstanding of the requirements. Lesson learned: \
     sometimes it pays to spend more time analyzing the task than writing the \
     code. Good architecture starts with understanding the problem.\n\n\
     #dev #morningdev #motivation #discipline",
    "🕯️ Refactoring old code is like archaeology. Every layer reveals the \
     history of past decisions. Today I realized that good documentation is a \
     letter to your future self. Write code as if the person maintaining it \
     will be your worst enemy who knows where you live.\n\n\
     #dev #morningdev #motivation #discipline",
];
