//! Static prompt templates: one instruction set per post kind for the text
//! model, and one visual prompt per image-bearing kind.

use tavern_common::PostKind;

/// Fixed user turn sent with every instruction template.
pub const USER_TURN: &str = "Write today's post.";

/// System instructions for the text model.
pub fn instructions(kind: PostKind) -> &'static str {
    match kind {
        PostKind::Motivation => MOTIVATION_INSTRUCTIONS,
        PostKind::Fact => FACT_INSTRUCTIONS,
        PostKind::Humor => HUMOR_INSTRUCTIONS,
        PostKind::Devlog => DEVLOG_INSTRUCTIONS,
    }
}

/// Visual prompt for image-bearing kinds. Humor is text-only by design and
/// has no visual prompt.
pub fn image_prompt(kind: PostKind) -> Option<&'static str> {
    match kind {
        PostKind::Motivation => Some(MORNING_IMAGE_PROMPT),
        PostKind::Fact => Some(FACT_IMAGE_PROMPT),
        PostKind::Devlog => Some(DEVLOG_IMAGE_PROMPT),
        PostKind::Humor => None,
    }
}

const MOTIVATION_INSTRUCTIONS: &str = "\
You are the author of the \"Developer's Tavern\" Telegram channel.
Write a motivational morning post about programming.

Requirements:
- Open with \"🌅 Good morning, Developer's Tavern!\"
- Follow with a motivational message in the style of a philosophical reflection
- Length: 3-5 sentences
- Tone: friendly, inspiring, philosophical
- Use emoji sparingly
- Close with an inspiring quote in quotation marks and its author
- Themes: motivation in programming, overcoming setbacks, growth as a developer
- End with the hashtags: #dev #morningdev #motivation #discipline

The post must follow this layout:
🌅 Good morning, Developer's Tavern!
[motivational message]
\"[inspiring quote]\"
— [author]

[hashtags]";

const FACT_INSTRUCTIONS: &str = "\
You are the author of the \"Developer's Tavern\" Telegram channel.
Write an interesting IT fact.

Requirements:
- Length: 3-5 sentences
- Tone: educational, engaging
- Use emoji sparingly
- Themes: IT history, surprising facts about programming languages, companies, technology
- End with the hashtags: #dev #morningdev #motivation #discipline

Tell something genuinely interesting that could surprise even experienced developers.";

const HUMOR_INSTRUCTIONS: &str = "\
You are the author of the \"Developer's Tavern\" Telegram channel.
Write a short humorous post about programming.

Requirements:
- Length: 2-4 sentences
- Tone: humorous, ironic
- Use emoji sparingly
- Themes: everyday programmer situations, bugs, deadlines, code review
- End with the hashtags: #dev #morningdev #motivation #discipline

Write something every developer will laugh at because they recognize themselves in it.";

const DEVLOG_INSTRUCTIONS: &str = "\
You are the author of the \"Developer's Tavern\" Telegram channel.
Write a devlog post, a note written in a developer's own voice.

Requirements:
- Open with a candle or lamp emoji
- Length: 4-6 sentences
- Tone: personal, reflective, philosophical
- Use emoji sparingly
- Themes: reflections on code, architecture, refactoring, new technology
- End with the hashtags: #dev #morningdev #motivation #discipline

Write as a developer sharing their own thoughts and experience.";

const MORNING_IMAGE_PROMPT: &str = "\
Cozy developer workspace at sunrise, warm golden lighting through window,
laptop with code on screen, coffee cup, notebook, plant, programming books,
peaceful morning atmosphere, wooden desk, soft shadows,
indie game art style, digital painting, warm color palette,
developer's den, comfortable coding setup, morning productivity vibes";

const FACT_IMAGE_PROMPT: &str = "\
Tech illustration, computer history, vintage computers mixed with modern technology,
circuit boards, code snippets, tech timeline, digital art style,
educational tech poster, programming concepts visualization,
blue and green color scheme, clean professional design";

const DEVLOG_IMAGE_PROMPT: &str = "\
Developer's evening reflection, dim lighting, multiple monitors,
code architecture diagrams, notes scattered on desk,
thoughtful atmosphere, deep work vibes, purple and blue tones,
professional development environment, contemplative mood";
