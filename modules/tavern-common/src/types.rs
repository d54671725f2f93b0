use crate::error::TavernError;

/// The kind of post published to the channel. Fixed set, known at compile
/// time; drives both the text prompt and whether an image accompanies the
/// post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostKind {
    Motivation,
    Fact,
    Humor,
    Devlog,
}

impl PostKind {
    pub const ALL: [PostKind; 4] = [
        PostKind::Motivation,
        PostKind::Fact,
        PostKind::Humor,
        PostKind::Devlog,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Motivation => "motivation",
            PostKind::Fact => "fact",
            PostKind::Humor => "humor",
            PostKind::Devlog => "devlog",
        }
    }

    /// Whether posts of this kind carry generated imagery. Humor is text-only
    /// by design.
    pub fn wants_image(&self) -> bool {
        !matches!(self, PostKind::Humor)
    }
}

impl std::fmt::Display for PostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated image in one of its two delivery forms. "No image" is
/// `Option<GeneratedImage>::None`, never an empty variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedImage {
    /// Hosted by the backend; the transport fetches it by URL.
    RemoteReference { url: String },
    /// Decoded inline payload, uploaded directly to the transport.
    InlineBinary { bytes: Vec<u8>, filename: String },
}

/// One publishable unit. Built fresh per firing and discarded after the
/// publish attempt, whatever the outcome.
#[derive(Debug, Clone)]
pub struct Post {
    pub kind: PostKind,
    pub text: String,
    pub image: Option<GeneratedImage>,
}

/// A daily wall-clock firing time in the configured timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiringSlot {
    pub hour: u32,
    pub minute: u32,
}

impl FiringSlot {
    /// Parse an `HH:MM` string.
    pub fn parse(s: &str) -> Result<Self, TavernError> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| TavernError::Config(format!("invalid firing slot '{s}', expected HH:MM")))?;

        let hour: u32 = hour
            .trim()
            .parse()
            .map_err(|_| TavernError::Config(format!("invalid hour in firing slot '{s}'")))?;
        let minute: u32 = minute
            .trim()
            .parse()
            .map_err(|_| TavernError::Config(format!("invalid minute in firing slot '{s}'")))?;

        if hour > 23 || minute > 59 {
            return Err(TavernError::Config(format!(
                "firing slot '{s}' out of range"
            )));
        }

        Ok(Self { hour, minute })
    }
}

impl std::fmt::Display for FiringSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_slot() {
        let slot = FiringSlot::parse("08:00").unwrap();
        assert_eq!(slot, FiringSlot { hour: 8, minute: 0 });
        assert_eq!(slot.to_string(), "08:00");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(FiringSlot::parse("eight").is_err());
        assert!(FiringSlot::parse("8").is_err());
        assert!(FiringSlot::parse("24:00").is_err());
        assert!(FiringSlot::parse("12:60").is_err());
    }

    #[test]
    fn humor_is_text_only() {
        assert!(!PostKind::Humor.wants_image());
        for kind in [PostKind::Motivation, PostKind::Fact, PostKind::Devlog] {
            assert!(kind.wants_image());
        }
    }
}
