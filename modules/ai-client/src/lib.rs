mod openai;
pub mod util;

pub use openai::{ImagePayload, OpenAi};
