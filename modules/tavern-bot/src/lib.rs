pub mod fallback;
pub mod generator;
pub mod image;
pub mod pipeline;
pub mod prompts;
pub mod publisher;
pub mod scheduler;
pub mod selector;
pub mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use generator::ContentGenerator;
pub use image::ImageAcquirer;
pub use pipeline::Pipeline;
pub use publisher::Publisher;
pub use scheduler::Scheduler;
