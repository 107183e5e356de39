pub mod fixture;
pub mod tracing;

pub use fixture::{LogFixture, fixtures_dir};
pub use self::tracing::{CapturedEvent, EventCapture};
