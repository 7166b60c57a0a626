pub mod config;
pub mod error;
pub mod host;
pub mod scroll;
pub mod trigger;

pub use config::{AppConfig, EasingKind, ScrollBehavior, ScrollConfig};
pub use error::{Error, Result};
pub use host::{Rect, UnloadSignal, Viewport};
pub use scroll::{ScrollEngine, ScrollOptions, ScrollTarget};
pub use trigger::{SharedTriggerRegistry, TriggerRegistry};
