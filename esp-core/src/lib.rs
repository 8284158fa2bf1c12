//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits und Pure Logic für die Zeitschaltuhr.

#![no_std]

pub mod heartbeat;
pub mod scheduler;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use heartbeat::Heartbeat;
pub use scheduler::DailyScheduler;
pub use traits::{SwitchError, SwitchWriter};
pub use types::{ScheduleEntry, SchedulerError, SwitchCommand};
