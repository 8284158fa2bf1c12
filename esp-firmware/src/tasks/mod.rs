// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels (Taster → Scheduler).

pub mod button;
pub mod heartbeat;
pub mod schedule;

// Re-export Tasks für einfachen Import
pub use button::button_task;
pub use heartbeat::heartbeat_task;
pub use schedule::schedule_task;
