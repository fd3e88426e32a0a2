//! Session establishment and persistence

pub mod orchestrator;
pub mod store;

pub use orchestrator::{SessionOrchestrator, SessionStage};
pub use store::{ClientSessionRecord, FileSessionStore, MemorySessionStore, SessionStore};
