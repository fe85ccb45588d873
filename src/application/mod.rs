pub mod orchestrator;

pub use orchestrator::{RunPlan, RunReport, SniperOrchestrator};
