pub mod collector;
pub mod patterns;
pub mod sources;

pub use collector::{LookupCollector, LookupResult};
pub use patterns::{generate, InvestigationBundle, NumberForms};
pub use sources::{LookupSource, ProviderOutcome};
