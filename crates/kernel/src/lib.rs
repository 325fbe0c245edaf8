pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Module, SeedRecord};
pub use registry::{BootstrapReport, ModuleRegistry};
