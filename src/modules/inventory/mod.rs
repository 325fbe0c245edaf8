use async_trait::async_trait;
use travel_kernel::Module;

pub const HOTEL: &str = "hotel";
pub const AIRPORT: &str = "airport";
pub const FLIGHTPATH: &str = "flightpath";

/// Travel inventory: hotels, airports and routes. Starts empty.
pub struct InventoryModule;

impl InventoryModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for InventoryModule {
    fn name(&self) -> &'static str {
        "inventory"
    }

    fn collections(&self) -> &'static [&'static str] {
        &[HOTEL, AIRPORT, FLIGHTPATH]
    }
}

pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(InventoryModule::new())
}
