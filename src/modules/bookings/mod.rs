use async_trait::async_trait;
use travel_kernel::Module;

pub const COLLECTION: &str = "bookings";

pub struct BookingsModule;

impl BookingsModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for BookingsModule {
    fn name(&self) -> &'static str {
        "bookings"
    }

    fn collections(&self) -> &'static [&'static str] {
        &[COLLECTION]
    }
}

pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BookingsModule::new())
}
