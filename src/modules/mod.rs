pub mod bookings;
pub mod inventory;
pub mod users;

use travel_kernel::ModuleRegistry;

/// Register every collection-owning module; order here is creation order
pub fn register_all(registry: &mut ModuleRegistry) -> anyhow::Result<()> {
    registry.register(users::create_module())?;
    registry.register(inventory::create_module())?;
    registry.register(bookings::create_module())?;
    Ok(())
}
