// Shared field rules
pub mod validation;

// Categories and the entities filed under them
pub mod categories;
pub mod resources;
pub mod vehicles;

// Requests filed by firefighters
pub mod resource_requests;

pub use categories::{Category, CategoryService, CategoryStore, ResourceTypeService, VehicleTypeService};
pub use resource_requests::ResourceRequestService;
pub use resources::ResourceService;
pub use vehicles::VehicleService;
