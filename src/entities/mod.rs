pub mod firefighter;
pub mod resource;
pub mod resource_request;
pub mod resource_type;
pub mod vehicle;
pub mod vehicle_type;
