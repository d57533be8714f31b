pub mod crud_service;
pub mod health_service;

pub use crud_service::CrudServiceImpl;
pub use health_service::HealthServiceImpl;
