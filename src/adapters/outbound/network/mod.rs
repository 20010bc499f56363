pub mod caching_registry;
pub mod maven_client;

pub use caching_registry::CachingRegistry;
pub use maven_client::MavenCentralClient;
