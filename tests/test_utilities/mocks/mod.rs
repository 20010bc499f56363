mod mock_manifest_reader;
mod mock_progress_reporter;
mod mock_registry;

pub use mock_manifest_reader::{FailingManifestReader, MockManifestReader};
pub use mock_progress_reporter::{MockProgressReporter, SharedMockProgressReporter};
pub use mock_registry::MockRegistry;
