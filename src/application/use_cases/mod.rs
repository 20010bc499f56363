pub mod score_dependencies;

pub use score_dependencies::ScoreDependenciesUseCase;
