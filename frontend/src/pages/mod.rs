//! Workbench pages. Apart from the ingestion page (which lives under
//! `components`), these render static project data while the modelling
//! backend integration is pending.

mod collaboration;
mod dashboard;
mod deployment;
mod eda;
mod evaluation;
mod explainability;
mod feature_engineering;
mod model_management;
mod model_training;
mod preprocessing;

pub use collaboration::Collaboration;
pub use dashboard::Dashboard;
pub use deployment::Deployment;
pub use eda::Eda;
pub use evaluation::Evaluation;
pub use explainability::Explainability;
pub use feature_engineering::FeatureEngineering;
pub use model_management::ModelManagement;
pub use model_training::ModelTraining;
pub use preprocessing::Preprocessing;
