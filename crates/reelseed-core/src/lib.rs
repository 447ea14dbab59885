pub mod catalog;
pub mod error;
pub mod models;
pub mod render;
pub mod seeder;
pub mod settings;

pub use catalog::Catalog;
pub use error::SeedError;
pub use models::MediaRecord;
pub use settings::Settings;
