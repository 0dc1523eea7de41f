pub mod traits;
pub mod ga;
pub mod maze;
pub mod manager;

pub use ga::GaConfig;
pub use manager::{AppConfig, ConfigManager};
pub use maze::MazeConfig;
pub use traits::ConfigSection;
