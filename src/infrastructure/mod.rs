pub mod ml;
pub mod observability;
pub mod options_loader;

pub use ml::load_classifier;
pub use options_loader::OptionsLoader;
