pub mod context;
pub mod predictor;

pub use context::AppContext;
pub use predictor::{HitPredictor, RequestError};
