// Movie attributes and the validated feature record
pub mod movie;

// Enumerated languages and genres offered to the operator
pub mod catalog;

// Prediction outcome types
pub mod prediction;

// Input validation
pub mod validation;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
