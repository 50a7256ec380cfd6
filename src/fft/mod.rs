pub mod pattern;
pub mod transform;
pub mod message;
pub mod scenario;
