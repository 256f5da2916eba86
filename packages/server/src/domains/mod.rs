// Business domains
pub mod media_bridge;
