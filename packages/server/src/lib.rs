// Post media bridge - API Core
//
// Receives LINE webhook callbacks, pulls media links out of shared posts and
// replies with the images or video. Request handling is stateless; the only
// shared values are the immutable dependencies built at startup.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
