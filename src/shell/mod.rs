// Composition root for the high score service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the cache and wire it into the use case handlers.
// - Expose the HTTP router to the binary in main.rs.

pub mod config;
pub mod http;
pub mod state;
