// Public library interface for rowmap
// The CLI and the debug-rows tool both drive these modules

pub mod config;
pub mod input;
pub mod layout;
pub mod model;
