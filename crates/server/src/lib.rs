pub mod routes;
pub mod startup;
pub mod state;
pub mod gate;
pub mod extract;
pub mod errors;
pub mod openapi;

pub use startup::run;
