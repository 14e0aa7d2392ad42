//! Domain types for restaurants, cuisines and reviews, their input
//! validation, and the store key namespace they live under.

pub mod errors;
pub mod keys;
pub mod restaurant;
pub mod review;
pub mod details;
mod fields;
