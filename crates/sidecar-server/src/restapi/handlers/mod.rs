//! REST API handlers

pub mod actions;
pub mod health;
