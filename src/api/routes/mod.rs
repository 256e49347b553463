//! API Route Handlers

pub mod admin;
pub mod content;
pub mod health;
pub mod leads;
