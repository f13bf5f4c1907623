pub mod controllers;
pub mod dto;
pub mod error;
pub mod server;

pub use error::AppError;
pub use server::AppState;
