pub mod error;
pub mod response;
pub mod traits;

pub use error::{AppError, Result};
pub use response::ApiResponse;
