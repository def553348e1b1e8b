pub mod error;
pub mod lookup;
pub mod numeric;
pub mod response;
pub mod traits;
pub mod validation;

pub use error::{AppError, Result};
pub use response::ApiResponse;
