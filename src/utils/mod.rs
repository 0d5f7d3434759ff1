pub mod csv;
pub mod parameter_error_handler;
pub mod sql;
pub mod time;
pub mod validate;

pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::{contains_pattern, escape_like_pattern};
