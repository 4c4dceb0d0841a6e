pub mod cors;
pub mod error_handler;
pub mod request_id;

pub use cors::cors;
pub use error_handler::{path_config, query_config};
pub use request_id::{RequestId, RequestIdValue, REQUEST_ID_HEADER};
