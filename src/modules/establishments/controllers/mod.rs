mod quote_controller;

pub use quote_controller::{configure, get_quote};
