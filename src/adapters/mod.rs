pub mod api_errors;
pub mod checkout;
pub mod paylike;
pub mod paylike_client;
pub mod webhook;
