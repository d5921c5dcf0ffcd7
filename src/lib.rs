pub mod books;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod server;
pub mod utils;
