use lms_inventory::core::domain::Configuration;
use lms_inventory::core::library::LibraryResult;
use lms_inventory::server;
use lms_inventory::utils::logs::setup_tracing;

// The listening address and the books file are fixed, see Configuration::default.

#[tokio::main]
async fn main() -> LibraryResult<()> {
    setup_tracing();
    server::serve(Configuration::default()).await
}
