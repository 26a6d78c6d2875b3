#![allow(dead_code)]

use apigen_core::Client;
use rstest::fixture;
use tracing::info;

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

/// The raw IR of the pet store, as handed over by the parser.
#[fixture]
pub fn petstore() -> Client {
    init_tracing();
    match serde_json::from_str(include_str!("../fixtures/petstore.json")) {
        Ok(client) => client,
        Err(error) => {
            panic!("invalid petstore fixture: {error:?}");
        }
    }
}
