//! Chain Glossary Server
//!
//! Main entry point for the glossary server

use chain_glossary::GlossaryBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	GlossaryBuilder::new().start_server().await
}
