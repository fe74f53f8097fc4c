//! # Parse Server Client SDK
//!
//! A thin async client for the Parse Server REST API: object classes
//! (create/read/update/delete/query) and file storage (upload/delete).
//!
//! Every method maps to exactly one HTTP endpoint. The client attaches the
//! `X-Parse-Application-Id` and `X-Parse-Master-Key` credential headers,
//! issues the request, and decodes the JSON response into an open
//! key/value mapping - field semantics are defined by the caller and the
//! server, never by this crate.
//!
//! ## Example
//!
//! ```rust,ignore
//! use parse_client::{ParseClient, Config};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> parse_client::Result<()> {
//!     let client = ParseClient::with_server(
//!         "http://localhost:1337",
//!         "my-app-id",
//!         "my-master-key",
//!     )?;
//!
//!     // Create an object
//!     let mut fields = serde_json::Map::new();
//!     fields.insert("score".into(), json!(1337));
//!     let created = client.create_object("Player", &fields).await?;
//!     let id = created["objectId"].as_str().unwrap();
//!
//!     // Fetch it back
//!     let player = client.get_object("Player", id).await?;
//!     println!("score: {}", player["score"]);
//!
//!     // Upload a file and link it to the object
//!     let uploaded = client.upload_file(b"hello".to_vec(), None).await?;
//!     let file_ref = ParseClient::file_reference(
//!         uploaded["name"].as_str().unwrap(),
//!         uploaded["url"].as_str().unwrap(),
//!     );
//!     let mut update = serde_json::Map::new();
//!     update.insert("avatar".into(), serde_json::to_value(file_ref)?);
//!     client.update_object("Player", id, &update).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::ParseClient;
pub use config::Config;
pub use error::{ClientError, Result};
pub use types::*;
