//! # Hubsource Engine
//!
//! The Hubsource Engine turns Content Hub content-type schemas into
//! host-renderable resource types, and resolves host selections into entry
//! records and delivery URLs.
//!
//! ## Key Features
//!
//! - **Form Projection**: Generates the query-input form for each content
//!   type, including pagination, ordering, search, and per-field filters
//! - **URL Synthesis**: Builds deterministic delivery URLs carrying the
//!   tenant's encrypted credentials
//! - **Entry Resolution**: Resolves an id or search text against fetched
//!   entries with a fixed precedence
//! - **Fail-Soft Fetching**: Remote failures after initialization degrade to
//!   empty lists with a logged diagnostic, never a crashed render cycle
//!
//! ## Usage
//!
//! ```ignore
//! use hubsource_engine::ContentHubAdapter;
//! use hubsource_types::{AdapterSettings, EntrySelection};
//!
//! async fn list(settings: &AdapterSettings) -> anyhow::Result<()> {
//!     let adapter = ContentHubAdapter::connect(settings).await?;
//!     for resource_type in adapter.resource_types().await {
//!         let entries = adapter
//!             .entries_by_resource_type(&resource_type.id, &EntrySelection::default())
//!             .await;
//!         println!("{}: {} entries", resource_type.display_name, entries.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! The engine is organized into several key modules:
//!
//! - **`project`**: Schema-to-form projection
//! - **`encode`**: Deterministic query-parameter and URL synthesis
//! - **`resolve`**: Entry resolution precedence
//! - **`source`**: The content-source seam over the remote API
//! - **`adapter`**: The host-facing adapter surface
//! - **`manifest`**: The registration payload the host consumes

pub mod adapter;
pub mod encode;
pub mod manifest;
pub mod project;
pub mod resolve;
pub mod source;

// Re-export commonly used items for convenience
pub use adapter::ContentHubAdapter;
pub use encode::request_url;
pub use manifest::{ADAPTER_ID, ADAPTER_NAME, AdapterManifest, manifest};
pub use project::project_resource_type;
pub use resolve::resolve_entries;
pub use source::ContentSource;
