//! # ATP to OSM Import Review
//!
//! Client logic for the brand import review website. The site itself is
//! server-rendered; this crate carries the interaction layer that runs
//! against it.
//!
//!
//!
//! ## Flows
//!
//! - **Review**: every matched POI for a brand is rendered as a card. The
//!   reviewer validates cards one by one; once all cards are validated the
//!   next step unlocks. See [`review`].
//!
//! - **Session**: login answers with the redirect target in the response
//!   body, logout always lands back on the home page. See [`session`].
//!
//! - **Importation**: the page URL carries the brand's wikidata code
//!   (`Q` + digits). Confirming posts to the upload endpoint for that code
//!   and returns home. See [`import`].
//!
//! Rendering is a one-way projection. State lives here, visuals are pushed
//! through [`page::Surface`], and the browser location sits behind
//! [`page::Navigator`], so the whole layer runs without a real DOM.
//!
//!
//!
//! ## Driver
//!
//! The `atp2osm-review` binary drives the flows against a live instance.
//!
//! Validate three cards and watch the gate:
//! ```sh
//! RUST_LOG=debug cargo run -- review 1 2 3
//! ```
//!
//! Log in against a local instance:
//! ```sh
//! REVIEW_BASE_URL=http://127.0.0.1:5000 cargo run -- login
//! ```
//!
//! Confirm an importation for the page the browser would be on:
//! ```sh
//! cargo run -- import http://127.0.0.1:5000/brands/Q3117384
//! ```

pub mod config;
pub mod error;
pub mod import;
pub mod page;
pub mod review;
pub mod session;
pub mod utils;
