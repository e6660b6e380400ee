//! HTTP REST API interfaces
//!
//! - `common`: error mapping, JSON envelope, validated extractor
//! - `middleware`: JWT authentication and permission checks
//! - `modules`: one handler module per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

pub use router::{create_api_router, ApiDoc};
pub use state::ApiState;
