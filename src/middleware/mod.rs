//! Middleware and extractors for handling cross-cutting concerns.
//!
//! - [`auth`]: JWT authentication extractor
//! - [`role`]: Role-gate predicate and routing middleware
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` extractor validates the JWT and extracts claims
//! 3. Role middleware checks that the caller holds the required role
//! 4. Handler executes if all checks pass

pub mod auth;
pub mod role;
