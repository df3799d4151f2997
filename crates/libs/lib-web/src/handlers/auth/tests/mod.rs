//! # Auth Handler Tests
//!
//! Test suite for the registration and login handlers, driven through the
//! real router with an in-memory database.

mod login;

use crate::test_support::*;
use axum::http::StatusCode;
use serde_json::json;
