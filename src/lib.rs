//! Ground Operations Work Orders Library
//!
//! This crate provides the work order command language used by ground-operations
//! staff: parsing and validating strings such as `CHK15|BAG25|CLEAN10|PBB90`,
//! and preparing command submissions for the backend.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod commands;
pub mod config;
pub mod errors;
pub mod models;
pub mod services;

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub use models::work_order_command::{
    CommandKind, CommandType, CommandUnit, ParsedWorkOrder, ValidationSummary, WorkOrderCommand,
    VALID_PBB_ANGLES,
};
pub use services::work_order_parser::WorkOrderParser;

// Common response wrappers
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ResponseMeta>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseMeta {
    pub timestamp: String,
}

impl ResponseMeta {
    fn capture() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: None,
            meta: Some(ResponseMeta::capture()),
        }
    }
}

impl ApiResponse<ParsedWorkOrder> {
    /// Wraps a parse result the way the `/work-orders/parse` endpoint does:
    /// the request itself succeeds even when the command is invalid.
    pub fn parsed(parsed: ParsedWorkOrder) -> Self {
        Self::success(parsed)
    }
}
