//! Shared contracts between the browser client and the backend.
//!
//! - `domain::a001_bom_code`: positional BOM code model (schemas, selections, codec)
//! - `domain::a002_manual_session`: transient state of the manual generation workflow
//! - `usecases`: request/response DTOs of the generation endpoints

pub mod domain;
pub mod enums;
pub mod usecases;
