//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the stored row
//! - An insert value carrying validated fields and applied defaults

pub mod practice;
