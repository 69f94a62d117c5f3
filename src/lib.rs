//! Infer `export interface` declarations from a sample JSON document.
//!
//! ```
//! use serde_json::json;
//!
//! let src = json_iface::generate(&json!({"id": 1, "owner": {"name": "x"}}), "repo").unwrap();
//! assert_eq!(src, "export interface Repo {\n  id: number;\n  owner: Interface1;\n}\n\n\
//!                  export interface Interface1 {\n  name: string;\n}");
//! ```
pub mod cli;
pub mod codegen;
pub mod error;
pub mod inference;
pub mod ir;
pub mod jq_exec;
pub mod naming;

use serde_json::Value;

pub use codegen::{Codegen, Declaration};
pub use error::GenerateError;
pub use ir::{Field, Prim, Ty};

/// Classify `value` and render it as declarations rooted at `root_name`.
///
/// Fails with [`GenerateError::InvalidRootShape`] unless `value` is an object;
/// nothing is produced in that case.
pub fn generate(value: &Value, root_name: &str) -> Result<String, GenerateError> {
    let ty = inference::classify(value);
    let declarations = codegen::synthesize(&ty, root_name)?;
    Ok(codegen::join_declarations(&declarations))
}
