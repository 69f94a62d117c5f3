//! Single-sample type inference.
//!
//! Walk one JSON document and build a [`Ty`] tree: primitives map to their
//! kind, objects keep their key order, and arrays collapse their element
//! types by structural key into either one element type or a union.
//!
//! Design goals:
//! - Total: every `serde_json::Value` classifies, nothing here can fail.
//! - No global state; the tree is built by plain structural recursion.
//! - Array merging is first-seen and shallow for objects (field names only).
pub mod arr;
pub mod key;
pub mod obj;

use serde_json::Value;

use crate::ir::{Prim, Ty};

pub use key::TypeKey;

// ------------------------------ Classify --------------------------------- //

pub fn classify(v: &Value) -> Ty {
    match v {
        Value::Null => Ty::prim(Prim::Null),
        Value::Bool(_) => Ty::prim(Prim::Boolean),
        Value::Number(_) => Ty::prim(Prim::Number),
        Value::String(_) => Ty::prim(Prim::String),
        Value::Array(xs) => arr::classify_array(xs),
        Value::Object(m) => obj::classify_object(m),
    }
}

// ------------------------------- Tests ------------------------------------ //
