// Type-description tree produced by `inference` and consumed by `codegen`. No serde_json::Value here.
use std::fmt;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Prim {
    String,
    Number,
    Boolean,
    Null,
    Unknown,                 // no evidence (empty arrays)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Ty {
    Primitive { prim: Prim },
    ArrayOf { element: Box<Ty> },
    Union { members: Vec<Ty> },          // ≥ 2 distinct members, first-seen order; array elements only
    ObjectOf { fields: IndexMap<String, Field> }, // source key order
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub ty: Ty,
    pub optional: bool,      // always false for single-sample inference
}

impl Prim {
    pub fn as_str(self) -> &'static str {
        match self {
            Prim::String => "string",
            Prim::Number => "number",
            Prim::Boolean => "boolean",
            Prim::Null => "null",
            Prim::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Prim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Ty {
    pub fn prim(prim: Prim) -> Self { Ty::Primitive { prim } }
    pub fn array_of(element: Ty) -> Self { Ty::ArrayOf { element: Box::new(element) } }

    /// Short human label, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Ty::Primitive { prim } => prim.as_str(),
            Ty::ArrayOf { .. } => "array",
            Ty::Union { .. } => "union",
            Ty::ObjectOf { .. } => "object",
        }
    }
}

impl Field {
    pub fn required(ty: Ty) -> Self {
        Self { ty, optional: false }
    }
}
