use crate::ir::{Prim, Ty};

/// Structural identity used to collapse array element types.
///
/// Objects are keyed by their sorted field names only; field types are
/// ignored. Two objects with the same key set but different value types
/// therefore collapse to the first one seen. This is deliberate, and
/// comparing full structure here would change output for mixed-shape arrays.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKey {
    Prim(Prim),
    Array(Box<TypeKey>),
    Union(Vec<TypeKey>),
    Object(Vec<String>),     // sorted field names
}

impl TypeKey {
    pub fn of(ty: &Ty) -> Self {
        match ty {
            Ty::Primitive { prim } => TypeKey::Prim(*prim),
            Ty::ArrayOf { element } => TypeKey::Array(Box::new(TypeKey::of(element))),
            Ty::Union { members } => TypeKey::Union(members.iter().map(TypeKey::of).collect()),
            Ty::ObjectOf { fields } => {
                let mut names: Vec<String> = fields.keys().cloned().collect();
                names.sort_unstable();
                TypeKey::Object(names)
            }
        }
    }
}
