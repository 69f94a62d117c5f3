use indexmap::IndexMap;
use serde_json::Value;

use super::{classify, TypeKey};
use crate::ir::{Prim, Ty};

pub(super) fn classify_array(xs: &[Value]) -> Ty {
    if xs.is_empty() {
        return Ty::array_of(Ty::prim(Prim::Unknown));
    }

    let mut distinct = dedup_by_key(xs.iter().map(classify));
    tracing::trace!(len = xs.len(), distinct = distinct.len(), "classified array");

    let element = if distinct.len() == 1 {
        distinct.remove(0)
    } else {
        Ty::Union { members: distinct }
    };
    Ty::array_of(element)
}

/// First-seen deduplication by [`TypeKey`]; later duplicates are dropped.
pub(super) fn dedup_by_key<I>(types: I) -> Vec<Ty>
where
    I: IntoIterator<Item = Ty>,
{
    let mut seen: IndexMap<TypeKey, Ty> = IndexMap::new();
    for ty in types {
        seen.entry(TypeKey::of(&ty)).or_insert(ty);
    }
    seen.into_values().collect()
}
