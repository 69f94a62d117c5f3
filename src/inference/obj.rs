use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::classify;
use crate::ir::{Field, Ty};

pub(super) fn classify_object(map: &Map<String, Value>) -> Ty {
    // one sample: presence can't be compared, so nothing is optional
    let fields: IndexMap<String, Field> = map
        .iter()
        .map(|(k, v)| (k.clone(), Field::required(classify(v))))
        .collect();
    Ty::ObjectOf { fields }
}
