//! Render a [`Ty`] tree as `export interface` declarations.
//!
//! The root object becomes the first declaration. Every nested object met
//! while rendering (field type, array element or union member) is given the
//! next `Interface<N>` name, rendered as its own declaration, and referenced
//! by that name. The root always comes first; after it, a nested object's
//! declaration is appended once its own nested objects have been appended,
//! so `{a: {b: {}}}` yields `Root, Interface2, Interface1`.
use indexmap::IndexMap;

use crate::error::GenerateError;
use crate::ir::{Field, Ty};
use crate::naming;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub text: String,
}

/// Per-call synthesis context: the synthetic counter and the declarations
/// emitted so far. Both are cleared at the start of every [`Codegen::emit`].
#[derive(Debug, Default)]
pub struct Codegen {
    counter: u32,
    declarations: Vec<Declaration>,
}

impl Codegen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.counter = 0;
        self.declarations.clear();
    }

    /// Render `root` under `root_name` (normalized), replacing anything a
    /// previous call left behind. On error nothing is kept.
    pub fn emit(&mut self, root: &Ty, root_name: &str) -> Result<(), GenerateError> {
        self.reset();
        let Ty::ObjectOf { fields } = root else {
            return Err(GenerateError::InvalidRootShape { found: root.kind_name() });
        };
        let name = naming::declaration_name(root_name);
        let text = self.render_object(&name, fields);
        self.declarations.insert(0, Declaration { name, text });
        Ok(())
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn into_declarations(self) -> Vec<Declaration> {
        self.declarations
    }

    /// All declarations separated by one blank line.
    pub fn into_string(self) -> String {
        join_declarations(&self.declarations)
    }

    fn render_object(&mut self, name: &str, fields: &IndexMap<String, Field>) -> String {
        let mut text = format!("export interface {name} {{\n");
        for (key, field) in fields {
            let ty = self.type_string(&field.ty);
            let optional = if field.optional { "?" } else { "" };
            text.push_str(&format!("  {}{optional}: {ty};\n", naming::property_key(key)));
        }
        text.push('}');

        tracing::debug!(%name, fields = fields.len(), "rendered declaration");
        text
    }

    fn type_string(&mut self, ty: &Ty) -> String {
        match ty {
            Ty::Primitive { prim } => prim.as_str().to_string(),
            Ty::ArrayOf { element } => match element.as_ref() {
                Ty::Union { members } => format!("({})[]", self.union_string(members)),
                other => format!("{}[]", self.type_string(other)),
            },
            Ty::Union { members } => self.union_string(members),
            Ty::ObjectOf { fields } => {
                self.counter += 1;
                let name = naming::synthetic_name(self.counter);
                let text = self.render_object(&name, fields);
                self.declarations.push(Declaration { name: name.clone(), text });
                name
            }
        }
    }

    fn union_string(&mut self, members: &[Ty]) -> String {
        members
            .iter()
            .map(|m| self.type_string(m))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Fresh context per call; the declaration list for `root`.
pub fn synthesize(root: &Ty, root_name: &str) -> Result<Vec<Declaration>, GenerateError> {
    let mut cg = Codegen::new();
    cg.emit(root, root_name)?;
    Ok(cg.into_declarations())
}

pub fn join_declarations(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|d| d.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}
