//! The validation walk.
//!
//! Walks a normalized schema alongside an input, collecting one outcome per
//! checked value plus structural violations per object level. Nothing here
//! stops at a failed check; only the depth ceiling aborts.

use serde_json::{Map, Value};

use crate::diagnostics::{Diagnostic, Emitter};
use crate::error::{Error, Result};
use crate::foundation::ViolationKind;
use crate::foundation::value::present;
use crate::schema::{ObjectSchema, Schema, SchemaNode, child_path};

/// The result of checking one value, or of one container-level rule.
#[derive(Debug)]
pub(crate) struct Outcome<'a> {
    pub key: &'a str,
    pub path: String,
    pub value: &'a Value,
    pub failure: Option<ViolationKind>,
}

impl Outcome<'_> {
    pub(crate) const fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Everything one walk produced, in traversal order.
#[derive(Debug, Default)]
pub(crate) struct Collected<'a> {
    /// Field outcomes, passing and failing.
    pub results: Vec<Outcome<'a>>,
    /// Structural violations.
    pub errors: Vec<Outcome<'a>>,
}

pub(crate) struct Engine<'e> {
    emitter: Emitter<'e>,
    max_depth: usize,
}

impl<'e> Engine<'e> {
    pub(crate) const fn new(emitter: Emitter<'e>, max_depth: usize) -> Self {
        Self { emitter, max_depth }
    }

    pub(crate) fn run<'a>(&self, schema: &'a Schema, input: &'a Value) -> Result<Collected<'a>> {
        let mut collected = Collected::default();
        self.level(&schema.root, input, "", "", 0, &mut collected)?;
        Ok(collected)
    }

    fn level<'a>(
        &self,
        schema: &'a ObjectSchema,
        input: &'a Value,
        key: &'a str,
        path: &str,
        depth: usize,
        out: &mut Collected<'a>,
    ) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::DepthLimitExceeded {
                limit: self.max_depth,
                path: path.to_string(),
            });
        }

        // A non-object input has no own keys.
        let fields = input.as_object();

        let missing: Vec<String> = schema
            .required
            .iter()
            .filter(|name| !fields.is_some_and(|fields| fields.contains_key(name.as_str())))
            .cloned()
            .collect();
        if !missing.is_empty() {
            out.errors.push(Outcome {
                key,
                path: path.to_string(),
                value: input,
                failure: Some(ViolationKind::MissingRequiredKey(missing)),
            });
        }

        if !schema.additional_properties {
            let extra: Vec<String> = fields
                .into_iter()
                .flat_map(Map::keys)
                .filter(|name| !schema.properties.contains_key(name.as_str()))
                .cloned()
                .collect();
            if !extra.is_empty() {
                out.errors.push(Outcome {
                    key,
                    path: path.to_string(),
                    value: input,
                    failure: Some(ViolationKind::DisallowedAdditionalProperty(extra)),
                });
            }
        }

        for (name, child) in &schema.properties {
            let Some(value) = present(fields.and_then(|fields| fields.get(name))) else {
                continue;
            };
            let child_path = child_path(path, name);

            let Some(constraints) = child.constraints() else {
                self.emitter.emit(Diagnostic::UndeclaredProperty {
                    path: child_path.clone(),
                });
                out.results.push(Outcome {
                    key: name,
                    path: child_path,
                    value,
                    failure: None,
                });
                continue;
            };

            out.results.push(Outcome {
                key: name,
                path: child_path.clone(),
                value,
                failure: constraints.check(value).err(),
            });

            if let (Some(items), Value::Array(elements)) = (&constraints.items, value) {
                self.items(items, elements, name, &child_path, depth + 1, out)?;
            }

            if let SchemaNode::Object(nested) = child
                && value.is_object()
            {
                self.level(nested, value, name, &child_path, depth + 1, out)?;
            }
        }

        Ok(())
    }

    /// Applies an `items` schema's constraints to each element. Elements are
    /// checked one level deep; an object `items` schema is not walked.
    fn items<'a>(
        &self,
        items: &'a SchemaNode,
        elements: &'a [Value],
        key: &'a str,
        path: &str,
        depth: usize,
        out: &mut Collected<'a>,
    ) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::DepthLimitExceeded {
                limit: self.max_depth,
                path: path.to_string(),
            });
        }

        let Some(constraints) = items.constraints() else {
            self.emitter.emit(Diagnostic::UndeclaredProperty {
                path: format!("{path}[]"),
            });
            return Ok(());
        };

        for (index, element) in elements.iter().enumerate() {
            out.results.push(Outcome {
                key,
                path: format!("{path}[{index}]"),
                value: element,
                failure: constraints.check(element).err(),
            });
        }
        Ok(())
    }
}
