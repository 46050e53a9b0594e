use sdkgen_codegen::{
    EmitError,
    ast::{Expression, ObjectProperty, Operand},
};
use tracing::warn;

use super::{Emitter, Result, unsupported_marker};
use crate::naming::is_identifier;

impl Emitter {
    pub(super) fn expression(&self, expr: &Expression) -> Result<String> {
        match expr {
            Expression::Literal(lit) => Ok(lit.raw.clone()),
            Expression::Identifier(id) => {
                if id.name.is_empty() {
                    return Err(EmitError::malformed(expr.kind(), "name"));
                }
                Ok(id.name.clone())
            }
            Expression::Member(member) => {
                if member.property.is_empty() {
                    return Err(EmitError::malformed(expr.kind(), "property"));
                }
                let object = self.wrapped(&member.object)?;
                if member.computed {
                    Ok(format!("{}[{}]", object, member.property))
                } else {
                    Ok(format!("{}.{}", object, member.property))
                }
            }
            Expression::Call(call) => {
                let callee = call
                    .callee
                    .as_deref()
                    .ok_or_else(|| EmitError::malformed(expr.kind(), "callee"))?;
                Ok(format!(
                    "{}({})",
                    self.wrapped(callee)?,
                    self.operands(&call.arguments)?
                ))
            }
            Expression::New(new) => {
                let callee = new
                    .callee
                    .as_deref()
                    .ok_or_else(|| EmitError::malformed(expr.kind(), "callee"))?;
                Ok(format!(
                    "new {}({})",
                    self.wrapped(callee)?,
                    self.operands(&new.arguments)?
                ))
            }
            Expression::Await(node) => Ok(format!("await {}", self.wrapped(&node.argument)?)),
            Expression::Object(object) => {
                if object.properties.is_empty() {
                    return Ok("{}".to_string());
                }
                let props = object
                    .properties
                    .iter()
                    .map(|p| self.object_property(p))
                    .collect::<Result<Vec<_>>>()?;
                Ok(format!("{{ {} }}", props.join(", ")))
            }
            Expression::Array(array) => Ok(format!("[{}]", self.operands(&array.elements)?)),
            Expression::Binary(binary) => Ok(format!(
                "{} {} {}",
                self.nested_operand(&binary.left)?,
                binary.operator,
                self.nested_operand(&binary.right)?
            )),
            Expression::Conditional(cond) => Ok(format!(
                "{} ? {} : {}",
                self.nested(&cond.test)?,
                self.nested(&cond.consequent)?,
                self.nested(&cond.alternate)?
            )),
            Expression::Unsupported(node) => {
                warn!(kind = %node.kind, "unsupported expression kind");
                Ok(format!("/* {} */", unsupported_marker(&node.kind)))
            }
        }
    }

    /// Render either side of the string-or-node union.
    pub(super) fn operand(&self, operand: &Operand) -> Result<String> {
        match operand {
            Operand::Raw(raw) => Ok(raw.clone()),
            Operand::Node(expr) => self.expression(expr),
        }
    }

    fn operands(&self, operands: &[Operand]) -> Result<String> {
        let rendered = operands
            .iter()
            .map(|o| self.operand(o))
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join(", "))
    }

    /// Operand of a binary or conditional expression.
    fn nested_operand(&self, operand: &Operand) -> Result<String> {
        match operand {
            Operand::Raw(raw) => Ok(raw.clone()),
            Operand::Node(expr) => self.nested(expr),
        }
    }

    fn nested(&self, expr: &Expression) -> Result<String> {
        let rendered = self.expression(expr)?;
        match expr {
            Expression::Binary(_) | Expression::Conditional(_) => Ok(format!("({})", rendered)),
            _ => Ok(rendered),
        }
    }

    /// Object of a member access or callee of a call.
    fn wrapped(&self, expr: &Expression) -> Result<String> {
        let rendered = self.expression(expr)?;
        match expr {
            Expression::Binary(_)
            | Expression::Conditional(_)
            | Expression::Await(_)
            | Expression::Object(_) => Ok(format!("({})", rendered)),
            _ => Ok(rendered),
        }
    }

    fn object_property(&self, property: &ObjectProperty) -> Result<String> {
        if property.key.is_empty() {
            return Err(EmitError::malformed("ObjectProperty", "key"));
        }
        let shorthand = match &property.value {
            Operand::Raw(raw) => raw == &property.key,
            Operand::Node(Expression::Identifier(id)) => id.name == property.key,
            Operand::Node(_) => false,
        };
        if shorthand && is_identifier(&property.key) {
            return Ok(property.key.clone());
        }
        let key = if is_identifier(&property.key) {
            property.key.clone()
        } else {
            sdkgen_codegen::ast::quote(&property.key)
        };
        Ok(format!("{}: {}", key, self.operand(&property.value)?))
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::ast::{
        ArrayExpression, CallExpression, NewExpression, ObjectExpression, UnsupportedNode,
    };

    use super::*;

    fn emit(expr: &Expression) -> String {
        Emitter::default().emit_expression(expr).unwrap()
    }

    #[test]
    fn test_member_call() {
        let expr = Expression::this()
            .member("request")
            .call([Operand::from(Expression::string("getBalance")), "params".into()]);
        assert_eq!(emit(&expr), "this.request(\"getBalance\", params)");
    }

    #[test]
    fn test_computed_member() {
        let expr = Expression::ident("headers").index("\"x-api-key\"");
        assert_eq!(emit(&expr), "headers[\"x-api-key\"]");
    }

    #[test]
    fn test_object_shorthand() {
        let object = ObjectExpression::new()
            .property("address", Expression::ident("address"))
            .property("limit", "limit")
            .property("page", "1")
            .property("content-type", Expression::string("json"));
        assert_eq!(
            emit(&object.into()),
            "{ address, limit, page: 1, \"content-type\": \"json\" }"
        );
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(emit(&ObjectExpression::new().into()), "{}");
    }

    #[test]
    fn test_nested_binary_is_parenthesised() {
        let inner = Expression::binary("a", "+", "b");
        let outer = Expression::binary(inner, "*", "c");
        assert_eq!(emit(&outer), "(a + b) * c");
    }

    #[test]
    fn test_conditional() {
        let expr = Expression::conditional(
            Expression::ident("ok"),
            Expression::raw("1"),
            Expression::conditional(
                Expression::ident("x"),
                Expression::raw("2"),
                Expression::raw("3"),
            ),
        );
        assert_eq!(emit(&expr), "ok ? 1 : (x ? 2 : 3)");
    }

    #[test]
    fn test_new_and_await() {
        let expr = Expression::New(
            NewExpression::new(Expression::ident("Error")).arg(Expression::string("boom")),
        );
        assert_eq!(emit(&expr), "new Error(\"boom\")");
        let awaited = Expression::ident("fetch")
            .call([Operand::from("url")])
            .awaited();
        assert_eq!(emit(&awaited), "await fetch(url)");
    }

    #[test]
    fn test_array() {
        let expr = Expression::Array(ArrayExpression {
            elements: vec!["1".into(), Expression::ident("two").into()],
        });
        assert_eq!(emit(&expr), "[1, two]");
    }

    #[test]
    fn test_unsupported_expression_is_inline_comment() {
        let expr = Expression::ident("f").call([Operand::Node(Expression::Unsupported(
            UnsupportedNode::new("ArrowFunction"),
        ))]);
        assert_eq!(emit(&expr), "f(/* unsupported node: ArrowFunction */)");
    }

    #[test]
    fn test_call_without_callee_is_malformed() {
        let expr = Expression::Call(CallExpression::default());
        assert_eq!(
            Emitter::default().emit_expression(&expr),
            Err(EmitError::malformed("CallExpression", "callee"))
        );
    }

    #[test]
    fn test_empty_identifier_is_malformed() {
        let err = Emitter::default()
            .emit_expression(&Expression::ident(""))
            .unwrap_err();
        assert_eq!(err, EmitError::malformed("Identifier", "name"));
    }

    #[test]
    fn test_member_without_property_is_malformed() {
        let err = Emitter::default()
            .emit_expression(&Expression::this().member(""))
            .unwrap_err();
        assert_eq!(err, EmitError::malformed("MemberExpression", "property"));
    }
}
