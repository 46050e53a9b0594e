use sdkgen_codegen::{EmitError, LineBuilder, ast::Statement};
use tracing::warn;

use super::{Emitter, Result, unsupported_marker};

impl Emitter {
    pub(super) fn statements(&self, out: &mut LineBuilder, statements: &[Statement]) -> Result<()> {
        for statement in statements {
            self.statement(out, statement)?;
        }
        Ok(())
    }

    fn statement(&self, out: &mut LineBuilder, statement: &Statement) -> Result<()> {
        let semi = self.semi();
        match statement {
            Statement::Variable(var) => {
                if var.name.is_empty() {
                    return Err(EmitError::malformed(statement.kind(), "name"));
                }
                let mut text = format!("{} {}", var.binding.keyword(), var.name);
                if let Some(ty) = &var.type_annotation {
                    text.push_str(": ");
                    text.push_str(ty);
                }
                if let Some(init) = &var.init {
                    text.push_str(" = ");
                    text.push_str(&self.expression(init)?);
                }
                out.line(format!("{}{}", text, semi));
            }
            Statement::Return(ret) => match &ret.argument {
                Some(arg) => {
                    out.line(format!("return {}{}", self.expression(arg)?, semi));
                }
                None => {
                    out.line(format!("return{}", semi));
                }
            },
            Statement::Throw(throw) => {
                out.line(format!("throw {}{}", self.expression(&throw.argument)?, semi));
            }
            Statement::If(node) => {
                out.line(format!("if ({}) {{", self.expression(&node.test)?));
                out.try_block(|out| self.statements(out, &node.consequent))?;
                if let Some(alternate) = &node.alternate {
                    out.line("} else {");
                    out.try_block(|out| self.statements(out, alternate))?;
                }
                out.line("}");
            }
            Statement::TryCatch(node) => {
                if node.handler.is_none() && node.finalizer.is_none() {
                    return Err(EmitError::malformed(statement.kind(), "handler"));
                }
                out.line("try {");
                out.try_block(|out| self.statements(out, &node.block))?;
                if let Some(handler) = &node.handler {
                    match &handler.param {
                        Some(param) => out.line(format!("}} catch ({}) {{", param)),
                        None => out.line("} catch {"),
                    };
                    out.try_block(|out| self.statements(out, &handler.body))?;
                }
                if let Some(finalizer) = &node.finalizer {
                    out.line("} finally {");
                    out.try_block(|out| self.statements(out, finalizer))?;
                }
                out.line("}");
            }
            Statement::Expression(node) => {
                out.line(format!("{}{}", self.expression(&node.expression)?, semi));
            }
            Statement::Unsupported(node) => {
                warn!(kind = %node.kind, "unsupported statement kind");
                out.comment(&unsupported_marker(&node.kind), false);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::ast::{
        BindingKind, CatchClause, Expression, IfStatement, TryCatchStatement, UnsupportedNode,
        VariableDeclaration,
    };

    use super::*;
    use crate::EmitOptions;

    fn emit(statements: &[Statement]) -> String {
        Emitter::default().emit_statements(statements).unwrap()
    }

    #[test]
    fn test_return_then_unsupported() {
        let out = emit(&[
            Statement::ret(Expression::ident("balance")),
            Statement::Unsupported(UnsupportedNode::new("ForOfStatement")),
        ]);
        assert_eq!(out, "return balance;\n// unsupported node: ForOfStatement\n");
    }

    #[test]
    fn test_if_else() {
        let out = emit(&[Statement::If(IfStatement {
            test: Expression::binary("retries", ">", "0"),
            consequent: vec![Statement::ret(Expression::raw("true"))],
            alternate: Some(vec![Statement::ret(Expression::raw("false"))]),
        })]);
        assert_eq!(
            out,
            "if (retries > 0) {\n  return true;\n} else {\n  return false;\n}\n"
        );
    }

    #[test]
    fn test_try_catch_finally() {
        let out = emit(&[Statement::TryCatch(TryCatchStatement {
            block: vec![Statement::expr(Expression::ident("run").call(Vec::new()))],
            handler: Some(CatchClause {
                param: Some("error".into()),
                body: vec![Statement::throw(Expression::ident("error"))],
            }),
            finalizer: Some(vec![Statement::expr(
                Expression::ident("done").call(Vec::new()),
            )]),
        })]);
        assert_eq!(
            out,
            "try {\n  run();\n} catch (error) {\n  throw error;\n} finally {\n  done();\n}\n"
        );
    }

    #[test]
    fn test_try_without_handler_or_finalizer_is_malformed() {
        let err = Emitter::default()
            .emit_statements(&[Statement::TryCatch(TryCatchStatement {
                block: vec![Statement::expr(Expression::ident("run").call(Vec::new()))],
                handler: None,
                finalizer: None,
            })])
            .unwrap_err();
        assert_eq!(err, EmitError::malformed("TryCatchStatement", "handler"));
    }

    #[test]
    fn test_variable_with_type() {
        let out = emit(&[Statement::Variable(VariableDeclaration {
            binding: BindingKind::Let,
            name: "count".into(),
            type_annotation: Some("number".into()),
            init: Some(Expression::raw("0")),
        })]);
        assert_eq!(out, "let count: number = 0;\n");
    }

    #[test]
    fn test_variable_without_name_is_malformed() {
        let err = Emitter::default()
            .emit_statements(&[Statement::constant("", Expression::raw("1"))])
            .unwrap_err();
        assert_eq!(err, EmitError::malformed("VariableDeclaration", "name"));
    }

    #[test]
    fn test_without_semicolons() {
        let emitter = Emitter::new(EmitOptions {
            semicolons: false,
            ..Default::default()
        });
        let out = emitter
            .emit_statements(&[Statement::assign(
                Expression::this().member("name"),
                Expression::string("SdkError"),
            )])
            .unwrap();
        assert_eq!(out, "this.name = \"SdkError\"\n");
    }

    #[test]
    fn test_nested_unsupported_keeps_indentation() {
        let out = emit(&[Statement::If(IfStatement {
            test: Expression::ident("ready"),
            consequent: vec![Statement::Unsupported(UnsupportedNode::new("WhileStatement"))],
            alternate: None,
        })]);
        assert_eq!(out, "if (ready) {\n  // unsupported node: WhileStatement\n}\n");
    }
}
