use sdkgen_codegen::{
    EmitError, LineBuilder,
    ast::{
        ClassDeclaration, ConstructorDeclaration, Declaration, EnumDeclaration,
        FunctionDeclaration, ImportDeclaration, InterfaceDeclaration, MethodDeclaration,
        Parameter, PropertyDeclaration, quote,
    },
};
use tracing::warn;

use super::{Emitter, Result, unsupported_marker};

fn export(exported: bool) -> &'static str {
    if exported { "export " } else { "" }
}

fn require_name(kind: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        Err(EmitError::malformed(kind, "name"))
    } else {
        Ok(())
    }
}

impl Emitter {
    pub(super) fn declaration(&self, out: &mut LineBuilder, declaration: &Declaration) -> Result<()> {
        match declaration {
            Declaration::Import(node) => self.import(out, node),
            Declaration::Class(node) => self.class(out, node),
            Declaration::Interface(node) => self.interface(out, node),
            Declaration::Enum(node) => self.enumeration(out, node),
            Declaration::Function(node) => self.function(out, node),
            Declaration::Unsupported(node) => {
                warn!(kind = %node.kind, "unsupported declaration kind");
                out.comment(&unsupported_marker(&node.kind), false);
                Ok(())
            }
        }
    }

    fn import(&self, out: &mut LineBuilder, node: &ImportDeclaration) -> Result<()> {
        if node.source.is_empty() {
            return Err(EmitError::malformed("Import", "source"));
        }
        let semi = self.semi();
        if node.specifiers.is_empty() {
            out.line(format!("import {}{}", quote(&node.source), semi));
            return Ok(());
        }
        let mut names = Vec::with_capacity(node.specifiers.len());
        for spec in &node.specifiers {
            require_name("ImportSpecifier", &spec.name)?;
            match &spec.alias {
                Some(alias) => names.push(format!("{} as {}", spec.name, alias)),
                None => names.push(spec.name.clone()),
            }
        }
        let keyword = if node.type_only { "import type" } else { "import" };
        out.line(format!(
            "{} {{ {} }} from {}{}",
            keyword,
            names.join(", "),
            quote(&node.source),
            semi
        ));
        Ok(())
    }

    fn class(&self, out: &mut LineBuilder, node: &ClassDeclaration) -> Result<()> {
        require_name("ClassDeclaration", &node.name)?;
        if let Some(doc) = &node.doc {
            out.js_doc(doc);
        }
        let mut header = format!("{}class {}", export(node.exported), node.name);
        if let Some(superclass) = &node.superclass {
            header.push_str(" extends ");
            header.push_str(superclass);
        }
        if !node.implements.is_empty() {
            header.push_str(" implements ");
            header.push_str(&node.implements.join(", "));
        }
        out.line(format!("{} {{", header));
        out.try_block(|out| -> Result<()> {
            for property in &node.properties {
                self.property(out, property)?;
            }
            let mut needs_gap = !node.properties.is_empty();
            if let Some(ctor) = &node.constructor {
                if needs_gap {
                    out.blank();
                }
                self.constructor(out, ctor)?;
                needs_gap = true;
            }
            for method in &node.methods {
                if needs_gap {
                    out.blank();
                }
                self.method(out, method)?;
                needs_gap = true;
            }
            Ok(())
        })?;
        out.line("}");
        Ok(())
    }

    fn property(&self, out: &mut LineBuilder, node: &PropertyDeclaration) -> Result<()> {
        require_name("PropertyDeclaration", &node.name)?;
        if let Some(doc) = &node.doc {
            out.doc_line(doc);
        }
        let mut text = String::from(node.access.modifier());
        if node.is_static {
            text.push_str("static ");
        }
        if node.readonly {
            text.push_str("readonly ");
        }
        text.push_str(&node.name);
        if node.optional {
            text.push('?');
        }
        if let Some(ty) = &node.type_annotation {
            text.push_str(": ");
            text.push_str(ty);
        }
        if let Some(init) = &node.initializer {
            text.push_str(" = ");
            text.push_str(&self.expression(init)?);
        }
        out.line(format!("{}{}", text, self.semi()));
        Ok(())
    }

    fn constructor(&self, out: &mut LineBuilder, node: &ConstructorDeclaration) -> Result<()> {
        if let Some(doc) = &node.doc {
            out.js_doc(doc);
        }
        out.line(format!("constructor({}) {{", self.params(&node.params)?));
        out.try_block(|out| self.statements(out, &node.body))?;
        out.line("}");
        Ok(())
    }

    fn method(&self, out: &mut LineBuilder, node: &MethodDeclaration) -> Result<()> {
        require_name("MethodDeclaration", &node.name)?;
        if let Some(doc) = &node.doc {
            out.js_doc(doc);
        }
        let mut header = String::from(node.access.modifier());
        if node.is_static {
            header.push_str("static ");
        }
        if node.is_async {
            header.push_str("async ");
        }
        header.push_str(&node.name);
        if !node.type_params.is_empty() {
            header.push_str(&format!("<{}>", node.type_params.join(", ")));
        }
        header.push_str(&format!("({})", self.params(&node.params)?));
        if let Some(ret) = &node.return_type {
            header.push_str(": ");
            header.push_str(ret);
        }
        out.line(format!("{} {{", header));
        out.try_block(|out| self.statements(out, &node.body))?;
        out.line("}");
        Ok(())
    }

    fn interface(&self, out: &mut LineBuilder, node: &InterfaceDeclaration) -> Result<()> {
        require_name("InterfaceDeclaration", &node.name)?;
        if let Some(doc) = &node.doc {
            out.js_doc(doc);
        }
        let mut header = format!("{}interface {}", export(node.exported), node.name);
        if !node.extends.is_empty() {
            header.push_str(" extends ");
            header.push_str(&node.extends.join(", "));
        }
        out.line(format!("{} {{", header));
        out.try_block(|out| -> Result<()> {
            for property in &node.properties {
                require_name("InterfaceProperty", &property.name)?;
                if let Some(doc) = &property.doc {
                    out.doc_line(doc);
                }
                out.line(format!(
                    "{}{}{}: {}{}",
                    if property.readonly { "readonly " } else { "" },
                    property.name,
                    if property.optional { "?" } else { "" },
                    property.type_annotation,
                    self.semi()
                ));
            }
            Ok(())
        })?;
        out.line("}");
        Ok(())
    }

    fn enumeration(&self, out: &mut LineBuilder, node: &EnumDeclaration) -> Result<()> {
        require_name("EnumDeclaration", &node.name)?;
        if let Some(doc) = &node.doc {
            out.js_doc(doc);
        }
        out.line(format!("{}enum {} {{", export(node.exported), node.name));
        out.try_block(|out| -> Result<()> {
            for member in &node.members {
                require_name("EnumMember", &member.name)?;
                match &member.value {
                    Some(value) => out.line(format!("{} = {},", member.name, value)),
                    None => out.line(format!("{},", member.name)),
                };
            }
            Ok(())
        })?;
        out.line("}");
        Ok(())
    }

    fn function(&self, out: &mut LineBuilder, node: &FunctionDeclaration) -> Result<()> {
        require_name("FunctionDeclaration", &node.name)?;
        if let Some(doc) = &node.doc {
            out.js_doc(doc);
        }
        let mut header = String::from(export(node.exported));
        if node.is_async {
            header.push_str("async ");
        }
        header.push_str(&format!(
            "function {}({})",
            node.name,
            self.params(&node.params)?
        ));
        if let Some(ret) = &node.return_type {
            header.push_str(": ");
            header.push_str(ret);
        }
        out.line(format!("{} {{", header));
        out.try_block(|out| self.statements(out, &node.body))?;
        out.line("}");
        Ok(())
    }

    /// Parameter list without the surrounding parentheses.
    pub(crate) fn params(&self, params: &[Parameter]) -> Result<String> {
        let rendered = params
            .iter()
            .map(|p| {
                require_name("Parameter", &p.name)?;
                let mut text = p.name.clone();
                if p.optional {
                    text.push('?');
                }
                if let Some(ty) = &p.type_annotation {
                    text.push_str(": ");
                    text.push_str(ty);
                }
                if let Some(default) = &p.default_value {
                    text.push_str(" = ");
                    text.push_str(default);
                }
                Ok(text)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(rendered.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use sdkgen_codegen::ast::{
        Expression, InterfaceProperty, JsDoc, Program, Statement, UnsupportedNode,
    };

    use super::*;

    fn emit(declaration: impl Into<Declaration>) -> String {
        Emitter::default()
            .emit_declaration(&declaration.into())
            .unwrap()
    }

    #[test]
    fn test_import() {
        let out = emit(
            ImportDeclaration::new("./transport")
                .named("Transport")
                .named_as("request", "send"),
        );
        assert_eq!(out, "import { Transport, request as send } from \"./transport\";\n");
    }

    #[test]
    fn test_import_without_source_is_malformed() {
        let err = Emitter::default()
            .emit_declaration(&ImportDeclaration::new("").named("x").into())
            .unwrap_err();
        assert_eq!(err, EmitError::malformed("Import", "source"));
    }

    #[test]
    fn test_interface() {
        let out = emit(
            InterfaceDeclaration::new("User")
                .property(InterfaceProperty::new("id", "string"))
                .property(InterfaceProperty::new("email", "string").optional().doc("Contact")),
        );
        assert_eq!(
            out,
            "export interface User {\n  id: string;\n  /** Contact */\n  email?: string;\n}\n"
        );
    }

    #[test]
    fn test_property_doc_is_escaped() {
        let out = emit(
            InterfaceDeclaration::new("Filter")
                .property(InterfaceProperty::new("glob", "string").doc("Pattern such as src/**/*.ts")),
        );
        assert_eq!(
            out,
            "export interface Filter {\n  /** Pattern such as src/**\\/*.ts */\n  glob: string;\n}\n"
        );
    }

    #[test]
    fn test_enum() {
        let out = emit(
            EnumDeclaration::new("Color")
                .member("Red", Some("\"red\"".into()))
                .member("Blue", None),
        );
        assert_eq!(out, "export enum Color {\n  Red = \"red\",\n  Blue,\n}\n");
    }

    #[test]
    fn test_class_member_order() {
        let class = ClassDeclaration::new("Counter")
            .property(PropertyDeclaration::new("count", "number").init(Expression::raw("0")))
            .property(PropertyDeclaration::new("step", "number").private().readonly())
            .constructor(ConstructorDeclaration {
                params: vec![Parameter::new("step", "number").default_value("1")],
                body: vec![Statement::assign(
                    Expression::this().member("step"),
                    Expression::ident("step"),
                )],
                doc: None,
            })
            .method(
                MethodDeclaration::new("increment")
                    .returns("number")
                    .statement(Statement::ret(Expression::binary(
                        Expression::this().member("count"),
                        "+=",
                        Expression::this().member("step"),
                    ))),
            )
            .method(MethodDeclaration::new("reset").returns("void"));

        assert_eq!(
            emit(class),
            "export class Counter {\n  count: number = 0;\n  private readonly step: number;\n\n  constructor(step: number = 1) {\n    this.step = step;\n  }\n\n  increment(): number {\n    return this.count += this.step;\n  }\n\n  reset(): void {\n  }\n}\n"
        );
    }

    #[test]
    fn test_function_with_doc() {
        let func = FunctionDeclaration::new("createConfig")
            .param(Parameter::new("options", "Config").default_value("{}"))
            .returns("Config")
            .statement(Statement::ret(Expression::ident("options")))
            .doc(JsDoc::text("Fill defaults."));
        assert_eq!(
            emit(func),
            "/**\n * Fill defaults.\n */\nexport function createConfig(options: Config = {}): Config {\n  return options;\n}\n"
        );
    }

    #[test]
    fn test_unnamed_method_is_malformed() {
        let class = ClassDeclaration::new("C").method(MethodDeclaration::new(""));
        let err = Emitter::default()
            .emit_declaration(&class.into())
            .unwrap_err();
        assert_eq!(err, EmitError::malformed("MethodDeclaration", "name"));
    }

    #[test]
    fn test_unnamed_parameter_is_malformed() {
        let func = FunctionDeclaration::new("f").param(Parameter::default());
        let err = Emitter::default().emit_declaration(&func.into()).unwrap_err();
        assert_eq!(err, EmitError::malformed("Parameter", "name"));
    }

    #[test]
    fn test_program_with_unsupported_declaration() {
        let mut program = Program::new();
        program.push(InterfaceDeclaration::new("A"));
        program.body.push(Declaration::Unsupported(UnsupportedNode::new("TypeAlias")));
        program.push(InterfaceDeclaration::new("B"));

        let out = Emitter::default().emit_program(&program).unwrap();
        assert_eq!(
            out,
            "export interface A {\n}\n\n// unsupported node: TypeAlias\n\nexport interface B {\n}\n"
        );
    }
}
