//! Declaration nodes and class members.

use super::{Expression, JsDoc, Statement, UnsupportedNode};

/// A top-level declaration of a program.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Import(ImportDeclaration),
    Class(ClassDeclaration),
    Interface(InterfaceDeclaration),
    Enum(EnumDeclaration),
    Function(FunctionDeclaration),
    Unsupported(UnsupportedNode),
}

impl Declaration {
    /// Node kind name.
    pub fn kind(&self) -> &str {
        match self {
            Declaration::Import(_) => "Import",
            Declaration::Class(_) => "ClassDeclaration",
            Declaration::Interface(_) => "InterfaceDeclaration",
            Declaration::Enum(_) => "EnumDeclaration",
            Declaration::Function(_) => "FunctionDeclaration",
            Declaration::Unsupported(node) => &node.kind,
        }
    }

    /// Declared name, if the node has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Import(_) | Declaration::Unsupported(_) => None,
            Declaration::Class(c) => Some(&c.name),
            Declaration::Interface(i) => Some(&i.name),
            Declaration::Enum(e) => Some(&e.name),
            Declaration::Function(f) => Some(&f.name),
        }
    }
}

impl From<ClassDeclaration> for Declaration {
    fn from(node: ClassDeclaration) -> Self {
        Declaration::Class(node)
    }
}

impl From<InterfaceDeclaration> for Declaration {
    fn from(node: InterfaceDeclaration) -> Self {
        Declaration::Interface(node)
    }
}

impl From<EnumDeclaration> for Declaration {
    fn from(node: EnumDeclaration) -> Self {
        Declaration::Enum(node)
    }
}

impl From<FunctionDeclaration> for Declaration {
    fn from(node: FunctionDeclaration) -> Self {
        Declaration::Function(node)
    }
}

impl From<ImportDeclaration> for Declaration {
    fn from(node: ImportDeclaration) -> Self {
        Declaration::Import(node)
    }
}

/// A named import, optionally aliased (`name as alias`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    pub name: String,
    pub alias: Option<String>,
}

/// `import { a, b as c } from "source"`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportDeclaration {
    pub source: String,
    pub specifiers: Vec<ImportSpecifier>,
    /// `import type { ... }`
    pub type_only: bool,
}

impl ImportDeclaration {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Default::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.specifiers.push(ImportSpecifier {
            name: name.into(),
            alias: None,
        });
        self
    }

    pub fn named_as(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.specifiers.push(ImportSpecifier {
            name: name.into(),
            alias: Some(alias.into()),
        });
        self
    }

    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }
}

/// Member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    #[default]
    Public,
    Protected,
    Private,
}

impl Access {
    /// Modifier prefix; public members carry none.
    pub fn modifier(&self) -> &'static str {
        match self {
            Access::Public => "",
            Access::Protected => "protected ",
            Access::Private => "private ",
        }
    }
}

/// A function, method or constructor parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub type_annotation: Option<String>,
    pub optional: bool,
    /// Raw default value text.
    pub default_value: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_annotation: Some(ty.into()),
            ..Default::default()
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDeclaration {
    pub name: String,
    pub type_annotation: Option<String>,
    pub optional: bool,
    pub readonly: bool,
    pub is_static: bool,
    pub access: Access,
    pub initializer: Option<Expression>,
    pub doc: Option<String>,
}

impl PropertyDeclaration {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_annotation: Some(ty.into()),
            ..Default::default()
        }
    }

    pub fn private(mut self) -> Self {
        self.access = Access::Private;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn init(mut self, value: Expression) -> Self {
        self.initializer = Some(value);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstructorDeclaration {
    pub params: Vec<Parameter>,
    pub body: Vec<Statement>,
    pub doc: Option<JsDoc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodDeclaration {
    pub name: String,
    /// Generic parameters (`<T>`).
    pub type_params: Vec<String>,
    pub params: Vec<Parameter>,
    pub return_type: Option<String>,
    pub is_async: bool,
    pub is_static: bool,
    pub access: Access,
    pub body: Vec<Statement>,
    pub doc: Option<JsDoc>,
}

impl MethodDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn generic(mut self, name: impl Into<String>) -> Self {
        self.type_params.push(name.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.access = Access::Private;
        self
    }

    pub fn statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn doc(mut self, doc: JsDoc) -> Self {
        self.doc = Some(doc);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassDeclaration {
    pub name: String,
    pub superclass: Option<String>,
    /// Implemented interfaces.
    pub implements: Vec<String>,
    pub properties: Vec<PropertyDeclaration>,
    pub constructor: Option<ConstructorDeclaration>,
    pub methods: Vec<MethodDeclaration>,
    pub exported: bool,
    pub doc: Option<JsDoc>,
}

impl ClassDeclaration {
    /// A new exported class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            ..Default::default()
        }
    }

    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn property(mut self, property: PropertyDeclaration) -> Self {
        self.properties.push(property);
        self
    }

    pub fn constructor(mut self, constructor: ConstructorDeclaration) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn method(mut self, method: MethodDeclaration) -> Self {
        self.methods.push(method);
        self
    }

    pub fn doc(mut self, doc: JsDoc) -> Self {
        self.doc = Some(doc);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceProperty {
    pub name: String,
    pub type_annotation: String,
    pub optional: bool,
    pub readonly: bool,
    pub doc: Option<String>,
}

impl InterfaceProperty {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_annotation: ty.into(),
            ..Default::default()
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterfaceDeclaration {
    pub name: String,
    pub extends: Vec<String>,
    pub properties: Vec<InterfaceProperty>,
    pub exported: bool,
    pub doc: Option<JsDoc>,
}

impl InterfaceDeclaration {
    /// A new exported interface.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            ..Default::default()
        }
    }

    pub fn property(mut self, property: InterfaceProperty) -> Self {
        self.properties.push(property);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMember {
    pub name: String,
    /// Raw initializer text.
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumDeclaration {
    pub name: String,
    pub members: Vec<EnumMember>,
    pub exported: bool,
    pub doc: Option<JsDoc>,
}

impl EnumDeclaration {
    /// A new exported enum.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            ..Default::default()
        }
    }

    pub fn member(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.members.push(EnumMember {
            name: name.into(),
            value,
        });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub is_async: bool,
    pub exported: bool,
    pub params: Vec<Parameter>,
    pub return_type: Option<String>,
    pub body: Vec<Statement>,
    pub doc: Option<JsDoc>,
}

impl FunctionDeclaration {
    /// A new exported function.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            ..Default::default()
        }
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn statement(mut self, stmt: Statement) -> Self {
        self.body.push(stmt);
        self
    }

    pub fn doc(mut self, doc: JsDoc) -> Self {
        self.doc = Some(doc);
        self
    }
}
