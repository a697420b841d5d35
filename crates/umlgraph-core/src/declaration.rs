//! Declared types as delivered by the source-analysis front end.
//!
//! A [`FileDeclaration`] lists the types declared in one source file, in
//! declaration order. Every declared type is one variant of the closed
//! [`TypeEntity`] union: classes, interfaces and type aliases carry members
//! and heritage clauses through [`CompoundType`], enums carry their items
//! through [`EnumType`].
//!
//! All types implement serde traits so the front end can hand them over as
//! a JSON document:
//!
//! ```
//! use umlgraph_core::declaration::{TypeEntity, TypeKind};
//!
//! let json = r#"{
//!     "kind": "Class",
//!     "id": "\"src/zoo\".Zoo",
//!     "name": "Zoo",
//!     "properties": [
//!         { "name": "animals", "declared_type": "Animal[]",
//!           "referenced_type_ids": ["\"src/zoo\".Animal"] }
//!     ]
//! }"#;
//!
//! let zoo: TypeEntity = serde_json::from_str(json).unwrap();
//! assert_eq!(zoo.kind(), TypeKind::Class);
//! assert_eq!(zoo.name(), "Zoo");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{association::MemberAssociation, identifier::Id};

/// Member visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// Modifier flags attached to a property or method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    visibility: Visibility,
    #[serde(rename = "static")]
    is_static: bool,
    #[serde(rename = "abstract")]
    is_abstract: bool,
}

impl Modifiers {
    pub fn new(visibility: Visibility, is_static: bool, is_abstract: bool) -> Self {
        Self {
            visibility,
            is_static,
            is_abstract,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }
}

/// A property (field, property signature or constructor parameter property).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetails {
    name: String,
    #[serde(default)]
    optional: bool,
    /// Human-readable type text, e.g. `Animal[] | undefined`.
    #[serde(default)]
    declared_type: Option<String>,
    /// Catalog ids found in the declared type: none for primitives, one for
    /// a named type, several for unions and intersections.
    #[serde(default)]
    referenced_type_ids: Vec<Id>,
    #[serde(default)]
    modifiers: Modifiers,
}

impl PropertyDetails {
    /// Creates a public, non-optional property.
    pub fn new(
        name: impl Into<String>,
        declared_type: Option<String>,
        referenced_type_ids: Vec<Id>,
    ) -> Self {
        Self {
            name: name.into(),
            optional: false,
            declared_type,
            referenced_type_ids,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn declared_type(&self) -> Option<&str> {
        self.declared_type.as_deref()
    }

    pub fn referenced_type_ids(&self) -> &[Id] {
        &self.referenced_type_ids
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

/// A method or method signature. Only the return type is inspected for
/// type references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDetails {
    name: String,
    #[serde(default)]
    return_type: Option<String>,
    #[serde(default)]
    referenced_type_ids: Vec<Id>,
    #[serde(default)]
    modifiers: Modifiers,
}

impl MethodDetails {
    /// Creates a public method.
    pub fn new(
        name: impl Into<String>,
        return_type: Option<String>,
        referenced_type_ids: Vec<Id>,
    ) -> Self {
        Self {
            name: name.into(),
            return_type,
            referenced_type_ids,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    pub fn referenced_type_ids(&self) -> &[Id] {
        &self.referenced_type_ids
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }
}

/// Whether a heritage clause extends a base type or implements an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeritageKind {
    Extends,
    Implements,
}

/// One edge of the inheritance DAG, directed from subtype to supertype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeritageClause {
    source_id: Id,
    source_name: String,
    target_id: Id,
    target_name: String,
    kind: HeritageKind,
}

impl HeritageClause {
    pub fn new(
        source_id: Id,
        source_name: impl Into<String>,
        target_id: Id,
        target_name: impl Into<String>,
        kind: HeritageKind,
    ) -> Self {
        Self {
            source_id,
            source_name: source_name.into(),
            target_id,
            target_name: target_name.into(),
            kind,
        }
    }

    pub fn source_id(&self) -> Id {
        self.source_id
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// The direct supertype or implemented interface.
    pub fn target_id(&self) -> Id {
        self.target_id
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn kind(&self) -> HeritageKind {
        self.kind
    }
}

/// Payload shared by classes, interfaces and type aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundType {
    id: Id,
    /// Display name, including a rendered generic parameter list (`Box<T>`).
    name: String,
    #[serde(default)]
    properties: Vec<PropertyDetails>,
    #[serde(default)]
    methods: Vec<MethodDetails>,
    #[serde(default)]
    heritage_clauses: Vec<HeritageClause>,
}

impl CompoundType {
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            properties: Vec::new(),
            methods: Vec::new(),
            heritage_clauses: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: PropertyDetails) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_method(mut self, method: MethodDetails) -> Self {
        self.methods.push(method);
        self
    }

    /// Adds an `extends`/`implements` clause whose source is this type.
    pub fn with_heritage(
        mut self,
        target_id: Id,
        target_name: impl Into<String>,
        kind: HeritageKind,
    ) -> Self {
        let clause = HeritageClause::new(self.id, self.name.clone(), target_id, target_name, kind);
        self.heritage_clauses.push(clause);
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &[PropertyDetails] {
        &self.properties
    }

    pub fn methods(&self) -> &[MethodDetails] {
        &self.methods
    }

    pub fn heritage_clauses(&self) -> &[HeritageClause] {
        &self.heritage_clauses
    }
}

/// Payload of an enum declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumType {
    id: Id,
    name: String,
    #[serde(default)]
    items: Vec<String>,
}

impl EnumType {
    pub fn new(id: Id, name: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// The kind of a declared type, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Interface,
    TypeAlias,
    Enum,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Class => write!(f, "class"),
            TypeKind::Interface => write!(f, "interface"),
            TypeKind::TypeAlias => write!(f, "type alias"),
            TypeKind::Enum => write!(f, "enum"),
        }
    }
}

/// A declared type: the closed union of everything the catalog indexes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TypeEntity {
    Class(CompoundType),
    Interface(CompoundType),
    TypeAlias(CompoundType),
    Enum(EnumType),
}

impl TypeEntity {
    pub fn id(&self) -> Id {
        match self {
            TypeEntity::Class(t) | TypeEntity::Interface(t) | TypeEntity::TypeAlias(t) => t.id(),
            TypeEntity::Enum(e) => e.id(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TypeEntity::Class(t) | TypeEntity::Interface(t) | TypeEntity::TypeAlias(t) => t.name(),
            TypeEntity::Enum(e) => e.name(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeEntity::Class(_) => TypeKind::Class,
            TypeEntity::Interface(_) => TypeKind::Interface,
            TypeEntity::TypeAlias(_) => TypeKind::TypeAlias,
            TypeEntity::Enum(_) => TypeKind::Enum,
        }
    }

    /// Returns the member-carrying payload, or `None` for enums.
    pub fn compound(&self) -> Option<&CompoundType> {
        match self {
            TypeEntity::Class(t) | TypeEntity::Interface(t) | TypeEntity::TypeAlias(t) => Some(t),
            TypeEntity::Enum(_) => None,
        }
    }

    /// Direct supertypes and implemented interfaces. Empty for enums.
    pub fn heritage_clauses(&self) -> &[HeritageClause] {
        self.compound()
            .map(CompoundType::heritage_clauses)
            .unwrap_or_default()
    }
}

/// The declared types of one source file, plus the relationship edges
/// attributed to that file once the graph has been built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileDeclaration {
    /// File name including path.
    file_name: String,
    #[serde(default)]
    types: Vec<TypeEntity>,
    #[serde(default)]
    member_associations: Vec<MemberAssociation>,
}

impl FileDeclaration {
    pub fn new(file_name: impl Into<String>, types: Vec<TypeEntity>) -> Self {
        Self {
            file_name: file_name.into(),
            types,
            member_associations: Vec::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Declared types in declaration order.
    pub fn types(&self) -> &[TypeEntity] {
        &self.types
    }

    /// Finalized relationship edges attributed to this file.
    pub fn member_associations(&self) -> &[MemberAssociation] {
        &self.member_associations
    }

    pub fn set_member_associations(&mut self, associations: Vec<MemberAssociation>) {
        self.member_associations = associations;
    }
}
