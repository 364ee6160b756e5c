//! The reflective metamodel vocabulary.
//!
//! This module provides the object graph used to describe user-defined
//! modeling languages: packages own classifiers (classes and data types),
//! classes own structural features (attributes and references), and
//! references point at other classes.
//!
//! # Overview
//!
//! Exported types:
//! - [`PackageRef`]: A named, namespaced container of classifiers
//! - [`Classifier`]: Tagged classifier variants ([`ClassRef`] or [`DataTypeRef`])
//! - [`ClassRef`]: A named container of structural features
//! - [`Feature`]: Tagged feature variants ([`AttributeRef`] or [`ReferenceRef`])
//! - [`AttributeRef`]: A named, data-typed value slot
//! - [`ReferenceRef`]: A named link to another class, possibly containment
//! - [`DataTypeRef`]: A named primitive type; see [`builtins`] for the
//!   process-wide built-in instances
//!
//! # Sharing and mutation
//!
//! Elements are cheap cloneable handles over shared state. Property editors
//! registered at startup mutate elements reachable from a later evaluation
//! context, so the graph must stay shared and mutable after construction;
//! the hosting workbench serializes concurrent edits to a given model.
//! Owner links (feature to class, classifier to package) are weak.
//!
//! # Examples
//!
//! ```
//! use atelier_core::meta::{builtins, AttributeRef, ClassRef, Classifier, PackageRef};
//!
//! let task = ClassRef::new("Task");
//! let name = AttributeRef::new("name");
//! name.set_data_type(builtins::string());
//! task.add_attribute(name);
//!
//! let package = PackageRef::new("tracker", "https://example.com/tracker");
//! package.add_classifier(Classifier::Class(task.clone()));
//!
//! assert_eq!(task.package().unwrap().name(), "tracker");
//! ```

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

/// Namespace URI of the metamodel vocabulary itself.
pub const NS_URI: &str = "https://atelierworks.github.io/metamodels/meta";

type Shared<T> = Arc<RwLock<T>>;
type WeakShared<T> = Weak<RwLock<T>>;

/// Tagged classifier variants owned by a package.
#[derive(Debug, Clone, PartialEq)]
pub enum Classifier {
    Class(ClassRef),
    DataType(DataTypeRef),
}

impl Classifier {
    /// Returns the classifier name.
    pub fn name(&self) -> String {
        match self {
            Self::Class(class) => class.name(),
            Self::DataType(data_type) => data_type.name(),
        }
    }

    /// Returns the class handle when this classifier is a class.
    pub fn as_class(&self) -> Option<&ClassRef> {
        match self {
            Self::Class(class) => Some(class),
            Self::DataType(_) => None,
        }
    }

    /// Returns the data type handle when this classifier is a data type.
    pub fn as_data_type(&self) -> Option<&DataTypeRef> {
        match self {
            Self::DataType(data_type) => Some(data_type),
            Self::Class(_) => None,
        }
    }
}

/// Tagged structural-feature variants owned by a class.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Attribute(AttributeRef),
    Reference(ReferenceRef),
}

impl Feature {
    /// Returns the feature name.
    pub fn name(&self) -> String {
        match self {
            Self::Attribute(attribute) => attribute.name(),
            Self::Reference(reference) => reference.name(),
        }
    }
}

struct PackageState {
    name: String,
    ns_uri: String,
    classifiers: Vec<Classifier>,
}

/// Shared handle to a metamodel package.
#[derive(Clone)]
pub struct PackageRef(Shared<PackageState>);

impl PackageRef {
    /// Creates an empty package with the given name and namespace URI.
    pub fn new(name: impl Into<String>, ns_uri: impl Into<String>) -> Self {
        Self(Arc::new(RwLock::new(PackageState {
            name: name.into(),
            ns_uri: ns_uri.into(),
            classifiers: Vec::new(),
        })))
    }

    /// Returns the package name.
    pub fn name(&self) -> String {
        self.0.read().name.clone()
    }

    /// Renames the package.
    pub fn set_name(&self, name: impl Into<String>) {
        self.0.write().name = name.into();
    }

    /// Returns the namespace URI.
    pub fn ns_uri(&self) -> String {
        self.0.read().ns_uri.clone()
    }

    /// Changes the namespace URI.
    pub fn set_ns_uri(&self, ns_uri: impl Into<String>) {
        self.0.write().ns_uri = ns_uri.into();
    }

    /// Adds a classifier to this package and records this package as its
    /// owner.
    pub fn add_classifier(&self, classifier: Classifier) {
        let owner = Arc::downgrade(&self.0);
        match &classifier {
            Classifier::Class(class) => class.0.write().package = owner,
            Classifier::DataType(data_type) => data_type.0.write().package = owner,
        }
        self.0.write().classifiers.push(classifier);
    }

    /// Looks up a classifier of this package by name.
    pub fn classifier(&self, name: &str) -> Option<Classifier> {
        self.0
            .read()
            .classifiers
            .iter()
            .find(|classifier| classifier.name() == name)
            .cloned()
    }

    /// Returns all classifiers of this package, in insertion order.
    pub fn classifiers(&self) -> Vec<Classifier> {
        self.0.read().classifiers.clone()
    }
}

impl PartialEq for PackageRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for PackageRef {}

impl fmt::Debug for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PackageRef").field(&self.name()).finish()
    }
}

struct ClassState {
    name: String,
    features: Vec<Feature>,
    package: WeakShared<PackageState>,
}

/// Shared handle to a class.
#[derive(Clone)]
pub struct ClassRef(Shared<ClassState>);

impl ClassRef {
    /// Creates a class with no features.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(RwLock::new(ClassState {
            name: name.into(),
            features: Vec::new(),
            package: Weak::new(),
        })))
    }

    /// Returns the class name.
    pub fn name(&self) -> String {
        self.0.read().name.clone()
    }

    /// Renames the class.
    pub fn set_name(&self, name: impl Into<String>) {
        self.0.write().name = name.into();
    }

    /// Adds an attribute to this class and records this class as its owner.
    pub fn add_attribute(&self, attribute: AttributeRef) {
        attribute.0.write().class = Arc::downgrade(&self.0);
        self.0.write().features.push(Feature::Attribute(attribute));
    }

    /// Adds a reference to this class and records this class as its owner.
    pub fn add_reference(&self, reference: ReferenceRef) {
        reference.0.write().class = Arc::downgrade(&self.0);
        self.0.write().features.push(Feature::Reference(reference));
    }

    /// Returns all structural features, in insertion order.
    pub fn features(&self) -> Vec<Feature> {
        self.0.read().features.clone()
    }

    /// Looks up an attribute of this class by name.
    pub fn attribute(&self, name: &str) -> Option<AttributeRef> {
        self.0.read().features.iter().find_map(|feature| match feature {
            Feature::Attribute(attribute) if attribute.name() == name => Some(attribute.clone()),
            _ => None,
        })
    }

    /// Looks up a reference of this class by name.
    pub fn reference(&self, name: &str) -> Option<ReferenceRef> {
        self.0.read().features.iter().find_map(|feature| match feature {
            Feature::Reference(reference) if reference.name() == name => Some(reference.clone()),
            _ => None,
        })
    }

    /// Returns the package owning this class, if it has been added to one.
    pub fn package(&self) -> Option<PackageRef> {
        self.0.read().package.upgrade().map(PackageRef)
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ClassRef {}

impl fmt::Debug for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClassRef").field(&self.name()).finish()
    }
}

struct AttributeState {
    name: String,
    data_type: Option<DataTypeRef>,
    class: WeakShared<ClassState>,
}

/// Shared handle to an attribute.
#[derive(Clone)]
pub struct AttributeRef(Shared<AttributeState>);

impl AttributeRef {
    /// Creates an untyped attribute.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(RwLock::new(AttributeState {
            name: name.into(),
            data_type: None,
            class: Weak::new(),
        })))
    }

    /// Returns the attribute name.
    pub fn name(&self) -> String {
        self.0.read().name.clone()
    }

    /// Renames the attribute.
    pub fn set_name(&self, name: impl Into<String>) {
        self.0.write().name = name.into();
    }

    /// Returns the attribute data type, if any.
    pub fn data_type(&self) -> Option<DataTypeRef> {
        self.0.read().data_type.clone()
    }

    /// Sets the attribute data type.
    pub fn set_data_type(&self, data_type: DataTypeRef) {
        self.0.write().data_type = Some(data_type);
    }

    /// Returns the class owning this attribute, if any.
    pub fn containing_class(&self) -> Option<ClassRef> {
        self.0.read().class.upgrade().map(ClassRef)
    }
}

impl PartialEq for AttributeRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for AttributeRef {}

impl fmt::Debug for AttributeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AttributeRef").field(&self.name()).finish()
    }
}

struct ReferenceState {
    name: String,
    target: Option<ClassRef>,
    many: bool,
    containment: bool,
    class: WeakShared<ClassState>,
}

/// Shared handle to a reference.
#[derive(Clone)]
pub struct ReferenceRef(Shared<ReferenceState>);

impl ReferenceRef {
    /// Creates an untargeted, single-valued, non-containment reference.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(RwLock::new(ReferenceState {
            name: name.into(),
            target: None,
            many: false,
            containment: false,
            class: Weak::new(),
        })))
    }

    /// Returns the reference name.
    pub fn name(&self) -> String {
        self.0.read().name.clone()
    }

    /// Renames the reference.
    pub fn set_name(&self, name: impl Into<String>) {
        self.0.write().name = name.into();
    }

    /// Returns the target class, if any.
    pub fn target(&self) -> Option<ClassRef> {
        self.0.read().target.clone()
    }

    /// Retargets the reference.
    pub fn set_target(&self, target: ClassRef) {
        self.0.write().target = Some(target);
    }

    /// Returns true when the reference is multi-valued.
    pub fn many(&self) -> bool {
        self.0.read().many
    }

    /// Marks the reference single- or multi-valued.
    pub fn set_many(&self, many: bool) {
        self.0.write().many = many;
    }

    /// Returns true when the reference owns its targets.
    pub fn containment(&self) -> bool {
        self.0.read().containment
    }

    /// Marks the reference as containment or cross-reference.
    pub fn set_containment(&self, containment: bool) {
        self.0.write().containment = containment;
    }

    /// Returns the class owning this reference, if any.
    pub fn containing_class(&self) -> Option<ClassRef> {
        self.0.read().class.upgrade().map(ClassRef)
    }
}

impl PartialEq for ReferenceRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ReferenceRef {}

impl fmt::Debug for ReferenceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReferenceRef").field(&self.name()).finish()
    }
}

struct DataTypeState {
    name: String,
    package: WeakShared<PackageState>,
}

/// Shared handle to a primitive data type.
#[derive(Clone)]
pub struct DataTypeRef(Shared<DataTypeState>);

impl DataTypeRef {
    /// Creates a data type with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::new(RwLock::new(DataTypeState {
            name: name.into(),
            package: Weak::new(),
        })))
    }

    /// Returns the data type name.
    pub fn name(&self) -> String {
        self.0.read().name.clone()
    }

    /// Returns the package owning this data type, if it has been added to
    /// one. Built-in data types belong to no package.
    pub fn package(&self) -> Option<PackageRef> {
        self.0.read().package.upgrade().map(PackageRef)
    }
}

impl PartialEq for DataTypeRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for DataTypeRef {}

impl fmt::Debug for DataTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DataTypeRef").field(&self.name()).finish()
    }
}

/// Process-wide built-in data types.
///
/// Attribute editors resolve user-entered type names against these
/// singletons, so the same handle is observed no matter where the lookup
/// happens.
pub mod builtins {
    use super::DataTypeRef;
    use std::sync::LazyLock;

    static BUILTINS: LazyLock<[DataTypeRef; 3]> = LazyLock::new(|| {
        [
            DataTypeRef::new("String"),
            DataTypeRef::new("Boolean"),
            DataTypeRef::new("Integer"),
        ]
    });

    /// The built-in string type.
    pub fn string() -> DataTypeRef {
        BUILTINS[0].clone()
    }

    /// The built-in boolean type.
    pub fn boolean() -> DataTypeRef {
        BUILTINS[1].clone()
    }

    /// The built-in integer type.
    pub fn integer() -> DataTypeRef {
        BUILTINS[2].clone()
    }

    /// Resolves a built-in data type by name.
    pub fn builtin(name: &str) -> Option<DataTypeRef> {
        BUILTINS
            .iter()
            .find(|data_type| data_type.name() == name)
            .cloned()
    }

    /// Returns all built-in data types.
    pub fn all() -> Vec<DataTypeRef> {
        BUILTINS.to_vec()
    }
}

/// Returns the package describing this vocabulary itself.
///
/// Registering it alongside user metamodels lets reflective editors browse
/// packages, classes, and features with the same machinery they use for any
/// other model.
pub fn package() -> PackageRef {
    let package = PackageRef::new("meta", NS_URI);
    for name in ["Package", "Class", "Attribute", "Reference", "DataType"] {
        package.add_classifier(Classifier::Class(ClassRef::new(name)));
    }
    for data_type in ["String", "Boolean", "Integer"] {
        package.add_classifier(Classifier::DataType(DataTypeRef::new(data_type)));
    }
    package
}
