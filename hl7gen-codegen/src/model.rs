//! Resolved accessor model handed to emitters.
//!
//! This module flattens a compiled structure tree into one entry per group,
//! in depth-first order, with class names and child type names resolved so an
//! emitter can render each group without walking the tree itself.

use hl7gen_core::{Cardinality, GroupNode, Node, PLACEHOLDER_SEGMENT};
use hl7gen_schema::NameScope;

/// Type name emitted for the generic `?` segment.
pub const GENERIC_SEGMENT_TYPE: &str = "GenericSegment";

/// Resolved view of one compiled message or group structure.
#[derive(Debug, Clone)]
pub struct StructureModel {
    /// Structure name (message structure or requested group).
    pub name: String,
    /// The compiled tree.
    pub tree: GroupNode,
    /// Every group of the tree, root first, in depth-first order.
    pub groups: Vec<ResolvedGroup>,
}

impl StructureModel {
    /// Resolves a compiled tree.
    ///
    /// The root group's class name is the structure name; nested groups are
    /// named `{structure}_{group}`, numbered when two groups of the structure
    /// would otherwise share a class name.
    #[must_use]
    pub fn from_tree(name: &str, tree: GroupNode) -> Self {
        let mut resolver = Resolver {
            structure: name,
            class_names: NameScope::new(),
            groups: Vec::new(),
        };
        let root_class = resolver.class_names.resolve(name);
        resolver.resolve_group(&tree, root_class);

        Self {
            name: name.to_string(),
            groups: resolver.groups,
            tree,
        }
    }

    /// Returns the root group.
    #[must_use]
    pub fn root(&self) -> &ResolvedGroup {
        &self.groups[0]
    }

    /// Looks up a group by class name.
    #[must_use]
    pub fn get_group(&self, class_name: &str) -> Option<&ResolvedGroup> {
        self.groups.iter().find(|g| g.class_name == class_name)
    }

    /// Returns the nested groups, excluding the root.
    #[must_use]
    pub fn nested_groups(&self) -> &[ResolvedGroup] {
        &self.groups[1..]
    }
}

/// Resolved group information.
#[derive(Debug, Clone)]
pub struct ResolvedGroup {
    /// Generated class name.
    pub class_name: String,
    /// Accessor identifier within the parent group.
    pub accessor: String,
    /// Group cardinality.
    pub cardinality: Cardinality,
    /// Description.
    pub description: String,
    /// Children in source order.
    pub children: Vec<ResolvedChild>,
}

impl ResolvedGroup {
    /// Looks up a child by accessor identifier.
    #[must_use]
    pub fn child(&self, accessor: &str) -> Option<&ResolvedChild> {
        self.children.iter().find(|c| c.accessor == accessor)
    }

    /// Returns the number of segment children.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.children
            .iter()
            .filter(|c| c.kind == ChildKind::Segment)
            .count()
    }
}

/// Kind of a resolved child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildKind {
    /// Segment child.
    Segment,
    /// Nested group child.
    Group,
}

/// Resolved child information.
#[derive(Debug, Clone)]
pub struct ResolvedChild {
    /// Accessor identifier, unique among siblings.
    pub accessor: String,
    /// Segment type name, or the nested group's class name.
    pub type_name: String,
    /// Position among the parent's children.
    pub index: usize,
    /// Segment or group.
    pub kind: ChildKind,
    /// Child cardinality.
    pub cardinality: Cardinality,
    /// Description.
    pub description: String,
}

impl ResolvedChild {
    /// Returns true if the child is optional.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        !self.cardinality.required
    }

    /// Returns true if the child repeats.
    #[must_use]
    pub fn is_repeating(&self) -> bool {
        self.cardinality.repeating
    }
}

/// Returns the generated type name for a segment.
#[must_use]
pub fn segment_type_name(segment: &str) -> &str {
    if segment == PLACEHOLDER_SEGMENT {
        GENERIC_SEGMENT_TYPE
    } else {
        segment
    }
}

struct Resolver<'a> {
    structure: &'a str,
    class_names: NameScope,
    groups: Vec<ResolvedGroup>,
}

impl Resolver<'_> {
    fn resolve_group(&mut self, group: &GroupNode, class_name: String) {
        let slot = self.groups.len();
        self.groups.push(ResolvedGroup {
            class_name,
            accessor: group.accessor.clone(),
            cardinality: group.cardinality,
            description: group.description.clone(),
            children: Vec::with_capacity(group.children.len()),
        });

        let mut children = Vec::with_capacity(group.children.len());
        for (index, child) in group.children.iter().enumerate() {
            match child {
                Node::Segment(segment) => children.push(ResolvedChild {
                    accessor: segment.accessor.clone(),
                    type_name: segment_type_name(&segment.name).to_string(),
                    index,
                    kind: ChildKind::Segment,
                    cardinality: segment.cardinality,
                    description: segment.description.clone(),
                }),
                Node::Group(nested) => {
                    let class_name = self
                        .class_names
                        .resolve(&format!("{}_{}", self.structure, nested.display_name()));
                    children.push(ResolvedChild {
                        accessor: nested.accessor.clone(),
                        type_name: class_name.clone(),
                        index,
                        kind: ChildKind::Group,
                        cardinality: nested.cardinality,
                        description: nested.description.clone(),
                    });
                    self.resolve_group(nested, class_name);
                }
            }
        }

        self.groups[slot].children = children;
    }
}
