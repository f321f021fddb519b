//! Compiled structure tree.
//!
//! The tree is built once per message structure (or explicitly requested
//! group) and is read-only afterwards. Every node carries the accessor
//! identifier it was assigned within its parent's scope.

use crate::token::{Cardinality, SegmentToken};

/// Name used when an unnamed group has nothing to derive a name from.
pub const FALLBACK_GROUP_NAME: &str = "Group";

/// Segment leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentNode {
    /// Segment name, `?` for a generic segment.
    pub name: String,
    /// Accessor identifier within the parent group.
    pub accessor: String,
    /// Segment cardinality.
    pub cardinality: Cardinality,
    /// Human-readable description.
    pub description: String,
}

impl SegmentNode {
    /// Creates a segment node from its token, with the accessor still unassigned.
    #[must_use]
    pub fn from_token(token: &SegmentToken) -> Self {
        Self {
            name: token.name.clone(),
            accessor: String::new(),
            cardinality: token.cardinality,
            description: token.description.clone(),
        }
    }
}

/// Group of segments and nested groups sharing one cardinality.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupNode {
    /// Group name, `None` when the schema did not name the group.
    pub name: Option<String>,
    /// Accessor identifier within the parent group.
    pub accessor: String,
    /// Group cardinality.
    pub cardinality: Cardinality,
    /// Human-readable description.
    pub description: String,
    /// Children in source order.
    pub children: Vec<Node>,
}

impl GroupNode {
    /// Creates an empty, required, non-repeating group.
    #[must_use]
    pub fn new(name: Option<String>) -> Self {
        Self {
            name,
            accessor: String::new(),
            cardinality: Cardinality::REQUIRED,
            description: String::new(),
            children: Vec::new(),
        }
    }

    /// Appends a child.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Returns true if the group must be present.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.cardinality.required
    }

    /// Returns true if the group may repeat.
    #[must_use]
    pub fn is_repeating(&self) -> bool {
        self.cardinality.repeating
    }

    /// Returns true if at least one child is a group.
    #[must_use]
    pub fn has_nested_groups(&self) -> bool {
        self.children.iter().any(|c| matches!(c, Node::Group(_)))
    }

    /// Iterates over the direct segment children.
    pub fn segments(&self) -> impl Iterator<Item = &SegmentNode> {
        self.children.iter().filter_map(|c| match c {
            Node::Segment(s) => Some(s),
            Node::Group(_) => None,
        })
    }

    /// Iterates over the direct group children.
    pub fn groups(&self) -> impl Iterator<Item = &GroupNode> {
        self.children.iter().filter_map(|c| match c {
            Node::Group(g) => Some(g),
            Node::Segment(_) => None,
        })
    }

    /// Looks up a direct child by accessor identifier.
    #[must_use]
    pub fn child(&self, accessor: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.accessor() == accessor)
    }

    /// Derives a name from the group's contents.
    ///
    /// Concatenates the names of the direct segment children. A group with no
    /// direct segments borrows the derived name of its first child group.
    #[must_use]
    pub fn derived_name(&self) -> String {
        let joined: String = self.segments().map(|s| s.name.as_str()).collect();
        if !joined.is_empty() {
            return joined;
        }
        self.groups()
            .next()
            .map_or_else(|| FALLBACK_GROUP_NAME.to_string(), GroupNode::display_name)
    }

    /// Returns the given name, or the derived one for an unnamed group.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.derived_name(),
        }
    }

    /// Returns the number of nodes below this group, excluding the group itself.
    #[must_use]
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| match c {
                Node::Segment(_) => 1,
                Node::Group(g) => 1 + g.descendant_count(),
            })
            .sum()
    }

    /// Returns the nesting depth of the deepest group below this one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.groups().map(|g| 1 + g.depth()).max().unwrap_or(0)
    }
}

/// Node of the compiled structure tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    /// Segment leaf.
    Segment(SegmentNode),
    /// Nested group.
    Group(GroupNode),
}

impl Node {
    /// Returns the accessor identifier.
    #[must_use]
    pub fn accessor(&self) -> &str {
        match self {
            Self::Segment(s) => &s.accessor,
            Self::Group(g) => &g.accessor,
        }
    }

    /// Returns the node's cardinality.
    #[must_use]
    pub fn cardinality(&self) -> Cardinality {
        match self {
            Self::Segment(s) => s.cardinality,
            Self::Group(g) => g.cardinality,
        }
    }

    /// Returns the segment, if this is a segment node.
    #[must_use]
    pub fn as_segment(&self) -> Option<&SegmentNode> {
        match self {
            Self::Segment(s) => Some(s),
            Self::Group(_) => None,
        }
    }

    /// Returns the group, if this is a group node.
    #[must_use]
    pub fn as_group(&self) -> Option<&GroupNode> {
        match self {
            Self::Group(g) => Some(g),
            Self::Segment(_) => None,
        }
    }
}

impl From<SegmentNode> for Node {
    fn from(node: SegmentNode) -> Self {
        Self::Segment(node)
    }
}

impl From<GroupNode> for Node {
    fn from(node: GroupNode) -> Self {
        Self::Group(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(name: &str) -> Node {
        let mut node = SegmentNode::from_token(&SegmentToken::new(name));
        node.accessor = name.to_string();
        node.into()
    }

    #[test]
    fn test_group_defaults() {
        let group = GroupNode::new(None);
        assert!(group.is_required());
        assert!(!group.is_repeating());
        assert!(group.children.is_empty());
        assert_eq!(group.depth(), 0);
    }

    #[test]
    fn test_derived_name_from_segments() {
        let mut group = GroupNode::new(None);
        group.add_child(segment("ORC"));
        group.add_child(segment("OBR"));
        assert_eq!(group.derived_name(), "ORCOBR");
        assert_eq!(group.display_name(), "ORCOBR");
    }

    #[test]
    fn test_display_name_prefers_given_name() {
        let mut group = GroupNode::new(Some("ORDER".to_string()));
        group.add_child(segment("ORC"));
        assert_eq!(group.display_name(), "ORDER");
    }

    #[test]
    fn test_derived_name_falls_back_to_first_group() {
        let mut inner = GroupNode::new(None);
        inner.add_child(segment("OBX"));
        inner.add_child(segment("NTE"));
        let mut outer = GroupNode::new(None);
        outer.add_child(inner.into());
        assert_eq!(outer.derived_name(), "OBXNTE");

        assert_eq!(GroupNode::new(None).derived_name(), FALLBACK_GROUP_NAME);
    }

    #[test]
    fn test_counts_and_lookup() {
        let mut inner = GroupNode::new(Some("OBSERVATION".to_string()));
        inner.accessor = "OBSERVATION".to_string();
        inner.add_child(segment("OBX"));
        let mut root = GroupNode::new(None);
        root.add_child(segment("MSH"));
        root.add_child(inner.into());

        assert_eq!(root.descendant_count(), 3);
        assert_eq!(root.depth(), 1);
        assert!(root.has_nested_groups());
        assert!(root.child("OBSERVATION").and_then(Node::as_group).is_some());
        assert!(root.child("MSH").and_then(Node::as_segment).is_some());
        assert!(root.child("PID").is_none());
    }
}
