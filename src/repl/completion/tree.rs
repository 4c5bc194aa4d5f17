//! Command tree - the fixed CLI grammar
//!
//! The grammar is a hand-built tree of literal tokens. Every node is one of:
//!
//! - [`CommandNode::Branch`]: fixed child tokens follow
//! - [`CommandNode::ValueSlot`]: a free-form value follows (an address, a MAC)
//! - [`CommandNode::Terminal`]: the command ends here
//!
//! The tree is built once, then shared read-only between the completer,
//! hinter and highlighter.

use std::collections::BTreeMap;

/// One token position in the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandNode {
    /// Node with fixed child tokens
    Branch(BTreeMap<String, CommandNode>),
    /// Node expecting a free-form value; `placeholder` is shown as a hint
    ValueSlot { placeholder: &'static str },
    /// Node after which nothing else is accepted
    Terminal,
}

impl CommandNode {
    /// Exact, case-sensitive child lookup.
    ///
    /// Value slots and terminals have no children, so lookup always misses.
    pub fn child(&self, token: &str) -> Option<&CommandNode> {
        match self {
            CommandNode::Branch(children) => children.get(token),
            _ => None,
        }
    }

    /// Whether completion can offer anything beneath this node.
    pub fn has_children(&self) -> bool {
        matches!(self, CommandNode::Branch(_))
    }

    /// Child token names in byte order; empty for slots and terminals.
    pub fn child_names(&self) -> impl Iterator<Item = &str> {
        let children = match self {
            CommandNode::Branch(children) => Some(children),
            _ => None,
        };
        children
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }

    /// Placeholder text for value slots
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            CommandNode::ValueSlot { placeholder } => Some(placeholder),
            _ => None,
        }
    }
}

/// Outcome of walking a token sequence through the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk<'a> {
    /// Every token matched; the node reached by the last one
    Reached(&'a CommandNode),
    /// Tokens ran past a value slot; `consumed` tokens matched the grammar,
    /// the next one is the slot's value
    Value {
        slot: &'a CommandNode,
        consumed: usize,
    },
    /// The token at `index` is not part of the grammar
    Invalid { index: usize },
}

/// Immutable command grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTree {
    root: CommandNode,
}

impl CommandTree {
    /// Wrap an already built root node
    pub fn new(root: CommandNode) -> Self {
        Self { root }
    }

    /// The router configuration grammar used by the shell.
    ///
    /// ```text
    /// set  dns <address>
    ///      interfaces eth0|eth1 address <ip/mask>
    ///                           mac <xx:xx:xx:xx:xx:xx>
    /// add  dns <address>
    /// show dns | config | interfaces | version
    /// save | exit | help | ?
    /// ```
    pub fn network() -> Self {
        let interface = || {
            NodeBuilder::branch()
                .slot("address", "<ip/mask>")
                .slot("mac", "<xx:xx:xx:xx:xx:xx>")
        };

        let root = NodeBuilder::branch()
            .child(
                "set",
                NodeBuilder::branch().slot("dns", "<address>").child(
                    "interfaces",
                    NodeBuilder::branch()
                        .child("eth0", interface())
                        .child("eth1", interface()),
                ),
            )
            .child("add", NodeBuilder::branch().slot("dns", "<address>"))
            .child(
                "show",
                NodeBuilder::branch()
                    .terminal("dns")
                    .terminal("config")
                    .terminal("interfaces")
                    .terminal("version"),
            )
            .terminal("save")
            .terminal("exit")
            .terminal("help")
            .terminal("?")
            .build();

        Self::new(root)
    }

    /// Root node of the grammar
    pub fn root(&self) -> &CommandNode {
        &self.root
    }

    /// Walk `tokens` from the root.
    ///
    /// Unlike completion resolution, this distinguishes an invalid path from
    /// a value being typed into a slot.
    pub fn walk<S: AsRef<str>>(&self, tokens: &[S]) -> Walk<'_> {
        let mut node = &self.root;
        for (index, token) in tokens.iter().enumerate() {
            if let CommandNode::ValueSlot { .. } = node {
                return Walk::Value {
                    slot: node,
                    consumed: index,
                };
            }
            match node.child(token.as_ref()) {
                Some(child) => node = child,
                None => return Walk::Invalid { index },
            }
        }
        Walk::Reached(node)
    }
}

impl Default for CommandTree {
    fn default() -> Self {
        Self::network()
    }
}

/// Builder for branch nodes
///
/// Token names must be non-empty and whitespace free, and each may appear
/// only once per branch. Violations are programming errors in the grammar
/// definition and panic at construction time.
#[derive(Debug, Default)]
pub struct NodeBuilder {
    children: BTreeMap<String, CommandNode>,
}

impl NodeBuilder {
    /// Start a new branch node
    pub fn branch() -> Self {
        Self::default()
    }

    /// Add a nested branch
    pub fn child(self, token: &str, node: NodeBuilder) -> Self {
        self.insert(token, node.build())
    }

    /// Add a value slot
    pub fn slot(self, token: &str, placeholder: &'static str) -> Self {
        self.insert(token, CommandNode::ValueSlot { placeholder })
    }

    /// Add a terminal token
    pub fn terminal(self, token: &str) -> Self {
        self.insert(token, CommandNode::Terminal)
    }

    /// Finish the branch
    pub fn build(self) -> CommandNode {
        CommandNode::Branch(self.children)
    }

    fn insert(mut self, token: &str, node: CommandNode) -> Self {
        assert!(
            !token.is_empty() && !token.contains(char::is_whitespace),
            "invalid grammar token {token:?}"
        );
        let previous = self.children.insert(token.to_string(), node);
        assert!(previous.is_none(), "duplicate grammar token {token:?}");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_tokens() {
        let tree = CommandTree::network();
        let names: Vec<&str> = tree.root().child_names().collect();
        assert_eq!(names, vec!["?", "add", "exit", "help", "save", "set", "show"]);
    }

    #[test]
    fn test_child_lookup_is_exact() {
        let tree = CommandTree::network();
        assert!(tree.root().child("set").is_some());
        assert!(tree.root().child("Set").is_none());
        assert!(tree.root().child("se").is_none());
        assert!(tree.root().child("").is_none());
    }

    #[test]
    fn test_value_slots_have_no_children() {
        let tree = CommandTree::network();
        let dns = tree.root().child("set").and_then(|n| n.child("dns")).unwrap();
        assert!(!dns.has_children());
        assert_eq!(dns.placeholder(), Some("<address>"));
        assert_eq!(dns.child_names().count(), 0);
    }

    #[test]
    fn test_terminals_have_no_children() {
        let tree = CommandTree::network();
        let save = tree.root().child("save").unwrap();
        assert_eq!(save, &CommandNode::Terminal);
        assert!(!save.has_children());
        assert_eq!(save.placeholder(), None);
    }

    #[test]
    fn test_walk_reached() {
        let tree = CommandTree::network();
        match tree.walk(&["set", "interfaces", "eth0"]) {
            Walk::Reached(node) => {
                let names: Vec<&str> = node.child_names().collect();
                assert_eq!(names, vec!["address", "mac"]);
            }
            other => panic!("unexpected walk result: {other:?}"),
        }
    }

    #[test]
    fn test_walk_value() {
        let tree = CommandTree::network();
        match tree.walk(&["set", "dns", "8.8.8.8"]) {
            Walk::Value { slot, consumed } => {
                assert_eq!(consumed, 2);
                assert_eq!(slot.placeholder(), Some("<address>"));
            }
            other => panic!("unexpected walk result: {other:?}"),
        }
    }

    #[test]
    fn test_walk_invalid() {
        let tree = CommandTree::network();
        assert_eq!(
            tree.walk(&["set", "bogus"]),
            Walk::Invalid { index: 1 }
        );
        assert_eq!(tree.walk(&["save", "now"]), Walk::Invalid { index: 1 });
    }

    #[test]
    fn test_custom_tree() {
        let tree = CommandTree::new(
            NodeBuilder::branch()
                .terminal("alpha")
                .slot("beta", "<n>")
                .build(),
        );
        let names: Vec<&str> = tree.root().child_names().collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    #[should_panic(expected = "duplicate grammar token")]
    fn test_duplicate_token_rejected() {
        NodeBuilder::branch().terminal("a").terminal("a");
    }

    #[test]
    #[should_panic(expected = "invalid grammar token")]
    fn test_whitespace_token_rejected() {
        NodeBuilder::branch().terminal("show dns");
    }
}
