pub type NodeId = usize;

/// One occurrence of an item on a root-to-leaf path.
///
/// Nodes live in the tree's arena and refer to each other by [`NodeId`].
/// `parent` is a back-pointer only; ownership runs root to leaves through
/// `children`.
#[derive(Debug, Clone)]
pub struct PrefixTreeNode<I> {
    pub(crate) item: Option<I>,
    pub(crate) frequency: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) in_conditional_tree: bool,
    pub(crate) detached: bool,
}

impl<I> PrefixTreeNode<I> {
    pub(crate) fn new_root() -> Self {
        Self {
            item: None,
            frequency: 0,
            parent: None,
            children: Vec::new(),
            in_conditional_tree: false,
            detached: false,
        }
    }

    pub(crate) fn new_item(item: I, frequency: usize, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            frequency,
            parent: Some(parent),
            children: Vec::new(),
            in_conditional_tree: false,
            detached: false,
        }
    }

    /// `None` for the root sentinel.
    pub fn item(&self) -> Option<&I> {
        self.item.as_ref()
    }

    pub fn frequency(&self) -> usize {
        self.frequency
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}
