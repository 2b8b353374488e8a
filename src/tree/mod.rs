//! Tree entities: a plain AVL tree (`avl.rs`), a balanced threaded tree
//! built in one shot from a sorted sequence (`threaded.rs`), its
//! structural dump/load (`serde_tree.rs`), and the shared arena storage
//! both tree kinds sit on (`node.rs`).

mod avl;
mod node;
mod serde_tree;
mod threaded;

pub use avl::AvlTree;
pub use node::{Arena, Node, NodeId};
pub use serde_tree::{dump, dump_to_json, load, load_from_json, DumpedNode, DumpedTree};
pub use threaded::ThreadedBinTree;
