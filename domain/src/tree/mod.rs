//! Report trees
//!
//! Each general records every report it receives in an [`OrderTree`],
//! keyed by the relay path the report travelled. Resolving the tree
//! bottom-up with [`SelfVote`]-controlled majority is the OM(m) decision rule.
//!
//! ```text
//!   root  ← value the commander told me directly       path [0]
//!   ├── 1 ← what lieutenant 1 says the commander said  path [0,1]
//!   │   └── 2 ← what 2 says 1 said                     path [0,1,2]
//!   └── 2 ← what lieutenant 2 says the commander said  path [0,2]
//!       └── 1                                          path [0,2,1]
//! ```

pub mod node;
pub mod order_tree;
pub mod rule;

pub use node::OrderNode;
pub use order_tree::OrderTree;
pub use rule::{SelfVote, VoteTally};
