//! The GMOD catalog: a DAG of ~20,000 equipment-taxonomy nodes, plus
//! [`GmodPath`] short-form parsing and rendering over it.
//!
//! [`Gmod`] owns every node, keyed by code; a [`GmodNode`] only references
//! its neighbours by code, since the catalog is a DAG rather than a tree
//! and a node can sit under more than one parent. [`GmodPath`] resolves a
//! short-form string (e.g. `"411.1/C101.31-2"`) into a rooted chain of
//! owned node clones, propagating location qualifiers across contiguous
//! individualizable spans via [`LocationSetsVisitor`].

mod error;
mod gmod;
mod node;
mod path;

pub use error::GmodError;
pub use gmod::{Gmod, TraversalControl, TraversalOptions};
pub use node::GmodNode;
pub use path::{GmodPath, LocationSetsVisitor};
