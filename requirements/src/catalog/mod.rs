//! The fixed catalog of named requirements and region nodes.
//!
//! Identifiers share one namespace. Entries refer to each other with
//! `req("id")`; the registry resolves those references when it is built.

mod abilities;
mod access;
mod bosses;
mod items;
mod keys;
mod modes;
mod nodes;

use crate::requirement::Requirement;

/// Whether an entry is a plain requirement or a region reachability node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Requirement,
    Node,
}

/// A named catalog entry.
#[derive(Debug, Clone)]
pub struct Definition {
    pub id: &'static str,
    pub kind: DefinitionKind,
    pub requirement: Requirement,
}

pub(crate) fn requirement(id: &'static str, requirement: Requirement) -> Definition {
    Definition {
        id,
        kind: DefinitionKind::Requirement,
        requirement,
    }
}

pub(crate) fn node(id: &'static str, requirement: Requirement) -> Definition {
    Definition {
        id,
        kind: DefinitionKind::Node,
        requirement,
    }
}

/// Every definition of the tracker catalog.
pub fn definitions() -> Vec<Definition> {
    let mut definitions = Vec::new();
    definitions.extend(items::definitions());
    definitions.extend(modes::definitions());
    definitions.extend(keys::definitions());
    definitions.extend(abilities::definitions());
    definitions.extend(bosses::definitions());
    definitions.extend(nodes::definitions());
    definitions.extend(access::definitions());
    definitions
}
