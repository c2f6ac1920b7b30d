//! Scope tracking for the semantic pass
//!
//! An ordered stack of name-to-entry maps, global scope first, innermost
//! scope last. The stack is owned by exactly one in-flight checker and is
//! never shared, so there is no locking.

use std::collections::HashMap;

use super::entry::Entry;

/// Stack of lexical scopes.
///
/// Invariant: non-empty for the whole of a compilation-unit walk and exactly
/// empty immediately after it completes. Only the checker may empty it.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<HashMap<String, Entry>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new innermost scope
    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Close the innermost scope, discarding its entries.
    ///
    /// Panics if the stack is already empty: that is a push/pop pairing
    /// defect in the traversal, not a user-facing condition.
    pub fn pop_scope(&mut self) {
        self.scopes
            .pop()
            .expect("pop_scope on an empty scope stack");
    }

    /// Declare an entry in the innermost scope.
    ///
    /// Returns `false` if the name already exists there. Shadowing a name
    /// from an outer scope is legal and always succeeds.
    pub fn declare(&mut self, entry: Entry) -> bool {
        let scope = self
            .scopes
            .last_mut()
            .expect("declare with no open scope");
        if scope.contains_key(&entry.name) {
            return false;
        }
        scope.insert(entry.name.clone(), entry);
        true
    }

    /// Innermost-first lookup across the whole stack; first match wins
    pub fn resolve(&self, name: &str) -> Option<&Entry> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Lookup in the global scope only
    pub fn resolve_global(&self, name: &str) -> Option<&Entry> {
        self.scopes.first()?.get(name)
    }

    /// Whether the innermost scope already holds `name`
    pub fn current_contains(&self, name: &str) -> bool {
        self.scopes
            .last()
            .map_or(false, |scope| scope.contains_key(name))
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::entry::SyType;

    #[test]
    fn test_push_pop_balance() {
        let mut scopes = ScopeStack::new();
        assert_eq!(scopes.depth(), 0);
        scopes.push_scope();
        scopes.push_scope();
        assert_eq!(scopes.depth(), 2);
        scopes.pop_scope();
        scopes.pop_scope();
        assert!(scopes.is_empty());
    }

    #[test]
    #[should_panic(expected = "pop_scope on an empty scope stack")]
    fn test_pop_on_empty_stack_panics() {
        let mut scopes = ScopeStack::new();
        scopes.pop_scope();
    }

    #[test]
    fn test_duplicate_in_same_scope_is_rejected() {
        let mut scopes = ScopeStack::new();
        scopes.push_scope();
        assert!(scopes.declare(Entry::variable("x", SyType::Int)));
        assert!(!scopes.declare(Entry::variable("x", SyType::Float)));
        // the first declaration stays authoritative
        assert_eq!(scopes.resolve("x").unwrap().ty, SyType::Int);
    }

    #[test]
    fn test_shadowing_resolves_innermost_first() {
        let mut scopes = ScopeStack::new();
        scopes.push_scope();
        assert!(scopes.declare(Entry::variable("x", SyType::Int)));

        scopes.push_scope();
        assert!(scopes.declare(Entry::variable("x", SyType::Float)));
        assert_eq!(scopes.resolve("x").unwrap().ty, SyType::Float);

        scopes.pop_scope();
        assert_eq!(scopes.resolve("x").unwrap().ty, SyType::Int);
    }

    #[test]
    fn test_global_lookup_ignores_inner_scopes() {
        let mut scopes = ScopeStack::new();
        scopes.push_scope();
        scopes.declare(Entry::variable("g", SyType::Int));
        scopes.push_scope();
        scopes.declare(Entry::variable("local", SyType::Float));

        assert!(scopes.resolve_global("g").is_some());
        assert!(scopes.resolve_global("local").is_none());
        assert!(scopes.resolve("local").is_some());
    }
}
