//! # Exemption Registry
//!
//! Four skip sets over configuration keys, two per side of the comparison:
//!
//! | Side     | Exact        | Prefix        |
//! |----------|--------------|---------------|
//! | Code     | `code_exact` | `code_prefix` |
//! | Document | `doc_exact`  | `doc_prefix`  |
//!
//! A code-side exemption only silences "constant without document entry" reports, a
//! document-side exemption only silences "document entry without constant" reports.
//! Neither affects collision checks.
//!
//! Exact keys live in an [`FxHashSet`]; prefixes live in a character trie so a lookup costs
//! one walk over the candidate key no matter how many prefixes are registered.

use crate::error::ContractError;
use confdrift_domain::exemption::{ExemptionRule, MatchKind, Side};
use fxhash::{FxHashMap, FxHashSet};

#[derive(Debug, Clone, Default)]
struct PrefixTrie {
    root: TrieNode,
    len: usize,
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: FxHashMap<char, Self>,
    terminal: bool,
}

impl PrefixTrie {
    /// Returns `false` if the prefix was already present.
    fn insert(&mut self, prefix: &str) -> bool {
        let node =
            prefix.chars().fold(&mut self.root, |node, ch| node.children.entry(ch).or_default());
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.len += 1;
        true
    }

    /// Whether any registered prefix is a prefix of `key`.
    fn covers(&self, key: &str) -> bool {
        let mut node = &self.root;
        for ch in key.chars() {
            match node.children.get(&ch) {
                Some(next) if next.terminal => return true,
                Some(next) => node = next,
                None => return false,
            }
        }
        false
    }

    fn prefixes(&self) -> Vec<String> {
        fn walk(node: &TrieNode, path: &mut String, out: &mut Vec<String>) {
            if node.terminal {
                out.push(path.clone());
            }
            for (ch, child) in &node.children {
                path.push(*ch);
                walk(child, path, out);
                path.pop();
            }
        }

        let mut out = Vec::with_capacity(self.len);
        walk(&self.root, &mut String::new(), &mut out);
        out
    }
}

#[derive(Debug, Clone, Default)]
struct SideRules {
    exact: FxHashSet<String>,
    prefixes: PrefixTrie,
}

impl SideRules {
    fn covers(&self, key: &str) -> bool {
        self.exact.contains(key) || self.prefixes.covers(key)
    }

    fn len(&self) -> usize {
        self.exact.len() + self.prefixes.len
    }
}

/// The skip sets consulted by the comparison engine.
///
/// Always starts empty; rules are added one at a time during fixture initialization.
#[derive(Debug, Clone, Default)]
pub struct ExemptionRegistry {
    code: SideRules,
    document: SideRules,
}

impl ExemptionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignores `key` when it is declared in code but missing from the document.
    ///
    /// # Errors
    /// Returns [`ContractError::InvalidExemption`] for an empty key.
    pub fn add_code_exact(&mut self, key: impl Into<String>) -> Result<&mut Self, ContractError> {
        self.add(ExemptionRule::code_exact(key))
    }

    /// Ignores every code-side key starting with `prefix`.
    ///
    /// # Errors
    /// Returns [`ContractError::InvalidExemption`] for an empty prefix, which would match
    /// every key.
    pub fn add_code_prefix(
        &mut self,
        prefix: impl Into<String>,
    ) -> Result<&mut Self, ContractError> {
        self.add(ExemptionRule::code_prefix(prefix))
    }

    /// Ignores `key` when it is listed in the document but bound by no constant.
    ///
    /// # Errors
    /// Returns [`ContractError::InvalidExemption`] for an empty key.
    pub fn add_doc_exact(&mut self, key: impl Into<String>) -> Result<&mut Self, ContractError> {
        self.add(ExemptionRule::doc_exact(key))
    }

    /// Ignores every document-side key starting with `prefix`.
    ///
    /// # Errors
    /// Returns [`ContractError::InvalidExemption`] for an empty prefix.
    pub fn add_doc_prefix(
        &mut self,
        prefix: impl Into<String>,
    ) -> Result<&mut Self, ContractError> {
        self.add(ExemptionRule::doc_prefix(prefix))
    }

    /// Installs a tagged rule. Adding a rule that is already present is a no-op.
    ///
    /// # Errors
    /// Returns [`ContractError::InvalidExemption`] when the pattern is empty.
    pub fn add(&mut self, rule: ExemptionRule) -> Result<&mut Self, ContractError> {
        if rule.pattern.is_empty() {
            return Err(ContractError::InvalidExemption {
                message: format!("{} {} pattern cannot be empty", rule.side, kind_name(rule.kind))
                    .into(),
                context: (rule.kind == MatchKind::Prefix)
                    .then_some("An empty prefix would exempt every key".into()),
            });
        }

        let rules = self.side_mut(rule.side);
        let added = match rule.kind {
            MatchKind::Exact => rules.exact.insert(rule.pattern.clone()),
            MatchKind::Prefix => rules.prefixes.insert(&rule.pattern),
        };
        if !added {
            tracing::trace!(%rule, "Exemption already registered");
        }
        Ok(self)
    }

    /// Installs every rule, stopping at the first invalid one.
    ///
    /// # Errors
    /// Returns [`ContractError::InvalidExemption`] for the first rule with an empty pattern.
    pub fn extend<I>(&mut self, rules: I) -> Result<&mut Self, ContractError>
    where
        I: IntoIterator<Item = ExemptionRule>,
    {
        for rule in rules {
            self.add(rule)?;
        }
        Ok(self)
    }

    #[must_use]
    pub fn is_code_exact(&self, key: &str) -> bool {
        self.code.exact.contains(key)
    }

    #[must_use]
    pub fn is_code_prefixed(&self, key: &str) -> bool {
        self.code.prefixes.covers(key)
    }

    #[must_use]
    pub fn is_doc_exact(&self, key: &str) -> bool {
        self.document.exact.contains(key)
    }

    #[must_use]
    pub fn is_doc_prefixed(&self, key: &str) -> bool {
        self.document.prefixes.covers(key)
    }

    /// `key ∈ code_exact` or `key` starts with some code prefix.
    #[must_use]
    pub fn code_side_exempt(&self, key: &str) -> bool {
        self.code.covers(key)
    }

    /// `key ∈ doc_exact` or `key` starts with some document prefix.
    #[must_use]
    pub fn doc_side_exempt(&self, key: &str) -> bool {
        self.document.covers(key)
    }

    #[must_use]
    pub fn is_exempt(&self, side: Side, key: &str) -> bool {
        match side {
            Side::Code => self.code_side_exempt(key),
            Side::Document => self.doc_side_exempt(key),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.code.len() + self.document.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every registered rule, sorted by side, kind and pattern.
    #[must_use]
    pub fn rules(&self) -> Vec<ExemptionRule> {
        let mut rules = Vec::with_capacity(self.len());
        for (side, set) in [(Side::Code, &self.code), (Side::Document, &self.document)] {
            rules.extend(set.exact.iter().map(|key| ExemptionRule {
                side,
                kind: MatchKind::Exact,
                pattern: key.clone(),
            }));
            rules.extend(set.prefixes.prefixes().into_iter().map(|pattern| ExemptionRule {
                side,
                kind: MatchKind::Prefix,
                pattern,
            }));
        }
        rules.sort();
        rules
    }

    const fn side_mut(&mut self, side: Side) -> &mut SideRules {
        match side {
            Side::Code => &mut self.code,
            Side::Document => &mut self.document,
        }
    }
}

const fn kind_name(kind: MatchKind) -> &'static str {
    match kind {
        MatchKind::Exact => "exact",
        MatchKind::Prefix => "prefix",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trie_matches_registered_prefixes_only() {
        let mut trie = PrefixTrie::default();
        assert!(trie.insert("yarn.app.container"));
        assert!(trie.insert("yarn.nodemanager.resource.memory."));
        assert!(!trie.insert("yarn.app.container"));

        assert!(trie.covers("yarn.app.container"));
        assert!(trie.covers("yarn.app.container.log.dir"));
        assert!(trie.covers("yarn.nodemanager.resource.memory.enabled"));
        assert!(!trie.covers("yarn.app"));
        assert!(!trie.covers("yarn.nodemanager.resource.memory-mb"));
        assert_eq!(trie.len, 2);
    }

    #[test]
    fn nested_prefixes_are_both_listed() {
        let mut trie = PrefixTrie::default();
        trie.insert("yarn.timeline-service");
        trie.insert("yarn.timeline-service.");
        let mut prefixes = trie.prefixes();
        prefixes.sort();
        assert_eq!(prefixes, vec!["yarn.timeline-service", "yarn.timeline-service."]);
    }

    #[test]
    fn sides_do_not_leak_into_each_other() {
        let mut registry = ExemptionRegistry::new();
        registry.add_code_exact("yarn.resourcemanager.epoch").unwrap();
        registry.add_doc_prefix("hadoop.registry").unwrap();

        assert!(registry.code_side_exempt("yarn.resourcemanager.epoch"));
        assert!(!registry.doc_side_exempt("yarn.resourcemanager.epoch"));
        assert!(registry.doc_side_exempt("hadoop.registry.zk.root"));
        assert!(!registry.code_side_exempt("hadoop.registry.zk.root"));

        assert!(registry.is_exempt(Side::Code, "yarn.resourcemanager.epoch"));
        assert!(!registry.is_exempt(Side::Document, "yarn.resourcemanager.epoch"));
        assert!(registry.is_exempt(Side::Document, "hadoop.registry.zk.root"));
        assert!(!registry.is_exempt(Side::Code, "hadoop.registry.zk.root"));
    }

    #[test]
    fn empty_patterns_are_rejected() {
        let mut registry = ExemptionRegistry::new();
        let err = registry.add_code_prefix("").unwrap_err();
        assert!(matches!(err, ContractError::InvalidExemption { context: Some(_), .. }));
        assert!(matches!(
            registry.add_doc_exact(""),
            Err(ContractError::InvalidExemption { context: None, .. })
        ));
        assert!(registry.is_empty());
    }
}
