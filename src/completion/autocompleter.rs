//! Core autocompletion algorithm - lexical priority resolution
//!
//! The engine is a pure, single-step computation with two outcomes: success
//! with exactly one winning candidate, or an explicit failure. It holds no
//! state between calls and performs no I/O, so concurrent invocations are
//! independent by construction.

use crate::error::AutocompleteError;

/// Stateless autocompletion engine.
///
/// Resolves a typed prefix against a caller-supplied candidate set. The
/// candidate set is read-only for the duration of one call and is never
/// retained.
#[derive(Debug, Default, Clone, Copy)]
pub struct Autocompleter;

impl Autocompleter {
    /// Create a new autocompleter
    ///
    /// # Returns
    /// * `Self` - New autocompleter
    pub fn new() -> Self {
        Self
    }

    /// Resolve `prefix` to the single best completion among `candidates`.
    ///
    /// Matching is a literal, case-sensitive `starts_with` check; an empty
    /// prefix matches every candidate. Among all matches the engine always
    /// selects the lexicographically smallest one (byte order, which for
    /// UTF-8 strings equals code-point order), so the result never depends
    /// on the ordering of `candidates` and duplicates are harmless.
    ///
    /// Both arguments are required. Passing `None` for either is a caller
    /// contract violation and fails with [`AutocompleteError::InvalidArgument`],
    /// which is distinct from the expected runtime outcome
    /// [`AutocompleteError::NoMatch`] (no candidate starts with the prefix).
    ///
    /// # Arguments
    /// * `prefix` - User-typed input to complete, anchored at position 0
    /// * `candidates` - Candidate keywords, in any order
    ///
    /// # Returns
    /// * `Result<String, AutocompleteError>` - Winning candidate, verbatim
    pub fn autocomplete_with_lexical_priority(
        &self,
        prefix: Option<&str>,
        candidates: Option<&[String]>,
    ) -> Result<String, AutocompleteError> {
        let prefix =
            prefix.ok_or_else(|| AutocompleteError::InvalidArgument("prefix".to_string()))?;
        let candidates = candidates
            .ok_or_else(|| AutocompleteError::InvalidArgument("candidates".to_string()))?;

        candidates
            .iter()
            .filter(|candidate| candidate.starts_with(prefix))
            .min()
            .cloned()
            .ok_or(AutocompleteError::NoMatch)
    }
}
