//! Submission-time validation of a task's runtime attributes against one backend.
//!
//! The validator resolves every declared name through [`RuntimeKey::lookup`] and then applies the backend's view of the table:
//! - unrecognized names fail the submission;
//! - recognized keys the backend does not support fail the submission, or are logged and dropped in lenient mode;
//! - keys the backend marks as mandatory must all be declared.
use std::collections::BTreeMap;

use rtattr_model::{BackendKind, RuntimeKey};
use tracing::{debug, instrument, trace, warn};

use crate::error::{CoreError, CoreResult};

/// Outcome of a successful validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedAttributes {
    /// Keys the backend recognizes, in declaration order.
    pub accepted: Vec<RuntimeKey>,
    /// Keys the backend does not recognize; always empty unless the validator is lenient.
    pub ignored: Vec<RuntimeKey>,
}

impl ValidatedAttributes {
    /// Returns `true` if `key` was accepted.
    pub fn contains(&self, key: RuntimeKey) -> bool {
        self.accepted.contains(&key)
    }
}

/// Validates runtime attribute names for a single backend kind.
///
/// Strict by default: a key the backend does not support is a configuration error.
#[derive(Debug, Clone, Copy)]
pub struct AttributeValidator {
    backend: BackendKind,
    lenient: bool,
}

impl AttributeValidator {
    #[inline]
    pub fn new(backend: BackendKind) -> Self {
        Self {
            backend,
            lenient: false,
        }
    }

    /// Drop unsupported keys with a warning instead of failing.
    #[inline]
    pub fn lenient(mut self) -> Self {
        self.lenient = true;
        self
    }

    #[inline]
    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    /// Validate the attribute names a task declares.
    ///
    /// Fails on the first unrecognized name, then with every unsupported key at once, then with every missing mandatory key at once.
    #[instrument(level = "debug", skip(self, names), fields(backend = %self.backend, lenient = self.lenient))]
    pub fn validate<I, S>(&self, names: I) -> CoreResult<ValidatedAttributes>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = names
            .into_iter()
            .map(|name| RuntimeKey::lookup(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        self.classify(keys)
    }

    /// Validate `(name, value)` pairs and keep the ones the backend accepts.
    ///
    /// Values are passed through untouched. When a key is declared more than once, the first value wins.
    #[instrument(level = "debug", skip(self, attrs), fields(backend = %self.backend, lenient = self.lenient))]
    pub fn validate_map<I, K, V>(&self, attrs: I) -> CoreResult<BTreeMap<RuntimeKey, V>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        let mut resolved = Vec::new();
        for (name, value) in attrs {
            resolved.push((RuntimeKey::lookup(name.as_ref())?, value));
        }

        let outcome = self.classify(resolved.iter().map(|(key, _)| *key))?;

        let mut out = BTreeMap::new();
        for (key, value) in resolved {
            if outcome.contains(key) {
                out.entry(key).or_insert(value);
            }
        }
        Ok(out)
    }

    fn classify<I>(&self, keys: I) -> CoreResult<ValidatedAttributes>
    where
        I: IntoIterator<Item = RuntimeKey>,
    {
        let mut outcome = ValidatedAttributes::default();

        for key in keys {
            if outcome.accepted.contains(&key) || outcome.ignored.contains(&key) {
                trace!(%key, "duplicate runtime attribute");
                continue;
            }
            match key.requirement(self.backend) {
                Some(req) => {
                    debug!(%key, mandatory = req.is_mandatory(), "runtime attribute accepted");
                    outcome.accepted.push(key);
                }
                None => {
                    if self.lenient {
                        warn!(%key, backend = %self.backend, "runtime attribute is not supported by backend and will be ignored");
                    }
                    outcome.ignored.push(key);
                }
            }
        }

        if !self.lenient && !outcome.ignored.is_empty() {
            return Err(CoreError::Unsupported {
                backend: self.backend,
                keys: outcome.ignored,
            });
        }

        let missing: Vec<_> = RuntimeKey::mandatory_on(self.backend)
            .filter(|key| !outcome.contains(*key))
            .collect();
        if !missing.is_empty() {
            return Err(CoreError::MissingMandatory {
                backend: self.backend,
                keys: missing,
            });
        }

        Ok(outcome)
    }
}
