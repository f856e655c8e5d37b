//! Key-name resolution.

use super::table;
use crate::backend::KeyId;
use crate::command::CommandError;
use log::{trace, warn};
use std::collections::HashMap;

/// Resolves key names to platform key identifiers.
///
/// Lookup order: the static table, then configured aliases, then the
/// single-character fallback. The fallback maps a lone character to the
/// code point of its uppercase form. That lines up with the platform's
/// virtual keys for ASCII letters and digits only; for other characters
/// it yields whatever identifier shares that number. This is kept as-is.
#[derive(Debug, Clone, Default)]
pub struct KeyResolver {
    aliases: HashMap<String, KeyId>,
}

impl KeyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with extra aliases; names are matched case-insensitively.
    pub fn with_aliases<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = (S, KeyId)>,
        S: AsRef<str>,
    {
        let aliases = aliases
            .into_iter()
            .map(|(name, id)| (name.as_ref().to_lowercase(), id))
            .collect();
        Self { aliases }
    }

    pub fn resolve(&self, name: &str) -> Result<KeyId, CommandError> {
        if let Some(id) = table::lookup(name) {
            return Ok(id);
        }
        if let Some(&id) = self.aliases.get(&name.to_lowercase()) {
            trace!("key '{}' resolved via alias -> 0x{:02X}", name, id);
            return Ok(id);
        }
        single_char_fallback(name).ok_or_else(|| CommandError::UnknownKey(name.to_string()))
    }
}

fn single_char_fallback(name: &str) -> Option<KeyId> {
    let mut chars = name.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let mut upper = c.to_uppercase();
    let upper = if upper.len() == 1 { upper.next().unwrap_or(c) } else { c };
    let id = KeyId::try_from(u32::from(upper)).ok()?;

    if !upper.is_ascii_alphanumeric() {
        warn!("key '{}' not in table, using character code 0x{:02X}", name, id);
    }
    Some(id)
}
