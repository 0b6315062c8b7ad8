//! Indexed collections of enum entries.

use crate::entry::{Entry, ProtoEnum};
use log::debug;
use snafu::Snafu;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

mod api;
mod modify_api;

/// Key used to look up an entry in a [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupKey
{
    /// Numeric code of the source enum.
    Code(i32),

    /// Name of the source enum.
    Name(String),

    /// Plain value, rendered through its `Debug` representation.
    Plain(String),

    /// Description of an entry with [`MetaDesc`](crate::entry::MetaDesc) metadata.
    Desc(String),
}

impl LookupKey
{
    pub(crate) fn plain<B: fmt::Debug>(plain: &B) -> Self
    {
        LookupKey::Plain(format!("{:?}", plain))
    }
}

impl fmt::Display for LookupKey
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        match self {
            LookupKey::Code(code) => write!(f, "code {}", code),
            LookupKey::Name(name) => write!(f, "name '{}'", name),
            LookupKey::Plain(plain) => write!(f, "plain value {}", plain),
            LookupKey::Desc(desc) => write!(f, "description '{}'", desc),
        }
    }
}

/// Registry error type.
#[derive(Debug, Snafu, PartialEq)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum RegistryError
{
    /// An entry was passed that does not belong to the registry.
    #[snafu(display("Invalid argument: {}", reason))]
    InvalidArgument
    {
        /// Why the argument was rejected.
        reason: String,
    },

    /// Two entries share a code, a name or a plain value.
    #[snafu(display("Duplicate {}", key))]
    DuplicateKey
    {
        /// The key both entries share.
        key: LookupKey,
    },

    /// No entry matches the key.
    #[snafu(display("No entry with {}", key))]
    NotFound
    {
        /// Key that was looked up.
        key: LookupKey,
    },

    /// The default entry is not in a state that permits the operation.
    #[snafu(display("Invalid state: {}", reason))]
    InvalidState
    {
        /// Description of the violated precondition.
        reason: &'static str,
    },

    /// A lenient lookup missed and there is no default entry to fall back to.
    #[snafu(display("No default entry configured"))]
    NoDefaultConfigured,
}

/// Ordered collection of entries indexed by code, name and plain value.
///
/// The entries are fixed at construction. The only mutable state is the
/// default entry, which is returned by the lenient `get_by_*` lookups when
/// the key is missing. The first entry becomes the default on construction.
///
/// Lookups come in three flavours:
///
/// - `get_by_*` returns the default entry on a miss and fails with
///   [`RegistryError::NoDefaultConfigured`] if there is none.
/// - `must_get_by_*` fails with [`RegistryError::NotFound`] on a miss.
/// - `lookup_by_*` returns `None` on a miss.
#[derive(Debug, Clone)]
pub struct Registry<P, B, M = crate::entry::MetaNone>
{
    elements: Vec<Entry<P, B, M>>,
    by_code: HashMap<i32, usize>,
    by_name: HashMap<String, usize>,
    by_plain: HashMap<B, usize>,

    // Index into `elements`.
    default: Option<usize>,
    default_valid: Option<bool>,
}

impl<P, B, M> Registry<P, B, M>
where
    P: ProtoEnum,
    B: Eq + Hash + Clone + fmt::Debug,
{
    /// Build a registry from the entries.
    ///
    /// The entries keep their order. Fails with [`RegistryError::DuplicateKey`]
    /// if two entries share a code, a name or a plain value.
    pub fn new<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = Entry<P, B, M>>,
    {
        let entries = entries.into_iter();
        let capacity = entries.size_hint().0;
        let mut registry = Registry {
            elements: Vec::with_capacity(capacity),
            by_code: HashMap::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
            by_plain: HashMap::with_capacity(capacity),
            default: None,
            default_valid: None,
        };

        for entry in entries {
            registry.insert(entry)?;
        }

        if !registry.elements.is_empty() {
            registry.default = Some(0);
        }

        debug!(
            "Built enum registry with {} entries",
            registry.elements.len()
        );
        Ok(registry)
    }

    fn insert(&mut self, entry: Entry<P, B, M>) -> Result<(), RegistryError>
    {
        use std::collections::hash_map::Entry as Slot;

        let index = self.elements.len();
        let code = entry.code();
        let code_slot = self.by_code.entry(code);
        let name_slot = self.by_name.entry(entry.name().to_string());
        let plain_slot = self.by_plain.entry(entry.plain().clone());

        // Validate all three keys before touching any of the indices.
        let (code_slot, name_slot, plain_slot) = match (code_slot, name_slot, plain_slot) {
            (Slot::Occupied(..), _, _) => {
                return DuplicateKey {
                    key: LookupKey::Code(code),
                }
                .fail()
            }
            (_, Slot::Occupied(name), _) => {
                return DuplicateKey {
                    key: LookupKey::Name(name.key().clone()),
                }
                .fail()
            }
            (_, _, Slot::Occupied(plain)) => {
                return DuplicateKey {
                    key: LookupKey::plain(plain.key()),
                }
                .fail()
            }
            (Slot::Vacant(c), Slot::Vacant(n), Slot::Vacant(p)) => (c, n, p),
        };

        code_slot.insert(index);
        name_slot.insert(index);
        plain_slot.insert(index);
        self.elements.push(entry);

        Ok(())
    }
}
