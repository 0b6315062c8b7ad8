use super::*;
use crate::entry::MetaDesc;
use log::trace;
use snafu::OptionExt;

impl<P, B, M> Registry<P, B, M>
where
    P: ProtoEnum,
    B: Eq + Hash + fmt::Debug,
{
    /// Number of entries.
    pub fn len(&self) -> usize
    {
        self.elements.len()
    }

    /// True, if the registry has no entries.
    pub fn is_empty(&self) -> bool
    {
        self.elements.is_empty()
    }

    /// Iterates the entries in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<P, B, M>>
    {
        self.elements.iter()
    }

    /// True, if an entry with the code exists.
    pub fn contains_code(&self, code: i32) -> bool
    {
        self.by_code.contains_key(&code)
    }

    /// Gets an entry by code without falling back to the default.
    pub fn lookup_by_code(&self, code: i32) -> Option<&Entry<P, B, M>>
    {
        self.by_code.get(&code).map(|idx| &self.elements[*idx])
    }

    /// Gets an entry by name without falling back to the default.
    pub fn lookup_by_name(&self, name: &str) -> Option<&Entry<P, B, M>>
    {
        self.by_name.get(name).map(|idx| &self.elements[*idx])
    }

    /// Gets an entry by plain value without falling back to the default.
    pub fn lookup_by_plain(&self, plain: &B) -> Option<&Entry<P, B, M>>
    {
        self.by_plain.get(plain).map(|idx| &self.elements[*idx])
    }

    /// Gets an entry by source value without falling back to the default.
    ///
    /// The source value is matched by its code.
    pub fn lookup_by_source(&self, source: &P) -> Option<&Entry<P, B, M>>
    {
        self.lookup_by_code(source.number())
    }

    /// Gets an entry by code, failing if it does not exist.
    pub fn must_get_by_code(&self, code: i32) -> Result<&Entry<P, B, M>, RegistryError>
    {
        self.lookup_by_code(code).context(NotFound {
            key: LookupKey::Code(code),
        })
    }

    /// Gets an entry by name, failing if it does not exist.
    pub fn must_get_by_name(&self, name: &str) -> Result<&Entry<P, B, M>, RegistryError>
    {
        self.lookup_by_name(name).context(NotFound {
            key: LookupKey::Name(name.to_string()),
        })
    }

    /// Gets an entry by plain value, failing if it does not exist.
    pub fn must_get_by_plain(&self, plain: &B) -> Result<&Entry<P, B, M>, RegistryError>
    {
        self.lookup_by_plain(plain).context(NotFound {
            key: LookupKey::plain(plain),
        })
    }

    /// Gets an entry by source value, failing if it does not exist.
    pub fn must_get_by_source(&self, source: &P) -> Result<&Entry<P, B, M>, RegistryError>
    {
        self.must_get_by_code(source.number())
    }

    /// Gets an entry by code or the default entry.
    pub fn get_by_code(&self, code: i32) -> Result<&Entry<P, B, M>, RegistryError>
    {
        self.or_default(self.lookup_by_code(code), || LookupKey::Code(code))
    }

    /// Gets an entry by name or the default entry.
    pub fn get_by_name(&self, name: &str) -> Result<&Entry<P, B, M>, RegistryError>
    {
        self.or_default(self.lookup_by_name(name), || {
            LookupKey::Name(name.to_string())
        })
    }

    /// Gets an entry by plain value or the default entry.
    pub fn get_by_plain(&self, plain: &B) -> Result<&Entry<P, B, M>, RegistryError>
    {
        self.or_default(self.lookup_by_plain(plain), || LookupKey::plain(plain))
    }

    /// Gets an entry by source value or the default entry.
    pub fn get_by_source(&self, source: &P) -> Result<&Entry<P, B, M>, RegistryError>
    {
        self.get_by_code(source.number())
    }

    /// Gets the default entry.
    pub fn get_default(&self) -> Result<&Entry<P, B, M>, RegistryError>
    {
        self.default
            .map(|idx| &self.elements[idx])
            .context(NoDefaultConfigured)
    }

    /// Gets the source value of the default entry.
    pub fn get_default_source(&self) -> Result<&P, RegistryError>
    {
        self.get_default().map(Entry::source)
    }

    /// Gets the plain value of the default entry.
    pub fn get_default_plain(&self) -> Result<&B, RegistryError>
    {
        self.get_default().map(Entry::plain)
    }

    /// True, if the default entry has been marked valid.
    ///
    /// Valid default entries are included by `list_valid_sources` and
    /// `list_valid_plains`.
    pub fn is_default_valid(&self) -> bool
    {
        self.default.is_some() && self.default_valid == Some(true)
    }

    /// Lists the source values in declaration order.
    pub fn list_sources(&self) -> Vec<P>
    where
        P: Clone,
    {
        self.elements.iter().map(|e| e.source().clone()).collect()
    }

    /// Lists the plain values in declaration order.
    pub fn list_plains(&self) -> Vec<B>
    where
        B: Clone,
    {
        self.elements.iter().map(|e| e.plain().clone()).collect()
    }

    /// Lists the source values in declaration order, leaving out the default
    /// entry unless it has been marked valid.
    pub fn list_valid_sources(&self) -> Vec<P>
    where
        P: Clone,
    {
        self.iter_valid().map(|e| e.source().clone()).collect()
    }

    /// Lists the plain values in declaration order, leaving out the default
    /// entry unless it has been marked valid.
    pub fn list_valid_plains(&self) -> Vec<B>
    where
        B: Clone,
    {
        self.iter_valid().map(|e| e.plain().clone()).collect()
    }

    fn iter_valid(&self) -> impl Iterator<Item = &Entry<P, B, M>>
    {
        // The default is identified by its code.
        let excluded = match self.default {
            Some(idx) if !self.is_default_valid() => Some(self.elements[idx].code()),
            _ => None,
        };
        self.elements
            .iter()
            .filter(move |e| Some(e.code()) != excluded)
    }

    fn or_default<'a, F>(
        &'a self,
        found: Option<&'a Entry<P, B, M>>,
        key: F,
    ) -> Result<&'a Entry<P, B, M>, RegistryError>
    where
        F: FnOnce() -> LookupKey,
    {
        match found {
            Some(entry) => Ok(entry),
            None => {
                let default = self.get_default()?;
                trace!("No entry with {}, using default '{}'", key(), default.name());
                Ok(default)
            }
        }
    }
}

impl<P, B> Registry<P, B, MetaDesc>
where
    P: ProtoEnum,
    B: Eq + Hash + fmt::Debug,
{
    /// Gets the first entry with the description without falling back to the default.
    pub fn lookup_by_desc(&self, desc: &str) -> Option<&Entry<P, B, MetaDesc>>
    {
        self.elements.iter().find(|e| e.desc() == desc)
    }

    /// Gets an entry by description, failing if it does not exist.
    pub fn must_get_by_desc(&self, desc: &str) -> Result<&Entry<P, B, MetaDesc>, RegistryError>
    {
        self.lookup_by_desc(desc).context(NotFound {
            key: LookupKey::Desc(desc.to_string()),
        })
    }

    /// Gets an entry by description or the default entry.
    pub fn get_by_desc(&self, desc: &str) -> Result<&Entry<P, B, MetaDesc>, RegistryError>
    {
        self.or_default(self.lookup_by_desc(desc), || {
            LookupKey::Desc(desc.to_string())
        })
    }
}

impl<'a, P, B, M> IntoIterator for &'a Registry<P, B, M>
{
    type Item = &'a Entry<P, B, M>;
    type IntoIter = std::slice::Iter<'a, Entry<P, B, M>>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.elements.iter()
    }
}
