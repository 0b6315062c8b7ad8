use super::*;
use snafu::{ensure, OptionExt};

impl<P, B, M> Registry<P, B, M>
where
    P: ProtoEnum,
    B: Eq + Hash + fmt::Debug,
{
    /// Set the default entry.
    ///
    /// Fails if a default entry already exists; use [`unset_default`](Self::unset_default)
    /// first to replace it. The entry must be one of the registry entries.
    pub fn set_default(&mut self, entry: &Entry<P, B, M>) -> Result<(), RegistryError>
    {
        ensure!(
            self.default.is_none(),
            InvalidState {
                reason: "default entry is already set",
            }
        );

        let code = entry.code();
        let idx = *self.by_code.get(&code).context(NotFound {
            key: LookupKey::Code(code),
        })?;

        let member = &self.elements[idx];
        ensure!(
            member.name() == entry.name() && member.plain() == entry.plain(),
            InvalidArgument {
                reason: format!(
                    "entry '{}' ({:?}) is not the registered entry '{}' ({:?}) for code {}",
                    entry.name(),
                    entry.plain(),
                    member.name(),
                    member.plain(),
                    code
                ),
            }
        );

        self.replace_default(idx)
    }

    /// Set the default entry by code.
    pub fn set_default_by_code(&mut self, code: i32) -> Result<(), RegistryError>
    {
        let idx = *self.by_code.get(&code).context(NotFound {
            key: LookupKey::Code(code),
        })?;
        self.replace_default(idx)
    }

    /// Set the default entry by name.
    pub fn set_default_by_name(&mut self, name: &str) -> Result<(), RegistryError>
    {
        let idx = *self.by_name.get(name).context(NotFound {
            key: LookupKey::Name(name.to_string()),
        })?;
        self.replace_default(idx)
    }

    /// Set the default entry by plain value.
    pub fn set_default_by_plain(&mut self, plain: &B) -> Result<(), RegistryError>
    {
        let idx = *self.by_plain.get(plain).context(NotFound {
            key: LookupKey::plain(plain),
        })?;
        self.replace_default(idx)
    }

    /// Set the default entry by source value.
    pub fn set_default_by_source(&mut self, source: &P) -> Result<(), RegistryError>
    {
        self.set_default_by_code(source.number())
    }

    /// Mark whether the default entry counts as a valid entry in the
    /// `list_valid_*` listings.
    ///
    /// Fails if there is no default entry or if the validity has already been set.
    pub fn set_default_valid(&mut self, valid: bool) -> Result<(), RegistryError>
    {
        ensure!(
            self.default.is_some(),
            InvalidState {
                reason: "no default entry is set",
            }
        );
        ensure!(
            self.default_valid.is_none(),
            InvalidState {
                reason: "default validity is already set",
            }
        );

        debug!("Default entry marked valid: {}", valid);
        self.default_valid = Some(valid);
        Ok(())
    }

    /// Remove the default entry.
    ///
    /// Lenient lookups fail with [`RegistryError::NoDefaultConfigured`] on a miss
    /// until a new default is set.
    pub fn unset_default(&mut self) -> Result<(), RegistryError>
    {
        let idx = self.default.context(InvalidState {
            reason: "no default entry is set",
        })?;

        debug!("Unset default entry '{}'", self.elements[idx].name());
        self.default = None;
        self.default_valid = None;
        Ok(())
    }

    /// Set the default entry, consuming and returning the registry.
    pub fn with_default(mut self, entry: &Entry<P, B, M>) -> Result<Self, RegistryError>
    {
        self.set_default(entry)?;
        Ok(self)
    }

    /// Set the default entry by code, consuming and returning the registry.
    pub fn with_default_by_code(mut self, code: i32) -> Result<Self, RegistryError>
    {
        self.set_default_by_code(code)?;
        Ok(self)
    }

    /// Set the default entry by name, consuming and returning the registry.
    pub fn with_default_by_name(mut self, name: &str) -> Result<Self, RegistryError>
    {
        self.set_default_by_name(name)?;
        Ok(self)
    }

    /// Set the default entry by plain value, consuming and returning the registry.
    pub fn with_default_by_plain(mut self, plain: &B) -> Result<Self, RegistryError>
    {
        self.set_default_by_plain(plain)?;
        Ok(self)
    }

    /// Set the default entry by source value, consuming and returning the registry.
    pub fn with_default_by_source(mut self, source: &P) -> Result<Self, RegistryError>
    {
        self.set_default_by_source(source)?;
        Ok(self)
    }

    /// Mark the default entry validity, consuming and returning the registry.
    pub fn with_default_valid(mut self, valid: bool) -> Result<Self, RegistryError>
    {
        self.set_default_valid(valid)?;
        Ok(self)
    }

    /// Remove the default entry, consuming and returning the registry.
    pub fn with_unset_default(mut self) -> Result<Self, RegistryError>
    {
        self.unset_default()?;
        Ok(self)
    }

    fn replace_default(&mut self, idx: usize) -> Result<(), RegistryError>
    {
        ensure!(
            self.default.is_none(),
            InvalidState {
                reason: "default entry is already set",
            }
        );

        debug!("Set default entry '{}'", self.elements[idx].name());
        self.default = Some(idx);
        self.default_valid = None;
        Ok(())
    }
}
