//! Enum entries binding a protobuf enum value to a native value and metadata.

/// Enum-like values that can be wrapped in an [`Entry`].
///
/// Implemented by protobuf enum types, either generated ones or the runtime
/// [`SchemaValue`](crate::schema::SchemaValue).
pub trait ProtoEnum
{
    /// Enum value name as declared in the schema.
    fn name(&self) -> &str;

    /// Numeric value used on the wire.
    fn number(&self) -> i32;
}

impl<T: ProtoEnum + ?Sized> ProtoEnum for &T
{
    fn name(&self) -> &str
    {
        (**self).name()
    }

    fn number(&self) -> i32
    {
        (**self).number()
    }
}

/// Metadata for entries without any description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MetaNone;

/// Metadata carrying a single human readable description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MetaDesc
{
    description: String,
}

impl MetaDesc
{
    /// Create a new description.
    pub fn new(description: impl Into<String>) -> Self
    {
        Self {
            description: description.into(),
        }
    }

    /// The description text.
    pub fn desc(&self) -> &str
    {
        &self.description
    }
}

/// A protobuf enum value together with its native counterpart and metadata.
///
/// Entries are immutable once created. The native ("plain") value is what
/// business logic should match on, while the source value is what goes on
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry<P, B, M = MetaNone>
{
    source: P,
    plain: B,
    meta: M,
}

impl<P: ProtoEnum, B> Entry<P, B, MetaNone>
{
    /// Create an entry without metadata.
    pub fn new(source: P, plain: B) -> Self
    {
        Entry {
            source,
            plain,
            meta: MetaNone,
        }
    }
}

impl<P: ProtoEnum, B> Entry<P, B, MetaDesc>
{
    /// Create an entry with a description.
    pub fn with_desc(source: P, plain: B, description: impl Into<String>) -> Self
    {
        Entry {
            source,
            plain,
            meta: MetaDesc::new(description),
        }
    }

    /// The description of the entry.
    pub fn desc(&self) -> &str
    {
        self.meta.desc()
    }
}

impl<P: ProtoEnum, B, M> Entry<P, B, M>
{
    /// Create an entry with custom metadata.
    pub fn with_meta(source: P, plain: B, meta: M) -> Self
    {
        Entry {
            source,
            plain,
            meta,
        }
    }

    /// The wrapped protobuf enum value.
    pub fn source(&self) -> &P
    {
        &self.source
    }

    /// Numeric code of the source value.
    pub fn code(&self) -> i32
    {
        self.source.number()
    }

    /// Name of the source value.
    pub fn name(&self) -> &str
    {
        self.source.name()
    }

    /// The native enum value.
    pub fn plain(&self) -> &B
    {
        &self.plain
    }

    /// Entry metadata.
    pub fn meta(&self) -> &M
    {
        &self.meta
    }
}
