//! Enum values parsed from proto-files at runtime.
//!
//! Generated protobuf enums implement [`ProtoEnum`] through a small trait impl. When
//! no generated code is available the enum declarations can be read from the
//! `.proto` sources instead:
//!
//! ```
//! use protoenum::schema::Schema;
//! use protoenum::ProtoEnum;
//!
//! let schema = Schema::parse(&[r#"
//!   syntax = "proto3";
//!   package fish;
//!
//!   enum Kind {
//!     KIND_UNKNOWN = 0;
//!     KIND_PERCH = 1;
//!     KIND_PIKE = 2;
//!   }
//! "#]).unwrap();
//!
//! let kind = schema.get_enum("fish.Kind").unwrap();
//! let registry = kind.to_registry(|v| v.number() * 10).unwrap();
//! assert_eq!(registry.get_by_plain(&20).unwrap().name(), "KIND_PIKE");
//! ```

use crate::entry::{Entry, ProtoEnum};
use crate::registry::{Registry, RegistryError};
use log::debug;
use snafu::{ResultExt, Snafu};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

mod parse;

/// Schema parsing error.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum ParseError
{
    /// Syntax error in the input files.
    #[snafu(display("Parsing error: {}", source))]
    SyntaxError
    {
        /// Source error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The same enum is declared twice.
    #[snafu(display("Duplicate enum: {}", name))]
    DuplicateEnum
    {
        /// Full name of the enum.
        name: String,
    },

    /// Enum value that doesn't fit in `int32`.
    #[snafu(display("Value '{}' of {} is out of range", value, name))]
    ValueOutOfRange
    {
        /// Full name of the enum value.
        name: String,

        /// The literal as written in the file.
        value: String,
    },
}

/// Enum declarations read from proto-files.
#[derive(Debug, Default, PartialEq)]
pub struct Schema
{
    enums: Vec<EnumSchema>,
    enums_by_name: HashMap<String, usize>,
}

/// A single `enum` declaration.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct EnumSchema
{
    /// Enum name.
    pub name: String,

    /// Full enum name, including package and parent message names.
    pub full_name: String,

    /// Values in declaration order.
    pub values: Vec<SchemaValue>,
}

/// An enum value declared in a proto-file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaValue
{
    name: String,
    number: i32,
}

impl Schema
{
    /// Gets an enum by its full name.
    pub fn get_enum(&self, full_name: &str) -> Option<&EnumSchema>
    {
        self.enums_by_name
            .get(full_name)
            .map(|idx| &self.enums[*idx])
    }

    /// Iterates the enums in declaration order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumSchema>
    {
        self.enums.iter()
    }

    fn insert(&mut self, e: EnumSchema) -> Result<(), ParseError>
    {
        use std::collections::hash_map::Entry as Slot;

        match self.enums_by_name.entry(e.full_name.clone()) {
            Slot::Occupied(..) => DuplicateEnum { name: e.full_name }.fail(),
            Slot::Vacant(vacant) => {
                vacant.insert(self.enums.len());
                self.enums.push(e);
                Ok(())
            }
        }
    }
}

impl EnumSchema
{
    /// Gets a value by name.
    pub fn get_value(&self, name: &str) -> Option<&SchemaValue>
    {
        self.values.iter().find(|v| v.name == name)
    }

    /// Builds a registry of the values, mapping each one to a plain value.
    ///
    /// Aliased values (`allow_alias`) fail with a duplicate code.
    pub fn to_registry<B, F>(&self, mut plain: F) -> Result<Registry<SchemaValue, B>, RegistryError>
    where
        B: Eq + Hash + Clone + fmt::Debug,
        F: FnMut(&SchemaValue) -> B,
    {
        Registry::new(
            self.values
                .iter()
                .map(|v| Entry::new(v.clone(), plain(v))),
        )
    }
}

impl SchemaValue
{
    /// Create a new value.
    pub fn new(name: impl Into<String>, number: i32) -> Self
    {
        Self {
            name: name.into(),
            number,
        }
    }
}

impl ProtoEnum for SchemaValue
{
    fn name(&self) -> &str
    {
        &self.name
    }

    fn number(&self) -> i32
    {
        self.number
    }
}

impl fmt::Display for SchemaValue
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod test
{
    use super::*;

    #[test]
    fn nested_enums_are_qualified()
    {
        let schema = Schema::parse(&[r#"
            syntax = "proto3";
            package Outer;

            message Message {
                string name = 1;
                oneof choice {
                    int32 a = 2;
                    int32 b = 3;
                }
                enum Inner {
                    INNER_NONE = 0;
                    INNER_SOME = 1;
                }
                message Deeper {
                    enum Deepest { DEEPEST_ZERO = 0; }
                }
            }
        "#])
        .unwrap();

        let names: Vec<_> = schema.enums().map(|e| e.full_name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Outer.Message.Inner", "Outer.Message.Deeper.Deepest"]
        );

        let inner = schema.get_enum("Outer.Message.Inner").unwrap();
        assert_eq!(inner.name, "Inner");
        assert_eq!(inner.values.len(), 2);
    }

    #[test]
    fn literals()
    {
        let schema = Schema::parse(&[r#"
            enum Literal {
                option allow_alias = true;
                ZERO = 0;
                HEX = 0x1F;
                OCTAL = 017;
                NEGATIVE = -5 [deprecated = true];
                POSITIVE = +7;
                reserved 100 to 200;
                MIN = -2147483648;
            }
        "#])
        .unwrap();

        let e = schema.get_enum("Literal").unwrap();
        let numbers: Vec<_> = e.values.iter().map(|v| v.number()).collect();
        assert_eq!(numbers, vec![0, 31, 15, -5, 7, i32::MIN]);
    }

    #[test]
    fn out_of_range()
    {
        let err = Schema::parse(&["enum Big { HUGE = 4294967296; }"]).unwrap_err();
        match err {
            ParseError::ValueOutOfRange { name, value } => {
                assert_eq!(name, "Big.HUGE");
                assert_eq!(value, "4294967296");
            }
            e => panic!("Unexpected error: {:?}", e),
        }
    }

    #[test]
    fn duplicate_enum_across_files()
    {
        let err = Schema::parse(&[
            "package p; enum E { A = 0; }",
            "package p; enum E { B = 0; }",
        ])
        .unwrap_err();
        match err {
            ParseError::DuplicateEnum { name } => assert_eq!(name, "p.E"),
            e => panic!("Unexpected error: {:?}", e),
        }
    }

    #[test]
    fn syntax_error()
    {
        let err = Schema::parse(&["enum Broken { A = ; }"]).unwrap_err();
        assert!(matches!(err, ParseError::SyntaxError { .. }));

        let err = Schema::parse(&["message Open { enum Inner { A = 0; }"]).unwrap_err();
        assert!(matches!(err, ParseError::SyntaxError { .. }));
    }

    #[test]
    fn aliases_are_rejected_by_registry()
    {
        let schema = Schema::parse(&[r#"
            enum Aliased {
                option allow_alias = true;
                FIRST = 0;
                SECOND = 1;
                ALSO_SECOND = 1;
            }
        "#])
        .unwrap();

        let e = schema.get_enum("Aliased").unwrap();
        let err = e.to_registry(|v| v.name().to_string()).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateKey {
                key: crate::registry::LookupKey::Code(1)
            }
        );
    }
}
