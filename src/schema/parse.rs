use pest::{iterators::Pair, Parser};
use std::convert::TryFrom;

use super::*;

#[derive(pest_derive::Parser)]
#[grammar = "enum.pest"]
struct EnumParser;

impl Schema
{
    /// Parses the enum declarations from the files.
    ///
    /// Everything but `package` statements and `enum` declarations, including the
    /// ones nested in messages, is skipped.
    pub fn parse<T, S>(files: T) -> Result<Self, ParseError>
    where
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut schema = Schema::default();
        for file in files {
            for e in parse_file(file.as_ref())? {
                schema.insert(e)?;
            }
        }

        debug!("Parsed {} enum declarations", schema.enums.len());
        Ok(schema)
    }
}

fn parse_file(input: &str) -> Result<Vec<EnumSchema>, ParseError>
{
    let pairs = EnumParser::parse(Rule::proto, input)
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
        .context(SyntaxError {})?;

    let mut package: Option<String> = None;
    let mut enums = vec![];
    for pair in pairs {
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::package => {
                    package = inner.into_inner().next().map(|p| p.as_str().to_string())
                }
                Rule::enum_ => enums.push(EnumSchema::parse(inner, package.as_deref())?),
                Rule::message => parse_message(inner, package.as_deref(), &mut enums)?,
                Rule::option => {}
                Rule::emptyStatement => {}
                Rule::otherStatement => {}
                Rule::EOI => {}
                r => unreachable!("{:?}: {:?}", r, inner),
            }
        }
    }

    Ok(enums)
}

fn parse_message(
    p: Pair<Rule>,
    parent: Option<&str>,
    enums: &mut Vec<EnumSchema>,
) -> Result<(), ParseError>
{
    let mut inner = p.into_inner();
    let name = inner.next().unwrap().as_str();
    let full_name = qualify(parent, name);

    let body = inner.next().unwrap();
    for p in body.into_inner() {
        match p.as_rule() {
            Rule::enum_ => enums.push(EnumSchema::parse(p, Some(&full_name))?),
            Rule::message => parse_message(p, Some(&full_name), enums)?,
            Rule::option => {}
            Rule::reserved => {}
            Rule::emptyStatement => {}
            Rule::otherStatement => {}
            r => unreachable!("{:?}: {:?}", r, p),
        }
    }

    Ok(())
}

impl EnumSchema
{
    fn parse(p: Pair<Rule>, parent: Option<&str>) -> Result<Self, ParseError>
    {
        let mut inner = p.into_inner();
        let name = inner.next().unwrap().as_str().to_string();
        let full_name = qualify(parent, &name);

        let mut values = vec![];
        let body = inner.next().unwrap();
        for p in body.into_inner() {
            match p.as_rule() {
                Rule::enumField => {
                    let mut inner = p.into_inner();
                    let value_name = inner.next().unwrap().as_str().to_string();
                    let literal = inner.next().unwrap();
                    let number = match parse_int_literal(literal.clone()) {
                        Some(n) => n,
                        None => {
                            return ValueOutOfRange {
                                name: format!("{}.{}", full_name, value_name),
                                value: literal.as_str().to_string(),
                            }
                            .fail()
                        }
                    };
                    values.push(SchemaValue::new(value_name, number));
                }
                Rule::option => {}
                Rule::reserved => {}
                Rule::emptyStatement => {}
                r => unreachable!("{:?}: {:?}", r, p),
            }
        }

        Ok(EnumSchema {
            name,
            full_name,
            values,
        })
    }
}

fn qualify(parent: Option<&str>, name: &str) -> String
{
    match parent {
        Some(parent) => format!("{}.{}", parent, name),
        None => name.to_string(),
    }
}

/// Parses an `intLit` into an `i32`. Returns `None` if the value doesn't fit.
fn parse_int_literal(p: Pair<Rule>) -> Option<i32>
{
    match p.as_rule() {
        Rule::intLit => {
            let mut inner = p.into_inner();
            let sign = inner.next().unwrap();
            let (negative, lit) = match sign.as_rule() {
                Rule::sign if sign.as_str() == "-" => (true, inner.next().unwrap()),
                Rule::sign => (false, inner.next().unwrap()),
                _ => (false, sign),
            };
            let magnitude = match lit.as_rule() {
                Rule::decimalLit => lit.as_str().parse::<i64>().ok()?,
                Rule::octalLit => i64::from_str_radix(lit.as_str(), 8).ok()?,
                Rule::hexLit => i64::from_str_radix(&lit.as_str()[2..], 16).ok()?,
                r => unreachable!("{:?}: {:?}", r, lit),
            };
            i32::try_from(if negative { -magnitude } else { magnitude }).ok()
        }
        r => unreachable!("{:?}: {:?}", r, p),
    }
}
