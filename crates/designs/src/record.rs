//! Text grammar of a design record: `<Name><Size>(<count><species>)+<total>`.
//!
//! The grammar only fixes the *shape* of a record (where the digits are).
//! Character classes (name `A-Z`, size `S|L`, species `a-z`) are checked by the
//! domain constructors so errors name the exact offending character.

use nom::{
    IResult,
    character::complete::{anychar, digit1},
    combinator::{all_consuming, map_res},
    multi::many1,
    sequence::tuple,
};

use bouquet_core::{DomainError, DomainResult};

/// A design record split into its raw parts, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignRecord {
    pub name: char,
    pub size: char,
    /// `(species, declared count)` in record order.
    pub requirements: Vec<(char, u32)>,
    pub total: u32,
}

fn count(input: &str) -> IResult<&str, u32> {
    map_res(digit1, str::parse::<u32>)(input)
}

fn requirement(input: &str) -> IResult<&str, (char, u32)> {
    let (input, (declared, species)) = tuple((count, anychar))(input)?;
    Ok((input, (species, declared)))
}

fn design_record(input: &str) -> IResult<&str, DesignRecord> {
    let (input, (name, size, requirements, total)) =
        tuple((anychar, anychar, many1(requirement), count))(input)?;
    Ok((
        input,
        DesignRecord {
            name,
            size,
            requirements,
            total,
        },
    ))
}

/// Split a design record into its parts.
pub fn parse_design_record(input: &str) -> DomainResult<DesignRecord> {
    all_consuming(design_record)(input)
        .map(|(_, record)| record)
        .map_err(|_| {
            DomainError::format(format!(
                "not a valid design record (expected <Name><Size>(<count><species>)+<total>): {input:?}"
            ))
        })
}
