use itertools::Itertools;
use nom::{
    bytes::complete::{take_while, take_while1},
    multi::separated_list1,
    sequence::delimited,
    IResult,
};
use nom_supreme::error::ErrorTree;
use thiserror::Error;
use tracing::{debug, trace};
use util::{parse_nice, parse_number, BadInput, Span};

const SIDES: usize = 3;

pub type Row = Vec<i64>;
pub type Grid = Vec<Row>;

#[derive(Error, Debug)]
pub enum TriangleError {
    #[error("Malformed token on line {line}")]
    MalformedToken {
        line: usize,
        #[source]
        source: BadInput,
    },

    #[error("Row {row} has {len} values, a triangle needs exactly 3")]
    MalformedRow { row: usize, len: usize },
}

#[derive(Error, Debug)]
#[error("Wrong number of sides: {0}")]
pub struct SideCountError(pub usize);

/// Three candidate side lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle([i64; SIDES]);

impl Triangle {
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        Self([a, b, c])
    }

    /// Strict triangle inequality: the longest side is shorter than the other two combined.
    pub fn is_valid(&self) -> bool {
        let sides = self.0.map(i128::from);
        let longest = sides.iter().copied().fold(i128::MIN, i128::max);
        let rest = sides.iter().sum::<i128>() - longest;

        longest < rest
    }
}

impl TryFrom<&[i64]> for Triangle {
    type Error = SideCountError;

    fn try_from(sides: &[i64]) -> Result<Self, Self::Error> {
        let sides: [i64; SIDES] = sides
            .try_into()
            .map_err(|_| SideCountError(sides.len()))?;

        Ok(Self(sides))
    }
}

fn is_gap(c: char) -> bool {
    c.is_whitespace()
}

fn parse_row(i: Span) -> IResult<Span, Row, ErrorTree<Span>> {
    delimited(
        take_while(is_gap),
        separated_list1(take_while1(is_gap), parse_number),
        take_while(is_gap),
    )(i)
}

/// Reads whitespace-separated numbers, one row per non-blank line.
pub fn parse_grid(input: &str) -> Result<Grid, TriangleError> {
    // `\n`, `\r\n` and a bare `\r` all end a line.
    let grid = input
        .replace("\r\n", "\n")
        .split(['\n', '\r'])
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(n, l)| {
            parse_nice(l, parse_row).map_err(|source| TriangleError::MalformedToken {
                line: n + 1,
                source,
            })
        })
        .collect::<Result<Grid, _>>()?;

    debug!(rows = grid.len(), "parsed grid");

    Ok(grid)
}

/// Reads the grid down its columns and regroups the values into rows of three.
///
/// The value at row `i`, column `c` lands at position `rows * c + i`. A trailing
/// group shorter than three is kept as is.
pub fn flip(grid: &[Row]) -> Grid {
    let offset = grid.len();

    let values = grid
        .iter()
        .enumerate()
        .flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &value)| (offset * c + i, value))
        })
        .sorted_by_key(|&(pos, _)| pos)
        .map(|(_, value)| value)
        .collect::<Vec<_>>();

    let flipped = values
        .chunks(SIDES)
        .map(<[i64]>::to_vec)
        .collect::<Grid>();

    debug!(
        rows = grid.len(),
        values = values.len(),
        flipped_rows = flipped.len(),
        "flipped grid"
    );

    flipped
}

pub fn count_valid(grid: &[Row]) -> Result<usize, TriangleError> {
    let triangles = grid
        .iter()
        .enumerate()
        .map(|(row, sides)| {
            Triangle::try_from(sides.as_slice()).map_err(|SideCountError(len)| {
                trace!(row, len, "rejecting malformed row");
                TriangleError::MalformedRow { row, len }
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(triangles.iter().filter(|t| t.is_valid()).count())
}

pub fn count_valid_flipped(grid: &[Row]) -> Result<usize, TriangleError> {
    count_valid(&flip(grid))
}
