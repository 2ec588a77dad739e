#![allow(clippy::missing_errors_doc)]

use std::{error::Error, fmt};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use zen_maze_core::{Difficulty, Grid, Level, LevelId, Point, Tile};

const SNAPSHOT_DOMAIN: &str = "zenmaze";
const SNAPSHOT_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded level payload.
pub(crate) const SNAPSHOT_HEADER: &str = "zenmaze:v1";
/// Delimiter used to separate the prefix, grid dimensions and payload.
const FIELD_DELIMITER: char = ':';

const WALL_CELL: char = '#';
const PASSAGE_CELL: char = '.';

/// Encodes the level into a single-line string suitable for sharing a maze
/// whose topology would otherwise be lost on regeneration.
#[must_use]
pub(crate) fn encode(level: &Level) -> String {
    let grid = level.grid();
    let cells: String = grid
        .tiles()
        .iter()
        .map(|tile| match tile {
            Tile::Wall => WALL_CELL,
            Tile::Passage => PASSAGE_CELL,
        })
        .collect();
    let payload = SerializableLevel {
        id: level.id().get(),
        difficulty: level.difficulty(),
        start: level.start(),
        exit: level.exit(),
        cells,
    };
    let json = serde_json::to_vec(&payload).expect("level snapshot serialization never fails");
    let encoded = STANDARD_NO_PAD.encode(json);
    format!(
        "{SNAPSHOT_HEADER}:{}x{}:{encoded}",
        grid.width(),
        grid.height()
    )
}

/// Decodes a level from the provided string representation.
pub(crate) fn decode(value: &str) -> Result<Level, LevelTransferError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LevelTransferError::EmptyPayload);
    }

    let mut parts = trimmed.split(FIELD_DELIMITER);
    let domain = parts.next().ok_or(LevelTransferError::MissingPrefix)?;
    let version = parts.next().ok_or(LevelTransferError::MissingVersion)?;
    let dimensions = parts.next().ok_or(LevelTransferError::MissingDimensions)?;
    let payload = parts.next().ok_or(LevelTransferError::MissingPayload)?;

    if domain != SNAPSHOT_DOMAIN {
        return Err(LevelTransferError::InvalidPrefix(domain.to_owned()));
    }
    if version != SNAPSHOT_VERSION {
        return Err(LevelTransferError::UnsupportedVersion(version.to_owned()));
    }

    let (width, height) = parse_dimensions(dimensions)?;
    let bytes = STANDARD_NO_PAD
        .decode(payload.as_bytes())
        .map_err(LevelTransferError::InvalidEncoding)?;
    let decoded: SerializableLevel =
        serde_json::from_slice(&bytes).map_err(LevelTransferError::InvalidPayload)?;

    let expected = usize::try_from(u64::from(width) * u64::from(height))
        .map_err(|_| LevelTransferError::WrongCellCount(0))?;
    if decoded.cells.chars().count() != expected {
        return Err(LevelTransferError::WrongCellCount(
            decoded.cells.chars().count(),
        ));
    }

    let tiles = decoded
        .cells
        .chars()
        .map(|cell| match cell {
            WALL_CELL => Ok(Tile::Wall),
            PASSAGE_CELL => Ok(Tile::Passage),
            other => Err(LevelTransferError::InvalidCell(other)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let grid = Grid::from_tiles(width, height, tiles);
    if !grid.is_passage(decoded.start) || !grid.is_passage(decoded.exit) {
        return Err(LevelTransferError::MarkerOffPassage);
    }

    Ok(Level::new(
        LevelId::new(decoded.id),
        grid,
        decoded.start,
        decoded.exit,
        decoded.difficulty,
    ))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SerializableLevel {
    id: u32,
    difficulty: Difficulty,
    start: Point,
    exit: Point,
    cells: String,
}

/// Errors that can occur while decoding level transfer strings.
#[derive(Debug)]
pub(crate) enum LevelTransferError {
    /// The provided string was empty or contained only whitespace.
    EmptyPayload,
    /// The prefix segment was missing from the encoded level.
    MissingPrefix,
    /// The encoded level did not contain a version segment.
    MissingVersion,
    /// The encoded level did not include grid dimensions.
    MissingDimensions,
    /// The encoded level did not include the payload segment.
    MissingPayload,
    /// The encoded level used an unexpected prefix segment.
    InvalidPrefix(String),
    /// The encoded level used an unsupported version identifier.
    UnsupportedVersion(String),
    /// The grid dimensions could not be parsed from the encoded level.
    InvalidDimensions(String),
    /// The base64 payload could not be decoded.
    InvalidEncoding(base64::DecodeError),
    /// The decoded payload could not be deserialised.
    InvalidPayload(serde_json::Error),
    /// The cell string length disagreed with the declared dimensions.
    WrongCellCount(usize),
    /// The cell string contained a character that is not a wall or passage.
    InvalidCell(char),
    /// The start or exit marker referenced a wall cell.
    MarkerOffPassage,
}

impl fmt::Display for LevelTransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "transfer payload was empty"),
            Self::MissingPrefix => write!(f, "level string is missing the prefix"),
            Self::MissingVersion => write!(f, "level string is missing the version"),
            Self::MissingDimensions => write!(f, "level string is missing the grid dimensions"),
            Self::MissingPayload => write!(f, "level string is missing the payload"),
            Self::InvalidPrefix(prefix) => write!(f, "level prefix '{prefix}' is not supported"),
            Self::UnsupportedVersion(version) => {
                write!(f, "level version '{version}' is not supported")
            }
            Self::InvalidDimensions(dimensions) => {
                write!(f, "could not parse grid dimensions '{dimensions}'")
            }
            Self::InvalidEncoding(error) => {
                write!(f, "could not decode level payload: {error}")
            }
            Self::InvalidPayload(error) => {
                write!(f, "could not parse level payload: {error}")
            }
            Self::WrongCellCount(found) => {
                write!(f, "cell string holds {found} cells, which disagrees with the dimensions")
            }
            Self::InvalidCell(cell) => write!(f, "cell character '{cell}' is not recognised"),
            Self::MarkerOffPassage => write!(f, "start or exit marker sits on a wall"),
        }
    }
}

impl Error for LevelTransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEncoding(error) => Some(error),
            Self::InvalidPayload(error) => Some(error),
            _ => None,
        }
    }
}

fn parse_dimensions(value: &str) -> Result<(u32, u32), LevelTransferError> {
    let invalid = || LevelTransferError::InvalidDimensions(value.to_owned());
    let (width, height) = value.split_once('x').ok_or_else(invalid)?;
    let width = width.parse().map_err(|_| invalid())?;
    let height = height.parse().map_err(|_| invalid())?;
    Ok((width, height))
}
