use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The start room. Moving east from here finishes the maze.
pub const ORIGIN: i64 = 0;

/// Exits advertised by the origin.
pub const ROOT_EXITS: &[Direction] = &[Direction::North, Direction::East, Direction::South];

/// Exits advertised by every other room in the corridor.
pub const CORRIDOR_EXITS: &[Direction] = &[Direction::North, Direction::South];

/// The root descriptor, returned by the start endpoint and whenever a move
/// lands back on the origin.
pub const ROOT: RoomState = RoomState::InProgress { room: ORIGIN };

/// A direction token accepted by the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Direction::North),
            "E" => Ok(Direction::East),
            "S" => Ok(Direction::South),
            other => Err(MazeError::UnknownDirection(other.to_string())),
        }
    }
}

/// Where a traversal stands after a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomState {
    /// Standing in a room; the origin is the only room with an east exit.
    InProgress { room: i64 },
    /// The maze exit was reached. No further transitions.
    Finished,
}

impl RoomState {
    /// Exits advertised for this state. Empty once finished.
    pub fn exits(self) -> &'static [Direction] {
        match self {
            RoomState::InProgress { room: ORIGIN } => ROOT_EXITS,
            RoomState::InProgress { .. } => CORRIDOR_EXITS,
            RoomState::Finished => &[],
        }
    }

    pub fn is_root(self) -> bool {
        self == ROOT
    }
}

/// Errors produced while resolving a move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("unknown direction '{0}'")]
    UnknownDirection(String),

    /// East is only open from the origin.
    #[error("no {direction} exit from room {room}")]
    BlockedExit { room: i64, direction: Direction },

    /// The move would step past the last representable room.
    #[error("room {room} has no neighbour to the {direction}")]
    OutOfBounds { room: i64, direction: Direction },

    #[error("invalid room identifier '{0}'")]
    InvalidRoom(String),
}

/// Parse a room identifier taken from a request path
pub fn parse_room(raw: &str) -> Result<i64, MazeError> {
    raw.parse::<i64>()
        .map_err(|_| MazeError::InvalidRoom(raw.to_string()))
}

/// Resolve a move from `room` in the requested `direction`.
///
/// North steps towards negative rooms and south towards positive ones, so
/// the corridor closes back onto the origin from either neighbour.
pub fn resolve(room: i64, direction: &str) -> Result<RoomState, MazeError> {
    let direction = direction.parse::<Direction>()?;

    let next = match (room, direction) {
        (ORIGIN, Direction::East) => return Ok(RoomState::Finished),
        (_, Direction::East) => return Err(MazeError::BlockedExit { room, direction }),
        (_, Direction::North) => room.checked_sub(1),
        (_, Direction::South) => room.checked_add(1),
    };

    next.map(|room| RoomState::InProgress { room })
        .ok_or(MazeError::OutOfBounds { room, direction })
}
