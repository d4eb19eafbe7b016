use serde::{Deserialize, Serialize};

use crate::GameSummary;

/// Request from a player to the game host.
///
/// Each request is one line of JSON and gets exactly one [`Response`] line back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Shoot a ray from a border cell.
    ///
    /// The response is an [`Response::Exit`], a [`Response::Hit`], or a
    /// [`Response::Rejected`] if the cell is not a border cell or the game is over.
    ShootRay { row: i8, column: i8 },
    /// Guess that an atom is at the given cell.
    ///
    /// The response is a [`Response::Guess`], or a [`Response::Rejected`] if
    /// the game is over.
    GuessAtom { row: i8, column: i8 },
    /// Ask for the score, the number of atoms left, and the game status.
    Summary,
    /// Ask for a text rendering of the board. Unfound atoms are not shown.
    Board,
    /// End the session. The response is an [`Response::Okay`].
    Bye,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    Exit {
        row: i8,
        column: i8,
        summary: GameSummary,
    },
    Hit {
        summary: GameSummary,
    },
    Guess {
        correct: bool,
        summary: GameSummary,
    },
    Summary {
        summary: GameSummary,
    },
    Board {
        /// One string per grid row, top to bottom.
        rows: Vec<String>,
    },
    /// The request was not carried out, and nothing changed.
    Rejected {
        reason: String,
    },
    Okay,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameStatus;

    #[test]
    fn request_wire_format() {
        let req: Request = serde_json::from_str(r#"{"type":"ShootRay","row":0,"column":3}"#).unwrap();
        assert_eq!(req, Request::ShootRay { row: 0, column: 3 });
        let req: Request = serde_json::from_str(r#"{"type":"Bye"}"#).unwrap();
        assert_eq!(req, Request::Bye);
        assert!(serde_json::from_str::<Request>(r#"{"type":"GuessAtom","row":3}"#).is_err());
    }

    #[test]
    fn response_wire_format() {
        let resp = Response::Exit {
            row: 1,
            column: 9,
            summary: GameSummary {
                score: 23,
                atoms_remaining: 1,
                status: GameStatus::Unfinished,
            },
        };
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"type":"Exit","row":1,"column":9,"summary":{"score":23,"atoms_remaining":1,"status":"unfinished"}}"#
        );
        assert_eq!(serde_json::to_string(&Response::Okay).unwrap(), r#"{"type":"Okay"}"#);
    }
}
