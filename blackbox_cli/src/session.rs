use std::io::{BufRead, Write};

use blackbox::{
    visualize_session, GameSession, GuessOutcome, Position, RayOutcome, Request, Response,
};
use tracing::{info, trace, warn};

use crate::recording::Recorder;

/// Carries out a single request.
pub fn handle_request(game: &mut GameSession, req: &Request) -> Response {
    match *req {
        Request::ShootRay { row, column } => match game.shoot_ray(Position::new(row, column)) {
            Ok(RayOutcome::Exit(exit)) => Response::Exit {
                row: exit.row,
                column: exit.column,
                summary: game.summary(),
            },
            Ok(RayOutcome::Hit) => Response::Hit {
                summary: game.summary(),
            },
            Err(err) => {
                info!(%err, "Rejected ray");
                Response::Rejected {
                    reason: err.to_string(),
                }
            }
        },
        Request::GuessAtom { row, column } => match game.guess_atom(Position::new(row, column)) {
            Ok(outcome) => Response::Guess {
                correct: outcome == GuessOutcome::Correct,
                summary: game.summary(),
            },
            Err(err) => {
                info!(%err, "Rejected guess");
                Response::Rejected {
                    reason: err.to_string(),
                }
            }
        },
        Request::Summary => Response::Summary {
            summary: game.summary(),
        },
        Request::Board => Response::Board {
            rows: visualize_session(game, false)
                .lines()
                .map(String::from)
                .collect(),
        },
        Request::Bye => Response::Okay,
    }
}

/// Serves requests for one game until a `Bye` request or the end of the input.
///
/// Requests are read line by line from `input`, and every response is
/// written as one line to `output`. Lines that are not valid requests get a
/// `Rejected` response. Returns an error only on I/O failure.
pub fn serve(
    game: &mut GameSession,
    mut input: impl BufRead,
    mut output: impl Write,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<()> {
    let mut buf = String::new();
    loop {
        buf.clear(); // because read_line() appends to the buffer
        let num_bytes_read = input.read_line(&mut buf)?;
        if num_bytes_read == 0 {
            // EOF - the player is gone
            info!("Input closed");
            return Ok(());
        }
        let line = buf.trim_end();
        if line.is_empty() {
            continue;
        }
        trace!(name: "Received request", request = %line);

        let (req, response) = match serde_json::from_str::<Request>(line) {
            Ok(req) => {
                let response = handle_request(game, &req);
                (Some(req), response)
            }
            Err(err) => {
                warn!(%err, "Malformed request");
                let response = Response::Rejected {
                    reason: format!("Malformed request: {}", err),
                };
                (None, response)
            }
        };

        let resp_json = serde_json::to_string(&response)?;
        trace!(name: "Sending response", response = %resp_json);
        writeln!(output, "{}", resp_json)?;
        output.flush()?;

        let done = req == Some(Request::Bye);
        if let (Some(recorder), Some(req)) = (recorder.as_mut(), req) {
            recorder.store_exchange(req, response);
        }
        if done {
            return Ok(());
        }
    }
}
