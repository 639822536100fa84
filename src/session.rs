//! Line-oriented turn loop
//!
//! Reads one JSON object per line, hands it to the engine and writes one
//! JSON object per line back. Blank lines are ignored.

use rand::Rng;
use serde::Serialize;
use std::io::{BufRead, Write};

use crate::battle::engine::TacticalEngine;
use crate::core::error::{FleetError, Result};
use crate::protocol::{decode_line, DraftChoice, Inbound, InboundKind, UserOutput};

/// Counters of a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub drafts: u64,
    pub battles: u64,
    /// Lines answered with an empty reply because they could not be decoded
    pub skipped: u64,
}

/// Drive `engine` from `input` until EOF.
///
/// An undecodable line aborts the loop when `strict` is set; otherwise it
/// is answered with an empty reply of the shape its kind expects (battle
/// shape when the kind cannot be told). I/O errors always abort.
pub fn run<In, Out, R>(
    engine: &mut TacticalEngine<R>,
    mut input: In,
    mut output: Out,
    strict: bool,
) -> Result<SessionStats>
where
    In: BufRead,
    Out: Write,
    R: Rng,
{
    let mut stats = SessionStats::default();
    let mut buf = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        // bad UTF-8 only spoils this line, the stream itself is fine
        let decoded = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => decode_line(line),
            Err(e) => Err((None, FleetError::Format(format!("line is not valid UTF-8: {}", e)))),
        };

        match decoded {
            Ok(Inbound::Draft(options)) => {
                stats.drafts += 1;
                let choice = engine.draft(&options);
                emit(&mut output, &choice)?;
            }
            Ok(Inbound::Battle(state)) => {
                stats.battles += 1;
                let reply = engine.battle(state);
                emit(&mut output, &reply)?;
            }
            Err((kind, err)) => {
                if strict {
                    tracing::error!(line = line_no, "Undecodable input: {}", err);
                    return Err(err);
                }
                tracing::warn!(line = line_no, "Skipping undecodable input: {}", err);
                stats.skipped += 1;
                match kind {
                    Some(InboundKind::Draft) => emit(&mut output, &DraftChoice::default())?,
                    Some(InboundKind::Battle) | None => emit(&mut output, &UserOutput::default())?,
                }
            }
        }
    }

    tracing::info!(
        drafts = stats.drafts,
        battles = stats.battles,
        skipped = stats.skipped,
        "Input closed"
    );
    Ok(stats)
}

fn emit<W: Write, T: Serialize>(output: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *output, value)?;
    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EngineConfig;
    use rand::rngs::mock::StepRng;

    fn engine() -> TacticalEngine<StepRng> {
        TacticalEngine::with_rng(EngineConfig::default(), StepRng::new(0, 0))
    }

    #[test]
    fn test_blank_lines_produce_nothing() {
        let mut out = Vec::new();
        let stats = run(&mut engine(), "\n   \n".as_bytes(), &mut out, false).unwrap();
        assert!(out.is_empty());
        assert_eq!(stats, SessionStats::default());
    }

    #[test]
    fn test_garbage_is_skipped_with_battle_shape() {
        let mut out = Vec::new();
        let stats = run(&mut engine(), "{oops\n".as_bytes(), &mut out, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"UserCommands\":[]}\n");
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn test_strict_mode_aborts() {
        let mut out = Vec::new();
        let err = run(&mut engine(), "{oops\n".as_bytes(), &mut out, true).unwrap_err();
        assert!(err.is_format());
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let input: &[u8] = b"{\"My\":[],\"Opponent\":[\"\xff\"]}\n{\"My\":[],\"Opponent\":[]}\n";
        let mut out = Vec::new();
        let stats = run(&mut engine(), input, &mut out, false).unwrap();
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.battles, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"UserCommands\":[]}\n{\"UserCommands\":[]}\n"
        );
    }

    #[test]
    fn test_invalid_utf8_line_aborts_strict_session() {
        let input: &[u8] = b"\xfe\xff\n{\"My\":[],\"Opponent\":[]}\n";
        let mut out = Vec::new();
        let err = run(&mut engine(), input, &mut out, true).unwrap_err();
        assert!(err.is_format());
        assert!(out.is_empty());
    }
}
