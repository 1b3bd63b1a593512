//! Recorded RAM traces and their replay through an adapter.
//!
//! A trace is a TOML file with one `[[frame]]` table per emulated step.
//! Frames are cumulative: each starts from the previous frame's RAM,
//! optionally replaces it with a full `ram` hex dump, then applies its
//! `pokes`.
//!
//! ```toml
//! [[frame]]
//! ram = "00 00 00 ..."            # optional, up to 128 bytes
//! pokes = [{ addr = 0xE9, value = 0x05 }, { addr = 0xEA, value = 0x03 }]
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use quarter_core::core::{Game, RAM_SIZE, RamSnapshot};

use crate::error::CliError;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Trace {
    #[serde(default, rename = "frame")]
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Frame {
    #[serde(default)]
    pub ram: Option<String>,
    #[serde(default)]
    pub pokes: Vec<Poke>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Poke {
    pub addr: u16,
    pub value: u8,
}

/// Derived state after one replayed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameReport {
    pub frame: usize,
    pub reward: i32,
    pub score: u32,
    pub lives: i32,
    pub terminal: bool,
}

impl Trace {
    pub fn parse(text: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(text)?)
    }
}

/// Parse a whitespace-tolerant hex dump into RAM contents.
fn parse_ram_dump(frame: usize, dump: &str) -> Result<Vec<u8>, CliError> {
    let digits: Vec<char> = dump.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(CliError::Trace {
            frame,
            reason: "ram dump has an odd number of hex digits".to_string(),
        });
    }
    if digits.len() / 2 > RAM_SIZE {
        return Err(CliError::Trace {
            frame,
            reason: format!("ram dump is longer than {RAM_SIZE} bytes"),
        });
    }
    digits
        .chunks(2)
        .map(|pair| {
            let text: String = pair.iter().collect();
            u8::from_str_radix(&text, 16).map_err(|_| CliError::Trace {
                frame,
                reason: format!("invalid hex byte {text:?} in ram dump"),
            })
        })
        .collect()
}

/// Step `game` once per frame. With `stop_at_terminal`, replay ends after
/// the first frame that reports terminal.
pub fn replay(
    game: &mut dyn Game,
    trace: &Trace,
    stop_at_terminal: bool,
) -> Result<Vec<FrameReport>, CliError> {
    let mut ram = RamSnapshot::new();
    let mut reports = Vec::with_capacity(trace.frames.len());

    for (frame, entry) in trace.frames.iter().enumerate() {
        if let Some(dump) = &entry.ram {
            ram = RamSnapshot::from_bytes(&parse_ram_dump(frame, dump)?);
        }
        for poke in &entry.pokes {
            ram.write(poke.addr, poke.value);
        }

        game.step(&ram)
            .map_err(|source| CliError::Decode { frame, source })?;

        let report = FrameReport {
            frame,
            reward: game.reward(),
            score: game.score(),
            lives: game.lives(),
            terminal: game.is_terminal(),
        };
        reports.push(report);

        if report.terminal && stop_at_terminal {
            debug!(frame, "terminal frame reached, stopping replay");
            break;
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarter_games::{GameAdapter, Title};

    const ZAXXON_TRACE: &str = r#"
[[frame]]
pokes = [{ addr = 0xE9, value = 0x02 }, { addr = 0xEA, value = 0x03 }]

[[frame]]
pokes = [{ addr = 0xE9, value = 0x07 }]

[[frame]]
pokes = [{ addr = 0xEA, value = 0x00 }]

[[frame]]
pokes = [{ addr = 0xE9, value = 0x09 }]
"#;

    #[test]
    fn replay_stops_at_terminal() {
        let trace = Trace::parse(ZAXXON_TRACE).unwrap();
        let mut game = GameAdapter::new(Title::Zaxxon);
        let reports = replay(&mut game, &trace, true).unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].reward, 200);
        assert_eq!(reports[1].reward, 500);
        assert_eq!(reports[1].lives, 3);
        assert!(reports[2].terminal);
        assert_eq!(reports[2].score, 700);
    }

    #[test]
    fn replay_can_run_past_terminal() {
        let trace = Trace::parse(ZAXXON_TRACE).unwrap();
        let mut game = GameAdapter::new(Title::Zaxxon);
        let reports = replay(&mut game, &trace, false).unwrap();
        assert_eq!(reports.len(), 4);
        assert_eq!(reports[3].reward, 200);
    }

    #[test]
    fn full_ram_dump_replaces_previous_frame() {
        let mut dump = vec!["00"; RAM_SIZE];
        // 0xDA (reserve lives) is offset 0x5A.
        dump[0x5A] = "FF";
        let text = format!(
            "[[frame]]\npokes = [{{ addr = 0xDF, value = 0x50 }}]\n\n[[frame]]\nram = \"{}\"\n",
            dump.join(" ")
        );
        let trace = Trace::parse(&text).unwrap();
        let mut game = GameAdapter::new(Title::Berzerk);
        let reports = replay(&mut game, &trace, true).unwrap();

        assert_eq!(reports[0].score, 50);
        assert_eq!(reports[1].score, 0);
        assert_eq!(reports[1].reward, -50);
        assert!(reports[1].terminal);
    }

    #[test]
    fn bad_score_byte_names_the_frame() {
        let trace = Trace::parse(
            "[[frame]]\npokes = [{ addr = 0xEE, value = 3 }]\n\n\
             [[frame]]\npokes = [{ addr = 0x83, value = 0xAB }]\n",
        )
        .unwrap();
        let mut game = GameAdapter::new(Title::KingKong);
        let err = replay(&mut game, &trace, true).unwrap_err();
        assert!(matches!(err, CliError::Decode { frame: 1, .. }));
    }

    #[test]
    fn malformed_dump_is_rejected() {
        assert!(parse_ram_dump(0, "0").is_err());
        assert!(parse_ram_dump(0, "zz").is_err());
        assert_eq!(parse_ram_dump(0, "0a FF").unwrap(), vec![0x0A, 0xFF]);
    }

    #[test]
    fn unknown_frame_keys_are_rejected() {
        assert!(Trace::parse("[[frame]]\nscore = 5\n").is_err());
    }
}
