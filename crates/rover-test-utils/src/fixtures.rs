//! Reference scenarios and generated inputs.
//!
//! - [`TWO_ROVERS`]: two rovers that both finish on the grid.
//! - [`BOUNDS_VIOLATION`]: one rover driven north past the top edge.
//! - [`MALFORMED_COMMAND`]: a command line holding `X`.
//! - [`SOUTH_FROM_ORIGIN`]: one step south from `(0, 0)`.

use rover_core::{Command, Heading};

/// One end-to-end input with its expected boundary payload.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    pub top_right: &'static str,
    pub instructions: &'static str,
    pub result: &'static str,
    pub error: &'static str,
}

pub const TWO_ROVERS: Scenario = Scenario {
    top_right: "5 5",
    instructions: "1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM",
    result: "1 3 N\n5 1 E",
    error: "",
};

pub const BOUNDS_VIOLATION: Scenario = Scenario {
    top_right: "5 5",
    instructions: "1 2 N\nMMMMMMMMMMMMMMMM",
    result: "",
    error: "Instruction tried to send Rover too far \"N\"",
};

/// `error` is the full message; tests usually only check it names `'X'`.
pub const MALFORMED_COMMAND: Scenario = Scenario {
    top_right: "5 5",
    instructions: "2 2 N\nLMXM",
    result: "",
    error: "line 2 ('LMXM'): 'X' is not a valid instruction; instructions can be L, R, M (column 3)",
};

pub const SOUTH_FROM_ORIGIN: Scenario = Scenario {
    top_right: "1 1",
    instructions: "0 0 S\nM",
    result: "",
    error: "Instruction tried to send Rover too far \"S\"",
};

/// Build an instruction block of `rovers` programs that never leave a
/// `side x side` grid.
///
/// Every rover starts at the centre and runs `commands` instructions
/// drawn from a fixed LCG. Each move is followed by its reverse
/// (`M R R M R R`), so the rover always returns to the centre before the
/// next move. Requires `side >= 2` and `commands >= 1`.
pub fn generated_fleet(rovers: usize, commands: usize, side: i32) -> String {
    let centre = side / 2;
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut out = String::new();
    for _ in 0..rovers {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let heading = Heading::ALL[(state >> 62) as usize];
        out.push_str(&format!("{centre} {centre} {heading}\n"));

        let mut line = String::with_capacity(commands);
        while line.len() < commands {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let chunk: &[Command] = match state >> 62 {
                0 => &[Command::Left],
                1 => &[Command::Right],
                _ => &[
                    Command::Move,
                    Command::Right,
                    Command::Right,
                    Command::Move,
                    Command::Right,
                    Command::Right,
                ],
            };
            line.extend(chunk.iter().map(|c| c.letter()));
        }
        line.truncate(commands);
        out.push_str(&line);
        out.push('\n');
    }
    out
}
