use crate::{error::RulesError, types::*};

/// Files run `a`..`h` left to right; ranks count up from red's back row, so
/// row 7 is rank 1 and row 0 is rank 8.
pub fn square_name(pos: Position) -> String {
    let f = (b'a' + pos.col as u8) as char;
    let r = (b'0' + (BOARD_SIZE - pos.row) as u8) as char;
    format!("{f}{r}")
}

pub fn parse_square(txt: &str) -> Result<Position, RulesError> {
    let b = txt.trim().as_bytes();
    if b.len() != 2 {
        return Err(RulesError::InvalidNotation(txt.to_string()));
    }
    let f = b[0].to_ascii_lowercase();
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return Err(RulesError::InvalidNotation(txt.to_string()));
    }
    let col = (f - b'a') as i8;
    let row = BOARD_SIZE - (r - b'0') as i8;
    Ok(Position::new(row, col))
}

/// Parses `c3 d4`, `c3-d4` or `c3xe5`.
pub fn parse_step(txt: &str) -> Result<Step, RulesError> {
    let cleaned: String = txt
        .chars()
        .map(|c| if c == '-' || c == 'x' || c == 'X' { ' ' } else { c })
        .collect();
    let parts: Vec<&str> = cleaned.split_whitespace().collect();
    match parts.as_slice() {
        [from, to] => Ok(Step::new(parse_square(from)?, parse_square(to)?)),
        _ => Err(RulesError::InvalidNotation(txt.to_string())),
    }
}

pub fn step_to_string(step: Step) -> String {
    let sep = if step.is_jump() { 'x' } else { '-' };
    format!("{}{}{}", square_name(step.from), sep, square_name(step.to))
}
