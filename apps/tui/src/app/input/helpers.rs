/// Direction the picker highlight moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Back,
    Forward,
}

/// Moves a highlight through `rows` entries, wrapping at both ends.
/// A stale index past the end is pulled back inside first.
pub const fn cycle_highlight(index: usize, rows: usize, step: Step) -> usize {
    if rows == 0 {
        return 0;
    }

    let index = if index >= rows { rows - 1 } else { index };
    match step {
        Step::Back if index == 0 => rows - 1,
        Step::Back => index - 1,
        Step::Forward => (index + 1) % rows,
    }
}
