//! Plain-text frames for steps, optionally colorized with ANSI escapes
//!
//! A frame is a header line with the step narration, a row of value cells,
//! and a marker row under it:
//!
//! ```text
//! [ 1/18] Comparing 5 and 2
//!   5  2  8  1
//!   ^  ^
//! ```

use algotrace::core::{format_value, Step, Structure, Trace};
use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

/// What a cell is doing in the current step; earlier variants win
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Active,
    Compared,
    Highlighted,
    Idle,
}

impl Role {
    fn of(step: &Step, index: usize) -> Self {
        if step.active_nodes().contains(&index) {
            Role::Active
        } else if step.comparisons().contains(&index) {
            Role::Compared
        } else if step.highlighted_nodes().contains(&index) {
            Role::Highlighted
        } else {
            Role::Idle
        }
    }

    fn marker(self) -> char {
        match self {
            Role::Active => '^',
            Role::Compared => '?',
            Role::Highlighted => '+',
            Role::Idle => ' ',
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            Role::Active => Some(Color::Yellow),
            Role::Compared => Some(Color::Magenta),
            Role::Highlighted => Some(Color::Green),
            Role::Idle => None,
        }
    }
}

/// Cell labels for a step: its snapshot when it has one, otherwise the
/// structure's own slots (absent tree nodes print as `·`)
pub fn cells_for(structure: &Structure, step: &Step) -> Vec<String> {
    if let Some(snapshot) = step.data_snapshot() {
        return snapshot.iter().map(|e| format_value(e.value)).collect();
    }
    match structure {
        Structure::Array(values) | Structure::LinkedList(values) => {
            values.iter().map(|v| format_value(*v)).collect()
        }
        Structure::Tree(slots) => slots
            .iter()
            .map(|slot| slot.map_or_else(|| "·".to_string(), format_value))
            .collect(),
        Structure::Graph(nodes) => nodes.iter().map(|n| format_value(n.value)).collect(),
    }
}

/// Render one step as a three-line frame
///
/// `position` is the zero-based step index and the trace length.
pub fn render_step(
    structure: &Structure,
    step: &Step,
    position: (usize, usize),
    colorize: bool,
) -> String {
    let (index, total) = position;
    let digits = total.to_string().len();
    let mut frame = format!(
        "[{:>digits$}/{}] {}\n",
        index + 1,
        total,
        step.description(),
        digits = digits
    );

    let cells = cells_for(structure, step);
    let width = cells
        .iter()
        .map(|cell| UnicodeWidthStr::width(cell.as_str()))
        .max()
        .unwrap_or(1);

    let mut values = String::new();
    let mut markers = String::new();
    for (i, cell) in cells.iter().enumerate() {
        let role = Role::of(step, i);
        let padding = " ".repeat(width - UnicodeWidthStr::width(cell.as_str()));
        values.push_str("  ");
        values.push_str(&padding);
        match role.color() {
            Some(color) if colorize => values.push_str(&format!("{}", cell.as_str().with(color))),
            _ => values.push_str(cell),
        }
        markers.push_str("  ");
        markers.push_str(&" ".repeat(width - 1));
        markers.push(role.marker());
    }

    frame.push_str(values.trim_end());
    frame.push('\n');
    frame.push_str(markers.trim_end());
    frame
}

/// Render a whole trace, one frame per step
pub fn render_trace(structure: &Structure, trace: &Trace, colorize: bool) -> String {
    let mut output = format!(
        "{} over {} ({} steps)\n",
        trace.algorithm(),
        trace.kind(),
        trace.len()
    );
    if trace.is_empty() {
        output.push_str("Nothing to trace: the input is empty\n");
        return output;
    }
    for (index, step) in trace.iter().enumerate() {
        output.push('\n');
        output.push_str(&render_step(
            structure,
            step,
            (index, trace.len()),
            colorize,
        ));
        output.push('\n');
    }
    output
}
