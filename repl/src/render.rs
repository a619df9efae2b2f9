//! Colored rendering of atoms
//!
//! Parentheses are colored by nesting depth, variables that occur more than
//! once in the whole atom are italic, and grounded values are underlined.

use colored::{Color, Colorize};
use mettar::Atom;
use rustc_hash::{FxHashMap, FxHashSet};

/// Parenthesis colors, indexed by depth modulo the palette length.
pub const PALETTE: [Color; 13] = [
    Color::BrightBlack,
    Color::BrightRed,
    Color::Red,
    Color::BrightYellow,
    Color::BrightGreen,
    Color::Green,
    Color::Cyan,
    Color::BrightCyan,
    Color::BrightBlue,
    Color::Blue,
    Color::Magenta,
    Color::BrightMagenta,
    Color::White,
];

pub fn depth_color(depth: usize) -> Color {
    PALETTE[depth % PALETTE.len()]
}

fn count_variables(atom: &Atom, counts: &mut FxHashMap<String, usize>) {
    match atom {
        Atom::Variable(_) => *counts.entry(atom.to_string()).or_insert(0) += 1,
        Atom::Expression(e) => {
            for child in e.children() {
                count_variables(child, counts);
            }
        }
        Atom::Symbol(_) | Atom::Grounded(_) => {}
    }
}

/// Names (with `$`) of variables occurring more than once anywhere in `atom`.
pub fn unified_variables(atom: &Atom) -> FxHashSet<String> {
    let mut counts = FxHashMap::default();
    count_variables(atom, &mut counts);
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name)
        .collect()
}

/// Render a top-level atom.
pub fn render(atom: &Atom) -> String {
    let unified = unified_variables(atom);
    render_at(atom, 0, &unified)
}

/// Render `atom` at `depth` with a `unified` set computed for its root.
pub fn render_at(atom: &Atom, depth: usize, unified: &FxHashSet<String>) -> String {
    match atom {
        Atom::Symbol(_) => atom.to_string(),
        Atom::Variable(_) => {
            let name = atom.to_string();
            if unified.contains(&name) {
                name.italic().to_string()
            } else {
                name
            }
        }
        Atom::Expression(e) => {
            let color = depth_color(depth);
            let children: Vec<String> = e
                .children()
                .iter()
                .map(|child| render_at(child, depth + 1, unified))
                .collect();
            format!(
                "{}{}{}",
                "(".color(color),
                children.join(" "),
                ")".color(color)
            )
        }
        Atom::Grounded(_) => atom.to_string().underline().to_string(),
    }
}
