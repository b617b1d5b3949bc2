use core::fmt::Display;

/// Layout constants for drawing the heap as a binary-tree diagram.
#[derive(Clone, Debug)]
pub struct TreeDrawingParams {
    /// Width in character cells reserved for each slot on the deepest level.
    /// Nodes higher up are centered over the span of their leaf slots.
    pub cell_width: usize,
}

impl TreeDrawingParams {
    pub fn new() -> Self {
        Self { cell_width: 4 }
    }
}

// level of a node in the tree; the root is level 0
fn level_of(index: usize) -> usize {
    let mut n = index + 1;
    let mut level = 0;
    while n > 1 {
        n /= 2;
        level += 1;
    }
    level
}

fn parent(child: usize) -> usize {
    (child - 1) / 2
}

/// Renders the heap array as a text diagram of its binary tree, with `/` and
/// `\` edges between each node and its children.
///
/// The layout mirrors the array structure: the node at index `i` sits on
/// level `floor(log2(i + 1))`, centered over the leaf slots its subtree
/// would occupy in a complete tree. An empty array renders as an empty
/// string.
pub fn render_tree<T: Display>(elements: &[T], params: &TreeDrawingParams) -> String {
    if elements.is_empty() {
        return String::new();
    }
    let depth = level_of(elements.len() - 1) + 1;
    let leaf_slots = 1usize << (depth - 1);
    let width = params.cell_width * leaf_slots;
    let mut grid: Vec<Vec<u8>> = vec![vec![b' '; width]; depth * 2 - 1];

    for (i, value) in elements.iter().enumerate() {
        let level = level_of(i);
        let pos = i - ((1 << level) - 1);
        let span = 1usize << (depth - 1 - level);
        let x = params.cell_width * pos * span + params.cell_width * span / 2;
        let y = level * 2;
        put_centered(&mut grid[y], x, &value.to_string());

        if i > 0 {
            let parent_pos = parent(i) - ((1 << (level - 1)) - 1);
            let px = params.cell_width * parent_pos * span * 2 + params.cell_width * span;
            let glyph = if i % 2 == 1 { b'/' } else { b'\\' };
            grid[y - 1][(x + px) / 2] = glyph;
        }
    }

    let mut out = String::new();
    for row in grid.iter() {
        let line = core::str::from_utf8(row).unwrap_or("");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

// Writes `text` centered on column `center`, growing the row if the text
// runs off the right edge. Trailing spaces are trimmed later, so growth is
// harmless.
fn put_centered(row: &mut Vec<u8>, center: usize, text: &str) {
    let bytes = text.as_bytes();
    let start = center.saturating_sub(bytes.len() / 2);
    if start + bytes.len() > row.len() {
        row.resize(start + bytes.len(), b' ');
    }
    row[start..start + bytes.len()].copy_from_slice(bytes);
}
