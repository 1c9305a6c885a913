use crate::palette::Tint;

pub const WIDTH: usize = 120;
pub const HEIGHT: usize = 30;

/// One character cell of the sky.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub tint: Tint,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        tint: Tint::Dim,
    };

    pub fn new(glyph: char, tint: Tint) -> Self {
        Self { glyph, tint }
    }

    pub fn is_blank(&self) -> bool {
        self.glyph == ' '
    }
}

pub type Row = Vec<Cell>;

/// What a single unit drew this tick: one optional row per screen line.
/// `None` means the unit put nothing on that line.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    rows: Vec<Option<Row>>,
}

impl Layer {
    pub fn empty() -> Self {
        Self {
            rows: vec![None; HEIGHT],
        }
    }

    /// Place a cell, allocating a blank row on first use. Out-of-range
    /// coordinates are ignored.
    pub fn plot(&mut self, x: usize, y: usize, cell: Cell) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let row = self.rows[y].get_or_insert_with(|| vec![Cell::BLANK; WIDTH]);
        row[x] = cell;
    }

    /// Install a raw row as produced by some other source. Its width is not
    /// checked here; the compositor normalises it.
    #[cfg(test)]
    pub fn set_row(&mut self, y: usize, row: Row) {
        if y < HEIGHT {
            self.rows[y] = Some(row);
        }
    }

    #[cfg(test)]
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        self.rows.get(y).and_then(|r| r.as_deref())
    }

    /// Occupied rows with their line index.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[Cell])> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(y, r)| r.as_deref().map(|r| (y, r)))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Option::is_none)
    }
}

/// The composited sky for one tick, always `HEIGHT` rows of `WIDTH` cells.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    rows: Vec<Row>,
}

impl FrameBuffer {
    pub fn blank() -> Self {
        Self {
            rows: vec![vec![Cell::BLANK; WIDTH]; HEIGHT],
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[cfg(test)]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.rows[y][x]
    }

    /// Row as plain text.
    #[cfg(test)]
    pub fn line(&self, y: usize) -> String {
        self.rows[y].iter().map(|c| c.glyph).collect()
    }

    fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(Cell::BLANK);
        }
    }
}

/// Merges the layers of all live units into one frame.
pub struct SceneCompositor {
    frame: FrameBuffer,
}

impl SceneCompositor {
    pub fn new() -> Self {
        Self {
            frame: FrameBuffer::blank(),
        }
    }

    /// Start a new tick from an empty sky.
    pub fn begin(&mut self) {
        self.frame.clear();
    }

    /// Merge one unit's layer. A cell already holding a glyph from an
    /// earlier layer this tick is kept; otherwise the incoming cell is used.
    /// Incoming rows are padded with blanks or truncated to `WIDTH`.
    pub fn merge(&mut self, layer: &Layer) {
        for (y, incoming) in layer.rows() {
            let target = &mut self.frame.rows[y];
            for (x, slot) in target.iter_mut().enumerate() {
                if !slot.is_blank() {
                    continue;
                }
                *slot = incoming.get(x).copied().unwrap_or(Cell::BLANK);
            }
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }
}

impl Default for SceneCompositor {
    fn default() -> Self {
        Self::new()
    }
}
