//! Pieces module - shape matrices and clockwise rotation
//!
//! A [`Shape`] is a small rectangular matrix of cells. Empty cells carve out the
//! silhouette of non-rectangular pieces. Shapes are plain `Copy` values: rotating
//! produces a new matrix and never touches the original.

use crate::types::{Cell, PieceKind};

/// Largest side of any shape matrix
pub const MAX_SHAPE_SIDE: usize = 4;

/// Rectangular matrix of cells, stored row-major in a fixed 4x4 buffer.
///
/// Invariant: `1 <= width, height <= 4`; cells outside `width x height` are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[Cell; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl Shape {
    /// Build a shape from a row pattern, where `#` marks a filled cell and any
    /// other byte an empty one.
    ///
    /// Only used for the canonical tables, so malformed input is a programming error.
    const fn from_pattern(kind: PieceKind, rows: &[&str]) -> Self {
        let height = rows.len();
        assert!(height >= 1 && height <= MAX_SHAPE_SIDE);
        let width = rows[0].len();
        assert!(width >= 1 && width <= MAX_SHAPE_SIDE);

        let mut cells = [[None; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        let mut y = 0;
        while y < height {
            let row = rows[y].as_bytes();
            assert!(row.len() == width);
            let mut x = 0;
            while x < width {
                if row[x] == b'#' {
                    cells[y][x] = Some(kind);
                }
                x += 1;
            }
            y += 1;
        }

        Self {
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    /// Width in columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in rows
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell at shape-local (x, y); `None` outside the matrix
    pub fn get(&self, x: usize, y: usize) -> Cell {
        if x >= self.width as usize || y >= self.height as usize {
            return None;
        }
        self.cells[y][x]
    }

    /// The kind this shape was built from
    pub fn kind(&self) -> Option<PieceKind> {
        self.filled().next().map(|(_, _, kind)| kind)
    }

    /// Iterate rows of the matrix, each exactly `width` cells long
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells[..self.height as usize]
            .iter()
            .map(move |row| &row[..self.width as usize])
    }

    /// Iterate the non-empty cells as `(x, y, kind)` in shape-local coordinates
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        self.rows().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|kind| (x as i8, y as i8, kind)))
        })
    }

    /// Return this shape turned 90° clockwise.
    ///
    /// For a `H x W` shape the result is `W x H` with
    /// `rotated[x][H - 1 - y] == original[y][x]`.
    pub fn rotated_cw(&self) -> Self {
        let h = self.height as usize;
        let w = self.width as usize;
        let mut cells = [[None; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for y in 0..h {
            for x in 0..w {
                cells[x][h - 1 - y] = self.cells[y][x];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

const I_SHAPE: Shape = Shape::from_pattern(PieceKind::I, &["####"]);
const J_SHAPE: Shape = Shape::from_pattern(PieceKind::J, &["#..", "###"]);
const L_SHAPE: Shape = Shape::from_pattern(PieceKind::L, &["###", "#.."]);
const O_SHAPE: Shape = Shape::from_pattern(PieceKind::O, &["##", "##"]);
const S_SHAPE: Shape = Shape::from_pattern(PieceKind::S, &[".##", "##."]);
const T_SHAPE: Shape = Shape::from_pattern(PieceKind::T, &["###", ".#."]);
const Z_SHAPE: Shape = Shape::from_pattern(PieceKind::Z, &["##.", ".##"]);

/// The seven canonical shapes, in [`PieceKind::ALL`] order
pub const CANONICAL_SHAPES: [Shape; 7] = [
    I_SHAPE, J_SHAPE, L_SHAPE, O_SHAPE, S_SHAPE, T_SHAPE, Z_SHAPE,
];

/// Get the canonical (spawn) shape for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
