/// ASCII rasterizer over the visible-face hulls
use std::io::Write;

use arrayvec::ArrayVec;
use crossterm::{cursor, style::Print, QueueableCommand};
use nalgebra::Point2;
use tcube_core::{geometry, FaceHull, Viewport, VisibleFace, VISIBLE_FACE_LIMIT};

/// Shading character per visible-face slot; earlier slots win overlaps.
const SLOT_CHARS: [char; VISIBLE_FACE_LIMIT] = ['#', ':', '.'];

const BLANK: char = ' ';

/// Renderer that scans the visible faces into a terminal character grid.
///
/// The character grid and the slot-indexed hull buffers are allocated
/// once and reused every frame.
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    char_buffer: Vec<char>,
    hulls: [FaceHull; VISIBLE_FACE_LIMIT],
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            char_buffer: vec![BLANK; width * height],
            hulls: [FaceHull::new(), FaceHull::new(), FaceHull::new()],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reallocate the grid when the terminal was resized.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.char_buffer = vec![BLANK; width * height];
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.char_buffer.fill(BLANK);
    }

    /// Rasterize the visible faces into the character grid.
    ///
    /// The scan covers the cell region of the union bounding box over all
    /// face corners (taken before hull construction). Each cell's sample
    /// point is tested against the slot hulls in order; the first hit
    /// writes that slot's character, a miss writes a blank. Slots beyond
    /// `faces.len()` are never consulted, so a short selection cannot
    /// match against a previous frame's hull.
    pub fn render_faces(&mut self, faces: &[VisibleFace], viewport: &Viewport) {
        if faces.is_empty() || faces.len() > VISIBLE_FACE_LIMIT {
            return;
        }

        let corners: ArrayVec<Point2<f64>, 12> =
            faces.iter().flat_map(|face| face.corners).collect();
        let Ok(bounds) = geometry::bounds(&corners) else {
            return;
        };

        for (slot, face) in faces.iter().enumerate() {
            // The hull build sorts its input; work on a copy of the quad.
            let mut quad = face.corners;
            if self.hulls[slot].rebuild(&mut quad).is_err() {
                return;
            }
        }

        let region = viewport.scan_region(&bounds);
        for i in 0..=region.height {
            let row = region.y + i;
            for j in 0..=region.width {
                let col = region.x + j;
                let sample = viewport.sample(col, row);
                let ch = self.hulls[..faces.len()]
                    .iter()
                    .position(|hull| hull.contains(sample))
                    .map_or(BLANK, |slot| SLOT_CHARS[slot]);
                self.put(col, row, ch);
            }
        }
    }

    fn put(&mut self, col: i32, row: i32, ch: char) {
        if col < 0 || row < 0 {
            return;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return;
        }
        self.char_buffer[row * self.width + col] = ch;
    }

    /// Character at a cell, if it lies on the grid.
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.char_buffer[row * self.width + col])
    }

    /// One grid row as text.
    pub fn row_text(&self, row: usize) -> String {
        let start = row * self.width;
        self.char_buffer[start..start + self.width].iter().collect()
    }

    /// Queue the whole grid to the terminal, one cursor move per row.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.height {
            writer.queue(cursor::MoveTo(0, row as u16))?;
            writer.queue(Print(self.row_text(row)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Vector3};
    use tcube_core::{Cube, Face};

    fn face(corners: [(f64, f64); 4]) -> VisibleFace {
        VisibleFace {
            face: Face::Front,
            corners: corners.map(|(x, y)| Point2::new(x, y)),
        }
    }

    /// 48x24 gives an aspect extent of exactly (1, 1).
    fn unit_viewport() -> Viewport {
        Viewport::new(48, 24).unwrap()
    }

    #[test]
    fn diamond_face_rasterizes_to_golden_rows() {
        // Diamond of radius 0.26 around (0.5, 0.5): a cell at (col, row)
        // samples (col/48, row/24) and is inside iff
        // |col - 24| + 2 * |row - 12| <= 12.48, with no sample landing
        // exactly on the boundary.
        let viewport = unit_viewport();
        let mut renderer = AsciiRenderer::new(48, 24);
        let faces = [face([(0.5, 0.24), (0.76, 0.5), (0.5, 0.76), (0.24, 0.5)])];

        renderer.clear();
        renderer.render_faces(&faces, &viewport);

        let expected = [
            (5, 0, 0),
            (6, 24, 1),
            (7, 22, 5),
            (8, 20, 9),
            (9, 18, 13),
            (10, 16, 17),
            (11, 14, 21),
            (12, 12, 25),
            (13, 14, 21),
            (14, 16, 17),
            (15, 18, 13),
            (16, 20, 9),
            (17, 22, 5),
        ];
        for (row, start, len) in expected {
            let text = format!("{}{}", " ".repeat(start), "#".repeat(len));
            assert_eq!(renderer.row_text(row).trim_end(), text.trim_end());
        }
        // The scan region's height uses floor, so the bottom tip row is
        // never visited; everything past it stays blank.
        assert_eq!(renderer.row_text(18).trim_end(), "");
        assert_eq!(renderer.row_text(4).trim_end(), "");
    }

    #[test]
    fn earlier_slots_win_overlaps() {
        let viewport = unit_viewport();
        let mut renderer = AsciiRenderer::new(48, 24);
        let faces = [
            face([(0.4, 0.4), (0.6, 0.4), (0.6, 0.6), (0.4, 0.6)]),
            face([(0.25, 0.25), (0.75, 0.25), (0.75, 0.75), (0.25, 0.75)]),
        ];

        renderer.clear();
        renderer.render_faces(&faces, &viewport);

        // Slot 0 covers cells whose samples land in [0.4, 0.6]^2.
        assert_eq!(renderer.cell(24, 12), Some('#'));
        assert_eq!(renderer.cell(20, 10), Some('#'));
        // The surrounding ring belongs to slot 1.
        assert_eq!(renderer.cell(19, 10), Some(':'));
        assert_eq!(renderer.cell(13, 7), Some(':'));
        // Outside both faces.
        assert_eq!(renderer.cell(5, 5), Some(' '));
    }

    #[test]
    fn short_selection_never_consults_stale_hulls() {
        let viewport = unit_viewport();
        let mut renderer = AsciiRenderer::new(48, 24);

        // First frame fills slot 1 with a large square.
        let two = [
            face([(0.4, 0.4), (0.6, 0.4), (0.6, 0.6), (0.4, 0.6)]),
            face([(0.25, 0.25), (0.75, 0.25), (0.75, 0.75), (0.25, 0.75)]),
        ];
        renderer.clear();
        renderer.render_faces(&two, &viewport);
        assert_eq!(renderer.cell(13, 7), Some(':'));

        // Next frame selects a single face; the old slot-1 hull must not
        // leak into the output.
        let one = [face([(0.4, 0.4), (0.6, 0.4), (0.6, 0.6), (0.4, 0.6)])];
        renderer.clear();
        renderer.render_faces(&one, &viewport);
        assert_eq!(renderer.cell(13, 7), Some(' '));
        for row in 0..24 {
            assert!(!renderer.row_text(row).contains(':'));
        }
    }

    #[test]
    fn raster_is_deterministic() {
        let viewport = unit_viewport();
        let faces = [
            face([(0.5, 0.25), (0.75, 0.5), (0.5, 0.75), (0.25, 0.5)]),
            face([(0.25, 0.25), (0.75, 0.25), (0.75, 0.75), (0.25, 0.75)]),
        ];

        let mut first = AsciiRenderer::new(48, 24);
        first.clear();
        first.render_faces(&faces, &viewport);

        let mut second = AsciiRenderer::new(48, 24);
        second.clear();
        second.render_faces(&faces, &viewport);

        for row in 0..24 {
            assert_eq!(first.row_text(row), second.row_text(row));
        }
    }

    #[test]
    fn zero_rotation_cube_is_all_edge_on() {
        // At zero rotation every selected face projects to a segment, so
        // no cell sample ever lands exactly on one: the frame is blank.
        let cube = Cube::new(Vector3::zeros(), Point2::new(0.5, 0.5), 0.3);
        let viewport = Viewport::new(80, 24).unwrap();
        let mut renderer = AsciiRenderer::new(80, 24);

        renderer.clear();
        renderer.render_faces(&cube.visible_faces(), &viewport);

        for row in 0..24 {
            assert_eq!(renderer.row_text(row).trim_end(), "");
        }
    }

    #[test]
    fn offscreen_cells_are_discarded() {
        // A grid smaller than the viewport's scan region: every scanned
        // cell lies off the grid and is dropped without writing.
        let viewport = unit_viewport();
        let mut renderer = AsciiRenderer::new(10, 5);

        let faces = [face([(0.25, 0.25), (0.75, 0.25), (0.75, 0.75), (0.25, 0.75)])];
        renderer.clear();
        renderer.render_faces(&faces, &viewport);

        for row in 0..5 {
            assert_eq!(renderer.row_text(row).trim_end(), "");
        }
        assert!(renderer.cell(10, 0).is_none());
        assert!(renderer.cell(0, 5).is_none());
    }

    #[test]
    fn resize_reallocates_the_grid() {
        let mut renderer = AsciiRenderer::new(10, 5);
        renderer.resize(20, 10);
        assert_eq!(renderer.width(), 20);
        assert_eq!(renderer.height(), 10);
        assert_eq!(renderer.cell(19, 9), Some(' '));
    }
}
