use crate::aabb::Aabb;
use crate::point::Point;
use crate::tree::SpaceFillingTree;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// A terminal canvas. Every character cell holds a 2x4 grid of braille dots.
pub struct Camera {
    /// The pixel buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the pixel buffer
    w: usize,

    /// Height of the pixel buffer
    h: usize,
}

impl Camera {
    /// A blank canvas of `w` by `h` braille dots. Both are raised to at least `1`.
    pub fn new(w: usize, h: usize) -> Self {
        let (w, h) = (w.max(1), h.max(1));
        let cb = vec![false; w * h];

        // Let `w` and `h` refer to width and height of the pixel buffer. Then `bw = ceil(w / 2)`
        // and `bh = ceil(h / 4)` are the width and height of braille characters of our framebuffer
        // (that is, not accounting for the trailing newlines expected at the end of each line).
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));
        let cp = vec![BRAILLE_EMPTY; bw * bh];

        // Each braille character is 3 bytes, and newlines one byte.
        let fb = String::with_capacity(3 * (bw * bh) + bh);

        Self { cb, fb, cp, w, h }
    }

    /// A canvas covering `cols` by `rows` terminal characters.
    pub fn with_terminal_size(cols: u16, rows: u16) -> Self {
        Self::new(cols as usize * 2, rows as usize * 4)
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Turns on a single pixel of the framebuffer
    pub fn draw_pixel(&mut self, x: usize, y: usize) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);

        self.cb[i] = true;
    }

    /// Turns on every pixel between two pixels, both ends included.
    pub fn draw_line(&mut self, from: (usize, usize), to: (usize, usize)) {
        // always step from the smaller end so a line lights the same pixels both ways round
        let (from, to) = if from <= to { (from, to) } else { (to, from) };

        // Bresenham, in all octants
        let (mut x, mut y) = (from.0 as isize, from.1 as isize);
        let (x1, y1) = (to.0 as isize, to.1 as isize);

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.draw_pixel(x as usize, y as usize);

            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draws every parent to child edge of `tree`, scaled to fit the canvas.
    pub fn draw_tree(&mut self, tree: &SpaceFillingTree) {
        let bbox = *tree.bbox();

        for node in tree.iter() {
            if let Some(parent) = node.parent() {
                let from = self.project(&bbox, parent.position());
                let to = self.project(&bbox, node.position());

                self.draw_line(from, to);
            }
        }
    }

    /// Draws a polyline through `points`, mapping `bbox` onto the canvas.
    pub fn draw_path(&mut self, points: impl IntoIterator<Item = Point>, bbox: &Aabb) {
        let mut last = None;

        for p in points {
            let px = self.project(bbox, p);

            match last {
                Some(prev) => self.draw_line(prev, px),
                None => self.draw_pixel(px.0, px.1),
            }

            last = Some(px);
        }
    }

    /// Map a point inside `bbox` to a pixel. Both axes share one scale so shapes keep their
    /// aspect ratio.
    fn project(&self, bbox: &Aabb, p: Point) -> (usize, usize) {
        let span = bbox.width().max(bbox.height()).max(1) as i128;
        let side = (self.w.min(self.h) - 1) as i128;

        let scale = |v: i64, min: i64| -> usize {
            let v = (v as i128 - min as i128).clamp(0, span);
            (v * side / span) as usize
        };

        (scale(p.x, bbox.min.x), scale(p.y, bbox.min.y))
    }

    /// Reset the pixel buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Fundamentally, we have a framebuffer of every pixel on our screen, and we ask ourselves "Is
    /// this pixel on or off?".
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            let (x, y) = self.xy_to(n);
            let hex = Self::get_hex_value(x, y);

            if px {
                self.cp[(y / 4) * bw + (x / 2)] += hex;
            }
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // every codepoint stays within the braille block
            self.fb.push(char::from_u32(c).unwrap_or(' '));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
