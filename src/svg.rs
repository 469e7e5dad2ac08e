//! SVG export of a [`SpaceFillingTree`] for debugging.
//!
//! Draws the bounding box and every parent to child edge. Nodes can be numbered in the order the
//! walk first reaches them, and edges can be labelled with the quadrant they lead into.

use core::fmt::Write as _;

use crate::point::Coord;
use crate::point::Point;
use crate::tree::SpaceFillingTree;

#[derive(Debug, Clone, Copy, Default)]
pub struct SvgOptions {
    /// Write each node's depth-first visitation number at its position.
    pub dfs_order: bool,

    /// Write the direction of each edge at its midpoint.
    pub directions: bool,

    /// Extra room around the bounding box.
    pub margin: Coord,
}

/// Export the tree as an SVG document whose `viewBox` is the tree's bounding box.
pub fn render_svg(tree: &SpaceFillingTree, options: &SvgOptions) -> String {
    let bbox = tree.bbox().inflate(options.margin);
    let (width, height) = (bbox.width().max(1), bbox.height().max(1));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"{} {} {width} {height}\">",
        bbox.min.x, bbox.min.y
    );

    let corners: Vec<_> = tree
        .bbox()
        .to_polygon()
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect();
    let _ = writeln!(
        out,
        "<polygon points=\"{}\" fill=\"none\" stroke=\"gray\"/>",
        corners.join(" ")
    );

    let mut order = 0;
    let mut pending = vec![tree.root()];

    while let Some(node) = pending.pop() {
        let middle = node.position();

        if let Some(parent) = node.parent() {
            write_line(&mut out, parent.position(), middle);
        }

        if options.dfs_order {
            let _ = writeln!(out, "<text x=\"{}\" y=\"{}\">{order}</text>", middle.x, middle.y);
        }
        order += 1;

        let children: Vec<_> = node.walk_children().collect();

        if options.directions {
            for (dir, child) in &children {
                let label_at = middle.mid(&child.position());
                let _ = writeln!(
                    out,
                    "<text x=\"{}\" y=\"{}\" fill=\"blue\">{dir}</text>",
                    label_at.x, label_at.y
                );
            }
        }

        // reversed so the first child in walk order is popped first
        pending.extend(children.into_iter().rev().map(|(_, child)| child));
    }

    out.push_str("</svg>\n");
    out
}

fn write_line(out: &mut String, from: Point, to: Point) {
    let _ = writeln!(
        out,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"black\"/>",
        from.x, from.y, to.x, to.y
    );
}

#[cfg(test)]
mod test {
    use insta::assert_snapshot;

    use super::SvgOptions;
    use super::render_svg;
    use crate::point::Point;
    use crate::tree::SpaceFillingTree;

    #[test]
    fn first_ring() {
        let tree = SpaceFillingTree::new(Point::new(0, 0), 100, 0);
        let options = SvgOptions {
            dfs_order: true,
            directions: true,
            margin: 0,
        };

        assert_snapshot!(render_svg(&tree, &options).trim_end(), @r#"
        <svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="-50 -50 100 100">
        <polygon points="-50,-50 50,-50 50,50 -50,50" fill="none" stroke="gray"/>
        <text x="0" y="0">0</text>
        <text x="25" y="25" fill="blue">RD</text>
        <text x="-25" y="25" fill="blue">LD</text>
        <text x="-25" y="-25" fill="blue">LU</text>
        <text x="25" y="-25" fill="blue">RU</text>
        <line x1="0" y1="0" x2="50" y2="50" stroke="black"/>
        <text x="50" y="50">1</text>
        <line x1="0" y1="0" x2="-50" y2="50" stroke="black"/>
        <text x="-50" y="50">2</text>
        <line x1="0" y1="0" x2="-50" y2="-50" stroke="black"/>
        <text x="-50" y="-50">3</text>
        <line x1="0" y1="0" x2="50" y2="-50" stroke="black"/>
        <text x="50" y="-50">4</text>
        </svg>
        "#);
    }

    #[test]
    fn one_line_per_edge() {
        let tree = SpaceFillingTree::new(Point::new(0, 0), 1000, 2);
        let svg = render_svg(&tree, &SvgOptions::default());

        assert_eq!(svg.matches("<line ").count(), tree.len() - 1);
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn margin_widens_view_box() {
        let tree = SpaceFillingTree::new(Point::new(0, 0), 100, 0);
        let options = SvgOptions {
            margin: 10,
            ..SvgOptions::default()
        };

        assert!(render_svg(&tree, &options).starts_with(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"120\" height=\"120\" viewBox=\"-60 -60 120 120\">"
        ));
    }

    #[test]
    fn degenerate_tree_still_renders() {
        let tree = SpaceFillingTree::new(Point::new(3, 3), 0, 1);
        let svg = render_svg(&tree, &SvgOptions::default());

        assert!(svg.contains("width=\"1\" height=\"1\""));
        assert_eq!(svg.matches("<line ").count(), 16);
    }
}
