use std::str::FromStr;

use anyhow::Context;
use anyhow::bail;

use space_filling_tree::Coord;
use space_filling_tree::Point;

pub const USAGE: &str = "\
usage: space-filling-tree [options]

options:
    --center X,Y        middle of the tree (default 0,0)
    --radius R          distance from the middle to the outermost ring (default 1000)
    --depth D           subdivisions below the first ring (default 3)
    --format F          points, svg or preview (default points)
    --dfs-order         svg: number nodes in walk order
    --directions        svg: label edges with their quadrant
    --help              print this message
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One `x y` line per walk position.
    Points,

    /// Debug drawing of the tree.
    Svg,

    /// Braille drawing of the walk, sized to the terminal.
    Preview,
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "points" => Ok(Format::Points),
            "svg" => Ok(Format::Svg),
            "preview" => Ok(Format::Preview),
            other => bail!("Unknown format \"{other}\", expected points, svg or preview"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub center: Point,
    pub radius: Coord,
    pub depth: u32,
    pub format: Format,
    pub dfs_order: bool,
    pub directions: bool,
    pub help: bool,
}

impl Default for Args {
    fn default() -> Self {
        Args {
            center: Point::new(0, 0),
            radius: 1000,
            depth: 3,
            format: Format::Points,
            dfs_order: false,
            directions: false,
            help: false,
        }
    }
}

impl Args {
    /// Parse command line arguments, without the program name.
    pub fn parse<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .with_context(|| format!("Missing value for {flag}"))
            };

            match flag.as_str() {
                "--center" => parsed.center = parse_point(&value()?)?,
                "--radius" => {
                    let radius = value()?;
                    parsed.radius = radius
                        .parse()
                        .with_context(|| format!("Invalid radius \"{radius}\""))?;

                    if parsed.radius < 0 {
                        bail!("Radius must not be negative, got {}", parsed.radius);
                    }
                }
                "--depth" => {
                    let depth = value()?;
                    parsed.depth = depth
                        .parse()
                        .with_context(|| format!("Invalid depth \"{depth}\""))?;
                }
                "--format" => parsed.format = value()?.parse()?,
                "--dfs-order" => parsed.dfs_order = true,
                "--directions" => parsed.directions = true,
                "--help" | "-h" => parsed.help = true,
                other => bail!("Unrecognized argument \"{other}\""),
            }
        }

        Ok(parsed)
    }
}

/// Parse `X,Y`.
fn parse_point(s: &str) -> anyhow::Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("Expected a point like 10,-20, got \"{s}\"")
    };

    let x: Coord = x.trim().parse().context("Failed to parse x coordinate")?;
    let y: Coord = y.trim().parse().context("Failed to parse y coordinate")?;

    Ok(Point::new(x, y))
}
