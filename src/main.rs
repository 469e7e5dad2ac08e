use std::io;
use std::io::BufWriter;
use std::io::Write;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use space_filling_tree::SpaceFillingTree;
use space_filling_tree::camera::Camera;
use space_filling_tree::svg::SvgOptions;
use space_filling_tree::svg::render_svg;

use args::Args;
use args::Format;

mod args;

/// Terminal size assumed when stdout is not a terminal.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        print!("{}", args::USAGE);
        return Ok(());
    }

    debug!(?args, "Parsed arguments");

    let tree = SpaceFillingTree::new(args.center, args.radius, args.depth);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match args.format {
        Format::Points => {
            for p in tree.points() {
                writeln!(out, "{} {}", p.x, p.y)?;
            }
        }
        Format::Svg => {
            let options = SvgOptions {
                dfs_order: args.dfs_order,
                directions: args.directions,
                margin: args.radius / 20,
            };

            out.write_all(render_svg(&tree, &options).as_bytes())?;
        }
        Format::Preview => {
            let (cols, rows) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
            debug!(cols, rows, "Preview size");

            // leave a line for the prompt
            let mut cam = Camera::with_terminal_size(cols, rows.saturating_sub(1).max(1));
            cam.draw_path(tree.points(), tree.bbox());

            out.write_all(cam.render().as_bytes())?;
        }
    }

    out.flush()?;

    Ok(())
}
