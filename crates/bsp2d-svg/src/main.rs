use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use bsp2d::{BspTree, TraversalOrder};
use bsp2d_svg::{
    ParseError, SvgStyle, ViewBox, demo_scene, dump_segments, parse_segments, render_document,
};
use clap::{Parser, ValueEnum};
use thiserror::Error;

/// Builds a BSP tree over a 2D segment scene and serializes the ordered
/// traversal as SVG.
#[derive(Debug, Parser)]
#[command(name = "bsp2d-svg", version, about)]
struct Args {
    /// Segment file with one `x1 y1 x2 y2` line per segment (`#` starts a
    /// comment). Omit to render the built-in demo scene.
    input: Option<PathBuf>,

    /// Output SVG path.
    #[arg(short, long, default_value = "scene.svg")]
    output: PathBuf,

    /// Traversal order used to serialize the tree.
    #[arg(long, value_enum, default_value_t = OrderArg::In)]
    order: OrderArg,

    /// Margin added around the scene's bounding box.
    #[arg(long, default_value_t = 1.0)]
    margin: f64,

    /// Print the traversed segments to stdout instead of writing SVG.
    #[arg(long)]
    dump: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OrderArg {
    Pre,
    In,
    Post,
}

impl From<OrderArg> for TraversalOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Pre => TraversalOrder::PreOrder,
            OrderArg::In => TraversalOrder::InOrder,
            OrderArg::Post => TraversalOrder::PostOrder,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Bsp(#[from] bsp2d::BspError),
    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let segments = match &args.input {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::ReadInput {
                path: path.clone(),
                source,
            })?;
            parse_segments(&text)?
        }
        None => demo_scene(),
    };
    log::info!("building BSP tree over {} segments", segments.len());

    let tree = BspTree::from_segments(segments)?;
    log::debug!(
        "tree depth {}, {} segments after splitting",
        tree.depth(),
        tree.segment_count()
    );

    let ordered = tree.segments_in_order(args.order.into());
    if args.dump {
        print!("{}", dump_segments(&ordered));
        return Ok(());
    }

    let view_box = ViewBox::fit(&ordered, args.margin);
    let svg = render_document(&ordered, &view_box, &SvgStyle::default());
    fs::write(&args.output, svg).map_err(|source| CliError::WriteOutput {
        path: args.output.clone(),
        source,
    })?;
    log::info!("wrote {}", args.output.display());

    Ok(())
}
