use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use spanforest::{components, forest, graph_io, validate};

/// spanforest - uniform random spanning forests via Wilson's algorithm
///
/// Reads an undirected graph, samples a uniformly random spanning tree per
/// connected component with loop-erased random walks, writes the parent
/// array, and validates the result structurally.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Input graph file: `vertexCount edgeCount` followed by `u v` pairs
    #[clap(value_name = "GRAPH")]
    input: String,

    /// Output file for the parent array (stdout if not specified)
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// RNG seed for reproducible sampling (entropy-seeded if not specified)
    #[clap(long = "seed")]
    seed: Option<u64>,

    /// Require a connected graph and sample a single spanning tree
    #[clap(long = "tree")]
    tree: bool,

    /// Skip structural validation of the sampled forest
    #[clap(long = "no-validate")]
    no_validate: bool,

    /// Number of threads for per-component sampling
    #[clap(short = 't', long = "threads", default_value = "8")]
    threads: usize,

    /// Quiet mode (no progress output)
    #[clap(long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Set up rayon thread pool
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()?;

    let file = File::open(&args.input)
        .with_context(|| format!("opening graph file '{}'", args.input))?;
    let graph = graph_io::read_graph(BufReader::new(file))?;

    if !args.quiet {
        eprintln!(
            "[spanforest] Loaded graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
    }

    let components = components::decompose(&graph);
    if !args.quiet {
        eprintln!(
            "[spanforest] Number of components in the graph: {}",
            components.count()
        );
    }

    if args.tree && components.count() != 1 {
        bail!(
            "--tree requires a connected graph, but the input has {} components",
            components.count()
        );
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let parent = forest::assemble(&graph, &components, &mut rng)?;

    match args.output {
        Some(ref path) => {
            let out = File::create(path)
                .with_context(|| format!("creating output file '{path}'"))?;
            graph_io::write_parent_array(BufWriter::new(out), &parent)?;
        }
        None => {
            let stdout = io::stdout();
            graph_io::write_parent_array(stdout.lock(), &parent)?;
        }
    }

    if !args.no_validate {
        let stats = validate::validate(&parent, components.count())
            .map_err(|err| anyhow::anyhow!("validation failed: {err}"))?;
        if !args.quiet {
            eprintln!("[spanforest] Max tree depth = {}", stats.max_depth);
            eprintln!("[spanforest] Avg tree depth = {:.2}", stats.avg_depth);
            let what = if args.tree { "tree" } else { "forest" };
            eprintln!("[spanforest] Validation success: random spanning {what} created");
        }
    }

    Ok(())
}
