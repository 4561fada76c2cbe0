//! Parasurf CLI - generate and inspect parametric surface meshes.
//!
//! Usage: parasurf <COMMAND> [OPTIONS]
//!
//! Run `parasurf --help` for available commands.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use parasurf::algo::NormalOptions;
use parasurf::io;
use parasurf::mesh::TriangleMesh;
use parasurf::surfaces::Surface;

#[derive(Parser)]
#[command(name = "parasurf")]
#[command(author, version, about = "Parametric surface mesh generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a surface and write it as a .mesh file
    Generate {
        /// Surface to generate
        #[arg(value_enum)]
        surface: SurfaceKind,

        /// Output mesh file
        output: PathBuf,

        /// Number of rings (steps around the ring axis)
        #[arg(short, long, default_value = "64")]
        rings: usize,

        /// Number of slices (steps along the slice axis)
        #[arg(short, long, default_value = "32")]
        slices: usize,

        /// Use single-threaded execution (for benchmarking)
        #[arg(long)]
        sequential: bool,

        /// Scan the full triangle list per vertex instead of building an index
        #[arg(long)]
        scan: bool,
    },

    /// Display mesh information
    Info {
        /// Input mesh file
        input: PathBuf,

        /// Check that every triangle references valid, distinct vertices
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SurfaceKind {
    /// Unit sphere (radial normals)
    Sphere,
    /// Torus with radii 1 and 0.5
    Torus,
    /// Klein bottle
    Klein,
    /// Figure-8 "bagel" Klein bottle
    BagelKlein,
}

impl From<SurfaceKind> for Surface {
    fn from(kind: SurfaceKind) -> Self {
        match kind {
            SurfaceKind::Sphere => Surface::Sphere,
            SurfaceKind::Torus => Surface::Torus,
            SurfaceKind::Klein => Surface::Klein,
            SurfaceKind::BagelKlein => Surface::BagelKlein,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Generate {
            surface,
            output,
            rings,
            slices,
            sequential,
            scan,
        } => {
            cmd_generate(surface.into(), &output, rings, slices, sequential, scan)?;
        }

        Commands::Info { input, validate } => {
            cmd_info(&input, validate)?;
        }
    }

    Ok(())
}

fn cmd_generate(
    surface: Surface,
    output: &PathBuf,
    rings: usize,
    slices: usize,
    sequential: bool,
    scan: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = NormalOptions::default()
        .with_parallel(!sequential)
        .with_adjacency(!scan);

    let mode = if sequential { "sequential" } else { "parallel" };
    println!("Generating {} ({} rings, {} slices, {})...", surface, rings, slices, mode);

    let start = Instant::now();
    let mesh = surface.generate(rings, slices, &options)?;
    let elapsed = start.elapsed();

    println!("Result: {} vertices, {} triangles", mesh.num_vertices(), mesh.num_triangles());
    io::save(&mesh, output)?;
    println!("Saved: {} ({:.2?})", output.display(), elapsed);

    Ok(())
}

fn cmd_info(input: &PathBuf, validate: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mesh: TriangleMesh = io::load(input)?;

    println!("File: {}", input.display());
    println!("Vertices: {}", mesh.num_vertices());
    println!("Triangles: {}", mesh.num_triangles());
    println!("Size: {} bytes", io::binary::encoded_len(&mesh));

    if let Some((min, max)) = mesh.bounding_box() {
        println!("Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z);
        let diag = max - min;
        println!("Dimensions: {:.3} x {:.3} x {:.3}", diag.x, diag.y, diag.z);
    }

    // Normal statistics
    let unset = mesh
        .vertices()
        .iter()
        .filter(|v| v.normal == [0.0; 3])
        .count();
    let non_unit = mesh
        .vertices()
        .iter()
        .filter(|v| v.normal != [0.0; 3] && (v.normal_vector().norm() - 1.0).abs() > 1e-3)
        .count();
    println!("Normals: {} unset, {} not unit length", unset, non_unit);

    if validate {
        match mesh.validate() {
            Ok(()) => println!("Indices: valid"),
            Err(e) => {
                println!("Indices: invalid ({})", e);
                return Err(e.into());
            }
        }
    }

    Ok(())
}
