use std::{error::Error, fs, path::PathBuf};

use clap::Parser;
use posebridge::{import_directory, ImportOptions, ImportReport, Scene};

/// Import ARKit camera poses as cameras of a Z-up scene.
#[derive(Debug, Parser)]
#[command(author, version, about = "Convert an ARKit pose export into scene cameras")]
struct Args {
    /// Export directory containing camera_transforms.json.
    export_dir: PathBuf,

    /// Optional path to a JSON ImportOptions file. Flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Field of view for every camera, in degrees.
    #[arg(long)]
    fov: Option<f64>,

    /// Name of the pose list inside the export directory.
    #[arg(long)]
    transforms: Option<String>,

    /// Do not attach per-frame images as backgrounds.
    #[arg(long)]
    no_backgrounds: bool,

    /// Keep cameras already present in the scene.
    #[arg(long)]
    keep_existing: bool,

    /// Write the scene manifest here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn build_options(args: &Args) -> Result<ImportOptions, Box<dyn Error>> {
    let mut options = match &args.config {
        Some(path) => ImportOptions::from_json_file(path)?,
        None => ImportOptions::default(),
    };

    options.export_dir.clone_from(&args.export_dir);
    if let Some(fov) = args.fov {
        options.fov_degrees = fov;
    }
    if let Some(transforms) = &args.transforms {
        options.transforms_file.clone_from(transforms);
    }
    if args.no_backgrounds {
        options.attach_backgrounds = false;
    }
    if args.keep_existing {
        options.clear_existing_cameras = false;
    }
    options.validate()?;
    Ok(options)
}

fn run(args: &Args) -> Result<(Scene, ImportReport), Box<dyn Error>> {
    let options = build_options(args)?;
    let mut scene = Scene::new();
    let report = import_directory(&mut scene, &options)?;
    Ok((scene, report))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let (scene, report) = run(&args)?;

    for skipped in &report.skipped_frames {
        eprintln!("skipped frame {}: {}", skipped.index, skipped.reason);
    }
    eprintln!("created {} of {} cameras", report.created(), report.frame_count);

    let json = serde_json::to_string_pretty(&scene.manifest())?;
    match &args.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
