use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use spheretrace::output::{save_image, write_ppm};
use spheretrace::render::{render, RenderSettings};
use spheretrace::scene::{read_scene, SceneDescription};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn load_scene(args: &Args) -> Result<SceneDescription> {
    match &args.scene {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening scene {}", path.display()))?;
            read_scene(file).with_context(|| format!("parsing scene {}", path.display()))
        }
        None => read_scene(io::stdin().lock()).context("parsing scene from stdin"),
    }
}

fn settings_for(args: &Args, scene: &SceneDescription) -> Result<RenderSettings> {
    let samples = args.samples.unwrap_or(scene.samples_per_pixel);
    let width = args.width.unwrap_or(scene.image_width);

    if samples == 0 {
        bail!("samples per pixel must be greater than zero");
    }
    if width == 0 {
        bail!("image width must be greater than zero");
    }

    Ok(RenderSettings::new(samples, width).with_seed(args.seed))
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("configuring worker threads")?;
    }

    let scene = load_scene(&args)?;
    let settings = settings_for(&args, &scene)?;

    info!("seed {}, {} worker threads", settings.seed, rayon::current_num_threads());

    let image = render(&scene.world, &scene.background, &settings);

    match &args.output {
        Some(path) => save_image(path, &image).with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut w = BufWriter::new(io::stdout().lock());
            write_ppm(&mut w, &image).context("writing image to stdout")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> SceneDescription {
        "image 8 200\nsky 0.5 0.7 1 1 1 1\n".parse().unwrap()
    }

    #[test]
    fn scene_values_are_used_without_overrides() {
        let args = Args::try_parse_from(["spheretrace", "--seed", "5"]).unwrap();
        let settings = settings_for(&args, &scene()).unwrap();
        assert_eq!(settings.samples_per_pixel, 8);
        assert_eq!(settings.image_width, 200);
        assert_eq!(settings.seed, 5);
    }

    #[test]
    fn command_line_overrides_scene() {
        let args = Args::try_parse_from(["spheretrace", "-s", "2", "--width", "64"]).unwrap();
        let settings = settings_for(&args, &scene()).unwrap();
        assert_eq!(settings.samples_per_pixel, 2);
        assert_eq!(settings.image_width, 64);
    }

    #[test]
    fn zero_overrides_are_rejected() {
        let args = Args::try_parse_from(["spheretrace", "-s", "0"]).unwrap();
        assert!(settings_for(&args, &scene()).is_err());

        let args = Args::try_parse_from(["spheretrace", "--width", "0"]).unwrap();
        assert!(settings_for(&args, &scene()).is_err());
    }
}
