mod renderer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use starlit_core::config::SceneConfig;
use starlit_core::model::{Scene, clock_seed};
use starlit_core::svg::render_svg;
use starlit_core::views::render_scene;
use starlit_protocol::Viewport;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut config_path: Option<PathBuf> = None;
    let mut seed: Option<u64> = None;
    let mut svg_path: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().context("--seed needs a value")?;
                seed = Some(value.parse().context("--seed value must be an integer")?);
            }
            "--svg" => {
                svg_path = Some(PathBuf::from(
                    iter.next().context("--svg needs an output path")?,
                ));
            }
            "--help" | "-h" => {
                eprintln!("Usage: starlit [scene.json] [--seed N] [--svg out.svg]");
                return Ok(());
            }
            _ if config_path.is_none() => config_path = Some(PathBuf::from(arg)),
            other => anyhow::bail!("unexpected argument: {other}"),
        }
    }

    let config = match &config_path {
        Some(path) => {
            let data =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            SceneConfig::from_json(&data).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SceneConfig::default(),
    };
    let seed = seed.unwrap_or_else(clock_seed);

    if let Some(path) = svg_path {
        // One still frame of the freshly seeded sky; no terminal needed.
        let viewport = Viewport::new(1280.0, 720.0);
        let scene = Scene::new(&config, viewport, seed);
        let commands = render_scene(&scene, &viewport);
        let svg = render_svg(&commands, viewport.width, viewport.height);
        std::fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
        eprintln!("wrote {}", path.display());
        return Ok(());
    }

    renderer::run(&config, seed)
}
