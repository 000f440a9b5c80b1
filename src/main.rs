// Headless run of the playground's training loop: three synthetic clusters,
// a fixed number of time slices, error and accuracy logged as it goes.
// For the interactive version run:
//   cargo run --bin playground --release
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

use ferrite_playground::{
    evaluate_samples, train_slice, Network, PlaygroundConfig, Result, SampleSet,
    StandardNormalSampler,
};

const SLICES: usize = 40;
const POINTS_PER_CLASS: usize = 30;
const CENTRES: [(f64, f64); 3] = [(-0.5, -0.4), (0.5, -0.4), (0.0, 0.5)];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => PlaygroundConfig::load_json(&path)?,
        None => {
            let config = PlaygroundConfig::default();
            config.validate()?;
            config
        }
    };

    let seed = config.seed.unwrap_or(2024);
    let mut sampler = StandardNormalSampler::seeded(seed);
    let mut network = Network::new(config.network.clone(), &mut sampler)?;
    let samples = clusters(&config, seed)?;

    info!(
        "training on {} points in {} classes, {} ms per slice",
        samples.len(),
        samples.classes(),
        config.time_slice_ms,
    );

    let slice = config.slice();
    for i in 1..=SLICES {
        let before = evaluate_samples(&mut network, samples.samples())?;
        let stats = train_slice(&mut network, samples.samples(), &slice)?;
        if i % 5 == 0 || i == 1 {
            info!(
                "slice {i:>3}: error = {:.4}, correct = {}/{}, {} sweeps",
                before.error, before.correct, before.total, stats.sweeps,
            );
        }
    }

    let last = evaluate_samples(&mut network, samples.samples())?;
    info!("final: error = {:.4}, accuracy = {:.1}%", last.error, last.accuracy() * 100.0);

    for (class, &(cx, cy)) in CENTRES.iter().enumerate().take(config.classes()) {
        let predicted = network.classify(&config.features.apply(cx, cy))?;
        info!("centre of class {class} at ({cx:+.2}, {cy:+.2}) -> class {predicted}");
    }
    Ok(())
}

/// Gaussian blobs around `CENTRES`, clamped to the unit square. Classes
/// beyond the number of centres are skipped.
fn clusters(config: &PlaygroundConfig, seed: u64) -> Result<SampleSet> {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let spread = Normal::new(0.0, 0.15).expect("constant std dev is valid");
    let mut set = SampleSet::new(config.features, config.classes());

    for (class, &(cx, cy)) in CENTRES.iter().enumerate().take(config.classes()) {
        for _ in 0..POINTS_PER_CLASS {
            let x: f64 = (cx + rng.sample(spread)).clamp(-1.0, 1.0);
            let y: f64 = (cy + rng.sample(spread)).clamp(-1.0, 1.0);
            set.push(x, y, class)?;
        }
    }
    Ok(set)
}
