//! Provides an example of how to use Thomas to estimate the conditional probability tables of a
//! Bayesian Network from observation data.
//!
//! Jeffrey Wallace
//! EN.605.425 Probabilistic Graphical Models

extern crate rand;
extern crate thomas;

use rand::Rng;
use thomas as t;

/// Truth parameters the observations are drawn from.
const P_RAIN: f64 = 0.2;
const P_SPRINKLER: f64 = 0.4;

/// P(WetGrass = 1 | Rain, Sprinkler), indexed by (Rain, Sprinkler).
fn p_wet(rain: bool, sprinkler: bool) -> f64 {
    match (rain, sprinkler) {
        (true, true) => 0.99,
        (true, false) => 0.9,
        (false, true) => 0.8,
        (false, false) => 0.05
    }
}

fn main() -> t::Result<()> {

    ////////////////////////////////////////////////////////////////////////////
    // Step 1:  Build the target network
    //
    // Note:    every CPT cell starts at the add-one prior; training refines it
    let mut network = t::BayesianNetworkBuilder::new()
        .with_variable("Rain", &[])
        .with_variable("Sprinkler", &[])
        .with_variable("WetGrass", &["Rain", "Sprinkler"])
        .build()?;

    ////////////////////////////////////////////////////////////////////////////
    // Step 2:  Build a dataset by sampling the truth distribution
    let mut rng = rand::thread_rng();
    let num_samples = 10_000;

    let dataset: Vec<t::Assignment> = (0..num_samples).map(|_| {
        let rain = rng.gen::<f64>() < P_RAIN;
        let sprinkler = rng.gen::<f64>() < P_SPRINKLER;
        let wet = rng.gen::<f64>() < p_wet(rain, sprinkler);

        let mut obs = t::Assignment::new();
        obs.set("Rain", rain);
        obs.set("Sprinkler", sprinkler);
        obs.set("WetGrass", wet);
        obs
    }).collect();

    ////////////////////////////////////////////////////////////////////////////
    // Step 3:  Estimate the network's parameters from the dataset
    network.train_all(dataset.iter())?;

    ////////////////////////////////////////////////////////////////////////////
    // Step 4:  Compare the estimated tables against the truth
    println!("Estimated from {} samples:", num_samples);
    println!("{}", network.dump()?);

    println!("Truth:");
    println!("P(Rain = 1)                              = {}", P_RAIN);
    println!("P(Sprinkler = 1)                         = {}", P_SPRINKLER);
    for &(r, s) in [(false, false), (false, true), (true, false), (true, true)].iter() {
        println!(
            "P(WetGrass = 1 | Rain = {}, Sprinkler = {}) = {}",
            r as u8, s as u8, p_wet(r, s)
        );
    }

    Ok(())
}
