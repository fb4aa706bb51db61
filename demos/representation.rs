//! Provides an example of how to use Thomas to represent a Bayesian Network over binary
//! variables.
//!
//! The network is the classic sprinkler example: Rain and Sprinkler influence WetGrass.
//!
//! Jeffrey Wallace
//! EN.605.425 Probabilistic Graphical Models

extern crate thomas;
#[macro_use]
extern crate itertools;

use thomas as t;

fn main() -> t::Result<()> {

    ///////////////////////////////////////////////////
    // Step 1: Declare the network structure
    //
    // Note:   parents must be declared before their children. The uniform prior makes every
    //         fresh CPT cell read as 0.5, so the untrained network is easy to sanity check.
    let network = t::BayesianNetworkBuilder::new()
        .with_prior(t::Prior::Counts(1, 2))
        .with_variable("Rain", &[])
        .with_variable("Sprinkler", &[])
        .with_variable("WetGrass", &["Rain", "Sprinkler"])
        .build()?;

    ///////////////////////////////////////////////////
    // Step 2: Print the conditional probability tables
    println!("{}", network.dump()?);

    ///////////////////////////////////////////////////
    // Step 3: Determine the probability of every full assignment
    let mut acc = 0.0;
    for (r, s, w) in iproduct!(0..2, 0..2, 0..2) {
        let values = [r == 1, s == 1, w == 1];
        let p = network.joint_probability(&values)?;

        println!("P(Rain = {}, Sprinkler = {}, WetGrass = {}) = {:.4}", r, s, w, p);
        acc += p;
    }

    println!("---------------------------------------------");
    println!("TOTAL:                                 {:.4}", acc);

    Ok(())
}
