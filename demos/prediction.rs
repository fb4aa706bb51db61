//! Provides an example of how to use Thomas to fill in the most probable value of an unknown
//! variable in test data, using a network trained on complete observations.
//!
//! Jeffrey Wallace
//! EN.605.425 Probabilistic Graphical Models

extern crate thomas;

use thomas as t;

fn main() -> t::Result<()> {

    /////////////////////////////////////////////////////
    // Step 1: Build and train the network
    let mut network = t::BayesianNetworkBuilder::new()
        .with_variable("Rain", &[])
        .with_variable("Sprinkler", &[])
        .with_variable("WetGrass", &["Rain", "Sprinkler"])
        .build()?;

    // (Rain, Sprinkler, WetGrass) training rows
    let rows = [
        (true, false, true),
        (true, false, true),
        (false, true, true),
        (false, false, false),
        (false, false, false),
        (false, true, true),
        (true, true, true),
        (false, false, false)
    ];

    for &(r, s, w) in rows.iter() {
        let mut obs = t::Assignment::new();
        obs.set("Rain", r);
        obs.set("Sprinkler", s);
        obs.set("WetGrass", w);
        network.train(&obs)?;
    }

    /////////////////////////////////////////////////////
    // Step 2: Build an inference engine over the trained network
    let engine = t::MapEngine::new(&network);

    /////////////////////////////////////////////////////
    // Step 3: Fill in the unknown column of each test row
    //
    // Note:   each test row has exactly one unknown variable, marked by its index; the value
    //         at that position is a placeholder
    let queries = [
        ([true, false, false], 2),
        ([false, false, false], 2),
        ([false, true, true], 0),
        ([true, false, true], 1)
    ];

    println!("Rain, Sprinkler, WetGrass");
    for &(values, unknown) in queries.iter() {
        let mut completed = values;
        completed[unknown] = engine.predict(&values, unknown)?;

        let rendered: Vec<&str> = completed.iter()
            .enumerate()
            .map(|(i, &v)| {
                if i == unknown {
                    if v { "1*" } else { "0*" }
                } else {
                    if v { "1" } else { "0" }
                }
            })
            .collect();

        println!("{}", rendered.join(", "));
    }

    Ok(())
}
