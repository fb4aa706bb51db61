//! Defines the interface to inference over a trained network.

use network::BayesianNetwork;
use util::{Result, ThomasError};


/// A `MapEngine` answers maximum a posteriori queries for a single unknown variable:
///     ```MAP(X | E = e) = argmax_x P(X = x, E = e)```
///
/// Both hypotheses share the same evidence, so comparing the unnormalized joint probabilities
/// is equivalent to comparing the posteriors; the normalizing constant cancels.
///
/// A `MapEngine` holds no state beyond a borrow of a trained network, so one engine can answer
/// any number of queries.
pub struct MapEngine<'a> {

    /// The trained network queries are answered against
    network: &'a BayesianNetwork

}


impl<'a> MapEngine<'a> {

    /// Construct a `MapEngine` over a trained network.
    pub fn new(network: &'a BayesianNetwork) -> Self {
        MapEngine { network }
    }


    /// Infer the most probable value of the variable at index `unknown`.
    ///
    /// The entry of `values` at `unknown` is a placeholder; the joint probability of the row is
    /// evaluated with it set to `true` and to `false`, and the greater hypothesis wins. An
    /// exact tie selects `true`. The comparison is deliberately exact - the tie behavior on the
    /// boundary is part of the contract, and an epsilon would change it.
    ///
    /// # Args
    /// * `values`: a value for every node, in node index order; the entry at `unknown` is
    ///   ignored
    /// * `unknown`: the index of the node whose value is to be inferred
    ///
    /// # Errors
    /// * `ThomasError::DimensionMismatch`, if `values` does not hold one value per node or
    ///   `unknown` is not a valid node index
    pub fn predict(&self, values: &[bool], unknown: usize) -> Result<bool> {
        if unknown >= values.len() {
            return Err(ThomasError::DimensionMismatch);
        }

        let mut hypothesis = values.to_vec();

        hypothesis[unknown] = true;
        let p_true = self.network.joint_probability(&hypothesis)?;

        hypothesis[unknown] = false;
        let p_false = self.network.joint_probability(&hypothesis)?;

        Ok(p_true >= p_false)
    }

}


// Unit tests for the MapEngine.
#[cfg(test)]
mod tests {

    use super::*;
    use network::BayesianNetworkBuilder;
    use variable::Assignment;

    /// Utility function: the A -> B network trained with (A=1, B=1) then (A=0, B=0).
    fn trained_ab() -> BayesianNetwork {
        let mut network = BayesianNetworkBuilder::new()
            .with_variable("A", &[])
            .with_variable("B", &["A"])
            .build()
            .unwrap();

        let mut obs = Assignment::new();
        obs.set("A", true);
        obs.set("B", true);
        network.train(&obs).unwrap();

        let mut obs = Assignment::new();
        obs.set("A", false);
        obs.set("B", false);
        network.train(&obs).unwrap();

        network
    }

    #[test]
    /// With A known true the true hypothesis dominates: 2/3 * 1 vs 2/3 * 0.
    fn predict_picks_the_greater_joint() {
        let network = trained_ab();
        let engine = MapEngine::new(&network);

        // the placeholder value at the unknown index must not matter
        assert_eq!(true, engine.predict(&[true, false], 1).unwrap());
        assert_eq!(true, engine.predict(&[true, true], 1).unwrap());
    }

    #[test]
    /// With A known false both hypotheses come out to exactly 1/3 * 1/2; the tie goes to true.
    fn predict_tie_favors_true() {
        let network = trained_ab();
        let engine = MapEngine::new(&network);

        assert_eq!(
            network.joint_probability(&[false, true]).unwrap(),
            network.joint_probability(&[false, false]).unwrap()
        );
        assert_eq!(true, engine.predict(&[false, false], 1).unwrap());
    }

    #[test]
    /// The unknown may sit anywhere in the row, not just at the end.
    fn predict_unknown_parent() {
        let network = trained_ab();
        let engine = MapEngine::new(&network);

        // B=true: A=true gives 2/3 * 1 = 2/3; A=false gives 1/3 * 1/2 = 1/6
        assert_eq!(true, engine.predict(&[false, true], 0).unwrap());
        // B=false: A=true gives 2/3 * 0 = 0; A=false gives 1/3 * 1/2 = 1/6
        assert_eq!(false, engine.predict(&[true, false], 0).unwrap());
    }

    #[test]
    fn predict_out_of_range_unknown() {
        let network = trained_ab();
        let engine = MapEngine::new(&network);

        let r = engine.predict(&[true, true], 2);
        assert!(r.is_err());
        match r.expect_err("missing error") {
            ThomasError::DimensionMismatch => assert!(true),
            _ => panic!("wrong error type")
        };
    }

    #[test]
    fn predict_dimension_mismatch() {
        let network = trained_ab();
        let engine = MapEngine::new(&network);

        let r = engine.predict(&[true], 0);
        assert!(r.is_err());
        match r.expect_err("missing error") {
            ThomasError::DimensionMismatch => assert!(true),
            _ => panic!("wrong error type")
        };
    }

}
