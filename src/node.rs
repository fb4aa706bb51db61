//! Defines a `Node`, a single binary random variable in a `BayesianNetwork` together with its
//! Conditional Probability Table (CPT).

use fraction::Fraction;
use init::Prior;
use util::{Result, ThomasError};

use ndarray::prelude as nd;

/// Alias a one dimensional ndarray::Array of `Fraction` as CountTable
pub type CountTable = nd::Array1<Fraction>;


/// A single binary random variable and its CPT.
///
/// A `Node` knows its parents only as indices into the owning network's node list; the name to
/// index resolution happens once, while the network is built. The CPT holds one `Fraction` of
/// observation counts per assignment of values to the parents - `2^L` cells for `L` parents,
/// which collapses to a single unconditional cell for a node with no parents. The table is
/// allocated once, at construction, and only its counts change afterwards.
///
/// # CPT index encoding
/// The cell for a parent assignment is found by reading the parent values as a binary number in
/// which the first parent is the most significant bit and a value of `false` sets the bit.
/// Index 0 therefore corresponds to all parents `true` and index `2^L - 1` to all parents
/// `false`. Printed tables enumerate rows from the highest index down, so this encoding is part
/// of the output contract.
#[derive(Clone, Debug)]
pub struct Node {

    /// The name of the variable. Unique within the owning network.
    name: String,

    /// Indices of the parent variables in the owning network's node list.
    parents: Vec<usize>,

    /// The CPT of this node.
    cpt: CountTable

}


impl Node {

    /// Construct a new `Node` with every CPT cell initialized from `prior`.
    ///
    /// # Args
    /// * `name`: the name of the variable
    /// * `parents`: indices of the parent variables in the owning network's node list. Callers
    ///   must only pass indices of nodes placed earlier in that list; this construction order is
    ///   what guarantees the topological property the network's chain rule relies on.
    /// * `prior`: the initialization policy for the CPT cells
    ///
    /// # Errors
    /// * `ThomasError::DivideByZero`, if `prior` carries a zero denominator
    pub fn new(name: &str, parents: Vec<usize>, prior: Prior) -> Result<Self> {
        let cell = prior.build_cell()?;
        let cpt = CountTable::from_elem(1 << parents.len(), cell);

        Ok(Node { name: String::from(name), parents, cpt })
    }


    /// Get the name of this `Node`.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Get the parent indices of this `Node`, in CPT bit order.
    pub fn parents(&self) -> &[usize] {
        &self.parents
    }


    /// Get the CPT of this `Node`.
    pub fn cpt(&self) -> &CountTable {
        &self.cpt
    }


    /// Updates the CPT of this node given an observation of its value and its parents' values.
    ///
    /// # Args
    /// * `pvalues`: values of its parents, in the order given by `parents()`
    /// * `value`: value of this node
    ///
    /// # Errors
    /// * `ThomasError::DimensionMismatch`, if `pvalues` does not hold one value per parent
    pub fn update(&mut self, pvalues: &[bool], value: bool) -> Result<()> {
        let index = self.table_index(pvalues)?;
        self.cpt[index].observe(value);

        Ok(())
    }


    /// The probability that this variable takes `value` given its parents' values -
    /// ```P(node = value | parents = pvalues)``` under the current counts.
    ///
    /// # Errors
    /// * `ThomasError::DimensionMismatch`, if `pvalues` does not hold one value per parent
    pub fn probability(&self, pvalues: &[bool], value: bool) -> Result<f64> {
        let index = self.table_index(pvalues)?;
        let p = self.cpt[index].probability()?;

        if value {
            Ok(p)
        } else {
            Ok(1.0 - p)
        }
    }


    /// Compute the CPT cell index for an assignment of values to the parents.
    fn table_index(&self, pvalues: &[bool]) -> Result<usize> {
        if pvalues.len() != self.parents.len() {
            return Err(ThomasError::DimensionMismatch);
        }

        let mut index = 0;
        for (i, &value) in pvalues.iter().enumerate() {
            if !value {
                index += 1 << (pvalues.len() - i - 1);
            }
        }

        Ok(index)
    }

}


// Unit tests for the Node struct.
#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn table_sizes() {
        let n = Node::new("A", vec![], Prior::Laplace).unwrap();
        assert_eq!(1, n.cpt().len());

        let n = Node::new("B", vec![0], Prior::Laplace).unwrap();
        assert_eq!(2, n.cpt().len());

        let n = Node::new("C", vec![0, 1, 2], Prior::Laplace).unwrap();
        assert_eq!(8, n.cpt().len());
    }

    #[test]
    fn fresh_cells_hold_the_prior() {
        let n = Node::new("C", vec![0, 1], Prior::Laplace).unwrap();
        for cell in n.cpt().iter() {
            assert_eq!(1, cell.numerator());
            assert_eq!(1, cell.denominator());
        }
    }

    #[test]
    /// The encoding maps the 2^L parent vectors onto {0, ..., 2^L - 1} with no collisions;
    /// all-true lands on 0 and all-false on 2^L - 1.
    fn index_encoding_bijection() {
        let n = Node::new("D", vec![0, 1, 2], Prior::Laplace).unwrap();

        let mut seen = vec![false; 8];
        for (a, b, c) in iproduct!(0..2, 0..2, 0..2) {
            let pvalues = [a == 1, b == 1, c == 1];
            let index = n.table_index(&pvalues).unwrap();

            assert!(index < 8);
            assert!(! seen[index]);
            seen[index] = true;
        }

        assert!(seen.iter().all(|&s| s));
        assert_eq!(0, n.table_index(&[true, true, true]).unwrap());
        assert_eq!(7, n.table_index(&[false, false, false]).unwrap());
    }

    #[test]
    /// The first parent is the most significant bit, and `false` is the value that sets it.
    fn index_encoding_bit_order() {
        let n = Node::new("D", vec![0, 1], Prior::Laplace).unwrap();

        assert_eq!(0, n.table_index(&[true, true]).unwrap());
        assert_eq!(1, n.table_index(&[true, false]).unwrap());
        assert_eq!(2, n.table_index(&[false, true]).unwrap());
        assert_eq!(3, n.table_index(&[false, false]).unwrap());
    }

    #[test]
    fn update_counts_the_right_cell() {
        let mut n = Node::new("B", vec![0], Prior::Laplace).unwrap();

        n.update(&[true], true).unwrap();
        n.update(&[false], false).unwrap();

        // parent true -> index 0; parent false -> index 1
        assert_eq!(2, n.cpt()[0].numerator());
        assert_eq!(2, n.cpt()[0].denominator());
        assert_eq!(1, n.cpt()[1].numerator());
        assert_eq!(2, n.cpt()[1].denominator());
    }

    #[test]
    /// One update on a fresh cell with prior counts n/d must read back as (n+1)/(d+1).
    fn update_round_trip() {
        let mut n = Node::new("B", vec![0], Prior::Counts(1, 2)).unwrap();

        n.update(&[true], true).unwrap();

        assert_eq!(2.0 / 3.0, n.probability(&[true], true).unwrap());
    }

    #[test]
    fn probability_complement() {
        let mut n = Node::new("B", vec![0], Prior::Laplace).unwrap();
        n.update(&[false], false).unwrap();

        let p = n.probability(&[false], true).unwrap();
        assert_eq!(0.5, p);
        assert_eq!(1.0 - p, n.probability(&[false], false).unwrap());
    }

    #[test]
    fn update_dimension_mismatch() {
        let mut n = Node::new("B", vec![0], Prior::Laplace).unwrap();

        let r = n.update(&[true, false], true);
        assert!(r.is_err());
        match r.expect_err("missing error") {
            ThomasError::DimensionMismatch => assert!(true),
            _ => panic!("wrong error type")
        };
    }

    #[test]
    fn probability_dimension_mismatch() {
        let n = Node::new("B", vec![0, 1], Prior::Laplace).unwrap();

        let r = n.probability(&[true], true);
        assert!(r.is_err());
        match r.expect_err("missing error") {
            ThomasError::DimensionMismatch => assert!(true),
            _ => panic!("wrong error type")
        };
    }

}
