//! Defines a `BayesianNetwork`, a directed model over binary variables that represents the
//! factorization of a probability distribution P, and the builder used to assemble one.

use init::Prior;
use node::Node;
use util::{Result, ThomasError};
use variable::Assignment;

use indexmap::IndexMap;
use itertools::Itertools;


/// Represents a Bayesian Network over binary variables.
///
/// # Representation
/// A traditional graph data structure is not used; the parent indices held by each `Node`
/// implicitly define the edges of the DAG. Nodes are held in an `IndexMap` keyed by name, and
/// since the builder only accepts parents that are already present, the map's insertion order is
/// a topological order: iterating always visits parents before children. A node's position in
/// the map is the index its children use to refer to it, and the same map answers both
/// name-to-index and index-to-name lookups.
///
/// # Lifecycle
/// The structure is fixed once `build` returns; only CPT counts change, through `train`. After
/// training the network is queried read-only - `joint_probability` has no hidden state and may
/// be called any number of times.
#[derive(Debug)]
pub struct BayesianNetwork {

    /// The `Node`s comprising the network, keyed by name, in topological order.
    graph: IndexMap<String, Node>

}


impl BayesianNetwork {

    /// Look up a node's index based on its name.
    pub fn lookup_index(&self, name: &str) -> Option<usize> {
        self.graph.get_full(name).map(|(index, _, _)| index)
    }


    /// Look up a node's name based on its index.
    pub fn lookup_name(&self, index: usize) -> Option<&str> {
        self.graph.get_index(index).map(|(name, _)| name.as_str())
    }


    /// Get the node at the given index.
    pub fn node(&self, index: usize) -> Option<&Node> {
        self.graph.get_index(index).map(|(_, node)| node)
    }


    /// Get the number of nodes in the network.
    pub fn num_nodes(&self) -> usize {
        self.graph.len()
    }


    /// Iterate the nodes of the network in topological order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.values()
    }


    /// Update every node's CPT with one complete observation.
    ///
    /// For each node in index order, the node's own value and its parents' values are extracted
    /// from `observation` and counted. Updates only accumulate, so training on a set of
    /// observations produces the same final counts in whatever order the rows are applied.
    ///
    /// # Errors
    /// * `ThomasError::IncompleteAssignment`, if `observation` is missing a value for any
    ///   variable of the network. The row is rejected before any counts move.
    pub fn train(&mut self, observation: &Assignment) -> Result<()> {
        // resolve every node's value up front so a bad row cannot leave partial counts behind
        let values = self.resolve(observation)?;

        let pvalues: Vec<Vec<bool>> = self.graph.values()
            .map(|node| node.parents().iter().map(|&p| values[p]).collect())
            .collect();

        for (i, node) in self.graph.values_mut().enumerate() {
            node.update(&pvalues[i], values[i])?;
        }

        Ok(())
    }


    /// Update every node's CPT with a batch of observations, one `train` call per row.
    ///
    /// # Errors
    /// * `ThomasError::IncompleteAssignment`, if a row is missing a value for any variable of
    ///   the network. Rows before the offending one have already been counted; callers that
    ///   cannot tolerate that rebuild the network or validate the batch first.
    pub fn train_all<'a>(&mut self, rows: impl Iterator<Item = &'a Assignment>) -> Result<()> {
        for row in rows {
            self.train(row)?;
        }

        Ok(())
    }


    /// Determine the probability of a full assignment of values to the network.
    ///
    /// Specifically, this computes ```P(x1, ..., xn)``` by the chain rule:
    /// ```P(x1, ..., xn) = prod_i P(xi | parents(xi))```. The factorization is valid because
    /// parents always precede children in the node order and each CPT already encodes the
    /// conditional distribution.
    ///
    /// # Args
    /// * `values`: a value for every node, in node index order
    ///
    /// # Errors
    /// * `ThomasError::DimensionMismatch`, if `values` does not hold exactly one value per node
    pub fn joint_probability(&self, values: &[bool]) -> Result<f64> {
        if values.len() != self.graph.len() {
            return Err(ThomasError::DimensionMismatch);
        }

        let mut p = 1.0;
        for (i, node) in self.graph.values().enumerate() {
            let pvalues: Vec<bool> = node.parents().iter().map(|&j| values[j]).collect();
            p *= node.probability(&pvalues, values[i])?;
        }

        Ok(p)
    }


    /// Render every node's CPT as a printable table.
    ///
    /// Each node contributes its name, a line listing its parents' names separated by single
    /// spaces (omitted for a node with no parents), and one line per CPT row. Rows run from
    /// index `2^L - 1` down to 0, each listing the parent values - `1` for true, `0` for false,
    /// so the first row shows every parent `0` - followed by the cell's value as a double.
    pub fn dump(&self) -> Result<String> {
        let mut out = String::new();

        for node in self.graph.values() {
            out.push_str(node.name());
            out.push_str(":\n");

            if ! node.parents().is_empty() {
                let parents = node.parents().iter()
                    .filter_map(|&p| self.lookup_name(p))
                    .join(" ");
                out.push_str(&parents);
                out.push('\n');
            }

            let width = node.parents().len();
            for index in (0..node.cpt().len()).rev() {
                for bit in 0..width {
                    // the encoding sets the bit for `false`, so a clear bit prints as 1
                    let set = (index >> (width - bit - 1)) & 1 == 1;
                    out.push_str(if set { "0" } else { "1" });
                    out.push_str(", ");
                }

                let p = node.cpt()[index].probability()?;
                out.push_str(&format!("{:?}\n", p));
            }
        }

        Ok(out)
    }


    /// Extract one value per node, in node index order, from an observation.
    fn resolve(&self, observation: &Assignment) -> Result<Vec<bool>> {
        self.graph.keys()
            .map(|name| observation.get(name).ok_or(ThomasError::IncompleteAssignment))
            .collect()
    }

}


/// An implementation of the [builder pattern] for creating a `BayesianNetwork`.
///
/// Variables must be declared in topological order: every parent named in a declaration must
/// already have been declared. The first error encountered is held until `build`, so
/// declarations chain without intermediate checks.
///
/// [builder pattern]: https://en.wikipedia.org/wiki/Builder_pattern
pub struct BayesianNetworkBuilder {

    /// The `Node`s declared so far, in declaration order
    nodes: IndexMap<String, Node>,

    /// The CPT cell initialization policy
    prior: Prior,

    /// The error state of the builder
    err: Option<ThomasError>

}


impl BayesianNetworkBuilder {

    /// Construct a new `BayesianNetworkBuilder` representing an empty network.
    pub fn new() -> Self {
        BayesianNetworkBuilder {
            nodes: IndexMap::new(),
            prior: Prior::Laplace,
            err: None
        }
    }


    /// Set the initialization policy for every CPT cell built by this builder.
    ///
    /// Applies to variables declared after this call, so set it first.
    pub fn with_prior(mut self, prior: Prior) -> Self {
        self.prior = prior;
        self
    }


    /// Declare a variable of the network.
    ///
    /// # Args
    /// * `name`: the name of the variable; must be unique within the network
    /// * `parents`: names of the parent variables, in CPT bit order; every parent must already
    ///   have been declared
    pub fn with_variable(mut self, name: &str, parents: &[&str]) -> Self {
        ///////////////////////////////////////////////////////////////////////
        // 1) if we are in an error state, do nothing
        if self.err.is_some() {
            return self;
        }

        ///////////////////////////////////////////////////////////////////////
        // 2) Check for error conditions
        if self.nodes.contains_key(name) {
            self.err = Some(ThomasError::DuplicateVariable);
            return self;
        }

        let indices: Vec<Option<usize>> = parents.iter()
            .map(|p| self.nodes.get_full(*p).map(|(index, _, _)| index))
            .collect();

        if indices.iter().any(|index| index.is_none()) {
            self.err = Some(ThomasError::MissingParent);
            return self;
        }

        ///////////////////////////////////////////////////////////////////////
        // 3) Build the node and add it to the current network
        let indices: Vec<usize> = indices.into_iter().filter_map(|index| index).collect();

        match Node::new(name, indices, self.prior) {
            Ok(node) => {
                self.nodes.insert(String::from(name), node);
            },
            Err(e) => {
                self.err = Some(e);
            }
        };

        self
    }


    /// Complete building the network.
    ///
    /// # Returns
    /// the `BayesianNetwork`, or the first error recorded while declaring variables
    ///
    /// # Postcondition
    /// This call consumes the `BayesianNetworkBuilder`
    pub fn build(self) -> Result<BayesianNetwork> {
        if let Some(e) = self.err {
            Err(e)
        } else {
            Ok(BayesianNetwork { graph: self.nodes })
        }
    }

}
