extern crate indexmap;
#[macro_use]
extern crate itertools;
extern crate ndarray;

pub mod fraction;
pub mod inference;
pub mod init;
pub mod network;
pub mod node;
pub mod util;
pub mod variable;

pub use fraction::Fraction;
pub use inference::MapEngine;
pub use init::Prior;
pub use network::{BayesianNetwork, BayesianNetworkBuilder};
pub use node::Node;
pub use util::{Result, ThomasError};
pub use variable::Assignment;
