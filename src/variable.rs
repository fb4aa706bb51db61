//! Definition of the variable module
//!
//! An `Assignment` records the observed values of named binary variables. One `Assignment`
//! corresponds to one row of observation data handed to the library by its callers.

use indexmap::IndexMap;

/// A set of observed Boolean values, keyed by variable name.
#[derive(Clone, Debug, Default)]
pub struct Assignment {
    values: IndexMap<String, bool>
}

impl Assignment {

    /// Construct a new, empty `Assignment`.
    pub fn new() -> Self {
        Assignment { values: IndexMap::new() }
    }


    /// Record the observed value of the named variable. The last write for a name wins.
    pub fn set(&mut self, name: &str, value: bool) {
        self.values.insert(String::from(name), value);
    }


    /// Get the observed value of the named variable.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).cloned()
    }


    /// The number of variables with observed values.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Check if this `Assignment` holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

}


// Unit tests for the Assignment struct.
#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn set_and_get() {
        let mut a = Assignment::new();
        assert!(a.is_empty());

        a.set("Rain", true);
        a.set("Sprinkler", false);

        assert_eq!(2, a.len());
        assert_eq!(Some(true), a.get("Rain"));
        assert_eq!(Some(false), a.get("Sprinkler"));
        assert_eq!(None, a.get("WetGrass"));
    }

    #[test]
    fn last_write_wins() {
        let mut a = Assignment::new();
        a.set("Rain", true);
        a.set("Rain", false);

        assert_eq!(1, a.len());
        assert_eq!(Some(false), a.get("Rain"));
    }

}
