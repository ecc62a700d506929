//! Helpers shared by the integration tests.

use patchnode_core::{NodeError, Spread};
use patchnode_nodes::value::{ZipValues, ZipValuesInput};

/// A minimal stand-in for a patching host running a single [`ZipValues`].
///
/// The host owns the output pin and lends it to the node on every tick, the
/// way a patch keeps its pin buffers alive between frames.
#[derive(Debug, Default)]
pub struct ZipHost {
    node: ZipValues,
    output: Spread<Spread<String>>,
    ticks: usize,
}

impl ZipHost {
    #[must_use]
    pub fn new(node: ZipValues) -> Self {
        Self {
            node,
            ..Self::default()
        }
    }

    /// Evaluates the node once with the current input snapshot.
    ///
    /// # Errors
    ///
    /// Returns the node's failure wrapped with the node name.
    pub fn tick(&mut self, input: &ZipValuesInput) -> Result<&Spread<Spread<String>>, NodeError> {
        self.ticks += 1;
        self.node
            .evaluate_into(input, &mut self.output)
            .map_err(NodeError::from_node::<ZipValues>)?;
        Ok(&self.output)
    }

    #[must_use]
    pub fn output(&self) -> &Spread<Spread<String>> {
        &self.output
    }

    #[must_use]
    pub fn ticks(&self) -> usize {
        self.ticks
    }
}

/// Builds a positions spread from nested slices.
#[must_use]
pub fn positions(rows: &[&[f64]]) -> Spread<Spread<f64>> {
    rows.iter().map(|row| row.iter().copied().collect()).collect()
}

/// Borrows an output spread as plain rows for comparisons.
#[must_use]
pub fn rows(output: &Spread<Spread<String>>) -> Vec<Vec<&str>> {
    output
        .iter()
        .map(|slot| slot.iter().map(String::as_str).collect())
        .collect()
}
