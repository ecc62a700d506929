use patchnode_core::{Describe, Node, NodeInfo, PinInfo, Spread};
use thiserror::Error;

use super::{AbsentPositions, ZipValuesConfig};
use crate::format::DecimalString;

/// A node that pairs each positions slice with its index and stringifies both.
///
/// For every slot `i` below `min(positions, index)` the output holds the
/// decimal strings of `positions[i]` in order, followed by the decimal string
/// of `index[i]`. Slots past the shorter input are ignored.
///
/// # Example
///
/// ```
/// use patchnode_core::{Node, Spread};
/// use patchnode_nodes::value::{ZipValues, ZipValuesInput};
///
/// let input = ZipValuesInput::new(
///     Spread::from([Spread::from([1.0, 2.0]), Spread::from([3.5])]),
///     Spread::from([10, 20, 30]),
/// );
///
/// let output = ZipValues::default().evaluate(input).unwrap();
///
/// assert_eq!(output[0].as_slice(), ["1", "2", "10"]);
/// assert_eq!(output[1].as_slice(), ["3.5", "20"]);
/// assert_eq!(output.slice_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZipValues {
    config: ZipValuesConfig,
}

/// The input pins of [`ZipValues`].
///
/// A `None` positions slice stands for a slice the host reported as absent;
/// how it is handled depends on [`ZipValuesConfig::absent_positions`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZipValuesInput {
    pub positions: Spread<Option<Spread<f64>>>,
    pub index: Spread<i32>,
}

impl ZipValuesInput {
    /// Creates an input where every positions slice is present.
    #[must_use]
    pub fn new(positions: Spread<Spread<f64>>, index: Spread<i32>) -> Self {
        Self {
            positions: positions.into_iter().map(Some).collect(),
            index,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ZipValuesError {
    #[error("positions slice {slice} is absent")]
    AbsentPositions { slice: usize },
}

impl ZipValues {
    #[must_use]
    pub fn new(config: ZipValuesConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> ZipValuesConfig {
        self.config
    }

    /// Fills a host-owned output spread in place.
    ///
    /// The output is resized to the paired slice count and every kept slot is
    /// cleared before it is refilled, so nothing from a previous tick leaks
    /// through.
    ///
    /// # Errors
    ///
    /// With [`AbsentPositions::Reject`], fails on the first absent positions
    /// slice within the paired range. The output is not touched in that case.
    pub fn evaluate_into(
        &self,
        input: &ZipValuesInput,
        output: &mut Spread<Spread<String>>,
    ) -> Result<(), ZipValuesError> {
        let ZipValuesInput { positions, index } = input;
        let count = positions.slice_count().min(index.slice_count());

        if positions.slice_count() != index.slice_count() {
            log::debug!(
                "zipping {count} slices, dropping the rest of {} positions and {} indices",
                positions.slice_count(),
                index.slice_count(),
            );
        }

        let first_absent = positions.iter().take(count).position(Option::is_none);
        if let (AbsentPositions::Reject, Some(slice)) =
            (self.config.absent_positions, first_absent)
        {
            return Err(ZipValuesError::AbsentPositions { slice });
        }

        output.set_slice_count(count);
        for (slot, (values, index)) in output.iter_mut().zip(positions.iter().zip(index)) {
            slot.clear();
            if let Some(values) = values {
                slot.extend(values.iter().map(|value| value.to_decimal_string()));
            }
            slot.push(index.to_decimal_string());
        }

        log::trace!("zipped {count} slices");
        Ok(())
    }
}

impl Node for ZipValues {
    type Input = ZipValuesInput;
    type Output = Spread<Spread<String>>;
    type Error = ZipValuesError;

    fn evaluate(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let mut output = Spread::new();
        self.evaluate_into(&input, &mut output)?;
        Ok(output)
    }
}

impl Describe for ZipValues {
    fn info() -> NodeInfo {
        NodeInfo::new("ZipValues", "Value")
            .with_help("Zips each position slice with its index")
            .with_tags(&["spread", "zip", "string"])
            .with_pin(PinInfo::input("Positions", "Spread<Spread<f64>>"))
            .with_pin(PinInfo::input("Index", "Spread<i32>"))
            .with_pin(PinInfo::output("Output", "Spread<Spread<String>>"))
            .with_pin(PinInfo::import("Logger", "log::Log"))
    }
}
