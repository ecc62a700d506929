use std::marker::PhantomData;

use super::Node;

/// A wrapper that adapts a node by transforming its input and output.
///
/// Used internally by `.map()` so a node can be wired to pins whose types
/// differ from its own.
pub(crate) struct Mapped<N, InputMap, OutputMap, In, Out> {
    node: N,
    input_map: InputMap,
    output_map: OutputMap,
    _marker: PhantomData<fn(In) -> Out>,
}

impl<N, InputMap, OutputMap, In, Out> Mapped<N, InputMap, OutputMap, In, Out> {
    pub(crate) fn new(node: N, input_map: InputMap, output_map: OutputMap) -> Self {
        Self {
            node,
            input_map,
            output_map,
            _marker: PhantomData,
        }
    }
}

impl<N, InputMap, OutputMap, In, Out> Node for Mapped<N, InputMap, OutputMap, In, Out>
where
    N: Node,
    InputMap: Fn(&In) -> N::Input,
    OutputMap: Fn(In, N::Output) -> Out,
{
    type Input = In;
    type Output = Out;
    type Error = N::Error;

    /// Evaluates the wrapped node with a transformed input, then hands the
    /// original input and the node's output to the output map.
    fn evaluate(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let mapped_input = (self.input_map)(&input);
        let output = self.node.evaluate(mapped_input)?;
        Ok((self.output_map)(input, output))
    }
}
