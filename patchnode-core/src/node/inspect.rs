use super::Node;

/// Observes a node's input and successful output.
///
/// Used internally by `.inspect()`.
pub(crate) struct Inspect<N, OnInput, OnOutput> {
    pub(crate) node: N,
    pub(crate) on_input: OnInput,
    pub(crate) on_output: OnOutput,
}

impl<N, OnInput, OnOutput> Node for Inspect<N, OnInput, OnOutput>
where
    N: Node,
    OnInput: Fn(&N::Input),
    OnOutput: Fn(&N::Output),
{
    type Input = N::Input;
    type Output = N::Output;
    type Error = N::Error;

    fn evaluate(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (self.on_input)(&input);
        let output = self.node.evaluate(input)?;
        (self.on_output)(&output);
        Ok(output)
    }
}
