use crate::Node;

/// A wrapper that evaluates two nodes sequentially.
///
/// Internally used by `.chain()` to connect two compatible nodes.
///
/// For nodes to be compatible, the first node's output type must match the
/// second's input and both nodes must share the same error type.
pub(crate) struct Chain<A, B>
where
    A: Node,
    B: Node<Input = A::Output, Error = A::Error>,
{
    pub(crate) first: A,
    pub(crate) second: B,
}

impl<A, B> Node for Chain<A, B>
where
    A: Node,
    B: Node<Input = A::Output, Error = A::Error>,
{
    type Input = A::Input;
    type Output = B::Output;
    type Error = A::Error;

    /// Evaluates the first node and passes its output to the second.
    fn evaluate(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let output = self.first.evaluate(input)?;
        self.second.evaluate(output)
    }
}
