mod chain;
mod inspect;
mod mapped;
mod mapped_err;

/// The core trait for defining nodes in Patchnode.
///
/// A `Node` is the evaluation callback a patching host invokes once per tick:
/// it takes a snapshot of its input pins and produces its output pins.
///
/// ## Implementing `Node`
///
/// To define a `Node`, implement the [`evaluate()`] method, which takes an
/// input and returns either an output or an error. Nodes must be
/// deterministic and keep no state between calls, so a host can evaluate
/// independent nodes in any order.
///
/// ## Connecting Nodes
///
/// Nodes can be connected sequentially using [`Node::chain()`]:
/// - The first node's output type must match the second's input type.
/// - Both nodes must use the same error type.
///
/// ## Adapting Nodes
///
/// Nodes can be customized with:
/// - [`Node::map()`] – Modify inputs and outputs.
/// - [`Node::map_err()`] – Transform error types.
/// - [`Node::inspect()`] – Observe evaluations without changing behavior.
///
/// [`evaluate()`]: Node::evaluate
pub trait Node {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the node with the given input and returns a result.
    ///
    /// This is the only method required when implementing `Node`.
    ///
    /// # Errors
    ///
    /// Each node defines its own `Error` type, allowing it to determine what
    /// constitutes invalid input within its domain.
    fn evaluate(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;

    /// Chains this node with another.
    ///
    /// # Returns
    ///
    /// A new node that first evaluates `self`, then passes its output to `next`.
    ///
    /// # Example
    /// ```
    /// use std::convert::Infallible;
    /// use patchnode_core::{Node, Spread};
    ///
    /// struct Double;
    /// impl Node for Double {
    ///     type Input = Spread<i32>;
    ///     type Output = Spread<i32>;
    ///     type Error = Infallible;
    ///
    ///     fn evaluate(&self, input: Spread<i32>) -> Result<Spread<i32>, Self::Error> {
    ///         Ok(input.into_iter().map(|x| x * 2).collect())
    ///     }
    /// }
    ///
    /// struct Count;
    /// impl Node for Count {
    ///     type Input = Spread<i32>;
    ///     type Output = usize;
    ///     type Error = Infallible;
    ///
    ///     fn evaluate(&self, input: Spread<i32>) -> Result<usize, Self::Error> {
    ///         Ok(input.slice_count())
    ///     }
    /// }
    ///
    /// let chain = Double.chain(Count);
    /// assert_eq!(chain.evaluate(Spread::from(vec![1, 2, 3])).unwrap(), 3);
    /// ```
    fn chain<Next>(
        self,
        next: Next,
    ) -> impl Node<Input = Self::Input, Output = Next::Output, Error = Self::Error>
    where
        Self: Sized,
        Next: Node<Input = Self::Output, Error = Self::Error>,
    {
        chain::Chain {
            first: self,
            second: next,
        }
    }

    /// Transforms this node's input and output types.
    ///
    /// # Parameters
    ///
    /// - `input_map`: Extracts this node's input from another type.
    /// - `output_map`: Receives the original input and this node's output and
    ///   builds the desired output.
    ///
    /// # Returns
    ///
    /// A new node with transformed input and output, keeping the same error type.
    ///
    /// # Example
    ///
    /// ```
    /// use std::convert::Infallible;
    /// use patchnode_core::Node;
    ///
    /// struct Offset {
    ///     by: i32,
    /// }
    ///
    /// impl Node for Offset {
    ///     type Input = i32;
    ///     type Output = i32;
    ///     type Error = Infallible;
    ///
    ///     fn evaluate(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
    ///         Ok(input + self.by)
    ///     }
    /// }
    ///
    /// struct Pins {
    ///     value: i32,
    ///     label: &'static str,
    /// }
    ///
    /// let labelled = Offset { by: 5 }.map(
    ///     |&Pins { value, .. }| value,
    ///     |Pins { label, .. }, output| format!("{label}: {output}"),
    /// );
    ///
    /// let output = labelled.evaluate(Pins { value: 3, label: "x" });
    /// assert_eq!(output.unwrap(), "x: 8");
    /// ```
    fn map<InputMap, OutputMap, In, Out>(
        self,
        input_map: InputMap,
        output_map: OutputMap,
    ) -> impl Node<Input = In, Output = Out, Error = Self::Error>
    where
        Self: Sized,
        InputMap: Fn(&In) -> Self::Input,
        OutputMap: Fn(In, Self::Output) -> Out,
    {
        mapped::Mapped::new(self, input_map, output_map)
    }

    /// Transforms this node's error into a different type.
    ///
    /// # Returns
    ///
    /// A new node with the same input and output types but a transformed error type.
    fn map_err<ErrorMap, NewError>(
        self,
        error_map: ErrorMap,
    ) -> impl Node<Input = Self::Input, Output = Self::Output, Error = NewError>
    where
        Self: Sized,
        ErrorMap: Fn(Self::Error) -> NewError,
        NewError: std::error::Error + Send + Sync + 'static,
    {
        mapped_err::MappedErr::new(self, error_map)
    }

    /// Observes inputs and successful outputs without modifying behavior.
    ///
    /// Hosts use this to attach a diagnostic sink to a node. The handlers
    /// never influence the result.
    ///
    /// # Parameters
    ///
    /// - `on_input`: Called before evaluation with the input.
    /// - `on_output`: Called after a successful evaluation with the output.
    ///
    /// # Example
    ///
    /// ```
    /// use std::convert::Infallible;
    /// use patchnode_core::Node;
    ///
    /// struct Negate;
    ///
    /// impl Node for Negate {
    ///     type Input = f64;
    ///     type Output = f64;
    ///     type Error = Infallible;
    ///
    ///     fn evaluate(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
    ///         Ok(-input)
    ///     }
    /// }
    ///
    /// let logged = Negate.inspect(
    ///     |input| println!("Received: {input:?}"),
    ///     |output| println!("Produced: {output:?}"),
    /// );
    ///
    /// assert_eq!(logged.evaluate(2.5).unwrap(), -2.5);
    /// ```
    fn inspect<OnInput, OnOutput>(
        self,
        on_input: OnInput,
        on_output: OnOutput,
    ) -> impl Node<Input = Self::Input, Output = Self::Output, Error = Self::Error>
    where
        Self: Sized,
        OnInput: Fn(&Self::Input),
        OnOutput: Fn(&Self::Output),
    {
        inspect::Inspect {
            node: self,
            on_input,
            on_output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        cell::RefCell,
        convert::Infallible,
        error::Error as StdError,
        fmt,
    };

    use crate::Spread;

    struct Offset {
        by: i32,
    }

    impl Node for Offset {
        type Input = i32;
        type Output = i32;
        type Error = Infallible;

        fn evaluate(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input + self.by)
        }
    }

    struct Doubler;

    impl Node for Doubler {
        type Input = i32;
        type Output = i32;
        type Error = Infallible;

        fn evaluate(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input * 2)
        }
    }

    #[derive(Debug, PartialEq)]
    struct EmptySpread;

    impl fmt::Display for EmptySpread {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "spread is empty")
        }
    }

    impl StdError for EmptySpread {}

    /// Fails on empty input, otherwise returns the first slice.
    struct First;

    impl Node for First {
        type Input = Spread<i32>;
        type Output = i32;
        type Error = EmptySpread;

        fn evaluate(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            input.get(0).copied().ok_or(EmptySpread)
        }
    }

    #[test]
    fn chain_nodes() {
        let chain = Offset { by: 1 }.chain(Doubler).chain(Offset { by: 10 });

        assert_eq!(chain.evaluate(2), Ok(16));
        assert_eq!(chain.evaluate(20), Ok(52));
    }

    #[test]
    fn map_node_input_and_output() {
        struct Pins {
            label: String,
            value: i32,
        }

        #[derive(Debug, PartialEq)]
        struct Labelled {
            label: String,
            started_with: i32,
            ended_with: i32,
        }

        let mapped = Offset { by: 3 }.map(
            |&Pins { value, .. }| value,
            |pins, output| Labelled {
                label: pins.label,
                started_with: pins.value,
                ended_with: output,
            },
        );

        let output = mapped
            .evaluate(Pins {
                label: "slice".into(),
                value: 4,
            })
            .unwrap();

        assert_eq!(
            output,
            Labelled {
                label: "slice".into(),
                started_with: 4,
                ended_with: 7,
            }
        );
    }

    #[test]
    fn map_err_transforms_node_error() {
        #[derive(Debug)]
        struct Wrapped(String);

        impl fmt::Display for Wrapped {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl StdError for Wrapped {}

        let wrapped = First.map_err(|err| Wrapped(format!("First failed with: {err}")));

        let result = wrapped.evaluate(Spread::new());

        assert_eq!(
            result.unwrap_err().to_string(),
            "First failed with: spread is empty"
        );
    }

    #[test]
    fn inspect_sees_inputs_and_successful_outputs() {
        let inputs = RefCell::new(Vec::new());
        let outputs = RefCell::new(Vec::new());

        let inspected = First.inspect(
            |input| inputs.borrow_mut().push(input.slice_count()),
            |output| outputs.borrow_mut().push(*output),
        );

        assert_eq!(inspected.evaluate(Spread::from(vec![7, 8])), Ok(7));
        assert_eq!(inspected.evaluate(Spread::new()), Err(EmptySpread));

        assert_eq!(*inputs.borrow(), vec![2, 0]);
        assert_eq!(*outputs.borrow(), vec![7]);
    }
}
