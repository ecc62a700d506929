use std::{error::Error as StdError, marker::PhantomData};

use super::Node;

/// A wrapper that adapts a node by transforming its error type.
///
/// Used internally by `.map_err()`.
pub(crate) struct MappedErr<N, ErrorMap, NewError> {
    node: N,
    error_map: ErrorMap,
    _marker: PhantomData<fn() -> NewError>,
}

impl<N, ErrorMap, NewError> MappedErr<N, ErrorMap, NewError> {
    pub(crate) fn new(node: N, error_map: ErrorMap) -> Self {
        Self {
            node,
            error_map,
            _marker: PhantomData,
        }
    }
}

impl<N, ErrorMap, NewError> Node for MappedErr<N, ErrorMap, NewError>
where
    N: Node,
    ErrorMap: Fn(N::Error) -> NewError,
    NewError: StdError + Send + Sync + 'static,
{
    type Input = N::Input;
    type Output = N::Output;
    type Error = NewError;

    fn evaluate(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.node.evaluate(input).map_err(&self.error_map)
    }
}
