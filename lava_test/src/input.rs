//! Contains the [`Input`] trait implemented by the values that property based tests generate.
//!
//! A generated value renders itself as Lava source text through [`std::fmt::Display`]. Once that
//! text has been scanned, the value checks the produced tokens against what it rendered.

use proptest::{
    prop_assert_eq,
    test_runner::{TestCaseError, TestCaseResult},
};

/// Represents a generated value that knows which output its rendered source must produce.
pub trait Input<Output> {
    /// Verifies that the given output is what this input rendered.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: the output disagrees with the input.
    fn assert(self, output: Output) -> TestCaseResult;
}

/// Checks a sequence of inputs against the sequence of outputs, pairwise and in order. A failure
/// names the position of the first output that disagrees.
impl<T, U> Input<&[T]> for &[U]
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &[T]) -> TestCaseResult {
        prop_assert_eq!(
            self.len(),
            output.len(),
            "the number of outputs differs from the number of inputs"
        );

        for (position, (input, output)) in self.iter().zip(output).enumerate() {
            input.assert(output).map_err(|error| match error {
                TestCaseError::Fail(reason) => {
                    TestCaseError::fail(format!("output #{position} disagrees: {reason}"))
                }
                rejection @ TestCaseError::Reject(_) => rejection,
            })?;
        }

        Ok(())
    }
}
