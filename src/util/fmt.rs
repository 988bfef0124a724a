use std::fmt::{self, Debug, Formatter};

/// Formats a cloneable iterator as a list, allowing it to be used as a field with
/// [`DebugStruct`](fmt::DebugStruct).
pub(crate) struct Entries<I>(pub I);

impl<I> Debug for Entries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
