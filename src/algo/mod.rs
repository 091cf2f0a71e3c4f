/*!
# Graph Algorithms

Traversal and analysis algorithms built on top of the graph representations
in this crate. All algorithms are re-exported at the top level of this
module:
```rust
use lgraphs::algo::*;
```
Where possible, algorithms are provided as **iterators**, making it easy to
consume results lazily — the iterator consumer plays the role of the visit
observer.

Every entry point validates its start node and degrades to an empty or
sentinel result on out-of-range input; none of the algorithms mutate the
graph they run on.
*/

mod connectivity;
mod traversal;

use crate::{prelude::*, utils::*};

pub use connectivity::*;
pub use traversal::*;
