/*!
# IO

Utilities for reading and writing graphs in the line-oriented
**adjacency-description** format:

```text
key:comma,separated,neighbor,list
```

One line per vertex; the part before the first `:` is the key, the part after
it is the ordered neighbor-key list. Neighbor keys may reference vertices that
no line defines — the graph tolerates dangling references. Keys must be unique
across lines.

[`AdjacencyReader`] parses this format into a [`GraphDescription`] (the three
parallel construction inputs minus the payloads, which the format does not
carry), and [`AdjacencyWriter`] renders a graph back into it.
*/

mod adjacency;

pub use adjacency::*;

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;
