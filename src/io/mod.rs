/*!
# IO

Utilities for reading and writing graphs as whitespace pair lists, the only
persistence format of this crate.

A pair list carries one edge per line as two whitespace-separated integers.
There is no header; lines that are not exactly two integer tokens are ignored
on input. Reading therefore cannot fail on malformed content, only on IO
errors, and [`PairListRead::read_pair_list_file`] degrades even those to an
empty graph for callers that treat a missing file as a graph with no data.

All readers and writers are generic over the target representation through
the [`crate::ops`] contract.
*/

pub mod pair_list;

pub use pair_list::*;
