/*!
# Vertex Representation

We choose `Vertex = i64` since vertices carry caller-assigned identifiers that
need neither be contiguous nor start at zero. Graphs built from text files or
minor operations (`join_at_vertex` renumbers, `collapse_edge` deletes) quickly
end up with sparse identifier sets, so we do not index by vertex value anywhere
and instead keep explicit vertex stores in each representation.
*/

/// Vertices are arbitrary signed integer identifiers
pub type Vertex = i64;

/// Vertex counts (and degrees) are reported as `usize`
pub type NumVertices = usize;
